use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::ModeParseError;

macro_rules! handle_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub &'static str);

        impl $name {
            pub fn as_str(&self) -> &'static str {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }
    };
}

handle_newtype!(LayerId);
handle_newtype!(IconRef);
handle_newtype!(VisualHandle);

/// Global narrative framing. `Baseline` is the chaotic present, `Target` the
/// disciplined future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Baseline,
    Target,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Baseline, Mode::Target];

    pub fn other(self) -> Self {
        match self {
            Mode::Baseline => Mode::Target,
            Mode::Target => Mode::Baseline,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Baseline => "baseline",
            Mode::Target => "target",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Mode::Baseline => "Current Reality (2026)",
            Mode::Target => "Future Standard",
        }
    }

    pub fn section_heading(self) -> &'static str {
        match self {
            Mode::Baseline => "The Current Crisis (2026)",
            Mode::Target => "The Future Standard (2050)",
        }
    }

    /// Kicker and heading above the lead statement column.
    pub fn lead_labels(self) -> (&'static str, &'static str) {
        match self {
            Mode::Baseline => ("The Problem", "Why it Burns"),
            Mode::Target => ("The Standard", "Fireproof Design"),
        }
    }

    /// Kicker and heading above the follow-up column.
    pub fn follow_up_labels(self) -> (&'static str, &'static str) {
        match self {
            Mode::Baseline => ("What Needs To Be Done", "The Action Plan"),
            Mode::Target => ("How We Got Here", "A Retrospective"),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "baseline" | "wild-west" | "current" => Ok(Mode::Baseline),
            "target" | "industrial" | "future" => Ok(Mode::Target),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaselineNarrative {
    pub problem_statement: &'static str,
    pub action_plan: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetNarrative {
    pub standard_statement: &'static str,
    pub retrospective: &'static str,
}

/// Mode-resolved panel copy: the lead statement and its follow-up column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeNarrative {
    pub mode: Mode,
    pub lead: &'static str,
    pub follow_up: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub id: LayerId,
    pub title: &'static str,
    pub icon: IconRef,
    pub analogy: &'static str,
    pub software_title: &'static str,
    pub historical_note: Option<&'static str>,
    pub baseline: BaselineNarrative,
    pub target: TargetNarrative,
    pub visual_baseline: VisualHandle,
    pub visual_target: VisualHandle,
}

impl Layer {
    pub fn narrative(&self, mode: Mode) -> ModeNarrative {
        match mode {
            Mode::Baseline => ModeNarrative {
                mode,
                lead: self.baseline.problem_statement,
                follow_up: self.baseline.action_plan,
            },
            Mode::Target => ModeNarrative {
                mode,
                lead: self.target.standard_statement,
                follow_up: self.target.retrospective,
            },
        }
    }

    pub fn visual(&self, mode: Mode) -> VisualHandle {
        match mode {
            Mode::Baseline => self.visual_baseline,
            Mode::Target => self.visual_target,
        }
    }
}
