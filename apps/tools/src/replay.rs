//! Interaction scripts: `mode:<mode>`, `toggle`, `select:<id>`, `close`.

use std::{fmt, io::Write};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use shared::domain::Mode;
use view_core::{PanelState, Selection, ViewStateController};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    SetMode(Mode),
    Toggle,
    Select(String),
    Close,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::SetMode(mode) => write!(f, "mode:{mode}"),
            Step::Toggle => f.write_str("toggle"),
            Step::Select(id) => write!(f, "select:{id}"),
            Step::Close => f.write_str("close"),
        }
    }
}

pub fn parse_step(raw: &str) -> Result<Step> {
    let raw = raw.trim();
    match raw.split_once(':') {
        Some(("mode", mode)) => Ok(Step::SetMode(mode.parse()?)),
        Some(("select", id)) if !id.is_empty() => Ok(Step::Select(id.to_string())),
        None if raw == "toggle" => Ok(Step::Toggle),
        None if raw == "close" => Ok(Step::Close),
        _ => bail!("unrecognized step '{raw}' (expected mode:<mode>, toggle, select:<id> or close)"),
    }
}

#[derive(Debug, Serialize)]
struct ReplayRecord<'a> {
    step: String,
    panel: PanelState,
    selection: &'a Selection,
}

pub fn describe(panel: PanelState, selection: &Selection) -> String {
    let panel = match panel {
        PanelState::Closed => "closed".to_string(),
        PanelState::Open(id) => format!("open({id})"),
    };
    format!(
        "mode={} panel={panel} active={}",
        selection.mode, selection.layer.id
    )
}

/// Applies `steps` in order to `controller`, writing the resulting selection
/// after each. Stops at the first rejected step.
pub fn run_replay(
    controller: &mut ViewStateController<'_>,
    steps: &[Step],
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    for (index, step) in steps.iter().enumerate() {
        match step {
            Step::SetMode(mode) => controller.set_mode(*mode),
            Step::Toggle => controller.toggle_mode(),
            Step::Select(id) => controller
                .select_layer(id)
                .with_context(|| format!("step {} ({step}) failed", index + 1))?,
            Step::Close => controller.close_panel(),
        }

        let selection = controller.current_selection();
        let panel = controller.panel_state();
        if json {
            let record = ReplayRecord {
                step: step.to_string(),
                panel,
                selection: &selection,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            writeln!(out, "{step:<24} {}", describe(panel, &selection))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(raw: &[&str]) -> Vec<Step> {
        raw.iter()
            .map(|step| parse_step(step).expect("valid step"))
            .collect()
    }

    #[test]
    fn parses_each_step_kind() {
        assert_eq!(
            parse_step("mode:industrial").expect("mode"),
            Step::SetMode(Mode::Target)
        );
        assert_eq!(parse_step("toggle").expect("toggle"), Step::Toggle);
        assert_eq!(
            parse_step(" select:facade ").expect("select"),
            Step::Select("facade".to_string())
        );
        assert_eq!(parse_step("close").expect("close"), Step::Close);
    }

    #[test]
    fn rejects_malformed_steps() {
        assert!(parse_step("mode:sideways").is_err());
        assert!(parse_step("select:").is_err());
        assert!(parse_step("open").is_err());
        assert!(parse_step("close:now").is_err());
    }

    #[test]
    fn replays_reselect_sequence() {
        let mut controller = ViewStateController::default();
        let mut out = Vec::new();
        run_replay(
            &mut controller,
            &steps(&[
                "select:foundation",
                "select:structure",
                "close",
                "select:structure",
            ]),
            false,
            &mut out,
        )
        .expect("replay");

        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("mode=baseline panel=open(foundation) active=foundation"));
        assert!(lines[1].ends_with("panel=open(structure) active=structure"));
        assert!(lines[2].ends_with("panel=closed active=structure"));
        assert!(lines[3].ends_with("panel=open(structure) active=structure"));
    }

    #[test]
    fn stops_at_unknown_layer_after_printing_earlier_steps() {
        let mut controller = ViewStateController::default();
        let mut out = Vec::new();
        let err = run_replay(
            &mut controller,
            &steps(&["toggle", "select:attic", "close"]),
            false,
            &mut out,
        )
        .expect_err("unknown layer");

        assert_eq!(format!("{err:#}"), "step 2 (select:attic) failed: unknown layer 'attic'");
        assert_eq!(String::from_utf8(out).expect("utf8").lines().count(), 1);
        assert_eq!(controller.state().mode(), Mode::Target);
        assert!(!controller.state().panel_open());
    }

    #[test]
    fn json_records_carry_panel_and_layer() {
        let mut controller = ViewStateController::default();
        let mut out = Vec::new();
        run_replay(
            &mut controller,
            &steps(&["mode:target", "select:safety"]),
            true,
            &mut out,
        )
        .expect("replay");

        let text = String::from_utf8(out).expect("utf8");
        let last: serde_json::Value =
            serde_json::from_str(text.lines().last().expect("line")).expect("json");
        assert_eq!(last["step"], "select:safety");
        assert_eq!(last["panel"]["state"], "open");
        assert_eq!(last["panel"]["layer_id"], "safety");
        assert_eq!(last["selection"]["mode"], "target");
        assert_eq!(last["selection"]["layer"]["title"], "Safety & Standards");
        assert_eq!(last["selection"]["panel_open"], true);
    }
}
