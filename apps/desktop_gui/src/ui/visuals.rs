//! Floor rendering. The catalog only carries opaque visual handles; this
//! module owns the mapping from handle to what gets painted.

use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke};
use shared::domain::{Mode, VisualHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorPattern {
    Stilts,
    Rebar,
    TangledWires,
    Conduit,
    CrossBraces,
    Trusses,
    PaintedFront,
    CurtainWall,
    NoPermit,
    Sprinklers,
    CrackedCore,
    StatusBadge,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorVisual {
    pub fill: Color32,
    pub detail: Color32,
    pub pattern: FloorPattern,
    pub caption: Option<&'static str>,
}

impl FloorVisual {
    const fn new(
        fill: Color32,
        detail: Color32,
        pattern: FloorPattern,
        caption: Option<&'static str>,
    ) -> Self {
        Self {
            fill,
            detail,
            pattern,
            caption,
        }
    }
}

const WOOD_DARK: Color32 = Color32::from_rgb(39, 28, 25);
const WOOD: Color32 = Color32::from_rgb(93, 64, 55);
const SLATE: Color32 = Color32::from_rgb(100, 116, 139);

pub fn floor_visual(handle: VisualHandle) -> FloorVisual {
    match handle.as_str() {
        "foundation/rotten-stilts" => FloorVisual::new(
            Color32::from_rgb(62, 39, 35),
            WOOD_DARK,
            FloorPattern::Stilts,
            None,
        ),
        "foundation/reinforced-concrete" => FloorVisual::new(
            Color32::from_rgb(51, 65, 85),
            Color32::from_rgb(148, 163, 184),
            FloorPattern::Rebar,
            Some("REINFORCED CONCRETE"),
        ),
        "utilities/tangled-wiring" => FloorVisual::new(
            Color32::from_rgb(78, 52, 46),
            Color32::from_rgb(239, 68, 68),
            FloorPattern::TangledWires,
            None,
        ),
        "utilities/clean-conduit" => FloorVisual::new(
            Color32::from_rgb(241, 245, 249),
            Color32::from_rgb(59, 130, 246),
            FloorPattern::Conduit,
            None,
        ),
        "structure/wooden-framing" => {
            FloorVisual::new(WOOD, WOOD_DARK, FloorPattern::CrossBraces, None)
        }
        "structure/steel-trusses" => FloorVisual::new(
            Color32::from_rgb(226, 232, 240),
            SLATE,
            FloorPattern::Trusses,
            None,
        ),
        "facade/painted-front" => FloorVisual::new(
            Color32::from_rgb(186, 230, 253),
            Color32::from_rgb(250, 204, 21),
            FloorPattern::PaintedFront,
            Some("MODERN UI"),
        ),
        "facade/glass-curtain-wall" => FloorVisual::new(
            Color32::from_rgb(224, 242, 254),
            Color32::from_rgb(203, 213, 225),
            FloorPattern::CurtainWall,
            None,
        ),
        "safety/no-permit" => FloorVisual::new(
            Color32::from_rgb(255, 243, 224),
            Color32::from_rgb(248, 113, 113),
            FloorPattern::NoPermit,
            Some("NO PERMIT"),
        ),
        "safety/fire-suppression" => FloorVisual::new(
            Color32::WHITE,
            Color32::from_rgb(239, 68, 68),
            FloorPattern::Sprinklers,
            None,
        ),
        "reality_check/unstable-core" => FloorVisual::new(
            Color32::WHITE,
            Color32::from_rgb(220, 38, 38),
            FloorPattern::CrackedCore,
            Some("UNSTABLE CORE"),
        ),
        "reality_check/optimized-core" => FloorVisual::new(
            Color32::from_rgb(236, 253, 245),
            Color32::from_rgb(21, 128, 61),
            FloorPattern::StatusBadge,
            Some("OPTIMIZED"),
        ),
        other => {
            tracing::debug!(handle = other, "no floor visual registered; using plain floor");
            FloorVisual::new(Color32::LIGHT_GRAY, SLATE, FloorPattern::Plain, None)
        }
    }
}

const BASELINE_OFFSETS: [f32; 6] = [4.0, -8.0, 8.0, 0.0, -4.0, 4.0];

/// Horizontal nudge for the floor at `stack_index` (0 = top). Baseline floors
/// sit crooked; Target floors are plumb.
pub fn floor_offset(mode: Mode, stack_index: usize) -> f32 {
    match mode {
        Mode::Baseline => BASELINE_OFFSETS[stack_index % BASELINE_OFFSETS.len()],
        Mode::Target => 0.0,
    }
}

pub fn floor_width_factor(mode: Mode) -> f32 {
    match mode {
        Mode::Baseline => 0.98,
        Mode::Target => 1.0,
    }
}

pub fn paint_floor(painter: &egui::Painter, rect: Rect, visual: &FloorVisual) {
    painter.rect_filled(rect, CornerRadius::same(2), visual.fill);

    let thin = Stroke::new(1.0, visual.detail);
    let thick = Stroke::new(3.0, visual.detail);
    let at = |fx: f32, fy: f32| -> Pos2 {
        Pos2::new(
            rect.left() + rect.width() * fx,
            rect.top() + rect.height() * fy,
        )
    };

    match visual.pattern {
        FloorPattern::Stilts => {
            for fx in [0.2, 0.5, 0.8] {
                painter.line_segment([at(fx - 0.02, 0.0), at(fx + 0.02, 1.0)], thick);
            }
            painter.rect_filled(
                Rect::from_min_max(at(0.0, 0.7), at(1.0, 1.0)),
                CornerRadius::ZERO,
                Color32::from_rgba_unmultiplied(26, 18, 11, 200),
            );
        }
        FloorPattern::Rebar => {
            let steps = 12;
            for i in 1..steps {
                let f = i as f32 / steps as f32;
                painter.line_segment([at(f, 0.0), at(f, 1.0)], thin);
            }
            for fy in [0.33, 0.66] {
                painter.line_segment([at(0.0, fy), at(1.0, fy)], thin);
            }
        }
        FloorPattern::TangledWires => {
            let points: Vec<Pos2> = [0.5, 0.1, 0.9, 0.3, 0.7, 0.2, 0.8, 0.5]
                .iter()
                .enumerate()
                .map(|(i, fy)| at(i as f32 / 7.0, *fy))
                .collect();
            painter.line(points, thin);
            painter.line_segment(
                [at(0.0, 0.25), at(1.0, 0.5)],
                Stroke::new(1.0, Color32::from_rgb(234, 179, 8)),
            );
        }
        FloorPattern::Conduit => {
            for (fy, color) in [
                (0.4, visual.detail),
                (0.6, Color32::from_rgb(34, 197, 94)),
            ] {
                painter.line_segment([at(0.08, fy), at(0.8, fy)], Stroke::new(4.0, color));
            }
            painter.rect_filled(
                Rect::from_min_max(at(0.85, 0.3), at(0.92, 0.7)),
                CornerRadius::same(2),
                Color32::from_rgb(203, 213, 225),
            );
        }
        FloorPattern::CrossBraces => {
            painter.line_segment([at(0.0, 0.0), at(1.0, 1.0)], thick);
            painter.line_segment([at(0.0, 1.0), at(1.0, 0.0)], thick);
            painter.rect_filled(
                Rect::from_center_size(rect.center(), egui::vec2(14.0, 14.0)),
                CornerRadius::ZERO,
                WOOD_DARK,
            );
        }
        FloorPattern::Trusses => {
            painter.line_segment([at(0.0, 0.0), at(1.0, 1.0)], thin);
            painter.line_segment([at(0.0, 1.0), at(1.0, 0.0)], thin);
            painter.line_segment([at(0.5, 0.0), at(0.5, 1.0)], thin);
            painter.circle_filled(rect.center(), 3.0, visual.detail);
        }
        FloorPattern::PaintedFront => {
            painter.rect_stroke(
                rect.shrink(2.0),
                CornerRadius::ZERO,
                Stroke::new(3.0, visual.detail),
                egui::StrokeKind::Inside,
            );
        }
        FloorPattern::CurtainWall => {
            for i in 1..4 {
                let f = i as f32 / 4.0;
                painter.line_segment([at(f, 0.0), at(f, 1.0)], Stroke::new(2.0, visual.detail));
            }
            painter.line_segment([at(0.0, 0.5), at(1.0, 0.5)], Stroke::new(2.0, visual.detail));
        }
        FloorPattern::NoPermit => {
            painter.rect_stroke(
                rect.shrink(3.0),
                CornerRadius::same(2),
                Stroke::new(1.5, visual.detail),
                egui::StrokeKind::Inside,
            );
        }
        FloorPattern::Sprinklers => {
            painter.line_segment([at(0.0, 0.08), at(1.0, 0.08)], thick);
            for fx in [0.25, 0.75] {
                painter.line_segment([at(fx, 0.08), at(fx, 0.25)], thin);
            }
            painter.circle_filled(at(0.15, 0.6), 6.0, Color32::from_rgb(34, 197, 94));
        }
        FloorPattern::CrackedCore => {
            painter.rect_stroke(
                rect.shrink(4.0),
                CornerRadius::ZERO,
                Stroke::new(4.0, WOOD_DARK),
                egui::StrokeKind::Inside,
            );
            painter.line_segment([at(0.5, 0.0), at(0.56, 0.45)], thin);
        }
        FloorPattern::StatusBadge => {
            painter.rect_stroke(
                Rect::from_center_size(
                    rect.center(),
                    egui::vec2(rect.width() * 0.6, rect.height() * 0.6),
                ),
                CornerRadius::same(6),
                Stroke::new(1.0, visual.detail),
                egui::StrokeKind::Inside,
            );
        }
        FloorPattern::Plain => {}
    }

    if let Some(caption) = visual.caption {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            caption,
            FontId::monospace(10.0),
            visual.detail,
        );
    }
}
