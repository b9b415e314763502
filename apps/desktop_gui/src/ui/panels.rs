//! Detail panel for the selected layer.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Stroke};
use shared::domain::IconRef;
use view_core::Selection;

use crate::ui::theme::{lighten_color, ModePalette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Close,
}

pub fn layer_position_label(position: usize, total: usize) -> String {
    format!("Layer {position}/{total}")
}

pub fn icon_glyph(icon: IconRef) -> &'static str {
    match icon.as_str() {
        "brick-wall" => "🧱",
        "zap" => "⚡",
        "construction" => "🚧",
        "paintbrush" => "🖌",
        "siren" => "🚨",
        "eye" => "👁",
        _ => "■",
    }
}

fn section_label(ui: &mut egui::Ui, text: &str, bar: Color32, palette: &ModePalette) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(4.0, 18.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, CornerRadius::same(2), bar);
        ui.label(
            RichText::new(text.to_ascii_uppercase())
                .small()
                .strong()
                .color(palette.text_muted),
        );
    });
}

fn narrative_card(
    ui: &mut egui::Ui,
    kicker: &str,
    heading: &str,
    body: &str,
    fill: Color32,
    border: Color32,
    palette: &ModePalette,
) {
    egui::Frame::default()
        .fill(fill)
        .stroke(Stroke::new(2.0, border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(kicker.to_ascii_uppercase())
                    .small()
                    .strong()
                    .color(palette.accent),
            );
            ui.add_space(4.0);
            ui.label(RichText::new(heading).size(17.0).strong().color(palette.text_strong));
            ui.add_space(6.0);
            ui.label(RichText::new(body).size(14.0).color(palette.text_strong));
        });
}

/// Renders the panel body. `reset_scroll` snaps back to the top, used when a
/// different layer was selected since the previous frame.
pub fn show_info_panel(
    ui: &mut egui::Ui,
    selection: &Selection,
    position_label: &str,
    palette: &ModePalette,
    reset_scroll: bool,
) -> PanelAction {
    let mut action = PanelAction::None;
    let layer = &selection.layer;

    ui.horizontal(|ui| {
        egui::Frame::default()
            .fill(palette.accent_soft)
            .corner_radius(CornerRadius::same(14))
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.label(RichText::new(icon_glyph(layer.icon)).size(28.0));
            });
        ui.vertical(|ui| {
            ui.label(
                RichText::new(layer.title)
                    .size(28.0)
                    .strong()
                    .color(palette.text_strong),
            );
            ui.label(
                RichText::new(position_label.to_ascii_uppercase())
                    .small()
                    .strong()
                    .color(palette.text_muted),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui
                .button(RichText::new("✕").size(18.0))
                .on_hover_text("Close")
                .clicked()
            {
                action = PanelAction::Close;
            }
        });
    });
    ui.separator();

    let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
    if reset_scroll {
        scroll = scroll.vertical_scroll_offset(0.0);
    }

    scroll.show(ui, |ui| {
        ui.add_space(8.0);
        section_label(ui, "The Analogy", palette.accent, palette);
        ui.add_space(6.0);
        ui.label(
            RichText::new(layer.analogy)
                .size(20.0)
                .strong()
                .color(palette.text_strong),
        );
        ui.label(RichText::new(layer.software_title).italics().color(palette.text_muted));

        if let Some(note) = layer.historical_note {
            ui.add_space(10.0);
            egui::Frame::default()
                .fill(Color32::from_rgb(248, 250, 252))
                .stroke(Stroke::new(1.0, Color32::from_rgb(226, 232, 240)))
                .corner_radius(CornerRadius::same(10))
                .inner_margin(Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new("🕓").color(palette.text_muted));
                        ui.label(RichText::new(note).italics().color(palette.text_strong));
                    });
                });
        }

        ui.add_space(14.0);
        ui.separator();
        ui.add_space(14.0);

        let mode = selection.mode;
        let narrative = selection.narrative();
        section_label(
            ui,
            mode.section_heading(),
            Color32::from_rgb(30, 41, 59),
            palette,
        );
        ui.add_space(10.0);

        let (lead_kicker, lead_heading) = mode.lead_labels();
        let lead_fill = lighten_color(palette.accent_soft, 0.5);
        narrative_card(
            ui,
            lead_kicker,
            lead_heading,
            narrative.lead,
            lead_fill,
            lighten_color(palette.accent, 0.6),
            palette,
        );
        ui.add_space(12.0);

        let (follow_kicker, follow_heading) = mode.follow_up_labels();
        narrative_card(
            ui,
            follow_kicker,
            follow_heading,
            narrative.follow_up,
            palette.panel_bg,
            Color32::from_rgb(226, 232, 240),
            palette,
        );
        ui.add_space(24.0);
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn position_label_matches_panel_header() {
        assert_eq!(layer_position_label(3, 6), "Layer 3/6");
    }

    #[test]
    fn every_catalog_icon_has_a_glyph() {
        for layer in Catalog::standard().all_layers() {
            assert_ne!(icon_glyph(layer.icon), "■", "no glyph for {}", layer.icon);
        }
        assert_eq!(icon_glyph(IconRef("unknown")), "■");
    }
}
