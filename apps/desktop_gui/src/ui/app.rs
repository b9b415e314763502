use eframe::egui::{
    self, Align2, Color32, CornerRadius, FontId, Margin, Pos2, Rect, RichText, Stroke,
};
use shared::domain::{LayerId, Mode};
use view_core::{Selection, ViewStateController};

use crate::config::Settings;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::reducer::drain_events;
use crate::ui::panels::{layer_position_label, show_info_panel, PanelAction};
use crate::ui::theme::{palette_for, ModePalette};
use crate::ui::visuals::{floor_offset, floor_visual, floor_width_factor, paint_floor};

const HEADER_HEIGHT: f32 = 56.0;
const PANEL_WIDTH: f32 = 460.0;
const BUILDING_HEIGHT_SHARE: f32 = 0.7;
const BUILDING_MAX_HEIGHT: f32 = 700.0;
const MIN_FLOOR_HEIGHT: f32 = 40.0;

/// Full-width horizontal band spanning roof to base. Clicks inside it belong
/// to the building even when they miss a floor.
fn building_band(area: Rect, top: f32, bottom: f32) -> Rect {
    Rect::from_x_y_ranges(area.x_range(), top..=bottom)
}

fn is_sky_click(band: Rect, pointer: Option<Pos2>) -> bool {
    pointer.map_or(true, |pos| !band.contains(pos))
}

pub struct RebuildApp {
    controller: ViewStateController<'static>,
    settings: Settings,
    pending: Vec<UiEvent>,
    status: Option<UiError>,
    shown_layer: Option<LayerId>,
}

impl RebuildApp {
    pub fn new(settings: Settings, startup_error: Option<UiError>) -> Self {
        Self {
            controller: ViewStateController::default(),
            settings,
            pending: Vec::new(),
            status: startup_error,
            shown_layer: None,
        }
    }

    fn queue(&mut self, event: UiEvent) {
        self.pending.push(event);
    }

    fn show_header(&mut self, ctx: &egui::Context, mode: Mode, palette: &ModePalette) {
        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 235))
                    .stroke(Stroke::new(1.0, Color32::from_rgb(226, 232, 240)))
                    .inner_margin(Margin::symmetric(24, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    egui::Frame::default()
                        .fill(Color32::from_rgb(79, 70, 229))
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(Margin::symmetric(8, 6))
                        .show(ui, |ui| {
                            ui.label(RichText::new("Rb").strong().color(Color32::WHITE));
                        });
                    ui.vertical(|ui| {
                        ui.label(RichText::new("Re:Build").strong().color(palette.text_strong));
                        ui.label(
                            RichText::new("THE STATE OF SOFTWARE")
                                .small()
                                .color(palette.text_muted),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for option in Mode::ALL.iter().rev().copied() {
                            let active = option == mode;
                            let option_palette = palette_for(option);
                            let text = RichText::new(option.toggle_label()).strong().color(
                                if active {
                                    Color32::WHITE
                                } else {
                                    palette.text_muted
                                },
                            );
                            let fill = if active {
                                option_palette.accent
                            } else {
                                Color32::TRANSPARENT
                            };
                            if ui
                                .add(egui::Button::new(text).fill(fill).selected(active))
                                .clicked()
                            {
                                self.queue(UiEvent::SetMode(option));
                            }
                        }
                    });
                });
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let Some(status) = &self.status else {
            return;
        };
        let line = status.status_line();
        let mut dismissed = false;
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(line).color(Color32::from_rgb(185, 28, 28)));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    dismissed = ui.small_button("Dismiss").clicked();
                });
            });
        });
        if dismissed {
            self.status = None;
        }
    }

    fn show_side_panel(
        &mut self,
        ctx: &egui::Context,
        selection: &Selection,
        palette: &ModePalette,
    ) {
        let reset_scroll = self.shown_layer != Some(selection.layer.id);
        self.shown_layer = Some(selection.layer.id);

        let position_label = layer_position_label(
            self.controller.active_position(),
            self.controller.catalog().len(),
        );

        let action = egui::SidePanel::right("info_panel")
            .resizable(false)
            .exact_width(PANEL_WIDTH)
            .frame(
                egui::Frame::default()
                    .fill(palette.panel_bg)
                    .stroke(Stroke::new(1.0, Color32::from_rgb(226, 232, 240)))
                    .inner_margin(Margin::same(24)),
            )
            .show(ctx, |ui| {
                show_info_panel(ui, selection, &position_label, palette, reset_scroll)
            })
            .inner;

        if action == PanelAction::Close {
            self.queue(UiEvent::ClosePanel);
        }
    }

    fn show_building(
        &mut self,
        ctx: &egui::Context,
        selection: &Selection,
        palette: &ModePalette,
    ) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(palette.sky))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                let painter = ui.painter().clone();

                painter.rect_filled(
                    Rect::from_min_max(
                        egui::pos2(area.left(), area.center().y + area.height() * 0.25),
                        area.max,
                    ),
                    CornerRadius::ZERO,
                    palette.ground,
                );

                // registered before the floors so they sit on top of it
                let sky = ui.interact(area, ui.id().with("sky"), egui::Sense::click());

                let height = (area.height() * BUILDING_HEIGHT_SHARE).min(BUILDING_MAX_HEIGHT);
                let width = (height * 0.57).clamp(240.0, 400.0);
                let bottom = area.bottom() - area.height() * 0.1;
                let building = Rect::from_min_max(
                    egui::pos2(area.center().x - width / 2.0, bottom - height),
                    egui::pos2(area.center().x + width / 2.0, bottom),
                );

                let mode = selection.mode;
                let roof_height = building.height()
                    * match mode {
                        Mode::Baseline => 0.14,
                        Mode::Target => 0.12,
                    };
                let base_height = building.height() * 0.05;
                let floors = self.controller.catalog().len() as f32;
                let floor_height = ((building.height() - roof_height - base_height) / floors)
                    .max(MIN_FLOOR_HEIGHT);

                let roof = Rect::from_min_size(
                    building.min,
                    egui::vec2(building.width(), roof_height),
                );
                painter.rect_filled(
                    roof.expand2(egui::vec2(
                        if mode == Mode::Baseline { 6.0 } else { 0.0 },
                        0.0,
                    )),
                    CornerRadius {
                        nw: 10,
                        ne: 10,
                        sw: 0,
                        se: 0,
                    },
                    palette.roof,
                );

                let mut top = roof.bottom();
                let mut label: Option<(Rect, &'static str)> = None;
                for (stack_index, layer) in self.controller.catalog().top_down().enumerate() {
                    let floor_width = building.width() * floor_width_factor(mode);
                    let center_x = building.center().x + floor_offset(mode, stack_index);
                    let rect = Rect::from_min_size(
                        egui::pos2(center_x - floor_width / 2.0, top),
                        egui::vec2(floor_width, floor_height),
                    );
                    top += floor_height;

                    let response = ui
                        .interact(rect, ui.id().with(layer.id.as_str()), egui::Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if response.clicked() {
                        self.queue(UiEvent::SelectLayer(layer.id));
                    }

                    let active = layer.id == selection.layer.id;
                    let drawn = if active {
                        rect.expand(4.0)
                    } else if response.hovered() {
                        rect.expand(2.0)
                    } else {
                        rect
                    };
                    paint_floor(&painter, drawn, &floor_visual(layer.visual(mode)));
                    painter.rect_stroke(
                        drawn,
                        CornerRadius::same(2),
                        Stroke::new(1.5, palette.floor_border),
                        egui::StrokeKind::Inside,
                    );
                    if active {
                        painter.rect_stroke(
                            drawn,
                            CornerRadius::same(2),
                            Stroke::new(4.0, palette.highlight.gamma_multiply(0.6)),
                            egui::StrokeKind::Outside,
                        );
                    }
                    if active || response.hovered() {
                        label = Some((drawn, layer.title));
                    }
                }

                let base = Rect::from_min_size(
                    egui::pos2(building.left() - 20.0, top),
                    egui::vec2(building.width() + 40.0, base_height),
                );
                painter.rect_filled(base, CornerRadius::same(4), palette.base);

                let band = building_band(area, roof.top(), base.bottom());
                if sky.clicked() && is_sky_click(band, sky.interact_pointer_pos()) {
                    self.queue(UiEvent::ClosePanel);
                }

                if let Some((rect, title)) = label {
                    let anchor = egui::pos2(rect.right() + 24.0, rect.center().y);
                    painter.line_segment(
                        [egui::pos2(rect.right() + 4.0, anchor.y), anchor],
                        Stroke::new(1.0, palette.highlight),
                    );
                    painter.text(
                        egui::pos2(anchor.x + 6.0, anchor.y),
                        Align2::LEFT_CENTER,
                        title,
                        FontId::proportional(15.0),
                        palette.text_strong,
                    );
                }

                if self.settings.show_hint && !selection.panel_open {
                    painter.text(
                        egui::pos2(area.center().x, area.bottom() - 32.0),
                        Align2::CENTER_CENTER,
                        "Tap a layer to inspect",
                        FontId::proportional(13.0),
                        palette.text_muted,
                    );
                }
            });
    }
}

impl eframe::App for RebuildApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let selection = self.controller.current_selection();
        let palette = palette_for(selection.mode);

        self.show_header(ctx, selection.mode, &palette);
        self.show_status_bar(ctx);
        if selection.panel_open {
            self.show_side_panel(ctx, &selection, &palette);
        } else {
            self.shown_layer = None;
        }
        self.show_building(ctx, &selection, &palette);

        if let Some(err) = drain_events(&mut self.controller, &mut self.pending) {
            self.status = Some(err);
        }
        if self.controller.current_selection() != selection {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::from_min_max(egui::pos2(0.0, 56.0), egui::pos2(800.0, 856.0))
    }

    #[test]
    fn band_spans_full_width_between_roof_and_base() {
        let band = building_band(area(), 200.0, 700.0);
        assert_eq!(band.left(), 0.0);
        assert_eq!(band.right(), 800.0);
        assert_eq!(band.top(), 200.0);
        assert_eq!(band.bottom(), 700.0);
    }

    #[test]
    fn clicks_on_roof_base_or_beside_floors_stay_with_the_building() {
        let band = building_band(area(), 200.0, 700.0);
        // roof
        assert!(!is_sky_click(band, Some(egui::pos2(400.0, 210.0))));
        // base
        assert!(!is_sky_click(band, Some(egui::pos2(400.0, 695.0))));
        // gap beside a crooked floor
        assert!(!is_sky_click(band, Some(egui::pos2(40.0, 450.0))));
    }

    #[test]
    fn clicks_above_or_below_the_building_close_the_panel() {
        let band = building_band(area(), 200.0, 700.0);
        assert!(is_sky_click(band, Some(egui::pos2(400.0, 100.0))));
        assert!(is_sky_click(band, Some(egui::pos2(400.0, 800.0))));
        assert!(is_sky_click(band, None));
    }
}
