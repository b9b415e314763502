//! Per-mode palettes. Baseline is weathered timber, Target is slate and glass.

use eframe::egui::Color32;
use shared::domain::Mode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModePalette {
    pub sky: Color32,
    pub ground: Color32,
    pub roof: Color32,
    pub base: Color32,
    pub floor_border: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub highlight: Color32,
    pub panel_bg: Color32,
    pub text_strong: Color32,
    pub text_muted: Color32,
}

pub fn palette_for(mode: Mode) -> ModePalette {
    match mode {
        Mode::Baseline => ModePalette {
            sky: Color32::from_rgb(244, 228, 188),
            ground: Color32::from_rgb(215, 204, 200),
            roof: Color32::from_rgb(78, 52, 46),
            base: Color32::from_rgb(62, 39, 35),
            floor_border: Color32::from_rgb(62, 39, 35),
            accent: Color32::from_rgb(217, 119, 6),
            accent_soft: Color32::from_rgb(254, 243, 199),
            highlight: Color32::from_rgb(99, 102, 241),
            panel_bg: Color32::WHITE,
            text_strong: Color32::from_rgb(15, 23, 42),
            text_muted: Color32::from_rgb(100, 116, 139),
        },
        Mode::Target => ModePalette {
            sky: Color32::from_rgb(248, 250, 252),
            ground: Color32::from_rgb(203, 213, 225),
            roof: Color32::from_rgb(30, 41, 59),
            base: Color32::from_rgb(148, 163, 184),
            floor_border: Color32::from_rgb(203, 213, 225),
            accent: Color32::from_rgb(79, 70, 229),
            accent_soft: Color32::from_rgb(224, 231, 255),
            highlight: Color32::from_rgb(99, 102, 241),
            panel_bg: Color32::WHITE,
            text_strong: Color32::from_rgb(15, 23, 42),
            text_muted: Color32::from_rgb(100, 116, 139),
        },
    }
}

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_channels_toward_white() {
        let c = Color32::from_rgb(100, 0, 255);
        assert_eq!(lighten_color(c, 0.0), c);
        assert_eq!(lighten_color(c, 1.0), Color32::from_rgb(255, 255, 255));
        assert_eq!(lighten_color(c, 0.5), Color32::from_rgb(178, 128, 255));
        assert_eq!(lighten_color(c, 7.0), lighten_color(c, 1.0));
    }

    #[test]
    fn modes_have_distinct_accents() {
        assert_ne!(
            palette_for(Mode::Baseline).accent,
            palette_for(Mode::Target).accent
        );
        assert_ne!(
            palette_for(Mode::Baseline).sky,
            palette_for(Mode::Target).sky
        );
    }
}
