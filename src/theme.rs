//! Black background, white outlines, probe colours from the scene constants

use egui::Color32;

use crate::core::Probe;

pub mod colors {
    use super::Color32;

    pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);

    // Background outlines and labels
    pub const OUTLINE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 110, 110);
}

pub fn probe_color(probe: Probe) -> Color32 {
    let [r, g, b] = probe.colour();
    Color32::from_rgb(r, g, b)
}

/// Flat black visuals with white text
pub fn minimal_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
