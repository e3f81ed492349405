//! Diagnostics overlay: frame rate, tick count and the current sweep state

use std::collections::VecDeque;

use eframe::egui;

use crate::theme::colors;

use super::ProbeVisApp;

/// Frames kept for the rolling FPS average
const FPS_WINDOW: usize = 60;

impl ProbeVisApp {
    pub(crate) fn draw_diagnostics(&self, ctx: &egui::Context) {
        let snapshot = self.snapshot();
        let state = snapshot.state;

        let title = egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
            .color(colors::TEXT_MUTED);

        egui::Area::new(egui::Id::new("diagnostics_area"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 8.0))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 20, 200))
                    .corner_radius(4.0)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        egui::CollapsingHeader::new(title)
                            .default_open(false)
                            .show(ui, |ui| {
                                let row = |ui: &mut egui::Ui, name: &str, value: String| {
                                    ui.horizontal(|ui| {
                                        ui.label(egui::RichText::new(name).color(colors::TEXT_MUTED));
                                        ui.label(egui::RichText::new(value).color(colors::TEXT_PRIMARY));
                                    });
                                };
                                row(ui, "tick", snapshot.tick.to_string());
                                row(ui, "motion", snapshot.motion.to_string());
                                row(ui, "angle", format!("{}°", state.angle));
                                row(ui, "radius", format!("{} px", state.radius));
                                row(ui, "height", format!("{} px", state.height));
                            });
                    });
            });
    }
}

/// Rolling FPS over the last few repaints
pub struct FpsCounter {
    frames: VecDeque<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::with_capacity(FPS_WINDOW + 1),
        }
    }

    /// Record a repaint at `now` seconds
    pub fn tick_at(&mut self, now: f64) {
        self.frames.push_back(now);
        if self.frames.len() > FPS_WINDOW {
            self.frames.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
