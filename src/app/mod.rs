//! Probe visualizer app
//!
//! This module contains the egui app that runs on both native and WASM platforms.

mod diagnostics;
mod views;

use eframe::egui;
use tracing::info;

use crate::core::constants::{MAX_CATCH_UP_TICKS, TICK_RATE_HZ};
use crate::core::{Background, DemoMotion, FrameSnapshot};
use crate::theme::{colors, minimal_visuals};
use crate::time::{now_seconds, TickClock};

pub use diagnostics::FpsCounter;
pub use views::to_screen;

/// Seconds between "stats" log lines
const STATS_INTERVAL: f64 = 5.0;

/// Probe Visualizer App - runs on both native and WASM
pub struct ProbeVisApp {
    /// Synthetic probe feed
    pub(crate) motion: DemoMotion,
    /// Converts repaints into 120 Hz ticks
    clock: TickClock,
    /// Static layout, built once
    background: Background,
    /// Tessellation-ready background shapes, keyed by the canvas origin
    background_shapes: Option<(egui::Pos2, Vec<egui::Shape>)>,
    pub(crate) fps_counter: FpsCounter,
    /// Internal: timestamp and tick count of the last stats line
    stats_last_time: f64,
    stats_last_ticks: u64,
}

impl ProbeVisApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(minimal_visuals());

        info!(rate_hz = TICK_RATE_HZ, "probe visualizer started");

        Self {
            motion: DemoMotion::new(),
            clock: TickClock::new(TICK_RATE_HZ, MAX_CATCH_UP_TICKS),
            background: Background::new(),
            background_shapes: None,
            fps_counter: FpsCounter::new(),
            stats_last_time: now_seconds(),
            stats_last_ticks: 0,
        }
    }

    /// Current frame's probe data
    pub(crate) fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self.motion.ticks(), self.motion.state())
    }

    fn log_stats(&mut self, now: f64) {
        let elapsed = now - self.stats_last_time;
        if elapsed < STATS_INTERVAL {
            return;
        }
        let ticks = self.motion.ticks();
        let state = self.motion.state();
        info!(
            ticks,
            ticks_per_sec = format!("{:.1}", (ticks - self.stats_last_ticks) as f64 / elapsed),
            fps = format!("{:.0}", self.fps_counter.fps()),
            motion = %state.motion(),
            "stats"
        );
        self.stats_last_time = now;
        self.stats_last_ticks = ticks;
    }
}

impl eframe::App for ProbeVisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Request continuous repaint for real-time updates
        ctx.request_repaint();

        let now = now_seconds();
        self.fps_counter.tick_at(now);

        let due = self.clock.advance(now);
        self.motion.advance_by(due);
        self.log_stats(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| {
                let available = ui.available_size();
                let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());
                let rect = response.rect;

                self.draw_background(&painter, rect);
                self.draw_probes(&painter, rect);
            });

        self.draw_diagnostics(ctx);
    }
}
