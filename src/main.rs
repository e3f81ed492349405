//! Native window for the probe visualizer
//!
//! Run with: cargo run --features native --bin probe-vis

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use eframe::egui;
    use probe_vis::app::ProbeVisApp;
    use probe_vis::core::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,probe_vis=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false)
            .with_title(""),
        ..Default::default()
    };

    eframe::run_native(
        "probe-vis",
        options,
        Box::new(|cc| Ok(Box::new(ProbeVisApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
