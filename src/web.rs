//! WASM entry point: mounts the app on the page's `canvas` element

use tracing::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::ProbeVisApp;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("canvas"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            error!("no <canvas id=\"canvas\"> element on the page");
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(ProbeVisApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            error!(error = ?e, "failed to start eframe");
        }
    });
}
