//! Probe visualizer - top and side views of a simulated ultrasound probe and DACI emitter
//!
//! Draws both probes as they sweep through a synthetic motion pattern while no
//! device feed is available:
//! - Top view: probe on a circle, emitter diametrically opposite
//! - Side view: both probes at the current height either side of the center

pub mod core;
pub mod time;

#[cfg(any(feature = "native", feature = "wasm"))]
pub mod app;
#[cfg(any(feature = "native", feature = "wasm"))]
pub mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web;
