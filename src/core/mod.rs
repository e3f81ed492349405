//! Platform-agnostic core module - shared between the egui front-ends and the tracer CLI

pub mod config;
pub mod constants;
pub mod geometry;
pub mod motion;
pub mod scene;

pub use config::{ConfigError, TraceConfig};
pub use geometry::{angle_to_xy, circle_outline, SceneRect, ScenePoint};
pub use motion::{DemoMotion, Motion, MotionState, PHASE_COUNT, PHASE_SEQUENCE};
pub use scene::{side_view, top_view, Background, FrameSnapshot, Probe, ProbePair, SceneLabel};
