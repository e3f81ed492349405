//! Compile-time layout and motion constants
//!
//! All positions are scene coordinates: origin bottom-left, y up.

/// Viewer window size in pixels
pub const WINDOW_WIDTH: f32 = 600.0;
pub const WINDOW_HEIGHT: f32 = 900.0;

/// Number of vertices used to draw the top view circle
pub const CIRCLE_VERTS: usize = 1440;

/// Center of the top (plan) view
pub const TOP_X: f32 = 300.0;
pub const TOP_Y: f32 = 700.0;

/// Center of the side (elevation) view
pub const SIDE_X: f32 = 300.0;
pub const SIDE_Y: f32 = 300.0;

/// Radius of both views, also the max probe radius
pub const RADIUS: i32 = 150;
/// Height of the side view box, also the max probe height
pub const HEIGHT: i32 = 400;
/// Probes rotate through [0, MAX_ANGLE)
pub const MAX_ANGLE: i32 = 270;
/// Closest the ultrasound probe gets to the center
pub const MIN_RADIUS: i32 = RADIUS / 2;

/// Side length of the probe squares
pub const DACI_LENGTH: f32 = 50.0;
pub const US_LENGTH: f32 = 50.0;

/// RGB colours
pub const DACI_COLOUR: [u8; 3] = [255, 255, 255];
pub const US_COLOUR: [u8; 3] = [255, 0, 0];

/// Fixed tick rate of the demo motion
pub const TICK_RATE_HZ: f64 = 120.0;
/// Upper bound on ticks applied in a single repaint
pub const MAX_CATCH_UP_TICKS: u32 = 12;

pub const LABEL_FONT_SIZE: f32 = 14.0;
