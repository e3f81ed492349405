//! Scene-space geometry: polar projection and outline primitives

use serde::{Deserialize, Serialize};

/// A point in scene coordinates (origin bottom-left, y up)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f32,
    pub y: f32,
}

impl ScenePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Project `angle` degrees at distance `r` around `(cx, cy)`.
pub fn angle_to_xy(angle: f32, cx: f32, cy: f32, r: f32) -> ScenePoint {
    let rads = angle.to_radians();
    ScenePoint {
        x: cx + rads.cos() * r,
        y: cy + rads.sin() * r,
    }
}

/// Evenly spaced points on a circle, starting at angle 0 and going counter-clockwise.
pub fn circle_outline(verts: usize, cx: f32, cy: f32, r: f32) -> Vec<ScenePoint> {
    if verts == 0 {
        return Vec::new();
    }
    let step = 360.0 / verts as f32;
    (0..verts)
        .map(|i| angle_to_xy(step * i as f32, cx, cy, r))
        .collect()
}

/// Axis-aligned box given by its center and size
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneRect {
    pub center: ScenePoint,
    pub width: f32,
    pub height: f32,
}

impl SceneRect {
    pub const fn new(center: ScenePoint, width: f32, height: f32) -> Self {
        Self { center, width, height }
    }

    /// Square of side `side` centered on `center`
    pub const fn square(center: ScenePoint, side: f32) -> Self {
        Self::new(center, side, side)
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.height / 2.0
    }

    /// Corners in drawing order: bottom-left, top-left, top-right, bottom-right
    pub fn corners(&self) -> [ScenePoint; 4] {
        let (lf, rt, bm, tp) = (self.left(), self.right(), self.bottom(), self.top());
        [
            ScenePoint::new(lf, bm),
            ScenePoint::new(lf, tp),
            ScenePoint::new(rt, tp),
            ScenePoint::new(rt, bm),
        ]
    }
}
