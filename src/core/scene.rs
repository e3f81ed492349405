//! Probe projection into the top and side views, plus the static background

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::geometry::{angle_to_xy, circle_outline, SceneRect, ScenePoint};
use super::motion::{Motion, MotionState};

/// Which simulated device a shape belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Probe {
    Ultrasound,
    Daci,
}

impl Probe {
    pub const ALL: [Probe; 2] = [Probe::Ultrasound, Probe::Daci];

    pub fn colour(self) -> [u8; 3] {
        match self {
            Probe::Ultrasound => US_COLOUR,
            Probe::Daci => DACI_COLOUR,
        }
    }

    pub fn side_length(self) -> f32 {
        match self {
            Probe::Ultrasound => US_LENGTH,
            Probe::Daci => DACI_LENGTH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Probe::Ultrasound => "Ultrasound Probe",
            Probe::Daci => "DACI Emitter",
        }
    }
}

/// Centers of both probes in one view
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbePair {
    pub ultrasound: ScenePoint,
    pub daci: ScenePoint,
}

impl ProbePair {
    pub fn position(&self, probe: Probe) -> ScenePoint {
        match probe {
            Probe::Ultrasound => self.ultrasound,
            Probe::Daci => self.daci,
        }
    }

    /// Filled square drawn for `probe`
    pub fn marker(&self, probe: Probe) -> SceneRect {
        SceneRect::square(self.position(probe), probe.side_length())
    }
}

/// Plan view: ultrasound on the swept angle and radius, emitter opposite at full radius.
pub fn top_view(angle: i32, radius: i32) -> ProbePair {
    ProbePair {
        ultrasound: angle_to_xy(angle as f32, TOP_X, TOP_Y, radius as f32),
        daci: angle_to_xy(((angle + 180) % 360) as f32, TOP_X, TOP_Y, RADIUS as f32),
    }
}

/// Elevation view: both probes at the same height, either side of the center.
pub fn side_view(height: i32, radius: i32) -> ProbePair {
    let y = SIDE_Y - (HEIGHT / 2) as f32 + height as f32;
    ProbePair {
        ultrasound: ScenePoint::new(SIDE_X + radius as f32, y),
        daci: ScenePoint::new(SIDE_X - RADIUS as f32, y),
    }
}

/// Text drawn with its baseline-left corner at `pos`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneLabel {
    pub text: String,
    pub pos: ScenePoint,
    pub size: f32,
}

/// Legend swatch for one probe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendSwatch {
    pub probe: Probe,
    pub rect: SceneRect,
}

/// Everything drawn every frame that never moves
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    /// Top view circle outline, closed
    pub circle: Vec<ScenePoint>,
    /// Side view box outline
    pub side_box: SceneRect,
    pub swatches: [LegendSwatch; 2],
    pub labels: Vec<SceneLabel>,
}

impl Background {
    pub fn new() -> Self {
        let label = |text: &str, x: f32, y: f32| SceneLabel {
            text: text.to_string(),
            pos: ScenePoint::new(x, y),
            size: LABEL_FONT_SIZE,
        };

        Self {
            circle: circle_outline(CIRCLE_VERTS, TOP_X, TOP_Y, RADIUS as f32),
            side_box: SceneRect::new(
                ScenePoint::new(SIDE_X, SIDE_Y),
                (2 * RADIUS) as f32,
                HEIGHT as f32,
            ),
            swatches: [
                LegendSwatch {
                    probe: Probe::Ultrasound,
                    rect: SceneRect::square(ScenePoint::new(25.0, 55.0), US_LENGTH / 2.0),
                },
                LegendSwatch {
                    probe: Probe::Daci,
                    rect: SceneRect::square(ScenePoint::new(25.0, 25.0), DACI_LENGTH / 2.0),
                },
            ],
            labels: vec![
                label(Probe::Ultrasound.label(), 50.0, 50.0),
                label(Probe::Daci.label(), 50.0, 20.0),
                label("Top View:", 5.0, WINDOW_HEIGHT - 25.0),
                label("Side View:", 5.0, WINDOW_HEIGHT / 2.0 + 75.0),
            ],
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

/// One rendered frame's worth of probe data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub state: MotionState,
    pub motion: Motion,
    pub top_view: ProbePair,
    pub side_view: ProbePair,
}

impl FrameSnapshot {
    pub fn capture(tick: u64, state: MotionState) -> Self {
        Self {
            tick,
            state,
            motion: state.motion(),
            top_view: top_view(state.angle, state.radius),
            side_view: side_view(state.height, state.radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn top_view_at_zero_angle() {
        let pair = top_view(0, 150);
        assert_abs_diff_eq!(pair.ultrasound.x, 450.0, epsilon = 1e-3);
        assert_abs_diff_eq!(pair.ultrasound.y, 700.0, epsilon = 1e-3);
        assert_abs_diff_eq!(pair.daci.x, 150.0, epsilon = 1e-3);
        assert_abs_diff_eq!(pair.daci.y, 700.0, epsilon = 1e-3);
    }

    #[test]
    fn emitter_keeps_full_radius_when_probe_retracts() {
        let pair = top_view(90, 75);
        assert_abs_diff_eq!(pair.ultrasound.y, 775.0, epsilon = 1e-3);
        assert_abs_diff_eq!(pair.daci.y, 550.0, epsilon = 1e-3);
    }

    #[test]
    fn side_view_follows_height() {
        let low = side_view(0, 150);
        assert_eq!(low.ultrasound, ScenePoint::new(450.0, 100.0));
        assert_eq!(low.daci, ScenePoint::new(150.0, 100.0));

        let high = side_view(400, 75);
        assert_eq!(high.ultrasound, ScenePoint::new(375.0, 500.0));
        assert_eq!(high.daci, ScenePoint::new(150.0, 500.0));
    }

    #[test]
    fn markers_use_probe_sizes() {
        let pair = side_view(200, 150);
        let m = pair.marker(Probe::Daci);
        assert_eq!(m.width, DACI_LENGTH);
        assert_eq!(m.center, pair.daci);
        assert_eq!(Probe::Ultrasound.colour(), [255, 0, 0]);
        assert_eq!(Probe::Daci.colour(), [255, 255, 255]);
    }

    #[test]
    fn background_layout() {
        let bg = Background::new();
        assert_eq!(bg.circle.len(), CIRCLE_VERTS);
        assert_eq!(bg.side_box.bottom(), 100.0);
        assert_eq!(bg.side_box.top(), 500.0);
        assert_eq!(bg.side_box.left(), 150.0);
        assert_eq!(bg.side_box.right(), 450.0);
        assert_eq!(bg.swatches[0].rect.width, 25.0);

        let texts: Vec<&str> = bg.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["Ultrasound Probe", "DACI Emitter", "Top View:", "Side View:"]);
        assert_eq!(bg.labels[2].pos, ScenePoint::new(5.0, 875.0));
        assert_eq!(bg.labels[3].pos, ScenePoint::new(5.0, 525.0));
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snap = FrameSnapshot::capture(270, MotionState { angle: 269, radius: 150, height: 400, phase: 1 });
        assert_eq!(snap.motion, Motion::Retract);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["tick"], 270);
        assert_eq!(json["state"]["angle"], 269);
        assert_eq!(json["motion"], "Retract");
        assert_eq!(json["side_view"]["daci"]["x"], 150.0);

        let back: FrameSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
    }

    proptest! {
        #[test]
        fn prop_emitter_is_opposite(angle in 0i32..270, radius in 75i32..=150) {
            let pair = top_view(angle, radius);
            let opposite = ((angle + 180) % 360) as f32;
            let expected = angle_to_xy(opposite, TOP_X, TOP_Y, RADIUS as f32);
            prop_assert!((pair.daci.x - expected.x).abs() < 1e-3);
            prop_assert!((pair.daci.y - expected.y).abs() < 1e-3);

            // Emitter sits on the line through the center, away from the probe
            let (ux, uy) = (pair.ultrasound.x - TOP_X, pair.ultrasound.y - TOP_Y);
            let (dx, dy) = (pair.daci.x - TOP_X, pair.daci.y - TOP_Y);
            prop_assert!((ux * dy - uy * dx).abs() < 0.5);
            prop_assert!(ux * dx + uy * dy < 0.0);
        }

        #[test]
        fn prop_side_offsets_ignore_height(height in 0i32..=400, radius in 75i32..=150) {
            let pair = side_view(height, radius);
            prop_assert_eq!(pair.ultrasound.x, SIDE_X + radius as f32);
            prop_assert_eq!(pair.daci.x, SIDE_X - RADIUS as f32);
            prop_assert_eq!(pair.ultrasound.y, pair.daci.y);
        }
    }
}
