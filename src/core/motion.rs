//! Demo motion generator
//!
//! Sweeps the probes back and forth through angle, radius and height while no
//! device feed is wired in. The state machine is a pure `step` over
//! [`MotionState`]; [`DemoMotion`] owns one and counts ticks.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::constants::{HEIGHT, MAX_ANGLE, MIN_RADIUS, RADIUS};

/// Direction of travel for one phase of the sweep
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motion {
    RotateForward,
    Retract,
    RotateBack,
    Lower,
    Extend,
    Raise,
}

impl Motion {
    pub fn label(self) -> &'static str {
        match self {
            Motion::RotateForward => "rotate forward",
            Motion::Retract => "retract",
            Motion::RotateBack => "rotate back",
            Motion::Lower => "lower",
            Motion::Extend => "extend",
            Motion::Raise => "raise",
        }
    }
}

impl std::fmt::Display for Motion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Motion for each phase index. Phase advances modulo its length.
pub const PHASE_SEQUENCE: [Motion; 7] = [
    Motion::RotateForward,
    Motion::Retract,
    Motion::RotateBack,
    Motion::Lower,
    Motion::Extend,
    Motion::RotateForward,
    Motion::Raise,
];

pub const PHASE_COUNT: u8 = PHASE_SEQUENCE.len() as u8;

/// Order in which motions are checked within one tick
pub const CHECK_ORDER: [Motion; 6] = [
    Motion::RotateForward,
    Motion::RotateBack,
    Motion::Retract,
    Motion::Extend,
    Motion::Lower,
    Motion::Raise,
];

/// Angle, radius and height of the probes plus the current sweep phase.
///
/// Bounds: angle in `[0, MAX_ANGLE)`, radius in `[MIN_RADIUS, RADIUS]`,
/// height in `[0, HEIGHT]`, phase in `[0, PHASE_COUNT)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotionState {
    /// Degrees
    pub angle: i32,
    /// Pixels from the view center
    pub radius: i32,
    /// Pixels above the bottom of the side view
    pub height: i32,
    pub phase: u8,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            angle: 0,
            radius: RADIUS,
            height: HEIGHT,
            phase: 0,
        }
    }
}

impl MotionState {
    pub fn motion(&self) -> Motion {
        PHASE_SEQUENCE[(self.phase % PHASE_COUNT) as usize]
    }

    /// Apply one tick. Motions are checked in [`CHECK_ORDER`]; a phase that
    /// clamps and advances into a motion later in that order moves in the
    /// same tick. Lower -> Extend is the one clamp tick that moves nothing.
    pub fn step(self) -> Self {
        CHECK_ORDER.iter().fold(self, |state, &motion| {
            if state.motion() == motion {
                state.apply(motion)
            } else {
                state
            }
        })
    }

    fn apply(self, motion: Motion) -> Self {
        let mut next = self;
        match motion {
            Motion::RotateForward => {
                next.angle += 1;
                if next.angle >= MAX_ANGLE {
                    next.angle = MAX_ANGLE - 1;
                    return next.advance();
                }
            }
            Motion::RotateBack => {
                next.angle -= 1;
                if next.angle < 0 {
                    next.angle = 0;
                    return next.advance();
                }
            }
            Motion::Retract => {
                next.radius -= 1;
                if next.radius <= MIN_RADIUS {
                    next.radius = MIN_RADIUS;
                    return next.advance();
                }
            }
            Motion::Extend => {
                next.radius += 1;
                if next.radius >= RADIUS {
                    next.radius = RADIUS;
                    return next.advance();
                }
            }
            Motion::Lower => {
                next.height -= 1;
                if next.height < 0 {
                    next.height = 0;
                    return next.advance();
                }
            }
            Motion::Raise => {
                next.height += 1;
                if next.height >= HEIGHT {
                    next.height = HEIGHT;
                    return next.advance();
                }
            }
        }
        next
    }

    fn advance(mut self) -> Self {
        self.phase = (self.phase % PHASE_COUNT + 1) % PHASE_COUNT;
        self
    }
}

/// Stand-in for the device feed: yields a new [`MotionState`] per tick
#[derive(Clone, Debug, Default)]
pub struct DemoMotion {
    state: MotionState,
    ticks: u64,
}

impl DemoMotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary state
    pub fn with_state(state: MotionState) -> Self {
        Self { state, ticks: 0 }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Ticks applied so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn next_state(&mut self) -> MotionState {
        let prev = self.state;
        self.state = prev.step();
        self.ticks += 1;

        if self.state.phase != prev.phase {
            debug!(
                tick = self.ticks,
                from = %prev.motion(),
                to = %self.state.motion(),
                angle = self.state.angle,
                radius = self.state.radius,
                height = self.state.height,
                "phase changed"
            );
        } else {
            trace!(tick = self.ticks, state = ?self.state, "tick");
        }
        self.state
    }

    /// Apply `n` ticks and return the resulting state
    pub fn advance_by(&mut self, n: u32) -> MotionState {
        for _ in 0..n {
            self.next_state();
        }
        self.state
    }
}

impl Iterator for DemoMotion {
    type Item = MotionState;

    fn next(&mut self) -> Option<MotionState> {
        Some(self.next_state())
    }
}
