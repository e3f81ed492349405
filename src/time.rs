//! Platform-agnostic time utilities
//!
//! `now_seconds` gives elapsed time since app start; `TickClock` turns
//! repaint timestamps into a fixed-rate tick count.

use tracing::debug;

#[cfg(target_arch = "wasm32")]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Fixed-step accumulator: repaints happen at display rate, motion advances at `rate_hz`.
#[derive(Clone, Debug)]
pub struct TickClock {
    interval: f64,
    max_catch_up: u32,
    last: Option<f64>,
    accumulator: f64,
}

impl TickClock {
    pub fn new(rate_hz: f64, max_catch_up: u32) -> Self {
        Self {
            interval: 1.0 / rate_hz,
            max_catch_up,
            last: None,
            accumulator: 0.0,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Number of whole ticks due at time `now` (seconds). The first call only
    /// starts the clock. Backlog beyond `max_catch_up` is dropped.
    pub fn advance(&mut self, now: f64) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 0;
        };
        self.accumulator += (now - last).max(0.0);

        let mut due = 0u32;
        while self.accumulator >= self.interval && due < self.max_catch_up {
            self.accumulator -= self.interval;
            due += 1;
        }

        if self.accumulator >= self.interval {
            let dropped = (self.accumulator / self.interval) as u64;
            debug!(dropped, "tick backlog dropped");
            self.accumulator %= self.interval;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_starts_clock() {
        let mut clock = TickClock::new(4.0, 100);
        assert_eq!(clock.advance(10.0), 0);
        assert_eq!(clock.interval(), 0.25);
    }

    #[test]
    fn counts_whole_intervals() {
        let mut clock = TickClock::new(4.0, 100);
        clock.advance(0.0);
        assert_eq!(clock.advance(1.0), 4);
        assert_eq!(clock.advance(1.125), 0);
        // Remainder carries over
        assert_eq!(clock.advance(1.25), 1);
    }

    #[test]
    fn two_ticks_per_60hz_frame_at_120hz() {
        let mut clock = TickClock::new(120.0, 12);
        clock.advance(0.0);
        assert_eq!(clock.advance(1.0 / 60.0), 2);
    }

    #[test]
    fn caps_catch_up_and_drops_backlog() {
        let mut clock = TickClock::new(4.0, 2);
        clock.advance(0.0);
        assert_eq!(clock.advance(10.0), 2);
        assert_eq!(clock.advance(10.0), 0);
        assert_eq!(clock.advance(10.25), 1);
    }

    #[test]
    fn time_going_backwards_is_ignored() {
        let mut clock = TickClock::new(4.0, 10);
        clock.advance(5.0);
        assert_eq!(clock.advance(4.0), 0);
        assert_eq!(clock.advance(4.5), 2);
    }

    #[test]
    fn now_seconds_is_monotonic() {
        let a = now_seconds();
        let b = now_seconds();
        assert!(b >= a);
    }
}
