//! Standalone CLI for tracing the demo motion pipeline without a window
//!
//! Run with: cargo run --features cli --bin probe-trace
//!
//! Prints one JSON frame snapshot per line every `PROBE_TRACE_STRIDE` ticks.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use probe_vis::core::constants::TICK_RATE_HZ;
    use probe_vis::core::{DemoMotion, FrameSnapshot, TraceConfig};
    use std::io::Write;
    use std::time::{Duration, Instant};
    use tokio::time::MissedTickBehavior;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,probe_vis=debug"));
    // stdout carries the JSON frames; logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = TraceConfig::from_env()?;
    info!(max_ticks = ?config.max_ticks, stride = config.stride, rate_hz = TICK_RATE_HZ, "Tracing demo motion");

    let mut motion = DemoMotion::new();
    let mut ticker = tokio::time::interval(Duration::from_secs_f64(1.0 / TICK_RATE_HZ));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut stats_interval = tokio::time::interval(Duration::from_secs(5));
    let mut ticks_last_interval = 0u64;
    let start_time = Instant::now();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let state = motion.next_state();
                let tick = motion.ticks();
                ticks_last_interval += 1;

                if config.emits(tick) {
                    serde_json::to_writer(&mut out, &FrameSnapshot::capture(tick, state))?;
                    writeln!(out)?;
                    out.flush()?;
                }
                if config.finished(tick) {
                    info!(ticks = tick, elapsed = ?start_time.elapsed(), "Tick limit reached");
                    break;
                }
            }
            _ = stats_interval.tick() => {
                let state = motion.state();
                info!(
                    ticks = motion.ticks(),
                    "/sec" = format!("{:.1}", ticks_last_interval as f64 / 5.0),
                    motion = %state.motion(),
                    angle = state.angle,
                    radius = state.radius,
                    height = state.height,
                    "stats"
                );
                ticks_last_interval = 0;
            }
            _ = tokio::signal::ctrl_c() => {
                warn!(ticks = motion.ticks(), "Interrupted");
                break;
            }
        }
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
