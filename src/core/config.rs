//! Runtime settings for the headless tracer
//!
//! Layout and motion are fixed at compile time; only the tracer reads the
//! environment.

use thiserror::Error;

/// Stop after this many ticks (unset = run until interrupted)
pub const TICKS_VAR: &str = "PROBE_TRACE_TICKS";
/// Emit one snapshot every this many ticks
pub const STRIDE_VAR: &str = "PROBE_TRACE_STRIDE";

pub const DEFAULT_STRIDE: u64 = 120;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("PROBE_TRACE_STRIDE must be at least 1")]
    ZeroStride,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceConfig {
    pub max_ticks: Option<u64>,
    pub stride: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_ticks: None,
            stride: DEFAULT_STRIDE,
        }
    }
}

impl TraceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str| -> Result<Option<u64>, ConfigError> {
            match lookup(var) {
                Some(value) if !value.trim().is_empty() => value
                    .trim()
                    .parse::<u64>()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidNumber { var, value }),
                _ => Ok(None),
            }
        };

        let max_ticks = read(TICKS_VAR)?;
        let stride = match read(STRIDE_VAR)? {
            Some(0) => return Err(ConfigError::ZeroStride),
            Some(n) => n,
            None => DEFAULT_STRIDE,
        };

        Ok(Self { max_ticks, stride })
    }

    /// Whether the snapshot for `tick` should be emitted
    pub fn emits(&self, tick: u64) -> bool {
        tick % self.stride == 0
    }

    pub fn finished(&self, tick: u64) -> bool {
        self.max_ticks.is_some_and(|max| tick >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = TraceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, TraceConfig::default());
        assert_eq!(cfg.stride, 120);
        assert!(!cfg.finished(u64::MAX));
    }

    #[test]
    fn reads_ticks_and_stride() {
        let cfg = TraceConfig::from_lookup(lookup(&[
            (TICKS_VAR, "1489"),
            (STRIDE_VAR, " 10 "),
        ]))
        .unwrap();
        assert_eq!(cfg.max_ticks, Some(1489));
        assert_eq!(cfg.stride, 10);
        assert!(cfg.emits(20));
        assert!(!cfg.emits(21));
        assert!(!cfg.finished(1491));
        assert!(cfg.finished(1489));
    }

    #[test]
    fn empty_value_is_unset() {
        let cfg = TraceConfig::from_lookup(lookup(&[(TICKS_VAR, "")])).unwrap();
        assert_eq!(cfg.max_ticks, None);
    }

    #[test]
    fn rejects_garbage() {
        let err = TraceConfig::from_lookup(lookup(&[(TICKS_VAR, "-5")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber { var: TICKS_VAR, value: "-5".into() }
        );
        assert!(err.to_string().contains(TICKS_VAR));

        let err = TraceConfig::from_lookup(lookup(&[(STRIDE_VAR, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroStride);
    }
}
