//! Frame clock for the Canopy simulation
//!
//! Turns the host's frame timestamps into per-frame deltas and keeps the
//! monotonic elapsed time used by time-driven behaviors.

use serde::{Deserialize, Serialize};

/// Configuration for frame timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Smallest delta handed to the simulation (seconds). Non-positive and
    /// non-finite deltas are replaced by this value.
    pub min_delta: f32,
    /// Largest delta handed to the simulation (seconds)
    pub max_delta: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            min_delta: 1.0e-4,
            max_delta: 0.1,
        }
    }
}

impl TimeConfig {
    /// Clamp a raw delta into `[min_delta, max_delta]`.
    ///
    /// An inverted range never panics; `max_delta` wins.
    pub fn sanitize(&self, raw_delta: f32) -> f32 {
        if !raw_delta.is_finite() || raw_delta <= 0.0 {
            return self.min_delta;
        }
        raw_delta.max(self.min_delta).min(self.max_delta)
    }
}

/// Frame time tracking
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Configuration
    pub config: TimeConfig,
    /// Timestamp of the previous tick in seconds, if any
    previous: Option<f64>,
    /// Simulated time since the first tick in seconds
    elapsed: f64,
    /// Frame counter
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TimeConfig::default())
    }
}

impl FrameClock {
    /// Create a new frame clock with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            previous: None,
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Advance from a host timestamp (seconds). Returns the sanitized delta.
    ///
    /// The first tick has no previous timestamp and advances by `min_delta`.
    pub fn tick(&mut self, timestamp: f64) -> f32 {
        let raw = match self.previous {
            Some(previous) => (timestamp - previous) as f32,
            None => 0.0,
        };
        if timestamp.is_finite() {
            self.previous = Some(timestamp);
        }
        self.advance(raw)
    }

    /// Advance by an explicit delta (seconds). Returns the sanitized delta.
    pub fn advance(&mut self, raw_delta: f32) -> f32 {
        let delta = self.config.sanitize(raw_delta);
        self.elapsed += delta as f64;
        self.frame_count += 1;
        delta
    }

    /// Simulated seconds since the first frame
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of frames advanced so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_computes_delta_from_timestamps() {
        let mut clock = FrameClock::default();
        clock.tick(10.0);
        let delta = clock.tick(10.016);
        assert!((delta - 0.016).abs() < 1e-5);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_first_tick_uses_min_delta() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(123.0), clock.config.min_delta);
    }

    #[test]
    fn test_malformed_deltas_are_sanitized() {
        let config = TimeConfig::default();
        assert_eq!(config.sanitize(0.0), config.min_delta);
        assert_eq!(config.sanitize(-1.0), config.min_delta);
        assert_eq!(config.sanitize(f32::NAN), config.min_delta);
        assert_eq!(config.sanitize(f32::INFINITY), config.min_delta);
        assert_eq!(config.sanitize(5.0), config.max_delta);
    }

    #[test]
    fn test_backwards_timestamp_does_not_rewind() {
        let mut clock = FrameClock::default();
        clock.tick(1.0);
        clock.tick(1.05);
        let delta = clock.tick(0.5);
        assert_eq!(delta, clock.config.min_delta);
        assert!(clock.elapsed() > 0.05);
    }

    #[test]
    fn test_inverted_range_does_not_panic() {
        let config = TimeConfig {
            min_delta: 1.0e-4,
            max_delta: 1.0e-5,
        };
        assert_eq!(config.sanitize(0.016), 1.0e-5);

        let mut clock = FrameClock::new(config);
        clock.tick(0.0);
        assert!(clock.tick(0.016).is_finite());
    }
}
