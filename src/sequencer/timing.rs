//! Spin timing interpolation
//!
//! The tick interval is a linear interpolation between a start and end
//! interval over the elapsed/duration ratio, clamped to the end interval
//! once the window has fully elapsed. Defaults match the original wheel:
//! a 3000 ms window slowing from 300 ms ticks to 50 ms ticks.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing parameters for one spin window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinTiming {
    /// Total animation window in milliseconds
    pub duration_ms: u64,
    /// Tick interval at the start of the window
    pub start_interval_ms: u64,
    /// Tick interval the window converges to
    pub end_interval_ms: u64,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            start_interval_ms: 300,
            end_interval_ms: 50,
        }
    }
}

impl SpinTiming {
    /// Timing compressed for tests: a few-millisecond window.
    pub fn fast() -> Self {
        Self {
            duration_ms: 20,
            start_interval_ms: 2,
            end_interval_ms: 1,
        }
    }

    /// The full animation window.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Tick interval after `elapsed` of the window has passed.
    pub fn interval_at(&self, elapsed: Duration) -> Duration {
        let duration = self.duration_ms.max(1) as f64;
        let ratio = (elapsed.as_millis() as f64 / duration).clamp(0.0, 1.0);
        let start = self.start_interval_ms as f64;
        let end = self.end_interval_ms as f64;
        let interval = start - ratio * (start - end);
        Duration::from_millis(interval.max(end.min(start)) as u64)
    }
}
