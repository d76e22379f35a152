//! Wall-clock sources.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn now(&self) -> f64;
}

/// Precision of [`SystemClock`] readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Whole seconds. Printed elapsed times always end in `.00000`.
    #[default]
    Seconds,
    /// Fractional seconds derived from the nanosecond clock.
    SubSecond,
}

/// Clock backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    resolution: Resolution,
}

impl SystemClock {
    pub fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        // A clock set before the epoch reads as the epoch itself.
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        match self.resolution {
            Resolution::Seconds => since_epoch.as_secs() as f64,
            Resolution::SubSecond => since_epoch.as_secs_f64(),
        }
    }
}

/// Clock that only moves when told to.
///
/// Useful wherever elapsed times must be reproducible.
#[derive(Debug, Default)]
pub struct ManualClock {
    bits: AtomicU64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            bits: AtomicU64::new(start.to_bits()),
        }
    }

    pub fn set(&self, seconds: f64) {
        self.bits.store(seconds.to_bits(), Ordering::SeqCst);
    }

    /// Move the clock by `seconds`, which may be negative.
    pub fn advance(&self, seconds: f64) {
        let _ = self
            .bits
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |bits| {
                Some((f64::from_bits(bits) + seconds).to_bits())
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::SeqCst))
    }
}
