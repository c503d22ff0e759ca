// pn5180-rs/pn5180/src/utils/timeout.rs

//! Duration helpers for busy-line waits and settle delays.

use std::time::Duration;

use crate::constants::BUSY_TIMEOUT_MS;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Bound applied to every busy-line edge wait unless configured otherwise.
pub fn default_busy_timeout() -> Duration {
    ms(BUSY_TIMEOUT_MS)
}
