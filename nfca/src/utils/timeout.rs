// nfca/src/utils/timeout.rs

//! Millisecond helpers and the default scan period.

use std::time::Duration;

/// Default period between continuous scan attempts.
pub const DEFAULT_SCAN_PERIOD_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
