// nfca/src/discovery/config.rs

//! Discovery timing configuration

/// REQA timeout (ms)
pub const REQUEST_TIMEOUT_MS: u64 = 10;

/// Anti-collision timeout (ms), both cascade levels
pub const ANTICOLL_TIMEOUT_MS: u64 = 10;

/// Select timeout (ms), both cascade levels
pub const SELECT_TIMEOUT_MS: u64 = 20;

/// Per-block READ timeout (ms)
pub const READ_TIMEOUT_MS: u64 = 20;

/// HLTA timeout (ms). A halted tag stays silent, so this always elapses.
pub const HALT_TIMEOUT_MS: u64 = 20;

/// Number of extra REQA attempts after a silent first one
pub const REQUEST_RETRIES: u8 = 1;

/// Per-exchange timeouts of one discovery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveryTimings {
    /// REQA timeout, applied to the retry as well.
    pub request_ms: u64,
    /// Anti-collision timeout, both levels.
    pub anticoll_ms: u64,
    /// Select timeout, both levels.
    pub select_ms: u64,
    /// Timeout of each READ of the bulk read.
    pub read_ms: u64,
    /// HLTA timeout.
    pub halt_ms: u64,
}

impl Default for DiscoveryTimings {
    fn default() -> Self {
        Self {
            request_ms: REQUEST_TIMEOUT_MS,
            anticoll_ms: ANTICOLL_TIMEOUT_MS,
            select_ms: SELECT_TIMEOUT_MS,
            read_ms: READ_TIMEOUT_MS,
            halt_ms: HALT_TIMEOUT_MS,
        }
    }
}

impl DiscoveryTimings {
    /// Worst-case radio time of one attempt. The scan controller warns when
    /// a continuous period is shorter. Saturates instead of overflowing.
    pub fn worst_case_ms(&self) -> u64 {
        let requests = self.request_ms.saturating_mul(1 + REQUEST_RETRIES as u64);
        let cascades = self.anticoll_ms.saturating_add(self.select_ms).saturating_mul(2);
        let read = self
            .read_ms
            .saturating_mul(crate::constants::BLOCKS_PER_PAGE as u64);
        requests
            .saturating_add(cascades)
            .saturating_add(read.max(self.halt_ms))
    }
}
