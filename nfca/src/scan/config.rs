// nfca/src/scan/config.rs

use std::time::Duration;

use crate::types::Technology;
use crate::utils::{DEFAULT_SCAN_PERIOD_MS, ms};

/// Single-shot or periodic scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunMode {
    /// One attempt.
    Single,
    /// Attempts separated by `period_ms` until cancelled.
    Continuous {
        /// Pause after each attempt.
        period_ms: u64,
    },
}

impl RunMode {
    /// Continuous mode with the default 1000 ms period.
    pub fn continuous() -> Self {
        Self::Continuous {
            period_ms: DEFAULT_SCAN_PERIOD_MS,
        }
    }

    /// Sleep between attempts; `None` in single mode.
    pub fn period(&self) -> Option<Duration> {
        match self {
            Self::Single => None,
            Self::Continuous { period_ms } => Some(ms(*period_ms)),
        }
    }
}

impl Default for RunMode {
    fn default() -> Self {
        Self::Single
    }
}

/// What a scan controller runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanConfig {
    /// Family to scan for.
    pub technology: Technology,
    /// Single or continuous.
    pub mode: RunMode,
}

impl ScanConfig {
    /// One attempt for `technology`.
    pub fn single(technology: Technology) -> Self {
        Self {
            technology,
            mode: RunMode::Single,
        }
    }

    /// Periodic attempts for `technology`.
    pub fn continuous(technology: Technology, period_ms: u64) -> Self {
        Self {
            technology,
            mode: RunMode::Continuous { period_ms },
        }
    }
}
