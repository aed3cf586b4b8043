// nfca/src/discovery/state.rs

use std::fmt;

use crate::protocol::ChecksumVerdict;

/// Position of one discovery attempt in the request / anti-collision /
/// select sequence. Each state names the last exchange completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryState {
    /// Nothing sent yet.
    #[default]
    Idle,
    /// REQA answered.
    RequestSent,
    /// Level-1 anti-collision answered.
    Level1Anticoll,
    /// Level-1 select sent.
    Level1Select,
    /// Level-2 anti-collision answered.
    Level2Anticoll,
    /// Level-2 select sent.
    Level2Select,
    /// UID resolved and the tag selected.
    Selected,
    /// Memory page read.
    BulkRead,
    /// Attempt complete.
    Halted,
}

impl fmt::Display for DiscoveryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::RequestSent => "request-sent",
            Self::Level1Anticoll => "level1-anticoll",
            Self::Level1Select => "level1-select",
            Self::Level2Anticoll => "level2-anticoll",
            Self::Level2Select => "level2-select",
            Self::Selected => "selected",
            Self::BulkRead => "bulk-read",
            Self::Halted => "halted",
        };
        f.write_str(name)
    }
}

/// What a single step decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Next(DiscoveryState),
    /// Tag went silent mid-sequence.
    Abort,
    /// Nothing answered the request.
    NoTag,
    Done,
}

/// Tagged result of one exchange as seen by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome<T> {
    /// Data with a matching (or no) check byte.
    Data(T),
    /// Nothing arrived before the timeout.
    NoResponse,
    /// Data arrived but its check byte disagrees. Carried forward, not fatal.
    ChecksumFailure {
        /// The data as received.
        data: T,
        /// Computed versus received check byte.
        verdict: ChecksumVerdict,
    },
}

impl<T> StepOutcome<T> {
    /// The carried data, whether or not its checksum matched.
    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(d) | Self::ChecksumFailure { data: d, .. } => Some(d),
            Self::NoResponse => None,
        }
    }

    /// True for `NoResponse`.
    pub fn is_no_response(&self) -> bool {
        matches!(self, Self::NoResponse)
    }

    /// The failing verdict, if any.
    pub fn verdict(&self) -> Option<ChecksumVerdict> {
        match self {
            Self::ChecksumFailure { verdict, .. } => Some(*verdict),
            _ => None,
        }
    }
}
