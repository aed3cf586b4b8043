// nfca/src/discovery/record.rs

use crate::constants::{BLOCK_LEN, HALT_MAX, PAGE_LEN, SIMPLE_TAG_ATQA, SIMPLE_TAG_SAK1};
use crate::discovery::DiscoveryState;
use crate::protocol::{ChecksumVerdict, ExchangeResult, IdentityCheck, verify_identity_block};
use crate::types::{Atqa, Sak, Uid};

/// Up to 16 bytes of tag memory gathered block by block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryPage(ExchangeResult<PAGE_LEN>);

impl MemoryPage {
    /// Empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Page holding up to 16 bytes of `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(ExchangeResult::from_slice(bytes))
    }

    /// Append one block's worth of data; returns bytes taken.
    pub(crate) fn push_block(&mut self, block: &[u8]) -> usize {
        let n = block.len().min(BLOCK_LEN);
        self.0.extend_from_slice(&block[..n])
    }

    /// Bytes read so far.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of bytes read.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no block was read.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whole blocks received.
    pub fn blocks(&self) -> usize {
        self.0.len() / BLOCK_LEN
    }

    /// All four blocks were read.
    pub fn is_complete(&self) -> bool {
        self.0.len() == PAGE_LEN
    }

    /// BCC0/BCC1 verdicts over the identity area. `None` when fewer than nine
    /// bytes were read.
    pub fn identity_check(&self) -> Option<IdentityCheck> {
        verify_identity_block(self.as_bytes())
    }

    /// UID as stored in the identity area.
    pub fn identity_uid(&self) -> Option<[u8; 7]> {
        IdentityCheck::uid_bytes(self.as_bytes())
    }
}

/// Everything learned about one tag in one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryRecord {
    /// Answer to request.
    pub atqa: Atqa,
    /// Level-1 select acknowledge; empty when the tag stayed silent.
    pub sak1: Sak,
    /// Level-2 select acknowledge; `None` for single cascade or silence.
    pub sak2: Option<Sak>,
    /// Resolved UID.
    pub uid: Uid,
    /// Check-byte verdict; only computed for 4-byte UIDs.
    pub uid_check: Option<ChecksumVerdict>,
    /// HALT answer; `None` when HALT was not sent.
    pub halt: Option<ExchangeResult<HALT_MAX>>,
    /// Bulk read; `None` when the tag is not a simple memory tag.
    pub memory: Option<MemoryPage>,
}

impl DiscoveryRecord {
    /// ATQA `44 00`, SAK1 `04` and a zero second level-2 acknowledge byte.
    pub fn is_simple_memory_tag(&self) -> bool {
        is_simple_memory_tag(&self.atqa, &self.sak1, self.sak2.as_ref())
    }

    /// Whether any integrity check attached to the record failed.
    pub fn has_checksum_failure(&self) -> bool {
        let uid_bad = self.uid_check.map(|v| !v.is_ok()).unwrap_or(false);
        let data_bad = self
            .memory
            .as_ref()
            .and_then(MemoryPage::identity_check)
            .map(|c| !c.is_ok())
            .unwrap_or(false);
        uid_bad || data_bad
    }
}

pub(crate) fn is_simple_memory_tag(atqa: &Atqa, sak1: &Sak, sak2: Option<&Sak>) -> bool {
    atqa.as_bytes() == &SIMPLE_TAG_ATQA
        && sak1.value() == Some(SIMPLE_TAG_SAK1)
        && sak2.map(|s| s.byte(1) == 0x00).unwrap_or(false)
}

/// Result of one discovery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// No tag answered the request (after the retry).
    NoResponse,
    /// A tag answered the request but went silent before it was selected.
    Aborted {
        /// Answer to the request.
        atqa: Atqa,
        /// Last state reached before the silence.
        state: DiscoveryState,
    },
    /// A tag was selected.
    Tag(DiscoveryRecord),
}

impl DiscoveryOutcome {
    /// The record when a tag was selected.
    pub fn tag(&self) -> Option<&DiscoveryRecord> {
        match self {
            Self::Tag(r) => Some(r),
            _ => None,
        }
    }

    /// True when nothing answered the request.
    pub fn is_no_response(&self) -> bool {
        matches!(self, Self::NoResponse)
    }
}
