// nfca/src/discovery/cascade.rs

use crate::constants::{CASCADE_MAX, CASCADE_TAG};
use crate::protocol::ExchangeResult;

/// Anti-collision response of one cascade level: an optional cascade tag,
/// three or four UID bytes and the check byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeBuffer(ExchangeResult<CASCADE_MAX>);

impl CascadeBuffer {
    /// Wrap an anti-collision response.
    pub fn new(rx: ExchangeResult<CASCADE_MAX>) -> Self {
        Self(rx)
    }

    /// True when the level did not answer.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Received bytes, check byte included.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The level response announces another cascade level.
    pub fn starts_with_cascade_tag(&self) -> bool {
        self.0.as_bytes().first() == Some(&CASCADE_TAG)
    }

    /// Four UID-carrying bytes, the cascade tag included when present.
    /// Positions not received read as zero.
    pub fn head(&self) -> [u8; 4] {
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.0.raw()[..4]);
        out
    }

    /// UID bytes contributed by this level: bytes 1..4 after a cascade tag,
    /// bytes 0..4 otherwise.
    pub fn uid_part(&self) -> &[u8] {
        if self.starts_with_cascade_tag() {
            &self.0.raw()[1..4]
        } else {
            &self.0.raw()[..4]
        }
    }

    /// Trailing check byte (fifth byte); zero when not received.
    pub fn check_byte(&self) -> u8 {
        self.0.raw()[4]
    }
}
