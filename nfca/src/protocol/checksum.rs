// nfca/src/protocol/checksum.rs
//! Block check characters (BCC) and CRC_A.

use crate::constants::CASCADE_TAG;
use crate::{Error, Result};

/// Outcome of comparing a received check byte against the computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumVerdict {
    /// Value computed from the data.
    pub expected: u8,
    /// Value received.
    pub actual: u8,
}

impl ChecksumVerdict {
    /// Pair a computed and a received check byte.
    pub fn new(expected: u8, actual: u8) -> Self {
        Self { expected, actual }
    }

    /// True when the values match.
    pub fn is_ok(&self) -> bool {
        self.expected == self.actual
    }

    /// Turn a failed verdict into `Error::ChecksumMismatch` for callers that
    /// refuse untrusted data.
    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::ChecksumMismatch {
                expected: self.expected,
                actual: self.actual,
            })
        }
    }
}

/// XOR of every byte.
pub fn bcc(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Check byte of a single-cascade UID: XOR of its first three bytes.
pub fn uid_checksum(uid: &[u8; 4]) -> u8 {
    uid[0] ^ uid[1] ^ uid[2]
}

/// Compare the check byte received with a 4-byte UID.
pub fn verify_uid(uid: &[u8; 4], checksum: u8) -> ChecksumVerdict {
    ChecksumVerdict::new(uid_checksum(uid), checksum)
}

/// Verdicts for the factory identity area of a simple memory tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityCheck {
    /// BCC0 at byte 3, covering the cascade tag and bytes 0 to 2.
    pub bcc0: ChecksumVerdict,
    /// BCC1 at byte 8, covering bytes 4 to 7.
    pub bcc1: ChecksumVerdict,
}

impl IdentityCheck {
    /// Both check bytes match.
    pub fn is_ok(&self) -> bool {
        self.bcc0.is_ok() && self.bcc1.is_ok()
    }

    /// The seven UID bytes stored in the identity area (bytes 0-2 and 4-7).
    pub fn uid_bytes(data: &[u8]) -> Option<[u8; 7]> {
        if data.len() < 8 {
            return None;
        }
        let mut out = [0u8; 7];
        out[..3].copy_from_slice(&data[..3]);
        out[3..].copy_from_slice(&data[4..8]);
        Some(out)
    }
}

/// Verify the identity area (first 9 bytes) of a simple memory tag.
///
/// BCC0 = CT ^ b0 ^ b1 ^ b2 is stored at b3, BCC1 = b4 ^ b5 ^ b6 ^ b7 at b8.
/// Returns `None` when fewer than 9 bytes are available.
pub fn verify_identity_block(data: &[u8]) -> Option<IdentityCheck> {
    if data.len() < 9 {
        return None;
    }
    let bcc0 = CASCADE_TAG ^ bcc(&data[0..3]);
    let bcc1 = bcc(&data[4..8]);
    Some(IdentityCheck {
        bcc0: ChecksumVerdict::new(bcc0, data[3]),
        bcc1: ChecksumVerdict::new(bcc1, data[8]),
    })
}

/// CRC_A (ISO/IEC 14443-3 Annex B), returned in transmission order.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let mut crc: u16 = 0x6363;
    for &b in data {
        let mut ch = b ^ (crc & 0x00ff) as u8;
        ch ^= ch << 4;
        crc = (crc >> 8) ^ ((ch as u16) << 8) ^ ((ch as u16) << 3) ^ ((ch as u16) >> 4);
    }
    crc.to_le_bytes()
}
