// nfca/src/constants.rs
//! ISO/IEC 14443-3 Type-A protocol constants used across the crate

/// REQA short frame (7 bits)
pub const REQA: u8 = 0x26;

/// Number of bits transmitted for a short frame
pub const SHORT_FRAME_BITS: u8 = 7;

/// Select code for cascade level 1
pub const SEL_CL1: u8 = 0x93;
/// Select code for cascade level 2
pub const SEL_CL2: u8 = 0x95;

/// NVB for a full anti-collision request (no known UID bits)
pub const NVB_ANTICOLL: u8 = 0x20;

/// NVB for a select carrying all 40 bits of the cascade buffer
pub const NVB_SELECT: u8 = 0x70;

/// Cascade tag marker: first byte of a level response when the UID continues
/// on the next cascade level.
pub const CASCADE_TAG: u8 = 0x88;

/// SAK bit signalling that the UID is not complete yet
pub const SAK_CASCADE_BIT: u8 = 0x04;

/// READ command (returns four 4-byte blocks starting at the given address)
pub const CMD_READ: u8 = 0x30;

/// HLTA command bytes
pub const CMD_HALT: [u8; 2] = [0x50, 0x00];

/// Simple read/write memory tag signature (Ultralight class)
pub const SIMPLE_TAG_ATQA: [u8; 2] = [0x44, 0x00];
/// First SAK1 byte of a simple memory tag
pub const SIMPLE_TAG_SAK1: u8 = 0x04;

/// Trailing CRC_A length in bytes
pub const CRC_LEN: usize = 2;

// Fixed-capacity response buffers, sized to the largest legal response of
// each exchange.

/// ATQA response capacity
pub const ATQA_MAX: usize = 2;
/// Anti-collision response capacity: four UID bytes plus the check byte
pub const CASCADE_MAX: usize = 5;
/// SAK response capacity: one byte plus CRC_A
pub const SAK_MAX: usize = 3;
/// HALT response capacity
pub const HALT_MAX: usize = 4;
/// READ response capacity: 16 data bytes plus CRC_A
pub const READ_RESPONSE_MAX: usize = 16 + CRC_LEN;

// Bulk read geometry: one 16-byte page read as four 4-byte blocks.

/// Bytes kept per READ
pub const BLOCK_LEN: usize = 4;
/// READ commands per bulk read
pub const BLOCKS_PER_PAGE: usize = 4;
/// Bytes of one complete bulk read
pub const PAGE_LEN: usize = BLOCK_LEN * BLOCKS_PER_PAGE;
