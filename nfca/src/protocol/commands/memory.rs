// nfca/src/protocol/commands/memory.rs

use crate::constants::{CMD_HALT, CMD_READ};

/// READ: 0x30 + block address
pub fn encode_read(block: u8) -> [u8; 2] {
    [CMD_READ, block]
}

/// HLTA: 0x50 0x00
pub fn encode_halt() -> [u8; 2] {
    CMD_HALT
}
