// nfca/src/protocol/commands/mod.rs

/// Anti-collision and select encoders.
pub mod anticollision;
/// READ and HLTA encoders.
pub mod memory;

pub use anticollision::{encode_anticollision, encode_select};
pub use memory::{encode_halt, encode_read};

use crate::constants::{CMD_HALT, CMD_READ, REQA, SHORT_FRAME_BITS};

/// Cascade level of an anti-collision / select exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeLevel {
    /// First level (SEL 0x93).
    One,
    /// Second level (SEL 0x95).
    Two,
}

impl CascadeLevel {
    /// SEL byte for this level.
    pub fn select_code(&self) -> u8 {
        match self {
            Self::One => crate::constants::SEL_CL1,
            Self::Two => crate::constants::SEL_CL2,
        }
    }
}

/// High-level Command enum. Each command's encoder lives in
/// `protocol::commands::<family>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// REQA short frame
    Request,
    /// Anti-collision with no known UID bits
    Anticollision {
        /// Cascade level addressed.
        level: CascadeLevel,
    },
    /// Select with the full 40-bit level response
    Select {
        /// Cascade level addressed.
        level: CascadeLevel,
        /// Bytes returned by the anti-collision of the same level
        cascade: Vec<u8>,
    },
    /// READ of four blocks starting at `block`
    Read {
        /// Start block address.
        block: u8,
    },
    /// HLTA
    Halt,
}

impl Command {
    /// First byte on the wire.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Request => REQA,
            Self::Anticollision { level } | Self::Select { level, .. } => level.select_code(),
            Self::Read { .. } => CMD_READ,
            Self::Halt => CMD_HALT[0],
        }
    }

    /// Whether CRC_A is appended on transmit.
    pub fn uses_crc(&self) -> bool {
        matches!(self, Self::Select { .. } | Self::Read { .. } | Self::Halt)
    }

    /// Number of bits sent when the command is a short frame.
    pub fn short_frame_bits(&self) -> Option<u8> {
        match self {
            Self::Request => Some(SHORT_FRAME_BITS),
            _ => None,
        }
    }

    /// Wire bytes, without CRC_A.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Request => vec![REQA],
            Self::Anticollision { level } => encode_anticollision(*level).to_vec(),
            Self::Select { level, cascade } => encode_select(*level, cascade),
            Self::Read { block } => encode_read(*block).to_vec(),
            Self::Halt => encode_halt().to_vec(),
        }
    }
}
