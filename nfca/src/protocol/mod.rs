// nfca/src/protocol/mod.rs

/// BCC and CRC_A.
pub mod checksum;
/// Type-A command encoding.
pub mod commands;
/// Fixed-capacity receive buffers.
pub mod exchange;
/// Adapter over the front-end primitive.
pub mod transceiver;

pub use checksum::{
    ChecksumVerdict, IdentityCheck, bcc, crc_a, uid_checksum, verify_identity_block, verify_uid,
};
pub use commands::{CascadeLevel, Command};
pub use exchange::ExchangeResult;
pub use transceiver::{FieldGuard, Transceiver};
