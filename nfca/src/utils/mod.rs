// nfca/src/utils/mod.rs

//! Small helpers shared across the crate: hex formatting for traces and
//! reports, millisecond conversions.

/// Hex formatting and parsing.
pub mod hex;
/// Millisecond helpers.
pub mod timeout;

pub use hex::*;
pub use timeout::*;
