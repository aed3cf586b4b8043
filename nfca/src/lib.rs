// nfca/src/lib.rs

//! nfca
//!
//! ISO/IEC 14443-3 Type-A tag discovery for 13.56 MHz reader front-ends:
//! request, cascaded anti-collision and select, UID integrity checks and the
//! bulk memory read of simple memory tags, driven by a scan controller.

#![warn(missing_docs)]

/// Operator command surface.
pub mod command;
/// Type-A protocol constants.
pub mod constants;
/// Tag discovery state machine.
pub mod discovery;
/// Error type.
pub mod error;
/// Radio front-end boundary and mock.
pub mod frontend;
/// Common imports.
pub mod prelude;
/// Checksums, commands and the transceiver adapter.
pub mod protocol;
/// Scan controller and report sinks.
pub mod scan;
/// Session lifecycle.
pub mod session;
/// Scripted responses for tests and benches.
pub mod test_support;
/// Domain types.
pub mod types;
/// Small helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
