// nfca/src/error.rs

use thiserror::Error;

use crate::command::Action;
use crate::types::Technology;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// The radio front-end could not be brought up. Fatal to the session.
    #[error("front-end initialization failed: {0}")]
    FrontEndInit(String),

    /// Front-end I/O failure during a session.
    #[error("front-end error: {0}")]
    FrontEnd(String),

    /// Raised by front-ends when an exchange receives nothing. The transceiver
    /// adapter turns this into an empty `ExchangeResult`.
    #[error("operation timed out")]
    Timeout,

    /// A check byte disagreed with the data it covers.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Computed check byte.
        expected: u8,
        /// Received check byte.
        actual: u8,
    },

    /// Data of the wrong size.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },

    /// Another discovery holds the front-end.
    #[error("a discovery is already in flight")]
    Busy,

    /// The action exists on the command surface only.
    #[error("{0} not implemented")]
    NotImplemented(Action),

    /// Discovery was asked for a family other than Type-A.
    #[error("technology NFC-{0} is not supported by the discovery engine")]
    UnsupportedTechnology(Technology),

    /// The front-end lacks an optional capability.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A name failed to parse.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
