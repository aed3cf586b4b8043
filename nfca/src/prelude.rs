// nfca/src/prelude.rs

pub use crate::command::{Action, CommandRequest, CommandStatus, ShowTarget, execute};
pub use crate::discovery::{
    DiscoveryOutcome, DiscoveryRecord, DiscoveryState, DiscoveryTimings, MemoryPage, discover,
};
pub use crate::frontend::{FrontEnd, MockFrontEnd, RegisterDump};
pub use crate::protocol::{ChecksumVerdict, ExchangeResult, IdentityCheck};
pub use crate::scan::{
    CancelSignal, CollectingSink, LogSink, ReportSink, RunMode, ScanConfig, ScanController,
    ScanReport, ScanSummary, TextSink,
};
pub use crate::session::{EventHandle, EventLine, Initialized, Session, SessionBuilder, Uninitialized};
pub use crate::{Atqa, Error, Framing, Result, Sak, Technology, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
