// Shared helpers for integration tests. Each aggregator includes this module
// via `#[path]`, so not every helper is used by every test crate.
#![allow(dead_code)]


pub use fixtures::*;

use nfca::frontend::MockFrontEnd;
use nfca::session::{Initialized, Session};

/// Install env_logger once; `RUST_LOG=trace` shows every exchange.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mock plus an initialized session sharing its state.
pub fn mock_session() -> (MockFrontEnd, Session<Initialized>) {
    init_logging();
    let mock = MockFrontEnd::new();
    let session = nfca::test_support::initialized_mock_session(&mock).unwrap();
    (mock, session)
}
