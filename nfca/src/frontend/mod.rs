// nfca/src/frontend/mod.rs

/// Scriptable front-end for tests.
pub mod mock;
/// Register dumps.
pub mod registers;
/// The front-end boundary.
pub mod traits;

pub use mock::{MockFrontEnd, MockReply, SentFrame};
pub use registers::RegisterDump;
pub use traits::FrontEnd;
