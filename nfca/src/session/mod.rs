// nfca/src/session/mod.rs

/// Session construction.
pub mod builder;
/// Front-end interrupt line.
pub mod events;
/// Type-state session handle.
pub mod handle;

pub use builder::SessionBuilder;
pub use events::{EventHandle, EventLine};
pub use handle::{Initialized, Session, Uninitialized};
