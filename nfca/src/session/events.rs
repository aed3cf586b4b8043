// nfca/src/session/events.rs

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

type Handler = Box<dyn Fn() + Send + Sync>;

/// Front-end interrupt line: an atomic tally plus an optional handler.
///
/// Armed when a session is initialized, disarmed on shutdown. Pulses received
/// while disarmed are dropped. Discovery never waits on it.
#[derive(Default)]
pub struct EventLine {
    armed: AtomicBool,
    count: AtomicU64,
    handler: Mutex<Option<Handler>>,
}

impl EventLine {
    /// Disarmed line with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting pulses.
    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Drop pulses from now on.
    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    /// Whether pulses are counted.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Pulses counted since the line was created or last reset.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Install (or replace) the handler called on every armed pulse.
    pub fn set_handler<F>(&self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut slot = self.handler.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Box::new(handler));
    }

    /// Remove the handler.
    pub fn clear_handler(&self) {
        let mut slot = self.handler.lock().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    fn pulse(&self) {
        if !self.is_armed() {
            return;
        }
        self.count.fetch_add(1, Ordering::SeqCst);
        // try_lock: a handler that re-enters the line must not deadlock it
        if let Ok(slot) = self.handler.try_lock() {
            if let Some(h) = slot.as_ref() {
                h();
            }
        }
    }
}

impl fmt::Debug for EventLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLine")
            .field("armed", &self.is_armed())
            .field("count", &self.count())
            .finish()
    }
}

/// Cloneable handle a front-end driver uses to signal its interrupt line.
#[derive(Clone)]
pub struct EventHandle(Arc<EventLine>);

impl EventHandle {
    /// Handle on `line`.
    pub fn new(line: Arc<EventLine>) -> Self {
        Self(line)
    }

    /// Signal one interrupt.
    pub fn notify(&self) {
        self.0.pulse();
    }
}

impl fmt::Debug for EventHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventHandle").field(&self.0).finish()
    }
}
