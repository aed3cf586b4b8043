// nfca/src/session/handle.rs

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use log::{debug, info, warn};

use crate::discovery::{self, DiscoveryOutcome, DiscoveryTimings};
use crate::frontend::{FrontEnd, RegisterDump};
use crate::session::events::{EventHandle, EventLine};
use crate::types::Technology;
use crate::{Error, Result};

/// Type-state marker: front-end not brought up yet.
pub struct Uninitialized;
/// Type-state marker: front-end ready for discovery.
pub struct Initialized;

/// Scan session that enforces front-end initialization at compile time.
///
/// The front-end sits behind a mutex: one discovery at a time, and a second
/// request made while one is in flight fails with [`Error::Busy`] instead of
/// queueing.
pub struct Session<State = Uninitialized> {
    frontend: Mutex<Box<dyn FrontEnd>>,
    technology: Technology,
    timings: DiscoveryTimings,
    events: Arc<EventLine>,
    _state: PhantomData<State>,
}

impl<State> Session<State> {
    /// Exchange timeouts used by discovery.
    pub fn timings(&self) -> &DiscoveryTimings {
        &self.timings
    }

    /// The session's interrupt line.
    pub fn events(&self) -> &Arc<EventLine> {
        &self.events
    }

    /// Register a handler called for every front-end interrupt while armed.
    pub fn on_event<F>(&self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.events.set_handler(handler);
    }

    /// Interrupts counted while armed.
    pub fn event_count(&self) -> u64 {
        self.events.count()
    }

    fn lock_blocking(&self) -> MutexGuard<'_, Box<dyn FrontEnd>> {
        self.frontend.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Session<Uninitialized> {
    /// Wrap a front-end without touching the hardware.
    pub fn new_with_frontend(frontend: Box<dyn FrontEnd>) -> Self {
        Self {
            frontend: Mutex::new(frontend),
            technology: Technology::default(),
            timings: DiscoveryTimings::default(),
            events: Arc::new(EventLine::new()),
            _state: PhantomData,
        }
    }

    /// Replace the exchange timeouts.
    pub fn with_timings(mut self, timings: DiscoveryTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Bring the front-end up, reset the technology to ALL and arm the event
    /// line. On failure the front-end is shut down again and
    /// `Error::FrontEndInit` is returned.
    pub fn initialize(self) -> Result<Session<Initialized>> {
        let Session {
            frontend,
            timings,
            events,
            ..
        } = self;
        let mut fe = frontend.into_inner().unwrap_or_else(|e| e.into_inner());

        if let Err(e) = fe.initialize() {
            warn!("front-end initialization failed: {}", e);
            if let Err(e) = fe.shutdown() {
                warn!("front-end shutdown after failed init: {}", e);
            }
            return Err(Error::FrontEndInit(init_reason(e)));
        }

        events.arm();
        fe.attach_events(Some(EventHandle::new(events.clone())));
        info!("session initialized, technology NFC-{}", Technology::All);

        Ok(Session {
            frontend: Mutex::new(fe),
            technology: Technology::All,
            timings,
            events,
            _state: PhantomData,
        })
    }

    /// Report whether `frontend` can be brought up. The front-end is shut
    /// down again either way.
    pub fn probe(frontend: &mut dyn FrontEnd) -> bool {
        let found = match frontend.initialize() {
            Ok(()) => true,
            Err(e) => {
                debug!("probe: {}", e);
                false
            }
        };
        if let Err(e) = frontend.shutdown() {
            warn!("probe: shutdown failed: {}", e);
        }
        found
    }
}

impl Session<Initialized> {
    /// Technology scans run for.
    pub fn technology(&self) -> Technology {
        self.technology
    }

    /// Select the technology for later scans.
    pub fn set_technology(&mut self, technology: Technology) {
        debug!("technology NFC-{} -> NFC-{}", self.technology, technology);
        self.technology = technology;
    }

    /// Replace the exchange timeouts.
    pub fn set_timings(&mut self, timings: DiscoveryTimings) {
        self.timings = timings;
    }

    /// Run one Type-A discovery attempt.
    pub fn discover(&self) -> Result<DiscoveryOutcome> {
        if !self.technology.uses_type_a() {
            return Err(Error::UnsupportedTechnology(self.technology));
        }
        let mut fe = self.try_lock()?;
        discovery::discover(&mut **fe, &self.timings)
    }

    /// Dump the front-end's registers. Fails with `Error::Busy` while a
    /// discovery holds the front-end.
    pub fn register_dump(&self) -> Result<RegisterDump> {
        let mut fe = self.try_lock()?;
        fe.register_dump()
    }

    /// Disarm the event line and release the front-end.
    pub fn shutdown(self) -> Result<()> {
        self.events.disarm();
        let mut fe = self.lock_blocking();
        fe.attach_events(None);
        let res = fe.shutdown();
        info!("session closed after {} event(s)", self.events.count());
        res
    }

    fn try_lock(&self) -> Result<MutexGuard<'_, Box<dyn FrontEnd>>> {
        match self.frontend.try_lock() {
            Ok(g) => Ok(g),
            Err(TryLockError::WouldBlock) => Err(Error::Busy),
            Err(TryLockError::Poisoned(p)) => Ok(p.into_inner()),
        }
    }
}

fn init_reason(e: Error) -> String {
    match e {
        Error::FrontEnd(msg) | Error::FrontEndInit(msg) => msg,
        other => other.to_string(),
    }
}
