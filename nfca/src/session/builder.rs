// nfca/src/session/builder.rs

use crate::discovery::DiscoveryTimings;
use crate::frontend::FrontEnd;
use crate::session::handle::{Initialized, Session, Uninitialized};
use crate::{Error, Result};

type Handler = Box<dyn Fn() + Send + Sync>;

/// Helper to construct a Session with optional configuration.
#[derive(Default)]
pub struct SessionBuilder {
    frontend: Option<Box<dyn FrontEnd>>,
    timings: Option<DiscoveryTimings>,
    handler: Option<Handler>,
}

impl SessionBuilder {
    /// Builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the front-end driver (or a `MockFrontEnd`).
    pub fn with_frontend(mut self, frontend: Box<dyn FrontEnd>) -> Self {
        self.frontend = Some(frontend);
        self
    }

    /// Exchange timeouts; defaults apply otherwise.
    pub fn with_timings(mut self, timings: DiscoveryTimings) -> Self {
        self.timings = Some(timings);
        self
    }

    /// Handler for front-end interrupts, installed before the line is armed.
    pub fn on_event<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Consume the builder and return an uninitialized Session.
    pub fn build_uninitialized(self) -> Result<Session<Uninitialized>> {
        let frontend = self
            .frontend
            .ok_or_else(|| Error::FrontEndInit("no front-end provided".into()))?;
        let mut session = Session::new_with_frontend(frontend);
        if let Some(t) = self.timings {
            session = session.with_timings(t);
        }
        if let Some(h) = self.handler {
            session.on_event(h);
        }
        Ok(session)
    }

    /// Build and initialize in one go.
    pub fn build(self) -> Result<Session<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
