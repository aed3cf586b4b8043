// nfca/src/frontend/mock.rs

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use crate::frontend::RegisterDump;
use crate::frontend::traits::FrontEnd;
use crate::session::EventHandle;
use crate::types::Framing;
use crate::utils::ms;
use crate::{Error, Result};

/// One exchange as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentFrame {
    /// Transmitted bytes.
    pub data: Vec<u8>,
    /// Transmitted bit count (7 for a short frame).
    pub bits: usize,
    /// Receive timeout of the exchange.
    pub timeout_ms: u64,
    /// CRC_A appended on transmit.
    pub crc_on_tx: bool,
    /// Inbound CRC checking active.
    pub crc_on_rx: bool,
}

/// Queued reply for the next exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Deliver these bytes.
    Data(Vec<u8>),
    /// Report a timeout as `Ok(0)`.
    Silent,
    /// Fail the exchange with a front-end I/O error.
    Fault(String),
}

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<SentFrame>,
    responses: Vec<MockReply>,
    field_log: Vec<bool>,
    field_on: bool,
    framings: Vec<Framing>,
    initialized: bool,
    init_failure: Option<String>,
    shutdowns: usize,
    latency_ms: u64,
    registers: Option<RegisterDump>,
    events: Option<EventHandle>,
    events_per_exchange: u32,
}

/// Mock front-end for unit tests. It records exchanges and returns queued
/// responses. An empty queue answers with `Error::Timeout`.
///
/// Clones share state, so a test can keep one clone to inspect what the
/// session or engine did with the other.
#[derive(Debug, Clone, Default)]
pub struct MockFrontEnd {
    state: Arc<Mutex<MockState>>,
}

impl MockFrontEnd {
    /// Mock with an empty reply queue.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a data reply.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.state().responses.push(MockReply::Data(resp));
    }

    /// Queue a silent reply, reported as `Ok(0)`.
    pub fn push_silence(&self) {
        self.state().responses.push(MockReply::Silent);
    }

    /// Queue a front-end failure.
    pub fn push_fault(&self, msg: &str) {
        self.state().responses.push(MockReply::Fault(msg.to_string()));
    }

    /// Queue several replies in order.
    pub fn push_replies(&self, replies: Vec<MockReply>) {
        self.state().responses.extend(replies);
    }

    /// Replies not consumed yet.
    pub fn pending_responses(&self) -> usize {
        self.state().responses.len()
    }

    /// Make the next `initialize` call fail.
    pub fn fail_init(&self, msg: &str) {
        self.state().init_failure = Some(msg.to_string());
    }

    /// Delay every exchange by `latency_ms`.
    pub fn set_latency_ms(&self, latency_ms: u64) {
        self.state().latency_ms = latency_ms;
    }

    /// Registers returned by `register_dump`.
    pub fn set_registers(&self, dump: RegisterDump) {
        self.state().registers = Some(dump);
    }

    /// Pulse the attached event line this many times per exchange.
    pub fn set_events_per_exchange(&self, n: u32) {
        self.state().events_per_exchange = n;
    }

    /// Every exchange so far, oldest first.
    pub fn sent(&self) -> Vec<SentFrame> {
        self.state().sent.clone()
    }

    /// Forget recorded exchanges.
    pub fn clear_sent(&self) {
        self.state().sent.clear();
    }

    /// Field transitions: `true` for on, `false` for off.
    pub fn field_log(&self) -> Vec<bool> {
        self.state().field_log.clone()
    }

    /// Current field state.
    pub fn is_field_on(&self) -> bool {
        self.state().field_on
    }

    /// Framings configured so far.
    pub fn framings(&self) -> Vec<Framing> {
        self.state().framings.clone()
    }

    /// Initialized and not shut down since.
    pub fn is_initialized(&self) -> bool {
        self.state().initialized
    }

    /// Number of `shutdown` calls.
    pub fn shutdown_count(&self) -> usize {
        self.state().shutdowns
    }

    /// An event handle is attached.
    pub fn has_events(&self) -> bool {
        self.state().events.is_some()
    }
}

impl FrontEnd for MockFrontEnd {
    fn initialize(&mut self) -> Result<()> {
        let mut st = self.state();
        if let Some(msg) = st.init_failure.take() {
            return Err(Error::FrontEnd(msg));
        }
        st.initialized = true;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        let mut st = self.state();
        st.initialized = false;
        st.shutdowns += 1;
        Ok(())
    }

    fn field_on(&mut self) -> Result<()> {
        let mut st = self.state();
        st.field_on = true;
        st.field_log.push(true);
        Ok(())
    }

    fn field_off(&mut self) -> Result<()> {
        let mut st = self.state();
        st.field_on = false;
        st.field_log.push(false);
        Ok(())
    }

    fn configure(&mut self, framing: Framing) -> Result<()> {
        self.state().framings.push(framing);
        Ok(())
    }

    fn send_receive(
        &mut self,
        tx: &[u8],
        tx_bits: usize,
        timeout_ms: u64,
        crc_on_tx: bool,
        crc_on_rx: bool,
        rx: &mut [u8],
    ) -> Result<usize> {
        let (latency, reply, events, pulses) = {
            let mut st = self.state();
            st.sent.push(SentFrame {
                data: tx.to_vec(),
                bits: tx_bits,
                timeout_ms,
                crc_on_tx,
                crc_on_rx,
            });
            let reply = if st.responses.is_empty() {
                None
            } else {
                Some(st.responses.remove(0))
            };
            (
                st.latency_ms,
                reply,
                st.events.clone(),
                st.events_per_exchange,
            )
        };

        // Sleep outside the lock so probes stay usable from other threads.
        if latency > 0 {
            thread::sleep(ms(latency));
        }
        if let Some(events) = events {
            for _ in 0..pulses {
                events.notify();
            }
        }

        match reply {
            None => Err(Error::Timeout),
            Some(MockReply::Silent) => Ok(0),
            Some(MockReply::Fault(msg)) => Err(Error::FrontEnd(msg)),
            Some(MockReply::Data(bytes)) => {
                let n = bytes.len().min(rx.len());
                rx[..n].copy_from_slice(&bytes[..n]);
                Ok(n)
            }
        }
    }

    fn register_dump(&mut self) -> Result<RegisterDump> {
        self.state()
            .registers
            .clone()
            .ok_or_else(|| Error::UnsupportedOperation("no registers seeded".into()))
    }

    fn attach_events(&mut self, events: Option<EventHandle>) {
        self.state().events = events;
    }
}
