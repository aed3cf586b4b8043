// nfca/src/discovery/mod.rs

//! Type-A tag discovery: request, anti-collision and select over one or two
//! cascade levels, followed by either a bulk memory read or HALT.
//!
//! Every call to [`discover`] starts from [`DiscoveryState::Idle`] with fresh
//! buffers. The field is energized for the duration of the attempt only.

/// Per-level anti-collision buffers.
pub mod cascade;
/// Exchange timeouts.
pub mod config;
/// Discovery results.
pub mod record;
/// State machine states and step outcomes.
pub mod state;

pub use cascade::CascadeBuffer;
pub use config::DiscoveryTimings;
pub use record::{DiscoveryOutcome, DiscoveryRecord, MemoryPage};
pub use state::{DiscoveryState, StepOutcome};

use log::{debug, warn};

use crate::constants::{ATQA_MAX, BLOCK_LEN, BLOCKS_PER_PAGE, CASCADE_MAX, HALT_MAX, READ_RESPONSE_MAX, SAK_MAX};
use crate::frontend::FrontEnd;
use crate::protocol::{
    CascadeLevel, ChecksumVerdict, Command, ExchangeResult, Transceiver, verify_uid,
};
use crate::types::{Atqa, Framing, Sak, Uid};
use crate::utils::bytes_to_hex_spaced;
use crate::Result;
use config::REQUEST_RETRIES;
use record::is_simple_memory_tag;
use state::Transition;

/// Run one discovery attempt on `frontend`.
///
/// Silence is never an error: it ends the attempt with
/// [`DiscoveryOutcome::NoResponse`] or [`DiscoveryOutcome::Aborted`]. Only
/// front-end failures are returned as `Err`, after the field was turned off.
pub fn discover(frontend: &mut dyn FrontEnd, timings: &DiscoveryTimings) -> Result<DiscoveryOutcome> {
    let mut xcvr = Transceiver::new(frontend);
    xcvr.reset_framing()?;
    let mut field = xcvr.field_on()?;
    Attempt::new(&mut field, *timings).run()
}

struct Attempt<'a, 'f> {
    xcvr: &'a mut Transceiver<'f>,
    timings: DiscoveryTimings,
    state: DiscoveryState,
    atqa: Atqa,
    cl1: CascadeBuffer,
    cl2: CascadeBuffer,
    sak1: Sak,
    sak2: Option<Sak>,
    uid: Option<Uid>,
    uid_check: Option<ChecksumVerdict>,
    halt: Option<ExchangeResult<HALT_MAX>>,
    memory: Option<MemoryPage>,
}

impl<'a, 'f> Attempt<'a, 'f> {
    fn new(xcvr: &'a mut Transceiver<'f>, timings: DiscoveryTimings) -> Self {
        Self {
            xcvr,
            timings,
            state: DiscoveryState::Idle,
            atqa: Atqa::default(),
            cl1: CascadeBuffer::default(),
            cl2: CascadeBuffer::default(),
            sak1: Sak::default(),
            sak2: None,
            uid: None,
            uid_check: None,
            halt: None,
            memory: None,
        }
    }

    fn run(mut self) -> Result<DiscoveryOutcome> {
        loop {
            match self.step()? {
                Transition::Next(next) => {
                    debug!("discovery: {} -> {}", self.state, next);
                    self.state = next;
                }
                Transition::NoTag => {
                    debug!("discovery: no tag");
                    return Ok(DiscoveryOutcome::NoResponse);
                }
                Transition::Abort => {
                    debug!("discovery: tag went silent after {}", self.state);
                    return Ok(DiscoveryOutcome::Aborted {
                        atqa: self.atqa,
                        state: self.state,
                    });
                }
                Transition::Done => return Ok(self.finish()),
            }
        }
    }

    fn step(&mut self) -> Result<Transition> {
        use DiscoveryState::*;

        match self.state {
            Idle => self.request(),
            RequestSent => self.anticollision_level1(),
            Level1Anticoll => self.select_level1(),
            Level1Select => self.after_level1(),
            Level2Anticoll => self.select_level2(),
            Level2Select => Ok(Transition::Next(Selected)),
            Selected => self.release(),
            BulkRead => Ok(Transition::Next(Halted)),
            Halted => Ok(Transition::Done),
        }
    }

    fn request(&mut self) -> Result<Transition> {
        for attempt in 0..=REQUEST_RETRIES {
            let rx: ExchangeResult<ATQA_MAX> =
                self.xcvr.transceive(&Command::Request, self.timings.request_ms)?;
            if !rx.is_empty() {
                self.atqa = Atqa::from_exchange(&rx);
                debug!("ATQA {}", bytes_to_hex_spaced(rx.as_bytes()));
                return Ok(Transition::Next(DiscoveryState::RequestSent));
            }
            debug!("REQA attempt {} unanswered", attempt + 1);
        }
        Ok(Transition::NoTag)
    }

    fn anticollision(&mut self, level: CascadeLevel) -> Result<StepOutcome<CascadeBuffer>> {
        let rx: ExchangeResult<CASCADE_MAX> = self
            .xcvr
            .transceive(&Command::Anticollision { level }, self.timings.anticoll_ms)?;
        if rx.is_empty() {
            return Ok(StepOutcome::NoResponse);
        }
        let buf = CascadeBuffer::new(rx);
        if level == CascadeLevel::One && !buf.starts_with_cascade_tag() {
            let verdict = verify_uid(&buf.head(), buf.check_byte());
            if !verdict.is_ok() {
                return Ok(StepOutcome::ChecksumFailure { data: buf, verdict });
            }
        }
        Ok(StepOutcome::Data(buf))
    }

    fn anticollision_level1(&mut self) -> Result<Transition> {
        let out = self.anticollision(CascadeLevel::One)?;
        if let Some(v) = out.verdict() {
            warn!(
                "UID check byte mismatch: expected {:02X}, got {:02X}",
                v.expected, v.actual
            );
        }
        let Some(buf) = out.data() else {
            return Ok(Transition::Abort);
        };
        self.cl1 = buf;
        debug!(
            "CL1 {} (cascade tag: {})",
            bytes_to_hex_spaced(buf.as_bytes()),
            buf.starts_with_cascade_tag()
        );
        Ok(Transition::Next(DiscoveryState::Level1Anticoll))
    }

    fn select_level1(&mut self) -> Result<Transition> {
        // Complete UID at level 1: the select is the final one of the path.
        if !self.cl1.starts_with_cascade_tag() {
            self.xcvr.set_framing(Framing::CRC_ON_RECEIVE)?;
        }
        let cmd = Command::Select {
            level: CascadeLevel::One,
            cascade: self.cl1.as_bytes().to_vec(),
        };
        let rx: ExchangeResult<SAK_MAX> = self.xcvr.transceive(&cmd, self.timings.select_ms)?;
        self.sak1 = Sak::new(rx);
        debug!("SAK1 {}", bytes_to_hex_spaced(self.sak1.as_bytes()));
        Ok(Transition::Next(DiscoveryState::Level1Select))
    }

    fn after_level1(&mut self) -> Result<Transition> {
        if !(self.cl1.starts_with_cascade_tag() && self.sak1.has_cascade_bit()) {
            if self.cl1.starts_with_cascade_tag() {
                debug!("cascade tag without extended-UID bit in SAK1, keeping 4-byte UID");
            }
            let head = self.cl1.head();
            self.uid = Some(Uid::Single(head));
            self.uid_check = Some(verify_uid(&head, self.cl1.check_byte()));
            return Ok(Transition::Next(DiscoveryState::Selected));
        }

        let Some(buf) = self.anticollision(CascadeLevel::Two)?.data() else {
            return Ok(Transition::Abort);
        };
        self.cl2 = buf;
        let mut uid = [0u8; 7];
        uid[..3].copy_from_slice(self.cl1.uid_part());
        uid[3..].copy_from_slice(&buf.head());
        self.uid = Some(Uid::Double(uid));
        debug!("CL2 {}", bytes_to_hex_spaced(buf.as_bytes()));
        Ok(Transition::Next(DiscoveryState::Level2Anticoll))
    }

    fn select_level2(&mut self) -> Result<Transition> {
        self.xcvr.set_framing(Framing::CRC_ON_RECEIVE)?;
        let cmd = Command::Select {
            level: CascadeLevel::Two,
            cascade: self.cl2.as_bytes().to_vec(),
        };
        let rx: ExchangeResult<SAK_MAX> = self.xcvr.transceive(&cmd, self.timings.select_ms)?;
        if rx.is_empty() {
            debug!("SAK2 missing");
            self.sak2 = None;
        } else {
            debug!("SAK2 {}", bytes_to_hex_spaced(rx.as_bytes()));
            self.sak2 = Some(Sak::new(rx));
        }
        Ok(Transition::Next(DiscoveryState::Level2Select))
    }

    fn release(&mut self) -> Result<Transition> {
        if is_simple_memory_tag(&self.atqa, &self.sak1, self.sak2.as_ref()) {
            self.bulk_read()?;
            return Ok(Transition::Next(DiscoveryState::BulkRead));
        }
        let rx: ExchangeResult<HALT_MAX> =
            self.xcvr.transceive(&Command::Halt, self.timings.halt_ms)?;
        self.halt = Some(rx);
        Ok(Transition::Next(DiscoveryState::Halted))
    }

    fn bulk_read(&mut self) -> Result<()> {
        let mut page = MemoryPage::new();
        for block in 0..BLOCKS_PER_PAGE as u8 {
            let rx: ExchangeResult<READ_RESPONSE_MAX> = self
                .xcvr
                .transceive(&Command::Read { block }, self.timings.read_ms)?;
            // A short answer (NAK or truncated frame) would shift every later
            // block off its 4-byte boundary.
            if rx.len() < BLOCK_LEN {
                warn!(
                    "READ block {} answered with {} byte(s), keeping {} byte(s)",
                    block,
                    rx.len(),
                    page.len()
                );
                break;
            }
            page.push_block(rx.as_bytes());
        }
        debug!("bulk read {} byte(s)", page.len());
        self.memory = Some(page);
        Ok(())
    }

    fn finish(self) -> DiscoveryOutcome {
        let Some(uid) = self.uid else {
            return DiscoveryOutcome::Aborted {
                atqa: self.atqa,
                state: self.state,
            };
        };
        DiscoveryOutcome::Tag(DiscoveryRecord {
            atqa: self.atqa,
            sak1: self.sak1,
            sak2: self.sak2,
            uid,
            uid_check: self.uid_check,
            halt: self.halt,
            memory: self.memory,
        })
    }
}
