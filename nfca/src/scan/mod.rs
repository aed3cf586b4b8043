// nfca/src/scan/mod.rs

//! Scan controller: maps the session's technology to discovery runs and
//! hands each result to a [`ReportSink`].

/// Cancellation sources.
pub mod cancel;
/// Scan configuration.
pub mod config;
/// Tokio-driven continuous scanning.
#[cfg(feature = "async")]
pub mod nonblocking;
/// Result sinks.
pub mod report;

pub use cancel::{CancelSignal, Never};
pub use config::{RunMode, ScanConfig};
pub use report::{CollectingSink, LogSink, ReportSink, ScanReport, TextSink};

use std::thread;

use log::{debug, info, warn};

use crate::session::{Initialized, Session};

/// Counters of one scan run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    /// Discovery attempts made, including failed ones.
    pub attempts: u64,
    /// Attempts that selected a tag.
    pub tags_found: u64,
    /// Attempts that ended in a front-end error.
    pub errors: u64,
}

/// What the loop should do after an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Runs discovery attempts for one session and reports each one to a sink.
pub struct ScanController<'s, R: ReportSink> {
    session: &'s Session<Initialized>,
    sink: R,
    config: ScanConfig,
}

impl<'s, R: ReportSink> ScanController<'s, R> {
    /// The technology is taken from the session and stays fixed for the
    /// controller's lifetime.
    pub fn new(session: &'s Session<Initialized>, sink: R, mode: RunMode) -> Self {
        Self {
            session,
            sink,
            config: ScanConfig {
                technology: session.technology(),
                mode,
            },
        }
    }

    /// Technology and mode in effect.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// The report sink.
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Give the sink back.
    pub fn into_sink(self) -> R {
        self.sink
    }

    /// Exactly one attempt, regardless of the run mode.
    pub fn run_once(&mut self) -> ScanSummary {
        let mut summary = ScanSummary::default();
        self.attempt(&mut summary);
        summary
    }

    /// Run according to the configured mode. Continuous runs poll `cancel`
    /// once per iteration, after the attempt and before sleeping.
    pub fn run<C: CancelSignal + ?Sized>(&mut self, cancel: &C) -> ScanSummary {
        let mut summary = ScanSummary::default();
        self.start();

        match self.config.mode {
            RunMode::Single => {
                self.attempt(&mut summary);
            }
            RunMode::Continuous { period_ms } => {
                let period = crate::utils::ms(period_ms);
                loop {
                    if self.attempt(&mut summary) == Flow::Stop {
                        break;
                    }
                    if cancel.is_cancelled() {
                        debug!("scan cancelled");
                        break;
                    }
                    thread::sleep(period);
                }
            }
        }

        self.finish(&summary);
        summary
    }

    fn start(&mut self) {
        if let RunMode::Continuous { period_ms } = self.config.mode {
            info!(
                "Scanning NFC-{} with {}ms period",
                self.config.technology, period_ms
            );
            let worst = self.session.timings().worst_case_ms();
            if period_ms < worst {
                warn!(
                    "scan period {}ms is shorter than one attempt can take ({}ms)",
                    period_ms, worst
                );
            }
        }
        self.sink.scan_started(&self.config);
    }

    fn finish(&mut self, summary: &ScanSummary) {
        info!(
            "scan finished: {} attempt(s), {} tag(s), {} error(s), {} front-end event(s)",
            summary.attempts,
            summary.tags_found,
            summary.errors,
            self.session.event_count()
        );
    }

    fn attempt(&mut self, summary: &mut ScanSummary) -> Flow {
        summary.attempts += 1;
        let technology = self.config.technology;
        if !technology.uses_type_a() {
            self.sink.report(&ScanReport::Unsupported(technology));
            return Flow::Stop;
        }

        match self.session.discover() {
            Ok(outcome) => {
                if let Some(rec) = outcome.tag() {
                    summary.tags_found += 1;
                    info!("tag found: UID {}", rec.uid.to_hex());
                }
                self.sink.report(&ScanReport::Discovery {
                    technology,
                    outcome,
                });
            }
            Err(e) => {
                summary.errors += 1;
                warn!("discovery failed: {}", e);
                self.sink.error(&e);
            }
        }
        Flow::Continue
    }
}
