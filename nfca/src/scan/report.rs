// nfca/src/scan/report.rs

use std::io::{self, Write};

use log::{debug, info, warn};

use crate::discovery::{DiscoveryOutcome, DiscoveryRecord};
use crate::frontend::RegisterDump;
use crate::scan::config::{RunMode, ScanConfig};
use crate::types::{Technology, Uid};
use crate::utils::bytes_to_hex_upper_spaced as hex;
use crate::Error;

/// One scan attempt as handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanReport {
    /// A discovery attempt ran.
    Discovery {
        /// Family scanned for.
        technology: Technology,
        /// What the attempt found.
        outcome: DiscoveryOutcome,
    },
    /// The selected family has no discovery engine; the radio was not used.
    Unsupported(Technology),
}

impl ScanReport {
    /// The tag record, when a tag was selected.
    pub fn record(&self) -> Option<&DiscoveryRecord> {
        match self {
            Self::Discovery { outcome, .. } => outcome.tag(),
            Self::Unsupported(_) => None,
        }
    }
}

/// Receives structured scan results. Formatting is up to the sink.
pub trait ReportSink {
    /// A run is about to make its first attempt.
    fn scan_started(&mut self, _config: &ScanConfig) {}

    /// One attempt finished.
    fn report(&mut self, report: &ScanReport);

    /// A discovery failed; the scan loop carries on.
    fn error(&mut self, err: &Error);

    /// Operator-facing message (e.g. "sniff not implemented").
    fn notice(&mut self, msg: &str);

    /// Register dump for `show registers`. Defaults to one notice per line.
    fn registers(&mut self, dump: &RegisterDump) {
        for line in dump.to_string().lines() {
            self.notice(line);
        }
    }
}

impl<R: ReportSink + ?Sized> ReportSink for &mut R {
    fn scan_started(&mut self, config: &ScanConfig) {
        (**self).scan_started(config)
    }

    fn report(&mut self, report: &ScanReport) {
        (**self).report(report)
    }

    fn error(&mut self, err: &Error) {
        (**self).error(err)
    }

    fn notice(&mut self, msg: &str) {
        (**self).notice(msg)
    }

    fn registers(&mut self, dump: &RegisterDump) {
        (**self).registers(dump)
    }
}

/// Renders reports as console text, one field per line.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    /// Render to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give the writer back.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, rec: &DiscoveryRecord) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "ATQA: {}", hex(rec.atqa.as_bytes()))?;
        if !rec.sak1.is_empty() {
            writeln!(out, "SAK1: {}", hex(rec.sak1.as_bytes()))?;
        }
        if let Some(sak2) = rec.sak2.as_ref() {
            writeln!(out, "SAK2: {}", hex(sak2.as_bytes()))?;
        }
        match (&rec.uid, rec.uid_check) {
            (Uid::Single(_), Some(v)) => writeln!(
                out,
                "UID: {} (BCC {:02X} {})",
                hex(rec.uid.as_bytes()),
                v.actual,
                verdict_text(v.is_ok())
            )?,
            _ => writeln!(out, "UID: {}", hex(rec.uid.as_bytes()))?,
        }

        let Some(page) = rec.memory.as_ref().filter(|p| !p.is_empty()) else {
            return Ok(());
        };
        write!(out, "DATA:")?;
        for (i, b) in page.as_bytes().iter().enumerate() {
            if i % 16 == 0 {
                writeln!(out)?;
            }
            write!(out, " {:02X}", b)?;
        }
        writeln!(out)?;
        if let Some(uid) = page.identity_uid() {
            writeln!(out, "DATA UID: {}", hex(&uid))?;
        }
        if let Some(check) = page.identity_check() {
            writeln!(
                out,
                " (DATA BCC0 {:02X} {})",
                check.bcc0.expected,
                verdict_text(check.bcc0.is_ok())
            )?;
            writeln!(
                out,
                " (DATA BCC1 {:02X} {})",
                check.bcc1.expected,
                verdict_text(check.bcc1.is_ok())
            )?;
        }
        Ok(())
    }

    fn write_report(&mut self, report: &ScanReport) -> io::Result<()> {
        match report {
            ScanReport::Discovery { outcome, .. } => match outcome {
                DiscoveryOutcome::NoResponse => Ok(()),
                DiscoveryOutcome::Aborted { atqa, .. } => {
                    writeln!(self.out, "ATQA: {}", hex(atqa.as_bytes()))
                }
                DiscoveryOutcome::Tag(rec) => self.write_record(rec),
            },
            ScanReport::Unsupported(t) => writeln!(self.out, "NFC-{} not supported", t),
        }
    }

    fn emit(&mut self, res: io::Result<()>) {
        if let Err(e) = res.and_then(|_| self.out.flush()) {
            warn!("report sink write failed: {}", e);
        }
    }
}

fn verdict_text(ok: bool) -> &'static str {
    if ok { "ok" } else { "NOT OK" }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn scan_started(&mut self, config: &ScanConfig) {
        if let RunMode::Continuous { period_ms } = config.mode {
            let res = writeln!(
                self.out,
                "Scanning NFC-{} with {}ms period",
                config.technology, period_ms
            );
            self.emit(res);
        }
    }

    fn report(&mut self, report: &ScanReport) {
        let res = self.write_report(report);
        self.emit(res);
    }

    fn error(&mut self, err: &Error) {
        let res = writeln!(self.out, "Error: {}", err);
        self.emit(res);
    }

    fn notice(&mut self, msg: &str) {
        let res = writeln!(self.out, "{}", msg);
        self.emit(res);
    }

    fn registers(&mut self, dump: &RegisterDump) {
        let res = write!(self.out, "{}", dump);
        self.emit(res);
    }
}

/// Routes reports to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn scan_started(&mut self, config: &ScanConfig) {
        info!("scan started: NFC-{} {:?}", config.technology, config.mode);
    }

    fn report(&mut self, report: &ScanReport) {
        match report {
            ScanReport::Discovery {
                technology,
                outcome,
            } => match outcome {
                DiscoveryOutcome::NoResponse => debug!("NFC-{}: no tag", technology),
                DiscoveryOutcome::Aborted { atqa, state } => info!(
                    "NFC-{}: tag {} lost after {}",
                    technology,
                    hex(atqa.as_bytes()),
                    state
                ),
                DiscoveryOutcome::Tag(rec) => {
                    info!(
                        "NFC-{}: UID {} ATQA {} SAK1 {}",
                        technology,
                        hex(rec.uid.as_bytes()),
                        hex(rec.atqa.as_bytes()),
                        hex(rec.sak1.as_bytes())
                    );
                    if rec.has_checksum_failure() {
                        warn!("UID {}: checksum mismatch", rec.uid.to_hex());
                    }
                }
            },
            ScanReport::Unsupported(t) => warn!("NFC-{} not supported", t),
        }
    }

    fn error(&mut self, err: &Error) {
        warn!("scan error: {}", err);
    }

    fn notice(&mut self, msg: &str) {
        info!("{}", msg);
    }
}

/// Keeps everything it is handed. Used by tests and embedders that render
/// results themselves.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    /// Configurations of started scans.
    pub started: Vec<ScanConfig>,
    /// Attempt reports.
    pub reports: Vec<ScanReport>,
    /// Rendered errors.
    pub errors: Vec<String>,
    /// Notices, in order.
    pub notices: Vec<String>,
    /// Register dumps.
    pub dumps: Vec<RegisterDump>,
}

impl CollectingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of every selected tag.
    pub fn records(&self) -> impl Iterator<Item = &DiscoveryRecord> {
        self.reports.iter().filter_map(ScanReport::record)
    }
}

impl ReportSink for CollectingSink {
    fn scan_started(&mut self, config: &ScanConfig) {
        self.started.push(*config);
    }

    fn report(&mut self, report: &ScanReport) {
        self.reports.push(report.clone());
    }

    fn error(&mut self, err: &Error) {
        self.errors.push(err.to_string());
    }

    fn notice(&mut self, msg: &str) {
        self.notices.push(msg.to_string());
    }

    fn registers(&mut self, dump: &RegisterDump) {
        self.dumps.push(dump.clone());
    }
}
