// nfca/src/command.rs

//! Operator command surface. Only `scan` and `show` do anything; the other
//! actions exist so the surface stays stable and answer "not implemented".

use std::fmt;
use std::str::FromStr;

use log::info;

use crate::scan::{CancelSignal, ReportSink, RunMode, ScanController, ScanSummary};
use crate::session::{Initialized, Session};
use crate::types::Technology;
use crate::utils::DEFAULT_SCAN_PERIOD_MS;
use crate::{Error, Result};

/// What `show` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShowTarget {
    /// Print the selected technology.
    #[default]
    Technology,
    /// Dump both register spaces of the front-end.
    Registers,
}

/// Operator actions. Only `Scan` and `Show` are implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Run discovery once or continuously.
    Scan,
    /// Report session state.
    Show(ShowTarget),
    /// Placeholder.
    ReadTag,
    /// Placeholder.
    EmulateTag,
    /// Placeholder.
    CloneTag,
    /// Placeholder.
    SniffTraffic,
    /// Placeholder: transparent raw mode.
    RawMode0,
    /// Placeholder: stream raw mode.
    RawMode1,
}

impl Action {
    /// Whether executing the action does anything.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Scan | Self::Show(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scan => "scan",
            Self::Show(ShowTarget::Technology) => "show",
            Self::Show(ShowTarget::Registers) => "show registers",
            Self::ReadTag => "read-tag",
            Self::EmulateTag => "emulate-tag",
            Self::CloneTag => "clone-tag",
            Self::SniffTraffic => "sniff-traffic",
            Self::RawMode0 => "raw-mode-0",
            Self::RawMode1 => "raw-mode-1",
        };
        f.write_str(name)
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let words: Vec<String> = s
            .split_whitespace()
            .map(|w| w.to_ascii_lowercase())
            .collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        match words.as_slice() {
            ["scan"] => Ok(Self::Scan),
            ["show"] => Ok(Self::Show(ShowTarget::Technology)),
            ["show", "registers"] | ["show-registers"] => Ok(Self::Show(ShowTarget::Registers)),
            ["read-tag"] => Ok(Self::ReadTag),
            ["emulate-tag"] => Ok(Self::EmulateTag),
            ["clone-tag"] => Ok(Self::CloneTag),
            ["sniff"] | ["sniff-traffic"] => Ok(Self::SniffTraffic),
            ["raw-mode-0"] => Ok(Self::RawMode0),
            ["raw-mode-1"] => Ok(Self::RawMode1),
            _ => Err(Error::InvalidArgument(format!("unknown action '{}'", s.trim()))),
        }
    }
}

/// A parsed operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRequest {
    /// Replaces the session's technology before the action runs.
    pub technology: Option<Technology>,
    /// Scan repeatedly instead of once.
    pub continuous: bool,
    /// Pause between continuous attempts.
    pub period_ms: u64,
    /// What to run.
    pub action: Action,
}

impl CommandRequest {
    /// Single-shot request for `action`, keeping the session technology.
    pub fn new(action: Action) -> Self {
        Self {
            technology: None,
            continuous: false,
            period_ms: DEFAULT_SCAN_PERIOD_MS,
            action,
        }
    }

    /// Select `technology` before the action runs.
    pub fn with_technology(mut self, technology: Technology) -> Self {
        self.technology = Some(technology);
        self
    }

    /// Scan continuously with the given period.
    pub fn continuous(mut self, period_ms: u64) -> Self {
        self.continuous = true;
        self.period_ms = period_ms;
        self
    }

    /// Scan mode derived from the continuous flag and period.
    pub fn run_mode(&self) -> RunMode {
        if self.continuous {
            RunMode::Continuous {
                period_ms: self.period_ms,
            }
        } else {
            RunMode::Single
        }
    }
}

/// How a command completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// A scan ran; carries its counters.
    Scanned(ScanSummary),
    /// A `show` variant printed its output.
    Shown,
    /// No-op: the action has no implementation.
    NotImplemented(Action),
}

/// Execute one command against an initialized session.
///
/// Unimplemented actions are not errors: the sink gets "<action> not
/// implemented" and the session is left untouched apart from the technology.
pub fn execute<R, C>(
    session: &mut Session<Initialized>,
    request: &CommandRequest,
    sink: &mut R,
    cancel: &C,
) -> Result<CommandStatus>
where
    R: ReportSink + ?Sized,
    C: CancelSignal + ?Sized,
{
    if let Some(t) = request.technology {
        session.set_technology(t);
    }

    match request.action {
        Action::Scan => {
            let mut ctl = ScanController::new(session, &mut *sink, request.run_mode());
            Ok(CommandStatus::Scanned(ctl.run(cancel)))
        }
        Action::Show(ShowTarget::Technology) => {
            sink.notice(&format!("Selected technology: NFC-{}", session.technology()));
            Ok(CommandStatus::Shown)
        }
        Action::Show(ShowTarget::Registers) => {
            let dump = session.register_dump()?;
            sink.registers(&dump);
            Ok(CommandStatus::Shown)
        }
        other => {
            let msg = Error::NotImplemented(other).to_string();
            info!("{}", msg);
            sink.notice(&msg);
            Ok(CommandStatus::NotImplemented(other))
        }
    }
}
