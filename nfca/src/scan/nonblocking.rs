// nfca/src/scan/nonblocking.rs

//! Tokio-driven continuous scanning. Each attempt still runs inline: it is
//! bounded by the discovery timeouts and holds the front-end throughout.

use log::debug;
use tokio::sync::watch;

use super::{Flow, ReportSink, RunMode, ScanController, ScanSummary};

impl<R: ReportSink> ScanController<'_, R> {
    /// Like [`ScanController::run`], but sleeps on the tokio timer and wakes
    /// early when `cancel` flips to `true` (or its sender is dropped).
    pub async fn run_async(&mut self, mut cancel: watch::Receiver<bool>) -> ScanSummary {
        let mut summary = ScanSummary::default();
        self.start();

        let period = match self.config.mode {
            RunMode::Single => {
                self.attempt(&mut summary);
                self.finish(&summary);
                return summary;
            }
            RunMode::Continuous { period_ms } => crate::utils::ms(period_ms),
        };

        loop {
            if self.attempt(&mut summary) == Flow::Stop {
                break;
            }
            if *cancel.borrow() {
                debug!("scan cancelled");
                break;
            }
            tokio::select! {
                biased;

                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        debug!("scan cancelled while idle");
                        break;
                    }
                }
                _ = tokio::time::sleep(period) => {}
            }
        }

        self.finish(&summary);
        summary
    }
}
