//! The polling/notification loop.
//!
//! One search in flight at a time: the next cycle is scheduled only after the
//! current cycle's work completes. Alert dispatch is fire-and-forget, but a
//! delivery fault is pushed into the loop's fault channel and aborts the run
//! instead of being swallowed.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::info;

use faretrack_alerts::{cheapest_total_message, deal_alert_message, AlertError, AlertSink};
use faretrack_core::SearchConfig;
use faretrack_fares::{FareError, FareQuote, FareSource};

/// Fatal loop errors. Both end the process with a non-zero exit.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Fare lookup failed: {0}")]
    Lookup(#[from] FareError),

    #[error("Deal alert delivery failed: {0}")]
    Notification(#[from] AlertError),
}

/// Outcome of comparing one quote against the configured deal price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No deal price configured: report the current cheapest total.
    ReportCheapest,
    /// Cheapest total meets the deal price: alert.
    DealAlert,
    /// Deal price configured but not met: emit nothing.
    NoDeal,
}

/// The comparison is always on the raw numeric total, never on the
/// formatted string.
pub fn decide(deal_price: Option<u32>, total: f64) -> Decision {
    match deal_price {
        None => Decision::ReportCheapest,
        Some(threshold) if total <= f64::from(threshold) => Decision::DealAlert,
        Some(_) => Decision::NoDeal,
    }
}

/// The polling loop: fetch, decide, maybe notify, sleep, repeat.
pub struct Tracker {
    config: SearchConfig,
    source: Box<dyn FareSource>,
    sink: Arc<dyn AlertSink>,
    fault_tx: mpsc::UnboundedSender<AlertError>,
    fault_rx: mpsc::UnboundedReceiver<AlertError>,
}

impl Tracker {
    pub fn new(config: SearchConfig, source: Box<dyn FareSource>, sink: Arc<dyn AlertSink>) -> Self {
        let (fault_tx, fault_rx) = mpsc::unbounded_channel();
        Self {
            config,
            source,
            sink,
            fault_tx,
            fault_rx,
        }
    }

    /// Run until the process is killed, a lookup fails, or a dispatched
    /// alert reports a delivery fault.
    ///
    /// Returns `Ok` only in report-only mode, which is single-shot: without a
    /// deal price there is nothing to keep polling for.
    pub async fn run(mut self) -> Result<(), TrackerError> {
        loop {
            let quote = self.source.cheapest_total(&self.config).await?;

            if !self.handle_quote(&quote) {
                return Ok(());
            }

            let delay =
                Duration::from_secs(u64::from(self.config.poll_interval_minutes) * 60);
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                Some(err) = self.fault_rx.recv() => {
                    return Err(TrackerError::Notification(err));
                }
            }
        }
    }

    /// One cycle after a successful lookup. Returns whether to reschedule.
    fn handle_quote(&self, quote: &FareQuote) -> bool {
        match decide(self.config.deal_price, quote.total) {
            Decision::ReportCheapest => {
                info!("{}", cheapest_total_message(quote.total, &quote.deep_link));
                false
            }
            Decision::DealAlert => {
                let message = deal_alert_message(quote.total, &quote.deep_link);
                info!("{}", message);

                if self.sink.is_enabled() {
                    let sink = Arc::clone(&self.sink);
                    let fault_tx = self.fault_tx.clone();
                    tokio::spawn(async move {
                        if let Err(err) = sink.send(&message).await {
                            let _ = fault_tx.send(err);
                        }
                    });
                }
                true
            }
            Decision::NoDeal => true,
        }
    }
}
