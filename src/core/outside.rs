//! Outside (remote) delivery of log records
//!
//! Records are handed to a [`LogTransport`] on a spawned task so the caller
//! never waits on the network. Before the application has mounted only
//! error records are let through, which keeps startup noise from flooding
//! the collector while still reporting crashes that prevent mounting.

use super::app_context::AppContext;
use super::diagnostics::{Diagnostics, StderrDiagnostics};
use super::error::LoggerError;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::metrics::LoggerMetrics;
use super::transport::LogTransport;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Fire-and-forget sender for the outside destination
///
/// # Example
///
/// ```no_run
/// use fanout_logger::appenders::HttpTransport;
/// use fanout_logger::core::{AppContext, LogEntry, LogLevel, OutsideSender};
///
/// # async fn run() -> fanout_logger::Result<()> {
/// let app = AppContext::new();
/// let transport = HttpTransport::new("http://localhost:3000/api/log", "2.4.1")?;
/// let sender = OutsideSender::new(transport, app.clone());
///
/// // Not mounted yet: only errors go out
/// sender.send(LogEntry::new(LogLevel::Error, "hydration failed"));
///
/// app.mark_mounted();
/// sender.send(LogEntry::new(LogLevel::Info, "cart opened"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OutsideSender {
    transport: Arc<dyn LogTransport>,
    app: AppContext,
    diagnostics: Arc<dyn Diagnostics>,
    metrics: Arc<LoggerMetrics>,
}

impl OutsideSender {
    pub fn new<T: LogTransport + 'static>(transport: T, app: AppContext) -> Self {
        Self::from_arc(Arc::new(transport), app)
    }

    pub fn from_arc(transport: Arc<dyn LogTransport>, app: AppContext) -> Self {
        Self {
            transport,
            app,
            diagnostics: Arc::new(StderrDiagnostics),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Route delivery failures to `diagnostics` instead of stderr
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub(crate) fn with_metrics(mut self, metrics: Arc<LoggerMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn app(&self) -> &AppContext {
        &self.app
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether `entry` clears the mounted gate right now
    pub fn should_send(&self, entry: &LogEntry) -> bool {
        self.app.is_mounted() || entry.level == LogLevel::Error
    }

    /// Send `entry` in the background.
    ///
    /// Returns the delivery task, or `None` when the record was held back by
    /// the mounted gate or there is no runtime to run on. Callers are free to
    /// drop the handle; delivery proceeds either way.
    pub fn send(&self, entry: LogEntry) -> Option<JoinHandle<()>> {
        if !self.should_send(&entry) {
            self.metrics.record_outside_gated();
            return None;
        }

        match Handle::try_current() {
            Ok(handle) => {
                let sender = self.clone();
                Some(handle.spawn(async move {
                    sender.deliver(&entry).await;
                }))
            }
            Err(_) => {
                self.metrics.record_outside_failed();
                self.diagnostics.error(&format!(
                    "Dropping '{}' record for {}: {}",
                    entry.level,
                    self.transport.name(),
                    LoggerError::NoRuntime
                ));
                None
            }
        }
    }

    /// Deliver `entry` now, bypassing the mounted gate.
    ///
    /// A failure is reported to diagnostics exactly once and otherwise
    /// swallowed. Returns whether the transport accepted the record.
    pub async fn deliver(&self, entry: &LogEntry) -> bool {
        match self.transport.deliver(entry).await {
            Ok(()) => {
                self.metrics.record_outside_sent();
                true
            }
            Err(e) => {
                self.metrics.record_outside_failed();
                self.diagnostics.error(&format!(
                    "Outside delivery via {} failed for '{}' record: {}",
                    self.transport.name(),
                    entry.level,
                    e
                ));
                false
            }
        }
    }
}

impl std::fmt::Debug for OutsideSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutsideSender")
            .field("transport", &self.transport.name())
            .field("mounted", &self.app.is_mounted())
            .finish()
    }
}
