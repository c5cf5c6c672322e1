//! Async transport trait for outside log delivery

use super::{error::Result, log_entry::LogEntry};
use async_trait::async_trait;

/// Delivers one record to a remote collector.
///
/// Implementations report failure through the returned `Result`; the
/// caller decides what to do with it and never retries.
///
/// # Example
///
/// ```no_run
/// use fanout_logger::core::{LogEntry, LogTransport, Result};
/// use async_trait::async_trait;
///
/// struct StdoutTransport;
///
/// #[async_trait]
/// impl LogTransport for StdoutTransport {
///     async fn deliver(&self, entry: &LogEntry) -> Result<()> {
///         println!("{}", entry.to_json()?);
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "stdout"
///     }
/// }
/// ```
#[async_trait]
pub trait LogTransport: Send + Sync {
    /// Deliver a record
    async fn deliver(&self, entry: &LogEntry) -> Result<()>;

    /// Get the transport name
    fn name(&self) -> &str;
}
