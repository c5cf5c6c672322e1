//! Appender trait for local log destinations

use super::{error::Result, log_entry::LogEntry};

/// A local sink. Called synchronously on the emitting thread for every
/// record that clears the local floor.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
