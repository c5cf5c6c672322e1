//! Local diagnostic channel for the logger's own failures
//!
//! Configuration mistakes, sink failures and outside delivery failures are
//! reported here instead of being raised to the caller. A diagnostic never
//! re-enters the logger, so a failing sink cannot trigger a feedback loop.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Warning => write!(f, "WARNING"),
            DiagnosticLevel::Error => write!(f, "ERROR"),
        }
    }
}

pub trait Diagnostics: Send + Sync {
    fn report(&self, level: DiagnosticLevel, message: &str);

    fn warn(&self, message: &str) {
        self.report(DiagnosticLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(DiagnosticLevel::Error, message);
    }
}

/// Writes `[LOGGER WARNING] ...` / `[LOGGER ERROR] ...` lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn report(&self, level: DiagnosticLevel, message: &str) {
        eprintln!("[LOGGER {}] {}", level, message);
    }
}

/// Collects diagnostics in memory.
///
/// Clones share the same buffer, so a handle can be given to a logger and
/// inspected afterwards.
///
/// # Example
///
/// ```
/// use fanout_logger::core::{Diagnostics, MemoryDiagnostics};
///
/// let diag = MemoryDiagnostics::new();
/// diag.warn("endpoint unreachable");
/// assert_eq!(diag.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagnostics {
    entries: Arc<Mutex<Vec<(DiagnosticLevel, String)>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn levels(&self) -> Vec<DiagnosticLevel> {
        self.entries.lock().iter().map(|(l, _)| *l).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&self, level: DiagnosticLevel, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}
