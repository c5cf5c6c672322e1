//! JSON appender for structured logging

use crate::core::{Appender, LogEntry, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON file appender for structured logging
///
/// Writes each record as a single-line JSON object (JSONL) in the same shape
/// that is posted to the remote log endpoint.
pub struct JsonAppender {
    writer: BufWriter<File>,
    pretty: bool,
}

impl JsonAppender {
    /// Create a new JSON appender
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, false)
    }

    /// Create a new JSON appender with pretty printing
    pub fn new_pretty<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, true)
    }

    fn open<P: AsRef<Path>>(path: P, pretty: bool) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            pretty,
        })
    }
}

impl Appender for JsonAppender {
    fn name(&self) -> &str {
        "json"
    }

    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(entry)?
        } else {
            entry.to_json()?
        };

        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_appender() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let mut appender = JsonAppender::new(&log_path)?;

        let context = LogContext::new()
            .with_field("user_id", 123)
            .with_field("action", "login");
        let entry = LogEntry::new(LogLevel::Info, "User logged in").with_context(context);

        appender.append(&entry)?;
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let parsed: LogEntry = serde_json::from_str(content.trim())?;
        assert_eq!(parsed, entry);

        Ok(())
    }

    #[test]
    fn test_json_appender_multiple_entries() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test_multiple.jsonl");

        let mut appender = JsonAppender::new(&log_path)?;

        for i in 0..5 {
            let entry = LogEntry::new(LogLevel::Debug, format!("Iteration {}", i))
                .with_context(LogContext::new().with_field("iteration", i));
            appender.append(&entry)?;
        }

        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);

        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert!(parsed["message"].is_string());
            assert_eq!(parsed["level"], "debug");
            assert!(parsed["contextFields"]["iteration"].is_number());
        }

        Ok(())
    }
}
