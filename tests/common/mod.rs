//! Shared sinks and transports for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use fanout_logger::core::{Appender, LogEntry, LogTransport, LoggerError, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Appender that keeps every record in memory
#[derive(Clone, Default)]
pub struct CollectingAppender {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CollectingAppender {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

impl Appender for CollectingAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "collecting"
    }
}

/// Transport that records deliveries and optionally fails them
#[derive(Default)]
pub struct RecordingTransport {
    delivered: Mutex<Vec<LogEntry>>,
    fail_with_status: Option<u16>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            delivered: Mutex::new(Vec::new()),
            fail_with_status: Some(status),
        })
    }

    pub fn delivered(&self) -> Vec<LogEntry> {
        self.delivered.lock().clone()
    }
}

#[async_trait]
impl LogTransport for RecordingTransport {
    async fn deliver(&self, entry: &LogEntry) -> Result<()> {
        self.delivered.lock().push(entry.clone());
        match self.fail_with_status {
            Some(status) => Err(LoggerError::transport("/api/log", status)),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Wait until `cond` holds, polling the runtime in between
pub async fn eventually(mut cond: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if cond() {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    cond()
}
