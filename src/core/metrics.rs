//! Logger metrics for observability
//!
//! Counters describing where records went: filtered out by level, written
//! to local sinks, forwarded outside, held back by the mounted gate, or lost
//! to a failing sink or transport.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use fanout_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_local_written();
/// metrics.record_outside_failed();
///
/// assert_eq!(metrics.local_written(), 1);
/// assert_eq!(metrics.outside_failed(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records below every floor
    filtered: AtomicU64,

    /// Records delivered to all local appenders
    local_written: AtomicU64,

    /// Records at least one local appender failed on
    local_failed: AtomicU64,

    /// Records accepted by the remote endpoint
    outside_sent: AtomicU64,

    /// Records held back because the application had not mounted
    outside_gated: AtomicU64,

    /// Records the transport failed to deliver
    outside_failed: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            filtered: AtomicU64::new(0),
            local_written: AtomicU64::new(0),
            local_failed: AtomicU64::new(0),
            outside_sent: AtomicU64::new(0),
            outside_gated: AtomicU64::new(0),
            outside_failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn local_written(&self) -> u64 {
        self.local_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn local_failed(&self) -> u64 {
        self.local_failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn outside_sent(&self) -> u64 {
        self.outside_sent.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn outside_gated(&self) -> u64 {
        self.outside_gated.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn outside_failed(&self) -> u64 {
        self.outside_failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_local_written(&self) -> u64 {
        self.local_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_local_failed(&self) -> u64 {
        self.local_failed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_outside_sent(&self) -> u64 {
        self.outside_sent.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_outside_gated(&self) -> u64 {
        self.outside_gated.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_outside_failed(&self) -> u64 {
        self.outside_failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Outside failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been attempted.
    pub fn outside_failure_rate(&self) -> f64 {
        let failed = self.outside_failed() as f64;
        let total = self.outside_sent() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.filtered.store(0, Ordering::Relaxed);
        self.local_written.store(0, Ordering::Relaxed);
        self.local_failed.store(0, Ordering::Relaxed);
        self.outside_sent.store(0, Ordering::Relaxed);
        self.outside_gated.store(0, Ordering::Relaxed);
        self.outside_failed.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            filtered: AtomicU64::new(self.filtered()),
            local_written: AtomicU64::new(self.local_written()),
            local_failed: AtomicU64::new(self.local_failed()),
            outside_sent: AtomicU64::new(self.outside_sent()),
            outside_gated: AtomicU64::new(self.outside_gated()),
            outside_failed: AtomicU64::new(self.outside_failed()),
        }
    }
}
