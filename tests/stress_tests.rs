//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - No records are lost when many threads share one logger
//! - Derived loggers keep their own props under contention
//! - Outside forwarding keeps up with a burst of records
//! - Metrics stay consistent with what the sinks observed

mod common;

use common::{eventually, CollectingAppender, RecordingTransport};
use fanout_logger::appenders::FileAppender;
use fanout_logger::core::{
    AppContext, FieldValue, LogLevel, Logger, MemoryDiagnostics, OutsideSender,
};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

#[test]
fn test_concurrent_logging_loses_nothing() {
    let sink = CollectingAppender::default();
    let logger = Logger::builder()
        .local_level(LogLevel::Debug)
        .appender(sink.clone())
        .build();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.with_field("worker", t as i64);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let level = LogLevel::ALL[i % LogLevel::ALL.len()];
                    logger.log(level, format!("worker {} message {}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(sink.len(), THREADS * PER_THREAD);
    assert_eq!(logger.metrics().local_written() as usize, THREADS * PER_THREAD);

    for entry in sink.entries() {
        let Some(FieldValue::Int(worker)) = entry.context.get("worker") else {
            panic!("record without worker field: {:?}", entry);
        };
        assert!(entry.message.starts_with(&format!("worker {} ", worker)));
    }
}

#[test]
fn test_filtered_and_written_add_up() {
    let sink = CollectingAppender::default();
    let logger = Logger::builder()
        .local_level(LogLevel::Warn)
        .appender(sink.clone())
        .build();

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.log(LogLevel::ALL[i % LogLevel::ALL.len()], "tick");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let metrics = logger.metrics();
    let total = (metrics.local_written() + metrics.filtered()) as usize;
    assert_eq!(total, THREADS * PER_THREAD);
    assert_eq!(sink.len() as u64, metrics.local_written());
    assert!(sink.entries().iter().all(|e| e.level >= LogLevel::Warn));
}

#[test]
fn test_concurrent_file_writes_stay_line_aligned() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");
    let logger = Logger::builder()
        .appender(FileAppender::new(&log_file).expect("Failed to create appender"))
        .build();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD / 5 {
                    logger.info(format!("thread {} line {}\ninjected", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }
    logger.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), THREADS * PER_THREAD / 5);
    assert!(content.lines().all(|line| line.contains("[INFO")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_outside_burst_is_fully_delivered() {
    let transport = RecordingTransport::new();
    let diag = MemoryDiagnostics::new();
    let logger = Logger::builder()
        .local_level(LogLevel::Info)
        .outside_level(LogLevel::Warn)
        .outside(OutsideSender::from_arc(transport.clone(), AppContext::mounted()))
        .diagnostics(Arc::new(diag.clone()))
        .build();

    for i in 0..1000 {
        if i % 2 == 0 {
            logger.warn(format!("burst {}", i));
        } else {
            logger.info(format!("burst {}", i));
        }
    }

    assert!(eventually(|| logger.metrics().outside_sent() == 500).await);
    assert_eq!(transport.delivered().len(), 500);
    assert!(diag.is_empty());
}
