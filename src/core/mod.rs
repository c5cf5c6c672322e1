//! Core logger types and traits

pub mod app_context;
pub mod appender;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod error_details;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod outside;
pub mod output_format;
pub mod record_builder;
pub mod router;
pub mod structured_builder;
pub mod timestamp;
pub mod transport;

pub use app_context::AppContext;
pub use appender::Appender;
pub use config::{LoggerConfig, LoggerScope, LoggingConfig, ScopeConfig, DEFAULT_LOG_ENDPOINT};
pub use diagnostics::{DiagnosticLevel, Diagnostics, MemoryDiagnostics, StderrDiagnostics};
pub use error::{LoggerError, Result};
pub use error_details::ErrorDetails;
pub use log_context::{FieldValue, LogContext};
pub use log_entry::LogEntry;
pub use log_level::{passes, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use outside::OutsideSender;
pub use output_format::OutputFormat;
pub use record_builder::RecordBuilder;
pub use router::{DestinationRouter, Destinations};
pub use structured_builder::StructuredLogBuilder;
pub use timestamp::TimestampFormat;
pub use transport::LogTransport;
