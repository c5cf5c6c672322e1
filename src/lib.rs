//! # Fanout Logger
//!
//! Structured logging that fans each record out to local sinks and, for
//! records above a second floor, to a remote collection endpoint.
//!
//! ## Features
//!
//! - **Two floors**: a local floor and an outside floor; outside delivery is
//!   always a subset of local delivery
//! - **Context props**: derived loggers extend, never mutate, their parent's
//!   fields
//! - **Error flattening**: error message, source chain and code merged into
//!   the record, overriding same-named context fields
//! - **Fire-and-forget forwarding**: remote delivery runs on the async
//!   runtime, gated until the application has mounted (errors excepted)
//! - **Server endpoint**: an axum route that re-emits forwarded records

pub mod appenders;
pub mod core;
pub mod macros;
#[cfg(feature = "server")]
pub mod server;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::{FileAppender, JsonAppender};
    #[cfg(feature = "http")]
    pub use crate::appenders::HttpTransport;
    pub use crate::core::{
        AppContext, Appender, Diagnostics, ErrorDetails, FieldValue, LogContext, LogEntry,
        LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerScope, LoggingConfig,
        OutsideSender, Result,
    };
}

#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use appenders::{FileAppender, JsonAppender};
#[cfg(feature = "http")]
pub use appenders::HttpTransport;
pub use core::{
    passes, AppContext, Appender, DestinationRouter, Destinations, DiagnosticLevel, Diagnostics,
    ErrorDetails, FieldValue, LogContext, LogEntry, LogLevel, LogTransport, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerScope, LoggingConfig,
    MemoryDiagnostics, OutputFormat, OutsideSender, RecordBuilder, Result, ScopeConfig,
    StderrDiagnostics, StructuredLogBuilder, TimestampFormat,
};
