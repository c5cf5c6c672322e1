//! Structured log builder for fluent log entry construction
//!
//! Provides a builder pattern for emitting a record with per-call fields and
//! an optional error through a [`Logger`].

use super::error_details::ErrorDetails;
use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;
use super::logger::Logger;

/// Builder for structured log entries
///
/// # Example
///
/// ```
/// use fanout_logger::prelude::*;
///
/// let logger = Logger::new();
///
/// logger.info_builder()
///     .message("Request processed")
///     .field("user_id", 12345)
///     .field("latency_ms", 42.5)
///     .field("status", 200)
///     .log();
/// ```
pub struct StructuredLogBuilder<'a> {
    logger: &'a Logger,
    level: LogLevel,
    message: String,
    context: LogContext,
    error: Option<ErrorDetails>,
}

impl<'a> StructuredLogBuilder<'a> {
    /// Create a new structured log builder
    pub fn new(logger: &'a Logger, level: LogLevel) -> Self {
        Self {
            logger,
            level,
            message: String::new(),
            context: LogContext::new(),
            error: None,
        }
    }

    /// Set the log message
    #[must_use]
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = msg.into();
        self
    }

    /// Add a structured field to the log entry
    #[must_use]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }

    /// Add multiple fields from a LogContext
    #[must_use]
    pub fn fields(mut self, context: LogContext) -> Self {
        self.context.merge(&context);
        self
    }

    /// Attach an error; its fields override same-named fields set here
    #[must_use]
    pub fn error(mut self, error: impl Into<ErrorDetails>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Build and send the log entry
    ///
    /// This consumes the builder and logs the entry. Without a message the
    /// error's message is used; with neither the record is dropped.
    pub fn log(self) {
        let data = (!self.context.is_empty()).then_some(&self.context);
        self.logger
            .log_with(self.level, &self.message, data, self.error.as_ref());
    }
}

impl Logger {
    pub fn debug_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Debug)
    }

    pub fn verbose_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Verbose)
    }

    /// Create an info-level structured log builder
    ///
    /// # Example
    ///
    /// ```
    /// use fanout_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// logger.info_builder()
    ///     .message("Request processed")
    ///     .field("user_id", 12345)
    ///     .log();
    /// ```
    pub fn info_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Info)
    }

    pub fn warn_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Warn)
    }

    /// Create an error-level structured log builder
    ///
    /// # Example
    ///
    /// ```
    /// use fanout_logger::{ErrorDetails, Logger};
    ///
    /// let logger = Logger::new();
    /// logger.error_builder()
    ///     .message("Database connection failed")
    ///     .field("retry_count", 3)
    ///     .error(ErrorDetails::new("connection refused").with_code("DB_CONN"))
    ///     .log();
    /// ```
    pub fn error_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Error)
    }

    pub fn always_builder(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, LogLevel::Always)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::appender::Appender;
    use crate::core::error::Result;
    use crate::core::log_entry::LogEntry;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<LogEntry>>>);

    impl Appender for Sink {
        fn append(&mut self, entry: &LogEntry) -> Result<()> {
            self.0.lock().push(entry.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "sink"
        }
    }

    #[test]
    fn test_structured_builder_fields() {
        let sink = Sink::default();
        let logger = Logger::builder()
            .local_level(LogLevel::Debug)
            .appender(sink.clone())
            .build();

        logger
            .debug_builder()
            .message("Multiple fields test")
            .field("string_field", "hello")
            .field("int_field", 42)
            .field("float_field", 2.5)
            .field("bool_field", true)
            .log();

        let entries = sink.0.lock();
        assert_eq!(entries[0].context.len(), 4);
    }

    #[test]
    fn test_structured_builder_error_overrides_fields() {
        let sink = Sink::default();
        let logger = Logger::builder().appender(sink.clone()).build();

        logger
            .error_builder()
            .message("Upload failed")
            .field("code", "local")
            .error(ErrorDetails::new("quota").with_code(413))
            .log();

        let entries = sink.0.lock();
        assert_eq!(entries[0].context.get("code"), Some(&FieldValue::Int(413)));
    }

    #[test]
    fn test_structured_builder_message_from_error() {
        let sink = Sink::default();
        let logger = Logger::builder().appender(sink.clone()).build();

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such asset");
        logger.error_builder().error(&io).log();

        assert_eq!(sink.0.lock()[0].message, "no such asset");
    }

    #[test]
    fn test_structured_builder_all_levels() {
        let sink = Sink::default();
        let logger = Logger::builder()
            .local_level(LogLevel::Debug)
            .appender(sink.clone())
            .build();

        logger.debug_builder().message("Debug").log();
        logger.verbose_builder().message("Verbose").log();
        logger.info_builder().message("Info").log();
        logger.warn_builder().message("Warn").log();
        logger.error_builder().message("Error").log();
        logger.always_builder().message("Always").log();

        assert_eq!(sink.0.lock().len(), 6);
    }
}
