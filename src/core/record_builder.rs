//! Assembles log records from a message, context data and an error

use super::error::{LoggerError, Result};
use super::error_details::ErrorDetails;
use super::log_context::LogContext;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;

/// Pure record assembly.
///
/// Fields are layered in a fixed order, each layer overwriting same-named
/// keys of the previous one:
///
/// 1. the logger's own context props
/// 2. per-call context data
/// 3. fields derived from the error
///
/// # Example
///
/// ```
/// use fanout_logger::core::{ErrorDetails, FieldValue, LogContext, LogLevel, RecordBuilder};
///
/// let data = LogContext::new().with_field("a", 1).with_field("b", 2);
/// let err = ErrorDetails::default().with_field("b", 99).with_stack("at checkout");
///
/// let entry = RecordBuilder::new(LogLevel::Error, "checkout failed")
///     .context(&data)
///     .error(&err)
///     .build()
///     .unwrap();
///
/// assert_eq!(entry.context.get("b"), Some(&FieldValue::Int(99)));
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder<'a> {
    level: LogLevel,
    message: &'a str,
    props: Option<&'a LogContext>,
    data: Option<&'a LogContext>,
    error: Option<&'a ErrorDetails>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(level: LogLevel, message: &'a str) -> Self {
        Self {
            level,
            message,
            props: None,
            data: None,
            error: None,
        }
    }

    /// Context props of the emitting logger (lowest precedence)
    #[must_use]
    pub fn props(mut self, props: &'a LogContext) -> Self {
        self.props = Some(props);
        self
    }

    /// Per-call structured data
    #[must_use]
    pub fn context(mut self, data: &'a LogContext) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn error(mut self, error: &'a ErrorDetails) -> Self {
        self.error = Some(error);
        self
    }

    /// Build the record.
    ///
    /// A blank message is replaced by the error's message when there is one;
    /// otherwise the record is rejected with [`LoggerError::EmptyMessage`].
    pub fn build(self) -> Result<LogEntry> {
        let message = if !self.message.trim().is_empty() {
            self.message
        } else {
            self.error
                .and_then(ErrorDetails::message)
                .filter(|m| !m.trim().is_empty())
                .ok_or(LoggerError::EmptyMessage)?
        };

        let mut fields = self.props.cloned().unwrap_or_default();
        if let Some(data) = self.data {
            fields.merge(data);
        }
        if let Some(error) = self.error {
            fields.merge(&error.to_context());
        }

        Ok(LogEntry::new(self.level, message).with_context(fields))
    }
}
