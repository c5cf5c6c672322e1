//! Flattened error information attached to log records

use super::log_context::{FieldValue, LogContext};
use std::error::Error;

/// The structural fields an error contributes to a record.
///
/// `message` comes from the error's `Display`, `stack` from its `source()`
/// chain. A custom `code` and arbitrary extra fields may be attached. Fields
/// that are unset are left out of the record entirely.
///
/// # Example
///
/// ```
/// use fanout_logger::core::ErrorDetails;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing config");
/// let details = ErrorDetails::from_error(&io).with_code("E_CONFIG");
/// assert_eq!(details.message(), Some("missing config"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorDetails {
    message: Option<String>,
    stack: Option<String>,
    code: Option<FieldValue>,
    extra: LogContext,
}

impl ErrorDetails {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            stack: None,
            code: None,
            extra: LogContext::new(),
        }
    }

    /// Flatten an error and its chain of sources
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {}", cause));
            source = cause.source();
        }

        Self {
            message: Some(error.to_string()),
            stack: (!causes.is_empty()).then(|| causes.join("\n")),
            code: None,
            extra: LogContext::new(),
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<FieldValue>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach a custom field the error exposes
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.extra.add_field(key, value);
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    pub fn code(&self) -> Option<&FieldValue> {
        self.code.as_ref()
    }

    /// Fields to merge into a record, structural ones last
    pub fn to_context(&self) -> LogContext {
        let mut ctx = self.extra.clone();
        if let Some(message) = &self.message {
            ctx.add_field("message", message.as_str());
        }
        if let Some(stack) = &self.stack {
            ctx.add_field("stack", stack.as_str());
        }
        if let Some(code) = &self.code {
            ctx.add_field("code", code.clone());
        }
        ctx
    }
}

impl<E: Error + 'static> From<&E> for ErrorDetails {
    fn from(error: &E) -> Self {
        ErrorDetails::from_error(error)
    }
}
