//! Output format configuration for local sinks
//!
//! - Text: Human-readable format (default)
//! - Json: the record's wire shape, one object per line
//! - Logfmt: key=value pairs, context keys prefixed with `ctx.`

use super::log_context::FieldValue;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

/// Output format for log entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO   ] Request processed status=200`
    #[default]
    Text,

    /// Example: `{"level":"info","message":"Request processed","contextFields":{"status":200},"timestamp":"2025-01-08T10:30:45.123Z"}`
    Json,

    /// Example: `timestamp=2025-01-08T10:30:45.123Z level=info message="Request processed" ctx.status=200`
    Logfmt,
}

impl OutputFormat {
    /// Format a log entry according to this output format
    pub fn format(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => self.format_text(entry, timestamp_format),
            OutputFormat::Json => self.format_json(entry, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(entry, timestamp_format),
        }
    }

    fn format_text(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let base = format!(
            "[{}] [{:7}] {}",
            timestamp_format.format(&entry.timestamp),
            entry.level.label(),
            entry.message
        );

        if entry.context.is_empty() {
            base
        } else {
            format!("{} {}", base, entry.context.format_fields())
        }
    }

    fn format_json(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );
        json_obj.insert(
            "contextFields".to_string(),
            serde_json::Value::Object(
                entry
                    .context
                    .fields()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect(),
            ),
        );

        let timestamp = if timestamp_format.is_numeric() {
            serde_json::Value::Number(entry.timestamp.timestamp_millis().into())
        } else {
            serde_json::Value::String(timestamp_format.format(&entry.timestamp))
        };
        json_obj.insert("timestamp".to_string(), timestamp);

        serde_json::Value::Object(json_obj).to_string()
    }

    fn format_logfmt(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut parts = vec![
            format!(
                "timestamp={}",
                escape_logfmt_value(&timestamp_format.format(&entry.timestamp))
            ),
            format!("level={}", entry.level.to_str()),
            // Always quoted
            format!("message={}", quote_logfmt_value(&entry.message)),
        ];

        for (key, value) in entry.context.fields() {
            let formatted_value = match value {
                FieldValue::String(s) => quote_logfmt_value(s),
                FieldValue::List(_) | FieldValue::Map(_) => quote_logfmt_value(&value.to_string()),
                other => other.to_string(),
            };
            parts.push(format!("ctx.{}={}", escape_logfmt_key(key), formatted_value));
        }

        parts.join(" ")
    }
}

/// Strip everything but alphanumerics, `_`, `-` and `.`
fn escape_logfmt_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

fn escape_logfmt_value(value: &str) -> String {
    if value.contains(' ') || value.contains('"') || value.contains('=') {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};

    #[test]
    fn test_text_format() {
        let entry = LogEntry::new(LogLevel::Verbose, "Test message");
        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains("[VERBOSE]"));
        assert!(result.ends_with("Test message"));
    }

    #[test]
    fn test_text_format_with_context() {
        let context = LogContext::new()
            .with_field("user_id", 123)
            .with_field("action", "login");
        let entry = LogEntry::new(LogLevel::Info, "User logged in").with_context(context);

        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains("User logged in action=login user_id=123"));
    }

    #[test]
    fn test_json_format_keeps_context_nested() {
        let context = LogContext::new()
            .with_field("message", "from error")
            .with_field("latency_ms", 42);
        let entry = LogEntry::new(LogLevel::Error, "Request failed").with_context(context);

        let result = OutputFormat::Json.format(&entry, &TimestampFormat::UnixMillis);
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["level"], "error");
        assert_eq!(parsed["message"], "Request failed");
        assert_eq!(parsed["contextFields"]["message"], "from error");
        assert_eq!(parsed["contextFields"]["latency_ms"], 42);
        assert!(parsed["timestamp"].is_number());
    }

    #[test]
    fn test_logfmt_format() {
        let context = LogContext::new()
            .with_field("query", "SELECT * FROM users WHERE id=1")
            .with_field("count", 5);
        let entry = LogEntry::new(LogLevel::Warn, "Warning message").with_context(context);

        let result = OutputFormat::Logfmt.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains("level=warn"));
        assert!(result.contains("message=\"Warning message\""));
        assert!(result.contains("ctx.count=5"));
        assert!(result.contains("ctx.query=\"SELECT * FROM users WHERE id=1\""));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
