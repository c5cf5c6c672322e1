//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML configuration parse error
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// HTTP client error during outside delivery
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Remote endpoint answered with a non-success status
    #[error("Log endpoint '{endpoint}' rejected record with status {status}")]
    Transport { endpoint: String, status: u16 },

    /// Unrecognized level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A record needs a non-empty message
    #[error("Log message must not be empty")]
    EmptyMessage,

    /// Outside delivery requested with no async runtime to run it on
    #[error("No async runtime available for outside delivery")]
    NoRuntime,

    /// Inbound log payload could not be interpreted
    #[error("Malformed log payload: {0}")]
    MalformedPayload(String),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(level.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a transport status error
    pub fn transport(endpoint: impl Into<String>, status: u16) -> Self {
        LoggerError::Transport {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create a malformed payload error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        LoggerError::MalformedPayload(msg.into())
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::transport("/api/log", 502);
        assert!(matches!(err, LoggerError::Transport { status: 502, .. }));

        let err = LoggerError::config("client", "bad level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::invalid_level("loud");
        assert!(matches!(err, LoggerError::InvalidLevel(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::transport("/api/log", 500);
        assert_eq!(
            err.to_string(),
            "Log endpoint '/api/log' rejected record with status 500"
        );

        let err = LoggerError::invalid_level("loud");
        assert_eq!(err.to_string(), "Invalid log level: 'loud'");

        let err = LoggerError::malformed("missing level");
        assert_eq!(err.to_string(), "Malformed log payload: missing level");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LoggerError = io_err.into();
        assert!(err.to_string().contains("access denied"));
    }
}
