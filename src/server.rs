//! Server-side endpoint for records forwarded by clients
//!
//! Mount [`log_router`] next to the application's own routes. Each accepted
//! record is re-emitted through the server's [`Logger`] at the level named in
//! the payload. The endpoint always answers `204 No Content`: a malformed
//! record is warned about locally and dropped, never turned into a failed
//! request.
//!
//! ```no_run
//! use fanout_logger::{server, Logger};
//!
//! # async fn run() -> std::io::Result<()> {
//! let logger = Logger::new().with_field("side", "server");
//! let app = server::log_router(logger);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

use crate::core::{LogContext, LogLevel, Logger, LoggerError, Result, DEFAULT_LOG_ENDPOINT};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};

/// Field added to every re-emitted record
pub const ORIGIN_FIELD: &str = "origin";
const APP_VERSION_HEADER: &str = "x-app-version";

#[derive(Clone)]
struct LogEndpointState {
    logger: Logger,
}

/// A client record after validation
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRecord {
    pub level: LogLevel,
    pub message: String,
    pub context: LogContext,
}

impl ClientRecord {
    /// Validate a forwarded record.
    ///
    /// `level` and `message` are required strings; `contextFields`, when
    /// present, must be an object. The client's `timestamp` is kept as the
    /// `clientTimestamp` field.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        let serde_json::Value::Object(mut obj) = value else {
            return Err(LoggerError::malformed("payload is not a JSON object"));
        };

        let level = match obj.get("level").and_then(serde_json::Value::as_str) {
            Some(level) => level.parse::<LogLevel>()?,
            None => return Err(LoggerError::malformed("missing 'level'")),
        };

        let message = match obj.remove("message") {
            Some(serde_json::Value::String(message)) if !message.trim().is_empty() => message,
            _ => return Err(LoggerError::malformed("missing 'message'")),
        };

        let mut context = match obj.remove("contextFields") {
            None | Some(serde_json::Value::Null) => LogContext::new(),
            Some(fields) => LogContext::from_json(fields)
                .ok_or_else(|| LoggerError::malformed("'contextFields' is not an object"))?,
        };
        if let Some(serde_json::Value::String(ts)) = obj.remove("timestamp") {
            context.add_field("clientTimestamp", ts);
        }

        Ok(Self {
            level,
            message,
            context,
        })
    }
}

/// Router serving `POST /api/log`
pub fn log_router(logger: Logger) -> Router {
    log_router_at(DEFAULT_LOG_ENDPOINT, logger)
}

/// Router serving `POST {path}`
pub fn log_router_at(path: &str, logger: Logger) -> Router {
    Router::new()
        .route(path, post(receive_log))
        .with_state(LogEndpointState { logger })
}

async fn receive_log(
    State(state): State<LogEndpointState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    match ClientRecord::parse(&body) {
        Ok(mut record) => {
            record.context.add_field(ORIGIN_FIELD, "client");
            if let Some(version) = headers
                .get(APP_VERSION_HEADER)
                .and_then(|v| v.to_str().ok())
            {
                record.context.add_field("appVersion", version);
            }
            state
                .logger
                .log_with(record.level, &record.message, Some(&record.context), None);
        }
        Err(e) => {
            state
                .logger
                .diagnostics()
                .warn(&format!("Ignoring forwarded log record: {}", e));
        }
    }

    StatusCode::NO_CONTENT
}
