//! Logger configuration
//!
//! Levels are configured per scope as strings (`level`, `serverSend`), so a
//! bad value is only discovered when the scope is resolved into a
//! [`LoggerConfig`]. Resolution never fails: unknown names fall back to the
//! value already in effect and are reported to the diagnostics channel.
//!
//! ```toml
//! base_url = "https://shop.example.com"
//! endpoint = "/api/log"
//! app_version = "2.4.1"
//!
//! [common]
//! level = "info"
//! serverSend = "warn"
//!
//! [client]
//! level = "verbose"
//! ```

use super::diagnostics::Diagnostics;
use super::error::Result;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const DEFAULT_LOCAL_LEVEL: LogLevel = LogLevel::Info;
pub const DEFAULT_OUTSIDE_LEVEL: LogLevel = LogLevel::Warn;
pub const DEFAULT_LOG_ENDPOINT: &str = "/api/log";

/// Resolved level floors for one logger. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub local_level: LogLevel,
    pub outside_level: LogLevel,
}

impl LoggerConfig {
    pub fn new(local_level: LogLevel, outside_level: LogLevel) -> Self {
        Self {
            local_level,
            outside_level,
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_LEVEL, DEFAULT_OUTSIDE_LEVEL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerScope {
    Common,
    Client,
    Server,
}

impl fmt::Display for LoggerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerScope::Common => write!(f, "common"),
            LoggerScope::Client => write!(f, "client"),
            LoggerScope::Server => write!(f, "server"),
        }
    }
}

/// Raw, unvalidated settings for one scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(
        default,
        rename = "serverSend",
        alias = "server_send",
        skip_serializing_if = "Option::is_none"
    )]
    pub server_send: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub common: ScopeConfig,
    #[serde(default)]
    pub client: ScopeConfig,
    #[serde(default)]
    pub server: ScopeConfig,
    /// Path or URL of the remote log endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Origin a path-only `endpoint` is resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sent as `X-App-Version` with every forwarded record
    #[serde(default = "default_app_version")]
    pub app_version: String,
}

fn default_endpoint() -> String {
    DEFAULT_LOG_ENDPOINT.to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            common: ScopeConfig::default(),
            client: ScopeConfig::default(),
            server: ScopeConfig::default(),
            endpoint: default_endpoint(),
            base_url: None,
            app_version: default_app_version(),
        }
    }
}

impl LoggingConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn scope(&self, scope: LoggerScope) -> &ScopeConfig {
        match scope {
            LoggerScope::Common => &self.common,
            LoggerScope::Client => &self.client,
            LoggerScope::Server => &self.server,
        }
    }

    /// Resolve the floors for `scope`: defaults, overridden by `common`,
    /// overridden by the scope's own settings.
    pub fn resolve(&self, scope: LoggerScope, diagnostics: &dyn Diagnostics) -> LoggerConfig {
        let mut resolved = LoggerConfig::default();
        apply(&mut resolved, &self.common, LoggerScope::Common, diagnostics);
        if scope != LoggerScope::Common {
            apply(&mut resolved, self.scope(scope), scope, diagnostics);
        }
        resolved
    }
}

fn apply(
    target: &mut LoggerConfig,
    overrides: &ScopeConfig,
    scope: LoggerScope,
    diagnostics: &dyn Diagnostics,
) {
    if let Some(level) = &overrides.level {
        target.local_level = parse_scoped(level, target.local_level, scope, "level", diagnostics);
    }
    if let Some(level) = &overrides.server_send {
        target.outside_level =
            parse_scoped(level, target.outside_level, scope, "serverSend", diagnostics);
    }
}

fn parse_scoped(
    value: &str,
    fallback: LogLevel,
    scope: LoggerScope,
    key: &str,
    diagnostics: &dyn Diagnostics,
) -> LogLevel {
    match value.parse() {
        Ok(level) => level,
        Err(e) => {
            diagnostics.warn(&format!(
                "[{}] {}: {}, falling back to '{}'",
                scope, key, e, fallback
            ));
            fallback
        }
    }
}
