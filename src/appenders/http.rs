//! HTTP transport for remote logging
//!
//! Posts each record as JSON to a collection endpoint. Used as the
//! [`LogTransport`] behind an [`OutsideSender`](crate::core::OutsideSender).

use crate::core::{LogEntry, LogTransport, LoggerError, LoggingConfig, Result};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Header carrying the application version on every forwarded record
pub const APP_VERSION_HEADER: &str = "X-App-Version";

/// Transport that POSTs records to a remote log endpoint
///
/// # Example
///
/// ```no_run
/// use fanout_logger::appenders::HttpTransport;
///
/// let transport = HttpTransport::new("https://shop.example.com/api/log", "2.4.1")
///     .expect("valid client configuration");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    app_version: String,
}

impl HttpTransport {
    /// Create a transport with the default client
    ///
    /// # Errors
    ///
    /// Returns error if `endpoint` is not an absolute http(s) URL or the HTTP
    /// client cannot be constructed
    pub fn new(endpoint: impl AsRef<str>, app_version: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Self::with_client(client, endpoint, app_version)
    }

    /// Create a transport around an existing client
    ///
    /// # Errors
    ///
    /// Returns error if `endpoint` is not an absolute http(s) URL
    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl AsRef<str>,
        app_version: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: parse_endpoint(endpoint.as_ref())?,
            app_version: app_version.into(),
        })
    }

    /// Endpoint and version from a [`LoggingConfig`].
    ///
    /// A path-only `endpoint` is joined onto `base_url`; without a base URL
    /// it is rejected, since there is no host to post to.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let endpoint = match &config.base_url {
            Some(base) => parse_endpoint(base)?.join(&config.endpoint).map_err(|e| {
                LoggerError::config("http", format!("endpoint '{}': {}", config.endpoint, e))
            })?,
            None => parse_endpoint(&config.endpoint)?,
        };
        Self::new(endpoint, config.app_version.clone())
    }

    /// Bound each request. Without this a hung request is never observed.
    pub fn with_timeout(
        endpoint: impl AsRef<str>,
        app_version: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(client, endpoint, app_version)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| LoggerError::config("http", format!("endpoint '{}': {}", endpoint, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(LoggerError::config(
            "http",
            format!("endpoint '{}': unsupported scheme '{}'", endpoint, other),
        )),
    }
}

#[async_trait]
impl LogTransport for HttpTransport {
    async fn deliver(&self, entry: &LogEntry) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(APP_VERSION_HEADER, &self.app_version)
            .json(entry)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(LoggerError::transport(self.endpoint.as_str(), status.as_u16()))
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_from_config() {
        let config = LoggingConfig::from_toml_str(
            "endpoint = \"http://127.0.0.1:9/api/log\"\napp_version = \"9.9.9\"",
        )
        .unwrap();
        let transport = HttpTransport::from_config(&config).unwrap();

        assert_eq!(transport.endpoint(), "http://127.0.0.1:9/api/log");
        assert_eq!(transport.app_version, "9.9.9");
    }

    #[test]
    fn test_default_config_needs_a_host() {
        let err = HttpTransport::from_config(&LoggingConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            LoggerError::InvalidConfiguration { ref component, .. } if component == "http"
        ));
    }

    #[test]
    fn test_path_joined_onto_base_url() {
        let config =
            LoggingConfig::from_toml_str("base_url = \"https://shop.example.com/\"").unwrap();
        let transport = HttpTransport::from_config(&config).unwrap();

        assert_eq!(transport.endpoint(), "https://shop.example.com/api/log");
    }

    #[test]
    fn test_rejects_relative_and_non_http_endpoints() {
        assert!(HttpTransport::new("/api/log", "1.0.0").is_err());
        assert!(HttpTransport::new("ftp://logs.example.com/api/log", "1.0.0").is_err());
        assert!(HttpTransport::new("http://127.0.0.1:3000/api/log", "1.0.0").is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let transport = HttpTransport::with_timeout(
            "http://127.0.0.1:9/api/log",
            "1.0.0",
            Duration::from_secs(2),
        )
        .unwrap();

        let result = transport
            .deliver(&LogEntry::new(LogLevel::Error, "nobody listening"))
            .await;
        assert!(result.is_err());
    }
}
