//! Main logger implementation

use super::{
    appender::Appender,
    config::{LoggerConfig, LoggerScope, LoggingConfig},
    diagnostics::{Diagnostics, StderrDiagnostics},
    error::Result,
    error_details::ErrorDetails,
    log_context::{FieldValue, LogContext},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    outside::OutsideSender,
    record_builder::RecordBuilder,
    router::DestinationRouter,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// State shared by a logger and every logger derived from it
struct LoggerShared {
    router: DestinationRouter,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    outside: Option<OutsideSender>,
    diagnostics: Arc<dyn Diagnostics>,
    metrics: Arc<LoggerMetrics>,
}

/// Level-gated fan-out to local appenders and an optional outside sender.
///
/// `Logger` is a cheap handle: clones and derived loggers share the same
/// sinks and configuration. Each handle owns its context props.
///
/// # Example
///
/// ```
/// use fanout_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .local_level(LogLevel::Verbose)
///     .appender(ConsoleAppender::new())
///     .build();
///
/// let cart = logger.with_field("component", "Cart");
/// cart.info("opened");
/// cart.error_with("checkout failed", &ErrorDetails::new("card declined").with_code(402));
/// ```
#[derive(Clone)]
pub struct Logger {
    shared: Arc<LoggerShared>,
    context: Arc<LogContext>,
}

impl Logger {
    /// A logger with default floors and no sinks
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Process log entry with per-appender panic isolation
    ///
    /// One failing appender doesn't prevent the others from receiving the
    /// entry. Failures are reported to diagnostics, never to the caller.
    fn process_local(
        appenders: &mut [Box<dyn Appender>],
        entry: &LogEntry,
        diagnostics: &dyn Diagnostics,
        metrics: &LoggerMetrics,
    ) -> bool {
        let mut has_error = false;

        for appender in appenders.iter_mut() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(entry)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    diagnostics.error(&format!("Appender '{}' failed: {}", appender.name(), e));
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    diagnostics.error(&format!(
                        "Appender '{}' panicked: {}. Other appenders continue to function.",
                        appender.name(),
                        panic_msg
                    ));
                    has_error = true;
                }
            }
        }

        if has_error {
            metrics.record_local_failed();
        } else {
            metrics.record_local_written();
        }

        has_error
    }

    /// Derive a logger whose context props are this logger's extended by
    /// `props`. This logger is not modified.
    #[must_use]
    pub fn with_context(&self, props: LogContext) -> Logger {
        Logger {
            shared: Arc::clone(&self.shared),
            context: Arc::new(self.context.extended(&props)),
        }
    }

    /// Derive a logger with one extra context prop
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.with_context(LogContext::new().with_field(key, value))
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn config(&self) -> LoggerConfig {
        let router = &self.shared.router;
        LoggerConfig::new(router.local_floor(), router.outside_floor())
    }

    /// Channel the logger reports its own failures to
    pub fn diagnostics(&self) -> &dyn Diagnostics {
        self.shared.diagnostics.as_ref()
    }

    pub fn outside(&self) -> Option<&OutsideSender> {
        self.shared.outside.as_ref()
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.shared.appenders.write().push(appender);
    }

    /// Whether a record at `level` would reach any sink
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.shared.router.route(level).local
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.log_with(level, message, None, None);
    }

    /// Emit a record with optional per-call data and error.
    ///
    /// Never fails: a record that cannot be built is reported to
    /// diagnostics and dropped.
    pub fn log_with(
        &self,
        level: LogLevel,
        message: impl AsRef<str>,
        data: Option<&LogContext>,
        error: Option<&ErrorDetails>,
    ) {
        let shared = &self.shared;
        let destinations = shared.router.route(level);
        if !destinations.local {
            shared.metrics.record_filtered();
            return;
        }

        let mut builder = RecordBuilder::new(level, message.as_ref()).props(&self.context);
        if let Some(data) = data {
            builder = builder.context(data);
        }
        if let Some(error) = error {
            builder = builder.error(error);
        }

        let entry = match builder.build() {
            Ok(entry) => entry,
            Err(e) => {
                shared
                    .diagnostics
                    .warn(&format!("Dropping '{}' record: {}", level, e));
                return;
            }
        };

        {
            let mut appenders = shared.appenders.write();
            Self::process_local(&mut appenders, &entry, shared.diagnostics.as_ref(), &shared.metrics);
        }

        if destinations.outside {
            if let Some(ref outside) = shared.outside {
                outside.send(entry);
            }
        }
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.shared.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn verbose(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Verbose, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Log regardless of the configured floors
    #[inline]
    pub fn always(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Always, message);
    }

    /// Log with structured context fields
    pub fn log_with_context(&self, level: LogLevel, message: impl AsRef<str>, context: &LogContext) {
        self.log_with(level, message, Some(context), None);
    }

    pub fn info_with_context(&self, message: impl AsRef<str>, context: &LogContext) {
        self.log_with_context(LogLevel::Info, message, context);
    }

    pub fn error_with_context(&self, message: impl AsRef<str>, context: &LogContext) {
        self.log_with_context(LogLevel::Error, message, context);
    }

    /// Log an error record carrying the error's flattened fields
    pub fn error_with(&self, message: impl AsRef<str>, error: &ErrorDetails) {
        self.log_with(LogLevel::Error, message, None, Some(error));
    }

    pub fn warn_with(&self, message: impl AsRef<str>, error: &ErrorDetails) {
        self.log_with(LogLevel::Warn, message, None, Some(error));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .field("context", &self.context)
            .field("outside", &self.shared.outside)
            .finish()
    }
}

impl Drop for LoggerShared {
    fn drop(&mut self) {
        for appender in self.appenders.get_mut().iter_mut() {
            if let Err(e) = appender.flush() {
                self.diagnostics.error(&format!(
                    "Failed to flush '{}' during shutdown: {}",
                    appender.name(),
                    e
                ));
            }
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use fanout_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .local_level(LogLevel::Debug)
///     .outside_level(LogLevel::Error)
///     .appender(ConsoleAppender::new())
///     .field("service", "storefront")
///     .build();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    scoped: Option<(LoggingConfig, LoggerScope)>,
    appenders: Vec<Box<dyn Appender>>,
    outside: Option<OutsideSender>,
    diagnostics: Arc<dyn Diagnostics>,
    context: LogContext,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            scoped: None,
            appenders: Vec::new(),
            outside: None,
            diagnostics: Arc::new(StderrDiagnostics),
            context: LogContext::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self.scoped = None;
        self
    }

    /// Take the floors from one scope of a [`LoggingConfig`].
    ///
    /// Resolution happens in [`build`](Self::build) so that bad level names
    /// are reported to the diagnostics configured on this builder.
    #[must_use = "builder methods return a new value"]
    pub fn scoped_config(mut self, config: LoggingConfig, scope: LoggerScope) -> Self {
        self.scoped = Some((config, scope));
        self
    }

    /// Set the floor for local sinks
    #[must_use = "builder methods return a new value"]
    pub fn local_level(mut self, level: LogLevel) -> Self {
        self.config.local_level = level;
        self
    }

    /// Set the floor for outside delivery
    #[must_use = "builder methods return a new value"]
    pub fn outside_level(mut self, level: LogLevel) -> Self {
        self.config.outside_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Forward qualifying records through `sender`
    #[must_use = "builder methods return a new value"]
    pub fn outside(mut self, sender: OutsideSender) -> Self {
        self.outside = Some(sender);
        self
    }

    /// Where the logger reports its own failures. Also applied to the
    /// outside sender.
    #[must_use = "builder methods return a new value"]
    pub fn diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Initial context props
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: LogContext) -> Self {
        self.context.merge(&context);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let config = match self.scoped {
            Some((ref logging, scope)) => logging.resolve(scope, self.diagnostics.as_ref()),
            None => self.config,
        };
        let metrics = Arc::new(LoggerMetrics::new());
        let outside = self.outside.map(|sender| {
            sender
                .with_diagnostics(Arc::clone(&self.diagnostics))
                .with_metrics(Arc::clone(&metrics))
        });

        Logger {
            shared: Arc::new(LoggerShared {
                router: DestinationRouter::from_config(&config),
                appenders: RwLock::new(self.appenders),
                outside,
                diagnostics: self.diagnostics,
                metrics,
            }),
            context: Arc::new(self.context),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
