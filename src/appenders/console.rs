//! Console appender implementation

use crate::core::{Appender, LogEntry, LogLevel, OutputFormat, Result, TimestampFormat};
use colored::Colorize;

pub struct ConsoleAppender {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    /// Set the output format for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use fanout_logger::appenders::ConsoleAppender;
    /// use fanout_logger::OutputFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format as text with optional colors
    fn format_text(&self, entry: &LogEntry) -> String {
        let label = format!("{:7}", entry.level.label());
        let level_str = if self.use_colors {
            label.color(entry.level.color_code()).to_string()
        } else {
            label
        };

        let base = format!(
            "[{}] [{}] {}",
            self.timestamp_format.format(&entry.timestamp),
            level_str,
            entry.message
        );

        if entry.context.is_empty() {
            base
        } else {
            format!("{} {}", base, entry.context.format_fields())
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = match self.output_format {
            OutputFormat::Text => self.format_text(entry),
            OutputFormat::Json | OutputFormat::Logfmt => {
                self.output_format.format(entry, &self.timestamp_format)
            }
        };

        // Errors to stderr, everything else to stdout
        match entry.level {
            LogLevel::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
