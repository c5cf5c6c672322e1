//! Log level definitions and the level policy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// The named levels are totally ordered `Debug < Verbose < Info < Warn < Error`.
/// `Always` is a sentinel that passes every floor; used as a floor it admits
/// only `Always` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    Verbose = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Always = 5,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Verbose,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Always,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Always => "always",
        }
    }

    /// Upper-case label for text output
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Always => "ALWAYS",
        }
    }

    /// Numeric rank used for floor comparisons
    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Whether a record at this level clears `floor`
    #[inline]
    pub fn passes(&self, floor: LogLevel) -> bool {
        passes(*self, floor)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => BrightBlack,
            LogLevel::Verbose => Cyan,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Always => Magenta,
        }
    }
}

/// True iff `level` is `Always` or ranks at or above `floor`.
#[inline]
pub fn passes(level: LogLevel, floor: LogLevel) -> bool {
    level == LogLevel::Always || level.rank() >= floor.rank()
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = super::error::LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "verbose" => Ok(LogLevel::Verbose),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "always" => Ok(LogLevel::Always),
            _ => Err(super::error::LoggerError::invalid_level(s)),
        }
    }
}
