//! Destination routing for log records

use super::config::LoggerConfig;
use super::log_level::{passes, LogLevel};

/// Which sinks receive a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Destinations {
    pub local: bool,
    pub outside: bool,
}

impl Destinations {
    pub const NONE: Destinations = Destinations {
        local: false,
        outside: false,
    };

    #[inline]
    pub fn any(&self) -> bool {
        self.local || self.outside
    }
}

/// Decides between the local and outside sinks.
///
/// Outside delivery is only ever chosen for records that also qualify
/// locally, so the outside set is a subset of the local set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationRouter {
    local_floor: LogLevel,
    outside_floor: LogLevel,
}

impl DestinationRouter {
    pub fn new(local_floor: LogLevel, outside_floor: LogLevel) -> Self {
        Self {
            local_floor,
            outside_floor,
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.local_level, config.outside_level)
    }

    #[inline]
    pub fn route(&self, level: LogLevel) -> Destinations {
        let local = passes(level, self.local_floor);
        Destinations {
            local,
            outside: local && passes(level, self.outside_floor),
        }
    }

    pub fn local_floor(&self) -> LogLevel {
        self.local_floor
    }

    pub fn outside_floor(&self) -> LogLevel {
        self.outside_floor
    }
}

impl Default for DestinationRouter {
    fn default() -> Self {
        Self::from_config(&LoggerConfig::default())
    }
}
