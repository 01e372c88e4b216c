//! Log level definitions and severity filtering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five built-in log levels, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Level {
    /// The lowercase wire name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Numeric severity rank used for filtering.
    pub fn severity(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Level {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Severity rank for a level name. The lookup is exact: anything other than
/// the five lowercase wire names ranks 0, below every built-in level.
///
/// An unknown *candidate* therefore never passes a filter configured at a
/// built-in level, while a logger whose *configured* name is unknown accepts
/// every candidate (0 >= 0 included).
pub fn severity_of(level: &str) -> u8 {
    match level {
        "debug" => 1,
        "info" => 2,
        "warn" => 3,
        "error" => 4,
        "fatal" => 5,
        _ => 0,
    }
}

/// Decide whether a call at `candidate` passes a threshold of `configured`.
pub fn is_enabled(configured: &str, candidate: &str) -> bool {
    severity_of(candidate) >= severity_of(configured)
}
