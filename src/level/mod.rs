//! Severity levels that gate which diagnostics reach the sink.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the diagnostic logger can compare a message's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Per-lookup instrumentation: cache hits, misses, compiles.
    Trace = 0,
    /// Evictions, config sources, state changes worth seeing while tuning.
    Debug = 1,
    /// Normal milestones such as a config file being loaded.
    Info = 2,
    /// Non-fatal anomalies: invalid rule patterns, missing include files.
    #[default]
    Warn = 3,
    /// Failures that stop an operation from completing.
    Error = 4,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// ANSI color used by the stderr sink.
    #[must_use]
    pub(crate) const fn ansi(self) -> &'static str {
        match self {
            Self::Trace | Self::Debug => "\x1b[35m",
            Self::Info => "\x1b[36m",
            Self::Warn => "\x1b[33m",
            Self::Error => "\x1b[31m",
        }
    }

    /// Inverse of `level as u8`; out-of-range values saturate to `Error`.
    #[must_use]
    pub(crate) const fn from_index(index: u8) -> Self {
        let all = Self::all();
        if (index as usize) < all.len() {
            all[index as usize]
        } else {
            Self::Error
        }
    }

    /// Every level, least severe first.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
