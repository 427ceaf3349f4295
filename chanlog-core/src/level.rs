use std::fmt;

use colored::{ColoredString, Colorize};

/// Threshold that no level passes. A logger set to it prints nothing.
pub const SUPPRESS_ALL: i32 = -1;

/// Severity of a message, most severe first.
///
/// A message at level `L` is emitted by a logger whose threshold is `t` iff `L as i32 <= t`.
/// Thresholds are plain integers so they may go below [`Level::Fatal`] (see [`SUPPRESS_ALL`])
/// or above [`Level::Trace`] (everything passes).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Fatal = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Returns true when a message at this level passes `threshold`.
    pub fn passes(self, threshold: i32) -> bool {
        self as i32 <= threshold
    }

    pub(crate) fn colored(self) -> ColoredString {
        let name = format!("{:<5}", self.as_str());
        let name = name.as_str();
        match self {
            Level::Fatal => name.red(),
            Level::Error => name.bright_red(),
            Level::Warn => name.yellow(),
            Level::Info => name.green(),
            Level::Debug => name.blue(),
            Level::Trace => name.purple(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}
