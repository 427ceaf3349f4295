//! # chanlog
//! Named log channels, each with its own threshold, configured from one environment variable.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! chanlog = "0.1.0"
//! ```
//!
//! ```rust
//! use chanlog::registry_config;
//!
//! const NET: usize = 0;
//! const DB: usize = 1;
//!
//! let mut registry = registry_config().build();
//! registry.register_loggers(["net", "db"]).unwrap();
//! // APP_LOG=3:db.5 prints up to INFO everywhere and everything on "db"
//! registry.init_from_environment("APP_LOG");
//! chanlog::info!(registry, NET, "listening on port {}", 8080);
//! chanlog::trace!(registry, DB, "pool size {}", 4);
//! ```
//!
//! ## Environment
//! - `APP_LOG` unset: nothing is printed.
//! - `APP_LOG=<level>`: global threshold, `0` (FATAL) to `5` (TRACE).
//! - `APP_LOG=<level>:<logger>.<level>:...`: per-logger thresholds on top of the global one.
//! - `APP_LOG=help`: lists the registered loggers on stdout and prints nothing else.
//! - `APP_LOG_OUTPUT=<path>`: also writes every line to `path`, truncated first.
//!
//! ## Multi-threaded logging
//! Emission takes `&self`. Lines from different threads may interleave unless a lock hook
//! is set:
//! ```rust
//! use std::sync::Arc;
//! use chanlog::{MutexLock, registry_config};
//!
//! let mut registry = registry_config().with_lock(MutexLock::new()).build();
//! registry.register_loggers(["worker"]).unwrap();
//! registry.set_level(3);
//! let registry = Arc::new(registry);
//! let handles: Vec<_> = (0..4).map(|i| {
//!     let registry = Arc::clone(&registry);
//!     std::thread::spawn(move || chanlog::warn!(registry, 0, "hello from thread {i}"))
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! ```
//!
//! ## Logging to files
//! ```rust
//! use chanlog::registry_config;
//!
//! let mut registry = registry_config().no_console().build();
//! registry.register_loggers(["app"]).unwrap();
//! registry.open_file_sink("/tmp/chanlog_app.log").expect("Unable to create log file");
//! registry.set_level(3);
//! chanlog::info!(registry, 0, "Hello, world!");
//! assert!(std::fs::read_to_string("/tmp/chanlog_app.log").unwrap().ends_with("[app] Hello, world!\n"));
//! ```

mod registry;

use std::sync::Arc;

pub use chanlog_core::{
    CHANLOG_CONFIG, Error, Level, LogFile, LogLock, LogMemory, LogStderr, LogWriter, MutexLock,
    Result, SUPPRESS_ALL,
};
pub use registry::LogRegistry;

/// Builder for configuring and creating a [`LogRegistry`].
pub struct RegistryBuilder {
    capacity: usize,
    color: bool,
    console: Option<Box<dyn LogWriter>>,
    no_console: bool,
    lock: Option<Arc<dyn LogLock>>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            capacity: CHANLOG_CONFIG.MAX_LOGGERS,
            color: CHANLOG_CONFIG.COLOR,
            console: None,
            no_console: false,
            lock: None,
        }
    }
}

impl RegistryBuilder {
    /// Maximum number of loggers the registry accepts.
    pub fn with_capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }
    /// Colors console lines.
    pub fn with_color(self, color: bool) -> Self {
        Self { color, ..self }
    }
    /// Replaces standard error as the console sink.
    pub fn with_console<W: LogWriter + 'static>(self, writer: W) -> Self {
        Self {
            console: Some(Box::new(writer)),
            no_console: false,
            ..self
        }
    }
    /// Ignore console logging
    pub fn no_console(self) -> Self {
        Self {
            no_console: true,
            ..self
        }
    }
    /// Sets the hook held around every emission.
    pub fn with_lock<L: LogLock + 'static>(self, lock: L) -> Self {
        Self {
            lock: Some(Arc::new(lock)),
            ..self
        }
    }
    pub fn build(self) -> LogRegistry {
        let Self {
            capacity,
            color,
            console,
            no_console,
            lock,
        } = self;
        let console = if no_console {
            None
        } else {
            Some(console.unwrap_or_else(|| Box::new(LogStderr)))
        };
        LogRegistry::new(capacity, console, lock, color)
    }
}

impl Default for LogRegistry {
    fn default() -> Self {
        registry_config().build()
    }
}

/// Returns a default RegistryBuilder for configuring a registry.
pub fn registry_config() -> RegistryBuilder {
    RegistryBuilder::default()
}

/// Logs on `registry`'s logger `id` at `level`, recording the call site.
///
/// The message is only formatted when the logger lets `level` through.
#[macro_export]
macro_rules! log {
    ($registry:expr, $id:expr, $level:expr, $($arg:tt)+) => {{
        let registry: &$crate::LogRegistry = &$registry;
        let id = $id as usize;
        let level: $crate::Level = $level;
        if registry.enabled(id, level) {
            registry.log(id, level, file!(), line!(), format_args!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! fatal {
    ($registry:expr, $id:expr, $($arg:tt)+) => {
        $crate::log!($registry, $id, $crate::Level::Fatal, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($registry:expr, $id:expr, $($arg:tt)+) => {
        $crate::log!($registry, $id, $crate::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($registry:expr, $id:expr, $($arg:tt)+) => {
        $crate::log!($registry, $id, $crate::Level::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($registry:expr, $id:expr, $($arg:tt)+) => {
        $crate::log!($registry, $id, $crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($registry:expr, $id:expr, $($arg:tt)+) => {
        $crate::log!($registry, $id, $crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($registry:expr, $id:expr, $($arg:tt)+) => {
        $crate::log!($registry, $id, $crate::Level::Trace, $($arg)+)
    };
}
