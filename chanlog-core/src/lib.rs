//! # chanlog-core
//! Core utilities for chanlog - levels, sinks, lock hook and environment grammar.

mod config;
pub mod env;
mod error;
mod level;
mod lock;
mod log_writer;
mod utils;

pub use config::{CHANLOG_CONFIG, ChanlogConfig};
pub use error::{Error, Result};
pub use level::{Level, SUPPRESS_ALL};
pub use lock::{LockGuard, LogLock, MutexLock};
pub use log_writer::{LogFile, LogMemory, LogStderr, LogWriter};
pub use utils::{LogOrigin, format_console_line, format_file_line};
