use std::{
    fmt,
    io::{self, Write},
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicI32, Ordering},
    },
};

use chanlog_core::{
    Error, Level, LockGuard, LogFile, LogLock, LogOrigin, LogWriter, Result, SUPPRESS_ALL,
    env::{self, EnvDirective},
    format_console_line, format_file_line,
};
use log::Log;

/// One named channel. Its threshold may change while other threads log, so it is atomic.
#[derive(Debug)]
struct LoggerSlot {
    name: String,
    level: AtomicI32,
}

/// A bounded table of named loggers and the sinks they write to.
///
/// Registration, environment initialization and sink installation take `&mut self` and
/// are meant to happen before the registry is shared. Emission and level changes take
/// `&self`.
pub struct LogRegistry {
    capacity: usize,
    slots: Vec<LoggerSlot>,
    console: Option<Box<dyn LogWriter>>,
    file: Option<LogFile>,
    lock: Option<Arc<dyn LogLock>>,
    color: bool,
}

impl LogRegistry {
    pub(crate) fn new(
        capacity: usize,
        console: Option<Box<dyn LogWriter>>,
        lock: Option<Arc<dyn LogLock>>,
        color: bool,
    ) -> Self {
        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            console,
            file: None,
            lock,
            color,
        }
    }

    /// Registers the loggers, ids being the positions in `names`.
    ///
    /// Names are copied. Every logger starts at [`SUPPRESS_ALL`]. Calling it again
    /// replaces the whole table. Fails without touching the table when `names` holds more
    /// loggers than the capacity.
    pub fn register_loggers<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() > self.capacity {
            return Err(Error::CapacityExceeded {
                requested: names.len(),
                capacity: self.capacity,
            });
        }
        self.slots = names
            .into_iter()
            .map(|name| LoggerSlot {
                name,
                level: AtomicI32::new(SUPPRESS_ALL),
            })
            .collect();
        Ok(())
    }

    /// Configures levels and the file sink from the process environment.
    ///
    /// See [`chanlog_core::env`] for the grammar. An absent variable silences every
    /// logger; `help` prints the logger list to standard output and silences every
    /// logger. `<var>_OUTPUT` names a file to duplicate output to; failing to open it is
    /// not an error.
    pub fn init_from_environment(&mut self, var: &str) {
        let stdout = io::stdout();
        self.init_from_lookup(var, |key| std::env::var(key).ok(), &mut stdout.lock());
    }

    /// Same as [`init_from_environment`](Self::init_from_environment) with an injected
    /// variable reader and help output.
    pub fn init_from_lookup<F, W>(&mut self, var: &str, lookup: F, help_out: &mut W)
    where
        F: Fn(&str) -> Option<String>,
        W: Write,
    {
        let value = lookup(var);
        match value.as_deref().map(EnvDirective::parse) {
            Some(EnvDirective::Help) => {
                self.write_logger_list(help_out).ok();
                self.set_level(SUPPRESS_ALL);
            }
            Some(directive) => self.set_level(directive.level()),
            None => self.set_level(SUPPRESS_ALL),
        }

        if let Some(path) = lookup(&env::output_var_name(var)).filter(|path| !path.is_empty())
            && let Err(err) = self.open_file_sink(&path)
        {
            log::debug!(target: "chanlog", "{err}, logging to the console only");
        }

        if let Some(value) = value {
            let names: Vec<&str> = self.slots.iter().map(|slot| slot.name.as_str()).collect();
            for (id, level) in env::parse_overrides(&value, &names) {
                self.slots[id].level.store(level, Ordering::Relaxed);
            }
        }
    }

    /// Writes the registered logger names, one per line.
    pub fn write_logger_list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Available loggers:")?;
        for slot in &self.slots {
            writeln!(out, " - {}", slot.name)?;
        }
        out.flush()
    }

    /// Opens (creating or truncating) `path` and installs it as the file sink.
    pub fn open_file_sink<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = LogFile::create(path).map_err(|source| Error::SinkOpen {
            path: path.to_path_buf(),
            source,
        })?;
        self.file = Some(file);
        Ok(())
    }

    /// Installs an already-open file as the file sink, replacing any previous one.
    pub fn set_file_sink(&mut self, file: impl Into<LogFile>) {
        self.file = Some(file.into());
    }

    pub fn has_file_sink(&self) -> bool {
        self.file.is_some()
    }

    /// Replaces the hook held around every emission.
    pub fn set_lock_hook<L: LogLock + 'static>(&mut self, lock: L) {
        self.lock = Some(Arc::new(lock));
    }

    /// Same as [`set_lock_hook`](Self::set_lock_hook) for a hook shared with other owners.
    pub fn set_shared_lock_hook(&mut self, lock: Arc<dyn LogLock>) {
        self.lock = Some(lock);
    }

    pub fn clear_lock_hook(&mut self) {
        self.lock = None;
    }

    pub fn set_logger_level(&self, id: usize, level: i32) -> Result<()> {
        let slot = self.slots.get(id).ok_or(Error::InvalidLogger {
            id,
            count: self.slots.len(),
        })?;
        slot.level.store(level, Ordering::Relaxed);
        Ok(())
    }

    /// Applies `level` to every registered logger.
    pub fn set_level(&self, level: i32) {
        for slot in &self.slots {
            slot.level.store(level, Ordering::Relaxed);
        }
    }

    pub fn logger_count(&self) -> usize {
        self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn logger_name(&self, id: usize) -> Option<&str> {
        self.slots.get(id).map(|slot| slot.name.as_str())
    }

    pub fn logger_level(&self, id: usize) -> Option<i32> {
        self.slots
            .get(id)
            .map(|slot| slot.level.load(Ordering::Relaxed))
    }

    /// Id of the first logger whose name prefixes `target`.
    pub fn find_logger(&self, target: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| target.starts_with(slot.name.as_str()))
    }

    /// Returns true when logger `id` would emit a message at `level`.
    pub fn enabled(&self, id: usize, level: Level) -> bool {
        self.slots
            .get(id)
            .is_some_and(|slot| level.passes(slot.level.load(Ordering::Relaxed)))
    }

    /// Emits `args` on logger `id` if its threshold lets `level` through.
    ///
    /// Unknown ids are ignored. Prefer the [`info!`](crate::info) family of macros which
    /// fill in the source location.
    pub fn log(&self, id: usize, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        let Some(slot) = self.slots.get(id) else {
            return;
        };
        if !level.passes(slot.level.load(Ordering::Relaxed)) {
            return;
        }
        let origin = LogOrigin {
            file,
            line,
            logger: &slot.name,
        };

        let _guard = LockGuard::new(self.lock.as_ref());
        let now = chrono::Local::now();
        if let Some(console) = &self.console {
            console.regular(&format_console_line(&now, level, origin, args, self.color));
        }
        if let Some(file) = &self.file {
            file.regular(&format_file_line(&now, level, origin, args));
        }
    }

    /// Installs the registry as the global [`log`] logger.
    ///
    /// A record goes to the first logger whose name prefixes its target, and is dropped
    /// when there is none.
    pub fn install(self) -> std::result::Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl fmt::Debug for LogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRegistry")
            .field("capacity", &self.capacity)
            .field("slots", &self.slots)
            .field("console", &self.console.is_some())
            .field("file", &self.file)
            .field("lock", &self.lock.is_some())
            .field("color", &self.color)
            .finish()
    }
}

impl Log for LogRegistry {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.find_logger(metadata.target())
            .is_some_and(|id| LogRegistry::enabled(self, id, metadata.level().into()))
    }

    fn log(&self, record: &log::Record) {
        let Some(id) = self.find_logger(record.target()) else {
            return;
        };
        LogRegistry::log(
            self,
            id,
            record.level().into(),
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
            *record.args(),
        );
    }

    fn flush(&self) {
        if let Some(console) = &self.console {
            console.flush();
        }
        if let Some(file) = &self.file {
            file.flush();
        }
    }
}
