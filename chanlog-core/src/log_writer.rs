use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex},
};

/// Destination for formatted log lines.
///
/// Writers are shared between emitting threads, so they take `&self`. Write errors are
/// swallowed: a failing sink never fails the caller.
pub trait LogWriter: Send + Sync {
    /// Writes one complete line and flushes it.
    fn regular(&self, line: &str);
    fn flush(&self);
}

/// Standard error sink.
#[derive(Default, Debug)]
pub struct LogStderr;

impl LogWriter for LogStderr {
    fn regular(&self, line: &str) {
        let mut stderr = io::stderr().lock();
        stderr.write_all(line.as_bytes()).ok();
        stderr.flush().ok();
    }

    fn flush(&self) {
        io::stderr().flush().ok();
    }
}

/// File sink. Each line goes out in a single unbuffered write.
#[derive(Debug)]
pub struct LogFile {
    file: File,
}

impl LogFile {
    /// Creates `path`, truncating it if it already exists.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let file = File::options()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)?;
        Ok(Self { file })
    }

    /// Adopts an already-open handle.
    pub fn from_file(file: File) -> Self {
        Self { file }
    }
}

impl From<File> for LogFile {
    fn from(file: File) -> Self {
        Self::from_file(file)
    }
}

impl LogWriter for LogFile {
    fn regular(&self, line: &str) {
        let mut file = &self.file;
        file.write_all(line.as_bytes()).ok();
        file.flush().ok();
    }

    fn flush(&self) {
        (&self.file).flush().ok();
    }
}

/// In-memory sink keeping every line, mostly useful to assert on output.
#[derive(Default, Debug, Clone)]
pub struct LogMemory {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, without their trailing newline.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        match self.lines.lock() {
            Ok(mut lines) => lines.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl LogWriter for LogMemory {
    fn regular(&self, line: &str) {
        let line = line.strip_suffix('\n').unwrap_or(line).to_string();
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }

    fn flush(&self) {}
}

impl<W: LogWriter + ?Sized> LogWriter for Arc<W> {
    fn regular(&self, line: &str) {
        (**self).regular(line)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

#[test]
fn test_log_file_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_log_file.log");
    std::fs::write(&path, "stale content\n").unwrap();
    let log_file = LogFile::create(&path).unwrap();
    log_file.regular("Hello, world!\n");
    log_file.regular("rust is awesome !\n");
    log_file.flush();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Hello, world!\nrust is awesome !\n"
    );
}

#[test]
fn test_log_file_from_handle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("handle.log");
    let log_file = LogFile::from(File::create(&path).unwrap());
    log_file.regular("adopted\n");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "adopted\n");
}

#[test]
fn test_log_file_bad_path() {
    assert!(LogFile::create("/nonexistent-dir/sub/app.log").is_err());
}

#[test]
fn test_log_memory() {
    let memory = LogMemory::new();
    let shared = Arc::new(memory.clone());
    shared.regular("first\n");
    memory.regular("second");
    assert_eq!(memory.lines(), vec!["first", "second"]);
    memory.clear();
    assert!(memory.lines().is_empty());
}

#[test]
fn test_log_stderr() {
    let log_stderr = LogStderr;
    log_stderr.regular("stderr line\n");
    log_stderr.flush();
}
