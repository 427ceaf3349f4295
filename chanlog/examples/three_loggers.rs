use chanlog::{MutexLock, registry_config};

#[repr(usize)]
#[derive(Clone, Copy)]
enum Loggers {
    Logger1,
    Logger2,
    Logger3,
}

fn main() {
    // Same as running with TEST_LOG=6:logger1.3:logger2.4 unless TEST_LOG is already set
    if std::env::var_os("TEST_LOG").is_none() {
        // SAFETY: no other thread is running yet
        unsafe { std::env::set_var("TEST_LOG", "6:logger1.3:logger2.4") };
    }

    let mut registry = registry_config().with_lock(MutexLock::new()).build();
    registry
        .register_loggers(["logger1", "logger2", "logger3"])
        .expect("three loggers fit in the default capacity");
    registry.init_from_environment("TEST_LOG");

    for (n, logger) in [Loggers::Logger1, Loggers::Logger2, Loggers::Logger3]
        .into_iter()
        .enumerate()
    {
        let n = n + 1;
        chanlog::fatal!(registry, logger, "Logger {n} fatal");
        chanlog::error!(registry, logger, "Logger {n} error");
        chanlog::warn!(registry, logger, "Logger {n} warn");
        chanlog::info!(registry, logger, "Logger {n} info");
        chanlog::debug!(registry, logger, "Logger {n} debug");
        chanlog::trace!(registry, logger, "Logger {n} trace");
    }
}
