use std::sync::LazyLock;

use derive_from_env::FromEnv;

#[derive(FromEnv)]
#[from_env(prefix = "CHANLOG")]
#[allow(non_snake_case)]
pub struct ChanlogConfig {
    /// Default number of loggers a registry can hold.
    #[from_env(default = "10")]
    pub MAX_LOGGERS: usize,
    /// Whether console lines are colored by default.
    #[from_env(default = "false")]
    pub COLOR: bool,
}

impl Default for ChanlogConfig {
    fn default() -> Self {
        Self {
            MAX_LOGGERS: 10,
            COLOR: false,
        }
    }
}

impl ChanlogConfig {
    /// Reads the `CHANLOG_*` variables, falling back to the defaults when one is malformed.
    pub fn load() -> Self {
        Self::from_env().unwrap_or_else(|_| {
            log::warn!(
                target: "chanlog",
                "invalid CHANLOG_MAX_LOGGERS or CHANLOG_COLOR value, using defaults"
            );
            Self::default()
        })
    }
}

pub static CHANLOG_CONFIG: LazyLock<ChanlogConfig> = LazyLock::new(ChanlogConfig::load);

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_vars<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        // SAFETY: serialized with the other tests touching the process environment
        unsafe {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
        }
        let result = f();
        unsafe {
            for (key, _) in vars {
                std::env::remove_var(key);
            }
        }
        result
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        let config = with_vars(&[], ChanlogConfig::load);
        assert_eq!(config.MAX_LOGGERS, 10);
        assert!(!config.COLOR);
    }

    #[test]
    #[serial]
    fn test_load_valid_values() {
        let config = with_vars(
            &[("CHANLOG_MAX_LOGGERS", "4"), ("CHANLOG_COLOR", "true")],
            ChanlogConfig::load,
        );
        assert_eq!(config.MAX_LOGGERS, 4);
        assert!(config.COLOR);
    }

    #[test]
    #[serial]
    fn test_load_malformed_color_falls_back() {
        let config = with_vars(&[("CHANLOG_COLOR", "maybe")], ChanlogConfig::load);
        assert_eq!(config.MAX_LOGGERS, 10);
        assert!(!config.COLOR);
    }

    #[test]
    #[serial]
    fn test_load_malformed_capacity_falls_back() {
        let config = with_vars(&[("CHANLOG_MAX_LOGGERS", "ten")], ChanlogConfig::load);
        assert_eq!(config.MAX_LOGGERS, 10);
    }
}
