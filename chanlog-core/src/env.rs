//! Grammar of the configuration variable.
//!
//! ```text
//! VAR=<level>[:<logger>.<level>]*
//! VAR=help
//! VAR_OUTPUT=<path>
//! ```
//!
//! The leading integer is the global level. Each `:`-separated token (the first one
//! included) is then matched against the registered logger names: a logger whose name is
//! a prefix of the token takes the integer following the token's first `.`. Every matching
//! logger receives the override, except that a matching token with no `.` stops the scan
//! of the remaining loggers for that token.

use crate::level::SUPPRESS_ALL;

/// What the leading part of the variable asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvDirective {
    /// List the registered loggers and silence them all.
    Help,
    /// Apply this level to every logger.
    Level(i32),
}

impl EnvDirective {
    pub fn parse(value: &str) -> Self {
        if value == "help" {
            EnvDirective::Help
        } else {
            EnvDirective::Level(parse_leading_int(value))
        }
    }

    /// Global level this directive assigns.
    pub fn level(self) -> i32 {
        match self {
            EnvDirective::Help => SUPPRESS_ALL,
            EnvDirective::Level(level) => level,
        }
    }
}

/// Parses a leading decimal integer the way C's `atoi` does: leading whitespace and one
/// sign are accepted, parsing stops at the first non-digit, no digits yields `0`.
/// Out-of-range values saturate.
pub fn parse_leading_int(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(byte - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Per-logger overrides found in `value`, as `(logger id, level)` in application order.
pub fn parse_overrides<S: AsRef<str>>(value: &str, names: &[S]) -> Vec<(usize, i32)> {
    let mut overrides = Vec::new();
    for token in value.split(':') {
        for (id, name) in names.iter().enumerate() {
            if !token.starts_with(name.as_ref()) {
                continue;
            }
            let Some((_, level)) = token.split_once('.') else {
                break;
            };
            overrides.push((id, parse_leading_int(level)));
        }
    }
    overrides
}

/// Name of the companion variable holding the log file path.
pub fn output_var_name(var: &str) -> String {
    format!("{var}_OUTPUT")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 3] = ["logger1", "logger2", "logger3"];

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("6:logger1.3"), 6);
        assert_eq!(parse_leading_int("42abc"), 42);
        assert_eq!(parse_leading_int("  -1"), -1);
        assert_eq!(parse_leading_int("+7"), 7);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-"), 0);
        assert_eq!(parse_leading_int("99999999999999"), i32::MAX);
        assert_eq!(parse_leading_int("-99999999999999"), i32::MIN);
    }

    #[test]
    fn test_directive() {
        assert_eq!(EnvDirective::parse("help"), EnvDirective::Help);
        assert_eq!(EnvDirective::parse("help").level(), SUPPRESS_ALL);
        assert_eq!(EnvDirective::parse("helpful"), EnvDirective::Level(0));
        assert_eq!(EnvDirective::parse("4:net.5"), EnvDirective::Level(4));
    }

    #[test]
    fn test_overrides_reference_scenario() {
        assert_eq!(
            parse_overrides("6:logger1.3:logger2.4", &NAMES),
            vec![(0, 3), (1, 4)]
        );
    }

    #[test]
    fn test_overrides_skip_unknown_and_malformed() {
        assert_eq!(parse_overrides("3:other.5:logger3.x", &NAMES), vec![(2, 0)]);
        assert!(parse_overrides("", &NAMES).is_empty());
    }

    #[test]
    fn test_overrides_apply_to_every_prefix_match() {
        let names = ["net", "network"];
        assert_eq!(parse_overrides("network.5", &names), vec![(0, 5), (1, 5)]);
        assert_eq!(parse_overrides("net.2", &names), vec![(0, 2)]);
    }

    #[test]
    fn test_overrides_missing_dot_stops_scan() {
        // "net" matches "network" first and has no dot, so "network" is never reached
        let names = ["net", "network"];
        assert!(parse_overrides("network", &names).is_empty());
        // a later well-formed token is still applied
        assert_eq!(parse_overrides("network:network.4", &names), vec![(0, 4), (1, 4)]);
    }

    #[test]
    fn test_overrides_dot_taken_from_token_start() {
        let names = ["a.b"];
        assert_eq!(parse_overrides("a.b.4", &names), vec![(0, 0)]);
    }

    #[test]
    fn test_output_var_name() {
        assert_eq!(output_var_name("TEST_LOG"), "TEST_LOG_OUTPUT");
    }
}
