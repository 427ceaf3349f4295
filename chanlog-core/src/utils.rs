use std::fmt;

use chrono::{DateTime, TimeZone};
use colored::Colorize;

use crate::level::Level;

/// Where a message was emitted from, and by which logger.
#[derive(Debug, Clone, Copy)]
pub struct LogOrigin<'a> {
    pub file: &'a str,
    pub line: u32,
    pub logger: &'a str,
}

fn push_message(out: &mut String, message: fmt::Arguments<'_>) {
    use std::fmt::Write;
    write!(out, "{message}").ok();
    if !out.ends_with('\n') {
        out.push('\n');
    }
}

/// `HH:MM:SS LEVEL file:line: [logger] message`
pub fn format_console_line<Tz: TimeZone>(
    time: &DateTime<Tz>,
    level: Level,
    origin: LogOrigin<'_>,
    message: fmt::Arguments<'_>,
    color: bool,
) -> String
where
    Tz::Offset: fmt::Display,
{
    let LogOrigin { file, line, logger } = origin;
    let time = time.format("%H:%M:%S");
    let mut out = if color {
        let location = format!("{file}:{line}:");
        let location = location.as_str().bright_black();
        format!("{time} {} {location} [{logger}] ", level.colored())
    } else {
        format!("{time} {level:<5} {file}:{line}: [{logger}] ")
    };
    push_message(&mut out, message);
    out
}

/// `YYYY-MM-DD HH:MM:SS LEVEL file:line: [logger] message`, never colored.
pub fn format_file_line<Tz: TimeZone>(
    time: &DateTime<Tz>,
    level: Level,
    origin: LogOrigin<'_>,
    message: fmt::Arguments<'_>,
) -> String
where
    Tz::Offset: fmt::Display,
{
    let LogOrigin { file, line, logger } = origin;
    let time = time.format("%Y-%m-%d %H:%M:%S");
    let mut out = format!("{time} {level:<5} {file}:{line}: [{logger}] ");
    push_message(&mut out, message);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap()
    }

    fn origin() -> LogOrigin<'static> {
        LogOrigin {
            file: "src/main.rs",
            line: 42,
            logger: "net",
        }
    }

    #[test]
    fn test_console_line() {
        let line = format_console_line(
            &at(),
            Level::Warn,
            origin(),
            format_args!("{} peers", 3),
            false,
        );
        assert_eq!(line, "07:05:02 WARN  src/main.rs:42: [net] 3 peers\n");
    }

    #[test]
    fn test_file_line() {
        let line = format_file_line(&at(), Level::Debug, origin(), format_args!("x={:>4}", 7));
        assert_eq!(line, "2024-03-09 07:05:02 DEBUG src/main.rs:42: [net] x=   7\n");
    }

    #[test]
    fn test_message_newline_not_doubled() {
        let line = format_file_line(&at(), Level::Info, origin(), format_args!("done\n"));
        assert!(line.ends_with("done\n"));
        assert!(!line.ends_with("\n\n"));
    }

    #[test]
    fn test_console_line_colored_keeps_content() {
        colored::control::set_override(true);
        let line =
            format_console_line(&at(), Level::Fatal, origin(), format_args!("boom"), true);
        colored::control::unset_override();
        assert!(line.starts_with("07:05:02 "));
        assert!(line.contains("FATAL"));
        assert!(line.contains("\x1b["));
        assert!(line.ends_with("[net] boom\n"));
    }
}
