use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot register {requested} loggers, capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
    #[error("invalid logger id {id}, {count} loggers registered")]
    InvalidLogger { id: usize, count: usize },
    #[error("unable to open log file {}", path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_exceeded_display() {
        let err = Error::CapacityExceeded {
            requested: 11,
            capacity: 10,
        };
        assert_eq!(err.to_string(), "cannot register 11 loggers, capacity is 10");
    }

    #[test]
    fn test_invalid_logger_display() {
        let err = Error::InvalidLogger { id: 3, count: 3 };
        assert_eq!(err.to_string(), "invalid logger id 3, 3 loggers registered");
    }

    #[test]
    fn test_sink_open_keeps_source() {
        let err = Error::SinkOpen {
            path: "/nonexistent/app.log".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "unable to open log file /nonexistent/app.log");
        assert!(std::error::Error::source(&err).is_some());
    }
}
