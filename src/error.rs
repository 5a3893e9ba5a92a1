//! Error types for the prayer window engine.

/// Error type for all fallible engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Returned when a time string is not `HH:MM` within a 24-hour day.
    #[error("invalid time {input:?}: expected HH:MM with hour 0-23 and minute 0-59")]
    InvalidFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when a progress interval has zero length.
    #[error("degenerate interval {start}..{end}: start and end are equal")]
    DegenerateInterval {
        /// Interval start, as `HH:MM`.
        start: String,
        /// Interval end, as `HH:MM`.
        end: String,
    },

    /// Returned when a nearest-location query is made against an empty catalog.
    #[error("reference location catalog is empty")]
    EmptyCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_format() {
        let e = EngineError::InvalidFormat {
            input: "25:61".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid time \"25:61\": expected HH:MM with hour 0-23 and minute 0-59"
        );
    }

    #[test]
    fn error_degenerate_interval() {
        let e = EngineError::DegenerateInterval {
            start: "05:00".into(),
            end: "05:00".into(),
        };
        assert_eq!(
            e.to_string(),
            "degenerate interval 05:00..05:00: start and end are equal"
        );
    }

    #[test]
    fn error_empty_catalog() {
        assert_eq!(
            EngineError::EmptyCatalog.to_string(),
            "reference location catalog is empty"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<EngineError>();
    }
}
