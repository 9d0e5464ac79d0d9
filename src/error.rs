//! Error types for the shift date/time library.
//!
//! The datetime functions never fail; they encode bad input as `None`, zero or
//! an empty string. Errors are produced only where a caller asks for
//! validation: loading store configuration and checking schedule records.

use thiserror::Error;

/// The main error type for configuration loading and record validation.
///
/// # Example
///
/// ```
/// use shift_datetime::error::ScheduleError;
///
/// let error = ScheduleError::ConfigNotFound {
///     path: "/missing/store.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/store.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured timezone is not a known IANA zone.
    #[error("Unknown timezone: {name}")]
    InvalidTimezone {
        /// The rejected zone name.
        name: String,
    },

    /// A time of day was not in `HH:mm` form.
    #[error("Invalid time of day '{value}', expected HH:mm")]
    InvalidTimeOfDay {
        /// The rejected value.
        value: String,
    },

    /// A timestamp field could not be interpreted.
    #[error("Invalid timestamp in '{field}': {value}")]
    InvalidTimestamp {
        /// The field that held the timestamp.
        field: String,
        /// The raw value.
        value: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A status change that the record's current state does not allow.
    #[error("Cannot move {entity} from {from} to {to}")]
    InvalidTransition {
        /// The kind of record, e.g. "substitute request".
        entity: String,
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

/// A type alias for Results that return ScheduleError.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ScheduleError::ConfigNotFound {
            path: "/missing/store.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/store.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ScheduleError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_timezone_displays_name() {
        let error = ScheduleError::InvalidTimezone {
            name: "Mars/Olympus".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown timezone: Mars/Olympus");
    }

    #[test]
    fn test_invalid_time_of_day_displays_value() {
        let error = ScheduleError::InvalidTimeOfDay {
            value: "9am".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time of day '9am', expected HH:mm"
        );
    }

    #[test]
    fn test_invalid_shift_displays_id_and_message() {
        let error = ScheduleError::InvalidShift {
            shift_id: "shift_001".to_string(),
            message: "end time before start time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift 'shift_001': end time before start time"
        );
    }

    #[test]
    fn test_invalid_transition_displays_states() {
        let error = ScheduleError::InvalidTransition {
            entity: "substitute request".to_string(),
            from: "rejected".to_string(),
            to: "approved".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot move substitute request from rejected to approved"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ScheduleError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_timestamp() -> ScheduleResult<()> {
            Err(ScheduleError::InvalidTimestamp {
                field: "start_time".to_string(),
                value: "garbage".to_string(),
            })
        }

        fn propagates_error() -> ScheduleResult<()> {
            returns_invalid_timestamp()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
