//! Error types for the salary engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing employee records
//! and computing salaries.

use thiserror::Error;

/// The main error type for the salary engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::UnknownAttendanceCode {
///     code: "X".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown attendance code: X");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A request field was malformed or out of range.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance symbol outside the recognized set was supplied.
    #[error("Unknown attendance code: {code}")]
    UnknownAttendanceCode {
        /// The symbol that was not recognized.
        code: String,
    },

    /// A day index outside `[0, 31)` was supplied.
    #[error("Invalid day index: {day} (expected 0-30)")]
    InvalidDay {
        /// The day index that was rejected.
        day: i64,
    },

    /// A period length outside `[1, 31]` was passed to the calculator.
    #[error("Invalid period length: {total_days} (expected 1-31)")]
    InvalidPeriod {
        /// The period length that was rejected.
        total_days: i64,
    },

    /// No employee record exists for the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was not found.
        id: String,
    },

    /// No designation record exists for the given id.
    #[error("Designation not found: {id}")]
    DesignationNotFound {
        /// The id that was not found.
        id: String,
    },

    /// No salary sheet record exists for the given id.
    #[error("Salary sheet not found: {id}")]
    SheetNotFound {
        /// The id that was not found.
        id: String,
    },

    /// The persistence backend failed; not retried by the engine.
    #[error("Persistence error: {message}")]
    Persistence {
        /// A description of the backend failure.
        message: String,
    },

    /// A derived quantity could not be represented.
    #[error("Calculation error: {message}")]
    Calculation {
        /// A description of the calculation error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration could not be parsed.
    #[error("Failed to parse configuration '{path}': {message}")]
    ConfigParse {
        /// The path (or environment variable) that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An I/O error occurred outside the persistence layer.
    #[error("I/O error: {message}")]
    Io {
        /// A description of the I/O error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_field_and_message() {
        let error = EngineError::Validation {
            field: "basic".to_string(),
            message: "must be non-negative".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid field 'basic': must be non-negative");
    }

    #[test]
    fn test_unknown_attendance_code_displays_symbol() {
        let error = EngineError::UnknownAttendanceCode {
            code: "X".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown attendance code: X");
    }

    #[test]
    fn test_invalid_day_displays_index() {
        let error = EngineError::InvalidDay { day: 31 };
        assert_eq!(error.to_string(), "Invalid day index: 31 (expected 0-30)");
    }

    #[test]
    fn test_invalid_day_displays_negative_index() {
        let error = EngineError::InvalidDay { day: -1 };
        assert_eq!(error.to_string(), "Invalid day index: -1 (expected 0-30)");
    }

    #[test]
    fn test_invalid_period_displays_length() {
        let error = EngineError::InvalidPeriod { total_days: 0 };
        assert_eq!(
            error.to_string(),
            "Invalid period length: 0 (expected 1-31)"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "e1b6".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: e1b6");
    }

    #[test]
    fn test_persistence_displays_message() {
        let error = EngineError::Persistence {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Persistence error: connection reset");
    }

    #[test]
    fn test_config_parse_displays_path_and_message() {
        let error = EngineError::ConfigParse {
            path: "config/seed.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration 'config/seed.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
