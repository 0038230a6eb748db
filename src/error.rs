//! Error types for the hours analyzer.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The computation core only ever raises [`EngineError::InvalidPeriod`]; every
//! other variant belongs to configuration loading or the record store.

use thiserror::Error;

/// The main error type for the hours analyzer.
///
/// # Example
///
/// ```
/// use hours_analyzer::error::EngineError;
///
/// let error = EngineError::InvalidPeriod { period_id: 13 };
/// assert_eq!(error.to_string(), "Invalid period: 13 (expected 1-12)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested period identifier is outside 1-12.
    #[error("Invalid period: {period_id} (expected 1-12)")]
    InvalidPeriod {
        /// The rejected period identifier.
        period_id: u32,
    },

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

    /// A schedule parsed but does not describe the twelve periods.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// What is wrong with the schedule.
        message: String,
    },

    /// The record store could not be read or written.
    #[error("Record store error at '{path}': {message}")]
    StoreError {
        /// The backing file of the store.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_displays_id() {
        let error = EngineError::InvalidPeriod { period_id: 0 };
        assert_eq!(error.to_string(), "Invalid period: 0 (expected 1-12)");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/schedule.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/schedule.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_schedule_displays_message() {
        let error = EngineError::InvalidSchedule {
            message: "period 4 is defined twice".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid schedule: period 4 is defined twice"
        );
    }

    #[test]
    fn test_store_error_displays_path_and_message() {
        let error = EngineError::StoreError {
            path: "AVEEE.csv".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Record store error at 'AVEEE.csv': permission denied"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_period() -> EngineResult<()> {
            Err(EngineError::InvalidPeriod { period_id: 99 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_period()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
