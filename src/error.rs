//! Error types for the Paytimer engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only configuration problems are errors: an unreachable next workday is a
//! countdown state, and an employment start after the queried period is a
//! zero amount.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Paytimer engine.
///
/// # Example
///
/// ```
/// use paytimer_engine::error::EngineError;
///
/// let error = EngineError::InvalidWeeklyMask { len: 5 };
/// assert_eq!(
///     error.to_string(),
///     "Invalid weekly mask: expected 7 entries, got 5"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Settings file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The shift window does not start strictly before it ends.
    #[error("Invalid shift window: start {start} must be before end {end}")]
    InvalidShiftWindow {
        /// The configured start of the shift.
        start: NaiveTime,
        /// The configured end of the shift.
        end: NaiveTime,
    },

    /// The weekly work-day mask does not have one entry per weekday.
    #[error("Invalid weekly mask: expected 7 entries, got {len}")]
    InvalidWeeklyMask {
        /// The number of entries supplied.
        len: usize,
    },

    /// The monthly salary is negative.
    #[error("Invalid monthly salary {amount}: must not be negative")]
    InvalidSalary {
        /// The rejected amount.
        amount: Decimal,
    },
}

impl EngineError {
    /// Returns true for errors caused by caller-supplied settings values,
    /// as opposed to failures reading settings from disk.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidShiftWindow { .. }
                | EngineError::InvalidWeeklyMask { .. }
                | EngineError::InvalidSalary { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
