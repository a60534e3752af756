//! Error types for the sitter charge engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while charging a shift.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The reason a shift interval was rejected.
///
/// Every validation failure in the charge calculation maps to exactly one
/// of these reasons, wrapped in [`EngineError::InvalidInput`].
///
/// # Example
///
/// ```
/// use sitter_engine::error::InvalidInputReason;
///
/// let reason = InvalidInputReason::StartOutOfWindow;
/// assert_eq!(reason.to_string(), "start time must be after 5PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputReason {
    /// No interval was supplied.
    MissingInterval,
    /// The interval is longer than the maximum shift length.
    TooLong,
    /// The start time falls between 05:00 and 16:59.
    StartOutOfWindow,
    /// The end time falls between 05:00 and 16:59, or past 04:00:00.
    EndOutOfWindow,
    /// The end instant is not strictly after the start instant.
    EndNotAfterStart,
}

impl InvalidInputReason {
    /// Returns the snake_case code used in API error details.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidInputReason::MissingInterval => "missing_interval",
            InvalidInputReason::TooLong => "too_long",
            InvalidInputReason::StartOutOfWindow => "start_out_of_window",
            InvalidInputReason::EndOutOfWindow => "end_out_of_window",
            InvalidInputReason::EndNotAfterStart => "end_not_after_start",
        }
    }
}

impl std::fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputReason::MissingInterval => write!(f, "an interval is required"),
            InvalidInputReason::TooLong => write!(f, "an interval must not exceed 13 hours"),
            InvalidInputReason::StartOutOfWindow => write!(f, "start time must be after 5PM"),
            InvalidInputReason::EndOutOfWindow => write!(f, "end time must be before 4AM"),
            InvalidInputReason::EndNotAfterStart => {
                write!(f, "end time must be after start time")
            }
        }
    }
}

/// The main error type for the sitter charge engine.
///
/// The charge calculation itself only ever fails with
/// [`EngineError::InvalidInput`]. The remaining variants belong to the
/// surrounding service: resolving request times and loading configuration.
///
/// # Example
///
/// ```
/// use sitter_engine::error::{EngineError, InvalidInputReason};
///
/// let error = EngineError::InvalidInput {
///     reason: InvalidInputReason::EndOutOfWindow,
/// };
/// assert_eq!(error.to_string(), "Invalid input: end time must be before 4AM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The shift interval failed validation.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Which rule rejected the interval.
        reason: InvalidInputReason,
    },

    /// A timezone name could not be resolved.
    #[error("Unknown timezone: {name}")]
    UnknownTimezone {
        /// The timezone name that was not recognised.
        name: String,
    },

    /// A wall-clock time does not exist in the shift's timezone.
    #[error("Local time {time} does not exist in timezone {timezone}")]
    NonexistentLocalTime {
        /// The wall-clock time that was skipped.
        time: NaiveDateTime,
        /// The timezone the time was resolved against.
        timezone: String,
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
}

impl EngineError {
    /// Creates an [`EngineError::InvalidInput`] for the given reason.
    pub fn invalid_input(reason: InvalidInputReason) -> Self {
        EngineError::InvalidInput { reason }
    }

    /// Returns the validation reason if this is an invalid input error.
    pub fn invalid_input_reason(&self) -> Option<InvalidInputReason> {
        match self {
            EngineError::InvalidInput { reason } => Some(*reason),
            _ => None,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
