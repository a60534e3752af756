//! Shift interval validation.
//!
//! A shift must be present, no longer than [`MAX_SHIFT_HOURS`], start at or
//! after 17:00 (or in the small hours) and end no later than 04:00:00.

use chrono::{Duration, TimeZone, Timelike};

use crate::error::{EngineError, EngineResult, InvalidInputReason};
use crate::models::ShiftInterval;

use super::civil_time::has_partial_hour;
use super::rates::{LATEST_END_HOUR, MAX_SHIFT_HOURS, is_outside_shift_window};

/// Checks an interval against the legal shift bounds.
///
/// Rules are checked in order and the first failure is returned:
/// 1. the interval must be present ([`InvalidInputReason::MissingInterval`])
/// 2. its elapsed duration must not exceed 13 hours ([`InvalidInputReason::TooLong`])
/// 3. the start hour must not be 05-16 ([`InvalidInputReason::StartOutOfWindow`])
/// 4. the end hour must not be 05-16, and an end in the 04:00 hour must be
///    exactly 04:00:00 ([`InvalidInputReason::EndOutOfWindow`])
///
/// Returns the interval itself on success.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::validate_interval;
/// use sitter_engine::error::InvalidInputReason;
/// use chrono::Utc;
///
/// let err = validate_interval::<Utc>(None).unwrap_err();
/// assert_eq!(err.invalid_input_reason(), Some(InvalidInputReason::MissingInterval));
/// ```
pub fn validate_interval<Tz: TimeZone>(
    interval: Option<&ShiftInterval<Tz>>,
) -> EngineResult<&ShiftInterval<Tz>> {
    let interval =
        interval.ok_or_else(|| EngineError::invalid_input(InvalidInputReason::MissingInterval))?;

    if interval.duration() > Duration::hours(MAX_SHIFT_HOURS) {
        return Err(EngineError::invalid_input(InvalidInputReason::TooLong));
    }

    if is_outside_shift_window(interval.start().hour()) {
        return Err(EngineError::invalid_input(
            InvalidInputReason::StartOutOfWindow,
        ));
    }

    let end = interval.end();
    if is_outside_shift_window(end.hour()) {
        return Err(EngineError::invalid_input(InvalidInputReason::EndOutOfWindow));
    }
    if end.hour() == LATEST_END_HOUR && has_partial_hour(end) {
        return Err(EngineError::invalid_input(InvalidInputReason::EndOutOfWindow));
    }

    Ok(interval)
}
