//! Shift charge calculation.
//!
//! Validates the interval, then sums the pre-midnight and post-midnight
//! phases. Both entry points are pure functions of the interval.

use chrono::TimeZone;

use crate::error::EngineResult;
use crate::models::{AuditStep, Cents, ChargeBreakdown, ShiftInterval};

use super::civil_time::to_fixed_offset;
use super::post_midnight::calculate_post_midnight_charge;
use super::pre_midnight::calculate_pre_midnight_charge;
use super::validation::validate_interval;

/// Calculates the charge for a shift in cents.
///
/// Fails with [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// if the interval is absent or outside the legal bounds; see
/// [`validate_interval`].
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::calculate_charge;
/// use sitter_engine::models::ShiftInterval;
/// use chrono::TimeZone;
/// use chrono_tz::US::Eastern;
///
/// let start = Eastern.with_ymd_and_hms(2015, 1, 1, 22, 10, 0).unwrap();
/// let end = Eastern.with_ymd_and_hms(2015, 1, 1, 23, 45, 59).unwrap();
/// let interval = ShiftInterval::new(start, end).unwrap();
///
/// assert_eq!(calculate_charge(Some(&interval)).unwrap(), 2400);
/// ```
pub fn calculate_charge<Tz: TimeZone>(interval: Option<&ShiftInterval<Tz>>) -> EngineResult<Cents> {
    calculate_charge_breakdown(interval).map(|breakdown| breakdown.total_cents)
}

/// Calculates the itemised charge for a shift.
///
/// Produces the same total as [`calculate_charge`] along with one line per
/// billed tier and an audit step for validation and each phase.
pub fn calculate_charge_breakdown<Tz: TimeZone>(
    interval: Option<&ShiftInterval<Tz>>,
) -> EngineResult<ChargeBreakdown> {
    let interval = validate_interval(interval)?;

    let validation_step = AuditStep {
        step_number: 1,
        rule_id: "interval_validation".to_string(),
        rule_name: "Interval Validation".to_string(),
        input: serde_json::json!({
            "start": to_fixed_offset(interval.start()).to_rfc3339(),
            "end": to_fixed_offset(interval.end()).to_rfc3339(),
            "duration_minutes": interval.duration().num_minutes()
        }),
        output: serde_json::json!({
            "valid": true
        }),
        reasoning: "Shift is within 13 hours, starts after 5PM and ends by 4AM".to_string(),
    };

    let pre_midnight = calculate_pre_midnight_charge(interval, 2);
    let post_midnight = calculate_post_midnight_charge(interval, 3);

    let total_cents = pre_midnight.amount_cents + post_midnight.amount_cents;

    let mut lines = pre_midnight.lines;
    lines.extend(post_midnight.line);

    Ok(ChargeBreakdown {
        lines,
        total_cents,
        audit_steps: vec![
            validation_step,
            pre_midnight.audit_step,
            post_midnight.audit_step,
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInputReason;
    use crate::models::RateTier;
    use chrono_tz::US::Eastern;

    fn eastern_interval(
        start: (i32, u32, u32, u32, u32, u32),
        end: (i32, u32, u32, u32, u32, u32),
    ) -> ShiftInterval<chrono_tz::Tz> {
        let start = Eastern
            .with_ymd_and_hms(start.0, start.1, start.2, start.3, start.4, start.5)
            .unwrap();
        let end = Eastern
            .with_ymd_and_hms(end.0, end.1, end.2, end.3, end.4, end.5)
            .unwrap();
        ShiftInterval::new(start, end).unwrap()
    }

    fn charge(
        start: (i32, u32, u32, u32, u32, u32),
        end: (i32, u32, u32, u32, u32, u32),
    ) -> EngineResult<Cents> {
        calculate_charge(Some(&eastern_interval(start, end)))
    }

    #[test]
    fn test_partial_hour_after_bedtime_returns_800() {
        assert_eq!(charge((2015, 1, 1, 20, 10, 0), (2015, 1, 1, 20, 45, 59)).unwrap(), 800);
    }

    #[test]
    fn test_partial_hour_in_eleven_pm_hour_returns_1600() {
        assert_eq!(charge((2015, 1, 1, 23, 10, 0), (2015, 1, 1, 23, 45, 59)).unwrap(), 1600);
    }

    #[test]
    fn test_partial_hour_before_bedtime_returns_1200() {
        assert_eq!(charge((2015, 1, 1, 17, 10, 0), (2015, 1, 1, 17, 45, 59)).unwrap(), 1200);
    }

    #[test]
    fn test_spanning_bedtime_returns_2000() {
        assert_eq!(charge((2015, 1, 1, 19, 10, 0), (2015, 1, 1, 20, 45, 59)).unwrap(), 2000);
    }

    #[test]
    fn test_spanning_eleven_pm_returns_2400() {
        assert_eq!(charge((2015, 1, 1, 22, 10, 0), (2015, 1, 1, 23, 45, 59)).unwrap(), 2400);
    }

    #[test]
    fn test_two_partial_hours_before_bedtime_returns_2400() {
        assert_eq!(charge((2015, 1, 1, 17, 10, 0), (2015, 1, 1, 18, 45, 59)).unwrap(), 2400);
    }

    #[test]
    fn test_end_after_four_am_is_invalid() {
        let err = charge((2015, 1, 1, 18, 0, 0), (2015, 1, 2, 4, 1, 1)).unwrap_err();
        assert_eq!(
            err.invalid_input_reason(),
            Some(InvalidInputReason::EndOutOfWindow)
        );
    }

    #[test]
    fn test_start_before_five_pm_is_invalid() {
        let err = charge((2015, 1, 1, 16, 59, 59), (2015, 1, 1, 18, 0, 0)).unwrap_err();
        assert_eq!(
            err.invalid_input_reason(),
            Some(InvalidInputReason::StartOutOfWindow)
        );
    }

    #[test]
    fn test_longer_than_a_shift_is_invalid() {
        let err = charge((2015, 1, 1, 18, 0, 0), (2015, 1, 2, 18, 1, 1)).unwrap_err();
        assert_eq!(err.invalid_input_reason(), Some(InvalidInputReason::TooLong));
    }

    #[test]
    fn test_missing_interval_is_invalid() {
        let err = calculate_charge::<chrono_tz::Tz>(None).unwrap_err();
        assert_eq!(
            err.invalid_input_reason(),
            Some(InvalidInputReason::MissingInterval)
        );
    }

    #[test]
    fn test_full_night() {
        // 18, 19 at $12; 20, 21, 22 at $8; 23:00-04:00 at $16
        let total = charge((2015, 1, 1, 18, 0, 0), (2015, 1, 2, 4, 0, 0)).unwrap();
        assert_eq!(total, 2 * 1200 + 3 * 800 + 5 * 1600);
    }

    #[test]
    fn test_shift_starting_after_midnight() {
        let total = charge((2015, 1, 2, 0, 0, 0), (2015, 1, 2, 2, 0, 0)).unwrap();
        assert_eq!(total, 2 * 1600);
    }

    #[test]
    fn test_start_in_five_pm_hour_crossing_midnight() {
        // The post-midnight marker only advances for start hours after 17,
        // so it measures from 17:00 rather than 23:00.
        let total = charge((2015, 1, 1, 17, 0, 0), (2015, 1, 2, 0, 0, 0)).unwrap();
        assert_eq!(total, (3 * 1200 + 3 * 800) + 7 * 1600);
    }

    #[test]
    fn test_spring_forward_bills_elapsed_hours() {
        // Wall clock shows 22:00-04:00 (six hours); only five elapse.
        let total = charge((2015, 3, 7, 22, 0, 0), (2015, 3, 8, 4, 0, 0)).unwrap();
        assert_eq!(total, 800 + 4 * 1600);
    }

    #[test]
    fn test_fall_back_bills_repeated_hour() {
        // Wall clock shows 22:00-04:00 (six hours); seven elapse.
        let total = charge((2015, 10, 31, 22, 0, 0), (2015, 11, 1, 4, 0, 0)).unwrap();
        assert_eq!(total, 800 + 6 * 1600);
    }

    #[test]
    fn test_breakdown_matches_total() {
        let interval = eastern_interval((2015, 1, 1, 19, 0, 0), (2015, 1, 2, 1, 30, 0));
        let breakdown = calculate_charge_breakdown(Some(&interval)).unwrap();

        let line_total: Cents = breakdown.lines.iter().map(|l| l.amount_cents).sum();
        assert_eq!(line_total, breakdown.total_cents);
        assert_eq!(breakdown.total_cents, calculate_charge(Some(&interval)).unwrap());

        assert_eq!(breakdown.hours_at(RateTier::StartToBedtime), 1);
        assert_eq!(breakdown.hours_at(RateTier::BedtimeToMidnight), 3);
        // 23:00 to 02:30 rounded end
        assert_eq!(breakdown.hours_at(RateTier::AfterMidnight), 3);
    }

    #[test]
    fn test_breakdown_audit_steps_are_numbered() {
        let interval = eastern_interval((2015, 1, 1, 18, 0, 0), (2015, 1, 1, 22, 0, 0));
        let breakdown = calculate_charge_breakdown(Some(&interval)).unwrap();

        let numbers: Vec<u32> = breakdown.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(breakdown.audit_steps[0].rule_id, "interval_validation");
        assert_eq!(breakdown.audit_steps[1].rule_id, "pre_midnight_charge");
        assert_eq!(breakdown.audit_steps[2].rule_id, "post_midnight_charge");
    }

    #[test]
    fn test_breakdown_is_deterministic() {
        let interval = eastern_interval((2015, 1, 1, 21, 15, 0), (2015, 1, 2, 3, 20, 0));
        let first = calculate_charge_breakdown(Some(&interval)).unwrap();
        let second = calculate_charge_breakdown(Some(&interval)).unwrap();
        assert_eq!(first, second);
    }
}
