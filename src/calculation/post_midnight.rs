//! Post-midnight charge calculation.
//!
//! Bills the elapsed whole hours from a marker to the rounded-up end at
//! [`RateTier::AfterMidnight`]. For an evening start the marker is advanced
//! to the 23:00 hour, so the pre-midnight phase keeps everything before it.

use chrono::{TimeZone, Timelike};

use crate::models::{AuditStep, BillingPhase, Cents, ChargeLine, RateTier, ShiftInterval};

use super::civil_time::{add_elapsed_hours, civil_hours_between, round_up_end};
use super::rates::{EARLIEST_START_HOUR, LAST_PRE_MIDNIGHT_HOUR, LATEST_END_HOUR};

/// The result of the post-midnight phase.
#[derive(Debug, Clone)]
pub struct PostMidnightResult {
    /// A single line when any hours were billed.
    pub line: Option<ChargeLine>,
    /// The phase total in cents.
    pub amount_cents: Cents,
    /// The audit step recording this phase.
    pub audit_step: AuditStep,
}

/// Calculates the post-midnight part of a shift's charge.
///
/// # Behavior
///
/// - The marker starts at the shift start. If the start hour is after 17:00
///   it moves forward `23 - start_hour` elapsed hours, landing in the 23:00
///   hour with the start's minutes and seconds.
/// - The end moves one elapsed hour later when it has minutes or seconds.
/// - If the rounded end's hour is strictly between 04:00 and 23:00 the shift
///   has no post-midnight part and the phase bills nothing.
/// - Otherwise the phase bills [`civil_hours_between`] the marker and the
///   rounded end, never less than zero.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::calculate_post_midnight_charge;
/// use sitter_engine::models::ShiftInterval;
/// use chrono::TimeZone;
/// use chrono_tz::US::Eastern;
///
/// let start = Eastern.with_ymd_and_hms(2015, 1, 1, 22, 0, 0).unwrap();
/// let end = Eastern.with_ymd_and_hms(2015, 1, 2, 2, 0, 0).unwrap();
/// let interval = ShiftInterval::new(start, end).unwrap();
///
/// // 23:00 to 02:00
/// let result = calculate_post_midnight_charge(&interval, 1);
/// assert_eq!(result.amount_cents, 3 * 1600);
/// ```
pub fn calculate_post_midnight_charge<Tz: TimeZone>(
    interval: &ShiftInterval<Tz>,
    step_number: u32,
) -> PostMidnightResult {
    let start = interval.start();
    let start_hour = start.hour();
    let marker = if start_hour > EARLIEST_START_HOUR {
        add_elapsed_hours(start, LAST_PRE_MIDNIGHT_HOUR - start_hour)
    } else {
        start.clone()
    };

    let rounded_end = round_up_end(interval.end());
    let rounded_end_hour = rounded_end.hour();

    if rounded_end_hour > LATEST_END_HOUR && rounded_end_hour < LAST_PRE_MIDNIGHT_HOUR {
        return PostMidnightResult {
            line: None,
            amount_cents: 0,
            audit_step: AuditStep {
                step_number,
                rule_id: "post_midnight_charge".to_string(),
                rule_name: "Post-Midnight Charge".to_string(),
                input: serde_json::json!({
                    "start_hour": start_hour,
                    "rounded_end_hour": rounded_end_hour
                }),
                output: serde_json::json!({
                    "hours": 0,
                    "amount_cents": 0
                }),
                reasoning: format!(
                    "Rounded end falls at hour {}, before 23:00; no post-midnight hours",
                    rounded_end_hour
                ),
            },
        };
    }

    let elapsed_hours = civil_hours_between(&marker, &rounded_end);
    let hours = u32::try_from(elapsed_hours.max(0)).unwrap_or(u32::MAX);
    let line = (hours > 0)
        .then(|| ChargeLine::new(BillingPhase::PostMidnight, RateTier::AfterMidnight, hours));
    let amount_cents = line.as_ref().map_or(0, |line| line.amount_cents);

    let audit_step = AuditStep {
        step_number,
        rule_id: "post_midnight_charge".to_string(),
        rule_name: "Post-Midnight Charge".to_string(),
        input: serde_json::json!({
            "start_hour": start_hour,
            "marker_hour": marker.hour(),
            "rounded_end_hour": rounded_end_hour
        }),
        output: serde_json::json!({
            "hours": hours,
            "amount_cents": amount_cents
        }),
        reasoning: format!(
            "{} elapsed hours from marker to rounded end at ${}/hr = {} cents",
            hours,
            RateTier::AfterMidnight.cents_per_hour() / 100,
            amount_cents
        ),
    };

    PostMidnightResult {
        line,
        amount_cents,
        audit_step,
    }
}
