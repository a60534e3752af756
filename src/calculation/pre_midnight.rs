//! Pre-midnight charge calculation.
//!
//! Bills each whole clock hour from the start hour up to the rounded-up end
//! hour, capped at the 23:00 hour. Hours before bedtime are billed at
//! [`RateTier::StartToBedtime`], the rest at [`RateTier::BedtimeToMidnight`].
//! Everything from 23:00 on is left to the post-midnight phase.

use chrono::{TimeZone, Timelike};

use crate::models::{AuditStep, BillingPhase, Cents, ChargeLine, RateTier, ShiftInterval};

use super::civil_time::rounded_end_hour;
use super::rates::{
    LAST_PRE_MIDNIGHT_HOUR, LATEST_END_HOUR, PRE_MIDNIGHT_CUTOFF_HOUR, pre_midnight_tier,
};

/// The result of the pre-midnight phase.
#[derive(Debug, Clone)]
pub struct PreMidnightResult {
    /// One line per tier with billed hours.
    pub lines: Vec<ChargeLine>,
    /// The phase total in cents.
    pub amount_cents: Cents,
    /// The audit step recording this phase.
    pub audit_step: AuditStep,
}

/// Calculates the pre-midnight part of a shift's charge.
///
/// # Behavior
///
/// - A start hour before 15:00 means the shift began after midnight; the
///   phase bills nothing. Validated shifts that start in the evening never
///   take this branch.
/// - The end hour is rounded up when the end has minutes or seconds.
/// - A rounded end hour of 04:00 or earlier, or past 23:00, is clamped to
///   23:00.
/// - Each hour `h` in `start_hour..end_hour` is billed at the tier for `h`.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::calculate_pre_midnight_charge;
/// use sitter_engine::models::ShiftInterval;
/// use chrono::TimeZone;
/// use chrono_tz::US::Eastern;
///
/// let start = Eastern.with_ymd_and_hms(2015, 1, 1, 19, 10, 0).unwrap();
/// let end = Eastern.with_ymd_and_hms(2015, 1, 1, 20, 45, 59).unwrap();
/// let interval = ShiftInterval::new(start, end).unwrap();
///
/// let result = calculate_pre_midnight_charge(&interval, 1);
/// assert_eq!(result.amount_cents, 2000);
/// ```
pub fn calculate_pre_midnight_charge<Tz: TimeZone>(
    interval: &ShiftInterval<Tz>,
    step_number: u32,
) -> PreMidnightResult {
    let start_hour = interval.start().hour();

    if start_hour < PRE_MIDNIGHT_CUTOFF_HOUR {
        return PreMidnightResult {
            lines: Vec::new(),
            amount_cents: 0,
            audit_step: AuditStep {
                step_number,
                rule_id: "pre_midnight_charge".to_string(),
                rule_name: "Pre-Midnight Charge".to_string(),
                input: serde_json::json!({
                    "start_hour": start_hour
                }),
                output: serde_json::json!({
                    "amount_cents": 0
                }),
                reasoning: format!(
                    "Shift started at hour {}, after midnight; no pre-midnight hours",
                    start_hour
                ),
            },
        };
    }

    let rounded_end = rounded_end_hour(interval.end());
    let end_hour = if rounded_end <= LATEST_END_HOUR || rounded_end > LAST_PRE_MIDNIGHT_HOUR {
        LAST_PRE_MIDNIGHT_HOUR
    } else {
        rounded_end
    };

    let mut before_bedtime = 0;
    let mut after_bedtime = 0;
    for hour in start_hour..end_hour {
        match pre_midnight_tier(hour) {
            RateTier::StartToBedtime => before_bedtime += 1,
            _ => after_bedtime += 1,
        }
    }

    let lines: Vec<ChargeLine> = [
        (RateTier::StartToBedtime, before_bedtime),
        (RateTier::BedtimeToMidnight, after_bedtime),
    ]
    .into_iter()
    .filter(|(_, hours)| *hours > 0)
    .map(|(tier, hours)| ChargeLine::new(BillingPhase::PreMidnight, tier, hours))
    .collect();

    let amount_cents: Cents = lines.iter().map(|line| line.amount_cents).sum();

    let audit_step = AuditStep {
        step_number,
        rule_id: "pre_midnight_charge".to_string(),
        rule_name: "Pre-Midnight Charge".to_string(),
        input: serde_json::json!({
            "start_hour": start_hour,
            "rounded_end_hour": rounded_end,
            "billed_until_hour": end_hour
        }),
        output: serde_json::json!({
            "hours_before_bedtime": before_bedtime,
            "hours_after_bedtime": after_bedtime,
            "amount_cents": amount_cents
        }),
        reasoning: format!(
            "Billed hours {}..{}: {} at ${}/hr before bedtime, {} at ${}/hr after = {} cents",
            start_hour,
            end_hour,
            before_bedtime,
            RateTier::StartToBedtime.cents_per_hour() / 100,
            after_bedtime,
            RateTier::BedtimeToMidnight.cents_per_hour() / 100,
            amount_cents
        ),
    };

    PreMidnightResult {
        lines,
        amount_cents,
        audit_step,
    }
}
