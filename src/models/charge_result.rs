//! Charge result models for the sitter charge engine.
//!
//! This module contains the rate tiers, the per-phase line items, the pure
//! [`ChargeBreakdown`] produced by the calculation, and the [`ChargeResult`]
//! returned by the HTTP service with its audit trace.

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A charge in whole cents.
pub type Cents = u32;

/// The three fixed hourly rates a shift is billed at.
///
/// # Example
///
/// ```
/// use sitter_engine::models::RateTier;
///
/// assert_eq!(RateTier::StartToBedtime.cents_per_hour(), 1200);
/// assert_eq!(RateTier::BedtimeToMidnight.cents_per_hour(), 800);
/// assert_eq!(RateTier::AfterMidnight.cents_per_hour(), 1600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// From the start of the shift until bedtime.
    StartToBedtime,
    /// From bedtime until midnight.
    BedtimeToMidnight,
    /// From midnight until the end of the shift.
    AfterMidnight,
}

impl RateTier {
    /// Returns the hourly rate for this tier in cents.
    pub const fn cents_per_hour(self) -> Cents {
        match self {
            RateTier::StartToBedtime => 1200,
            RateTier::BedtimeToMidnight => 800,
            RateTier::AfterMidnight => 1600,
        }
    }
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateTier::StartToBedtime => write!(f, "Start to bedtime"),
            RateTier::BedtimeToMidnight => write!(f, "Bedtime to midnight"),
            RateTier::AfterMidnight => write!(f, "After midnight"),
        }
    }
}

/// The billing phase a line item was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPhase {
    /// Hours from the start of the shift up to the 23:00 hour.
    PreMidnight,
    /// Hours from the 23:00 hour (or the start) to the rounded-up end.
    PostMidnight,
}

/// A single line item of a charge: whole hours billed at one tier.
///
/// # Example
///
/// ```
/// use sitter_engine::models::{BillingPhase, ChargeLine, RateTier};
///
/// let line = ChargeLine::new(BillingPhase::PreMidnight, RateTier::StartToBedtime, 3);
/// assert_eq!(line.rate_cents, 1200);
/// assert_eq!(line.amount_cents, 3600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeLine {
    /// The phase that billed these hours.
    pub phase: BillingPhase,
    /// The rate tier the hours were billed at.
    pub tier: RateTier,
    /// The number of whole hours billed.
    pub hours: u32,
    /// The hourly rate in cents.
    pub rate_cents: Cents,
    /// The line total in cents (hours * rate).
    pub amount_cents: Cents,
}

impl ChargeLine {
    /// Creates a line item, pricing the hours at the tier's rate.
    pub fn new(phase: BillingPhase, tier: RateTier, hours: u32) -> Self {
        let rate_cents = tier.cents_per_hour();
        Self {
            phase,
            tier,
            hours,
            rate_cents,
            amount_cents: hours * rate_cents,
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The itemised outcome of charging one shift.
///
/// Produced by [`calculate_charge_breakdown`](crate::calculation::calculate_charge_breakdown).
/// It is a pure function of the interval, so two breakdowns of the same
/// interval compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Line items, pre-midnight first. Tiers with no hours are omitted.
    pub lines: Vec<ChargeLine>,
    /// The sum of all line amounts.
    pub total_cents: Cents,
    /// One step per validation and billing phase.
    pub audit_steps: Vec<AuditStep>,
}

impl ChargeBreakdown {
    /// Returns the total hours billed at the given tier.
    pub fn hours_at(&self, tier: RateTier) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.tier == tier)
            .map(|line| line.hours)
            .sum()
    }
}

/// Converts cents to a dollar amount with two decimal places.
///
/// # Example
///
/// ```
/// use sitter_engine::models::cents_to_dollars;
/// use rust_decimal::Decimal;
///
/// assert_eq!(cents_to_dollars(2400), Decimal::new(2400, 2));
/// assert_eq!(cents_to_dollars(2400).to_string(), "24.00");
/// ```
pub fn cents_to_dollars(cents: Cents) -> Decimal {
    Decimal::new(i64::from(cents), 2)
}

/// The complete result of a charge request served over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced this result.
    pub engine_version: String,
    /// The timezone the shift was read in.
    pub timezone: String,
    /// The resolved start of the shift.
    pub start_time: DateTime<FixedOffset>,
    /// The resolved end of the shift.
    pub end_time: DateTime<FixedOffset>,
    /// The total charge in cents.
    pub total_cents: Cents,
    /// The total charge in dollars.
    pub total_dollars: Decimal,
    /// The billed line items.
    pub lines: Vec<ChargeLine>,
    /// The audit trace of the calculation.
    pub audit_trace: AuditTrace,
}
