//! Core data models for the sitter charge engine.
//!
//! This module contains the shift interval and the charge result types.

mod charge_result;
mod shift_interval;

pub use charge_result::{
    AuditStep, AuditTrace, BillingPhase, Cents, ChargeBreakdown, ChargeLine, ChargeResult,
    RateTier, cents_to_dollars,
};
pub use shift_interval::ShiftInterval;
