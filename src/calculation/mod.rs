//! Calculation logic for the sitter charge engine.
//!
//! This module contains interval validation, the civil-time helpers used at
//! hour boundaries, the pre-midnight and post-midnight billing phases, and
//! the functions that combine them into a shift charge.

mod charge;
mod civil_time;
mod post_midnight;
mod pre_midnight;
mod rates;
mod validation;

pub use charge::{calculate_charge, calculate_charge_breakdown};
pub use civil_time::{
    add_elapsed_hours, civil_hours_between, has_partial_hour, round_up_end, rounded_end_hour,
    to_fixed_offset,
};
pub use post_midnight::{PostMidnightResult, calculate_post_midnight_charge};
pub use pre_midnight::{PreMidnightResult, calculate_pre_midnight_charge};
pub use rates::{
    BEDTIME_HOUR, EARLIEST_START_HOUR, LAST_PRE_MIDNIGHT_HOUR, LATEST_END_HOUR, MAX_SHIFT_HOURS,
    PRE_MIDNIGHT_CUTOFF_HOUR, is_outside_shift_window, pre_midnight_tier,
};
pub use validation::validate_interval;
