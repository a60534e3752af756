//! Boundary hours and rate tier selection.
//!
//! Hours are civil hour-of-day values (0-23) read in the shift's timezone.

use crate::models::RateTier;

/// The hour at which the start-to-bedtime rate gives way to the bedtime rate.
pub const BEDTIME_HOUR: u32 = 20;

/// The earliest hour a shift may start.
pub const EARLIEST_START_HOUR: u32 = 17;

/// The latest hour a shift may end (exactly on the hour).
pub const LATEST_END_HOUR: u32 = 4;

/// The last hour billed by the pre-midnight phase (exclusive upper bound).
pub const LAST_PRE_MIDNIGHT_HOUR: u32 = 23;

/// Starts before this hour have no pre-midnight segment.
pub const PRE_MIDNIGHT_CUTOFF_HOUR: u32 = 15;

/// The longest shift accepted, in standard hours.
pub const MAX_SHIFT_HOURS: i64 = 13;

/// Returns the tier a pre-midnight hour is billed at.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::pre_midnight_tier;
/// use sitter_engine::models::RateTier;
///
/// assert_eq!(pre_midnight_tier(19), RateTier::StartToBedtime);
/// assert_eq!(pre_midnight_tier(20), RateTier::BedtimeToMidnight);
/// ```
pub fn pre_midnight_tier(hour: u32) -> RateTier {
    if hour < BEDTIME_HOUR {
        RateTier::StartToBedtime
    } else {
        RateTier::BedtimeToMidnight
    }
}

/// Returns true if `hour` lies in the daytime window where a shift may
/// neither start nor end (05:00 through 16:59).
pub fn is_outside_shift_window(hour: u32) -> bool {
    hour > LATEST_END_HOUR && hour < EARLIEST_START_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedtime_boundary() {
        assert_eq!(pre_midnight_tier(17), RateTier::StartToBedtime);
        assert_eq!(pre_midnight_tier(19), RateTier::StartToBedtime);
        assert_eq!(pre_midnight_tier(20), RateTier::BedtimeToMidnight);
        assert_eq!(pre_midnight_tier(22), RateTier::BedtimeToMidnight);
    }

    #[test]
    fn test_shift_window_edges() {
        assert!(!is_outside_shift_window(4));
        assert!(is_outside_shift_window(5));
        assert!(is_outside_shift_window(16));
        assert!(!is_outside_shift_window(17));
        assert!(!is_outside_shift_window(0));
        assert!(!is_outside_shift_window(23));
    }
}
