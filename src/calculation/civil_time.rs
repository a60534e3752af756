//! Civil time arithmetic for shift boundaries.
//!
//! Wall-clock fields are read in the instant's own timezone. Hour offsets
//! and hour counts are elapsed time, so a daylight-saving transition adds
//! or removes the real hour instead of the wall-clock one.

use chrono::{DateTime, Duration, FixedOffset, Offset, TimeZone, Timelike};

/// Returns true if the instant is past the top of its hour.
///
/// Only minutes and seconds count; fractional seconds are ignored.
pub fn has_partial_hour<Tz: TimeZone>(instant: &DateTime<Tz>) -> bool {
    instant.minute() > 0 || instant.second() > 0
}

/// Returns the end's hour-of-day, plus one if it has a partial hour.
///
/// The result is 24 for an end inside the 23:00 hour.
pub fn rounded_end_hour<Tz: TimeZone>(end: &DateTime<Tz>) -> u32 {
    end.hour() + u32::from(has_partial_hour(end))
}

/// Returns the end instant moved one elapsed hour later if it has a
/// partial hour, otherwise the end itself.
pub fn round_up_end<Tz: TimeZone>(end: &DateTime<Tz>) -> DateTime<Tz> {
    if has_partial_hour(end) {
        end.clone() + Duration::hours(1)
    } else {
        end.clone()
    }
}

/// Returns `instant` moved forward by `hours` elapsed hours.
pub fn add_elapsed_hours<Tz: TimeZone>(instant: &DateTime<Tz>, hours: u32) -> DateTime<Tz> {
    instant.clone() + Duration::hours(i64::from(hours))
}

/// Returns the whole hours elapsed from `from` to `to`, truncated toward zero.
///
/// The calendar is the timezone both instants carry. Because the count is
/// taken from absolute instants, a span that crosses a spring-forward gap is
/// one hour shorter than its wall-clock difference and a span that crosses a
/// fall-back overlap is one hour longer.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::civil_hours_between;
/// use chrono::TimeZone;
/// use chrono_tz::US::Eastern;
///
/// // Wall clock says 23:00 to 04:00 is five hours; on 2015-03-08 it was four.
/// let from = Eastern.with_ymd_and_hms(2015, 3, 7, 23, 0, 0).unwrap();
/// let to = Eastern.with_ymd_and_hms(2015, 3, 8, 4, 0, 0).unwrap();
/// assert_eq!(civil_hours_between(&from, &to), 4);
/// ```
pub fn civil_hours_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> i64 {
    to.clone().signed_duration_since(from.clone()).num_hours()
}

/// Returns the same instant with its zone replaced by the offset in effect.
pub fn to_fixed_offset<Tz: TimeZone>(instant: &DateTime<Tz>) -> DateTime<FixedOffset> {
    instant.with_timezone(&instant.offset().fix())
}
