//! Shift interval model.
//!
//! A [`ShiftInterval`] is the pair of instants a babysitter is charged for,
//! anchored to one civil calendar. The calendar is the timezone type
//! parameter: hour, minute and second are always read in that zone.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};

use crate::error::{EngineError, EngineResult, InvalidInputReason};

/// An ordered pair of instants in a single civil calendar.
///
/// The end is always strictly after the start; [`ShiftInterval::new`] is the
/// only way to build one.
///
/// # Examples
///
/// ```
/// use sitter_engine::models::ShiftInterval;
/// use chrono::TimeZone;
/// use chrono_tz::US::Eastern;
///
/// let start = Eastern.with_ymd_and_hms(2015, 1, 1, 18, 0, 0).unwrap();
/// let end = Eastern.with_ymd_and_hms(2015, 1, 2, 2, 0, 0).unwrap();
/// let interval = ShiftInterval::new(start, end).unwrap();
/// assert_eq!(interval.duration().num_hours(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftInterval<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl<Tz: TimeZone> ShiftInterval<Tz> {
    /// Creates an interval from two zoned instants.
    ///
    /// Fails with [`InvalidInputReason::EndNotAfterStart`] unless `end` is
    /// strictly after `start`.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::invalid_input(
                InvalidInputReason::EndNotAfterStart,
            ));
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from two wall-clock times in `tz`.
    ///
    /// A wall-clock time repeated by a fall-back transition resolves to its
    /// earliest instant. A time skipped by a spring-forward transition fails
    /// with [`EngineError::NonexistentLocalTime`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sitter_engine::models::ShiftInterval;
    /// use chrono::NaiveDateTime;
    /// use chrono_tz::US::Eastern;
    ///
    /// let start = NaiveDateTime::parse_from_str("2015-01-01 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2015-01-02 01:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let interval = ShiftInterval::from_local(&Eastern, start, end).unwrap();
    /// assert_eq!(interval.duration().num_minutes(), 450);
    /// ```
    pub fn from_local(tz: &Tz, start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self>
    where
        Tz: fmt::Display,
    {
        let start = resolve_local(tz, start)?;
        let end = resolve_local(tz, end)?;
        Self::new(start, end)
    }

    /// Returns the start instant.
    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    /// Returns the end instant.
    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    /// Returns the elapsed time between start and end.
    pub fn duration(&self) -> Duration {
        self.end.clone().signed_duration_since(self.start.clone())
    }
}

fn resolve_local<Tz>(tz: &Tz, local: NaiveDateTime) -> EngineResult<DateTime<Tz>>
where
    Tz: TimeZone + fmt::Display,
{
    tz.from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| EngineError::NonexistentLocalTime {
            time: local,
            timezone: tz.to_string(),
        })
}
