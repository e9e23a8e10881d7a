//! Day-granularity calendar intervals.
//!
//! [`DayInterval`] is the unit the whole engine computes over: both endpoints
//! are calendar days, and both are inclusive. Day granularity is carried by
//! the type itself (`NaiveDate` has no time component), so an interval cannot
//! hold a stray time-of-day by construction.
//!
//! Overlap is closed: two intervals that share even a single day overlap.
//! A booking ending on a given day blocks another booking starting that day.
//! No half-open comparison is used anywhere in the engine.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// An inclusive interval of calendar days. Deserializing checks endpoint
/// order the same way [`Self::new`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedInterval")]
pub struct DayInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DayInterval {
    /// Create an interval from ordered endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        if end < start {
            return Err(EngineError::InvalidInterval(format!(
                "end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Create an interval from endpoints given in either order.
    pub fn normalized(a: NaiveDate, b: NaiveDate) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// A single-day interval.
    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// First day of the interval (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the interval (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, counting both endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use roomcal_engine::interval::DayInterval;
    ///
    /// let stay = DayInterval::new(
    ///     NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(stay.day_count(), 3);
    /// ```
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `day` falls inside the interval.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Closed-interval overlap: intervals sharing even one day overlap.
    pub fn overlaps(&self, other: &DayInterval) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// UTC bounds for calendar widgets: the first midnight of `start`, and
    /// one second before the midnight following `end`, so the rendered span
    /// stays visually inside its last day.
    pub fn utc_render_bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.start.and_time(NaiveTime::MIN).and_utc();
        let end = (self.end + Duration::days(1)).and_time(NaiveTime::MIN).and_utc()
            - Duration::seconds(1);
        (start, end)
    }
}

/// Wire shape for deserialization; endpoint order is checked by the
/// `TryFrom` conversion.
#[derive(Deserialize)]
struct UncheckedInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<UncheckedInterval> for DayInterval {
    type Error = EngineError;

    fn try_from(raw: UncheckedInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}
