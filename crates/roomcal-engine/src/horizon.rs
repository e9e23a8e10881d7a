//! Generation horizons and week anchoring.
//!
//! A [`Horizon`] bounds how far ahead blackout events are generated and how
//! far ahead a booking may be selected: a half-open day range `[start, end)`
//! whose usable extent is its whole weeks. A trailing partial week generates
//! nothing.
//!
//! Blackout expansion is laid out from a week anchor, the Monday of some
//! week. The shipped calendar anchors on the current moment's week rather
//! than on the horizon start; [`current_week_start`] computes exactly that
//! anchor. The two coincide while the horizon starts inside the current
//! week and drift apart otherwise. Callers who want blackouts aligned to
//! the horizon anchor on `horizon.start()` instead.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::EngineError;
use crate::interval::DayInterval;

/// Whole weeks the calendar generates ahead by default, roughly six months.
pub const DEFAULT_HORIZON_WEEKS: u32 = 26;

/// Most weeks a host may request in one horizon, ten years. Hosts enforce
/// this at their input boundary; the engine's date arithmetic assumes it.
pub const MAX_HORIZON_WEEKS: u32 = 520;

/// The bounded future range over which blackouts are generated and
/// selections are permitted. Half-open: `start` is the first bookable day,
/// `end` the first day past the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Horizon {
    start: NaiveDate,
    end: NaiveDate,
}

impl Horizon {
    /// Create a horizon from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHorizon`] if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        if end < start {
            return Err(EngineError::InvalidHorizon(format!(
                "end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// A horizon spanning `weeks` whole weeks from `start`.
    pub fn weeks_ahead(start: NaiveDate, weeks: u32) -> Self {
        Self {
            start,
            end: start + Duration::days(i64::from(weeks) * 7),
        }
    }

    /// First day inside the horizon.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day past the horizon.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whole weeks between the bounds; a trailing partial week is dropped.
    pub fn whole_weeks(&self) -> u32 {
        ((self.end - self.start).num_days() / 7) as u32
    }

    /// Whether `interval` lies fully inside the horizon.
    pub fn contains(&self, interval: &DayInterval) -> bool {
        self.start <= interval.start() && interval.end() < self.end
    }
}

/// Monday of the week containing `now` in the given timezone. This is the
/// anchor the shipped calendar expands blackouts from.
pub fn current_week_start(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    week_start_of(now.with_timezone(&tz).date_naive())
}

/// Monday of the week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
