//! Price quoting for a selected interval.

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::interval::DayInterval;

/// A computed price quote. Integer arithmetic throughout, in the same minor
/// currency unit as the per-day rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Calendar days charged, counting both endpoints.
    pub days: i64,
    /// Rate per day in minor units.
    pub price_per_day: i64,
    /// `price_per_day * days`.
    pub total: i64,
}

/// Quote an interval at a per-day rate.
///
/// The day count is the calendar-day difference plus one, never an
/// elapsed-hours division, so a Friday-to-Sunday stay is three days.
///
/// # Errors
///
/// Returns [`EngineError::PriceOverflow`] if the multiplication leaves
/// `i64`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roomcal_engine::interval::DayInterval;
/// use roomcal_engine::pricing::quote;
///
/// let stay = DayInterval::new(
///     NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(quote(100, &stay).unwrap().total, 300);
/// ```
pub fn quote(price_per_day: i64, interval: &DayInterval) -> Result<Quote> {
    let days = interval.day_count();
    let total = price_per_day.checked_mul(days).ok_or_else(|| {
        EngineError::PriceOverflow(format!("{days} days at {price_per_day} per day"))
    })?;
    Ok(Quote { days, price_per_day, total })
}
