//! Weekly availability rules.
//!
//! A room declares the weekdays on which it accepts bookings; every
//! unlisted day is closed. Ranks follow ISO-8601: Monday = 1 through
//! Sunday = 7. [`AvailabilityRule::closed_spans`] folds the closed ranks
//! into maximal runs of consecutive ranks, the shape the blackout expander
//! consumes. Runs never wrap the week boundary: Sunday (7) and Monday (1)
//! stay separate spans.

use chrono::Weekday;
use serde::Serialize;

use crate::error::EngineError;

/// Weekday display order; rank = index + 1.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A maximal run of consecutive closed weekday ranks, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankSpan {
    /// First closed rank (1 = Monday).
    pub start: u8,
    /// Last closed rank (7 = Sunday).
    pub end: u8,
}

impl RankSpan {
    /// Number of weekdays the span covers.
    pub fn len_days(&self) -> u8 {
        self.end - self.start + 1
    }
}

/// The set of weekdays on which a room accepts bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRule {
    open: [bool; 7],
}

impl AvailabilityRule {
    /// Build a rule from the weekdays on which the room is open.
    pub fn new<I>(days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut open = [false; 7];
        for day in days {
            open[day.num_days_from_monday() as usize] = true;
        }
        Self { open }
    }

    /// Build a rule from day names as delivered by the room record,
    /// case-insensitive, full or abbreviated (`"monday"`, `"Mon"`).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownWeekday`] for a name that is not an
    /// English weekday.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, EngineError> {
        let mut days = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let day = parse_weekday(&name.to_lowercase())
                .ok_or_else(|| EngineError::UnknownWeekday(format!("'{name}'")))?;
            days.push(day);
        }
        Ok(Self::new(days))
    }

    /// A room open every day of the week.
    pub fn open_all_week() -> Self {
        Self { open: [true; 7] }
    }

    /// Whether the room accepts bookings on `day`.
    pub fn is_open(&self, day: Weekday) -> bool {
        self.open[day.num_days_from_monday() as usize]
    }

    /// Weekdays on which the room is open, Monday first.
    pub fn open_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.iter().copied().filter(|day| self.is_open(*day))
    }

    /// Fold the closed ranks into maximal runs of consecutive ranks.
    ///
    /// A fully closed room yields the single span `1..=7`; a fully open
    /// room yields no spans; an isolated closed day yields a length-1 span.
    /// Ranks compare numerically only, so rank 7 never merges with rank 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Weekday;
    /// use roomcal_engine::rules::AvailabilityRule;
    ///
    /// let midweek_only = AvailabilityRule::new([Weekday::Wed]);
    /// let spans: Vec<(u8, u8)> = midweek_only
    ///     .closed_spans()
    ///     .iter()
    ///     .map(|span| (span.start, span.end))
    ///     .collect();
    /// assert_eq!(spans, vec![(1, 2), (4, 7)]);
    /// ```
    pub fn closed_spans(&self) -> Vec<RankSpan> {
        let mut spans = Vec::new();
        let mut run: Option<RankSpan> = None;
        for rank in 1..=7u8 {
            if self.open[usize::from(rank - 1)] {
                if let Some(span) = run.take() {
                    spans.push(span);
                }
            } else {
                match run.as_mut() {
                    Some(span) => span.end = rank,
                    None => run = Some(RankSpan { start: rank, end: rank }),
                }
            }
        }
        if let Some(span) = run {
            spans.push(span);
        }
        spans
    }
}

/// Parse a lowercase English weekday name, full or abbreviated.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Rank of a weekday: Monday = 1 through Sunday = 7.
pub fn day_rank(day: Weekday) -> u8 {
    day.number_from_monday() as u8
}
