//! Blackout expansion: weekly closure spans to concrete calendar events.
//!
//! One blackout event is produced per (week offset, closed span) pair, for
//! every whole week the horizon covers. Events are laid out from the week
//! containing `week_anchor`, typically [`current_week_start`]; the shipped
//! calendar derives that anchor from the current moment rather than from the
//! horizon start, so when the two fall in different weeks the blackouts land
//! shifted relative to the horizon. Passing `horizon.start()` as the anchor
//! aligns them instead.
//!
//! [`current_week_start`]: crate::horizon::current_week_start

use chrono::{Duration, NaiveDate};

use crate::events::CalendarEvent;
use crate::horizon::{week_start_of, Horizon};
use crate::interval::DayInterval;
use crate::rules::{AvailabilityRule, RankSpan};

/// Expand closed rank spans into blackout events across the horizon.
///
/// Produces exactly `horizon.whole_weeks() * spans.len()` events, ordered
/// week-major then span order. Each event covers `span.end - span.start + 1`
/// days. Spans must satisfy `1 <= start <= end <= 7`; debug builds assert
/// it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roomcal_engine::expander::expand_blackouts;
/// use roomcal_engine::horizon::Horizon;
/// use roomcal_engine::rules::RankSpan;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 8, 17).unwrap();
/// let horizon = Horizon::weeks_ahead(monday, 2);
/// let weekend = RankSpan { start: 6, end: 7 };
///
/// let events = expand_blackouts(&[weekend], &horizon, monday);
/// assert_eq!(events.len(), 2);
/// assert_eq!(
///     events[0].interval.start(),
///     NaiveDate::from_ymd_opt(2026, 8, 22).unwrap(), // Saturday
/// );
/// assert_eq!(events[0].interval.day_count(), 2);
/// ```
pub fn expand_blackouts(
    spans: &[RankSpan],
    horizon: &Horizon,
    week_anchor: NaiveDate,
) -> Vec<CalendarEvent> {
    for span in spans {
        debug_assert!(
            1 <= span.start && span.start <= span.end && span.end <= 7,
            "rank span {}..={} must satisfy 1 <= start <= end <= 7",
            span.start,
            span.end
        );
    }
    let anchor_monday = week_start_of(week_anchor);
    let weeks = horizon.whole_weeks();
    let mut events = Vec::with_capacity(weeks as usize * spans.len());
    for week in 0..i64::from(weeks) {
        for span in spans {
            let first = anchor_monday + Duration::days(week * 7 + i64::from(span.start) - 1);
            let last = anchor_monday + Duration::days(week * 7 + i64::from(span.end) - 1);
            events.push(CalendarEvent::blackout(DayInterval::normalized(first, last)));
        }
    }
    events
}

/// Expand a room's availability rule directly.
pub fn blackout_events(
    rule: &AvailabilityRule,
    horizon: &Horizon,
    week_anchor: NaiveDate,
) -> Vec<CalendarEvent> {
    expand_blackouts(&rule.closed_spans(), horizon, week_anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_empty_span_list_expands_to_nothing() {
        let horizon = Horizon::weeks_ahead(d(2026, 8, 17), 26);
        assert!(expand_blackouts(&[], &horizon, d(2026, 8, 17)).is_empty());
    }

    #[test]
    fn test_zero_whole_weeks_expands_to_nothing() {
        let horizon = Horizon::new(d(2026, 8, 17), d(2026, 8, 22)).unwrap();
        let spans = [RankSpan { start: 1, end: 7 }];
        assert!(expand_blackouts(&spans, &horizon, d(2026, 8, 17)).is_empty());
    }

    #[test]
    fn test_midweek_anchor_snaps_back_to_its_monday() {
        let horizon = Horizon::weeks_ahead(d(2026, 8, 17), 1);
        let spans = [RankSpan { start: 1, end: 1 }];
        // Thursday anchor: events still start on the Monday of that week.
        let events = expand_blackouts(&spans, &horizon, d(2026, 8, 20));
        assert_eq!(events[0].interval.start(), d(2026, 8, 17));
    }

    #[test]
    fn test_event_count_is_weeks_times_spans() {
        let horizon = Horizon::weeks_ahead(d(2026, 8, 17), 26);
        let spans = [
            RankSpan { start: 1, end: 1 },
            RankSpan { start: 3, end: 3 },
            RankSpan { start: 6, end: 7 },
        ];
        let events = expand_blackouts(&spans, &horizon, d(2026, 8, 17));
        assert_eq!(events.len(), 26 * 3);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "rank span")]
    fn test_inverted_span_is_caught_in_debug_builds() {
        let horizon = Horizon::weeks_ahead(d(2026, 8, 17), 1);
        expand_blackouts(&[RankSpan { start: 5, end: 2 }], &horizon, d(2026, 8, 17));
    }
}
