//! Calendar events and the reserved-booking mapping.
//!
//! Everything the calendar displays is a [`CalendarEvent`]: a day interval
//! plus a closed [`EventKind`] tag. The tag, not a position in some list, is
//! what overlap filtering and rendering dispatch on.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::Reservation;
use crate::interval::DayInterval;

/// Classification of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// The room is never bookable here (weekly closure).
    Blackout,
    /// Already booked by another party.
    Reserved,
    /// The current user's in-progress candidate interval.
    Selection,
}

impl EventKind {
    /// Title string the calendar widget renders for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Blackout => "n/a",
            EventKind::Reserved => "reserved",
            EventKind::Selection => "selected",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A display and validation event on the room calendar. Derived data only:
/// regenerated whenever room data, reservations or the horizon change, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub kind: EventKind,
    pub interval: DayInterval,
}

impl CalendarEvent {
    pub fn blackout(interval: DayInterval) -> Self {
        Self { kind: EventKind::Blackout, interval }
    }

    pub fn reserved(interval: DayInterval) -> Self {
        Self { kind: EventKind::Reserved, interval }
    }

    pub fn selection(interval: DayInterval) -> Self {
        Self { kind: EventKind::Selection, interval }
    }

    /// Timestamped view for calendar widgets.
    pub fn render_utc(&self) -> RenderedEvent {
        let (start, end) = self.interval.utc_render_bounds();
        RenderedEvent {
            title: self.kind.label().to_owned(),
            kind: self.kind,
            start,
            end,
        }
    }
}

/// A calendar event rendered to concrete UTC timestamps: start at the first
/// midnight, end one second before the midnight after the last day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEvent {
    /// Widget title: `"n/a"`, `"reserved"` or `"selected"`.
    pub title: String,
    pub kind: EventKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Map fetched reservations to reserved events, one event per reservation.
///
/// The event covers the reservation's full span: `startDate` and `endDate`
/// truncated to their calendar days, both inclusive. A feed that already
/// splits multi-day bookings into one-day rows therefore produces the same
/// one-day events it always did. A reservation whose end truncates to before
/// its start maps to the single day at its start.
pub fn reserved_events(reservations: &[Reservation]) -> Vec<CalendarEvent> {
    reservations
        .iter()
        .map(|reservation| {
            let start = reservation.start_date.date_naive();
            let end = reservation.end_date.date_naive();
            let interval = if end < start {
                DayInterval::single(start)
            } else {
                DayInterval::normalized(start, end)
            };
            CalendarEvent::reserved(interval)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(start: &str, end: &str) -> Reservation {
        Reservation {
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            status: "confirmed".to_owned(),
        }
    }

    #[test]
    fn test_labels_match_the_rendered_titles() {
        assert_eq!(EventKind::Blackout.label(), "n/a");
        assert_eq!(EventKind::Reserved.label(), "reserved");
        assert_eq!(EventKind::Selection.label(), "selected");
    }

    #[test]
    fn test_maps_each_reservation_to_one_event() {
        let rows = vec![
            reservation("2026-09-03T00:00:00Z", "2026-09-03T00:00:00Z"),
            reservation("2026-09-10T09:00:00Z", "2026-09-12T17:00:00Z"),
        ];
        let events = reserved_events(&rows);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Reserved);
        assert_eq!(events[0].interval.day_count(), 1);
        assert_eq!(events[1].interval.day_count(), 3);
    }

    #[test]
    fn test_inverted_feed_rows_collapse_to_the_start_day() {
        let rows = vec![reservation("2026-09-10T00:00:00Z", "2026-09-08T00:00:00Z")];
        let events = reserved_events(&rows);
        assert_eq!(events[0].interval.day_count(), 1);
        assert_eq!(
            events[0].interval.start(),
            "2026-09-10".parse().unwrap()
        );
    }

    #[test]
    fn test_rendering_keeps_the_span_inside_its_last_day() {
        let rows = vec![reservation("2026-09-10T00:00:00Z", "2026-09-12T00:00:00Z")];
        let rendered = reserved_events(&rows)[0].render_utc();
        assert_eq!(rendered.title, "reserved");
        assert_eq!(rendered.start.to_rfc3339(), "2026-09-10T00:00:00+00:00");
        assert_eq!(rendered.end.to_rfc3339(), "2026-09-12T23:59:59+00:00");
    }
}
