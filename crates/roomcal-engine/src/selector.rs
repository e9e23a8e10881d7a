//! Booking selection: the user-driven half of the calendar.
//!
//! [`BookingSelector`] is a two-state machine, idle or holding exactly one
//! interval. A new drag either replaces the held interval or is rejected;
//! intervals are never merged. Rejections are user-facing notices rather
//! than errors: the selector keeps its current state and the caller shows
//! the [`SelectionRejection`] display text.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::backend::SessionContext;
use crate::events::{CalendarEvent, EventKind};
use crate::horizon::Horizon;
use crate::interval::DayInterval;

/// A raw drag range from the calendar widget: wall-clock timestamps at
/// whatever resolution the widget reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl RawRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Day-align the drag: truncate both endpoints to their calendar day
    /// and order them. A backwards drag selects the same days.
    pub fn normalize(&self) -> DayInterval {
        DayInterval::normalized(self.start.date(), self.end.date())
    }
}

/// Why a selection attempt was refused. Handled locally: the display text
/// is the notice shown to the user, and the previously held interval (if
/// any) stays in place.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRejection {
    /// Only signed-in users may select a booking interval.
    #[error("sign in to select a booking interval")]
    NotAuthenticated,

    /// The days fall at least partly outside the generated horizon.
    #[error("the requested days are outside the bookable range")]
    OutsideHorizon,

    /// The days collide with an existing event of the given kind.
    #[error("the requested days overlap an existing '{0}' interval")]
    Overlaps(EventKind),
}

/// Holds at most one candidate booking interval and validates replacements.
#[derive(Debug, Default, Clone)]
pub struct BookingSelector {
    selection: Option<DayInterval>,
}

impl BookingSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a drag-selection and, if it passes, make it the held
    /// interval.
    ///
    /// Checks run in order: the session must be authenticated; the
    /// day-aligned interval must lie fully inside `horizon`; it must not
    /// overlap (closed-interval) any event in `events` other than a
    /// previous selection. Selection-tagged events are skipped by their
    /// [`EventKind`], so callers may pass the full visible list.
    ///
    /// On success the held interval is replaced, never merged, and returned
    /// for the caller to act on.
    pub fn select(
        &mut self,
        raw: RawRange,
        session: &SessionContext,
        horizon: &Horizon,
        events: &[CalendarEvent],
    ) -> Result<DayInterval, SelectionRejection> {
        if !session.is_authenticated() {
            return Err(SelectionRejection::NotAuthenticated);
        }

        let candidate = raw.normalize();

        if !horizon.contains(&candidate) {
            return Err(SelectionRejection::OutsideHorizon);
        }

        for event in events {
            if event.kind == EventKind::Selection {
                continue;
            }
            if candidate.overlaps(&event.interval) {
                return Err(SelectionRejection::Overlaps(event.kind));
            }
        }

        self.selection = Some(candidate);
        Ok(candidate)
    }

    /// The held interval, if any.
    pub fn selection(&self) -> Option<DayInterval> {
        self.selection
    }

    /// The held interval as a selection-tagged event for display.
    pub fn selection_event(&self) -> Option<CalendarEvent> {
        self.selection.map(CalendarEvent::selection)
    }

    /// Drop the held interval (view reset or confirmed booking).
    pub fn clear(&mut self) {
        self.selection = None;
    }
}
