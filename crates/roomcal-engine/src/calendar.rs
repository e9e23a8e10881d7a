//! One room-viewing session: derived events, fetch lifecycle, selection and
//! submission.
//!
//! [`RoomCalendar`] is created per room view and dropped on teardown. All of
//! its state is session-local; nothing is shared or locked. Reservation
//! fetches run on the host's event loop: the calendar hands out a
//! [`FetchTicket`] per refresh and applies only the result carrying the
//! newest ticket, so a slow response can never clobber a newer one.

use chrono::NaiveDate;

use crate::backend::{Reservation, ReservationBackend, Room, RoomId, SessionContext};
use crate::error::{EngineError, Result};
use crate::events::{reserved_events, CalendarEvent};
use crate::expander::blackout_events;
use crate::horizon::Horizon;
use crate::interval::DayInterval;
use crate::pricing::{self, Quote};
use crate::rules::AvailabilityRule;
use crate::selector::{BookingSelector, RawRange, SelectionRejection};

/// Identifies one reservation refresh. Only the newest ticket applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
}

/// What became of a fetch result handed back to the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The reserved overlay was rebuilt from the fetched rows.
    Applied { reserved: usize },
    /// The ticket was superseded by a newer refresh; the result was
    /// discarded.
    Stale,
    /// Transport failed; event state is unchanged and `notice` is the text
    /// to show.
    Failed { notice: String },
}

/// A confirmed booking, returned by [`RoomCalendar::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingReceipt {
    pub interval: DayInterval,
    pub quote: Quote,
}

/// Calendar state for one room-viewing session.
#[derive(Debug, Clone)]
pub struct RoomCalendar {
    room_id: RoomId,
    price_per_day: i64,
    rule: AvailabilityRule,
    horizon: Horizon,
    week_anchor: NaiveDate,
    blackouts: Vec<CalendarEvent>,
    reserved: Vec<CalendarEvent>,
    selector: BookingSelector,
    epoch: u64,
}

impl RoomCalendar {
    /// Build the calendar for `room`: parses its weekly availability and
    /// expands the blackout overlay immediately. Reservations arrive later
    /// through [`Self::begin_refresh`] and [`Self::apply_reservations`].
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownWeekday` if the room declares a day
    /// name the engine does not know.
    pub fn new(room: &Room, horizon: Horizon, week_anchor: NaiveDate) -> Result<Self> {
        let rule = AvailabilityRule::from_names(&room.available_days)?;
        let blackouts = blackout_events(&rule, &horizon, week_anchor);
        Ok(Self {
            room_id: room.id.clone(),
            price_per_day: room.price_per_day,
            rule,
            horizon,
            week_anchor,
            blackouts,
            reserved: Vec::new(),
            selector: BookingSelector::new(),
            epoch: 0,
        })
    }

    /// Start a reservation refresh. The returned ticket must be handed back
    /// with the fetch result; starting a newer refresh invalidates every
    /// earlier ticket.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.epoch += 1;
        FetchTicket { epoch: self.epoch }
    }

    /// Apply the result of a reservation fetch.
    ///
    /// A stale ticket is discarded untouched. A transport failure leaves
    /// the event list exactly as it was and surfaces the failure text. A
    /// fresh successful result rebuilds the reserved overlay.
    // TODO: re-validate a held selection when a refresh brings in an
    // overlapping reservation; today that collision is caught at
    // submission by the server.
    pub fn apply_reservations(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Reservation>>,
    ) -> FetchOutcome {
        if ticket.epoch != self.epoch {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(rows) => {
                self.reserved = reserved_events(&rows);
                FetchOutcome::Applied { reserved: self.reserved.len() }
            }
            Err(err) => FetchOutcome::Failed { notice: err.to_string() },
        }
    }

    /// Run a drag-selection through the validation chain: authentication,
    /// horizon containment, then closed-interval overlap against blackouts
    /// and reserved bookings. On success the new interval replaces any
    /// previously held one.
    pub fn select(
        &mut self,
        raw: RawRange,
        session: &SessionContext,
    ) -> std::result::Result<DayInterval, SelectionRejection> {
        let mut candidates =
            Vec::with_capacity(self.blackouts.len() + self.reserved.len());
        candidates.extend_from_slice(&self.blackouts);
        candidates.extend_from_slice(&self.reserved);
        self.selector.select(raw, session, &self.horizon, &candidates)
    }

    /// Events to draw: blackouts, reserved bookings, then the selection if
    /// one is held. At most one selection-tagged event exists.
    pub fn visible_events(&self) -> Vec<CalendarEvent> {
        let mut events =
            Vec::with_capacity(self.blackouts.len() + self.reserved.len() + 1);
        events.extend_from_slice(&self.blackouts);
        events.extend_from_slice(&self.reserved);
        events.extend(self.selector.selection_event());
        events
    }

    /// The held selection, if any.
    pub fn selection(&self) -> Option<DayInterval> {
        self.selector.selection()
    }

    /// Drop the held selection.
    pub fn clear_selection(&mut self) {
        self.selector.clear();
    }

    /// Quote the held selection at the room's per-day rate.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NothingSelected` when idle, or
    /// `EngineError::PriceOverflow` on arithmetic overflow.
    pub fn quote_selection(&self) -> Result<Quote> {
        let interval = self.selector.selection().ok_or(EngineError::NothingSelected)?;
        pricing::quote(self.price_per_day, &interval)
    }

    /// Submit the held selection to the backend at its quoted total.
    ///
    /// On success the selection is cleared and a receipt returned. On any
    /// failure the selection is preserved unchanged so the user can retry
    /// without re-selecting.
    pub fn submit<B: ReservationBackend>(&mut self, backend: &B) -> Result<BookingReceipt> {
        let interval = self.selector.selection().ok_or(EngineError::NothingSelected)?;
        let quote = pricing::quote(self.price_per_day, &interval)?;
        backend.submit_reservation(&self.room_id, interval, quote.total)?;
        self.selector.clear();
        Ok(BookingReceipt { interval, quote })
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn price_per_day(&self) -> i64 {
        self.price_per_day
    }

    pub fn horizon(&self) -> &Horizon {
        &self.horizon
    }

    /// The anchor the blackout overlay was expanded from.
    pub fn week_anchor(&self) -> NaiveDate {
        self.week_anchor
    }

    /// The room's weekly availability rule.
    pub fn rule(&self) -> &AvailabilityRule {
        &self.rule
    }
}
