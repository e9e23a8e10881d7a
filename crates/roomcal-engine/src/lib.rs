//! # roomcal-engine
//!
//! Deterministic room-booking calendar computation.
//!
//! The engine turns a room's weekly availability and its existing
//! reservations into the event overlay a booking calendar renders, validates
//! user-selected intervals against that overlay, and quotes prices. All of
//! it is pure computation over explicit inputs with no system clock access:
//! the caller provides the "now" anchor wherever one is needed, which keeps
//! every result reproducible and WASM-friendly.
//!
//! ## Modules
//!
//! - [`rules`] — weekly availability rules and closed-rank folding
//! - [`horizon`] — generation horizons and week anchoring
//! - [`interval`] — inclusive day-granularity intervals
//! - [`expander`] — weekly closures to concrete blackout events
//! - [`events`] — calendar events, reserved-booking mapping, render views
//! - [`selector`] — drag-selection validation state machine
//! - [`pricing`] — inclusive-day price quoting
//! - [`calendar`] — per-view assembly: fetch lifecycle, selection, submission
//! - [`backend`] — collaborator DTOs, session context, backend trait
//! - [`error`] — error types

pub mod backend;
pub mod calendar;
pub mod error;
pub mod events;
pub mod expander;
pub mod horizon;
pub mod interval;
pub mod pricing;
pub mod rules;
pub mod selector;

pub use backend::{Reservation, ReservationBackend, Room, RoomId, SessionContext};
pub use calendar::{BookingReceipt, FetchOutcome, FetchTicket, RoomCalendar};
pub use error::{EngineError, Result};
pub use events::{reserved_events, CalendarEvent, EventKind, RenderedEvent};
pub use expander::{blackout_events, expand_blackouts};
pub use horizon::{
    current_week_start, week_start_of, Horizon, DEFAULT_HORIZON_WEEKS, MAX_HORIZON_WEEKS,
};
pub use interval::DayInterval;
pub use pricing::{quote, Quote};
pub use rules::{day_rank, parse_weekday, AvailabilityRule, RankSpan};
pub use selector::{BookingSelector, RawRange, SelectionRejection};
