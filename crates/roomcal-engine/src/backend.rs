//! External collaborators: the reservation backend and the user session.
//!
//! The engine computes; everything durable or remote lives behind
//! [`ReservationBackend`]. Implementations decide transport (a browser host
//! calls its REST API, the CLI reads fixtures, tests use an in-memory mock).
//! Authentication state travels as an explicit [`SessionContext`] argument,
//! never as an ambient global.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interval::DayInterval;

/// Opaque room identifier as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room metadata as served by the backend. Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Rate per day in minor currency units.
    pub price_per_day: i64,
    /// Weekday names on which the room accepts bookings; absent days are
    /// closed.
    pub available_days: Vec<String>,
}

/// An existing booking as served by the preview feed. The feed is assumed
/// pre-filtered to rows worth displaying; `status` is carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
}

/// Who is driving this room-viewing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    user: Option<String>,
}

impl SessionContext {
    /// A session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session for a signed-in user.
    pub fn signed_in(user: impl Into<String>) -> Self {
        Self { user: Some(user.into()) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

/// The remote collaborator the calendar reads from and books against.
///
/// Fetches fail with `EngineError::Transport`, submissions with
/// `EngineError::Submission`. The engine never retries; it reports the
/// failure and leaves its own state intact.
pub trait ReservationBackend {
    /// Room metadata including price and weekly availability.
    fn fetch_room(&self, room: &RoomId) -> Result<Room>;

    /// Existing bookings to overlay on the calendar.
    fn fetch_reservations_preview(&self, room: &RoomId) -> Result<Vec<Reservation>>;

    /// Book `interval` at the quoted `total`. Called only after the user
    /// confirmed the quote.
    fn submit_reservation(&self, room: &RoomId, interval: DayInterval, total: i64) -> Result<()>;
}
