//! WASM bindings for the roomcal engine.
//!
//! String-in/string-out: every function takes JSON text and returns JSON
//! text, so hosts need nothing beyond the generated module. The engine has
//! no clock access; the host passes the date standing in for "today" (for a
//! browser, `new Date().toISOString().slice(0, 10)`).

use chrono::NaiveTime;
use wasm_bindgen::prelude::*;

use roomcal_engine::{
    DayInterval, Horizon, RawRange, Reservation, Room, RoomCalendar, SessionContext,
    MAX_HORIZON_WEEKS,
};

fn parse_day(s: &str) -> Result<chrono::NaiveDate, String> {
    s.parse()
        .map_err(|_| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

fn build_calendar(
    room_json: &str,
    reservations_json: &str,
    anchor: &str,
    weeks: u32,
) -> Result<RoomCalendar, String> {
    if weeks > MAX_HORIZON_WEEKS {
        return Err(format!("weeks must be at most {MAX_HORIZON_WEEKS}, got {weeks}"));
    }
    let room: Room =
        serde_json::from_str(room_json).map_err(|e| format!("invalid room JSON: {e}"))?;
    let rows: Vec<Reservation> = if reservations_json.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(reservations_json)
            .map_err(|e| format!("invalid reservations JSON: {e}"))?
    };
    let anchor = parse_day(anchor)?;

    let mut calendar = RoomCalendar::new(&room, Horizon::weeks_ahead(anchor, weeks), anchor)
        .map_err(|e| e.to_string())?;
    let ticket = calendar.begin_refresh();
    calendar.apply_reservations(ticket, Ok(rows));
    Ok(calendar)
}

/// Render the full event overlay for a room as a JSON array of
/// `{title, kind, start, end}` objects.
#[wasm_bindgen]
pub fn rendered_events(
    room_json: &str,
    reservations_json: &str,
    anchor: &str,
    weeks: u32,
) -> Result<String, String> {
    let calendar = build_calendar(room_json, reservations_json, anchor, weeks)?;
    let rendered: Vec<_> = calendar
        .visible_events()
        .iter()
        .map(|event| event.render_utc())
        .collect();
    serde_json::to_string(&rendered).map_err(|e| e.to_string())
}

/// Validate a booking interval. Returns a verdict object either way:
/// `{ok: true, start, end, days, total}` or `{ok: false, reason}`.
#[wasm_bindgen]
pub fn check_selection(
    room_json: &str,
    reservations_json: &str,
    anchor: &str,
    weeks: u32,
    from: &str,
    to: &str,
    user: Option<String>,
) -> Result<String, String> {
    let mut calendar = build_calendar(room_json, reservations_json, anchor, weeks)?;
    let session = match user {
        Some(name) => SessionContext::signed_in(name),
        None => SessionContext::anonymous(),
    };
    let raw = RawRange::new(
        parse_day(from)?.and_time(NaiveTime::MIN),
        parse_day(to)?.and_time(NaiveTime::MIN),
    );

    let verdict = match calendar.select(raw, &session) {
        Ok(interval) => {
            let quote = calendar.quote_selection().map_err(|e| e.to_string())?;
            serde_json::json!({
                "ok": true,
                "start": interval.start().to_string(),
                "end": interval.end().to_string(),
                "days": quote.days,
                "total": quote.total,
            })
        }
        Err(rejection) => serde_json::json!({
            "ok": false,
            "reason": rejection.to_string(),
        }),
    };
    serde_json::to_string(&verdict).map_err(|e| e.to_string())
}

/// Price a stay at the room's daily rate, without validating it.
#[wasm_bindgen]
pub fn quote_stay(room_json: &str, from: &str, to: &str) -> Result<String, String> {
    let room: Room =
        serde_json::from_str(room_json).map_err(|e| format!("invalid room JSON: {e}"))?;
    let stay =
        DayInterval::new(parse_day(from)?, parse_day(to)?).map_err(|e| e.to_string())?;
    let quote = roomcal_engine::quote(room.price_per_day, &stay).map_err(|e| e.to_string())?;

    serde_json::to_string(&serde_json::json!({
        "room": room.id.to_string(),
        "days": quote.days,
        "pricePerDay": quote.price_per_day,
        "total": quote.total,
    }))
    .map_err(|e| e.to_string())
}
