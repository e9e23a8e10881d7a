//! Host-side tests: the bindings are plain functions off wasm32, so the
//! JSON surface can be exercised without a browser.

use roomcal_wasm::{check_selection, quote_stay, rendered_events};

const ROOM: &str = r#"{
    "id": "room-7",
    "name": "Boardroom",
    "pricePerDay": 100,
    "availableDays": ["monday", "tuesday", "wednesday", "thursday", "friday"]
}"#;

const RESERVATIONS: &str = r#"[{
    "startDate": "2026-08-26T00:00:00Z",
    "endDate": "2026-08-27T00:00:00Z",
    "status": "confirmed"
}]"#;

#[test]
fn test_rendered_events_returns_json_array() {
    let out = rendered_events(ROOM, RESERVATIONS, "2026-08-17", 2).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let events = value.as_array().unwrap();

    // Two weekend blackouts plus one reservation.
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["title"], "n/a");
    assert_eq!(events[2]["title"], "reserved");
}

#[test]
fn test_check_selection_reports_rejections_in_band() {
    let out = check_selection(
        ROOM,
        RESERVATIONS,
        "2026-08-17",
        26,
        "2026-08-27",
        "2026-08-28",
        Some("ada".to_owned()),
    )
    .unwrap();
    let verdict: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(verdict["ok"], false);
    assert!(verdict["reason"].as_str().unwrap().contains("reserved"));
}

#[test]
fn test_check_selection_quotes_valid_intervals() {
    let out = check_selection(
        ROOM,
        "",
        "2026-08-17",
        26,
        "2026-08-24",
        "2026-08-25",
        Some("ada".to_owned()),
    )
    .unwrap();
    let verdict: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(verdict["ok"], true);
    assert_eq!(verdict["days"], 2);
    assert_eq!(verdict["total"], 200);
}

#[test]
fn test_anonymous_checks_are_refused() {
    let out = check_selection(ROOM, "", "2026-08-17", 26, "2026-08-24", "2026-08-25", None)
        .unwrap();
    let verdict: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(verdict["ok"], false);
    assert!(verdict["reason"].as_str().unwrap().contains("sign in"));
}

#[test]
fn test_quote_stay_multiplies_inclusive_days() {
    let out = quote_stay(ROOM, "2026-09-10", "2026-09-12").unwrap();
    let quoted: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(quoted["days"], 3);
    assert_eq!(quoted["total"], 300);
}

#[test]
fn test_bad_inputs_surface_as_errors() {
    assert!(rendered_events("{", "", "2026-08-17", 2).is_err());
    assert!(rendered_events(ROOM, "", "not-a-date", 2).is_err());
    assert!(rendered_events(ROOM, "", "2026-08-17", 4_000_000_000).is_err());
    assert!(quote_stay(ROOM, "2026-09-12", "2026-09-10").is_err());
}
