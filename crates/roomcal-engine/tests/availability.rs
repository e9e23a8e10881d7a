//! Availability expansion: weekday complement, span folding and blackout
//! layout across the horizon.

use chrono::{NaiveDate, Weekday};
use roomcal_engine::backend::{Room, RoomId};
use roomcal_engine::calendar::RoomCalendar;
use roomcal_engine::events::EventKind;
use roomcal_engine::expander::blackout_events;
use roomcal_engine::horizon::{current_week_start, Horizon, DEFAULT_HORIZON_WEEKS};
use roomcal_engine::rules::{day_rank, AvailabilityRule, RankSpan};

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// Monday of the reference week used throughout.
fn monday() -> NaiveDate {
    d(2026, 8, 17)
}

fn weekday_rule() -> AvailabilityRule {
    AvailabilityRule::from_names(&["mon", "tue", "wed", "thu", "fri"]).unwrap()
}

// ── complement and folding ──────────────────────────────────────────────

#[test]
fn test_every_weekday_is_open_or_covered_by_a_span() {
    let rule = AvailabilityRule::from_names(&["monday", "wednesday", "friday"]).unwrap();
    let spans = rule.closed_spans();
    for day in ALL_DAYS {
        let rank = day_rank(day);
        let covered = spans.iter().any(|s| s.start <= rank && rank <= s.end);
        assert_ne!(rule.is_open(day), covered, "rank {rank}");
    }
}

#[test]
fn test_weekend_closure_folds_into_one_span() {
    assert_eq!(
        weekday_rule().closed_spans(),
        vec![RankSpan { start: 6, end: 7 }]
    );
}

// ── horizon layout ──────────────────────────────────────────────────────

#[test]
fn test_blackouts_cover_every_whole_week() {
    let horizon = Horizon::weeks_ahead(monday(), DEFAULT_HORIZON_WEEKS);
    let events = blackout_events(&weekday_rule(), &horizon, monday());

    assert_eq!(events.len(), 26);
    assert!(events.iter().all(|e| e.kind == EventKind::Blackout));

    // First weekend of the anchor week: Aug 22-23.
    assert_eq!(events[0].interval.start(), d(2026, 8, 22));
    assert_eq!(events[0].interval.end(), d(2026, 8, 23));

    // Last weekend sits 25 weeks later.
    let last = events.last().unwrap();
    assert_eq!(
        last.interval.start(),
        d(2026, 8, 22) + chrono::Duration::days(25 * 7)
    );
}

#[test]
fn test_blackouts_follow_the_anchor_week_not_the_horizon_start() {
    // A horizon starting two weeks past the anchor still expands from the
    // anchor week, so the first blackout lands before the horizon start.
    let horizon = Horizon::weeks_ahead(d(2026, 8, 31), 4);
    let events = blackout_events(&weekday_rule(), &horizon, monday());

    assert_eq!(events.len(), 4);
    assert_eq!(events[0].interval.start(), d(2026, 8, 22));
    assert!(events[0].interval.start() < horizon.start());
}

#[test]
fn test_week_start_can_differ_across_timezones() {
    // Sunday 22:00 UTC is already Monday in Auckland.
    let now = d(2026, 8, 23).and_hms_opt(22, 0, 0).unwrap().and_utc();
    assert_eq!(current_week_start(now, chrono_tz::UTC), d(2026, 8, 17));
    assert_eq!(
        current_week_start(now, chrono_tz::Pacific::Auckland),
        d(2026, 8, 24)
    );
}

// ── rendering ───────────────────────────────────────────────────────────

#[test]
fn test_rendered_blackouts_carry_the_na_title() {
    let room = Room {
        id: RoomId::new("room-7"),
        name: "Boardroom".to_owned(),
        price_per_day: 100,
        available_days: vec!["monday".to_owned(), "tuesday".to_owned()],
    };
    let calendar =
        RoomCalendar::new(&room, Horizon::weeks_ahead(monday(), 2), monday()).unwrap();

    let rendered: Vec<_> = calendar
        .visible_events()
        .iter()
        .map(|e| e.render_utc())
        .collect();

    assert_eq!(rendered.len(), 2);
    assert!(rendered.iter().all(|r| r.title == "n/a"));

    // Wed Aug 19 .. Sun Aug 23, rendered up to a second before midnight.
    assert_eq!(rendered[0].start.to_rfc3339(), "2026-08-19T00:00:00+00:00");
    assert_eq!(rendered[0].end.to_rfc3339(), "2026-08-23T23:59:59+00:00");
}
