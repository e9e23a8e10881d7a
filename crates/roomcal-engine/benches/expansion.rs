use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use roomcal_engine::expander::expand_blackouts;
use roomcal_engine::horizon::Horizon;
use roomcal_engine::interval::DayInterval;
use roomcal_engine::rules::AvailabilityRule;

fn bench_expansion(c: &mut Criterion) {
    let monday = NaiveDate::from_ymd_opt(2026, 8, 17).unwrap();
    let rule = AvailabilityRule::from_names(&["monday", "wednesday", "friday"]).unwrap();
    let spans = rule.closed_spans();
    let horizon = Horizon::weeks_ahead(monday, 26);

    c.bench_function("expand_26_weeks", |b| {
        b.iter(|| expand_blackouts(black_box(&spans), black_box(&horizon), black_box(monday)))
    });

    let events = expand_blackouts(&spans, &horizon, monday);
    let candidate = DayInterval::new(
        NaiveDate::from_ymd_opt(2026, 10, 6).unwrap(),
        NaiveDate::from_ymd_opt(2026, 10, 8).unwrap(),
    )
    .unwrap();

    c.bench_function("overlap_scan_26_weeks", |b| {
        b.iter(|| {
            events
                .iter()
                .any(|event| black_box(&candidate).overlaps(&event.interval))
        })
    });
}

criterion_group!(benches, bench_expansion);
criterion_main!(benches);
