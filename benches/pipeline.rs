//! Pipeline benchmark: events → windows → features → training file content.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hpc_failure_predict::config::StrategyConfig;
use hpc_failure_predict::{LogEvent, Strategy, WindowStrategy};

const SEVERITIES: [&str; 4] = ["INFO", "WARN", "ERROR", "FATAL"];

/// One event every ten minutes for a month, with a fatal event roughly daily.
fn make_dummy_events(n: usize) -> Vec<LogEvent> {
    let base = Utc.with_ymd_and_hms(2009, 8, 31, 1, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let severity = if i % 150 == 149 { SEVERITIES[3] } else { SEVERITIES[i % 3] };
            LogEvent::new(base + Duration::minutes(10 * i as i64))
                .with_field("SEVERITY", severity)
                .with_field("COMPONENT", "KERNEL")
        })
        .collect()
}

fn bench_segmentation(c: &mut Criterion) {
    let strategy = Strategy::new(StrategyConfig::default()).unwrap();
    let events = make_dummy_events(4320);

    c.bench_function("segment_month_of_events", |b| {
        b.iter(|| black_box(strategy.segment(black_box(&events)).unwrap()))
    });
}

fn bench_extraction(c: &mut Criterion) {
    let strategy = Strategy::new(StrategyConfig::default()).unwrap();
    let events = make_dummy_events(4320);
    let windows = strategy.segment(&events).unwrap();
    let intervals = strategy.intervals(&windows).unwrap();

    c.bench_function("extract_month_of_windows", |b| {
        b.iter(|| black_box(strategy.extract(black_box(&windows), &intervals).unwrap()))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let strategy = Strategy::new(StrategyConfig::default()).unwrap();
    let events = make_dummy_events(4320);

    c.bench_function("full_pipeline_events_to_training_file", |b| {
        b.iter(|| {
            let examples = strategy.training_examples(black_box(&events)).unwrap();
            black_box(strategy.serialize(&examples).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_segmentation,
    bench_extraction,
    bench_full_pipeline
);
criterion_main!(benches);
