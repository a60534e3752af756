//! Performance benchmarks for the sitter charge engine.
//!
//! Covers the pure charge calculation for representative shifts, a batch of
//! a month of nightly shifts, and the full HTTP path through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate, NaiveDateTime};
use chrono_tz::US::Eastern;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use sitter_engine::api::{AppState, create_router};
use sitter_engine::calculation::{calculate_charge, calculate_charge_breakdown};
use sitter_engine::config::ConfigLoader;
use sitter_engine::models::ShiftInterval;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/service.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn local(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

/// Creates an evening shift starting on `date` that runs until `end_hour`
/// the following morning (or the same evening when `end_hour` is after 17).
fn create_shift(date: NaiveDate, start_hour: u32, end_hour: u32) -> ShiftInterval<chrono_tz::Tz> {
    let end_date = if end_hour <= 4 {
        date + Duration::days(1)
    } else {
        date
    };
    ShiftInterval::from_local(
        &Eastern,
        local(date, start_hour, 0),
        local(end_date, end_hour, 30),
    )
    .expect("Failed to create shift")
}

/// Benchmark: Single shift calculation across the three shapes of a night.
fn bench_single_shift(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    let shifts = [
        ("evening_only", create_shift(date, 18, 21)),
        ("across_midnight", create_shift(date, 19, 2)),
        ("full_night", create_shift(date, 17, 3)),
    ];

    let mut group = c.benchmark_group("single_shift");
    for (name, shift) in &shifts {
        group.bench_with_input(BenchmarkId::new("total", name), shift, |b, shift| {
            b.iter(|| black_box(calculate_charge(Some(black_box(shift)))))
        });
        group.bench_with_input(BenchmarkId::new("breakdown", name), shift, |b, shift| {
            b.iter(|| black_box(calculate_charge_breakdown(Some(black_box(shift)))))
        });
    }
    group.finish();
}

/// Benchmark: A month of nightly shifts, including a daylight-saving change.
fn bench_month_of_shifts(c: &mut Criterion) {
    let first = NaiveDate::from_ymd_opt(2015, 2, 20).unwrap();
    let shifts: Vec<_> = (0..30)
        .map(|day| create_shift(first + Duration::days(day), 18 + (day % 4) as u32, 1))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(shifts.len() as u64));
    group.bench_function("month_30_shifts", |b| {
        b.iter(|| {
            let total: u32 = shifts
                .iter()
                .map(|shift| calculate_charge(Some(shift)).unwrap_or(0))
                .sum();
            black_box(total)
        })
    });
    group.finish();
}

/// Benchmark: A charge request through the HTTP router.
fn bench_http_charge(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "start_time": "2015-01-01T18:00:00",
        "end_time": "2015-01-02T03:30:00"
    })
    .to_string();

    c.bench_function("http_charge", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/charge")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_shift,
    bench_month_of_shifts,
    bench_http_charge,
);
criterion_main!(benches);
