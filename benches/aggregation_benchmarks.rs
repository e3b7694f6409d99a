//! Performance benchmarks for the payroll engine.
//!
//! Covers weekly aggregation over growing log volumes and the HTTP weekly
//! summary endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use payroll_engine::api::{create_router, AppState};
use payroll_engine::calculation::aggregate_by_week;
use payroll_engine::config::{ConfigLoader, PayrollConfig};
use payroll_engine::models::{LogId, NewEmployee, NewWorkLog, WorkLogEntry};

use axum::{body::Body, http::Request};
use chrono::{Days, NaiveDate};
use tower::ServiceExt;

/// Creates `count` entries spread over 20 employees and one year.
fn create_entries(count: usize) -> Vec<WorkLogEntry> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).expect("valid date");
    (0..count)
        .map(|i| {
            let date = start + Days::new((i % 365) as u64);
            WorkLogEntry {
                id: LogId::Number(i as i64 + 1),
                employee_id: (i % 20) as i64 + 1,
                employee_name: format!("Employee {:02}", i % 20),
                date: date.format("%Y-%m-%d").to_string(),
                hours: 4.0 + (i % 9) as f64 * 0.5,
                is_paid: i % 3 == 0,
                notes: None,
            }
        })
        .collect()
}

/// Benchmark: aggregation at increasing log volumes.
fn bench_aggregate_by_week(c: &mut Criterion) {
    let rate = Decimal::new(2000, 2);
    let mut group = c.benchmark_group("aggregate_by_week");

    for size in [100usize, 1_000, 10_000] {
        let entries = create_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| black_box(aggregate_by_week(black_box(entries), rate).expect("aggregate")))
        });
    }

    group.finish();
}

/// Benchmark: GET /api/payroll/weekly with 1000 stored logs.
fn bench_weekly_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let loader = ConfigLoader::from_config(PayrollConfig::default()).expect("config");
    let state = AppState::new(loader).expect("state");

    let employee_ids: Vec<i64> = (0..20)
        .map(|i| {
            state
                .store()
                .add_employee(NewEmployee {
                    name: format!("Employee {:02}", i),
                    role: "Staff".to_string(),
                    ..NewEmployee::default()
                })
                .expect("employee")
                .employee
                .id
        })
        .collect();

    for entry in create_entries(1_000) {
        state
            .store()
            .add_work_log(NewWorkLog {
                employee_id: employee_ids[(entry.employee_id - 1) as usize],
                date: entry.date,
                hours: Some(entry.hours),
            })
            .expect("work log");
    }

    let router = create_router(state);

    c.bench_function("weekly_endpoint_1000_logs", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/api/payroll/weekly")
                        .body(Body::empty())
                        .expect("request"),
                )
                .await
                .expect("response");
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_aggregate_by_week, bench_weekly_endpoint);
criterion_main!(benches);
