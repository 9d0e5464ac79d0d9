//! Performance benchmarks for timestamp normalization.
//!
//! Covers the three parsing paths, sorting a week of shifts, and the cost of
//! the shared Asia/Seoul formatter against building one per call.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_datetime::datetime::{
    KST, ZonedDateKeyFormatter, compare_date_times, get_today_date_key_in_kst,
    to_date_time_epoch_ms,
};
use shift_datetime::models::{Shift, ShiftStatus};
use shift_datetime::schedule::sort_chronologically;

/// Creates `count` shifts with descending start times in mixed formats.
fn create_shifts(count: usize) -> Vec<Shift> {
    (0..count)
        .rev()
        .map(|i| {
            let day = 1 + (i / 24) % 28;
            let hour = i % 24;
            let start_time = if i % 2 == 0 {
                format!("2026-01-{day:02} {hour:02}:00:00")
            } else {
                format!("2026-01-{day:02}T{hour:02}:00:00+09:00")
            };
            Shift {
                id: format!("shift_{i}"),
                store_id: "store_01".to_string(),
                employee_id: None,
                end_time: start_time.clone(),
                start_time,
                status: ShiftStatus::Scheduled,
            }
        })
        .collect()
}

fn bench_epoch_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("epoch_parsing");
    let inputs = [
        ("naive", "2026-01-15 09:30:00"),
        ("offset", "2026-01-15T09:30:00+09:00"),
        ("fallback", "Thu, 15 Jan 2026 09:30:00 +0000"),
        ("invalid", "not a timestamp"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| to_date_time_epoch_ms(black_box(Some(input))))
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    c.bench_function("compare_naive_vs_offset", |b| {
        b.iter(|| {
            compare_date_times(
                black_box(Some("2026-01-15 09:30:00")),
                black_box(Some("2026-01-15T18:30:00+09:00")),
            )
        })
    });
}

fn bench_sort_shifts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_shifts");
    for count in [14usize, 100, 1000] {
        let shifts = create_shifts(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &shifts, |b, shifts| {
            b.iter(|| {
                let mut shifts = shifts.clone();
                sort_chronologically(&mut shifts);
                shifts
            })
        });
    }
    group.finish();
}

fn bench_kst_today(c: &mut Criterion) {
    let mut group = c.benchmark_group("kst_today");
    group.bench_function("shared_formatter", |b| b.iter(get_today_date_key_in_kst));
    group.bench_function("formatter_per_call", |b| {
        b.iter(|| ZonedDateKeyFormatter::new(black_box(KST)).today())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_epoch_parsing,
    bench_compare,
    bench_sort_shifts,
    bench_kst_today
);
criterion_main!(benches);
