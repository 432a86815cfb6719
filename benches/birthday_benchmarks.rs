//! Performance benchmarks for the birthday window query.
//!
//! Measures `upcoming_birthdays` over directories of different sizes, with
//! birthdays spread across the whole year.

use chrono::NaiveDate;
use contact_assistant::{ContactDirectory, ContactName, ContactRecord, DEFAULT_WINDOW_DAYS};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a directory with `size` contacts, each with one phone and a birthday.
fn create_directory(size: usize) -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    for i in 0..size {
        let name = ContactName::new(format!("Contact{}", i)).unwrap();
        let mut record = ContactRecord::new(name);
        record.add_phone(&format!("{:010}", i)).unwrap();

        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record
            .add_birthday(&format!("{:02}.{:02}.{}", day, month, 1950 + i % 60))
            .unwrap();

        directory.add_record(record);
    }
    directory
}

/// Benchmark the query with the default one-week window.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1_000, 10_000] {
        let directory = create_directory(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &directory, |b, directory| {
            b.iter(|| directory.upcoming_birthdays(black_box(today), DEFAULT_WINDOW_DAYS));
        });
    }

    group.finish();
}

/// Benchmark rendering the whole directory for `all`.
fn bench_render_all(c: &mut Criterion) {
    let directory = create_directory(1_000);
    c.bench_function("render_all_1000", |b| b.iter(|| black_box(&directory).render_all()));
}

criterion_group!(benches, bench_upcoming_birthdays, bench_render_all);
criterion_main!(benches);
