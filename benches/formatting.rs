use chrono::Local;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timberline::fmt::{DEFAULT_DATETIME_FORMAT, prefix_lines, red, strip_ansi, timestamp};
use timberline::{BufferStream, CategoryFilter, Logger};

fn bench_timestamp(c: &mut Criterion) {
    let now = Local::now();
    c.bench_function("timestamp", |b| {
        b.iter(|| timestamp(black_box(&now), DEFAULT_DATETIME_FORMAT, "INFO"));
    });
}

fn bench_prefix_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_lines");

    group.bench_function("single", |b| {
        b.iter(|| prefix_lines("[2025-01-15 14:30:00 INFO]", black_box("Application started")));
    });

    let multi = "line one\nline two\nline three\nline four\nline five";
    group.bench_function("multi", |b| {
        b.iter(|| prefix_lines("[2025-01-15 14:30:00 INFO]", black_box(multi)));
    });

    group.finish();
}

fn bench_strip_ansi(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_ansi");

    group.bench_function("plain", |b| {
        b.iter(|| strip_ansi(black_box("nothing to strip in this message")));
    });

    let colored = red("connection failed: \x1b[1mtimeout\x1b[0m after 30s");
    group.bench_function("colored", |b| {
        b.iter(|| strip_ansi(black_box(&colored)));
    });

    group.finish();
}

fn bench_logger(c: &mut Criterion) {
    let stdout = BufferStream::new();
    let stderr = BufferStream::new();
    let logger = Logger::builder()
        .stdout_categories(CategoryFilter::Unrestricted)
        .stderr_categories(CategoryFilter::Unrestricted)
        .stdout(stdout.clone())
        .stderr(stderr.clone())
        .build();

    let mut group = c.benchmark_group("Logger");

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Application started"));
            stdout.clear();
        });
    });

    group.bench_function("error", |b| {
        b.iter(|| {
            logger.error(black_box("Connection failed"));
            stderr.clear();
        });
    });

    group.bench_function("filtered", |b| {
        logger.load_settings(
            &timberline::Settings::new().stdout_categories(CategoryFilter::none()),
        );
        b.iter(|| logger.debug(black_box("dropped")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_timestamp,
    bench_prefix_lines,
    bench_strip_ansi,
    bench_logger,
);
criterion_main!(benches);
