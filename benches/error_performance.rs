// benches/error_performance.rs
//! Benchmarks for error construction and log rendering.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use http_errors::{HttpError, NOT_FOUND, http_error};
use std::io;

// ============================================================================
// Construction
// ============================================================================

fn bench_error_creation_static(c: &mut Criterion) {
    c.bench_function("create_static_messages", |b| {
        b.iter(|| black_box(HttpError::unauthorized("pub", "pri", None)))
    });
}

fn bench_error_creation_prefixed(c: &mut Criterion) {
    c.bench_function("create_prefixed_public", |b| {
        b.iter(|| black_box(HttpError::not_found("user", "no row for id 7", None)))
    });
}

fn bench_error_creation_with_cause(c: &mut Criterion) {
    c.bench_function("create_with_io_cause", |b| {
        b.iter(|| {
            let io_err = io::Error::new(io::ErrorKind::TimedOut, "upstream timed out");
            black_box(HttpError::internal_server_error(
                "profile",
                "avatar fetch",
                Some(io_err.into()),
            ))
        })
    });
}

fn bench_error_creation_all_factories(c: &mut Criterion) {
    let mut group = c.benchmark_group("factories");

    group.bench_function("bind_error", |b| b.iter(|| black_box(HttpError::bind_error(None))));
    group.bench_function("bad_access_token", |b| {
        b.iter(|| black_box(HttpError::unauthorized_bad_access_token(None)))
    });
    group.bench_function("login_failed", |b| {
        b.iter(|| black_box(HttpError::login_failed("pri", None)))
    });
    group.bench_function("agent_expired", |b| {
        b.iter(|| black_box(HttpError::agent_expired("pri", None)))
    });
    group.bench_function("macro_formatted", |b| {
        b.iter(|| black_box(http_error!(NOT_FOUND, "Missing", "no row for id {}", 7)))
    });

    group.finish();
}

// ============================================================================
// Rendering
// ============================================================================

fn bench_display(c: &mut Criterion) {
    let err = HttpError::conflict("Name taken", "users_name_key", None);
    c.bench_function("display_public", |b| b.iter(|| black_box(err.to_string())));
}

fn bench_describe_by_private_len(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");

    for len in [16usize, 512, 4096] {
        let err = HttpError::invalid_parameter("bad", "x".repeat(len), None);
        group.bench_with_input(BenchmarkId::from_parameter(len), &err, |b, err| {
            b.iter(|| black_box(err.describe()))
        });
    }

    group.finish();
}

fn bench_write_to_reused_buffer(c: &mut Criterion) {
    let err = HttpError::login_expired(
        "session aged out",
        Some(io::Error::other("jwt exp").into()),
    );
    let mut buffer = String::with_capacity(256);
    c.bench_function("write_to_reused_buffer", |b| {
        b.iter(|| {
            buffer.clear();
            err.internal_log().write_to(&mut buffer).unwrap();
            black_box(buffer.len())
        })
    });
}

criterion_group!(
    creation_benches,
    bench_error_creation_static,
    bench_error_creation_prefixed,
    bench_error_creation_with_cause,
    bench_error_creation_all_factories,
);

criterion_group!(
    logging_benches,
    bench_display,
    bench_describe_by_private_len,
    bench_write_to_reused_buffer,
);

criterion_main!(creation_benches, logging_benches);
