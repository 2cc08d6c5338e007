#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Benchmarks for header lexing and host encoding
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const FIELD_NAMES: [&str; 6] = [
    "",
    "Accept Charset",
    "Accept-Charset",
    "AccepT-EncodinG",
    "CONNECTION",
    "résumé",
];

fn bench_is_token_char(c: &mut Criterion) {
    c.bench_function("is_token_char", |b| {
        b.iter(|| {
            for cp in 0..1024u32 {
                if let Some(ch) = char::from_u32(cp) {
                    black_box(httplex::is_token_char(black_box(ch)));
                }
            }
        });
    });
}

fn bench_valid_header_field_name(c: &mut Criterion) {
    c.bench_function("is_valid_header_field_name", |b| {
        b.iter(|| {
            for name in FIELD_NAMES {
                black_box(httplex::is_valid_header_field_name(black_box(name)));
            }
        });
    });
}

fn bench_contains_token(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_token");
    let values = ["keep-alive", "TE, trailers , Upgrade"];

    group.bench_function("hit_last", |b| {
        b.iter(|| httplex::contains_token(black_box(values), black_box("upgrade")));
    });

    group.bench_function("miss", |b| {
        b.iter(|| httplex::contains_token(black_box(values), black_box("close")));
    });

    group.finish();
}

fn bench_encode_host_port(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_host_port");

    group.bench_function("ascii", |b| {
        b.iter(|| httplex::encode_host_port(black_box("www.google.com:443")).unwrap());
    });

    group.bench_function("ipv6", |b| {
        b.iter(|| httplex::encode_host_port(black_box("[2001:db8::1]:8080")).unwrap());
    });

    group.bench_function("idn", |b| {
        b.iter(|| httplex::encode_host_port(black_box("bücher.de:8080")).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_is_token_char,
    bench_valid_header_field_name,
    bench_contains_token,
    bench_encode_host_port
);
criterion_main!(benches);
