//! Benchmarks for page-range expression parsing.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdfsnap::parse_range;

/// Builds an expression with the given number of comma-separated tokens,
/// alternating singles and short ranges.
fn build_expression(tokens: usize) -> String {
    let mut parts = Vec::with_capacity(tokens);
    for i in 0..tokens {
        let base = (i * 7 % 900) as u32 + 1;
        if i % 2 == 0 {
            parts.push(format!("{}", base));
        } else {
            parts.push(format!("{}-{}", base, base + 3));
        }
    }
    parts.join(",")
}

fn bench_parse_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_range");

    for tokens in [4, 32, 256].iter() {
        let expression = build_expression(*tokens);

        group.bench_function(format!("{}_tokens", tokens), |b| {
            b.iter(|| parse_range(black_box(&expression), black_box(1000)));
        });
    }

    group.finish();
}

fn bench_parse_range_invalid_heavy(c: &mut Criterion) {
    // Mostly garbage tokens; exercises the silent-drop path
    let expression = "abc,0,5-2,9999,x-y,,7,12-14,"
        .repeat(16)
        .trim_end_matches(',')
        .to_string();

    c.bench_function("parse_range_invalid_heavy", |b| {
        b.iter(|| parse_range(black_box(&expression), black_box(100)));
    });
}

fn bench_wide_range(c: &mut Criterion) {
    c.bench_function("parse_range_wide", |b| {
        b.iter(|| parse_range(black_box("1-1000"), black_box(1000)));
    });
}

criterion_group!(
    benches,
    bench_parse_range,
    bench_parse_range_invalid_heavy,
    bench_wide_range,
);
criterion_main!(benches);
