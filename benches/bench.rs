//! Criterion benchmarks for expansion sets.
//!
//! Covers:
//! - Building sets from producer output
//! - Cursor traversal and random access
//! - Handle cloning
//! - Description rendering

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eset::expansion::{ExpansionSet, ExpansionSetBuilder};
use std::hint::black_box;

/// Generate producer output of `count` terms with descending weights.
fn generate_terms(count: usize) -> Vec<(String, f64)> {
    let words = [
        "search",
        "engine",
        "index",
        "query",
        "document",
        "term",
        "phrase",
        "relevance",
        "stemming",
        "ranking",
    ];
    (0..count)
        .map(|i| {
            let word = words[i % words.len()];
            (format!("{word}{i}"), (count - i) as f64 / count as f64)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in [10, 100, 1000] {
        let terms = generate_terms(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &terms, |b, terms| {
            b.iter(|| {
                ExpansionSetBuilder::with_capacity(terms.len())
                    .extend(terms.iter().cloned())
                    .bound(terms.len() * 2)
                    .build()
            })
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let terms = generate_terms(1000);
    let set = ExpansionSet::from_sorted(terms, 2000);

    let mut group = c.benchmark_group("traversal");
    group.throughput(Throughput::Elements(set.size() as u64));

    group.bench_function("cursor_forward", |b| {
        b.iter(|| {
            let mut total = 0.0;
            let mut cursor = set.begin();
            let end = set.end();
            while cursor != end {
                total += cursor.weight();
                cursor.advance();
            }
            black_box(total)
        })
    });

    group.bench_function("iter_forward", |b| {
        b.iter(|| black_box(set.iter().map(|t| t.weight).sum::<f64>()))
    });

    group.bench_function("random_access", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in (0..set.size()).step_by(7) {
                total += set.at(black_box(i)).weight();
            }
            black_box(total)
        })
    });

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let set = ExpansionSet::from_sorted(generate_terms(1000), 1000);
    c.bench_function("clone_handle", |b| b.iter(|| black_box(set.clone())));
}

fn bench_description(c: &mut Criterion) {
    let set = ExpansionSet::from_sorted(generate_terms(100), 100);
    c.bench_function("description", |b| b.iter(|| black_box(set.description())));
}

criterion_group!(
    benches,
    bench_build,
    bench_traversal,
    bench_clone,
    bench_description
);
criterion_main!(benches);
