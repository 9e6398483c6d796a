//! Benchmarks for blockrule classification throughput.
//!
//! Run with: cargo bench
//!
//! This benchmark suite measures:
//! - Per-URL latency for each decision mechanism
//! - Batch throughput on a mixed workload
//! - Scalability with the number of rule patterns

use blockrule::{Classifier, RuleStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

/// A mixed set of URLs covering every mechanism.
const MIXED_URLS: &[&str] = &[
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    "https://example.com/cdn-cgi/challenge-platform/h/b/orchestrate",
    "https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js",
    "https://news.example/static/banner_ad.png",
    "https://news.example/api/ads/list",
    "https://en.wikipedia.org/wiki/Main_Page",
    "https://docs.rs/regex/latest/regex/struct.Regex.html",
    "https://cdn.example.net/assets/app.3f9a1c.js",
];

/// Build a store with `count` synthetic domain patterns.
fn synthetic_store(count: usize) -> RuleStore {
    let patterns: Vec<String> = (0..count)
        .map(|i| format!(r".*adnet{}\.example/.*", i))
        .collect();
    RuleStore::builder("bench")
        .patterns(patterns.as_slice())
        .path_heuristics(&["/ads/", "/tracking"])
        .exception_markers(&["/api/"])
        .build()
}

fn bench_builtin_single(c: &mut Criterion) {
    let classifier = Classifier::new(Arc::new(RuleStore::builtin()));
    let mut group = c.benchmark_group("builtin_single");

    for url in MIXED_URLS {
        let mechanism = classifier.explain(Some(*url)).mechanism;
        group.bench_with_input(BenchmarkId::new(mechanism.as_str(), url), url, |b, url| {
            b.iter(|| black_box(classifier.classify(Some(*black_box(url)))))
        });
    }

    group.finish();
}

fn bench_builtin_batch(c: &mut Criterion) {
    let classifier = Classifier::new(Arc::new(RuleStore::builtin()));
    let mut group = c.benchmark_group("builtin_batch");
    group.throughput(Throughput::Elements(MIXED_URLS.len() as u64));

    group.bench_function("mixed", |b| {
        b.iter(|| {
            for url in MIXED_URLS {
                black_box(classifier.classify(Some(*url)));
            }
        })
    });

    group.finish();
}

fn bench_rule_count_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_count_scaling");

    for count in [10usize, 100, 1000] {
        let classifier = Classifier::new(Arc::new(synthetic_store(count)));
        // Miss: every pattern is tried
        let url = "https://cdn.example.net/assets/app.js";
        group.bench_with_input(BenchmarkId::from_parameter(count), &url, |b, url| {
            b.iter(|| black_box(classifier.classify(Some(*black_box(url)))))
        });
    }

    group.finish();
}

fn bench_store_build(c: &mut Criterion) {
    c.bench_function("store_build_builtin", |b| {
        b.iter(|| black_box(RuleStore::builtin().pattern_count()))
    });
}

criterion_group!(
    benches,
    bench_builtin_single,
    bench_builtin_batch,
    bench_rule_count_scaling,
    bench_store_build
);
criterion_main!(benches);
