// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use lingua_lens::catalog::Catalog;
use lingua_lens::merge;
use lingua_lens::overrides::OverrideMap;
use std::hint::black_box;

fn synthetic_catalog(keys: usize) -> Catalog {
    Catalog::from_entries(
        (0..keys)
            .map(|n| (format!("section.group.key_{n}"), format!("value {n}")))
            .collect(),
    )
}

fn synthetic_layer(keys: usize, step: usize) -> OverrideMap {
    (0..keys)
        .step_by(step)
        .map(|n| (format!("section.group.key_{n}"), format!("override {n}")))
        .collect()
}

fn catalog_merge_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_merge");

    let base = synthetic_catalog(500);
    let global = synthetic_layer(500, 5);
    let local = synthetic_layer(500, 7);

    group.bench_function("resolve_500_keys_two_layers", |b| {
        b.iter(|| {
            let resolved = merge::resolve(black_box(&base), &[&global, &local]);
            black_box(resolved);
        });
    });

    group.bench_function("resolve_500_keys_no_layers", |b| {
        b.iter(|| {
            let resolved = merge::resolve(black_box(&base), &[]);
            black_box(resolved);
        });
    });

    group.finish();
}

criterion_group!(benches, catalog_merge_benchmark);
criterion_main!(benches);
