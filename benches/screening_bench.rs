// ABOUTME: Criterion benchmarks for reference lookups, single screenings and batches
// ABOUTME: Compares table and z-score classification and sequential vs parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors

//! Criterion benchmarks for the screening engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_inputs, observation_date, BatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriscreen::engine::ScreeningEngine;
use nutriscreen::growth::{ClassificationMode, ReferenceTableStore, ScreeningConfig};
use nutriscreen::models::{Indicator, Sex};

fn bench_reference_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_lookup");
    let store = ReferenceTableStore::global();

    group.bench_function("table_lookup", |b| {
        b.iter(|| {
            store.lookup(
                black_box(Indicator::WeightForHeight),
                black_box(Sex::Female),
                black_box(87.3),
            )
        });
    });

    group.bench_function("interpolate", |b| {
        b.iter(|| {
            store.interpolate(
                black_box(Indicator::WeightForAge),
                black_box(Sex::Male),
                black_box(27.0),
            )
        });
    });

    group.finish();
}

fn bench_single_screening(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_screening");
    let store = ReferenceTableStore::global();
    let input = generate_inputs(3).remove(2);
    let today = observation_date();

    for mode in [ClassificationMode::Table, ClassificationMode::ZScore] {
        let engine = ScreeningEngine::new(store, ScreeningConfig::default().with_mode(mode));
        group.bench_with_input(BenchmarkId::new("screen", mode.name()), &input, |b, input| {
            b.iter(|| engine.screen_input(black_box(input), today));
        });
    }

    group.finish();
}

fn bench_batch_screening(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_screening");
    group.sample_size(20);
    let engine = ScreeningEngine::global();
    let today = observation_date();

    for size in [BatchSize::Small, BatchSize::Large] {
        let inputs = generate_inputs(size.count());
        group.throughput(Throughput::Elements(size.count() as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", size.count()),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    inputs
                        .iter()
                        .map(|input| engine.screen_input(input, today))
                        .filter(Result::is_ok)
                        .count()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", size.count()),
            &inputs,
            |b, inputs| {
                b.iter(|| engine.screen_batch(black_box(inputs)).summary.screened);
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_reference_lookup,
    bench_single_screening,
    bench_batch_screening
);
criterion_main!(benches);
