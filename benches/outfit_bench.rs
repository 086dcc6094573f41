// ABOUTME: Criterion benchmarks for outfit recommendation
// ABOUTME: Measures single recommendations, traced recommendations, batches, and the table check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the outfit engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ride_outfit::models::{ActivityContext, ActivityType, RiderThermalProfile, WeatherConditions};
use ride_outfit::outfit_engine::{
    check_rule_tables, OutfitAssembler, OutfitEngineConfig, OutfitRequest, RuleTableSet,
};

/// Deterministic spread of requests covering cold, mild, hot, and wet rides
fn generate_requests(count: usize) -> Vec<OutfitRequest> {
    (0..count)
        .map(|index| {
            let temperature = -20.0 + (index % 60) as f64;
            let wind = (index % 35) as f64;
            let precipitation = (index % 8) as f64;
            OutfitRequest {
                weather: WeatherConditions::new(temperature, wind, precipitation),
                activity: ActivityContext::new(ActivityType::ALL[index % 4], 60),
                profile: Some(
                    RiderThermalProfile::default()
                        .with_offset(-1.0)
                        .with_cold_hands(index % 2 == 0)
                        .with_cold_feet(index % 3 == 0),
                ),
            }
        })
        .collect()
}

fn bench_single_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let assembler = OutfitAssembler::with_config(OutfitEngineConfig::default());
    let weather = WeatherConditions::new(6.0, 18.0, 0.5);
    let activity = ActivityContext::new(ActivityType::Tempo, 90);
    let profile = RiderThermalProfile::default().with_cold_hands(true);

    group.bench_function("single", |b| {
        b.iter(|| {
            assembler.recommend(
                black_box(&weather),
                black_box(&activity),
                black_box(Some(&profile)),
            )
        });
    });

    group.bench_function("single_with_trace", |b| {
        b.iter(|| {
            assembler.recommend_with_trace(
                black_box(&weather),
                black_box(&activity),
                black_box(Some(&profile)),
            )
        });
    });

    group.finish();
}

fn bench_batch_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_batch");
    let assembler = OutfitAssembler::with_config(OutfitEngineConfig::default());

    for count in [100_usize, 1_000, 10_000] {
        let requests = generate_requests(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &requests,
            |b, requests| {
                b.iter(|| assembler.recommend_batch(black_box(requests)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &requests,
            |b, requests| {
                b.iter(|| {
                    requests
                        .iter()
                        .map(|request| assembler.recommend_request(black_box(request)))
                        .collect::<Vec<_>>()
                });
            },
        );
    }

    group.finish();
}

fn bench_table_check(c: &mut Criterion) {
    let tables = RuleTableSet::standard();
    c.bench_function("check_rule_tables", |b| {
        b.iter(|| check_rule_tables(black_box(&tables)));
    });
}

criterion_group!(
    benches,
    bench_single_recommendation,
    bench_batch_recommendation,
    bench_table_check,
);
criterion_main!(benches);
