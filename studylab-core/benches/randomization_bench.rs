//! Criterion benchmarks for the randomization hot paths.
//!
//! Benchmarks:
//! 1. Sampler construction (sort + prefix sums) across group counts
//! 2. Single sample() draws (u32 draw, digit mapping, binary search)
//! 3. Fisher–Yates shuffle across sequence lengths
//! 4. The raw draw-to-target digit mapping

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;

use studylab_core::entropy;
use studylab_core::sampler::{target_from_draw, WeightedGroupSampler};
use studylab_core::shuffle::secure_shuffle;

fn make_weights(n: usize) -> Vec<Decimal> {
    (1..=n).map(|i| Decimal::new(i as i64, 4)).collect()
}

fn bench_sampler_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler_construction");
    for n in [4usize, 64, 1024] {
        let weights = make_weights(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &weights, |b, weights| {
            b.iter(|| WeightedGroupSampler::from_weights(black_box(weights)).unwrap());
        });
    }
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for n in [4usize, 64, 1024] {
        let sampler = WeightedGroupSampler::from_weights(&make_weights(n)).unwrap();
        let mut rng = entropy::seeded(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &sampler, |b, sampler| {
            b.iter(|| black_box(sampler.sample(&mut rng)));
        });
    }
    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("secure_shuffle");
    for n in [8usize, 128, 2048] {
        let items: Vec<u64> = (0..n as u64).collect();
        let mut rng = entropy::seeded(7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let mut copy = items.clone();
                secure_shuffle(&mut copy, &mut rng);
                black_box(copy)
            });
        });
    }
    group.finish();
}

fn bench_target_from_draw(c: &mut Criterion) {
    let mut rng = entropy::seeded(1);
    let draws: Vec<u32> = (0..1024).map(|_| rand::RngCore::next_u32(&mut rng)).collect();
    c.bench_function("target_from_draw", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % draws.len();
            black_box(target_from_draw(black_box(draws[i])))
        });
    });
}

criterion_group!(
    benches,
    bench_sampler_construction,
    bench_sample,
    bench_shuffle,
    bench_target_from_draw
);
criterion_main!(benches);
