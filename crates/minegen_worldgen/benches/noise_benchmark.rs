//! Benchmark for noise and fractal sampling.
//!
//! Run with: cargo bench --package minegen_worldgen --bench noise_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use minegen_worldgen::{FractalSampler, NoiseSource, SimplexNoise, WorldSeed};

fn benchmark_single_sample(c: &mut Criterion) {
    let noise = SimplexNoise::new(WorldSeed::new(42));

    c.bench_function("simplex_2d_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.sample_2d(black_box(x), black_box(x * 0.7)))
        });
    });

    c.bench_function("simplex_3d_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.sample_3d(black_box(x), black_box(x * 0.7), black_box(x * 0.3)))
        });
    });
}

fn benchmark_million_samples(c: &mut Criterion) {
    let noise = SimplexNoise::new(WorldSeed::new(42));

    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_simplex_2d_samples", |b| {
        b.iter(|| {
            for i in 0..1_000_000u32 {
                let x = f64::from(i % 1000) * 0.1;
                let y = f64::from(i / 1000) * 0.1;
                black_box(noise.sample_2d(x, y));
            }
        });
    });

    group.finish();
}

fn benchmark_fractal(c: &mut Criterion) {
    let sampler = FractalSampler::new(SimplexNoise::new(WorldSeed::new(42)));

    c.bench_function("fractal_2d_4_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(sampler.sample_2d(black_box(x), black_box(x * 0.7), 4, 0.5, 2.0))
        });
    });

    c.bench_function("fractal_3d_4_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(sampler.sample_3d(black_box(x), black_box(x * 0.7), black_box(x * 0.3), 4, 0.5, 2.0))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_million_samples,
    benchmark_fractal
);
criterion_main!(benches);
