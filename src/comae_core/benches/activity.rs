extern crate criterion;
use std::time::Duration;

use comae_core::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pprof::criterion::{Output, PProfProfiler};

fn geometries(n: usize) -> Vec<Geometry> {
    (0..n)
        .map(|idx| {
            let frac = idx as f64 / n as f64;
            Geometry::new(1.0 + 4.0 * frac, 0.5 + 3.0 * frac, 120.0 * frac)
        })
        .collect()
}

pub fn scalar_benchmark(c: &mut Criterion) {
    let mut scalar_group = c.benchmark_group("Scalar");

    scalar_group.bench_function("schleicher_marcus", |b| {
        b.iter(|| schleicher_marcus(black_box(42.0)))
    });
    scalar_group.bench_function("hy", |b| {
        b.iter(|| hy(black_box(12.0), black_box(-3.0), 2.0, 1.5, 30.0).unwrap())
    });
    scalar_group.bench_function("hab", |b| {
        b.iter(|| hab(black_box(12.0), black_box(0.1), -2.0, 2.0, 1.5, 30.0).unwrap())
    });
}

pub fn vector_benchmark(c: &mut Criterion) {
    let mut vector_group = c.benchmark_group("Vector");

    for n in [100, 10_000] {
        let geoms = geometries(n);
        let rh: Vec<f64> = geoms.iter().map(|g| g.rh).collect();
        let delta: Vec<f64> = geoms.iter().map(|g| g.delta).collect();
        let phase: Vec<f64> = geoms.iter().map(|g| g.phase).collect();

        vector_group.bench_with_input(BenchmarkId::new("hy_vec", n), &n, |b, _| {
            b.iter(|| hy_vec(&[12.0], &[-3.0], black_box(&rh), &delta, &phase).unwrap())
        });

        let params = LinearIndexParams::new("bench".into(), 12.0, 0.1, -2.0);
        vector_group.bench_with_input(BenchmarkId::new("apparent_mags", n), &geoms, |b, g| {
            b.iter(|| params.apparent_mags(black_box(g)).unwrap())
        });
    }
}

criterion_group!(name=benches;
                 config = Criterion::default().sample_size(50).measurement_time(Duration::from_secs(5)).with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
                 targets=scalar_benchmark, vector_benchmark);
criterion_main!(benches);
