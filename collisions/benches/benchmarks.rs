use collisions::{detect_collisions, detect_collisions_with, Proximity};
use common::shapes::{Circle, Rectangle};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn random_blobs(count: usize) -> Vec<Circle> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| Circle::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0), 5.0))
        .collect()
}

fn detect_benchmark(c: &mut Criterion) {
    let blobs = random_blobs(1000);
    let universe = Rectangle::from_size(800.0, 600.0);

    c.bench_function("detect_collisions_1000", |b| {
        b.iter(|| detect_collisions(black_box(&blobs), &universe))
    });
}

fn detect_sum_of_radii_benchmark(c: &mut Criterion) {
    let blobs = random_blobs(1000);
    let universe = Rectangle::from_size(800.0, 600.0);

    c.bench_function("detect_collisions_sum_of_radii_1000", |b| {
        b.iter(|| detect_collisions_with(black_box(&blobs), &universe, Proximity::SumOfRadii))
    });
}

criterion_group!(
    collisions_benchmarks,
    detect_benchmark,
    detect_sum_of_radii_benchmark
);
criterion_main!(collisions_benchmarks);
