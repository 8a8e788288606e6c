use common::shapes::Rectangle;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::PointQuadtree;
use rand::prelude::*;

fn random_points(count: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| (rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)))
        .collect()
}

fn build_benchmark(c: &mut Criterion) {
    let points = random_points(1000);
    let bounds = Rectangle::from_size(800.0, 600.0);

    c.bench_function("quadtree_build_1000", |b| {
        b.iter(|| PointQuadtree::build(black_box(points.iter()), bounds))
    });
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut quadtree = PointQuadtree::new((400.0, 300.0), Rectangle::from_size(800.0, 600.0));

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| {
            let point = (rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0));
            quadtree.insert(black_box(point));
        })
    });
}

fn chain_benchmark(c: &mut Criterion) {
    // Monotonic input: every point goes into quadrant 4 of the previous one.
    let points: Vec<(f64, f64)> = (0..500).map(|i| (i as f64, i as f64)).collect();
    let bounds = Rectangle::from_size(1000.0, 1000.0);

    c.bench_function("quadtree_build_chain_500", |b| {
        b.iter(|| PointQuadtree::build(black_box(points.iter()), bounds))
    });
}

fn find_in_circle_benchmark(c: &mut Criterion) {
    let points = random_points(1000);
    let quadtree = PointQuadtree::build(points.iter(), Rectangle::from_size(800.0, 600.0))
        .expect("non-empty input");

    c.bench_function("quadtree_find_in_circle", |b| {
        b.iter(|| {
            let mut found = 0usize;
            quadtree.find_in_circle_with(
                black_box(400.0),
                black_box(300.0),
                black_box(40.0),
                |_| found += 1,
            );
            found
        })
    });
}

criterion_group!(
    quadtree_benchmarks,
    build_benchmark,
    insert_benchmark,
    chain_benchmark,
    find_in_circle_benchmark
);
criterion_main!(quadtree_benchmarks);
