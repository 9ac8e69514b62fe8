use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vector_space::utils::random_vectors;

fn bench_elementwise(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("elementwise");
    for dim in [3usize, 64, 1024] {
        let vectors = random_vectors(&mut rng, dim, 2);
        let (a, b) = (&vectors[0], &vectors[1]);
        group.bench_with_input(BenchmarkId::new("add", dim), &dim, |bench, _| {
            bench.iter(|| black_box(a).add(black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("dot", dim), &dim, |bench, _| {
            bench.iter(|| black_box(a).dot(black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("scale", dim), &dim, |bench, _| {
            bench.iter(|| black_box(a).scale(black_box(0.5)))
        });
    }
    group.finish();
}

fn bench_cross(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let vectors = random_vectors(&mut rng, 3, 2);
    c.bench_function("cross", |bench| {
        bench.iter(|| black_box(&vectors[0]).cross(black_box(&vectors[1])))
    });
}

criterion_group!(benches, bench_elementwise, bench_cross);
criterion_main!(benches);
