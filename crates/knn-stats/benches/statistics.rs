use criterion::*;
use rand::prelude::*;

use knn_stats::{
    hopkins::UniformProbes,
    metric::Euclidean,
    neighbors::{ExtendedNeighborhood, KNearestNeighborhood},
    DenseVector, FlatVec, Hopkins, HopkinsParams, LinearKnn, RandomFactory, Slom,
};

fn random_data(cardinality: usize, dimensionality: usize, seed: u64) -> FlatVec<DenseVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..cardinality)
        .map(|_| DenseVector::new((0..dimensionality).map(|_| rng.gen_range(-10.0..10.0)).collect()))
        .collect();
    FlatVec::new(points).unwrap_or_else(|e| unreachable!("{e}"))
}

fn hopkins(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hopkins");
    group.sample_size(10);

    let random = RandomFactory::seeded(42);
    let params = HopkinsParams::new(50).with_repetitions(16);
    let hopkins = Hopkins::new(params, UniformProbes::<f64>::new()).unwrap_or_else(|e| unreachable!("{e}"));

    for cardinality in [1_000, 10_000] {
        let data = random_data(cardinality, 8, cardinality as u64);
        let knn = LinearKnn::new(&data, Euclidean);

        group.bench_with_input(BenchmarkId::new("run", cardinality), &cardinality, |b, _| {
            b.iter(|| black_box(hopkins.run(&data, &knn, &random)));
        });
        group.bench_with_input(BenchmarkId::new("par_run", cardinality), &cardinality, |b, _| {
            b.iter(|| black_box(hopkins.par_run(&data, &knn, &random)));
        });
    }
    group.finish();
}

fn slom(c: &mut Criterion) {
    let mut group = c.benchmark_group("SLOM");
    group.sample_size(10);

    for cardinality in [1_000, 5_000] {
        let spatial = random_data(cardinality, 2, 0);
        let attributes = random_data(cardinality, 10, 1);
        let knn = LinearKnn::new(&spatial, Euclidean).with_parallelism(true);
        let sets = KNearestNeighborhood::par_new(&spatial, &knn, 10).unwrap_or_else(|e| unreachable!("{e}"));
        let extended = ExtendedNeighborhood::new(&sets, 2).unwrap_or_else(|e| unreachable!("{e}"));
        let slom = Slom::new(Euclidean);

        group.bench_with_input(BenchmarkId::new("run", cardinality), &cardinality, |b, _| {
            b.iter(|| black_box(slom.run(&attributes, &extended)));
        });
        group.bench_with_input(BenchmarkId::new("par_run", cardinality), &cardinality, |b, _| {
            b.iter(|| black_box(slom.par_run(&attributes, &extended)));
        });
    }
    group.finish();
}

criterion_group!(benches, hopkins, slom);
criterion_main!(benches);
