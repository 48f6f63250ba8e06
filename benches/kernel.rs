//! Benchmarks for the elimination kernel and matrix products.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrixcalc::prelude::*;
use matrixcalc::{determinant, inverse, multiply, solve};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 4] = [4, 16, 64, 128];

fn random_matrix(rng: &mut StdRng, n: usize) -> Matrix {
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Matrix::from_vec(n, n, data).unwrap()
}

// n on the diagonal, 1 elsewhere
fn dominant_system(n: usize) -> (Matrix, Matrix) {
    let mut a = Matrix::new(n, n).unwrap();
    a.fill(1.0);
    for i in 0..n {
        a.set(i, i, n as f64);
    }
    let mut b = Matrix::new(n, 1).unwrap();
    b.fill(1.0);
    (a, b)
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let mut rng = StdRng::seed_from_u64(42);

    for size in SIZES.iter() {
        let a = random_matrix(&mut rng, *size);
        let b = random_matrix(&mut rng, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)).unwrap());
        });
    }

    group.finish();
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    for size in SIZES.iter() {
        let (a, _) = dominant_system(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| determinant(black_box(&a)).unwrap());
        });
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for size in SIZES.iter() {
        let (a, b) = dominant_system(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| solve(black_box(&a), black_box(&b)).unwrap());
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    group.sample_size(10);

    // O(n^4): keep sizes small
    for size in [4, 16, 32].iter() {
        let (a, _) = dominant_system(*size);
        let solver = GaussSolver::new();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| solver.inverse(black_box(&a)).unwrap());
        });
    }

    group.finish();
}

fn bench_inverse_free_fn(c: &mut Criterion) {
    let (a, _) = dominant_system(8);
    c.bench_function("inverse_8_default_solver", |bench| {
        bench.iter(|| inverse(black_box(&a)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_multiply,
    bench_determinant,
    bench_solve,
    bench_inverse,
    bench_inverse_free_fn
);
criterion_main!(benches);
