use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dynalg::{DynVector, SquareMatrix};

fn bench_matrix_multiply(c: &mut Criterion) {
    for n in [8_usize, 32, 64] {
        let a = SquareMatrix::from_fn(n, |i, j| ((i + 1) * (j + 2)) as f64).unwrap();
        let b = SquareMatrix::from_fn(n, |i, j| ((i + 2) * (j + 1)) as f64).unwrap();
        c.bench_function(&format!("matrix_multiply_{n}x{n}"), |bench| {
            bench.iter(|| black_box(&a).try_mul(black_box(&b)).unwrap())
        });
    }
}

fn bench_dot(c: &mut Criterion) {
    let v = DynVector::from_fn(4096, |i| (i % 17) as f64).unwrap();
    let w = DynVector::from_fn(4096, |i| (i % 13) as f64).unwrap();
    c.bench_function("dot_4096", |bench| {
        bench.iter(|| black_box(&v).dot(black_box(&w)).unwrap())
    });
}

criterion_group!(benches, bench_matrix_multiply, bench_dot);
criterion_main!(benches);
