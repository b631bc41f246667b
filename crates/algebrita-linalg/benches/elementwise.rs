use algebrita_linalg::{add, adjoint, scale};
use algebrita_types::Complex;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;

fn sample_matrix(n: usize) -> Array2<Complex> {
    Array2::from_shape_fn((n, n), |(i, j)| Complex::new(i as f64, j as f64))
}

fn bench_elementwise(c: &mut Criterion) {
    let a = sample_matrix(128);
    let b = sample_matrix(128);

    c.bench_function("add 128x128", |bench| {
        bench.iter(|| add(black_box(&a), black_box(&b)))
    });
    c.bench_function("scale 128x128", |bench| {
        bench.iter(|| scale(black_box(Complex::new(0.5, -1.0)), black_box(&a)))
    });
    c.bench_function("adjoint 128x128", |bench| bench.iter(|| adjoint(black_box(&a))));
}

criterion_group!(benches, bench_elementwise);
criterion_main!(benches);
