//! Benchmarks comparing tagged and bare floating-point arithmetic.
//!
//! The dimension tag is type-level metadata only, so the two pipelines
//! below should compile to the same machine code.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mensura::prelude::*;

fn bench_force_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_pipeline");

    group.bench_function("bare_f64", |b| {
        b.iter(|| {
            let distance = black_box(3.523_f64);
            let elapsed = black_box(2.132_f64);
            let mass = black_box(6.125_f64);
            black_box(mass * (distance / elapsed / black_box(2.0)))
        });
    });

    group.bench_function("tagged_quantity", |b| {
        b.iter(|| {
            let distance = Quantity::<Length>::new(black_box(3.523));
            let elapsed = Quantity::<Time>::new(black_box(2.132));
            let mass = Quantity::<Mass>::new(black_box(6.125));
            let halving = Quantity::<Time>::new(black_box(2.0));
            black_box(mass * (distance / elapsed / halving))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_force_pipeline);
criterion_main!(benches);
