use crate::tables::random_table;
use criterion::{black_box, Criterion};
use perfprof::prelude::*;

const SIZES: [(usize, usize); 3] = [(100, 4), (1000, 8), (10000, 16)];

pub fn bench_transform(c: &mut Criterion) {
    let config = TransformConfig::default()
        .with_ratio(true)
        .with_upper_limit(Some(500.0));

    for (instances, solvers) in SIZES {
        let table = random_table(instances, solvers);
        let id = format!("transform_ratio_{}x{}", instances, solvers);
        c.bench_function(&id, |b| {
            b.iter(|| transform(black_box(&table), black_box(&config)).unwrap())
        });
    }
}

pub fn bench_build_profile(c: &mut Criterion) {
    for (instances, solvers) in SIZES {
        let table = random_table(instances, solvers);
        let processed = transform(&table, &TransformConfig::default()).unwrap();
        let id = format!("build_profile_{}x{}", instances, solvers);
        c.bench_function(&id, |b| {
            b.iter(|| build_profile(black_box(&processed), black_box(table.solver_names())))
        });
    }
}

pub fn bench_ticks(c: &mut Criterion) {
    c.bench_function("ticks_8", |b| {
        b.iter(|| ticks(black_box(1.0), black_box(37.5), black_box(8)))
    });
}
