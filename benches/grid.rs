use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use percolate::grid::Percolation;
use percolate::sim::driver::{RunConfig, run_silent};
use std::sync::atomic::AtomicBool;

fn bench_open_full_grid(c: &mut Criterion) {
    c.bench_function("open_full_grid_64", |b| {
        b.iter(|| {
            let mut model = Percolation::new(black_box(64)).unwrap();
            for row in 1..=64 {
                for col in 1..=64 {
                    model.open(row, col).unwrap();
                }
            }
            black_box(model.percolates())
        })
    });
}

fn bench_random_run(c: &mut Criterion) {
    let config = RunConfig {
        size: 64,
        seed: Some(1),
        site_limit: None,
    };
    let cancel = AtomicBool::new(false);
    c.bench_function("random_run_64", |b| {
        b.iter(|| run_silent(black_box(&config), &cancel).unwrap())
    });
}

criterion_group!(benches, bench_open_full_grid, bench_random_run);
criterion_main!(benches);
