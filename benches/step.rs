use criterion::{criterion_group, criterion_main, Criterion};
use warplife::{BoundaryMode, Life, NodeLife};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.5;

fn bench_torus_step_64(c: &mut Criterion) {
    let mut life = NodeLife::random(6, BoundaryMode::Torus, Some(SEED), FILL_RATE);
    c.bench_function("torus_step_64", |b| b.iter(|| life.step()));
}

fn bench_open_step_64(c: &mut Criterion) {
    let mut life = NodeLife::random(6, BoundaryMode::Open, Some(SEED), FILL_RATE);
    c.bench_function("open_step_64", |b| b.iter(|| life.step()));
}

fn bench_warp_step_64(c: &mut Criterion) {
    let mut life = NodeLife::random(6, BoundaryMode::Warp, Some(SEED), FILL_RATE);
    c.bench_function("warp_step_64", |b| b.iter(|| life.step()));
}

criterion_group!(
    benches,
    bench_torus_step_64,
    bench_open_step_64,
    bench_warp_step_64,
);
criterion_main!(benches);
