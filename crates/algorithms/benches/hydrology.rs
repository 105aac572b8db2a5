//! Benchmarks for drainage analysis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cuenca_algorithms::hydrology::{delineate, find_sinks};
use cuenca_core::TerrainGrid;

/// Bowl-shaped grid draining toward the middle, with small additive
/// noise perturbing the slopes.
fn create_bowl(size: usize) -> TerrainGrid<i64> {
    let center = size as i64 / 2;
    let mut rows = Vec::with_capacity(size);
    for r in 0..size {
        let mut row = Vec::with_capacity(size);
        for c in 0..size {
            let dr = r as i64 - center;
            let dc = c as i64 - center;
            let noise = ((r * 7 + c * 13) % 3) as i64;
            row.push(dr * dr + dc * dc + noise);
        }
        rows.push(row);
    }
    TerrainGrid::from_rows(rows).unwrap()
}

/// Ridge down the middle column: two sinks, one basin per side.
fn create_ridge(size: usize) -> TerrainGrid<i64> {
    let ridge = size as i64 / 2;
    let mut rows = Vec::with_capacity(size);
    for r in 0..size {
        let mut row = Vec::with_capacity(size);
        for c in 0..size {
            let dist = (c as i64 - ridge).abs();
            row.push(100 * (size as i64 - dist) + r as i64);
        }
        rows.push(row);
    }
    TerrainGrid::from_rows(rows).unwrap()
}

fn bench_find_sinks(c: &mut Criterion) {
    let mut group = c.benchmark_group("hydrology/find_sinks");
    for size in [64, 128, 256, 512] {
        let grid = create_bowl(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| find_sinks(black_box(&grid)))
        });
    }
    group.finish();
}

fn bench_delineate_bowl(c: &mut Criterion) {
    let mut group = c.benchmark_group("hydrology/delineate_bowl");
    for size in [64, 128, 256] {
        let grid = create_bowl(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut grid = grid.clone();
                delineate(black_box(&mut grid)).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_delineate_ridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("hydrology/delineate_ridge");
    for size in [64, 128, 256] {
        let grid = create_ridge(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut grid = grid.clone();
                delineate(black_box(&mut grid)).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_find_sinks,
    bench_delineate_bowl,
    bench_delineate_ridge
);
criterion_main!(benches);
