//! Benchmarks for the tile-fitting solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tilefit::geometry::{all_orientations, Footprint};
use tilefit::grid::Board;
use tilefit::pieces::PieceCatalog;
use tilefit::pruning::Pruner;
use tilefit::solver::{solve, Collector, SearchLimits};

/// Benchmark a capped search on the open default board.
fn bench_solve_capped(c: &mut Criterion) {
    let catalog = PieceCatalog::built_in();
    let pruner = Pruner::default();

    c.bench_function("solve_capped", |b| {
        b.iter(|| {
            let mut sink = Collector::new();
            solve(
                black_box(&catalog),
                Board::default_template(),
                &pruner,
                SearchLimits::capped(100_000),
                &mut sink,
            )
        })
    });
}

/// Benchmark finding the first solution only.
fn bench_first_solution(c: &mut Criterion) {
    let catalog = PieceCatalog::built_in();
    let pruner = Pruner::default();
    let limits = SearchLimits {
        max_moves: None,
        max_solutions: Some(1),
    };

    c.bench_function("first_solution", |b| {
        b.iter(|| {
            let mut sink = Collector::new();
            solve(
                black_box(&catalog),
                Board::default_template(),
                &pruner,
                limits,
                &mut sink,
            )
        })
    });
}

/// Benchmark the coarse occupancy scan.
fn bench_free_spaces(c: &mut Criterion) {
    let board = Board::default_template();

    c.bench_function("free_spaces", |b| {
        b.iter(|| black_box(&board).free_spaces())
    });
}

/// Benchmark one full dead-end check.
fn bench_prune_scan(c: &mut Criterion) {
    let board = Board::default_template();
    let free = board.free_spaces();
    let pruner = Pruner::exhaustive();

    c.bench_function("prune_scan", |b| {
        b.iter(|| pruner.is_dead(black_box(&board), black_box(&free)))
    });
}

/// Benchmark orientation enumeration for an asymmetric footprint.
fn bench_orientations(c: &mut Criterion) {
    let base = Footprint::from_rows(vec![vec![1, 0], vec![1, 0], vec![1, 1]]).unwrap();

    c.bench_function("all_orientations", |b| {
        b.iter(|| all_orientations(black_box(&base)))
    });
}

criterion_group!(
    benches,
    bench_solve_capped,
    bench_first_solution,
    bench_free_spaces,
    bench_prune_scan,
    bench_orientations
);
criterion_main!(benches);
