//! Benchmarks for the present packing solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use presents::geometry::all_orientations;
use presents::{parse_input, solver, PuzzleInput};

/// The worked example from the puzzle statement.
const EXAMPLE: &str = "\
0:
###
##.
##.

1:
###
##.
.##

2:
.##
###
##.

3:
##.
###
##.

4:
###
#..
###

5:
###
.#.
###

4x4: 0 0 0 0 2 0
12x5: 1 0 1 0 2 2
12x5: 1 0 1 0 3 2
";

fn example_puzzle() -> PuzzleInput {
    parse_input(EXAMPLE).expect("example input parses")
}

/// Benchmark the small 4x4 region from the worked example.
fn bench_solve_small(c: &mut Criterion) {
    let puzzle = example_puzzle();
    let region = &puzzle.regions[0];

    c.bench_function("solve_4x4", |b| {
        b.iter(|| solver::is_feasible(black_box(&puzzle.catalog), black_box(region)))
    });
}

/// Benchmark the infeasible 12x5 region, which exhausts its search space.
fn bench_solve_exhaustive(c: &mut Criterion) {
    let puzzle = example_puzzle();
    let region = &puzzle.regions[2];

    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);
    group.bench_function("solve_12x5_infeasible", |b| {
        b.iter(|| solver::is_feasible(black_box(&puzzle.catalog), black_box(region)))
    });
    group.finish();
}

/// Benchmark computing all orientations for a single shape.
fn bench_orientations(c: &mut Criterion) {
    let puzzle = example_puzzle();
    let cells = puzzle.catalog.cells(0).to_vec();

    c.bench_function("all_orientations", |b| {
        b.iter(|| all_orientations(black_box(&cells)))
    });
}

criterion_group!(
    benches,
    bench_solve_small,
    bench_solve_exhaustive,
    bench_orientations
);
criterion_main!(benches);
