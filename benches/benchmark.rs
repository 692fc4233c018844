use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_engine::Grid;
use sudoku_engine::solver::{BacktrackingSolver, Solution, Solver};

// Classic Sudoku from the World Puzzle Federation Sudoku Grand Prix,
// 2020 Round 8, Puzzle 2.
const CLASSIC_PUZZLE: &str = "\
    000081000\n\
    002007800\n\
    053000170\n\
    370000000\n\
    600000003\n\
    000000024\n\
    069000230\n\
    005900400\n\
    000650000";

fn solve(puzzle: &Grid) {
    let mut grid = puzzle.clone();
    assert_eq!(Solution::Solved, BacktrackingSolver.solve(&mut grid));
}

fn benchmark_classic(c: &mut Criterion) {
    let puzzle = Grid::parse(CLASSIC_PUZZLE).unwrap();
    c.bench_function("solve classic 9x9", |b| b.iter(|| solve(&puzzle)));
}

fn benchmark_empty(c: &mut Criterion) {
    let puzzle = Grid::new(3).unwrap();
    c.bench_function("solve empty 9x9", |b| b.iter(|| solve(&puzzle)));
}

fn benchmark_sixteen(c: &mut Criterion) {
    // a solved 16x16 grid with every fifth cell blanked out
    let mut puzzle = Grid::new(4).unwrap();

    for row in 0..16 {
        for column in 0..16 {
            let value = (row * 4 + row / 4 + column) % 16 + 1;
            puzzle.set_value(row, column, value).unwrap();
        }
    }

    for cell in (0..256).step_by(5) {
        puzzle.set_value(cell / 16, cell % 16, 0).unwrap();
    }

    c.bench_function("solve 16x16", |b| b.iter(|| solve(&puzzle)));
}

criterion_group!(benches, benchmark_classic, benchmark_empty,
    benchmark_sixteen);
criterion_main!(benches);
