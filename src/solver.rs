//! This module contains the logic for solving Sudoku grids.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.
//! The backtracking solver works in two phases: it first assigns all naked
//! singles, i.e. empty cells with exactly one candidate left, and only then
//! falls back to a depth-first search over the most constrained cells.

use crate::Grid;

use log::debug;

/// The outcome of a solve attempt. An unsolvable grid is a normal result of
/// solving, not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the grid was brought into a complete state. Note that
    /// the solver commits the first solution found by its deterministic
    /// search order, which is not necessarily the only one.
    Solved,

    /// Indicates that the search space was exhausted without reaching a
    /// complete state. The grid retains all assignments made by naked-single
    /// propagation, while every assignment tried by the search has been
    /// undone.
    Impossible
}

/// A trait for structs which have the ability to solve Sudoku grids. Solvers
/// work on the grid in place: on success the grid holds the solution, and
/// implementations document what state they leave behind on failure.
pub trait Solver {

    /// Solves, or attempts to solve, the provided grid.
    fn solve(&self, grid: &mut Grid) -> Solution;
}

/// A [Solver] that combines constraint propagation with backtracking. Since
/// propagation alone solves easy grids outright and prunes the branching
/// factor everywhere else, this solver handles any grid size this crate
/// supports in reasonable time, although its worst-case runtime remains
/// exponential.
///
/// The solver is stateless; all bookkeeping lives on the call stack.
/// Recursion depth is bounded by the number of empty cells remaining after
/// propagation.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Assigns all naked singles in the given grid: as long as the most
    /// constrained cell has exactly one candidate, that candidate is written
    /// into the cell. Assignments made by this phase are never undone. The
    /// operation is idempotent; running it on its own output changes
    /// nothing.
    ///
    /// Returns the number of cells assigned.
    pub fn propagate_naked_singles(grid: &mut Grid) -> usize {
        let mut assigned = 0;

        while let Some((row, column)) = grid.most_constrained_cell() {
            let candidates = grid.candidates(row, column).unwrap();

            if candidates.len() != 1 {
                break;
            }

            let value = candidates.iter().next().unwrap();
            grid.set_value(row, column, value).unwrap();
            assigned += 1;
        }

        assigned
    }

    fn search(grid: &mut Grid, nodes: &mut u64) -> bool {
        *nodes += 1;

        let (row, column) = match grid.most_constrained_cell() {
            Some(coordinates) => coordinates,
            None => return grid.is_consistent()
        };

        // snapshot: assigning values below mutates the live candidate sets
        let candidates = grid.candidates(row, column).unwrap();

        for value in candidates.iter() {
            grid.set_value(row, column, value).unwrap();

            if grid.is_complete() {
                return true;
            }

            if BacktrackingSolver::search(grid, nodes) {
                return true;
            }

            grid.set_value(row, column, 0).unwrap();
        }

        false
    }
}

impl Solver for BacktrackingSolver {

    /// Solves the given grid in place. Naked singles are propagated first;
    /// if the grid is not complete afterwards, a backtracking search over
    /// the most constrained cells finishes the job. On failure, the grid
    /// holds the propagation results and zeros everywhere the search could
    /// not commit, i.e. it returns to the state it was in when the search
    /// began.
    fn solve(&self, grid: &mut Grid) -> Solution {
        let assigned = BacktrackingSolver::propagate_naked_singles(grid);
        debug!("propagation assigned {} naked singles", assigned);

        if grid.is_complete() {
            return Solution::Solved;
        }

        let mut nodes = 0u64;
        let solved = BacktrackingSolver::search(grid, &mut nodes);
        debug!("backtracking search visited {} nodes", nodes);

        if solved {
            Solution::Solved
        }
        else {
            Solution::Impossible
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn solve_and_expect(puzzle: &str, solution: &str) {
        let mut grid = Grid::parse(puzzle).unwrap();

        assert_eq!(Solution::Solved, BacktrackingSolver.solve(&mut grid));
        assert!(grid.is_complete());
        assert_eq!(solution, grid.to_parseable_string());
    }

    #[test]
    fn propagation_alone_solves_near_complete_grid() {
        solve_and_expect("0234\n3412\n2143\n4320",
            "1234\n3412\n2143\n4321");
    }

    #[test]
    fn propagation_is_idempotent() {
        let mut grid = Grid::parse("0204\n3412\n2143\n4321").unwrap();

        let assigned = BacktrackingSolver::propagate_naked_singles(&mut grid);
        assert!(assigned > 0);

        let after_first = grid.clone();
        let assigned_again =
            BacktrackingSolver::propagate_naked_singles(&mut grid);

        assert_eq!(0, assigned_again);
        assert_eq!(after_first, grid);
    }

    #[test]
    fn propagation_stops_at_branching_cell() {
        let mut grid = Grid::new(2).unwrap();

        // nothing is forced on an empty grid
        assert_eq!(0, BacktrackingSolver::propagate_naked_singles(&mut grid));
        assert_eq!(16, grid.empty_count());
    }

    // Classic Sudoku from the World Puzzle Federation Sudoku Grand Prix,
    // 2020 Round 8, Puzzle 2.
    // https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf

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

    const CLASSIC_SOLUTION: &str = "\
        746281359\n\
        912537846\n\
        853496172\n\
        374125698\n\
        628749513\n\
        591368724\n\
        169874235\n\
        285913467\n\
        437652981";

    #[test]
    fn backtracking_solves_classic_sudoku() {
        solve_and_expect(CLASSIC_PUZZLE, CLASSIC_SOLUTION);
    }

    #[test]
    fn backtracking_solves_empty_grid() {
        let mut grid = Grid::new(3).unwrap();

        assert_eq!(Solution::Solved, BacktrackingSolver.solve(&mut grid));
        assert!(grid.is_complete());
    }

    #[test]
    fn solved_grid_satisfies_every_group() {
        let mut grid = Grid::parse(CLASSIC_PUZZLE).unwrap();
        BacktrackingSolver.solve(&mut grid);

        for group in grid.groups() {
            assert_eq!(grid.size(), group.assigned().len());
        }
    }

    #[test]
    fn candidate_less_cell_is_reported_impossible() {
        // cell (0, 0) is empty but all four values are taken by its groups
        let before = Grid::parse("0234\n1000\n3000\n4000").unwrap();
        let mut grid = before.clone();

        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&mut grid));

        // no assignment could commit, so the grid is untouched
        assert_eq!(before, grid);
    }

    #[test]
    fn full_but_inconsistent_grid_is_impossible() {
        let mut grid = Grid::parse("1234\n3412\n2143\n4321").unwrap();
        grid.set_value(3, 3, 2).unwrap();

        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&mut grid));
    }

    fn pattern_value(row: usize, column: usize, box_len: usize) -> usize {
        let size = box_len * box_len;
        (row * box_len + row / box_len + column) % size + 1
    }

    #[test]
    fn backtracking_solves_sixteen_by_sixteen() {
        let mut grid = Grid::new(4).unwrap();

        for row in 0..16 {
            for column in 0..16 {
                grid.set_value(row, column, pattern_value(row, column, 4))
                    .unwrap();
            }
        }

        assert!(grid.is_complete());

        // blank out every fifth cell and solve the rest back in
        for cell in (0..256).step_by(5) {
            grid.set_value(cell / 16, cell % 16, 0).unwrap();
        }

        assert_eq!(Solution::Solved, BacktrackingSolver.solve(&mut grid));
        assert!(grid.is_complete());
    }
}
