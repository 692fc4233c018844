// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements a Sudoku engine built around constraint propagation.
//! It supports the following key features:
//!
//! * Parsing and printing Sudoku grids of variable box size
//! * Tracking candidate values for every empty cell, kept up to date on every
//! mutation
//! * Checking consistency and completeness of a grid
//! * Solving grids by propagating naked singles and, where that is not
//! enough, backtracking over the most constrained cells
//!
//! The board is a square of side length `box_len²`, divided into `box_len²`
//! boxes of `box_len` by `box_len` cells each. An ordinary Sudoku has a box
//! length of 3; the examples in this introduction use a box length of 2 due
//! to their simpler nature.
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange and persist grids, while the [Display]
//! implementation renders a grid in a clearer manner for humans. An example
//! of how to parse and display a grid is provided below.
//!
//! ```
//! use sudoku_engine::Grid;
//!
//! let grid = Grid::parse("1020\n0300\n0040\n0001").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Candidates and consistency
//!
//! Every mutation of a grid keeps two pieces of derived state up to date: the
//! set of values assigned within each row, column, and box, and the set of
//! candidate values for every empty cell. Both can be queried at any time.
//!
//! ```
//! use sudoku_engine::Grid;
//!
//! let mut grid = Grid::new(2).unwrap();
//! grid.set_value(0, 0, 1).unwrap();
//!
//! // The cell right of the 1 shares its row and box, so 1 is excluded.
//! let candidates = grid.candidates(0, 1).unwrap();
//! assert_eq!(vec![2, 3, 4], candidates.iter().collect::<Vec<_>>());
//! ```
//!
//! # Solving grids
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve Sudoku grids. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which first
//! assigns all naked singles and then performs a depth-first search over the
//! most constrained cells.
//!
//! ```
//! use sudoku_engine::Grid;
//! use sudoku_engine::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let mut grid = Grid::parse("0234\n3412\n2143\n4320").unwrap();
//!
//! assert_eq!(Solution::Solved, BacktrackingSolver.solve(&mut grid));
//! assert_eq!("1234\n3412\n2143\n4321", grid.to_parseable_string());
//! ```
//!
//! Note that the solver returns the first solution found by its
//! deterministic search order. It neither verifies uniqueness nor generates
//! puzzles.

pub mod error;
pub mod solver;
pub mod util;

use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use util::ValueSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The largest grid size (side length) supported by this crate. It is
/// determined by the cell alphabet of the grid code, which encodes values
/// with the digits `'1'` to `'9'` followed by the letters `'A'` to `'Z'`.
pub const MAX_GRID_SIZE: usize = 35;

pub(crate) fn index(row: usize, column: usize, size: usize) -> usize {
    row * size + column
}

/// A single cell of a [Grid]. Besides its value, a cell tracks the set of
/// candidate values that could currently be assigned to it without violating
/// one of its three groups. Cells are created by the grid and can only be
/// mutated through [Grid::set_value], which keeps the candidates of all
/// affected cells up to date.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    row: usize,
    column: usize,
    value: usize,
    candidates: ValueSet,
    groups: [usize; 3]
}

impl Cell {

    fn new(row: usize, column: usize, groups: [usize; 3], size: usize)
            -> Cell {
        Cell {
            row,
            column,
            value: 0,
            candidates: ValueSet::full(size),
            groups
        }
    }

    /// Gets the row (y-coordinate) of this cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the column (x-coordinate) of this cell.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the value of this cell, where 0 represents an empty cell.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Indicates whether this cell is empty, i.e. holds the value 0.
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Gets the set of values that could currently be assigned to this cell
    /// without violating one of its groups. For a filled cell, this set is
    /// empty.
    pub fn candidates(&self) -> ValueSet {
        self.candidates
    }

    /// Gets the number of currently viable values for this cell. This is 0
    /// for a filled cell.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    fn refresh(&mut self, used: ValueSet, size: usize) {
        self.candidates = if self.value != 0 {
            ValueSet::new()
        }
        else {
            ValueSet::full(size) - used
        };
    }
}

/// A group of cells that must contain each value at most once: one row,
/// column, or box of a [Grid]. A group stores the indices of its member cells
/// in the grid's cell array and the set of values currently assigned within
/// it.
///
/// The assigned set is always rebuilt from scratch by a full scan of the
/// member cells, never updated incrementally. Correctness therefore does not
/// depend on the order of mutations: setting a cell back to its previous
/// value restores the exact same derived state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group {
    members: Vec<usize>,
    assigned: ValueSet
}

impl Group {

    fn new(capacity: usize) -> Group {
        Group {
            members: Vec::with_capacity(capacity),
            assigned: ValueSet::new()
        }
    }

    /// Gets the indices of the cells of this group within the grid's cell
    /// array, in creation (row-major) order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Gets the set of values currently assigned within this group.
    pub fn assigned(&self) -> ValueSet {
        self.assigned
    }

    fn rebuild_assigned(&mut self, cells: &[Cell]) {
        let mut assigned = ValueSet::new();

        for &member in &self.members {
            let value = cells[member].value;

            if value != 0 {
                assigned.insert(value);
            }
        }

        self.assigned = assigned;
    }

    /// Indicates whether this group is in a consistent state, i.e. contains
    /// no duplicate value. If there are no empty cells among the given
    /// members, all `size` values must be present; otherwise the number of
    /// distinct assigned values must equal the number of filled cells.
    ///
    /// # Arguments
    ///
    /// * `cells`: The cell array of the grid this group belongs to, as
    /// obtained from [Grid::cells].
    /// * `size`: The size of the grid this group belongs to.
    pub fn is_consistent(&self, cells: &[Cell], size: usize) -> bool {
        let empty = self.members.iter()
            .filter(|&&member| cells[member].value == 0)
            .count();

        self.assigned.len() == size - empty
    }
}

/// A Sudoku grid of variable box size. The grid owns all of its [Cell]s and
/// [Group]s; cells reference their three groups and groups reference their
/// member cells by index.
///
/// A grid of box length `N` has `N²` rows, columns, and boxes of `N²` cells
/// each. After every mutation, the grid guarantees that each group's assigned
/// set matches the nonzero values of its members exactly and that each empty
/// cell's candidate set contains precisely the values not assigned in any of
/// its groups.
///
/// Grids serialize to and from their [parseable code](Grid::parse), so a
/// serialized grid is a plain string.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Grid {
    box_len: usize,
    size: usize,
    cells: Vec<Cell>,
    groups: Vec<Group>
}

fn value_to_char(value: usize) -> char {
    if value < 10 {
        (b'0' + value as u8) as char
    }
    else {
        (b'A' + (value - 10) as u8) as char
    }
}

fn value_from_char(c: char) -> Option<usize> {
    match c {
        '0'..='9' => Some(c as usize - '0' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize + 10),
        _ => None
    }
}

fn exact_sqrt(number: usize) -> Option<usize> {
    let root = (number as f64).sqrt() as usize;

    // the float estimate can be one off for large inputs
    (root.saturating_sub(1)..=root + 1).find(|&r| r * r == number)
}

impl Grid {

    /// Creates a new, empty grid with the given box length. The total width
    /// and height of the grid will be equal to the square of `box_len`.
    ///
    /// # Arguments
    ///
    /// * `box_len`: The side length of one box of the grid. For an ordinary
    /// Sudoku grid, this is 3. Must be greater than 0 and small enough that
    /// the grid size does not exceed [MAX_GRID_SIZE].
    ///
    /// # Errors
    ///
    /// If `box_len` is zero or too large. In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn new(box_len: usize) -> SudokuResult<Grid> {
        if box_len == 0 || box_len * box_len > MAX_GRID_SIZE {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = box_len * box_len;
        let mut groups = Vec::with_capacity(3 * size);

        for _ in 0..(3 * size) {
            groups.push(Group::new(size));
        }

        let mut cells = Vec::with_capacity(size * size);

        for row in 0..size {
            for column in 0..size {
                let box_index =
                    row / box_len * box_len + column / box_len;
                let cell_groups =
                    [row, size + column, 2 * size + box_index];

                for &group in cell_groups.iter() {
                    groups[group].members.push(cells.len());
                }

                cells.push(Cell::new(row, column, cell_groups, size));
            }
        }

        Ok(Grid {
            box_len,
            size,
            cells,
            groups
        })
    }

    /// Creates a grid from the configuration a caller supplied: either a box
    /// length for an empty grid, or a grid code from which the dimensions are
    /// inferred. If both are given, the code wins, since it determines the
    /// dimensions anyway.
    ///
    /// # Errors
    ///
    /// * `SudokuError::MissingConfiguration` if both arguments are `None`.
    /// * Any [SudokuParseError] raised by [Grid::parse], wrapped in
    /// `SudokuError::Parse`, if a code is given.
    /// * `SudokuError::InvalidDimensions` as in [Grid::new], if only a box
    /// length is given.
    pub fn from_options(box_len: Option<usize>, code: Option<&str>)
            -> SudokuResult<Grid> {
        match (box_len, code) {
            (_, Some(code)) => Ok(Grid::parse(code)?),
            (Some(box_len), None) => Grid::new(box_len),
            (None, None) => Err(SudokuError::MissingConfiguration)
        }
    }

    /// Parses a code encoding a grid. The code consists of one line per row,
    /// with one character per cell and no separators. The digits `'0'` to
    /// `'9'` encode the values 0 to 9, where 0 represents an empty cell, and
    /// the letters `'A'`, `'B'`, ... encode the values 10, 11, and so on. The
    /// box length is inferred from the length of the first row, which must be
    /// a perfect square.
    ///
    /// As an example, the code `"1020\n0300\n0040\n0001"` parses to a grid
    /// with a box length of 2 that carries a 1, 2, 3, and 4 on its falling
    /// diagonal.
    ///
    /// ```
    /// use sudoku_engine::Grid;
    ///
    /// let grid = Grid::parse("1020\n0300\n0040\n0001").unwrap();
    ///
    /// assert_eq!(2, grid.box_len());
    /// assert_eq!(2, grid.get_value(0, 2).unwrap());
    /// assert_eq!(0, grid.get_value(1, 0).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<Grid> {
        let lines: Vec<&str> = code.trim().lines().collect();

        if lines.is_empty() || lines[0].is_empty() {
            return Err(SudokuParseError::Empty);
        }

        let row_len = lines[0].chars().count();
        let box_len = exact_sqrt(row_len)
            .ok_or(SudokuParseError::NotASquare)?;
        let mut grid = Grid::new(box_len)
            .map_err(|_| SudokuParseError::UnsupportedDimensions)?;
        let size = grid.size;

        if lines.len() != size {
            return Err(SudokuParseError::WrongRowCount);
        }

        for (row, line) in lines.iter().enumerate() {
            let mut columns = 0;

            for (column, c) in line.chars().enumerate() {
                if column >= size {
                    return Err(SudokuParseError::WrongRowLength);
                }

                let value = value_from_char(c)
                    .ok_or(SudokuParseError::InvalidCharacter(c))?;

                if value > size {
                    return Err(SudokuParseError::InvalidNumber);
                }

                grid.cells[index(row, column, size)].value = value;
                columns += 1;
            }

            if columns != size {
                return Err(SudokuParseError::WrongRowLength);
            }
        }

        grid.recompute_all();
        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_engine::Grid;
    ///
    /// let mut grid = Grid::new(2).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_value(1, 1, 4).unwrap();
    /// grid.set_value(2, 1, 3).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = Grid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut rows = Vec::with_capacity(self.size);

        for row in 0..self.size {
            let mut line = String::with_capacity(self.size);

            for column in 0..self.size {
                let value = self.cells[index(row, column, self.size)].value;
                line.push(value_to_char(value));
            }

            rows.push(line);
        }

        rows.join("\n")
    }

    /// Gets the box length of this grid, i.e. the side length of one of its
    /// boxes. For an ordinary Sudoku grid, this is 3.
    pub fn box_len(&self) -> usize {
        self.box_len
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). This is always the square of [Grid::box_len].
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// row-major order, i.e. left-to-right, top-to-bottom.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets a reference to the slice which holds the groups: first all rows,
    /// then all columns, then all boxes, each in ascending index order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    fn checked_index(&self, row: usize, column: usize) -> SudokuResult<usize> {
        if row >= self.size || column >= self.size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(index(row, column, self.size))
        }
    }

    /// Gets a reference to the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn cell(&self, row: usize, column: usize) -> SudokuResult<&Cell> {
        Ok(&self.cells[self.checked_index(row, column)?])
    }

    /// Gets the value of the cell at the specified position, where 0
    /// represents an empty cell.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are out of bounds. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn get_value(&self, row: usize, column: usize) -> SudokuResult<usize> {
        Ok(self.cell(row, column)?.value)
    }

    /// Gets the set of candidate values of the cell at the specified
    /// position. For a filled cell, this set is empty.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are out of bounds. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn candidates(&self, row: usize, column: usize)
            -> SudokuResult<ValueSet> {
        Ok(self.cell(row, column)?.candidates)
    }

    /// Sets the value of the cell at the specified position, where 0 clears
    /// the cell. If the cell was not empty, the old value will be
    /// overwritten.
    ///
    /// This triggers a full recomputation of the assigned sets of the three
    /// groups the cell belongs to, followed by a refresh of the candidate
    /// sets of every cell sharing any of those groups (including this cell).
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `value`: The value to assign to the specified cell. Must be in the
    /// range `[0, size]`, where 0 clears the cell.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` if either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` if `value` is greater than the grid
    /// size.
    pub fn set_value(&mut self, row: usize, column: usize, value: usize)
            -> SudokuResult<()> {
        let cell_index = self.checked_index(row, column)?;

        if value > self.size {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[cell_index].value = value;
        let groups = self.cells[cell_index].groups;

        for &group in groups.iter() {
            self.recompute_group(group);
        }

        Ok(())
    }

    fn recompute_group(&mut self, group: usize) {
        self.groups[group].rebuild_assigned(&self.cells);

        for i in 0..self.groups[group].members.len() {
            let member = self.groups[group].members[i];
            self.refresh_candidates(member);
        }
    }

    fn refresh_candidates(&mut self, cell_index: usize) {
        let mut used = ValueSet::new();

        for &group in self.cells[cell_index].groups.iter() {
            used |= self.groups[group].assigned;
        }

        let size = self.size;
        self.cells[cell_index].refresh(used, size);
    }

    fn recompute_all(&mut self) {
        for group in 0..self.groups.len() {
            self.groups[group].rebuild_assigned(&self.cells);
        }

        for cell in 0..self.cells.len() {
            self.refresh_candidates(cell);
        }
    }

    /// Counts the empty cells of this grid.
    pub fn empty_count(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Returns the coordinates (row, column) of the empty cell with the
    /// fewest candidate values, or `None` if the grid has no empty cells.
    /// Ties are broken by creation order, i.e. the first such cell in
    /// row-major order wins. This is the minimum-remaining-values heuristic
    /// that drives both propagation and search.
    pub fn most_constrained_cell(&self) -> Option<(usize, usize)> {
        let mut best: Option<&Cell> = None;

        for cell in &self.cells {
            if !cell.is_empty() {
                continue;
            }

            let better = match best {
                Some(best_cell) =>
                    cell.candidate_count() < best_cell.candidate_count(),
                None => true
            };

            if better {
                best = Some(cell);
            }
        }

        best.map(|cell| (cell.row, cell.column))
    }

    /// Indicates whether this grid is in a consistent state. That is the
    /// case if every row, column, and box is [consistent](Group::is_consistent)
    /// and, should an empty cell exist, the most constrained cell has at
    /// least one candidate left. A grid containing an empty cell that cannot
    /// hold any value is inconsistent even though no group shows a duplicate
    /// yet.
    pub fn is_consistent(&self) -> bool {
        let groups_consistent = self.groups.iter()
            .all(|group| group.is_consistent(&self.cells, self.size));

        if !groups_consistent {
            return false;
        }

        match self.most_constrained_cell() {
            Some((row, column)) => {
                let cell = &self.cells[index(row, column, self.size)];
                cell.candidate_count() > 0
            },
            None => true
        }
    }

    /// Indicates whether this grid is complete, i.e. has no empty cells and
    /// is [consistent](Grid::is_consistent). A complete grid contains each
    /// value exactly once in every row, column, and box.
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0 && self.is_consistent()
    }
}

fn display_row(grid: &Grid, row: usize) -> String {
    let mut clusters = Vec::with_capacity(grid.box_len);

    for cluster in 0..grid.box_len {
        let cells: Vec<String> = (0..grid.box_len)
            .map(|i| {
                let column = cluster * grid.box_len + i;
                let value = grid.cells[index(row, column, grid.size)].value;

                if value == 0 {
                    String::from(".")
                }
                else {
                    value_to_char(value).to_string()
                }
            })
            .collect();

        clusters.push(cells.join(" "));
    }

    clusters.join(" | ")
}

impl Display for Grid {

    /// Renders the grid for human consumption: cells space-separated in
    /// box-sized clusters separated by `" | "`, box bands separated by a
    /// horizontal rule of dashes, and empty cells rendered as `'.'`. Values
    /// greater than 9 are rendered with the same letters as in the grid code.
    /// This format is never parsed back.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rule_len = 2 * self.size - 1 + 2 * (self.box_len - 1);
        let rule = "-".repeat(rule_len);

        for row in 0..self.size {
            if row > 0 {
                f.write_str("\n")?;

                if row % self.box_len == 0 {
                    f.write_str(rule.as_str())?;
                    f.write_str("\n")?;
                }
            }

            f.write_str(display_row(self, row).as_str())?;
        }

        Ok(())
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for Grid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<Grid> {
        Grid::parse(code.as_str())
    }
}
