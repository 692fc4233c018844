//! This module contains the error and result definitions used in this crate.

use thiserror::Error;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not include errors that occur when
/// parsing a grid code, see [SudokuParseError] for that.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SudokuError {

    /// Indicates that a grid was requested with neither a box length nor a
    /// grid code, leaving its dimensions undefined.
    #[error("neither a box length nor a grid code was provided")]
    MissingConfiguration,

    /// Indicates that the dimensions specified for a created grid are
    /// invalid. This is the case if the box length is zero or the resulting
    /// grid size exceeds [MAX_GRID_SIZE](crate::MAX_GRID_SIZE).
    #[error("the requested grid dimensions are not supported")]
    InvalidDimensions,

    /// Indicates that some number is invalid for the size of the grid in
    /// question. This is the case if it is greater than the size. Note that 0
    /// is valid in a [set_value](crate::Grid::set_value) call, where it clears
    /// the cell.
    #[error("the given number is outside the range of valid cell values")]
    InvalidNumber,

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    #[error("the given cell coordinates lie outside the grid")]
    OutOfBounds,

    /// Wraps a [SudokuParseError] raised while decoding a grid code.
    #[error(transparent)]
    Parse(#[from] SudokuParseError)
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid code.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code contains no rows at all.
    #[error("the grid code is empty")]
    Empty,

    /// Indicates that the length of the first row is not a perfect square,
    /// which makes it impossible to infer a box length.
    #[error("the row length of the grid code is not a perfect square")]
    NotASquare,

    /// Indicates that the code describes a grid whose size exceeds
    /// [MAX_GRID_SIZE](crate::MAX_GRID_SIZE), i.e. whose values could not all
    /// be expressed in the cell alphabet.
    #[error("the grid code describes a grid larger than the cell alphabet")]
    UnsupportedDimensions,

    /// Indicates that the number of rows does not equal the row length, i.e.
    /// the described grid would not be square.
    #[error("the number of rows in the grid code does not match their length")]
    WrongRowCount,

    /// Indicates that some row has a different length than the first one.
    #[error("a row of the grid code has a different length than the first")]
    WrongRowLength,

    /// Indicates that the code contains a character outside the cell
    /// alphabet, which consists of the digits `'0'` to `'9'` and the letters
    /// `'A'` to `'Z'`.
    #[error("the grid code contains an invalid character: {0:?}")]
    InvalidCharacter(char),

    /// Indicates that a cell is filled with a value greater than the grid
    /// size.
    #[error("the grid code contains a value greater than the grid size")]
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
