//! Logical grid coordinates.
//!
//! A [`Cell`] is the `(row, column)` pair the scanner assigns to every block.
//! Cells are small `Copy` values: cursors are handed to recursive calls by
//! value and the updated cursor is returned, never shared by reference.

use std::fmt;

/// A `(row, column)` coordinate in the logical diagram grid.
///
/// Ordering is row-major, so the "further" of two cursors is simply their
/// [`Ord::max`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: usize,
    column: usize,
}

impl Cell {
    /// Creates a new cell at the given row and column.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the 0-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the 0-based column.
    pub fn column(self) -> usize {
        self.column
    }

    /// Returns the cell immediately to the right on the same row.
    pub fn next_column(self) -> Self {
        Self::new(self.row, self.column + 1)
    }

    /// Returns the first cell of the following row.
    pub fn next_row(self) -> Self {
        Self::new(self.row + 1, 0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
