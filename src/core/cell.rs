//! Cell coordinates on a square grid.
//!
//! A `Cell` is a plain value: two cells are the same cell iff their row and
//! column are equal. Every set or map in the crate keys on this value.
//!
//! ## Adjacency
//!
//! Only edge neighbours count. Diagonal cells are never adjacent.
//!
//! ```
//! use block_shift::core::Cell;
//!
//! let a = Cell::new(2, 3);
//! assert!(a.is_adjacent(Cell::new(1, 3)));
//! assert!(a.is_adjacent(Cell::new(2, 4)));
//! assert!(!a.is_adjacent(Cell::new(3, 4))); // diagonal
//! assert!(!a.is_adjacent(a));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A (row, column) coordinate.
///
/// Ordering is row-major, so sorting cells yields the grid's scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether the cell lies on a `size`×`size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index on a `size`×`size` grid.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Cell::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Check edge adjacency: exactly one coordinate differs, by exactly one.
    #[must_use]
    pub const fn is_adjacent(self, other: Cell) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }

    /// In-bounds orthogonal neighbours, in up/down/left/right order.
    #[must_use]
    pub fn neighbors(self, size: usize) -> SmallVec<[Cell; 4]> {
        let mut out = SmallVec::new();
        if !self.in_bounds(size) {
            return out;
        }
        if self.row > 0 {
            out.push(Cell::new(self.row - 1, self.col));
        }
        if self.row + 1 < size {
            out.push(Cell::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            out.push(Cell::new(self.row, self.col - 1));
        }
        if self.col + 1 < size {
            out.push(Cell::new(self.row, self.col + 1));
        }
        out
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
