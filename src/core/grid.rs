//! The square binary grid.
//!
//! ## Storage
//!
//! Cells live in a row-major `im::Vector<bool>`. Cloning a grid is O(1) and
//! structurally shared, so move enumeration can take a working copy per
//! candidate cell without touching the caller's grid.
//!
//! ## Wire format
//!
//! A grid serialises as a nested array of 0/1 rows and deserialises through
//! [`Grid::from_rows`], so a malformed payload is rejected the same way
//! whether it arrives as JSON or as in-process rows.
//!
//! ```
//! use block_shift::core::{Cell, Grid};
//!
//! let grid = Grid::from_rows(&[vec![0, 1], vec![1, 1]]).unwrap();
//! assert_eq!(grid.size(), 2);
//! assert_eq!(grid.marked_count(), 3);
//! assert!(!grid.is_marked(Cell::new(0, 0)));
//!
//! let json = serde_json::to_string(&grid).unwrap();
//! assert_eq!(json, "[[0,1],[1,1]]");
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::BoardError;

/// A `size`×`size` matrix of marked/empty cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    size: usize,
    cells: Vector<bool>,
}

impl Grid {
    /// Create an all-empty grid.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Grid size must be positive");
        Self {
            size,
            cells: std::iter::repeat(false).take(size * size).collect(),
        }
    }

    /// Create a grid with the given cells marked.
    ///
    /// Panics if a cell is out of bounds.
    #[must_use]
    pub fn with_marked(size: usize, marked: impl IntoIterator<Item = Cell>) -> Self {
        let mut grid = Self::empty(size);
        for cell in marked {
            assert!(cell.in_bounds(size), "Cell {} outside {}x{} grid", cell, size, size);
            grid.set(cell, true);
        }
        grid
    }

    /// Parse caller-supplied rows.
    ///
    /// Rows must form a non-empty square and every value must be 0 or 1.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::malformed("grid has no rows"));
        }

        let mut cells = Vector::new();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardError::malformed(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    size
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => cells.push_back(false),
                    1 => cells.push_back(true),
                    other => {
                        return Err(BoardError::malformed(format!(
                            "cell ({}, {}) holds {}, expected 0 or 1",
                            r, c, other
                        )))
                    }
                }
            }
        }

        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a cell is marked. Out-of-bounds cells are never marked.
    #[must_use]
    pub fn is_marked(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size) && self.cells[cell.index(self.size)]
    }

    /// Mark or clear a cell. Out-of-bounds cells are ignored.
    pub fn set(&mut self, cell: Cell, marked: bool) {
        if cell.in_bounds(self.size) {
            self.cells.set(cell.index(self.size), marked);
        }
    }

    /// Number of marked cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m).count()
    }

    /// Iterate over every cell with its state, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &m)| (Cell::from_index(i, size), m))
    }

    /// A copy of this grid with `from` cleared and `to` marked.
    #[must_use]
    pub fn relocated(&self, from: Cell, to: Cell) -> Self {
        let mut next = self.clone();
        next.set(from, false);
        next.set(to, true);
        next
    }

    /// Rows as 0/1 values.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|r| {
                (0..self.size)
                    .map(|c| u8::from(self.cells[r * self.size + c]))
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.to_rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
