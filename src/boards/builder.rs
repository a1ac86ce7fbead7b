//! Board builder.

use rustc_hash::FxHashSet;

use crate::core::{BoardConfig, BoardRng, Cell, Grid, DEFAULT_BLOCK_COUNT, DEFAULT_SIZE};

/// Starting shape of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Blocks laid left to right along `row`, wrapping onto following rows.
    Line { row: usize },
    /// Seeded random growth from a random start cell.
    Random,
}

/// Builder for a valid starting grid.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    size: usize,
    block_count: usize,
    shape: Shape,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            block_count: DEFAULT_BLOCK_COUNT,
            shape: Shape::Line { row: 0 },
        }
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: usize) -> Self {
        assert!(size > 0, "Grid size must be positive");
        self.size = size;
        self
    }

    pub fn block_count(mut self, count: usize) -> Self {
        self.block_count = count;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// The matching shaped-board configuration.
    pub fn config(&self) -> BoardConfig {
        BoardConfig::shaped()
            .with_size(self.size)
            .with_block_count(self.block_count)
    }

    /// Build the grid. `seed` only matters for [`Shape::Random`].
    pub fn build(self, seed: u64) -> Grid {
        assert!(
            self.block_count <= self.size * self.size,
            "Block count {} does not fit a {}x{} grid",
            self.block_count,
            self.size,
            self.size
        );

        match self.shape {
            Shape::Line { row } => self.line(row),
            Shape::Random => self.random(&mut BoardRng::new(seed)),
        }
    }

    fn line(&self, row: usize) -> Grid {
        assert!(row < self.size, "Row {} outside {}x{} grid", row, self.size, self.size);
        let start = row * self.size;
        assert!(
            start + self.block_count <= self.size * self.size,
            "Line of {} blocks does not fit from row {}",
            self.block_count,
            row
        );
        // Wrapped rows start at column 0, directly under a marked cell.
        let cells = (start..start + self.block_count).map(|i| Cell::from_index(i, self.size));
        Grid::with_marked(self.size, cells)
    }

    fn random(&self, rng: &mut BoardRng) -> Grid {
        let mut grid = Grid::empty(self.size);
        if self.block_count == 0 {
            return grid;
        }

        let start = Cell::from_index(rng.gen_range_usize(0..self.size * self.size), self.size);
        grid.set(start, true);

        // A Vec, not a set: iteration order must not depend on hashing.
        let mut frontier: Vec<Cell> = Vec::new();
        let mut in_frontier = FxHashSet::default();
        let mut push_neighbors = |cell: Cell, grid: &Grid, frontier: &mut Vec<Cell>| {
            for n in cell.neighbors(self.size) {
                if !grid.is_marked(n) && in_frontier.insert(n) {
                    frontier.push(n);
                }
            }
        };
        push_neighbors(start, &grid, &mut frontier);

        for _ in 1..self.block_count {
            let pick = rng.gen_range_usize(0..frontier.len());
            let cell = frontier.swap_remove(pick);
            grid.set(cell, true);
            push_neighbors(cell, &grid, &mut frontier);
        }

        grid
    }
}
