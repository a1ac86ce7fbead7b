//! The move engine: shape validation and legal move enumeration.
//!
//! A shaped board is valid when it is exactly `size`×`size`, holds exactly
//! `block_count` blocks, and those blocks form one edge-connected shape.
//!
//! A block can move iff it is not an articulation cell: clearing it leaves
//! the remaining blocks connected. Its destinations are the empty cells
//! touching the remaining shape. Any such relocation keeps the board valid.
//!
//! ```
//! use block_shift::core::{BoardConfig, Cell, Grid};
//! use block_shift::rules::MoveEngine;
//!
//! let engine = MoveEngine::new(BoardConfig::shaped().with_size(4).with_block_count(3));
//! let grid = Grid::with_marked(4, [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]);
//!
//! assert!(engine.validate(&grid).is_ok());
//!
//! let moves = engine.enumerate_moves(&grid);
//! let sources: Vec<_> = moves.sources().collect();
//! assert_eq!(sources, vec![Cell::new(0, 0), Cell::new(0, 2)]);
//! ```

use log::{debug, trace};

use crate::analysis::{component_count, component_size, frontier, marked_cells};
use crate::core::{BoardConfig, BoardError, BoardMode, Cell, Grid, Move, MoveSet, Relocation};

/// Stateless validator and move generator for one board configuration.
///
/// Holds only the configuration; every call is a pure function of its grid
/// argument, so one engine can be shared freely across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveEngine {
    config: BoardConfig,
}

impl MoveEngine {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        config.assert_consistent();
        Self { config }
    }

    /// The board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Check a grid against the board invariants.
    ///
    /// Checks run in order: dimensions, block count, connectivity. The
    /// first failure is reported. Freeform boards only check dimensions.
    pub fn validate(&self, grid: &Grid) -> Result<(), BoardError> {
        let result = self.check(grid);
        match &result {
            Ok(()) => debug!("grid valid ({} blocks)", grid.marked_count()),
            Err(err) => debug!("grid rejected: {}", err),
        }
        result
    }

    fn check(&self, grid: &Grid) -> Result<(), BoardError> {
        if grid.size() != self.config.size {
            return Err(BoardError::malformed(format!(
                "grid is {}x{}, expected {}x{}",
                grid.size(),
                grid.size(),
                self.config.size,
                self.config.size
            )));
        }

        let BoardMode::Shaped { block_count } = self.config.mode else {
            return Ok(());
        };

        let blocks = marked_cells(grid);
        if blocks.len() != block_count {
            return Err(BoardError::WrongBlockCount {
                expected: block_count,
                found: blocks.len(),
            });
        }

        let reachable = component_size(grid, blocks.first().copied());
        if reachable != block_count {
            return Err(BoardError::Disconnected {
                expected: block_count,
                reachable,
                islands: component_count(grid),
            });
        }

        Ok(())
    }

    /// Parse raw caller rows and validate the result.
    pub fn validate_rows(&self, rows: &[Vec<i64>]) -> Result<Grid, BoardError> {
        let grid = Grid::from_rows(rows)?;
        self.validate(&grid)?;
        Ok(grid)
    }

    /// Check whether clearing `cell` would split the remaining blocks.
    ///
    /// Unmarked cells are never articulation cells.
    #[must_use]
    pub fn is_articulation(&self, grid: &Grid, cell: Cell) -> bool {
        if !grid.is_marked(cell) {
            return false;
        }
        let mut working = grid.clone();
        working.set(cell, false);
        !is_connected(&working, &marked_cells(&working))
    }

    /// Every articulation cell, row-major.
    #[must_use]
    pub fn articulation_cells(&self, grid: &Grid) -> Vec<Cell> {
        marked_cells(grid)
            .into_iter()
            .filter(|&cell| self.is_articulation(grid, cell))
            .collect()
    }

    /// Enumerate every legal single-block move.
    ///
    /// Expects a grid that already passes [`MoveEngine::validate`]. Moves are
    /// ordered by source cell, row-major; each move's destinations are
    /// row-major and never include the source itself. Freeform boards have
    /// no shape moves and yield an empty set.
    #[must_use]
    pub fn enumerate_moves(&self, grid: &Grid) -> MoveSet {
        let mut moves = MoveSet::new();
        if !self.config.is_shaped() {
            return moves;
        }

        for block in marked_cells(grid) {
            let mut working = grid.clone();
            working.set(block, false);

            let remaining = marked_cells(&working);
            if remaining.is_empty() {
                continue;
            }
            if !is_connected(&working, &remaining) {
                trace!("{} is an articulation cell", block);
                continue;
            }

            // The cleared source touches the remaining shape but is no destination.
            let mut destinations = frontier(&working);
            destinations.retain(|&cell| cell != block);

            if destinations.is_empty() {
                continue;
            }
            moves.push(Move::new(block, destinations));
        }

        debug!("{} movable blocks, {} relocations", moves.len(), moves.relocations().count());
        moves
    }

    /// Apply one relocation to a valid grid.
    ///
    /// Rejects a relocation whose source is empty, whose destination is
    /// marked, or whose result breaks the board invariants. The rejection
    /// carries the reason, including the broken invariant.
    pub fn apply(&self, grid: &Grid, relocation: Relocation) -> Result<Grid, BoardError> {
        let Relocation { from, to } = relocation;
        let illegal = |reason: String| BoardError::IllegalMove { from, to, reason };

        if from == to {
            return Err(illegal("source and destination coincide".into()));
        }
        if !grid.is_marked(from) {
            return Err(illegal("source is empty".into()));
        }
        if !to.in_bounds(grid.size()) {
            return Err(illegal("destination is off the grid".into()));
        }
        if grid.is_marked(to) {
            return Err(illegal("destination is occupied".into()));
        }

        let next = grid.relocated(from, to);
        self.check(&next).map_err(|err| illegal(err.to_string()))?;
        Ok(next)
    }

    /// Re-validate a grid proposed as the successor of `before`.
    ///
    /// Shaped boards only require `after` to be valid. Freeform boards also
    /// require that no mark was removed and that at most `max_additions`
    /// marks were added. Returns the number of newly marked cells.
    pub fn validate_transition(&self, before: &Grid, after: &Grid) -> Result<usize, BoardError> {
        self.validate(after)?;

        if before.size() != after.size() {
            return Err(BoardError::malformed(format!(
                "grid changed size from {} to {}",
                before.size(),
                after.size()
            )));
        }

        let mut added = 0;
        for ((cell, was), (_, is)) in before.iter().zip(after.iter()) {
            match (was, is) {
                (true, false) if !self.config.is_shaped() => {
                    return Err(BoardError::MarkRemoved { cell });
                }
                (false, true) => added += 1,
                _ => {}
            }
        }

        if let BoardMode::Freeform { max_additions } = self.config.mode {
            if added > max_additions {
                return Err(BoardError::TooManyAdditions {
                    added,
                    max: max_additions,
                });
            }
        }

        Ok(added)
    }
}

fn is_connected(grid: &Grid, blocks: &[Cell]) -> bool {
    component_size(grid, blocks.first().copied()) == blocks.len()
}
