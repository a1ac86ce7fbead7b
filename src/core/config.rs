//! Board configuration.
//!
//! A board is either:
//! - `Shaped`: exactly `block_count` blocks forming one edge-connected shape
//!   (the default, 10 blocks on a 10×10 grid).
//! - `Freeform`: any 0/1 pattern; updates may only add a few marks.
//!
//! Which mode a deployment uses is a configuration choice.

use serde::{Deserialize, Serialize};

/// Side length of the default shaped board.
pub const DEFAULT_SIZE: usize = 10;

/// Block count of the default shaped board.
pub const DEFAULT_BLOCK_COUNT: usize = 10;

/// Side length of the default freeform board.
pub const FREEFORM_SIZE: usize = 50;

/// Marks a freeform update may add by default.
pub const DEFAULT_MAX_ADDITIONS: usize = 3;

/// Which invariant the board carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BoardMode {
    /// Fixed block count, single connected component.
    Shaped { block_count: usize },
    /// No shape constraint; updates add at most `max_additions` marks.
    Freeform { max_additions: usize },
}

/// Complete board configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Grid side length.
    pub size: usize,

    #[serde(flatten)]
    pub mode: BoardMode,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::shaped()
    }
}

impl BoardConfig {
    /// The default shaped board: 10 blocks on 10×10.
    #[must_use]
    pub fn shaped() -> Self {
        Self {
            size: DEFAULT_SIZE,
            mode: BoardMode::Shaped {
                block_count: DEFAULT_BLOCK_COUNT,
            },
        }
    }

    /// The default freeform board: 50×50, up to 3 additions per update.
    #[must_use]
    pub fn freeform() -> Self {
        Self {
            size: FREEFORM_SIZE,
            mode: BoardMode::Freeform {
                max_additions: DEFAULT_MAX_ADDITIONS,
            },
        }
    }

    /// Set the grid side length.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Grid size must be positive");
        self.size = size;
        self
    }

    /// Switch to shaped mode with the given block count.
    #[must_use]
    pub fn with_block_count(mut self, block_count: usize) -> Self {
        self.mode = BoardMode::Shaped { block_count };
        self.assert_consistent();
        self
    }

    /// Switch to freeform mode with the given addition limit.
    #[must_use]
    pub fn with_max_additions(mut self, max_additions: usize) -> Self {
        self.mode = BoardMode::Freeform { max_additions };
        self
    }

    /// Block count in shaped mode, `None` in freeform mode.
    #[must_use]
    pub fn block_count(&self) -> Option<usize> {
        match self.mode {
            BoardMode::Shaped { block_count } => Some(block_count),
            BoardMode::Freeform { .. } => None,
        }
    }

    /// Check if the board carries the connected-shape invariant.
    #[must_use]
    pub fn is_shaped(&self) -> bool {
        matches!(self.mode, BoardMode::Shaped { .. })
    }

    /// Panics if the block count cannot fit on the grid.
    pub(crate) fn assert_consistent(&self) {
        if let BoardMode::Shaped { block_count } = self.mode {
            assert!(
                block_count <= self.size * self.size,
                "Block count {} does not fit a {}x{} grid",
                block_count,
                self.size,
                self.size
            );
        }
    }
}
