//! Move representation: a source block plus its legal destinations.
//!
//! A `Move` groups every destination that one block can legally jump to.
//! A `Relocation` is one concrete choice out of a move: the block at
//! `from` goes to `to`.
//!
//! ```
//! use block_shift::core::{Cell, Move, MoveSet, Relocation};
//!
//! let mv = Move::new(Cell::new(0, 0), vec![Cell::new(1, 0), Cell::new(1, 1)]);
//! let moves = MoveSet::from(vec![mv]);
//!
//! assert!(moves.contains(Relocation::new(Cell::new(0, 0), Cell::new(1, 1))));
//! assert_eq!(moves.relocations().count(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// All legal destinations for the block at `from`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marked cell being moved.
    pub from: Cell,

    /// Empty cells it may move to. Row-major, no duplicates.
    pub to: Vec<Cell>,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub fn new(from: Cell, to: Vec<Cell>) -> Self {
        Self { from, to }
    }

    /// Check whether `cell` is one of the destinations.
    #[must_use]
    pub fn allows(&self, cell: Cell) -> bool {
        self.to.contains(&cell)
    }

    /// Each destination as a relocation.
    pub fn relocations(&self) -> impl Iterator<Item = Relocation> + '_ {
        self.to.iter().map(move |&to| Relocation::new(self.from, to))
    }
}

/// One block moving from one cell to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relocation {
    pub from: Cell,
    pub to: Cell,
}

impl Relocation {
    #[must_use]
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Relocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Every legal move on a grid, ordered by source cell in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    /// Create an empty move set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Number of movable blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The move for the block at `from`, if that block can move.
    #[must_use]
    pub fn get(&self, from: Cell) -> Option<&Move> {
        self.moves.iter().find(|m| m.from == from)
    }

    /// Check whether a relocation is among the legal ones.
    #[must_use]
    pub fn contains(&self, relocation: Relocation) -> bool {
        self.get(relocation.from)
            .is_some_and(|m| m.allows(relocation.to))
    }

    /// All relocations, source-major.
    pub fn relocations(&self) -> impl Iterator<Item = Relocation> + '_ {
        self.moves.iter().flat_map(Move::relocations)
    }

    /// Source cells of every move.
    pub fn sources(&self) -> impl Iterator<Item = Cell> + '_ {
        self.moves.iter().map(|m| m.from)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl From<Vec<Move>> for MoveSet {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
