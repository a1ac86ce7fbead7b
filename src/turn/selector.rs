//! Move selectors: who decides which legal move to play.
//!
//! The engine only enumerates moves. A `MoveSelector` picks one and
//! returns the grid it wants to play. Selectors are untrusted: whatever
//! grid they return is re-validated by `play_turn`.
//!
//! - `FirstMoveSelector`: first destination of the first move
//! - `RandomSelector`: uniform over all relocations, seeded
//! - `TextSelector`: asks a text generator and parses its reply

use crate::core::{BoardRng, Grid, MoveSet};

use super::reply::{parse_reply, ReplyError};

/// Failures owned by the selecting collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    /// The collaborator could not be reached or returned an error.
    #[error("selector unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered, but no grid could be read from it.
    #[error("unparseable reply: {0}")]
    Unparseable(#[from] ReplyError),

    /// There was nothing to choose from.
    #[error("no legal moves to choose from")]
    NoMoves,
}

/// Chooses the next grid given the current grid and its legal moves.
pub trait MoveSelector {
    /// Return the proposed next grid.
    fn select(&mut self, grid: &Grid, moves: &MoveSet) -> Result<Grid, SelectorError>;
}

/// Always plays the first destination of the first movable block.
#[derive(Clone, Debug, Default)]
pub struct FirstMoveSelector;

impl MoveSelector for FirstMoveSelector {
    fn select(&mut self, grid: &Grid, moves: &MoveSet) -> Result<Grid, SelectorError> {
        let relocation = moves.relocations().next().ok_or(SelectorError::NoMoves)?;
        Ok(grid.relocated(relocation.from, relocation.to))
    }
}

/// Picks a relocation uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: BoardRng,
}

impl RandomSelector {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: BoardRng::new(seed),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, grid: &Grid, moves: &MoveSet) -> Result<Grid, SelectorError> {
        let all: Vec<_> = moves.relocations().collect();
        let relocation = self.rng.choose(&all).ok_or(SelectorError::NoMoves)?;
        Ok(grid.relocated(relocation.from, relocation.to))
    }
}

/// Wraps a text generator.
///
/// The callback receives the current grid and the legal moves, builds
/// whatever request it needs, and returns the generator's raw reply (or an
/// error message). The reply is parsed with [`parse_reply`].
pub struct TextSelector<F> {
    generate: F,
}

impl<F> TextSelector<F>
where
    F: FnMut(&Grid, &MoveSet) -> Result<String, String>,
{
    pub fn new(generate: F) -> Self {
        Self { generate }
    }
}

impl<F> MoveSelector for TextSelector<F>
where
    F: FnMut(&Grid, &MoveSet) -> Result<String, String>,
{
    fn select(&mut self, grid: &Grid, moves: &MoveSet) -> Result<Grid, SelectorError> {
        let reply = (self.generate)(grid, moves).map_err(SelectorError::Unavailable)?;
        Ok(parse_reply(&reply)?)
    }
}
