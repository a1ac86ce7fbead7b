//! One validated turn: check, enumerate, select, re-check.

use log::{debug, warn};
use serde::Serialize;

use crate::analysis::diff_relocation;
use crate::core::{BoardError, Grid, MoveSet, Relocation};
use crate::rules::MoveEngine;

use super::selector::{MoveSelector, SelectorError};

/// Why a turn produced no new grid.
///
/// Each variant names who is at fault: the caller's input, the selector,
/// or the selector's proposal.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    /// The grid supplied by the caller is invalid.
    #[error("invalid input grid: {0}")]
    InvalidInput(#[source] BoardError),

    /// The selector failed to propose anything.
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// The selector proposed a grid that breaks the board invariants.
    #[error("rejected proposed grid: {0}")]
    RejectedCandidate(#[source] BoardError),
}

/// Result of a successful turn.
#[derive(Clone, Debug, Serialize)]
pub struct TurnOutcome {
    /// The accepted next grid.
    pub grid: Grid,

    /// The moves that were offered to the selector.
    pub moves: MoveSet,

    /// The single relocation the selector made, if it made exactly one.
    pub relocation: Option<Relocation>,
}

/// Play one turn.
///
/// The input grid is validated first. In shaped mode the legal moves are
/// enumerated and handed to the selector; in freeform mode the selector
/// gets an empty move set. Whatever grid the selector proposes must pass
/// [`MoveEngine::validate_transition`]; there is no fallback grid.
pub fn play_turn<S>(engine: &MoveEngine, grid: &Grid, selector: &mut S) -> Result<TurnOutcome, TurnError>
where
    S: MoveSelector + ?Sized,
{
    engine.validate(grid).map_err(TurnError::InvalidInput)?;

    let moves = engine.enumerate_moves(grid);
    let proposed = selector.select(grid, &moves)?;

    engine
        .validate_transition(grid, &proposed)
        .map_err(TurnError::RejectedCandidate)?;

    let relocation = diff_relocation(grid, &proposed);
    if engine.config().is_shaped() {
        match relocation {
            Some(r) if moves.contains(r) => debug!("selector played {}", r),
            Some(r) => warn!("selector played {}, which was not offered", r),
            None => warn!("selector changed more than one block"),
        }
    }

    Ok(TurnOutcome {
        grid: proposed,
        moves,
        relocation,
    })
}
