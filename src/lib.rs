//! # block-shift
//!
//! Validation and move enumeration for a board of blocks that must always
//! form one edge-connected shape.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every check and enumeration is a function of the
//!    grid it is given. Nothing is cached between calls, so evaluations can
//!    run in parallel on their own grids without coordination.
//!
//! 2. **Report, Don't Abort**: Malformed caller input yields a `BoardError`,
//!    never a panic.
//!
//! 3. **Untrusted Deciders**: The engine enumerates moves but never picks
//!    one. Whatever an external decider proposes is validated again before
//!    it is accepted.
//!
//! ## Architecture
//!
//! - **Working Copies**: Grids are backed by `im-rs` persistent vectors, so
//!   the per-block "clear and re-check" test clones in O(1).
//!
//! - **Value-Keyed Cells**: Visited sets and destination sets key on the
//!   `(row, col)` value of a `Cell`.
//!
//! ## Modules
//!
//! - `core`: Cells, grids, moves, configuration, errors, RNG
//! - `analysis`: Marked-cell scans and connected components
//! - `rules`: `MoveEngine` validation and move enumeration
//! - `turn`: Selector seam, reply parsing, validated turns
//! - `boards`: Builders for valid starting grids

pub mod core;
pub mod analysis;
pub mod rules;
pub mod turn;
pub mod boards;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, Grid,
    Move, MoveSet, Relocation,
    BoardConfig, BoardMode,
    BoardError, ErrorKind,
    BoardRng,
};

pub use crate::analysis::{component_size, marked_cells};

pub use crate::rules::MoveEngine;

pub use crate::turn::{
    play_turn, parse_reply,
    MoveSelector, FirstMoveSelector, RandomSelector, TextSelector,
    SelectorError, ReplyError, TurnError, TurnOutcome,
};

pub use crate::boards::{BoardBuilder, Shape};
