//! Core value types: cells, grids, moves, configuration, errors, RNG.
//!
//! Everything here is a plain value. Nothing holds state across calls, so
//! any number of evaluations may run in parallel on their own grids.

pub mod cell;
pub mod grid;
pub mod moves;
pub mod config;
pub mod error;
pub mod rng;

pub use cell::Cell;
pub use grid::Grid;
pub use moves::{Move, MoveSet, Relocation};
pub use config::{BoardConfig, BoardMode, DEFAULT_BLOCK_COUNT, DEFAULT_MAX_ADDITIONS, DEFAULT_SIZE, FREEFORM_SIZE};
pub use error::{BoardError, ErrorKind};
pub use rng::BoardRng;
