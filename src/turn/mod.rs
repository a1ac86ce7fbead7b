//! Turns against an external decision maker.
//!
//! - `MoveSelector`: the seam for whatever picks a move (random, scripted,
//!   or a text generator behind a network call)
//! - `parse_reply`: reads a grid out of free-form text
//! - `play_turn`: validate, enumerate, select, re-validate
//!
//! A selector's output is never trusted. A failed or invalid proposal is
//! reported as a `TurnError`; no substitute grid is produced.

pub mod play;
pub mod reply;
pub mod selector;

pub use play::{play_turn, TurnError, TurnOutcome};
pub use reply::{parse_reply, ReplyError};
pub use selector::{FirstMoveSelector, MoveSelector, RandomSelector, SelectorError, TextSelector};
