//! Board rules: validation and legal move enumeration.
//!
//! The `MoveEngine` decides whether a grid satisfies the board invariants
//! and lists every single-block relocation that keeps them. It never picks
//! a move; choosing is left to a `MoveSelector` in the `turn` module.

pub mod engine;

pub use engine::MoveEngine;
