//! Starting boards.
//!
//! `BoardBuilder` produces a grid that already satisfies the shaped-board
//! invariants, either as a straight line or as a seeded random shape.
//!
//! ```
//! use block_shift::boards::{BoardBuilder, Shape};
//! use block_shift::rules::MoveEngine;
//!
//! let builder = BoardBuilder::new().shape(Shape::Random);
//! let engine = MoveEngine::new(builder.config());
//! let grid = builder.build(42);
//! assert!(engine.validate(&grid).is_ok());
//! ```

mod builder;

pub use builder::{BoardBuilder, Shape};
