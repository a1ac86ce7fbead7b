//! Grid analysis: marked-cell scans and connected components.
//!
//! These are the building blocks the move engine uses to test the
//! single-shape invariant. They never mutate the grid they are given.

pub mod connectivity;

pub use connectivity::{component, component_count, component_size, diff_relocation, frontier, marked_cells};
