//! Python bindings for the block-shift move engine.
//!
//! # Quick Start
//!
//! ```python
//! import block_shift as bs
//!
//! engine = bs.MoveEngine(size=10, block_count=10)
//!
//! grid = [[0] * 10 for _ in range(10)]
//! grid[0] = [1] * 10
//!
//! assert engine.validate(grid) is None
//! for move in engine.enumerate_moves(grid):
//!     print(move.from_cell, move.to)
//!
//! # Re-check whatever an external generator proposes
//! proposal = bs.parse_reply(reply_text)
//! error = engine.validate_transition(grid, proposal)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// block_shift: validation and move enumeration for connected block shapes.
#[pymodule]
fn block_shift(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMove>()?;
    m.add_class::<PyRelocation>()?;
    m.add_class::<PyMoveEngine>()?;
    m.add_function(wrap_pyfunction!(py_parse_reply, m)?)?;

    Ok(())
}
