//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Cell, Move, Relocation};

/// Python wrapper for Move.
///
/// Cells are exposed as `(row, col)` tuples.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    #[new]
    fn new(from_cell: (usize, usize), to: Vec<(usize, usize)>) -> Self {
        Self(Move::new(from_cell.into(), to.into_iter().map(Cell::from).collect()))
    }

    /// The block being moved.
    #[getter]
    fn from_cell(&self) -> (usize, usize) {
        (self.0.from.row, self.0.from.col)
    }

    /// Cells the block may move to.
    #[getter]
    fn to(&self) -> Vec<(usize, usize)> {
        self.0.to.iter().map(|c| (c.row, c.col)).collect()
    }

    /// Check whether `cell` is a legal destination.
    fn allows(&self, cell: (usize, usize)) -> bool {
        self.0.allows(cell.into())
    }

    fn __len__(&self) -> usize {
        self.0.to.len()
    }

    fn __repr__(&self) -> String {
        format!("Move(from={}, to={} cells)", self.0.from, self.0.to.len())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Relocation.
#[pyclass(name = "Relocation")]
#[derive(Clone, Debug)]
pub struct PyRelocation(pub Relocation);

#[pymethods]
impl PyRelocation {
    #[new]
    fn new(from_cell: (usize, usize), to: (usize, usize)) -> Self {
        Self(Relocation::new(from_cell.into(), to.into()))
    }

    #[getter]
    fn from_cell(&self) -> (usize, usize) {
        (self.0.from.row, self.0.from.col)
    }

    #[getter]
    fn to(&self) -> (usize, usize) {
        (self.0.to.row, self.0.to.col)
    }

    fn __repr__(&self) -> String {
        format!("Relocation({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
