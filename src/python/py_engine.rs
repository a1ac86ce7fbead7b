//! Move engine bindings for Python.

use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BoardConfig, Grid};
use crate::rules::MoveEngine;
use crate::turn::parse_reply;

use super::py_core::{PyMove, PyRelocation};

/// Python wrapper for MoveEngine.
///
/// Grids are passed as lists of integer rows or as 2-D integer arrays.
#[pyclass(name = "MoveEngine")]
#[derive(Clone, Debug)]
pub struct PyMoveEngine {
    engine: MoveEngine,
}

impl PyMoveEngine {
    fn parse(&self, rows: &[Vec<i64>]) -> PyResult<Grid> {
        self.engine
            .validate_rows(rows)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

#[pymethods]
impl PyMoveEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - size: Grid side length
    /// - block_count: Required number of blocks; `None` for a freeform board
    /// - max_additions: Marks a freeform update may add
    #[new]
    #[pyo3(signature = (size = 10, block_count = Some(10), max_additions = 3))]
    fn new(size: usize, block_count: Option<usize>, max_additions: usize) -> PyResult<Self> {
        if size == 0 {
            return Err(PyValueError::new_err("size must be positive"));
        }
        let config = BoardConfig::shaped().with_size(size);
        let config = match block_count {
            Some(count) if count > size * size => {
                return Err(PyValueError::new_err(format!(
                    "{} blocks do not fit a {}x{} grid",
                    count, size, size
                )))
            }
            Some(count) => config.with_block_count(count),
            None => config.with_max_additions(max_additions),
        };
        Ok(Self {
            engine: MoveEngine::new(config),
        })
    }

    /// Validate a grid. Returns `None` if valid, else the error kind name.
    fn validate(&self, rows: Vec<Vec<i64>>) -> Option<String> {
        self.engine
            .validate_rows(&rows)
            .err()
            .map(|e| e.kind().to_string())
    }

    /// Validate a 2-D integer array.
    fn validate_array(&self, grid: PyReadonlyArray2<'_, i64>) -> Option<String> {
        let rows: Vec<Vec<i64>> = grid.as_array().outer_iter().map(|row| row.to_vec()).collect();
        self.validate(rows)
    }

    /// Explain why a grid is invalid. Returns `None` if valid.
    fn explain(&self, rows: Vec<Vec<i64>>) -> Option<String> {
        self.engine.validate_rows(&rows).err().map(|e| e.to_string())
    }

    /// Enumerate legal moves. Raises `ValueError` for an invalid grid.
    fn enumerate_moves(&self, rows: Vec<Vec<i64>>) -> PyResult<Vec<PyMove>> {
        let grid = self.parse(&rows)?;
        Ok(self.engine.enumerate_moves(&grid).into_iter().map(PyMove).collect())
    }

    /// Apply a relocation. Raises `ValueError` if it is illegal.
    fn apply(&self, rows: Vec<Vec<i64>>, relocation: &PyRelocation) -> PyResult<Vec<Vec<u8>>> {
        let grid = self.parse(&rows)?;
        self.engine
            .apply(&grid, relocation.0)
            .map(|next| next.to_rows())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Re-validate a proposed successor grid. Returns `None` if accepted.
    ///
    /// `before` is trusted caller state: an invalid `before` raises
    /// `ValueError`. `after` is the proposal under review: a malformed or
    /// invalid `after` is a rejection and returns the error kind name.
    fn validate_transition(&self, before: Vec<Vec<i64>>, after: Vec<Vec<i64>>) -> PyResult<Option<String>> {
        let before = self.parse(&before)?;
        let after = match Grid::from_rows(&after) {
            Ok(grid) => grid,
            Err(e) => return Ok(Some(e.kind().to_string())),
        };
        Ok(self
            .engine
            .validate_transition(&before, &after)
            .err()
            .map(|e| e.kind().to_string()))
    }

    #[getter]
    fn size(&self) -> usize {
        self.engine.config().size
    }

    #[getter]
    fn block_count(&self) -> Option<usize> {
        self.engine.config().block_count()
    }

    fn __repr__(&self) -> String {
        match self.engine.config().block_count() {
            Some(k) => format!("MoveEngine(size={}, block_count={})", self.size(), k),
            None => format!("MoveEngine(size={}, freeform)", self.size()),
        }
    }
}

/// Read a grid out of a free-form text reply.
///
/// Raises `ValueError` if no square 0/1 grid can be read.
#[pyfunction(name = "parse_reply")]
pub fn py_parse_reply(text: &str) -> PyResult<Vec<Vec<u8>>> {
    parse_reply(text)
        .map(|grid| grid.to_rows())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}
