//! Board errors.
//!
//! Every failure the engine can report about a caller-supplied grid is a
//! `BoardError`. None of them are fatal: the caller fixes the grid and
//! tries again.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// A structured report of why a grid or transition was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Wrong dimensions, ragged rows, or a cell that is not 0/1.
    #[error("malformed grid: {reason}")]
    MalformedShape { reason: String },

    /// The number of marked cells differs from the configured count.
    #[error("expected {expected} blocks, found {found}")]
    WrongBlockCount { expected: usize, found: usize },

    /// Some marked cells are unreachable from the others.
    #[error("blocks are disconnected: {reachable} of {expected} reachable across {islands} islands")]
    Disconnected {
        expected: usize,
        reachable: usize,
        islands: usize,
    },

    /// A relocation that does not preserve the shape invariant.
    #[error("illegal move from {from} to {to}: {reason}")]
    IllegalMove { from: Cell, to: Cell, reason: String },

    /// A freeform update cleared a previously marked cell.
    #[error("mark at {cell} was removed")]
    MarkRemoved { cell: Cell },

    /// A freeform update added more marks than allowed.
    #[error("{added} marks added, at most {max} allowed")]
    TooManyAdditions { added: usize, max: usize },
}

impl BoardError {
    /// Convenience constructor for `MalformedShape`.
    pub fn malformed(reason: impl Into<String>) -> Self {
        BoardError::MalformedShape {
            reason: reason.into(),
        }
    }

    /// The fieldless kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::MalformedShape { .. } => ErrorKind::MalformedShape,
            BoardError::WrongBlockCount { .. } => ErrorKind::WrongBlockCount,
            BoardError::Disconnected { .. } => ErrorKind::Disconnected,
            BoardError::IllegalMove { .. } => ErrorKind::IllegalMove,
            BoardError::MarkRemoved { .. } => ErrorKind::MarkRemoved,
            BoardError::TooManyAdditions { .. } => ErrorKind::TooManyAdditions,
        }
    }
}

/// Error kind, for response payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    MalformedShape,
    WrongBlockCount,
    Disconnected,
    IllegalMove,
    MarkRemoved,
    TooManyAdditions,
}

impl ErrorKind {
    /// Stable name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MalformedShape => "MalformedShape",
            ErrorKind::WrongBlockCount => "WrongBlockCount",
            ErrorKind::Disconnected => "Disconnected",
            ErrorKind::IllegalMove => "IllegalMove",
            ErrorKind::MarkRemoved => "MarkRemoved",
            ErrorKind::TooManyAdditions => "TooManyAdditions",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
