//! Error type shared by the solver pipeline and the TSPLIB adapters.

use thiserror::Error as ThisError;

use crate::models::MAX_COORDINATE;

/// Errors produced while loading an instance or running the solver.
///
/// The pipeline stages themselves (MST, DFS, 2-opt) are total over a
/// validated point set; every variant here describes a precondition that
/// the input failed to meet.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("expected {expected} nodes, read {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("instance has no points, no tour is defined")]
    EmptyInstance,
    #[error("point {id} at ({x}, {y}) is outside ±{max:e}", max = MAX_COORDINATE)]
    CoordinateOutOfRange { id: i64, x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
