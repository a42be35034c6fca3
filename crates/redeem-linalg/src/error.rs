use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Errors surfaced by the numeric routines.
///
/// Nothing in the crate recovers from these; they are returned to the caller as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// A zero pivot was hit while inverting.
    SingularMatrix,
    NotSquare { rows: usize, cols: usize },
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    Shape(ShapeError),
    /// NaN or infinity where an exact rational is required.
    NonFinite { row: usize, col: usize },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::SingularMatrix => write!(f, "Singular matrix"),
            LinalgError::NotSquare { rows, cols } => {
                write!(f, "Expected a square matrix, got shape ({}, {})", rows, cols)
            }
            LinalgError::DimensionMismatch { op, left, right } => write!(
                f,
                "{}: incompatible shapes ({}, {}) and ({}, {})",
                op, left.0, left.1, right.0, right.1
            ),
            LinalgError::Shape(err) => write!(f, "{}", err),
            LinalgError::NonFinite { row, col } => write!(
                f,
                "Non-finite value at ({}, {}) has no exact rational form",
                row, col
            ),
        }
    }
}

impl Error for LinalgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinalgError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for LinalgError {
    fn from(err: ShapeError) -> Self {
        LinalgError::Shape(err)
    }
}
