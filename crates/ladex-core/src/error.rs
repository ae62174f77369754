//! Error types shared by the ladex crates.

use thiserror::Error;

/// Errors surfaced by the containers, the decomposition facades, and the
/// kernel adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Constructor arguments are inconsistent (e.g. a diagonal offset out of
    /// range for the requested shape).
    #[error("invalid shape: {reason}")]
    InvalidShape { reason: String },

    /// Binary operation on shapes that do not conform.
    #[error("shape mismatch: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Operation requiring a square matrix was given a rectangular one.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Write to a position the container's structure does not permit.
    #[error("write at ({row}, {col}) violates the container structure")]
    StructuralViolation { row: usize, col: usize },

    /// A structural precondition (symmetric or Hermitian) does not hold.
    #[error("matrix is not {expected}")]
    NotHermitian { expected: &'static str },

    /// The right-hand matrix of a generalized symmetric-definite problem is
    /// not positive definite.
    #[error("matrix is not positive definite: leading minor of order {order} is not positive")]
    NotPositiveDefinite { order: usize },

    /// The kernel reported non-convergence. Output elements past `index` are
    /// unreliable and are not exposed.
    #[error("kernel iteration failed to converge (info = {index})")]
    ConvergenceFailure { index: usize },

    /// Accessor called on a decomposition object before `decompose` ran.
    #[error("decomposition has not been computed")]
    NotDecomposed,

    /// The kernel rejected its `argument`-th parameter. Inputs are validated
    /// before every kernel call, so this indicates an adapter defect.
    #[error("kernel rejected argument {argument}")]
    BadKernelArgument { argument: usize },
}

impl LinalgError {
    /// Shorthand for an [`LinalgError::InvalidShape`] with a formatted reason.
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        LinalgError::InvalidShape {
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`LinalgError::ShapeMismatch`] from two shapes.
    pub fn shape_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        LinalgError::ShapeMismatch {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }
}

/// Result type for ladex operations.
pub type Result<T> = std::result::Result<T, LinalgError>;
