//! Shape validation shared by the facades. Runs before any kernel call.

use ladex_core::dense::Matrix;
use ladex_core::error::{LinalgError, Result};
use ladex_core::scalar::Scalar;

/// The order of `a`, or `NotSquare`.
pub(crate) fn require_square<T: Scalar>(a: &Matrix<T>) -> Result<usize> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// `ShapeMismatch` unless the two matrices conform elementwise.
pub(crate) fn require_same_shape<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(LinalgError::shape_mismatch(a.shape(), b.shape()));
    }
    Ok(())
}

/// The common order of two square operands, or `ShapeMismatch`.
pub(crate) fn require_same_order(a: usize, b: usize) -> Result<usize> {
    if a != b {
        return Err(LinalgError::shape_mismatch((a, a), (b, b)));
    }
    Ok(a)
}
