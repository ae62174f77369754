//! Capability traits and the small shape-query helpers.
//!
//! Algorithms in the facade crates are bound on [`MatrixRef`] — the ability
//! to report a shape and read elements — rather than on a concrete container
//! type. Every matrix-like type in this crate implements it.

use crate::dense::{Matrix, Vector};
use crate::layout::Layout;
use crate::scalar::Scalar;

/// Read access to a matrix-like container.
pub trait MatrixRef<T: Scalar> {
    fn num_rows(&self) -> usize;

    fn num_columns(&self) -> usize;

    /// Element at `(i, j)`; structured types return their structural zero
    /// for positions outside the stored pattern.
    fn get(&self, i: usize, j: usize) -> T;

    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_columns())
    }

    /// Materializes the full matrix. Structured implementors override this
    /// when a faster expansion exists.
    fn to_dense(&self) -> Matrix<T> {
        let (rows, cols) = self.shape();
        let mut m = Matrix::zeros(rows, cols, Layout::default());
        for i in 0..rows {
            for j in 0..cols {
                m.set(i, j, self.get(i, j));
            }
        }
        m
    }
}

/// Number of rows of any matrix-like container.
pub fn num_rows<T: Scalar, M: MatrixRef<T>>(m: &M) -> usize {
    m.num_rows()
}

/// Number of columns of any matrix-like container.
pub fn num_columns<T: Scalar, M: MatrixRef<T>>(m: &M) -> usize {
    m.num_columns()
}

/// Length of a vector.
pub fn size<T: Scalar>(v: &Vector<T>) -> usize {
    v.len()
}
