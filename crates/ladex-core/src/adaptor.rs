//! Non-owning single-diagonal view over an existing matrix.
//!
//! The adaptor borrows its target and restricts it to one diagonal at a
//! signed offset: `(i, j)` reads the target's value when `j - i` equals the
//! offset and the structural zero otherwise. No element is copied; the
//! target's current values are observed at every access. Writes are not
//! provided.

use std::marker::PhantomData;

use num_traits::Zero;

use crate::dense::Matrix;
use crate::error::{LinalgError, Result};
use crate::gendiag::diagonal_length;
use crate::layout::Layout;
use crate::scalar::Scalar;
use crate::traits::MatrixRef;

/// Read-only generalized-diagonal view of a borrowed matrix.
pub struct GeneralizedDiagonalAdaptor<'a, T: Scalar, M: MatrixRef<T>> {
    target: &'a M,
    offset: isize,
    _elem: PhantomData<T>,
}

impl<T: Scalar, M: MatrixRef<T>> Clone for GeneralizedDiagonalAdaptor<'_, T, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, M: MatrixRef<T>> Copy for GeneralizedDiagonalAdaptor<'_, T, M> {}

impl<'a, T: Scalar, M: MatrixRef<T>> GeneralizedDiagonalAdaptor<'a, T, M> {
    /// Restricts `target` to its `offset`-th diagonal. The offset must lie
    /// within the target's shape.
    pub fn new(target: &'a M, offset: isize) -> Result<Self> {
        let (rows, cols) = target.shape();
        if offset <= -(rows as isize) || offset >= cols as isize {
            return Err(LinalgError::invalid_shape(format!(
                "diagonal offset {offset} out of range for a {rows}x{cols} matrix"
            )));
        }
        Ok(Self {
            target,
            offset,
            _elem: PhantomData,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.target.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.target.num_columns()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.target.shape()
    }

    /// Signed diagonal offset.
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Number of positions the view exposes as nonzero.
    pub fn diagonal_len(&self) -> usize {
        let (rows, cols) = self.shape();
        diagonal_length(rows, cols, self.offset)
    }

    /// The target's value on the diagonal, the structural zero elsewhere.
    pub fn get(&self, i: usize, j: usize) -> T {
        let (rows, cols) = self.shape();
        assert!(i < rows && j < cols, "index out of bounds");
        if j as isize - i as isize == self.offset {
            self.target.get(i, j)
        } else {
            T::zero()
        }
    }

    /// Iterates the diagonal positions in increasing row order, yielding
    /// `(row, col, value)` with `col - row == offset`.
    pub fn row_iter(&self) -> AdaptorIter<'a, '_, T, M> {
        AdaptorIter {
            adaptor: self,
            next: 0,
        }
    }

    /// Increasing column order; identical to [`Self::row_iter`] for a single
    /// diagonal.
    pub fn column_iter(&self) -> AdaptorIter<'a, '_, T, M> {
        self.row_iter()
    }

    /// Dense transpose: shape `(cols, rows)` whose `-offset` diagonal
    /// carries the viewed values. Produced by value.
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = self.shape();
        let mut m = Matrix::zeros(cols, rows, Layout::default());
        for (i, j, v) in self.row_iter() {
            m.set(j, i, v);
        }
        m
    }

    /// Materializes the viewed diagonal as a dense matrix.
    pub fn to_dense(&self) -> Matrix<T> {
        let (rows, cols) = self.shape();
        let mut m = Matrix::zeros(rows, cols, Layout::default());
        for (i, j, v) in self.row_iter() {
            m.set(i, j, v);
        }
        m
    }

    fn check_conforming(&self, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(())
    }

    /// Sum with a dense matrix; dense result in `other`'s layout.
    pub fn add_dense(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_conforming(other)?;
        let mut m = other.clone();
        for (i, j, v) in self.row_iter() {
            m.set(i, j, v + other.get(i, j));
        }
        Ok(m)
    }

    /// Difference `self - other`; dense result.
    pub fn sub_dense(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_conforming(other)?;
        let mut m = other.map(|v| -v);
        for (i, j, v) in self.row_iter() {
            m.set(i, j, v - other.get(i, j));
        }
        Ok(m)
    }

    /// Elementwise product with a dense matrix; dense result.
    pub fn elementwise_mul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_conforming(other)?;
        let mut m = Matrix::zeros(self.num_rows(), self.num_columns(), other.layout());
        for (i, j, v) in self.row_iter() {
            m.set(i, j, v * other.get(i, j));
        }
        Ok(m)
    }

    /// Elementwise quotient `self ./ other`; dense result.
    pub fn elementwise_div(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_conforming(other)?;
        let (rows, cols) = self.shape();
        let mut m = Matrix::zeros(rows, cols, other.layout());
        for i in 0..rows {
            for j in 0..cols {
                m.set(i, j, self.get(i, j) / other.get(i, j));
            }
        }
        Ok(m)
    }

    /// Product with another adaptor, materialized dense. The only nonzero
    /// diagonal of the result is the sum of the two offsets.
    pub fn mul_adaptor<N: MatrixRef<T>>(
        &self,
        other: &GeneralizedDiagonalAdaptor<'_, T, N>,
    ) -> Result<Matrix<T>> {
        if self.num_columns() != other.num_rows() {
            return Err(LinalgError::shape_mismatch(self.shape(), other.shape()));
        }
        let mut m = Matrix::zeros(self.num_rows(), other.num_columns(), Layout::default());
        for (i, mid, a) in self.row_iter() {
            let j = mid as isize + other.offset();
            if j >= 0 && (j as usize) < other.num_columns() {
                m.set(i, j as usize, a * other.get(mid, j as usize));
            }
        }
        Ok(m)
    }
}

impl<T: Scalar, M: MatrixRef<T>> MatrixRef<T> for GeneralizedDiagonalAdaptor<'_, T, M> {
    fn num_rows(&self) -> usize {
        GeneralizedDiagonalAdaptor::num_rows(self)
    }

    fn num_columns(&self) -> usize {
        GeneralizedDiagonalAdaptor::num_columns(self)
    }

    fn get(&self, i: usize, j: usize) -> T {
        GeneralizedDiagonalAdaptor::get(self, i, j)
    }

    fn to_dense(&self) -> Matrix<T> {
        GeneralizedDiagonalAdaptor::to_dense(self)
    }
}

/// Iterator over the diagonal positions exposed by an adaptor.
pub struct AdaptorIter<'a, 'b, T: Scalar, M: MatrixRef<T>> {
    adaptor: &'b GeneralizedDiagonalAdaptor<'a, T, M>,
    next: usize,
}

impl<T: Scalar, M: MatrixRef<T>> Iterator for AdaptorIter<'_, '_, T, M> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.adaptor.diagonal_len() {
            return None;
        }
        let t = self.next;
        self.next += 1;
        let first_row = self.adaptor.offset.min(0).unsigned_abs();
        let first_col = self.adaptor.offset.max(0) as usize;
        let (i, j) = (first_row + t, first_col + t);
        Some((i, j, self.adaptor.target.get(i, j)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.adaptor.diagonal_len() - self.next;
        (rem, Some(rem))
    }
}

impl<T: Scalar, M: MatrixRef<T>> ExactSizeIterator for AdaptorIter<'_, '_, T, M> {}
