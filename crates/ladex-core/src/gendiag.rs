//! Generalized diagonal matrix: a rectangular matrix whose nonzero entries
//! lie on a single diagonal at a signed offset from the main diagonal.
//!
//! Offset `k = 0` is the main diagonal, `k > 0` a super-diagonal, `k < 0` a
//! sub-diagonal. Only the diagonal is stored, as a packed buffer of length
//! `min(rows - max(0, -k), cols - max(0, k))`. Every other position reads as
//! the structural zero and rejects writes.

use num_traits::Zero;

use crate::dense::{Matrix, Vector};
use crate::error::{LinalgError, Result};
use crate::layout::Layout;
use crate::scalar::Scalar;
use crate::traits::MatrixRef;

/// Length of the `offset`-th diagonal of a `rows` x `cols` matrix.
///
/// Zero when the offset lies outside the matrix.
pub fn diagonal_length(rows: usize, cols: usize, offset: isize) -> usize {
    let below = offset.min(0).unsigned_abs();
    let above = offset.max(0) as usize;
    if below >= rows || above >= cols {
        return 0;
    }
    (rows - below).min(cols - above)
}

fn check_offset(rows: usize, cols: usize, offset: isize) -> Result<()> {
    if offset > -(rows as isize) && offset < cols as isize {
        Ok(())
    } else {
        Err(LinalgError::invalid_shape(format!(
            "diagonal offset {offset} out of range for a {rows}x{cols} matrix"
        )))
    }
}

/// Rectangular matrix with a single stored diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralizedDiagonalMatrix<T> {
    rows: usize,
    cols: usize,
    offset: isize,
    layout: Layout,
    data: Vec<T>,
}

impl<T: Scalar> GeneralizedDiagonalMatrix<T> {
    /// Main diagonal of an `n` x `n` matrix, zero-initialized.
    pub fn square(n: usize) -> Result<Self> {
        Self::new(n, n, 0)
    }

    /// `n` x `n` matrix with the `offset`-th diagonal stored; `|offset| < n`.
    pub fn square_with_offset(n: usize, offset: isize) -> Result<Self> {
        Self::new(n, n, offset)
    }

    /// Rectangular container; requires `-rows < offset < cols`.
    pub fn new(rows: usize, cols: usize, offset: isize) -> Result<Self> {
        check_offset(rows, cols, offset)?;
        Ok(Self {
            rows,
            cols,
            offset,
            layout: Layout::default(),
            data: vec![T::zero(); diagonal_length(rows, cols, offset)],
        })
    }

    /// Captures the `offset`-th diagonal of an existing matrix. Elements off
    /// that diagonal are discarded.
    pub fn from_matrix<M: MatrixRef<T>>(m: &M, offset: isize) -> Result<Self> {
        let (rows, cols) = m.shape();
        let mut out = Self::new(rows, cols, offset)?;
        for t in 0..out.data.len() {
            let (i, j) = out.position(t);
            out.data[t] = m.get(i, j);
        }
        Ok(out)
    }

    /// Builds the smallest matrix whose `offset`-th diagonal holds `v`.
    pub fn from_vector(v: &Vector<T>, offset: isize) -> Result<Self> {
        let below = offset.min(0).unsigned_abs();
        let above = offset.max(0) as usize;
        let mut out = Self::new(v.len() + below, v.len() + above, offset)?;
        out.data.copy_from_slice(v.as_slice());
        Ok(out)
    }

    /// Layout used when this container materializes dense results.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Signed diagonal offset.
    pub fn offset(&self) -> isize {
        self.offset
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of stored diagonal elements.
    pub fn diagonal_len(&self) -> usize {
        self.data.len()
    }

    /// The packed diagonal buffer.
    pub fn diagonal(&self) -> &[T] {
        &self.data
    }

    /// `(row, col)` of the `t`-th stored element.
    #[inline]
    fn position(&self, t: usize) -> (usize, usize) {
        let first_row = self.offset.min(0).unsigned_abs();
        let first_col = self.offset.max(0) as usize;
        (first_row + t, first_col + t)
    }

    #[inline]
    fn slot(&self, i: usize, j: usize) -> Option<usize> {
        if j as isize - i as isize == self.offset {
            Some(i.min(j))
        } else {
            None
        }
    }

    /// Element at `(i, j)`: the stored value on the diagonal, the structural
    /// zero everywhere else.
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        match self.slot(i, j) {
            Some(t) => self.data[t],
            None => T::zero(),
        }
    }

    /// Writes the element at `(i, j)`. Fails with `StructuralViolation` off
    /// the stored diagonal.
    pub fn set(&mut self, i: usize, j: usize, v: T) -> Result<()> {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        match self.slot(i, j) {
            Some(t) => {
                self.data[t] = v;
                Ok(())
            }
            None => Err(LinalgError::StructuralViolation { row: i, col: j }),
        }
    }

    /// Iterates the stored positions in increasing row order, yielding
    /// `(row, col, value)` with `col - row == offset` for every entry.
    pub fn row_iter(&self) -> DiagonalIter<'_, T> {
        DiagonalIter {
            matrix: self,
            next: 0,
        }
    }

    /// Iterates the stored positions in increasing column order. A single
    /// diagonal is ordered identically by rows and by columns, so this is
    /// the same sequence as [`Self::row_iter`].
    pub fn column_iter(&self) -> DiagonalIter<'_, T> {
        self.row_iter()
    }

    /// Transpose by value: shape `(cols, rows)`, offset `-offset`, no
    /// storage shared.
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            offset: -self.offset,
            layout: self.layout,
            data: self.data.clone(),
        }
    }

    /// Materializes the full matrix in this container's layout.
    pub fn to_dense(&self) -> Matrix<T> {
        let mut m = Matrix::zeros(self.rows, self.cols, self.layout);
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

    /// Sum with a dense matrix; structural zeros contribute zero. The result
    /// is dense and keeps `other`'s layout.
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
        let mut m = Matrix::zeros(self.rows, self.cols, other.layout());
        for (i, j, v) in self.row_iter() {
            m.set(i, j, v * other.get(i, j));
        }
        Ok(m)
    }

    /// Elementwise quotient `self ./ other`; dense result. Off-diagonal
    /// entries are `0 / other(i, j)`.
    pub fn elementwise_div(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_conforming(other)?;
        let mut m = Matrix::zeros(self.rows, self.cols, other.layout());
        for i in 0..self.rows {
            for j in 0..self.cols {
                m.set(i, j, self.get(i, j) / other.get(i, j));
            }
        }
        Ok(m)
    }

    /// The nonzero entries of the product `self * other` together with the
    /// result shape and offset. A product of single-diagonal matrices has a
    /// single nonzero diagonal at the summed offset.
    fn product_entries(&self, other: &Self) -> Result<(usize, usize, isize, Vec<(usize, usize, T)>)> {
        if self.cols != other.rows {
            return Err(LinalgError::shape_mismatch(self.shape(), other.shape()));
        }
        let offset = self.offset + other.offset;
        let mut entries = Vec::new();
        for (i, m, a) in self.row_iter() {
            // other is nonzero at (m, m + other.offset) only
            let j = m as isize + other.offset;
            if j >= 0 && (j as usize) < other.cols {
                let b = other.get(m, j as usize);
                entries.push((i, j as usize, a * b));
            }
        }
        Ok((self.rows, other.cols, offset, entries))
    }

    /// Product with another generalized diagonal matrix, materialized dense.
    /// The only nonzero diagonal of the result is `self.offset() +
    /// other.offset()`; use [`Self::mul_diag_into`] to keep the structure.
    pub fn mul_diag(&self, other: &Self) -> Result<Matrix<T>> {
        let (rows, cols, _, entries) = self.product_entries(other)?;
        let mut m = Matrix::zeros(rows, cols, self.layout);
        for (i, j, v) in entries {
            m.set(i, j, v);
        }
        Ok(m)
    }

    /// Product with another generalized diagonal matrix written into a
    /// pre-constructed structured result. The destination must have shape
    /// `(self.rows, other.cols)` and offset `self.offset() + other.offset()`.
    pub fn mul_diag_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        let (rows, cols, offset, entries) = self.product_entries(other)?;
        if out.shape() != (rows, cols) {
            return Err(LinalgError::shape_mismatch(out.shape(), (rows, cols)));
        }
        if out.offset != offset {
            return Err(LinalgError::invalid_shape(format!(
                "result offset {} does not equal the sum of the factor offsets {}",
                out.offset, offset
            )));
        }
        for v in out.data.iter_mut() {
            *v = T::zero();
        }
        for (i, j, v) in entries {
            out.set(i, j, v)?;
        }
        Ok(())
    }
}

impl<T: Scalar> MatrixRef<T> for GeneralizedDiagonalMatrix<T> {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_columns(&self) -> usize {
        self.cols
    }

    fn get(&self, i: usize, j: usize) -> T {
        GeneralizedDiagonalMatrix::get(self, i, j)
    }

    fn to_dense(&self) -> Matrix<T> {
        GeneralizedDiagonalMatrix::to_dense(self)
    }
}

/// Iterator over the stored diagonal positions of a
/// [`GeneralizedDiagonalMatrix`], in increasing row (equivalently column)
/// order.
pub struct DiagonalIter<'a, T> {
    matrix: &'a GeneralizedDiagonalMatrix<T>,
    next: usize,
}

impl<T: Scalar> Iterator for DiagonalIter<'_, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.matrix.data.len() {
            return None;
        }
        let t = self.next;
        self.next += 1;
        let (i, j) = self.matrix.position(t);
        Some((i, j, self.matrix.data[t]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.matrix.data.len() - self.next;
        (rem, Some(rem))
    }
}

impl<T: Scalar> ExactSizeIterator for DiagonalIter<'_, T> {}

/// Builds a generalized diagonal matrix whose `offset`-th diagonal holds `v`.
pub fn diag<T: Scalar>(v: &Vector<T>, offset: isize) -> Result<GeneralizedDiagonalMatrix<T>> {
    GeneralizedDiagonalMatrix::from_vector(v, offset)
}

/// Extracts the `offset`-th diagonal of any matrix-like container.
pub fn diag_of<T: Scalar, M: MatrixRef<T>>(m: &M, offset: isize) -> Result<Vector<T>> {
    let (rows, cols) = m.shape();
    check_offset(rows, cols, offset)?;
    let first_row = offset.min(0).unsigned_abs();
    let first_col = offset.max(0) as usize;
    let len = diagonal_length(rows, cols, offset);
    Ok(Vector::from_vec(
        (0..len).map(|t| m.get(first_row + t, first_col + t)).collect(),
    ))
}
