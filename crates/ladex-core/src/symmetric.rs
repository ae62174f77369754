//! Symmetric and Hermitian containers storing the upper triangle only.
//!
//! Reads below the diagonal mirror (and conjugate) the stored triangle;
//! writes below the diagonal store into the mirrored slot. The packed order
//! is column-wise over the upper triangle: element `(i, j)` with `i <= j`
//! lives at `i + j(j+1)/2`.

use num_traits::Zero;

use crate::dense::Matrix;
use crate::error::{LinalgError, Result};
use crate::layout::Layout;
use crate::scalar::{ComplexScalar, RealScalar, Scalar};
use crate::traits::MatrixRef;

#[inline]
fn packed_index(i: usize, j: usize) -> usize {
    debug_assert!(i <= j);
    i + j * (j + 1) / 2
}

/// Real symmetric matrix of order `n`, upper triangle stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricMatrix<T: RealScalar> {
    n: usize,
    layout: Layout,
    upper: Vec<T>,
}

impl<T: RealScalar> SymmetricMatrix<T> {
    pub fn zeros(n: usize, layout: Layout) -> Self {
        Self {
            n,
            layout,
            upper: vec![T::zero(); n * (n + 1) / 2],
        }
    }

    /// Captures a dense matrix, validating symmetry.
    pub fn from_dense(m: &Matrix<T>) -> Result<Self> {
        let (rows, cols) = m.shape();
        if rows != cols {
            return Err(LinalgError::NotSquare { rows, cols });
        }
        let mut s = Self::zeros(rows, m.layout());
        for j in 0..rows {
            for i in 0..=j {
                if m.get(j, i) != m.get(i, j) {
                    return Err(LinalgError::NotHermitian {
                        expected: "symmetric",
                    });
                }
                s.upper[packed_index(i, j)] = m.get(i, j);
            }
        }
        Ok(s)
    }

    /// Order of the matrix.
    pub fn order(&self) -> usize {
        self.n
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.n && j < self.n, "index out of bounds");
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        self.upper[packed_index(lo, hi)]
    }

    /// Writes `(i, j)` and, implicitly, `(j, i)`.
    pub fn set(&mut self, i: usize, j: usize, v: T) {
        assert!(i < self.n && j < self.n, "index out of bounds");
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        self.upper[packed_index(lo, hi)] = v;
    }

    pub fn to_dense(&self) -> Matrix<T> {
        let mut m = Matrix::zeros(self.n, self.n, self.layout);
        for i in 0..self.n {
            for j in 0..self.n {
                m.set(i, j, self.get(i, j));
            }
        }
        m
    }
}

impl<T: RealScalar> MatrixRef<T> for SymmetricMatrix<T> {
    fn num_rows(&self) -> usize {
        self.n
    }

    fn num_columns(&self) -> usize {
        self.n
    }

    fn get(&self, i: usize, j: usize) -> T {
        SymmetricMatrix::get(self, i, j)
    }

    fn to_dense(&self) -> Matrix<T> {
        SymmetricMatrix::to_dense(self)
    }
}

/// Complex Hermitian matrix of order `n`, upper triangle stored.
///
/// Reads at `(i, j)` with `i > j` return the conjugate of the stored
/// `(j, i)` element. Diagonal entries must be real.
#[derive(Debug, Clone, PartialEq)]
pub struct HermitianMatrix<T: ComplexScalar> {
    n: usize,
    layout: Layout,
    upper: Vec<T>,
}

impl<T: ComplexScalar> HermitianMatrix<T> {
    pub fn zeros(n: usize, layout: Layout) -> Self {
        Self {
            n,
            layout,
            upper: vec![T::zero(); n * (n + 1) / 2],
        }
    }

    /// Captures a dense matrix, validating that it equals its conjugate
    /// transpose.
    pub fn from_dense(m: &Matrix<T>) -> Result<Self> {
        let (rows, cols) = m.shape();
        if rows != cols {
            return Err(LinalgError::NotSquare { rows, cols });
        }
        let mut h = Self::zeros(rows, m.layout());
        for j in 0..rows {
            for i in 0..=j {
                if m.get(j, i) != m.get(i, j).conj() {
                    return Err(LinalgError::NotHermitian {
                        expected: "Hermitian",
                    });
                }
                h.upper[packed_index(i, j)] = m.get(i, j);
            }
        }
        Ok(h)
    }

    pub fn order(&self) -> usize {
        self.n
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.n && j < self.n, "index out of bounds");
        if i <= j {
            self.upper[packed_index(i, j)]
        } else {
            self.upper[packed_index(j, i)].conj()
        }
    }

    /// Writes `(i, j)` and, implicitly, the conjugate at `(j, i)`. A
    /// diagonal write with a nonzero imaginary part fails with
    /// `NotHermitian`.
    pub fn set(&mut self, i: usize, j: usize, v: T) -> Result<()> {
        assert!(i < self.n && j < self.n, "index out of bounds");
        if i == j && v.im() != <T as Scalar>::Real::zero() {
            return Err(LinalgError::NotHermitian {
                expected: "Hermitian",
            });
        }
        if i <= j {
            self.upper[packed_index(i, j)] = v;
        } else {
            self.upper[packed_index(j, i)] = v.conj();
        }
        Ok(())
    }

    pub fn to_dense(&self) -> Matrix<T> {
        let mut m = Matrix::zeros(self.n, self.n, self.layout);
        for i in 0..self.n {
            for j in 0..self.n {
                m.set(i, j, self.get(i, j));
            }
        }
        m
    }
}

impl<T: ComplexScalar> MatrixRef<T> for HermitianMatrix<T> {
    fn num_rows(&self) -> usize {
        self.n
    }

    fn num_columns(&self) -> usize {
        self.n
    }

    fn get(&self, i: usize, j: usize) -> T {
        HermitianMatrix::get(self, i, j)
    }

    fn to_dense(&self) -> Matrix<T> {
        HermitianMatrix::to_dense(self)
    }
}
