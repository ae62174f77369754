//! Dense matrix and vector containers backed by `Vec`.

use num_traits::{Float, One, Zero};

use crate::error::{LinalgError, Result};
use crate::layout::Layout;
use crate::scalar::Scalar;
use crate::traits::MatrixRef;

/// Dense `rows x cols` matrix with a fixed memory layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    layout: Layout,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize, layout: Layout) -> Self {
        Self {
            rows,
            cols,
            layout,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Identity matrix of order `n`.
    pub fn identity(n: usize, layout: Layout) -> Self {
        let mut m = Self::zeros(n, n, layout);
        for i in 0..n {
            m.set(i, i, T::one());
        }
        m
    }

    /// Matrix over an existing flat buffer. The buffer length must equal
    /// `rows * cols`; elements are interpreted according to `layout`.
    pub fn from_vec(rows: usize, cols: usize, layout: Layout, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "buffer length must equal rows * cols"
        );
        Self {
            rows,
            cols,
            layout,
            data,
        }
    }

    /// Matrix from a row-of-rows literal. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<T>], layout: Layout) -> Self {
        let nr = rows.len();
        let nc = if nr > 0 { rows[0].len() } else { 0 };
        let mut m = Self::zeros(nr, nc, layout);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), nc, "all rows must have the same length");
            for (j, &v) in row.iter().enumerate() {
                m.set(i, j, v);
            }
        }
        m
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[self.layout.index(i, j, self.rows, self.cols)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, v: T) {
        let idx = self.layout.index(i, j, self.rows, self.cols);
        self.data[idx] = v;
    }

    /// Same logical matrix re-stored in `layout`.
    pub fn to_layout(&self, layout: Layout) -> Self {
        if layout == self.layout {
            return self.clone();
        }
        let mut m = Self::zeros(self.rows, self.cols, layout);
        for i in 0..self.rows {
            for j in 0..self.cols {
                m.set(i, j, self.get(i, j));
            }
        }
        m
    }

    /// Transpose by value; keeps the layout tag.
    pub fn transpose(&self) -> Self {
        let mut m = Self::zeros(self.cols, self.rows, self.layout);
        for i in 0..self.rows {
            for j in 0..self.cols {
                m.set(j, i, self.get(i, j));
            }
        }
        m
    }

    /// Conjugate transpose by value.
    pub fn conj_transpose(&self) -> Self {
        let mut m = Self::zeros(self.cols, self.rows, self.layout);
        for i in 0..self.rows {
            for j in 0..self.cols {
                m.set(j, i, self.get(i, j).conj());
            }
        }
        m
    }

    /// Elementwise sum. Fails with `ShapeMismatch` on non-conforming shapes.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(LinalgError::shape_mismatch(self.shape(), other.shape()));
        }
        let mut m = Self::zeros(self.rows, self.cols, self.layout);
        for i in 0..self.rows {
            for j in 0..self.cols {
                m.set(i, j, f(self.get(i, j), other.get(i, j)));
            }
        }
        Ok(m)
    }

    /// Matrix product `self * other`. The result keeps `self`'s layout.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinalgError::shape_mismatch(self.shape(), other.shape()));
        }
        let mut m = Self::zeros(self.rows, other.cols, self.layout);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc = acc + self.get(i, k) * other.get(k, j);
                }
                m.set(i, j, acc);
            }
        }
        Ok(m)
    }

    /// Scalar multiple.
    pub fn scale(&self, s: T) -> Self {
        let mut m = self.clone();
        for v in m.data.iter_mut() {
            *v = *v * s;
        }
        m
    }

    /// Scales column `j` by `factors[j]`; used to form `M * diag(f)`.
    pub fn scale_columns(&self, factors: &[T]) -> Result<Self> {
        if factors.len() != self.cols {
            return Err(LinalgError::shape_mismatch(
                self.shape(),
                (factors.len(), factors.len()),
            ));
        }
        let mut m = self.clone();
        for j in 0..self.cols {
            for i in 0..self.rows {
                m.set(i, j, self.get(i, j) * factors[j]);
            }
        }
        Ok(m)
    }

    /// Scales row `i` by `factors[i]`; used to form `diag(f) * M`.
    pub fn scale_rows(&self, factors: &[T]) -> Result<Self> {
        if factors.len() != self.rows {
            return Err(LinalgError::shape_mismatch(
                self.shape(),
                (factors.len(), factors.len()),
            ));
        }
        let mut m = self.clone();
        for i in 0..self.rows {
            for j in 0..self.cols {
                m.set(i, j, self.get(i, j) * factors[i]);
            }
        }
        Ok(m)
    }

    /// Column `j` as an owned vector.
    pub fn column(&self, j: usize) -> Vector<T> {
        Vector::from_vec((0..self.rows).map(|i| self.get(i, j)).collect())
    }

    /// Elementwise map, possibly changing the element type. Keeps the layout.
    pub fn map<U: Scalar>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        let mut m = Matrix::zeros(self.rows, self.cols, self.layout);
        for i in 0..self.rows {
            for j in 0..self.cols {
                m.set(i, j, f(self.get(i, j)));
            }
        }
        m
    }

    /// Frobenius norm.
    pub fn frobenius_norm(&self) -> T::Real {
        let mut acc = T::Real::zero();
        for v in &self.data {
            acc = acc + v.modulus_sq();
        }
        acc.sqrt()
    }

    /// Largest elementwise modulus.
    pub fn max_abs(&self) -> T::Real {
        let mut acc = T::Real::zero();
        for v in &self.data {
            let m = v.modulus();
            if m > acc {
                acc = m;
            }
        }
        acc
    }
}

impl<T: Scalar> std::ops::Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: [usize; 2]) -> &T {
        &self.data[self.layout.index(idx[0], idx[1], self.rows, self.cols)]
    }
}

impl<T: Scalar> std::ops::IndexMut<[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, idx: [usize; 2]) -> &mut T {
        let flat = self.layout.index(idx[0], idx[1], self.rows, self.cols);
        &mut self.data[flat]
    }
}

impl<T: Scalar> MatrixRef<T> for Matrix<T> {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_columns(&self) -> usize {
        self.cols
    }

    fn get(&self, i: usize, j: usize) -> T {
        Matrix::get(self, i, j)
    }

    fn to_dense(&self) -> Matrix<T> {
        self.clone()
    }
}

/// Dense vector backed by `Vec`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn map<U: Scalar>(&self, f: impl Fn(T) -> U) -> Vector<U> {
        Vector::from_vec(self.data.iter().map(|&v| f(v)).collect())
    }

    /// Euclidean norm.
    pub fn norm2(&self) -> T::Real {
        let mut acc = T::Real::zero();
        for v in &self.data {
            acc = acc + v.modulus_sq();
        }
        acc.sqrt()
    }
}

impl<T> std::ops::Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> std::ops::IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}
