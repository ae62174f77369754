//! Eigendecomposition facades for single matrices and matrix pairs.
//!
//! Dispatch is static: general matrices go through geev/ggev and report
//! fully complex eigenvalues and eigenvectors; the structured overloads for
//! [`SymmetricMatrix`] and [`HermitianMatrix`] go through syev/heev (and
//! sygv/hegv for definite pairs) and report real eigenvalues in ascending
//! order with orthonormal eigenvectors.

use ladex_core::dense::{Matrix, Vector};
use ladex_core::error::Result;
use ladex_core::scalar::{ComplexScalar, RealScalar, Scalar};
use ladex_core::symmetric::{HermitianMatrix, SymmetricMatrix};
use ladex_lapack::{marshal, Lapack};
use num_complex::Complex;
use num_traits::{Float, Zero};

use crate::validate::{require_same_order, require_square};

/// Eigenvalues and both eigenvector sets of a general matrix.
pub struct Eigen<T: Lapack> {
    pub values: Vector<Complex<T::Real>>,
    /// Columns are the left eigenvectors: `u^H A = w u^H`.
    pub left: Matrix<Complex<T::Real>>,
    /// Columns are the right eigenvectors: `A v = w v`.
    pub right: Matrix<Complex<T::Real>>,
}

/// Eigendata of a general matrix pair `(A, B)`.
///
/// Columns `v` of `right` satisfy `beta * A v = alpha * B v`; columns `u`
/// of `left` satisfy `beta * u^H A = alpha * u^H B`. Eigenvectors are
/// normalized to unit Euclidean norm.
pub struct GeneralizedEigen<T: Lapack> {
    pub alpha: Vector<Complex<T::Real>>,
    pub beta: Vector<T::Beta>,
    /// `alpha / beta`, with infinity encoding `beta == 0`.
    pub values: Vector<Complex<T::Real>>,
    pub left: Matrix<Complex<T::Real>>,
    pub right: Matrix<Complex<T::Real>>,
}

/// Eigenvalues of a general real or complex matrix.
pub fn eigenvalues<T: Lapack>(a: &Matrix<T>) -> Result<Vector<Complex<T::Real>>> {
    let n = require_square(a)?;
    if n == 0 {
        return Ok(Vector::from_vec(Vec::new()));
    }
    let out = T::eig(n, marshal::to_col_major(a), false, false)?;
    Ok(Vector::from_vec(out.values))
}

/// Eigenvalues together with left and right eigenvectors.
pub fn eigen<T: Lapack>(a: &Matrix<T>) -> Result<Eigen<T>> {
    let n = require_square(a)?;
    if n == 0 {
        return Ok(Eigen {
            values: Vector::from_vec(Vec::new()),
            left: Matrix::zeros(0, 0, a.layout()),
            right: Matrix::zeros(0, 0, a.layout()),
        });
    }
    let out = T::eig(n, marshal::to_col_major(a), true, true)?;
    let left = expand(n, &out.values, out.left.as_deref().unwrap_or(&[]), a)?;
    let right = expand(n, &out.values, out.right.as_deref().unwrap_or(&[]), a)?;
    Ok(Eigen {
        values: Vector::from_vec(out.values),
        left,
        right,
    })
}

/// Eigenvalues and right eigenvectors only.
pub fn right_eigen<T: Lapack>(
    a: &Matrix<T>,
) -> Result<(Vector<Complex<T::Real>>, Matrix<Complex<T::Real>>)> {
    let n = require_square(a)?;
    if n == 0 {
        return Ok((Vector::from_vec(Vec::new()), Matrix::zeros(0, 0, a.layout())));
    }
    let out = T::eig(n, marshal::to_col_major(a), false, true)?;
    let right = expand(n, &out.values, out.right.as_deref().unwrap_or(&[]), a)?;
    Ok((Vector::from_vec(out.values), right))
}

/// Eigenvalues and left eigenvectors only.
pub fn left_eigen<T: Lapack>(
    a: &Matrix<T>,
) -> Result<(Vector<Complex<T::Real>>, Matrix<Complex<T::Real>>)> {
    let n = require_square(a)?;
    if n == 0 {
        return Ok((Vector::from_vec(Vec::new()), Matrix::zeros(0, 0, a.layout())));
    }
    let out = T::eig(n, marshal::to_col_major(a), true, false)?;
    let left = expand(n, &out.values, out.left.as_deref().unwrap_or(&[]), a)?;
    Ok((Vector::from_vec(out.values), left))
}

fn expand<T: Lapack>(
    n: usize,
    values: &[Complex<T::Real>],
    packed: &[T],
    reference: &Matrix<T>,
) -> Result<Matrix<Complex<T::Real>>> {
    let data = T::expand_eigenvectors(n, values, packed);
    Ok(marshal::from_col_major(n, n, reference.layout(), data))
}

/// Eigenvalues of a real symmetric matrix, ascending.
pub fn sym_eigenvalues<T>(a: &SymmetricMatrix<T>) -> Result<Vector<T>>
where
    T: RealScalar + Lapack<Real = T>,
{
    let n = a.order();
    if n == 0 {
        return Ok(Vector::from_vec(Vec::new()));
    }
    let (w, _) = T::eigh(n, marshal::to_col_major(&a.to_dense()), false)?;
    Ok(Vector::from_vec(w))
}

/// Ascending eigenvalues and orthonormal eigenvectors of a real symmetric
/// matrix.
pub fn sym_eigen<T>(a: &SymmetricMatrix<T>) -> Result<(Vector<T>, Matrix<T>)>
where
    T: RealScalar + Lapack<Real = T>,
{
    let n = a.order();
    if n == 0 {
        return Ok((Vector::from_vec(Vec::new()), Matrix::zeros(0, 0, a.layout())));
    }
    let (w, v) = T::eigh(n, marshal::to_col_major(&a.to_dense()), true)?;
    let vectors = marshal::from_col_major(n, n, a.layout(), v.unwrap_or_default());
    Ok((Vector::from_vec(w), vectors))
}

/// Eigenvalues of a complex Hermitian matrix, ascending and real.
pub fn herm_eigenvalues<T>(a: &HermitianMatrix<T>) -> Result<Vector<T::Real>>
where
    T: ComplexScalar + Lapack,
{
    let n = a.order();
    if n == 0 {
        return Ok(Vector::from_vec(Vec::new()));
    }
    let (w, _) = T::eigh(n, marshal::to_col_major(&a.to_dense()), false)?;
    Ok(Vector::from_vec(w))
}

/// Ascending real eigenvalues and orthonormal eigenvectors of a complex
/// Hermitian matrix.
pub fn herm_eigen<T>(a: &HermitianMatrix<T>) -> Result<(Vector<T::Real>, Matrix<T>)>
where
    T: ComplexScalar + Lapack,
{
    let n = a.order();
    if n == 0 {
        return Ok((Vector::from_vec(Vec::new()), Matrix::zeros(0, 0, a.layout())));
    }
    let (w, v) = T::eigh(n, marshal::to_col_major(&a.to_dense()), true)?;
    let vectors = marshal::from_col_major(n, n, a.layout(), v.unwrap_or_default());
    Ok((Vector::from_vec(w), vectors))
}

/// Generalized eigenvalues `alpha / beta` of a general pair `(A, B)`.
pub fn generalized_eigenvalues<T: Lapack>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Vector<Complex<T::Real>>> {
    let n = require_square(a)?;
    require_square(b)?;
    crate::validate::require_same_shape(a, b)?;
    if n == 0 {
        return Ok(Vector::from_vec(Vec::new()));
    }
    let out = T::eig_pair(
        n,
        marshal::to_col_major(a),
        marshal::to_col_major(b),
        false,
        false,
    )?;
    Ok(Vector::from_vec(
        out.alpha
            .iter()
            .zip(out.beta.iter())
            .map(|(&al, &be)| T::gen_eigenvalue(al, be))
            .collect(),
    ))
}

/// Full generalized eigendata of a general pair `(A, B)`.
pub fn generalized_eigen<T: Lapack>(a: &Matrix<T>, b: &Matrix<T>) -> Result<GeneralizedEigen<T>> {
    let n = require_square(a)?;
    require_square(b)?;
    crate::validate::require_same_shape(a, b)?;
    if n == 0 {
        return Ok(GeneralizedEigen {
            alpha: Vector::from_vec(Vec::new()),
            beta: Vector::from_vec(Vec::new()),
            values: Vector::from_vec(Vec::new()),
            left: Matrix::zeros(0, 0, a.layout()),
            right: Matrix::zeros(0, 0, a.layout()),
        });
    }
    let out = T::eig_pair(
        n,
        marshal::to_col_major(a),
        marshal::to_col_major(b),
        true,
        true,
    )?;
    let mut left = expand(n, &out.alpha, out.left.as_deref().unwrap_or(&[]), a)?;
    let mut right = expand(n, &out.alpha, out.right.as_deref().unwrap_or(&[]), a)?;
    normalize_columns(&mut left);
    normalize_columns(&mut right);
    let values = out
        .alpha
        .iter()
        .zip(out.beta.iter())
        .map(|(&al, &be)| T::gen_eigenvalue(al, be))
        .collect();
    Ok(GeneralizedEigen {
        alpha: Vector::from_vec(out.alpha),
        beta: Vector::from_vec(out.beta),
        values: Vector::from_vec(values),
        left,
        right,
    })
}

/// Generalized eigenvalues and right eigenvectors of a general pair:
/// columns `v` satisfy `beta * A v = alpha * B v`.
pub fn generalized_right_eigen<T: Lapack>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<(Vector<Complex<T::Real>>, Matrix<Complex<T::Real>>)> {
    let n = require_square(a)?;
    require_square(b)?;
    crate::validate::require_same_shape(a, b)?;
    if n == 0 {
        return Ok((Vector::from_vec(Vec::new()), Matrix::zeros(0, 0, a.layout())));
    }
    let out = T::eig_pair(
        n,
        marshal::to_col_major(a),
        marshal::to_col_major(b),
        false,
        true,
    )?;
    let mut right = expand(n, &out.alpha, out.right.as_deref().unwrap_or(&[]), a)?;
    normalize_columns(&mut right);
    let values = out
        .alpha
        .iter()
        .zip(out.beta.iter())
        .map(|(&al, &be)| T::gen_eigenvalue(al, be))
        .collect();
    Ok((Vector::from_vec(values), right))
}

/// Generalized eigenvalues and left eigenvectors of a general pair:
/// columns `u` satisfy `beta * u^H A = alpha * u^H B`.
pub fn generalized_left_eigen<T: Lapack>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<(Vector<Complex<T::Real>>, Matrix<Complex<T::Real>>)> {
    let n = require_square(a)?;
    require_square(b)?;
    crate::validate::require_same_shape(a, b)?;
    if n == 0 {
        return Ok((Vector::from_vec(Vec::new()), Matrix::zeros(0, 0, a.layout())));
    }
    let out = T::eig_pair(
        n,
        marshal::to_col_major(a),
        marshal::to_col_major(b),
        true,
        false,
    )?;
    let mut left = expand(n, &out.alpha, out.left.as_deref().unwrap_or(&[]), a)?;
    normalize_columns(&mut left);
    let values = out
        .alpha
        .iter()
        .zip(out.beta.iter())
        .map(|(&al, &be)| T::gen_eigenvalue(al, be))
        .collect();
    Ok((Vector::from_vec(values), left))
}

/// Ascending eigenvalues and eigenvectors of the symmetric-definite pair
/// `A v = w B v`; `b` must be positive definite.
pub fn sym_generalized_eigen<T>(
    a: &SymmetricMatrix<T>,
    b: &SymmetricMatrix<T>,
) -> Result<(Vector<T>, Matrix<T>)>
where
    T: RealScalar + Lapack<Real = T>,
{
    let n = require_same_order(a.order(), b.order())?;
    if n == 0 {
        return Ok((Vector::from_vec(Vec::new()), Matrix::zeros(0, 0, a.layout())));
    }
    let (w, v) = T::eigh_pair(
        n,
        marshal::to_col_major(&a.to_dense()),
        marshal::to_col_major(&b.to_dense()),
        true,
    )?;
    let vectors = marshal::from_col_major(n, n, a.layout(), v.unwrap_or_default());
    Ok((Vector::from_vec(w), vectors))
}

/// Ascending eigenvalues and eigenvectors of the Hermitian-definite pair
/// `A v = w B v`; `b` must be positive definite.
pub fn herm_generalized_eigen<T>(
    a: &HermitianMatrix<T>,
    b: &HermitianMatrix<T>,
) -> Result<(Vector<T::Real>, Matrix<T>)>
where
    T: ComplexScalar + Lapack,
{
    let n = require_same_order(a.order(), b.order())?;
    if n == 0 {
        return Ok((Vector::from_vec(Vec::new()), Matrix::zeros(0, 0, a.layout())));
    }
    let (w, v) = T::eigh_pair(
        n,
        marshal::to_col_major(&a.to_dense()),
        marshal::to_col_major(&b.to_dense()),
        true,
    )?;
    let vectors = marshal::from_col_major(n, n, a.layout(), v.unwrap_or_default());
    Ok((Vector::from_vec(w), vectors))
}

/// Rescales every column of a complex matrix to unit Euclidean norm.
/// Zero columns are left untouched.
pub(crate) fn normalize_columns<R: RealScalar>(m: &mut Matrix<Complex<R>>)
where
    Complex<R>: Scalar<Real = R>,
{
    let (rows, cols) = m.shape();
    for j in 0..cols {
        let mut acc = R::zero();
        for i in 0..rows {
            acc = acc + m.get(i, j).modulus_sq();
        }
        let norm = acc.sqrt();
        if norm > R::zero() {
            for i in 0..rows {
                let v = m.get(i, j);
                m.set(i, j, Complex::new(v.re / norm, v.im / norm));
            }
        }
    }
}
