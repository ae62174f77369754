//! Singular value decomposition facade.
//!
//! `svd_decompose` factors `A = U S V^H` with the singular values stored as
//! a main-diagonal [`GeneralizedDiagonalMatrix`], non-negative and
//! non-increasing. `SvdForm` picks the full square factors or the thin
//! `min(m, n)` ones.

use ladex_core::dense::{Matrix, Vector};
use ladex_core::error::{LinalgError, Result};
use ladex_core::gendiag::GeneralizedDiagonalMatrix;
use ladex_core::scalar::Scalar;
use ladex_lapack::{marshal, Lapack, SvdMode};

/// Full or thin factor shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvdForm {
    /// `U` is `m x m`, `V^H` is `n x n`.
    Full,
    /// `U` is `m x min(m, n)`, `V^H` is `min(m, n) x n`.
    Thin,
}

impl SvdForm {
    fn mode(self) -> SvdMode {
        match self {
            SvdForm::Full => SvdMode::Full,
            SvdForm::Thin => SvdMode::Thin,
        }
    }
}

fn require_nonempty<T: Scalar>(a: &Matrix<T>) -> Result<(usize, usize)> {
    let (m, n) = a.shape();
    if m == 0 || n == 0 {
        return Err(LinalgError::invalid_shape(format!(
            "singular value decomposition of an empty {m}x{n} matrix"
        )));
    }
    Ok((m, n))
}

/// Singular values of `a`, non-negative and non-increasing, length
/// `min(m, n)`.
pub fn singular_values<T: Lapack>(a: &Matrix<T>) -> Result<Vector<T::Real>> {
    let (m, n) = require_nonempty(a)?;
    let out = T::svd(m, n, marshal::to_col_major(a), SvdMode::Values)?;
    Ok(Vector::from_vec(out.singular))
}

/// Factors `a = U S V^H`. Returns `(U, S, V^H)` with `S` held as a
/// main-diagonal structured matrix over the real scalar type.
pub fn svd_decompose<T: Lapack>(
    a: &Matrix<T>,
    form: SvdForm,
) -> Result<(Matrix<T>, GeneralizedDiagonalMatrix<T::Real>, Matrix<T>)> {
    let (m, n) = require_nonempty(a)?;
    let layout = a.layout();
    let out = T::svd(m, n, marshal::to_col_major(a), form.mode())?;
    let u = marshal::from_col_major(m, out.u_cols, layout, out.u.unwrap_or_default());
    let vh = marshal::from_col_major(out.vt_rows, n, layout, out.vt.unwrap_or_default());
    let s = GeneralizedDiagonalMatrix::from_vector(&Vector::from_vec(out.singular), 0)?
        .with_layout(layout);
    Ok((u, s, vh))
}

/// Singular value decomposition held as an object.
pub struct Svd<T: Lapack> {
    u: Matrix<T>,
    s: GeneralizedDiagonalMatrix<T::Real>,
    vh: Matrix<T>,
}

impl<T: Lapack> Svd<T> {
    /// Decomposes `a` with the requested factor shapes.
    pub fn compute(a: &Matrix<T>, form: SvdForm) -> Result<Self> {
        let (u, s, vh) = svd_decompose(a, form)?;
        Ok(Self { u, s, vh })
    }

    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// The diagonal factor.
    pub fn s(&self) -> &GeneralizedDiagonalMatrix<T::Real> {
        &self.s
    }

    /// The singular values, non-increasing.
    pub fn singular_values(&self) -> Vector<T::Real> {
        Vector::from_vec(self.s.diagonal().to_vec())
    }

    /// `V^H` as produced by the decomposition.
    pub fn vh(&self) -> &Matrix<T> {
        &self.vh
    }

    /// `V`, materialized as the conjugate transpose of `V^H`.
    pub fn v(&self) -> Matrix<T> {
        self.vh.conj_transpose()
    }
}
