//! Generalized Schur (QZ) decomposition with eigenvalue reordering.
//!
//! `qz_decompose` factors a square pair `(A, B)` into `(S, T, Q, Z)` with
//! `Q S Z^H = A` and `Q T Z^H = B`. For real element types `S` is
//! quasi-upper-triangular (2x2 diagonal blocks carry complex conjugate
//! pairs) and `T` is upper triangular with non-negative diagonal; for
//! complex element types both factors are upper triangular.
//!
//! Reordering moves a selected subset of the generalized eigenvalues into
//! the leading principal block, either by an explicit boolean mask or by a
//! region of the complex plane. A real 2x2 block is never split: selecting
//! either member of a conjugate pair selects both.

use ladex_core::dense::{Matrix, Vector};
use ladex_core::error::{LinalgError, Result};
use ladex_core::scalar::Scalar;
use ladex_lapack::{marshal, Lapack};
use num_complex::Complex;
use num_traits::{One, Zero};

use crate::eigen::normalize_columns;
use crate::validate::{require_same_shape, require_square};

/// Region of the complex plane used to select generalized eigenvalues.
///
/// Predicates are strict and operate on `lambda = alpha / beta`. An
/// infinite eigenvalue (`beta == 0`, `alpha != 0`) lies outside the unit
/// disk and in neither half-plane; an undetermined eigenvalue
/// (`alpha == beta == 0`) is never selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EigenvalueRegion {
    /// `Re(lambda) < 0`.
    LeftHalfPlane,
    /// `Re(lambda) > 0`.
    RightHalfPlane,
    /// `|lambda| < 1`.
    InsideUnitDisk,
    /// `|lambda| > 1`.
    OutsideUnitDisk,
    /// No reordering.
    All,
}

impl EigenvalueRegion {
    /// Whether the eigenvalue `(alpha, beta)` lies in the region.
    pub fn selects<T: Lapack>(self, alpha: Complex<T::Real>, beta: T::Beta) -> bool {
        if self == EigenvalueRegion::All {
            return true;
        }
        let alpha_zero = alpha.re == T::Real::zero() && alpha.im == T::Real::zero();
        if T::beta_is_zero(beta) {
            // infinite if alpha != 0, undetermined otherwise
            return !alpha_zero && self == EigenvalueRegion::OutsideUnitDisk;
        }
        let lambda = T::gen_eigenvalue(alpha, beta);
        match self {
            EigenvalueRegion::LeftHalfPlane => lambda.re < T::Real::zero(),
            EigenvalueRegion::RightHalfPlane => lambda.re > T::Real::zero(),
            EigenvalueRegion::InsideUnitDisk => lambda.norm_sqr() < T::Real::one(),
            EigenvalueRegion::OutsideUnitDisk => lambda.norm_sqr() > T::Real::one(),
            EigenvalueRegion::All => true,
        }
    }
}

/// Factors and eigenvalue data of a generalized Schur decomposition.
#[derive(Debug, Clone)]
pub struct QzFactors<T: Lapack> {
    pub s: Matrix<T>,
    pub t: Matrix<T>,
    pub q: Matrix<T>,
    pub z: Matrix<T>,
    pub alpha: Vector<Complex<T::Real>>,
    pub beta: Vector<T::Beta>,
}

impl<T: Lapack> QzFactors<T> {
    /// Order of the decomposed pair.
    pub fn order(&self) -> usize {
        self.s.num_rows()
    }

    /// Generalized eigenvalues `alpha / beta`, with infinity where
    /// `beta == 0`.
    pub fn eigenvalues(&self) -> Vector<Complex<T::Real>> {
        Vector::from_vec(
            self.alpha
                .iter()
                .zip(self.beta.iter())
                .map(|(&al, &be)| T::gen_eigenvalue(al, be))
                .collect(),
        )
    }

    /// Per-position selection mask for `region`, with conjugate pairs
    /// coerced to a single decision.
    pub fn region_selection(&self, region: EigenvalueRegion) -> Vec<bool> {
        let mut select: Vec<bool> = self
            .alpha
            .iter()
            .zip(self.beta.iter())
            .map(|(&al, &be)| region.selects::<T>(al, be))
            .collect();
        coerce_pairs(&self.s, &mut select);
        select
    }
}

/// Decomposes a square pair `(A, B)` into `(S, T, Q, Z)`.
pub fn qz_decompose<T: Lapack>(a: &Matrix<T>, b: &Matrix<T>) -> Result<QzFactors<T>> {
    let n = require_square(a)?;
    require_square(b)?;
    require_same_shape(a, b)?;
    if n == 0 {
        return Ok(QzFactors {
            s: Matrix::zeros(0, 0, a.layout()),
            t: Matrix::zeros(0, 0, a.layout()),
            q: Matrix::zeros(0, 0, a.layout()),
            z: Matrix::zeros(0, 0, a.layout()),
            alpha: Vector::from_vec(Vec::new()),
            beta: Vector::from_vec(Vec::new()),
        });
    }
    let out = T::qz(n, marshal::to_col_major(a), marshal::to_col_major(b))?;
    let layout = a.layout();
    Ok(QzFactors {
        s: marshal::from_col_major(n, n, layout, out.s),
        t: marshal::from_col_major(n, n, layout, out.t),
        q: marshal::from_col_major(n, n, layout, out.q),
        z: marshal::from_col_major(n, n, layout, out.z),
        alpha: Vector::from_vec(out.alpha),
        beta: Vector::from_vec(out.beta),
    })
}

/// Decomposes and reorders so that every generalized eigenvalue inside
/// `region` occupies the leading principal block.
pub fn qz_decompose_region<T: Lapack>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    region: EigenvalueRegion,
) -> Result<QzFactors<T>> {
    let factors = qz_decompose(a, b)?;
    if region == EigenvalueRegion::All || factors.order() == 0 {
        return Ok(factors);
    }
    let select = factors.region_selection(region);
    qz_reorder(&factors, &select)
}

/// Reorders a decomposition by an explicit boolean selection. Selected
/// eigenvalues move to the leading block keeping their relative order;
/// unselected eigenvalues keep theirs in the trailing block. Either member
/// of a real conjugate pair selects the whole pair.
pub fn qz_reorder<T: Lapack>(factors: &QzFactors<T>, select: &[bool]) -> Result<QzFactors<T>> {
    let n = factors.order();
    if select.len() != n {
        return Err(LinalgError::invalid_shape(format!(
            "selection mask has length {}, expected one entry per eigenvalue ({n})",
            select.len()
        )));
    }
    let mut select = select.to_vec();
    coerce_pairs(&factors.s, &mut select);

    let mut s = marshal::to_col_major(&factors.s);
    let mut t = marshal::to_col_major(&factors.t);
    let mut q = marshal::to_col_major(&factors.q);
    let mut z = marshal::to_col_major(&factors.z);
    let (alpha, beta) = T::qz_reorder(n, &mut s, &mut t, &mut q, &mut z, &select)?;
    let layout = factors.s.layout();
    Ok(QzFactors {
        s: marshal::from_col_major(n, n, layout, s),
        t: marshal::from_col_major(n, n, layout, t),
        q: marshal::from_col_major(n, n, layout, q),
        z: marshal::from_col_major(n, n, layout, z),
        alpha: Vector::from_vec(alpha),
        beta: Vector::from_vec(beta),
    })
}

/// Forces a single decision per real 2x2 diagonal block: if either member
/// of a conjugate pair is selected, both are. Complex element types have no
/// 2x2 blocks and are left untouched.
fn coerce_pairs<T: Lapack>(s: &Matrix<T>, select: &mut [bool]) {
    if T::COMPLEX {
        return;
    }
    let n = s.num_rows();
    let mut i = 0;
    while i + 1 < n {
        if s.get(i + 1, i) != T::zero() {
            let both = select[i] || select[i + 1];
            select[i] = both;
            select[i + 1] = both;
            i += 2;
        } else {
            i += 1;
        }
    }
}

/// Generalized Schur decomposition as an explicit state machine.
///
/// Freshly constructed objects are empty; `decompose` moves them to the
/// decomposed state and `reorder` stays there with new contents. Accessors
/// on an empty object fail with `NotDecomposed`. Eigenvector matrices are
/// computed on first request, cached, and invalidated by any subsequent
/// `decompose` or `reorder`.
pub struct QzDecomposition<T: Lapack> {
    state: Option<QzState<T>>,
}

struct QzState<T: Lapack> {
    factors: QzFactors<T>,
    left: Option<Matrix<Complex<T::Real>>>,
    right: Option<Matrix<Complex<T::Real>>>,
}

impl<T: Lapack> Default for QzDecomposition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Lapack> QzDecomposition<T> {
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Whether `decompose` has run.
    pub fn is_decomposed(&self) -> bool {
        self.state.is_some()
    }

    /// Decomposes the pair, replacing any previous state.
    pub fn decompose(&mut self, a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
        let factors = qz_decompose(a, b)?;
        self.state = Some(QzState {
            factors,
            left: None,
            right: None,
        });
        Ok(())
    }

    /// Reorders by explicit selection; invalidates cached eigenvectors.
    pub fn reorder(&mut self, select: &[bool]) -> Result<()> {
        let state = self.state.as_mut().ok_or(LinalgError::NotDecomposed)?;
        state.factors = qz_reorder(&state.factors, select)?;
        state.left = None;
        state.right = None;
        Ok(())
    }

    /// Reorders by region; invalidates cached eigenvectors.
    pub fn reorder_region(&mut self, region: EigenvalueRegion) -> Result<()> {
        if region == EigenvalueRegion::All {
            // no-op by contract, but still requires a decomposition
            self.state.as_ref().ok_or(LinalgError::NotDecomposed)?;
            return Ok(());
        }
        let state = self.state.as_mut().ok_or(LinalgError::NotDecomposed)?;
        let select = state.factors.region_selection(region);
        state.factors = qz_reorder(&state.factors, &select)?;
        state.left = None;
        state.right = None;
        Ok(())
    }

    fn factors_ref(&self) -> Result<&QzFactors<T>> {
        self.state
            .as_ref()
            .map(|s| &s.factors)
            .ok_or(LinalgError::NotDecomposed)
    }

    /// The current factors.
    pub fn factors(&self) -> Result<&QzFactors<T>> {
        self.factors_ref()
    }

    pub fn s(&self) -> Result<&Matrix<T>> {
        Ok(&self.factors_ref()?.s)
    }

    pub fn t(&self) -> Result<&Matrix<T>> {
        Ok(&self.factors_ref()?.t)
    }

    pub fn q(&self) -> Result<&Matrix<T>> {
        Ok(&self.factors_ref()?.q)
    }

    pub fn z(&self) -> Result<&Matrix<T>> {
        Ok(&self.factors_ref()?.z)
    }

    pub fn alpha(&self) -> Result<&Vector<Complex<T::Real>>> {
        Ok(&self.factors_ref()?.alpha)
    }

    pub fn beta(&self) -> Result<&Vector<T::Beta>> {
        Ok(&self.factors_ref()?.beta)
    }

    /// Generalized eigenvalues `alpha / beta`.
    pub fn eigenvalues(&self) -> Result<Vector<Complex<T::Real>>> {
        Ok(self.factors_ref()?.eigenvalues())
    }

    /// Right generalized eigenvectors: columns `v` with
    /// `beta * A v = alpha * B v`, unit 2-norm. Computed lazily and cached.
    pub fn right_eigenvectors(&mut self) -> Result<&Matrix<Complex<T::Real>>> {
        let state = self.state.as_mut().ok_or(LinalgError::NotDecomposed)?;
        if state.right.is_none() {
            let (_, right) = compute_eigenvectors(&state.factors, false, true)?;
            state.right = right;
        }
        Ok(state.right.as_ref().expect("right eigenvectors computed"))
    }

    /// Left generalized eigenvectors: columns `u` with
    /// `beta * u^H A = alpha * u^H B`, unit 2-norm. Computed lazily and
    /// cached.
    pub fn left_eigenvectors(&mut self) -> Result<&Matrix<Complex<T::Real>>> {
        let state = self.state.as_mut().ok_or(LinalgError::NotDecomposed)?;
        if state.left.is_none() {
            let (left, _) = compute_eigenvectors(&state.factors, true, false)?;
            state.left = left;
        }
        Ok(state.left.as_ref().expect("left eigenvectors computed"))
    }
}

type EigenvectorPair<T> = (
    Option<Matrix<Complex<<T as Scalar>::Real>>>,
    Option<Matrix<Complex<<T as Scalar>::Real>>>,
);

fn compute_eigenvectors<T: Lapack>(
    factors: &QzFactors<T>,
    want_left: bool,
    want_right: bool,
) -> Result<EigenvectorPair<T>> {
    let n = factors.order();
    let layout = factors.s.layout();
    if n == 0 {
        let empty = Matrix::zeros(0, 0, layout);
        return Ok((
            want_left.then(|| empty.clone()),
            want_right.then(|| empty),
        ));
    }
    let s = marshal::to_col_major(&factors.s);
    let t = marshal::to_col_major(&factors.t);
    let q = marshal::to_col_major(&factors.q);
    let z = marshal::to_col_major(&factors.z);
    let (left, right) = T::qz_vectors(n, &s, &t, &q, &z, want_left, want_right)?;
    let expand = |packed: Vec<T>| {
        let data = T::expand_eigenvectors(n, factors.alpha.as_slice(), &packed);
        let mut m = marshal::from_col_major(n, n, layout, data);
        normalize_columns(&mut m);
        m
    };
    Ok((left.map(&expand), right.map(&expand)))
}
