//! The kernel calling contract.
//!
//! [`Lapack`] is implemented once per supported element type and maps each
//! operation family onto the corresponding kernel entry (geev, syev/heev,
//! ggev, sygv/hegv, gges, tgsen, tgevc, gesvd). All buffers are column-major
//! with leading dimension equal to the row count; marshalling to and from
//! the caller's layout happens in [`crate::marshal`].

use ladex_core::error::{LinalgError, Result};
use ladex_core::scalar::Scalar;
use num_complex::Complex;

/// Output of a general (single-matrix) eigendecomposition.
///
/// Eigenvector matrices are `n x n`, column-major, in the kernel's native
/// storage convention: fully complex for complex element types, packed
/// real-storage (conjugate pair collapsed into two adjacent real columns)
/// for real element types. [`Lapack::expand_eigenvectors`] lifts either
/// convention to fully complex columns.
pub struct EigOutput<T: Lapack> {
    pub values: Vec<Complex<T::Real>>,
    pub left: Option<Vec<T>>,
    pub right: Option<Vec<T>>,
}

/// Output of a generalized (matrix-pair) eigendecomposition.
pub struct GenEigOutput<T: Lapack> {
    pub alpha: Vec<Complex<T::Real>>,
    pub beta: Vec<T::Beta>,
    pub left: Option<Vec<T>>,
    pub right: Option<Vec<T>>,
}

/// Output of a generalized Schur (QZ) decomposition, all matrices `n x n`
/// column-major.
pub struct QzOutput<T: Lapack> {
    pub s: Vec<T>,
    pub t: Vec<T>,
    pub q: Vec<T>,
    pub z: Vec<T>,
    pub alpha: Vec<Complex<T::Real>>,
    pub beta: Vec<T::Beta>,
}

/// Factor selection for the SVD entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvdMode {
    /// Singular values only.
    Values,
    /// `U` is `m x min(m, n)`, `V^H` is `min(m, n) x n`.
    Thin,
    /// `U` is `m x m`, `V^H` is `n x n`.
    Full,
}

/// Output of a singular value decomposition.
pub struct SvdOutput<T: Lapack> {
    pub singular: Vec<T::Real>,
    /// `m x u_cols`, column-major.
    pub u: Option<Vec<T>>,
    pub u_cols: usize,
    /// `vt_rows x n`, column-major.
    pub vt: Option<Vec<T>>,
    pub vt_rows: usize,
}

/// Kernel dispatch by element type.
///
/// Every entry validates nothing: shape checking happens in the facades
/// before any buffer is marshalled. Entries own their defensive input
/// copies (`Vec` arguments) and are free to overwrite them.
pub trait Lapack: Scalar {
    /// Scaling denominator of a generalized eigenvalue as reported by the
    /// kernel: real for real element types, complex for complex ones.
    type Beta: Scalar<Real = Self::Real>;

    /// `beta == 0`, encoding an infinite generalized eigenvalue.
    fn beta_is_zero(beta: Self::Beta) -> bool;

    /// `alpha / beta`, with `beta == 0` mapped to infinity and
    /// `alpha == beta == 0` mapped to NaN (undetermined).
    fn gen_eigenvalue(alpha: Complex<Self::Real>, beta: Self::Beta) -> Complex<Self::Real>;

    /// General eigendecomposition (geev).
    fn eig(n: usize, a: Vec<Self>, want_left: bool, want_right: bool) -> Result<EigOutput<Self>>;

    /// Symmetric / Hermitian eigendecomposition (syev / heev). Returns the
    /// ascending eigenvalues and, on request, the orthonormal eigenvector
    /// matrix.
    fn eigh(n: usize, a: Vec<Self>, want_vectors: bool)
        -> Result<(Vec<Self::Real>, Option<Vec<Self>>)>;

    /// Generalized eigendecomposition of a pair (ggev).
    fn eig_pair(
        n: usize,
        a: Vec<Self>,
        b: Vec<Self>,
        want_left: bool,
        want_right: bool,
    ) -> Result<GenEigOutput<Self>>;

    /// Symmetric / Hermitian definite pair (sygv / hegv, itype 1). `b` must
    /// be positive definite; the kernel's report of a failed Cholesky factor
    /// surfaces as `NotPositiveDefinite`.
    fn eigh_pair(
        n: usize,
        a: Vec<Self>,
        b: Vec<Self>,
        want_vectors: bool,
    ) -> Result<(Vec<Self::Real>, Option<Vec<Self>>)>;

    /// Generalized Schur decomposition (gges), no eigenvalue sorting.
    fn qz(n: usize, a: Vec<Self>, b: Vec<Self>) -> Result<QzOutput<Self>>;

    /// Reorders a generalized Schur decomposition in place (tgsen) so the
    /// selected eigenvalues occupy the leading block. `select` has one entry
    /// per eigenvalue position; for a conjugate pair both entries must
    /// already agree. Returns the refreshed `(alpha, beta)`.
    fn qz_reorder(
        n: usize,
        s: &mut [Self],
        t: &mut [Self],
        q: &mut [Self],
        z: &mut [Self],
        select: &[bool],
    ) -> Result<(Vec<Complex<Self::Real>>, Vec<Self::Beta>)>;

    /// Generalized eigenvectors from a Schur decomposition (tgevc with
    /// back-transformation), in the kernel's storage convention.
    fn qz_vectors(
        n: usize,
        s: &[Self],
        t: &[Self],
        q: &[Self],
        z: &[Self],
        want_left: bool,
        want_right: bool,
    ) -> Result<(Option<Vec<Self>>, Option<Vec<Self>>)>;

    /// Singular value decomposition (gesvd).
    fn svd(m: usize, n: usize, a: Vec<Self>, mode: SvdMode) -> Result<SvdOutput<Self>>;

    /// Lifts an `n x n` column-major eigenvector matrix from the kernel's
    /// storage convention to fully complex columns. `values` are the
    /// matching eigenvalues (or alphas), used to locate conjugate pairs in
    /// the real-storage convention.
    fn expand_eigenvectors(
        n: usize,
        values: &[Complex<Self::Real>],
        packed: &[Self],
    ) -> Vec<Complex<Self::Real>>;
}

/// Maps a kernel status code onto the library taxonomy.
pub(crate) fn check_info(info: i32) -> Result<()> {
    if info == 0 {
        Ok(())
    } else if info < 0 {
        Err(LinalgError::BadKernelArgument {
            argument: (-info) as usize,
        })
    } else {
        Err(LinalgError::ConvergenceFailure {
            index: info as usize,
        })
    }
}

/// Status translation for the definite-pair entries, where `info > n` means
/// the `info - n`-th leading minor of `b` is not positive definite.
pub(crate) fn check_info_definite(info: i32, n: usize) -> Result<()> {
    if info > n as i32 {
        Err(LinalgError::NotPositiveDefinite {
            order: (info - n as i32) as usize,
        })
    } else {
        check_info(info)
    }
}

/// Job character for an optional factor.
pub(crate) fn job_char(wanted: bool) -> u8 {
    if wanted {
        b'V'
    } else {
        b'N'
    }
}

/// Fortran LOGICAL array from a boolean selection mask.
pub(crate) fn logical_mask(select: &[bool]) -> Vec<i32> {
    select.iter().map(|&s| i32::from(s)).collect()
}
