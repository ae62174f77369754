//! Umbrella crate re-exporting the ladex public surface.
//!
//! `ladex` extends a dense linear algebra kernel with a structured
//! single-diagonal container family and uniform decomposition facades:
//!
//! ```no_run
//! # use lapack_src as _;
//! use ladex::{qz_decompose_region, EigenvalueRegion, Layout, Matrix};
//!
//! let a = Matrix::from_rows(&[vec![4.0, 1.0], vec![0.0, -2.0]], Layout::ColumnMajor);
//! let b = Matrix::identity(2, Layout::ColumnMajor);
//! let f = qz_decompose_region(&a, &b, EigenvalueRegion::LeftHalfPlane)?;
//! assert!(f.eigenvalues()[0].re < 0.0);
//! # Ok::<(), ladex::LinalgError>(())
//! ```

pub use ladex_core::{
    diag, diag_of, diagonal_length, num_columns, num_rows, size, ComplexScalar,
    GeneralizedDiagonalAdaptor, GeneralizedDiagonalMatrix, HermitianMatrix, Layout, LinalgError,
    Matrix, MatrixRef, RealScalar, Result, Scalar, SymmetricMatrix, Vector,
};

pub use ladex_lapack::{Lapack, SvdMode};

pub use ladex_decomp::{
    eigen, eigenvalues, generalized_eigen, generalized_eigenvalues, generalized_left_eigen,
    generalized_right_eigen, herm_eigen, herm_eigenvalues, herm_generalized_eigen, left_eigen,
    qz_decompose, qz_decompose_region, qz_reorder, right_eigen, singular_values, svd_decompose,
    sym_eigen, sym_eigenvalues, sym_generalized_eigen, Eigen, EigenvalueRegion, GeneralizedEigen,
    QzDecomposition, QzFactors, Svd, SvdForm,
};
