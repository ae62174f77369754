//! Decomposition facades for the ladex linear algebra extensions.
//!
//! Uniform, layout-independent front ends over the kernel adapter:
//!
//! * [`eigen`] — eigenvalues and eigenvectors of general, symmetric and
//!   Hermitian matrices and of matrix pairs;
//! * [`schur`] — generalized Schur (QZ) decomposition with eigenvalue
//!   reordering by region or explicit selection;
//! * [`svd`] — singular value decomposition with full or thin factors.
//!
//! Every facade validates shapes before marshalling, preserves the input
//! layout on all matrix outputs, and never exposes partial kernel results.

pub mod eigen;
pub mod schur;
pub mod svd;
mod validate;

pub use eigen::{
    eigen, eigenvalues, generalized_eigen, generalized_eigenvalues, generalized_left_eigen,
    generalized_right_eigen, herm_eigen, herm_eigenvalues, herm_generalized_eigen, left_eigen,
    right_eigen, sym_eigen, sym_eigenvalues, sym_generalized_eigen, Eigen, GeneralizedEigen,
};
pub use schur::{
    qz_decompose, qz_decompose_region, qz_reorder, EigenvalueRegion, QzDecomposition, QzFactors,
};
pub use svd::{singular_values, svd_decompose, Svd, SvdForm};
