//! Containers and shared abstractions for the ladex linear algebra
//! extensions.
//!
//! This crate holds the dense [`Matrix`]/[`Vector`] types, the structured
//! [`SymmetricMatrix`]/[`HermitianMatrix`] and
//! [`GeneralizedDiagonalMatrix`]/[`GeneralizedDiagonalAdaptor`] containers,
//! the [`Layout`] tag, the [`Scalar`] element abstraction, and the error
//! taxonomy shared by every ladex crate. The decomposition facades live in
//! `ladex-decomp`; the kernel adapter in `ladex-lapack`.

pub mod adaptor;
pub mod dense;
pub mod error;
pub mod gendiag;
pub mod layout;
pub mod scalar;
pub mod symmetric;
pub mod traits;

pub use adaptor::GeneralizedDiagonalAdaptor;
pub use dense::{Matrix, Vector};
pub use error::{LinalgError, Result};
pub use gendiag::{diag, diag_of, diagonal_length, GeneralizedDiagonalMatrix};
pub use layout::Layout;
pub use scalar::{ComplexScalar, RealScalar, Scalar};
pub use symmetric::{HermitianMatrix, SymmetricMatrix};
pub use traits::{num_columns, num_rows, size, MatrixRef};
