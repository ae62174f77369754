//! Kernel adapter for the ladex linear algebra extensions.
//!
//! Marshals layout-tagged matrices into the dense-LA kernel's column-major
//! calling convention, performs the two-call workspace query pattern,
//! dispatches statically on the element type (one kernel entry per type),
//! and translates kernel status codes into the shared error taxonomy.
//! Facades in `ladex-decomp` are the intended consumers; the raw entries
//! here assume validated shapes.

mod complex;
mod kernel;
pub mod marshal;
mod real;

pub use kernel::{EigOutput, GenEigOutput, Lapack, QzOutput, SvdMode, SvdOutput};
