//! Buffer marshalling between layout-tagged matrices and the kernel's
//! column-major convention.
//!
//! The Fortran kernel has no layout flag, so a row-major input is transposed
//! during the defensive copy every kernel call needs anyway; no additional
//! transpose buffer is ever allocated. Outputs are rebuilt in the caller's
//! layout.

use ladex_core::dense::Matrix;
use ladex_core::layout::Layout;
use ladex_core::scalar::Scalar;

/// Column-major copy of a matrix. The kernel overwrites its inputs, so this
/// copy doubles as the scratch buffer bounded by the call.
pub fn to_col_major<T: Scalar>(m: &Matrix<T>) -> Vec<T> {
    match m.layout() {
        Layout::ColumnMajor => m.as_slice().to_vec(),
        Layout::RowMajor => {
            let (rows, cols) = m.shape();
            let mut out = Vec::with_capacity(rows * cols);
            for j in 0..cols {
                for i in 0..rows {
                    out.push(m.get(i, j));
                }
            }
            out
        }
    }
}

/// Rebuilds a matrix from a column-major kernel buffer in the requested
/// layout.
pub fn from_col_major<T: Scalar>(
    rows: usize,
    cols: usize,
    layout: Layout,
    data: Vec<T>,
) -> Matrix<T> {
    match layout {
        Layout::ColumnMajor => Matrix::from_vec(rows, cols, layout, data),
        Layout::RowMajor => {
            let mut m = Matrix::zeros(rows, cols, layout);
            for j in 0..cols {
                for i in 0..rows {
                    m.set(i, j, data[j * rows + i]);
                }
            }
            m
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_elements() {
        for layout in [Layout::RowMajor, Layout::ColumnMajor] {
            let m = Matrix::from_rows(
                &[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
                layout,
            );
            let buf = to_col_major(&m);
            assert_eq!(buf, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
            let back = from_col_major(2, 3, layout, buf);
            assert_eq!(back, m);
        }
    }
}
