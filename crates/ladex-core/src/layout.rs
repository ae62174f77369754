//! Memory layout tag for two-dimensional containers.

/// Mapping from a two-dimensional index to a flat buffer position.
///
/// Every matrix-like container carries a layout fixed at construction.
/// `ColumnMajor` is the default because it is the kernel's native order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Rows are contiguous: `(i, j)` maps to `i * cols + j`.
    RowMajor,
    /// Columns are contiguous: `(i, j)` maps to `j * rows + i`.
    #[default]
    ColumnMajor,
}

impl Layout {
    /// Flat buffer position of element `(i, j)` in a `rows` x `cols` container.
    #[inline]
    pub fn index(self, i: usize, j: usize, rows: usize, cols: usize) -> usize {
        debug_assert!(i < rows && j < cols);
        match self {
            Layout::RowMajor => i * cols + j,
            Layout::ColumnMajor => j * rows + i,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping() {
        // 2 x 3 container
        assert_eq!(Layout::RowMajor.index(0, 0, 2, 3), 0);
        assert_eq!(Layout::RowMajor.index(0, 2, 2, 3), 2);
        assert_eq!(Layout::RowMajor.index(1, 0, 2, 3), 3);
        assert_eq!(Layout::ColumnMajor.index(0, 0, 2, 3), 0);
        assert_eq!(Layout::ColumnMajor.index(1, 0, 2, 3), 1);
        assert_eq!(Layout::ColumnMajor.index(0, 2, 2, 3), 4);
    }

    #[test]
    fn default_is_column_major() {
        assert_eq!(Layout::default(), Layout::ColumnMajor);
    }
}
