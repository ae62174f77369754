use approx::assert_relative_eq;
use ladex_core::{
    HermitianMatrix, Layout, LinalgError, Matrix, MatrixRef, SymmetricMatrix, Vector,
};
use num_complex::Complex64;

#[test]
fn layout_is_preserved_and_observable() {
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let rm = Matrix::from_vec(2, 3, Layout::RowMajor, data.clone());
    let cm = Matrix::from_vec(3, 2, Layout::ColumnMajor, data);
    assert_eq!(rm.get(1, 0), 4.0);
    assert_eq!(cm.get(0, 1), 4.0);
    assert_eq!(rm.layout(), Layout::RowMajor);
    assert_eq!(rm.to_layout(Layout::ColumnMajor).get(1, 0), 4.0);
}

#[test]
fn conj_transpose_conjugates() {
    let m = Matrix::from_rows(
        &[
            vec![Complex64::new(1.0, 2.0), Complex64::new(3.0, -4.0)],
            vec![Complex64::new(0.0, 1.0), Complex64::new(5.0, 0.0)],
        ],
        Layout::ColumnMajor,
    );
    let h = m.conj_transpose();
    assert_eq!(h.get(0, 0), Complex64::new(1.0, -2.0));
    assert_eq!(h.get(1, 0), Complex64::new(3.0, 4.0));
    assert_eq!(h.get(0, 1), Complex64::new(0.0, -1.0));
}

#[test]
fn matmul_and_norms() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]], Layout::RowMajor);
    let b = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]], Layout::ColumnMajor);
    let p = a.matmul(&b).unwrap();
    assert_eq!(p.get(0, 0), 2.0);
    assert_eq!(p.get(0, 1), 1.0);
    assert_eq!(p.get(1, 0), 4.0);
    assert_eq!(p.get(1, 1), 3.0);
    assert_relative_eq!(a.frobenius_norm(), 30.0f64.sqrt(), epsilon = 1e-14);
    assert_eq!(a.max_abs(), 4.0);
}

#[test]
fn column_scaling_forms_diag_products() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]], Layout::RowMajor);
    let right = m.scale_columns(&[10.0, 100.0]).unwrap();
    assert_eq!(right.get(0, 1), 200.0);
    assert_eq!(right.get(1, 0), 30.0);
    let left = m.scale_rows(&[10.0, 100.0]).unwrap();
    assert_eq!(left.get(0, 1), 20.0);
    assert_eq!(left.get(1, 0), 300.0);
}

#[test]
fn vector_basics() {
    let v = Vector::from_vec(vec![3.0, 4.0]);
    assert_eq!(v.len(), 2);
    assert_relative_eq!(v.norm2(), 5.0);
    let doubled = v.map(|x| 2.0 * x);
    assert_eq!(doubled.as_slice(), &[6.0, 8.0]);
}

#[test]
fn symmetric_round_trip() {
    let dense = Matrix::from_rows(
        &[
            vec![1.0, 2.0, 3.0],
            vec![2.0, 5.0, 6.0],
            vec![3.0, 6.0, 9.0],
        ],
        Layout::RowMajor,
    );
    let s = SymmetricMatrix::from_dense(&dense).unwrap();
    assert_eq!(s.order(), 3);
    assert_eq!(s.to_dense(), dense);

    let mut skewed = dense.clone();
    skewed.set(2, 0, -3.0);
    assert!(matches!(
        SymmetricMatrix::from_dense(&skewed),
        Err(LinalgError::NotHermitian { .. })
    ));

    let rect = Matrix::<f64>::zeros(2, 3, Layout::RowMajor);
    assert!(matches!(
        SymmetricMatrix::from_dense(&rect),
        Err(LinalgError::NotSquare { .. })
    ));
}

#[test]
fn hermitian_round_trip() {
    let dense = Matrix::from_rows(
        &[
            vec![Complex64::new(2.0, 0.0), Complex64::new(1.0, 1.0)],
            vec![Complex64::new(1.0, -1.0), Complex64::new(3.0, 0.0)],
        ],
        Layout::ColumnMajor,
    );
    let h = HermitianMatrix::from_dense(&dense).unwrap();
    assert_eq!(h.to_dense(), dense);
    assert_eq!(h.get(1, 0), Complex64::new(1.0, -1.0));

    let mut broken = dense.clone();
    broken.set(0, 1, Complex64::new(1.0, 2.0));
    assert!(matches!(
        HermitianMatrix::from_dense(&broken),
        Err(LinalgError::NotHermitian { .. })
    ));
}

#[test]
fn capability_trait_materializes_dense() {
    let mut s = SymmetricMatrix::<f64>::zeros(2, Layout::ColumnMajor);
    s.set(0, 1, 4.0);
    let dense = MatrixRef::to_dense(&s);
    assert_eq!(dense.get(1, 0), 4.0);
    assert_eq!(ladex_core::num_rows(&s), 2);
    assert_eq!(ladex_core::num_columns(&s), 2);
}
