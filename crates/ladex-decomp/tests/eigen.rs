use approx::assert_relative_eq;
use lapack_src as _;
use num_complex::Complex64;

use ladex_core::{Layout, LinalgError, Matrix, Scalar, SymmetricMatrix, Vector};
use ladex_decomp::{
    eigen, eigenvalues, generalized_eigen, herm_eigen, herm_eigenvalues, left_eigen, right_eigen,
    sym_eigen, sym_eigenvalues, sym_generalized_eigen,
};

fn general_5x5(layout: Layout) -> Matrix<f64> {
    Matrix::from_rows(
        &[
            vec![-1.01, 0.86, -4.60, 3.31, -4.81],
            vec![3.98, 0.53, -7.04, 5.29, 3.55],
            vec![3.30, 8.26, -3.89, 8.20, -1.51],
            vec![4.43, 4.96, -7.66, -7.33, 6.18],
            vec![7.31, -6.43, -6.16, 2.47, 5.58],
        ],
        layout,
    )
}

fn symmetric_5x5(layout: Layout) -> SymmetricMatrix<f64> {
    let dense = Matrix::from_rows(
        &[
            vec![1.96, -6.49, -0.47, -7.20, -0.61],
            vec![-6.49, 3.80, -6.39, 1.50, -6.96],
            vec![-0.47, -6.39, 4.17, -1.51, 2.67],
            vec![-7.20, 1.50, -1.51, 5.70, 10.33],
            vec![-0.61, -6.96, 2.67, 10.33, -7.10],
        ],
        layout,
    );
    SymmetricMatrix::from_dense(&dense).unwrap()
}

fn sorted_by_re_im(values: &Vector<Complex64>) -> Vec<Complex64> {
    let mut v: Vec<Complex64> = values.iter().copied().collect();
    v.sort_by(|a, b| {
        a.re.partial_cmp(&b.re)
            .unwrap()
            .then(a.im.partial_cmp(&b.im).unwrap())
    });
    v
}

#[test]
fn general_real_eigenvalues_match_published_spectrum() {
    for layout in [Layout::RowMajor, Layout::ColumnMajor] {
        let a = general_5x5(layout);
        let w = eigenvalues(&a).unwrap();
        let got = sorted_by_re_im(&w);
        let expected = [
            Complex64::new(-10.46292, 0.0),
            Complex64::new(-0.68667, -4.70426),
            Complex64::new(-0.68667, 4.70426),
            Complex64::new(2.85813, -10.76275),
            Complex64::new(2.85813, 10.76275),
        ];
        for (g, e) in got.iter().zip(expected.iter()) {
            assert_relative_eq!(g.re, e.re, epsilon = 1e-5);
            assert_relative_eq!(g.im, e.im, epsilon = 1e-5);
        }
    }
}

#[test]
fn right_eigenvectors_satisfy_the_eigen_identity() {
    let a = general_5x5(Layout::ColumnMajor);
    let (w, rv) = right_eigen(&a).unwrap();
    let a_c = a.map(|x| x.to_complex());
    let lhs = a_c.matmul(&rv).unwrap();
    let rhs = rv.scale_columns(w.as_slice()).unwrap();
    let residual = lhs.sub(&rhs).unwrap().frobenius_norm() / a.frobenius_norm();
    assert!(residual < 1e-12, "relative residual {residual}");
}

#[test]
fn left_eigenvectors_satisfy_the_adjoint_identity() {
    let a = general_5x5(Layout::RowMajor);
    let (w, lv) = left_eigen(&a).unwrap();
    let a_c = a.map(|x| x.to_complex());
    let lvh = lv.conj_transpose();
    let lhs = lvh.matmul(&a_c).unwrap();
    let rhs = lvh.scale_rows(w.as_slice()).unwrap();
    let residual = lhs.sub(&rhs).unwrap().frobenius_norm() / a.frobenius_norm();
    assert!(residual < 1e-12, "relative residual {residual}");
}

#[test]
fn eigen_returns_both_sets_consistently() {
    let a = general_5x5(Layout::ColumnMajor);
    let full = eigen(&a).unwrap();
    let (w, _) = right_eigen(&a).unwrap();
    for (x, y) in full.values.iter().zip(w.iter()) {
        assert_relative_eq!(x.re, y.re, epsilon = 1e-10);
        assert_relative_eq!(x.im, y.im, epsilon = 1e-10);
    }
    assert_eq!(full.left.shape(), (5, 5));
    assert_eq!(full.right.shape(), (5, 5));

    // both sets satisfy their identities at once
    let a_c = a.map(|x| x.to_complex());
    let rhs = full.right.scale_columns(full.values.as_slice()).unwrap();
    let res = a_c
        .matmul(&full.right)
        .unwrap()
        .sub(&rhs)
        .unwrap()
        .frobenius_norm();
    assert!(res / a.frobenius_norm() < 1e-12);
}

#[test]
fn symmetric_eigenvalues_ascending_and_published() {
    for layout in [Layout::RowMajor, Layout::ColumnMajor] {
        let a = symmetric_5x5(layout);
        let w = sym_eigenvalues(&a).unwrap();
        let expected = [-11.065575, -6.228747, 0.864028, 8.865457, 16.094837];
        for (g, e) in w.iter().zip(expected.iter()) {
            assert_relative_eq!(g, e, epsilon = 1e-5);
        }
        for k in 1..w.len() {
            assert!(w[k - 1] <= w[k]);
        }
    }
}

#[test]
fn symmetric_eigenvectors_are_orthonormal() {
    let a = symmetric_5x5(Layout::ColumnMajor);
    let (w, v) = sym_eigen(&a).unwrap();
    let vtv = v.transpose().matmul(&v).unwrap();
    let id = Matrix::identity(5, Layout::ColumnMajor);
    assert!(vtv.sub(&id).unwrap().frobenius_norm() < 1e-12);

    let av = a.to_dense().matmul(&v).unwrap();
    let vw = v.scale_columns(w.as_slice()).unwrap();
    let residual = av.sub(&vw).unwrap().frobenius_norm() / a.to_dense().frobenius_norm();
    assert!(residual < 1e-12, "relative residual {residual}");
}

fn hermitian_4x4(layout: Layout) -> ladex_core::HermitianMatrix<Complex64> {
    let mut h = ladex_core::HermitianMatrix::zeros(4, layout);
    h.set(0, 0, Complex64::new(9.14, 0.0)).unwrap();
    h.set(1, 1, Complex64::new(-3.35, 0.0)).unwrap();
    h.set(2, 2, Complex64::new(-4.82, 0.0)).unwrap();
    h.set(3, 3, Complex64::new(8.44, 0.0)).unwrap();
    h.set(0, 1, Complex64::new(-4.37, -9.22)).unwrap();
    h.set(0, 2, Complex64::new(-1.98, -1.72)).unwrap();
    h.set(0, 3, Complex64::new(-8.96, -9.50)).unwrap();
    h.set(1, 2, Complex64::new(2.25, -9.51)).unwrap();
    h.set(1, 3, Complex64::new(2.57, 2.40)).unwrap();
    h.set(2, 3, Complex64::new(-3.24, 2.04)).unwrap();
    h
}

#[test]
fn hermitian_eigenvalues_real_and_published() {
    let h = hermitian_4x4(Layout::ColumnMajor);
    let w = herm_eigenvalues(&h).unwrap();
    let expected = [-16.00475, -6.76497, 6.66571, 25.51401];
    for (g, e) in w.iter().zip(expected.iter()) {
        assert_relative_eq!(g, e, epsilon = 1e-5);
    }
}

#[test]
fn hermitian_eigenvectors_are_unitary() {
    let h = hermitian_4x4(Layout::RowMajor);
    let (w, v) = herm_eigen(&h).unwrap();
    let vhv = v.conj_transpose().matmul(&v).unwrap();
    let id = Matrix::<Complex64>::identity(4, Layout::RowMajor);
    assert!(vhv.sub(&id).unwrap().frobenius_norm() < 1e-12);

    let wv: Vec<Complex64> = w.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    let av = h.to_dense().matmul(&v).unwrap();
    let vw = v.scale_columns(&wv).unwrap();
    let residual = av.sub(&vw).unwrap().frobenius_norm() / h.to_dense().frobenius_norm();
    assert!(residual < 1e-12, "relative residual {residual}");
}

#[test]
fn generalized_symmetric_definite_pair() {
    let a = SymmetricMatrix::from_dense(&Matrix::from_rows(
        &[
            vec![0.24, 0.39, 0.42, -0.16],
            vec![0.39, -0.11, 0.79, 0.63],
            vec![0.42, 0.79, -0.25, 0.48],
            vec![-0.16, 0.63, 0.48, -0.03],
        ],
        Layout::ColumnMajor,
    ))
    .unwrap();
    let b = SymmetricMatrix::from_dense(&Matrix::from_rows(
        &[
            vec![4.16, -3.12, 0.56, -0.10],
            vec![-3.12, 5.03, -0.83, 1.09],
            vec![0.56, -0.83, 0.76, 0.34],
            vec![-0.10, 1.09, 0.34, 1.18],
        ],
        Layout::ColumnMajor,
    ))
    .unwrap();

    let (w, v) = sym_generalized_eigen(&a, &b).unwrap();
    for k in 1..w.len() {
        assert!(w[k - 1] <= w[k]);
    }
    let av = a.to_dense().matmul(&v).unwrap();
    let bvw = b
        .to_dense()
        .matmul(&v)
        .unwrap()
        .scale_columns(w.as_slice())
        .unwrap();
    let denom = a.to_dense().frobenius_norm() + b.to_dense().frobenius_norm();
    let residual = av.sub(&bvw).unwrap().frobenius_norm() / denom;
    assert!(residual < 1e-12, "relative residual {residual}");
}

#[test]
fn generalized_pair_requires_positive_definite_b() {
    let a = SymmetricMatrix::from_dense(&Matrix::identity(3, Layout::ColumnMajor)).unwrap();
    let b =
        SymmetricMatrix::from_dense(&Matrix::identity(3, Layout::ColumnMajor).scale(-1.0)).unwrap();
    assert!(matches!(
        sym_generalized_eigen(&a, &b),
        Err(LinalgError::NotPositiveDefinite { .. })
    ));
}

#[test]
fn generalized_eigen_of_a_general_pair() {
    let a = Matrix::from_rows(
        &[
            vec![3.9, 12.5, -3.4, 2.4],
            vec![4.3, 21.5, -7.3, 5.3],
            vec![4.3, 21.5, -7.5, 5.5],
            vec![4.4, 26.0, -10.0, 7.1],
        ],
        Layout::ColumnMajor,
    );
    let b = Matrix::from_rows(
        &[
            vec![1.0, 2.0, -3.0, 1.0],
            vec![1.0, 3.0, -5.0, 4.0],
            vec![1.0, 3.0, -4.0, 3.0],
            vec![1.0, 3.0, -4.0, 4.0],
        ],
        Layout::ColumnMajor,
    );
    let ge = generalized_eigen(&a, &b).unwrap();
    let a_c = a.map(|x| x.to_complex());
    let b_c = b.map(|x| x.to_complex());
    let beta_c: Vec<Complex64> = ge.beta.iter().map(|&x| x.to_complex()).collect();

    // beta * A v = alpha * B v, column by column
    let av = a_c.matmul(&ge.right).unwrap().scale_columns(&beta_c).unwrap();
    let bv = b_c
        .matmul(&ge.right)
        .unwrap()
        .scale_columns(ge.alpha.as_slice())
        .unwrap();
    let denom = a.frobenius_norm() + b.frobenius_norm();
    let residual = av.sub(&bv).unwrap().frobenius_norm() / denom;
    assert!(residual < 1e-10, "right residual {residual}");

    // beta * u^H A = alpha * u^H B, row by row of u^H
    let lvh = ge.left.conj_transpose();
    let ua = lvh.matmul(&a_c).unwrap().scale_rows(&beta_c).unwrap();
    let ub = lvh
        .matmul(&b_c)
        .unwrap()
        .scale_rows(ge.alpha.as_slice())
        .unwrap();
    let residual = ua.sub(&ub).unwrap().frobenius_norm() / denom;
    assert!(residual < 1e-10, "left residual {residual}");
}

#[test]
fn generalized_hermitian_definite_pair() {
    let mut a = ladex_core::HermitianMatrix::<Complex64>::zeros(3, Layout::ColumnMajor);
    a.set(0, 0, Complex64::new(1.0, 0.0)).unwrap();
    a.set(1, 1, Complex64::new(-2.0, 0.0)).unwrap();
    a.set(2, 2, Complex64::new(0.5, 0.0)).unwrap();
    a.set(0, 1, Complex64::new(0.5, 1.5)).unwrap();
    a.set(0, 2, Complex64::new(-1.0, 0.0)).unwrap();
    a.set(1, 2, Complex64::new(0.0, 2.0)).unwrap();

    // diagonally dominant Hermitian B is positive definite
    let mut b = ladex_core::HermitianMatrix::<Complex64>::zeros(3, Layout::ColumnMajor);
    b.set(0, 0, Complex64::new(4.0, 0.0)).unwrap();
    b.set(1, 1, Complex64::new(5.0, 0.0)).unwrap();
    b.set(2, 2, Complex64::new(6.0, 0.0)).unwrap();
    b.set(0, 1, Complex64::new(0.3, -0.2)).unwrap();
    b.set(1, 2, Complex64::new(0.1, 0.4)).unwrap();

    let (w, v) = ladex_decomp::herm_generalized_eigen(&a, &b).unwrap();
    for k in 1..w.len() {
        assert!(w[k - 1] <= w[k]);
    }
    let wv: Vec<Complex64> = w.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    let av = a.to_dense().matmul(&v).unwrap();
    let bvw = b.to_dense().matmul(&v).unwrap().scale_columns(&wv).unwrap();
    let denom = a.to_dense().frobenius_norm() + b.to_dense().frobenius_norm();
    let residual = av.sub(&bvw).unwrap().frobenius_norm() / denom;
    assert!(residual < 1e-12, "relative residual {residual}");
}

#[test]
fn generalized_one_sided_entry_points_agree() {
    let a = Matrix::from_rows(
        &[vec![2.0, 1.0], vec![0.5, -1.0]],
        Layout::ColumnMajor,
    );
    let b = Matrix::identity(2, Layout::ColumnMajor);
    let (w_r, rv) = ladex_decomp::generalized_right_eigen(&a, &b).unwrap();
    let (w_l, lv) = ladex_decomp::generalized_left_eigen(&a, &b).unwrap();
    assert_eq!(rv.shape(), (2, 2));
    assert_eq!(lv.shape(), (2, 2));
    for (x, y) in w_r.iter().zip(w_l.iter()) {
        assert_relative_eq!(x.re, y.re, epsilon = 1e-10);
        assert_relative_eq!(x.im, y.im, epsilon = 1e-10);
    }
    // with B = I the pencil eigenvalues are plain eigenvalues of A
    let w = eigenvalues(&a).unwrap();
    let mut plain: Vec<f64> = w.iter().map(|z| z.re).collect();
    let mut pencil: Vec<f64> = w_r.iter().map(|z| z.re).collect();
    plain.sort_by(|x, y| x.partial_cmp(y).unwrap());
    pencil.sort_by(|x, y| x.partial_cmp(y).unwrap());
    for (x, y) in plain.iter().zip(pencil.iter()) {
        assert_relative_eq!(x, y, epsilon = 1e-10);
    }
}

#[test]
fn triangular_matrix_exposes_its_diagonal_f32() {
    let a = Matrix::<f32>::from_rows(
        &[
            vec![2.0, 1.0, 0.0],
            vec![0.0, -1.0, 3.0],
            vec![0.0, 0.0, 0.5],
        ],
        Layout::ColumnMajor,
    );
    let w = eigenvalues(&a).unwrap();
    let mut res: Vec<f32> = w.iter().map(|z| z.re).collect();
    res.sort_by(|x, y| x.partial_cmp(y).unwrap());
    assert_relative_eq!(res[0], -1.0, epsilon = 1e-4);
    assert_relative_eq!(res[1], 0.5, epsilon = 1e-4);
    assert_relative_eq!(res[2], 2.0, epsilon = 1e-4);
    for z in w.iter() {
        assert_relative_eq!(z.im, 0.0, epsilon = 1e-4);
    }
}

#[test]
fn complex_triangular_matrix() {
    let a = Matrix::from_rows(
        &[
            vec![Complex64::new(1.0, 1.0), Complex64::new(2.0, 0.0)],
            vec![Complex64::new(0.0, 0.0), Complex64::new(3.0, -1.0)],
        ],
        Layout::RowMajor,
    );
    let w = eigenvalues(&a).unwrap();
    let got = sorted_by_re_im(&w);
    assert_relative_eq!(got[0].re, 1.0, epsilon = 1e-12);
    assert_relative_eq!(got[0].im, 1.0, epsilon = 1e-12);
    assert_relative_eq!(got[1].re, 3.0, epsilon = 1e-12);
    assert_relative_eq!(got[1].im, -1.0, epsilon = 1e-12);
}

#[test]
fn shape_errors_are_typed() {
    let rect = Matrix::<f64>::zeros(2, 3, Layout::ColumnMajor);
    assert!(matches!(
        eigenvalues(&rect),
        Err(LinalgError::NotSquare { .. })
    ));

    let a = Matrix::<f64>::zeros(3, 3, Layout::ColumnMajor);
    let b = Matrix::<f64>::zeros(2, 2, Layout::ColumnMajor);
    assert!(matches!(
        ladex_decomp::generalized_eigenvalues(&a, &b),
        Err(LinalgError::ShapeMismatch { .. })
    ));
}
