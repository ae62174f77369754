use approx::assert_relative_eq;
use lapack_src as _;
use num_complex::Complex64;
use paste::paste;

use ladex_core::{Layout, Matrix, RealScalar, Scalar};
use ladex_decomp::{singular_values, svd_decompose, Svd, SvdForm};
use ladex_lapack::Lapack;
use num_traits::Zero;

fn real_4x5(layout: Layout) -> Matrix<f64> {
    Matrix::from_rows(
        &[
            vec![8.79, 9.93, 9.83, 5.45, 3.16],
            vec![6.11, 6.91, 5.04, -0.27, 7.98],
            vec![-9.15, -7.93, 4.86, 4.85, 3.01],
            vec![9.57, 1.64, 8.83, 0.74, 5.80],
        ],
        layout,
    )
}

fn assert_factors_valid<T: Lapack>(a: &Matrix<T>, form: SvdForm, tol: T::Real) {
    let (m, n) = a.shape();
    let k = m.min(n);
    let (u, s, vh) = svd_decompose(a, form).unwrap();

    match form {
        SvdForm::Full => {
            assert_eq!(u.shape(), (m, m));
            assert_eq!(vh.shape(), (n, n));
        }
        SvdForm::Thin => {
            assert_eq!(u.shape(), (m, k));
            assert_eq!(vh.shape(), (k, n));
        }
    }
    assert_eq!(s.shape(), (k, k));
    assert_eq!(s.offset(), 0);

    // non-negative, non-increasing
    let sv = s.diagonal();
    for t in 0..k {
        assert!(sv[t] >= T::Real::zero());
        if t > 0 {
            assert!(sv[t - 1] >= sv[t]);
        }
    }

    // U S V^H = A; S is embedded at the k leading diagonal positions
    let mut s_embed = Matrix::<T>::zeros(u.num_columns(), vh.num_rows(), a.layout());
    for t in 0..k {
        s_embed.set(t, t, T::from_real(sv[t]));
    }
    let recon = u.matmul(&s_embed).unwrap().matmul(&vh).unwrap();
    let residual = recon.sub(a).unwrap().frobenius_norm() / a.frobenius_norm();
    assert!(residual < tol, "reconstruction residual");

    // orthonormal columns of U and rows of V^H
    let uhu = u.conj_transpose().matmul(&u).unwrap();
    let idu = Matrix::<T>::identity(u.num_columns(), a.layout());
    assert!(uhu.sub(&idu).unwrap().max_abs() < tol);
    let vvh = vh.matmul(&vh.conj_transpose()).unwrap();
    let idv = Matrix::<T>::identity(vh.num_rows(), a.layout());
    assert!(vvh.sub(&idv).unwrap().max_abs() < tol);
}

#[test]
fn real_svd_full_and_thin() {
    for layout in [Layout::RowMajor, Layout::ColumnMajor] {
        let a = real_4x5(layout);
        assert_factors_valid(&a, SvdForm::Full, 1e-12);
        assert_factors_valid(&a, SvdForm::Thin, 1e-12);
    }
}

#[test]
fn values_only_matches_the_decomposition() {
    let a = real_4x5(Layout::ColumnMajor);
    let s = singular_values(&a).unwrap();
    let (_, sd, _) = svd_decompose(&a, SvdForm::Thin).unwrap();
    assert_eq!(s.len(), 4);
    for (x, y) in s.iter().zip(sd.diagonal().iter()) {
        assert_relative_eq!(x, y, epsilon = 1e-12);
    }
}

#[test]
fn rectangular_diagonal_has_known_singular_values() {
    // nonzeros 7, 5, 2 on the main diagonal of a 3x4 matrix
    let mut a = Matrix::<f64>::zeros(3, 4, Layout::ColumnMajor);
    a.set(0, 0, 2.0);
    a.set(1, 1, 7.0);
    a.set(2, 2, -5.0);
    let s = singular_values(&a).unwrap();
    assert_relative_eq!(s[0], 7.0, epsilon = 1e-12);
    assert_relative_eq!(s[1], 5.0, epsilon = 1e-12);
    assert_relative_eq!(s[2], 2.0, epsilon = 1e-12);
}

#[test]
fn complex_svd_reconstructs() {
    let a = Matrix::from_rows(
        &[
            vec![
                Complex64::new(1.0, 2.0),
                Complex64::new(0.0, -1.0),
                Complex64::new(3.0, 0.0),
            ],
            vec![
                Complex64::new(-2.0, 1.0),
                Complex64::new(4.0, 4.0),
                Complex64::new(0.5, -0.5),
            ],
        ],
        Layout::ColumnMajor,
    );
    assert_factors_valid(&a, SvdForm::Full, 1e-12);
    assert_factors_valid(&a, SvdForm::Thin, 1e-12);
}

#[test]
fn svd_object_accessors() {
    let a = real_4x5(Layout::RowMajor);
    let svd = Svd::compute(&a, SvdForm::Thin).unwrap();
    assert_eq!(svd.u().shape(), (4, 4));
    assert_eq!(svd.vh().shape(), (4, 5));
    assert_eq!(svd.v().shape(), (5, 4));
    assert_eq!(svd.singular_values().len(), 4);

    // V is the conjugate transpose of V^H
    let v = svd.v();
    let vh = svd.vh();
    for i in 0..5 {
        for j in 0..4 {
            assert_relative_eq!(v.get(i, j), vh.get(j, i), epsilon = 1e-15);
        }
    }

    // S is structured: off-diagonal positions are structural zeros
    assert_eq!(svd.s().get(0, 1), 0.0);
    assert_eq!(svd.s().row_iter().count(), 4);
}

#[test]
fn empty_input_is_rejected() {
    let a = Matrix::<f64>::zeros(0, 3, Layout::ColumnMajor);
    assert!(singular_values(&a).is_err());
}

#[test]
fn random_matrices_reconstruct() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
    for &(m, n) in &[(6, 6), (7, 3), (3, 7)] {
        let mut a = Matrix::<f64>::zeros(m, n, Layout::ColumnMajor);
        for i in 0..m {
            for j in 0..n {
                a.set(i, j, rng.gen_range(-5.0..5.0));
            }
        }
        assert_factors_valid(&a, SvdForm::Full, 1e-11);
        assert_factors_valid(&a, SvdForm::Thin, 1e-11);
    }
}

macro_rules! svd_residual_tests {
    ($($t:ty),*) => {
        paste! {
            $(
                #[test]
                fn [<generic_residual_ $t>]() {
                    let half = <$t as RealScalar>::from_f64(0.5);
                    let mut a = Matrix::<$t>::zeros(3, 3, Layout::ColumnMajor);
                    for i in 0..3 {
                        for j in 0..3 {
                            let v = <$t as RealScalar>::from_f64((i * 3 + j) as f64);
                            a.set(i, j, v * half + <$t as RealScalar>::from_f64(1.0));
                        }
                    }
                    let tol = <$t as RealScalar>::from_f64(1e-4);
                    assert_factors_valid(&a, SvdForm::Full, tol);
                }
            )*
        }
    };
}

svd_residual_tests!(f32, f64);
