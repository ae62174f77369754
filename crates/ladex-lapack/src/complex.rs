//! Kernel dispatch for the complex element types.

use ladex_core::error::Result;
use num_complex::Complex;
use num_traits::Float;

use crate::kernel::{
    check_info, check_info_definite, job_char, logical_mask, EigOutput, GenEigOutput, Lapack,
    QzOutput, SvdMode, SvdOutput,
};

macro_rules! impl_lapack_complex {
    ($t:ty, $r:ty, $geev:path, $heev:path, $ggev:path, $hegv:path, $gges:path,
     $tgsen:path, $tgevc:path, $gesvd:path) => {
        impl Lapack for $t {
            type Beta = $t;

            #[inline]
            fn beta_is_zero(beta: $t) -> bool {
                beta.re == 0.0 && beta.im == 0.0
            }

            fn gen_eigenvalue(alpha: Complex<$r>, beta: $t) -> Complex<$r> {
                if Self::beta_is_zero(beta) {
                    if alpha.re == 0.0 && alpha.im == 0.0 {
                        Complex::new(<$r>::nan(), <$r>::nan())
                    } else {
                        Complex::new(<$r>::infinity(), 0.0)
                    }
                } else {
                    alpha / beta
                }
            }

            fn eig(
                n: usize,
                mut a: Vec<$t>,
                want_left: bool,
                want_right: bool,
            ) -> Result<EigOutput<$t>> {
                let ni = n as i32;
                let lda = ni.max(1);
                let jobvl = job_char(want_left);
                let jobvr = job_char(want_right);
                let mut w = vec![<$t>::default(); n];
                let ldvl = if want_left { lda } else { 1 };
                let ldvr = if want_right { lda } else { 1 };
                let mut vl = vec![<$t>::default(); if want_left { n * n } else { 1 }];
                let mut vr = vec![<$t>::default(); if want_right { n * n } else { 1 }];
                let mut rwork = vec![0.0; 2 * n];
                let mut info = 0;

                let mut query = vec![<$t>::default(); 1];
                unsafe {
                    $geev(
                        jobvl, jobvr, ni, &mut a, lda, &mut w, &mut vl, ldvl, &mut vr,
                        ldvr, &mut query, -1, &mut rwork, &mut info,
                    );
                }
                check_info(info)?;
                let lwork = query[0].re as i32;
                let mut work = vec![<$t>::default(); lwork.max(1) as usize];
                unsafe {
                    $geev(
                        jobvl, jobvr, ni, &mut a, lda, &mut w, &mut vl, ldvl, &mut vr,
                        ldvr, &mut work, lwork, &mut rwork, &mut info,
                    );
                }
                check_info(info)?;

                Ok(EigOutput {
                    values: w,
                    left: want_left.then_some(vl),
                    right: want_right.then_some(vr),
                })
            }

            fn eigh(
                n: usize,
                mut a: Vec<$t>,
                want_vectors: bool,
            ) -> Result<(Vec<$r>, Option<Vec<$t>>)> {
                let ni = n as i32;
                let lda = ni.max(1);
                let jobz = job_char(want_vectors);
                let mut w = vec![0.0; n];
                let mut rwork = vec![0.0; (3 * n).saturating_sub(2).max(1)];
                let mut info = 0;

                let mut query = vec![<$t>::default(); 1];
                unsafe {
                    $heev(
                        jobz, b'U', ni, &mut a, lda, &mut w, &mut query, -1, &mut rwork,
                        &mut info,
                    );
                }
                check_info(info)?;
                let lwork = query[0].re as i32;
                let mut work = vec![<$t>::default(); lwork.max(1) as usize];
                unsafe {
                    $heev(
                        jobz, b'U', ni, &mut a, lda, &mut w, &mut work, lwork, &mut rwork,
                        &mut info,
                    );
                }
                check_info(info)?;

                Ok((w, want_vectors.then_some(a)))
            }

            fn eig_pair(
                n: usize,
                mut a: Vec<$t>,
                mut b: Vec<$t>,
                want_left: bool,
                want_right: bool,
            ) -> Result<GenEigOutput<$t>> {
                let ni = n as i32;
                let lda = ni.max(1);
                let jobvl = job_char(want_left);
                let jobvr = job_char(want_right);
                let mut alpha = vec![<$t>::default(); n];
                let mut beta = vec![<$t>::default(); n];
                let ldvl = if want_left { lda } else { 1 };
                let ldvr = if want_right { lda } else { 1 };
                let mut vl = vec![<$t>::default(); if want_left { n * n } else { 1 }];
                let mut vr = vec![<$t>::default(); if want_right { n * n } else { 1 }];
                let mut rwork = vec![0.0; 8 * n];
                let mut info = 0;

                let mut query = vec![<$t>::default(); 1];
                unsafe {
                    $ggev(
                        jobvl, jobvr, ni, &mut a, lda, &mut b, lda, &mut alpha, &mut beta,
                        &mut vl, ldvl, &mut vr, ldvr, &mut query, -1, &mut rwork, &mut info,
                    );
                }
                check_info(info)?;
                let lwork = query[0].re as i32;
                let mut work = vec![<$t>::default(); lwork.max(1) as usize];
                unsafe {
                    $ggev(
                        jobvl, jobvr, ni, &mut a, lda, &mut b, lda, &mut alpha, &mut beta,
                        &mut vl, ldvl, &mut vr, ldvr, &mut work, lwork, &mut rwork,
                        &mut info,
                    );
                }
                check_info(info)?;

                Ok(GenEigOutput {
                    alpha,
                    beta,
                    left: want_left.then_some(vl),
                    right: want_right.then_some(vr),
                })
            }

            fn eigh_pair(
                n: usize,
                mut a: Vec<$t>,
                mut b: Vec<$t>,
                want_vectors: bool,
            ) -> Result<(Vec<$r>, Option<Vec<$t>>)> {
                let ni = n as i32;
                let lda = ni.max(1);
                let jobz = job_char(want_vectors);
                let mut w = vec![0.0; n];
                let mut rwork = vec![0.0; (3 * n).saturating_sub(2).max(1)];
                let mut info = 0;

                let mut query = vec![<$t>::default(); 1];
                unsafe {
                    $hegv(
                        &[1], jobz, b'U', ni, &mut a, lda, &mut b, lda, &mut w, &mut query,
                        -1, &mut rwork, &mut info,
                    );
                }
                check_info_definite(info, n)?;
                let lwork = query[0].re as i32;
                let mut work = vec![<$t>::default(); lwork.max(1) as usize];
                unsafe {
                    $hegv(
                        &[1], jobz, b'U', ni, &mut a, lda, &mut b, lda, &mut w, &mut work,
                        lwork, &mut rwork, &mut info,
                    );
                }
                check_info_definite(info, n)?;

                Ok((w, want_vectors.then_some(a)))
            }

            fn qz(n: usize, mut a: Vec<$t>, mut b: Vec<$t>) -> Result<QzOutput<$t>> {
                let ni = n as i32;
                let lda = ni.max(1);
                let mut sdim = 0;
                let mut alpha = vec![<$t>::default(); n];
                let mut beta = vec![<$t>::default(); n];
                let mut vsl = vec![<$t>::default(); (n * n).max(1)];
                let mut vsr = vec![<$t>::default(); (n * n).max(1)];
                let mut rwork = vec![0.0; (8 * n).max(1)];
                let mut bwork = vec![0; 1];
                let mut info = 0;

                let mut query = vec![<$t>::default(); 1];
                unsafe {
                    $gges(
                        b'V', b'V', b'N', None, ni, &mut a, lda, &mut b, lda, &mut sdim,
                        &mut alpha, &mut beta, &mut vsl, lda, &mut vsr, lda, &mut query,
                        -1, &mut rwork, &mut bwork, &mut info,
                    );
                }
                check_info(info)?;
                let lwork = query[0].re as i32;
                let mut work = vec![<$t>::default(); lwork.max(1) as usize];
                unsafe {
                    $gges(
                        b'V', b'V', b'N', None, ni, &mut a, lda, &mut b, lda, &mut sdim,
                        &mut alpha, &mut beta, &mut vsl, lda, &mut vsr, lda, &mut work,
                        lwork, &mut rwork, &mut bwork, &mut info,
                    );
                }
                check_info(info)?;

                Ok(QzOutput {
                    s: a,
                    t: b,
                    q: vsl,
                    z: vsr,
                    alpha,
                    beta,
                })
            }

            fn qz_reorder(
                n: usize,
                s: &mut [$t],
                t: &mut [$t],
                q: &mut [$t],
                z: &mut [$t],
                select: &[bool],
            ) -> Result<(Vec<Complex<$r>>, Vec<$t>)> {
                let ni = n as i32;
                let lda = ni.max(1);
                let sel = logical_mask(select);
                let mut alpha = vec![<$t>::default(); n];
                let mut beta = vec![<$t>::default(); n];
                let mut m = 0;
                let mut pl = [0.0];
                let mut pr = [0.0];
                let mut dif = vec![0.0; 2];
                let mut info = 0;

                let mut query = vec![<$t>::default(); 1];
                let mut iquery = vec![0; 1];
                unsafe {
                    $tgsen(
                        &[0], &[1], &[1], &sel, ni, s, lda, t, lda, &mut alpha, &mut beta, q, lda,
                        z, lda, &mut m, &mut pl, &mut pr, &mut dif, &mut query, -1,
                        &mut iquery, -1, &mut info,
                    );
                }
                check_info(info)?;
                let lwork = query[0].re as i32;
                let liwork = iquery[0];
                let mut work = vec![<$t>::default(); lwork.max(1) as usize];
                let mut iwork = vec![0; liwork.max(1) as usize];
                unsafe {
                    $tgsen(
                        &[0], &[1], &[1], &sel, ni, s, lda, t, lda, &mut alpha, &mut beta, q, lda,
                        z, lda, &mut m, &mut pl, &mut pr, &mut dif, &mut work, lwork,
                        &mut iwork, liwork, &mut info,
                    );
                }
                check_info(info)?;

                Ok((alpha, beta))
            }

            fn qz_vectors(
                n: usize,
                s: &[$t],
                t: &[$t],
                q: &[$t],
                z: &[$t],
                want_left: bool,
                want_right: bool,
            ) -> Result<(Option<Vec<$t>>, Option<Vec<$t>>)> {
                let side = match (want_left, want_right) {
                    (true, true) => b'B',
                    (true, false) => b'L',
                    (false, true) => b'R',
                    (false, false) => return Ok((None, None)),
                };
                let ni = n as i32;
                let lda = ni.max(1);
                let mut vl = if want_left {
                    q.to_vec()
                } else {
                    vec![<$t>::default(); 1]
                };
                let mut vr = if want_right {
                    z.to_vec()
                } else {
                    vec![<$t>::default(); 1]
                };
                let ldvl = if want_left { lda } else { 1 };
                let ldvr = if want_right { lda } else { 1 };
                let select: Vec<i32> = Vec::new();
                let mut m = 0;
                let mut work = vec![<$t>::default(); 2 * n];
                let mut rwork = vec![0.0; 2 * n];
                let mut info = 0;
                unsafe {
                    $tgevc(
                        side, b'B', &select, ni, s, lda, t, lda, &mut vl, ldvl, &mut vr,
                        ldvr, ni, &mut m, &mut work, &mut rwork, &mut info,
                    );
                }
                check_info(info)?;
                Ok((want_left.then_some(vl), want_right.then_some(vr)))
            }

            fn svd(m: usize, n: usize, mut a: Vec<$t>, mode: SvdMode) -> Result<SvdOutput<$t>> {
                let mi = m as i32;
                let ni = n as i32;
                let lda = mi.max(1);
                let k = m.min(n);
                let (jobu, jobvt, u_cols, vt_rows) = match mode {
                    SvdMode::Values => (b'N', b'N', 0, 0),
                    SvdMode::Thin => (b'S', b'S', k, k),
                    SvdMode::Full => (b'A', b'A', m, n),
                };
                let mut s = vec![0.0; k];
                let ldu = if u_cols > 0 { lda } else { 1 };
                let ldvt = if vt_rows > 0 { (vt_rows as i32).max(1) } else { 1 };
                let mut u = vec![<$t>::default(); (m * u_cols).max(1)];
                let mut vt = vec![<$t>::default(); (vt_rows * n).max(1)];
                let mut rwork = vec![0.0; (5 * k).max(1)];
                let mut info = 0;

                let mut query = vec![<$t>::default(); 1];
                unsafe {
                    $gesvd(
                        jobu, jobvt, mi, ni, &mut a, lda, &mut s, &mut u, ldu, &mut vt,
                        ldvt, &mut query, -1, &mut rwork, &mut info,
                    );
                }
                check_info(info)?;
                let lwork = query[0].re as i32;
                let mut work = vec![<$t>::default(); lwork.max(1) as usize];
                unsafe {
                    $gesvd(
                        jobu, jobvt, mi, ni, &mut a, lda, &mut s, &mut u, ldu, &mut vt,
                        ldvt, &mut work, lwork, &mut rwork, &mut info,
                    );
                }
                check_info(info)?;

                Ok(SvdOutput {
                    singular: s,
                    u: (u_cols > 0).then_some(u),
                    u_cols,
                    vt: (vt_rows > 0).then_some(vt),
                    vt_rows,
                })
            }

            fn expand_eigenvectors(
                _n: usize,
                _values: &[Complex<$r>],
                packed: &[$t],
            ) -> Vec<Complex<$r>> {
                // Complex element types already store fully complex columns.
                packed.to_vec()
            }
        }
    };
}

impl_lapack_complex!(
    num_complex::Complex32,
    f32,
    lapack::cgeev,
    lapack::cheev,
    lapack::cggev,
    lapack::chegv,
    lapack::cgges,
    lapack::ctgsen,
    lapack::ctgevc,
    lapack::cgesvd
);

impl_lapack_complex!(
    num_complex::Complex64,
    f64,
    lapack::zgeev,
    lapack::zheev,
    lapack::zggev,
    lapack::zhegv,
    lapack::zgges,
    lapack::ztgsen,
    lapack::ztgevc,
    lapack::zgesvd
);
