//! Scalar element types accepted by the containers and kernels.
//!
//! Four element types are supported: `f32`, `f64`, `Complex32`, `Complex64`.
//! Dispatch over them is static; there is no runtime element-type tag.

use num_complex::{Complex, Complex32, Complex64};
use num_traits::{Float, One, Zero};

/// Common scalar trait for matrix and vector elements.
pub trait Scalar:
    Clone
    + Copy
    + PartialEq
    + std::fmt::Debug
    + Zero
    + One
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + Default
    + Send
    + Sync
    + 'static
{
    /// The matching real type (`Self` for real scalars).
    type Real: RealScalar;

    /// True for `Complex32` / `Complex64`.
    const COMPLEX: bool;

    /// Complex conjugate (identity for real types).
    fn conj(self) -> Self;

    /// Embed a real value.
    fn from_real(re: Self::Real) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part (zero for real types).
    fn im(self) -> Self::Real;

    /// |self|.
    fn modulus(self) -> Self::Real;

    /// |self|^2.
    fn modulus_sq(self) -> Self::Real;

    /// The value as a complex number over [`Scalar::Real`].
    fn to_complex(self) -> Complex<Self::Real>;
}

/// Real scalars (`f32`, `f64`).
pub trait RealScalar: Scalar<Real = Self> + Float + PartialOrd {
    /// Conversion from `f64`, used for literals in generic code.
    fn from_f64(v: f64) -> Self;
}

/// Complex scalars (`Complex32`, `Complex64`).
pub trait ComplexScalar: Scalar {}

impl Scalar for f64 {
    type Real = f64;
    const COMPLEX: bool = false;

    #[inline]
    fn conj(self) -> Self {
        self
    }

    #[inline]
    fn from_real(re: f64) -> Self {
        re
    }

    #[inline]
    fn re(self) -> f64 {
        self
    }

    #[inline]
    fn im(self) -> f64 {
        0.0
    }

    #[inline]
    fn modulus(self) -> f64 {
        Float::abs(self)
    }

    #[inline]
    fn modulus_sq(self) -> f64 {
        self * self
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
}

impl RealScalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Scalar for f32 {
    type Real = f32;
    const COMPLEX: bool = false;

    #[inline]
    fn conj(self) -> Self {
        self
    }

    #[inline]
    fn from_real(re: f32) -> Self {
        re
    }

    #[inline]
    fn re(self) -> f32 {
        self
    }

    #[inline]
    fn im(self) -> f32 {
        0.0
    }

    #[inline]
    fn modulus(self) -> f32 {
        Float::abs(self)
    }

    #[inline]
    fn modulus_sq(self) -> f32 {
        self * self
    }

    #[inline]
    fn to_complex(self) -> Complex32 {
        Complex32::new(self, 0.0)
    }
}

impl RealScalar for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for Complex64 {
    type Real = f64;
    const COMPLEX: bool = true;

    #[inline]
    fn conj(self) -> Self {
        Complex64::conj(&self)
    }

    #[inline]
    fn from_real(re: f64) -> Self {
        Complex64::new(re, 0.0)
    }

    #[inline]
    fn re(self) -> f64 {
        self.re
    }

    #[inline]
    fn im(self) -> f64 {
        self.im
    }

    #[inline]
    fn modulus(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn modulus_sq(self) -> f64 {
        self.norm_sqr()
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
}

impl ComplexScalar for Complex64 {}

impl Scalar for Complex32 {
    type Real = f32;
    const COMPLEX: bool = true;

    #[inline]
    fn conj(self) -> Self {
        Complex32::conj(&self)
    }

    #[inline]
    fn from_real(re: f32) -> Self {
        Complex32::new(re, 0.0)
    }

    #[inline]
    fn im(self) -> f32 {
        self.im
    }

    #[inline]
    fn re(self) -> f32 {
        self.re
    }

    #[inline]
    fn modulus(self) -> f32 {
        self.norm()
    }

    #[inline]
    fn modulus_sq(self) -> f32 {
        self.norm_sqr()
    }

    #[inline]
    fn to_complex(self) -> Complex32 {
        self
    }
}

impl ComplexScalar for Complex32 {}
