//! Scalar capability set of the binding layer.
//!
//! Every operation is generic over [`Scalar`], which is implemented for the
//! four LAPACK precisions. Arithmetic comes from nalgebra's `ComplexField`;
//! the trait adds the native identity of each type.

use lapack_abi::ScalarKind;
use nalgebra::ComplexField;
use num_complex::{Complex32, Complex64};

/// Real counterpart of a scalar: `f32` for `Complex<f32>`, itself for reals.
pub type RealOf<T> = <T as ComplexField>::RealField;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for num_complex::Complex32 {}
    impl Sealed for num_complex::Complex64 {}
}

/// One of `f32`, `f64`, `Complex<f32>`, `Complex<f64>`.
pub trait Scalar: ComplexField + nalgebra::Scalar + Copy + sealed::Sealed {
    /// Native type prefix (`s`, `d`, `c`, `z`).
    const KIND: ScalarKind;

    /// Builds a value from real and imaginary parts. Real types drop `im`.
    fn from_parts(re: f64, im: f64) -> Self;

    fn to_parts(self) -> (f64, f64);

    fn real_from_f64(x: f64) -> RealOf<Self>;

    fn real_to_f64(x: RealOf<Self>) -> f64;

    /// Smallest positive normal number of the real type.
    fn safe_min() -> RealOf<Self>;

    fn epsilon() -> RealOf<Self>;
}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::Single;

    fn from_parts(re: f64, _im: f64) -> Self {
        re as f32
    }

    fn to_parts(self) -> (f64, f64) {
        (f64::from(self), 0.0)
    }

    fn real_from_f64(x: f64) -> f32 {
        x as f32
    }

    fn real_to_f64(x: f32) -> f64 {
        f64::from(x)
    }

    fn safe_min() -> f32 {
        f32::MIN_POSITIVE
    }

    fn epsilon() -> f32 {
        f32::EPSILON
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Double;

    fn from_parts(re: f64, _im: f64) -> Self {
        re
    }

    fn to_parts(self) -> (f64, f64) {
        (self, 0.0)
    }

    fn real_from_f64(x: f64) -> f64 {
        x
    }

    fn real_to_f64(x: f64) -> f64 {
        x
    }

    fn safe_min() -> f64 {
        f64::MIN_POSITIVE
    }

    fn epsilon() -> f64 {
        f64::EPSILON
    }
}

impl Scalar for Complex32 {
    const KIND: ScalarKind = ScalarKind::ComplexSingle;

    fn from_parts(re: f64, im: f64) -> Self {
        Complex32::new(re as f32, im as f32)
    }

    fn to_parts(self) -> (f64, f64) {
        (f64::from(self.re), f64::from(self.im))
    }

    fn real_from_f64(x: f64) -> f32 {
        x as f32
    }

    fn real_to_f64(x: f32) -> f64 {
        f64::from(x)
    }

    fn safe_min() -> f32 {
        f32::MIN_POSITIVE
    }

    fn epsilon() -> f32 {
        f32::EPSILON
    }
}

impl Scalar for Complex64 {
    const KIND: ScalarKind = ScalarKind::ComplexDouble;

    fn from_parts(re: f64, im: f64) -> Self {
        Complex64::new(re, im)
    }

    fn to_parts(self) -> (f64, f64) {
        (self.re, self.im)
    }

    fn real_from_f64(x: f64) -> f64 {
        x
    }

    fn real_to_f64(x: f64) -> f64 {
        x
    }

    fn safe_min() -> f64 {
        f64::MIN_POSITIVE
    }

    fn epsilon() -> f64 {
        f64::EPSILON
    }
}
