// Copyright 2025 the Conic Roots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(
            #[inline]
            fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("conic-roots requires either the `std` or `libm` feature")
            }
            )+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn acos(self) -> Self => acos;
    fn cbrt(self) -> Self => cbrt;
    fn cos(self) -> Self => cos;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
}

/// The sign of `x`: `1.0`, `-1.0`, or `0.0` for either signed zero.
///
/// Unlike [`f64::signum`], zero maps to zero. That is what the closed-form
/// solvers need when picking the numerically stable branch: a zero linear
/// coefficient must not be pushed to one side. NaN is returned unchanged.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        // Either zero or NaN, both of which are their own sign.
        x * 0.0
    }
}

/// Which way [`cos_shifted_third`] rotates its angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shift {
    /// `θ + 2π/3`
    Plus,
    /// `θ - 2π/3`
    Minus,
}

impl Shift {
    #[inline]
    fn factor(self) -> f64 {
        match self {
            Shift::Plus => 1.0,
            Shift::Minus => -1.0,
        }
    }
}

/// Compute `cos(θ ± 2π/3)` from the sine and cosine of `θ`.
///
/// This is `-½ (cos θ ± √3 sin θ)`, which avoids adding a rounded `2π/3`
/// to the angle.
#[inline]
pub fn cos_shifted_third(theta: f64, shift: Shift) -> f64 {
    let (sin, cos) = theta.sin_cos();
    -0.5 * (cos + shift.factor() * sin * SQRT_3)
}

const SQRT_3: f64 = 1.7320508075688772;

/// Evaluate a polynomial given its coefficients, highest degree first.
///
/// An empty slice is the zero polynomial.
#[inline]
pub fn eval_poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}
