// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The complex value type and its field arithmetic.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(any(feature = "std", feature = "libm"))]
use num_traits::{Float, FloatConst};
use num_traits::{Num, One, Zero};

/// A complex number in Cartesian form.
///
/// Values are immutable: the components are fixed by [`Complex::new`] and
/// every operation returns a new `Complex`.
///
/// Floating point degeneracies are carried as data rather than reported.
/// Dividing by zero or taking the argument of the origin yields infinite or
/// NaN components, which [`is_nan`](Complex::is_nan) and
/// [`is_finite`](Complex::is_finite) can detect.
///
/// ```
/// use num_branch::Complex;
///
/// let z = Complex::new(6.0, -4.0) / Complex::new(2.0, -2.0);
/// assert_eq!(z, Complex::new(2.5, 0.5));
///
/// let q = Complex::new(1.0f64, 1.0) / Complex::new(0.0, 0.0);
/// assert!(q.re().is_nan() && q.im().is_nan());
/// ```
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug, Default)]
#[repr(C)]
pub struct Complex<T> {
    re: T,
    im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
    /// Create a new Complex
    #[inline]
    pub const fn new(re: T, im: T) -> Complex<T> {
        Complex { re, im }
    }
}

impl<T: Clone> Complex<T> {
    /// Real portion of the complex number
    #[inline]
    pub fn re(&self) -> T {
        self.re.clone()
    }

    /// Imaginary portion of the complex number
    #[inline]
    pub fn im(&self) -> T {
        self.im.clone()
    }
}

impl<T: Clone + Num> Complex<T> {
    /// Returns imaginary unit
    #[inline]
    pub fn i() -> Complex<T> {
        Self::new(T::zero(), T::one())
    }

    /// Returns the square of the norm (since `T` doesn't necessarily
    /// have a sqrt function), i.e. `re^2 + im^2`.
    #[inline]
    pub fn norm_sqr(&self) -> T {
        self.re.clone() * self.re.clone() + self.im.clone() * self.im.clone()
    }

    /// Multiplies `self` by the scalar `t`.
    #[inline]
    pub fn scale(&self, t: T) -> Complex<T> {
        Complex::new(self.re.clone() * t.clone(), self.im.clone() * t)
    }

    /// Divides `self` by the scalar `t`.
    #[inline]
    pub fn unscale(&self, t: T) -> Complex<T> {
        Complex::new(self.re.clone() / t.clone(), self.im.clone() / t)
    }
}

impl<T: Clone + Num + Neg<Output = T>> Complex<T> {
    /// Returns the complex conjugate. i.e. `re - i im`
    #[inline]
    pub fn conj(&self) -> Complex<T> {
        Complex::new(self.re.clone(), -self.im.clone())
    }

    /// Returns `1/self`
    #[inline]
    pub fn inv(&self) -> Complex<T> {
        let norm_sqr = self.norm_sqr();
        Complex::new(
            self.re.clone() / norm_sqr.clone(),
            -self.im.clone() / norm_sqr,
        )
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
impl<T: Float> Complex<T> {
    /// Calculate |self|, the distance from the origin.
    #[inline]
    pub fn norm(&self) -> T {
        self.re.hypot(self.im)
    }

    /// Convert a polar representation into a complex number.
    #[inline]
    pub fn from_polar(r: T, theta: T) -> Complex<T> {
        Complex::new(r * theta.cos(), r * theta.sin())
    }

    /// Checks if the given complex number is NaN
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Checks if the given complex number is infinite
    #[inline]
    pub fn is_infinite(self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    /// Checks if the given complex number is finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Checks if the given complex number is normal
    #[inline]
    pub fn is_normal(self) -> bool {
        self.re.is_normal() && self.im.is_normal()
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
impl<T: Float + FloatConst> Complex<T> {
    /// Calculate the principal Arg of self, in `(-π, π]`.
    ///
    /// Points on the real axis are exact: `0` on the positive side and `π`
    /// on the negative side, whatever the sign of a zero imaginary part.
    /// The argument of the origin is undefined and comes back as NaN.
    #[inline]
    pub fn arg(&self) -> T {
        let two = T::one() + T::one();
        if !self.im.is_zero() {
            // half-angle form, tan(θ/2) = im / (|z| + re) = (|z| - re) / im;
            // the second quotient avoids cancellation when re < 0, but is
            // inf/inf for an infinite im
            if self.re < T::zero() && !self.im.is_infinite() {
                two * ((self.norm() - self.re) / self.im).atan()
            } else {
                two * self.im.atan2(self.norm() + self.re)
            }
        } else if self.re > T::zero() {
            T::zero()
        } else if self.re < T::zero() {
            T::PI()
        } else {
            T::nan()
        }
    }

    /// Convert to polar form (r, theta), such that
    /// `self = r * exp(i * theta)`
    #[inline]
    pub fn to_polar(&self) -> (T, T) {
        (self.norm(), self.arg())
    }
}

impl<T: Clone + Num> From<T> for Complex<T> {
    #[inline]
    fn from(re: T) -> Complex<T> {
        Complex::new(re, T::zero())
    }
}

impl<'a, T: Clone + Num> From<&'a T> for Complex<T> {
    #[inline]
    fn from(re: &T) -> Complex<T> {
        From::from(re.clone())
    }
}

// Expands an owned `Complex op Complex` impl to the borrowed combinations.
macro_rules! forward_ref_binops {
    ($($imp:ident::$method:ident),*) => {$(
        impl<'a, 'b, T: Clone + Num> $imp<&'b Complex<T>> for &'a Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: &Complex<T>) -> Complex<T> {
                self.clone().$method(other.clone())
            }
        }

        impl<'a, T: Clone + Num> $imp<Complex<T>> for &'a Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: Complex<T>) -> Complex<T> {
                self.clone().$method(other)
            }
        }

        impl<'a, T: Clone + Num> $imp<&'a Complex<T>> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: &Complex<T>) -> Complex<T> {
                self.$method(other.clone())
            }
        }
    )*};
}

forward_ref_binops!(Add::add, Sub::sub, Mul::mul, Div::div);

// (a + i b) + (c + i d) == (a + c) + i (b + d)
impl<T: Clone + Num> Add<Complex<T>> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn add(self, other: Complex<T>) -> Complex<T> {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

// (a + i b) - (c + i d) == (a - c) + i (b - d)
impl<T: Clone + Num> Sub<Complex<T>> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn sub(self, other: Complex<T>) -> Complex<T> {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

// (a + i b) * (c + i d) == (a*c - b*d) + i (a*d + b*c)
impl<T: Clone + Num> Mul<Complex<T>> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn mul(self, other: Complex<T>) -> Complex<T> {
        let re = self.re.clone() * other.re.clone() - self.im.clone() * other.im.clone();
        let im = self.re * other.im + self.im * other.re;
        Complex::new(re, im)
    }
}

// (a + i b) / (c + i d) == [(a + i b) * (c - i d)] / (c*c + d*d)
//   == [(a*c + b*d) / (c*c + d*d)] + i [(b*c - a*d) / (c*c + d*d)]
//
// A zero divisor is not special-cased: floats give inf/NaN components and
// integers panic, as the component division does.
impl<T: Clone + Num> Div<Complex<T>> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn div(self, other: Complex<T>) -> Complex<T> {
        let norm_sqr = other.norm_sqr();
        let re = self.re.clone() * other.re.clone() + self.im.clone() * other.im.clone();
        let im = self.im * other.re - self.re * other.im;
        Complex::new(re / norm_sqr.clone(), im / norm_sqr)
    }
}

impl<T: Clone + Num + Neg<Output = T>> Neg for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        Complex::new(-self.re, -self.im)
    }
}

impl<'a, T: Clone + Num + Neg<Output = T>> Neg for &'a Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        -self.clone()
    }
}

// Mixed arithmetic with a real scalar on either side.
macro_rules! real_arithmetic {
    (@scalar $imp:ident::$method:ident, |$z:ident, $t:ident| $body:expr) => {
        impl<T: Clone + Num> $imp<T> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: T) -> Complex<T> {
                let ($z, $t) = (self, other);
                $body
            }
        }

        impl<'a, T: Clone + Num> $imp<&'a T> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: &T) -> Complex<T> {
                self.$method(other.clone())
            }
        }

        impl<'a, T: Clone + Num> $imp<T> for &'a Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, other: T) -> Complex<T> {
                self.clone().$method(other)
            }
        }
    };
    (@real $imp:ident::$method:ident for $($real:ident),*) => {$(
        impl $imp<Complex<$real>> for $real {
            type Output = Complex<$real>;

            #[inline]
            fn $method(self, other: Complex<$real>) -> Complex<$real> {
                Complex::from(self).$method(other)
            }
        }

        impl<'a> $imp<&'a Complex<$real>> for $real {
            type Output = Complex<$real>;

            #[inline]
            fn $method(self, other: &Complex<$real>) -> Complex<$real> {
                Complex::from(self).$method(other.clone())
            }
        }
    )*};
    ($($real:ident),*) => {
        real_arithmetic!(@scalar Add::add, |z, t| Complex::new(z.re + t, z.im));
        real_arithmetic!(@scalar Sub::sub, |z, t| Complex::new(z.re - t, z.im));
        real_arithmetic!(@scalar Mul::mul, |z, t| z.scale(t));
        real_arithmetic!(@scalar Div::div, |z, t| z.unscale(t));
        real_arithmetic!(@real Add::add for $($real),*);
        real_arithmetic!(@real Sub::sub for $($real),*);
        real_arithmetic!(@real Mul::mul for $($real),*);
        real_arithmetic!(@real Div::div for $($real),*);
    };
}

real_arithmetic!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);

/* constants */
impl<T: Clone + Num> Zero for Complex<T> {
    #[inline]
    fn zero() -> Complex<T> {
        Complex::new(Zero::zero(), Zero::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: Clone + Num> One for Complex<T> {
    #[inline]
    fn one() -> Complex<T> {
        Complex::new(One::one(), Zero::zero())
    }
}

/* string conversions */

// Formats both parts with the flags of `$f`, then joins them.
macro_rules! write_complex {
    ($f:ident, $t:expr, $re:expr, $im:expr) => {{
        let (re, im): (String, String) = match $f.precision() {
            Some(prec) => (
                format!(concat!("{:.1$", $t, "}"), $re, prec),
                format!(concat!("{:.1$", $t, "}"), $im, prec),
            ),
            None => (
                format!(concat!("{:", $t, "}"), $re),
                format!(concat!("{:", $t, "}"), $im),
            ),
        };
        pad_complex($f, &re, &im)
    }};
}

// The operator between the parts is taken from the rendered imaginary part,
// so a negative zero prints as `-0i`.
fn pad_complex(f: &mut fmt::Formatter<'_>, re: &str, im: &str) -> fmt::Result {
    let sign = if f.sign_plus() && !re.starts_with('-') { "+" } else { "" };
    let (op, im) = match im.strip_prefix('-') {
        Some(abs) => ('-', abs),
        None => ('+', im),
    };
    let complex = format!("{}{}{}{}i", sign, re, op, im);

    match f.width() {
        Some(width) => write!(f, "{0: >1$}", complex, width),
        None => f.write_str(&complex),
    }
}

impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_complex!(f, "", self.re, self.im)
    }
}

impl<T: fmt::LowerExp> fmt::LowerExp for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_complex!(f, "e", self.re, self.im)
    }
}

impl<T: fmt::UpperExp> fmt::UpperExp for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_complex!(f, "E", self.re, self.im)
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Complex<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.re, &self.im).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Complex<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (re, im) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Complex::new(re, im))
    }
}
