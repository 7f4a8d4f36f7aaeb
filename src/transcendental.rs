// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Logarithms, powers and the circular and hyperbolic functions.
//!
//! The logarithm and the powers are multi-valued in the complex plane. Each
//! comes as a principal-value method and a `_branch` method; branch `n`
//! measures the angle of the input as `arg(z) + 2πn`, and branch `0` is the
//! principal value.

use num_traits::{Float, FloatConst, NumCast, Pow};

use crate::real::log_b;
use crate::Complex;

/// Moves the angle `theta` onto branch `n`.
#[inline]
fn on_branch<T: Float + FloatConst>(theta: T, branch: i32) -> T {
    match <T as NumCast>::from(branch) {
        Some(n) => theta + T::TAU() * n,
        None => T::nan(),
    }
}

impl<T: Float + FloatConst> Complex<T> {
    /// Computes `e^(self)`, where `e` is the base of the natural logarithm.
    #[inline]
    pub fn exp(&self) -> Complex<T> {
        // formula: e^(a + bi) = e^a (cos(b) + i*sin(b))
        // = from_polar(e^a, b)
        Complex::from_polar(self.re().exp(), self.im())
    }

    /// Computes the principal value of the natural logarithm of `self`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0]`, continuous from above.
    ///
    /// The branch satisfies `-π < Im(ln(z)) ≤ π`.
    #[inline]
    pub fn ln(&self) -> Complex<T> {
        self.ln_branch(0)
    }

    /// Computes the natural logarithm of `self` on the given branch.
    ///
    /// Branch `n` differs from the principal value by `2πn i`.
    ///
    /// ```
    /// use num_branch::Complex64;
    /// use std::f64::consts::PI;
    ///
    /// let z = Complex64::new(-1.0, 0.0);
    /// assert!((z.ln_branch(-1).im() + PI).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn ln_branch(&self, branch: i32) -> Complex<T> {
        // formula: ln(z) = ln|z| + i*(arg(z) + 2πn)
        let (r, theta) = self.to_polar();
        Complex::new(r.ln(), on_branch(theta, branch))
    }

    /// Returns the logarithm of `self` with respect to an arbitrary base.
    #[inline]
    pub fn log(&self, base: T) -> Complex<T> {
        self.log_branch(base, 0)
    }

    /// Returns the logarithm of `self` with respect to `base`, on the given
    /// branch.
    #[inline]
    pub fn log_branch(&self, base: T, branch: i32) -> Complex<T> {
        // formula: log_y(x) = log_y(ρ e^(i θ))
        // = log_y(ρ) + log_y(e^(i θ)) = log_y(ρ) + ln(e^(i θ)) / ln(y)
        // = log_y(ρ) + i log_y(e) θ
        let (r, theta) = self.to_polar();
        Complex::new(log_b(r, base), log_b(T::E(), base) * on_branch(theta, branch))
    }

    /// Computes the principal value of the square root of `self`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0)`, continuous from above.
    ///
    /// The branch satisfies `-π/2 < arg(sqrt(z)) ≤ π/2`.
    #[inline]
    pub fn sqrt(&self) -> Complex<T> {
        self.sqrt_branch(0)
    }

    /// Computes the square root of `self` on the given branch. Odd branches
    /// give the negated principal root.
    #[inline]
    pub fn sqrt_branch(&self, branch: i32) -> Complex<T> {
        let half = T::one() / (T::one() + T::one());
        self.powf_branch(half, branch)
    }

    /// Raises `self` to a floating point power.
    #[inline]
    pub fn powf(&self, exp: T) -> Complex<T> {
        self.powf_branch(exp, 0)
    }

    /// Raises `self` to a floating point power, on the given branch.
    ///
    /// The origin has no argument, so every power of it is NaN.
    #[inline]
    pub fn powf_branch(&self, exp: T, branch: i32) -> Complex<T> {
        // formula: x^y = (ρ e^(i θ))^y = ρ^y e^(i θ y)
        // = from_polar(ρ^y, θ y)
        let (r, theta) = self.to_polar();
        Complex::from_polar(r.powf(exp), on_branch(theta, branch) * exp)
    }

    /// Raises `self` to a complex power.
    #[inline]
    pub fn powc(&self, exp: Complex<T>) -> Complex<T> {
        self.powc_branch(exp, 0)
    }

    /// Raises `self` to a complex power, on the given branch.
    ///
    /// ```
    /// use num_branch::Complex64;
    /// use std::f64::consts::PI;
    ///
    /// // i^i is real on every branch
    /// let i = Complex64::i();
    /// assert!((i.powc(i).re() - (-PI / 2.0).exp()).abs() < 1e-12);
    /// assert!((i.powc_branch(i, 1).re() - (-5.0 * PI / 2.0).exp()).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn powc_branch(&self, exp: Complex<T>, branch: i32) -> Complex<T> {
        // formula: x^y = (a + i b)^(c + i d) = e^((c + i d) ln(x))
        //    where ln(x) = ln(ρ²)/2 + i θ and ρ² = a² + b²
        // = e^((c/2) ln(ρ²) − d θ) e^(i ((d/2) ln(ρ²) + c θ))
        // = from_polar(e^((c/2) ln(ρ²) − d θ), (d/2) ln(ρ²) + c θ)
        let two = T::one() + T::one();
        let mut ln_norm_sqr = self.norm_sqr().ln();
        if !ln_norm_sqr.is_finite() {
            // ρ² left the float range; 2 ln(ρ) is still finite for finite nonzero z
            ln_norm_sqr = two * self.norm().ln();
        }
        // a zero coefficient must not turn an infinite ln(ρ²) into NaN
        let half_ln = |k: T| if k == T::zero() { T::zero() } else { k / two * ln_norm_sqr };
        let theta = on_branch(self.arg(), branch);
        let (c, d) = (exp.re(), exp.im());
        Complex::from_polar((half_ln(c) - d * theta).exp(), half_ln(d) + c * theta)
    }

    /// Raises a floating point number to the complex power `self`.
    #[inline]
    pub fn expf(&self, base: T) -> Complex<T> {
        self.expf_branch(base, 0)
    }

    /// Raises a floating point number to the complex power `self`, on the
    /// given branch.
    ///
    /// `base` is taken as a positive real, so its logarithm is `ln(base)` and
    /// the branch only moves the angle `2πn`. Negative bases give NaN; use
    /// [`powc`](Complex::powc) for those.
    #[inline]
    pub fn expf_branch(&self, base: T, branch: i32) -> Complex<T> {
        // formula: x^(a+bi) = e^((a+bi)(ln(x) + i θ)) with θ = 2πn
        // = from_polar(x^a e^(−b θ), b ln(x) + a θ)
        let theta = on_branch(T::zero(), branch);
        let (a, b) = (self.re(), self.im());
        Complex::from_polar(base.powf(a) * (-b * theta).exp(), b * base.ln() + a * theta)
    }

    // e^(iz) and e^(-iz), with iz = -b + ai for z = a + bi
    #[inline]
    fn exp_i_pair(&self) -> (Complex<T>, Complex<T>) {
        let (a, b) = (self.re(), self.im());
        (Complex::new(-b, a).expf(T::E()), Complex::new(b, -a).expf(T::E()))
    }

    /// Computes the sine of `self`.
    #[inline]
    pub fn sin(&self) -> Complex<T> {
        // formula: sin(z) = (e^(iz) - e^(-iz)) / 2i
        let two_i = Complex::new(T::zero(), T::one() + T::one());
        let (e_iz, e_neg_iz) = self.exp_i_pair();
        (e_iz - e_neg_iz) / two_i
    }

    /// Computes the cosine of `self`.
    #[inline]
    pub fn cos(&self) -> Complex<T> {
        // formula: cos(z) = (e^(iz) + e^(-iz)) / 2
        let (e_iz, e_neg_iz) = self.exp_i_pair();
        (e_iz + e_neg_iz).unscale(T::one() + T::one())
    }

    /// Computes the tangent of `self`.
    #[inline]
    pub fn tan(&self) -> Complex<T> {
        self.sin() / self.cos()
    }

    /// Computes the secant of `self`.
    #[inline]
    pub fn sec(&self) -> Complex<T> {
        self.cos().inv()
    }

    /// Computes the cosecant of `self`.
    #[inline]
    pub fn csc(&self) -> Complex<T> {
        self.sin().inv()
    }

    /// Computes the cotangent of `self`.
    #[inline]
    pub fn cot(&self) -> Complex<T> {
        self.tan().inv()
    }

    /// Computes the hyperbolic sine of `self`.
    #[inline]
    pub fn sinh(&self) -> Complex<T> {
        // formula: sinh(a + bi) = cos(b)sinh(a) + i*sin(b)cosh(a)
        let (a, b) = (self.re(), self.im());
        Complex::new(b.cos() * a.sinh(), b.sin() * a.cosh())
    }

    /// Computes the hyperbolic cosine of `self`.
    #[inline]
    pub fn cosh(&self) -> Complex<T> {
        // formula: cosh(a + bi) = cos(b)cosh(a) + i*sin(b)sinh(a)
        let (a, b) = (self.re(), self.im());
        Complex::new(b.cos() * a.cosh(), b.sin() * a.sinh())
    }

    /// Computes the hyperbolic tangent of `self`.
    #[inline]
    pub fn tanh(&self) -> Complex<T> {
        self.sinh() / self.cosh()
    }

    /// Computes the hyperbolic secant of `self`.
    #[inline]
    pub fn sech(&self) -> Complex<T> {
        self.cosh().inv()
    }

    /// Computes the hyperbolic cosecant of `self`.
    #[inline]
    pub fn csch(&self) -> Complex<T> {
        self.sinh().inv()
    }

    /// Computes the hyperbolic cotangent of `self`.
    #[inline]
    pub fn coth(&self) -> Complex<T> {
        self.tanh().inv()
    }
}

impl<T: Float + FloatConst> Pow<T> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn pow(self, exp: T) -> Complex<T> {
        self.powf(exp)
    }
}

impl<'a, T: Float + FloatConst> Pow<T> for &'a Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn pow(self, exp: T) -> Complex<T> {
        self.powf(exp)
    }
}

impl<T: Float + FloatConst> Pow<Complex<T>> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn pow(self, exp: Complex<T>) -> Complex<T> {
        self.powc(exp)
    }
}

impl<'a, T: Float + FloatConst> Pow<Complex<T>> for &'a Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn pow(self, exp: Complex<T>) -> Complex<T> {
        self.powc(exp)
    }
}
