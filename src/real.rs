// Copyright 2014-2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Real-valued helpers the complex functions are built on.

#[cfg(any(feature = "std", feature = "libm"))]
use num_traits::Float;

/// Returns the logarithm of `x` with respect to `base`.
///
/// Computed as the quotient `ln(x) / ln(base)`, so `log_b(b, b)` is exactly
/// `1` for every valid base.
///
/// ```
/// use num_branch::log_b;
///
/// assert_eq!(log_b(2.0, 2.0), 1.0);
/// assert!((log_b(1000.0f64, 10.0) - 3.0).abs() < 1e-12);
/// ```
#[cfg(any(feature = "std", feature = "libm"))]
#[inline]
pub fn log_b<T: Float>(x: T, base: T) -> T {
    x.ln() / base.ln()
}

/// Returns the natural logarithm of `x`, i.e. `log_b(x, e)`.
#[cfg(any(feature = "std", feature = "libm"))]
#[inline]
pub fn ln<T: Float>(x: T) -> T {
    x.ln()
}

/// Computes `n!`, returning `None` if the result overflows a `u64`.
///
/// # Example
///
/// ```rust
/// use num_branch::checked_factorial;
///
/// assert_eq!(checked_factorial(0), Some(1));
/// assert_eq!(checked_factorial(5), Some(120));
/// assert_eq!(checked_factorial(21), None);
/// ```
#[inline]
pub fn checked_factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

#[cfg(test)]
mod test {
    use super::checked_factorial;

    #[test]
    fn test_factorial() {
        assert_eq!(checked_factorial(0), Some(1));
        assert_eq!(checked_factorial(1), Some(1));
        assert_eq!(checked_factorial(5), Some(120));
        assert_eq!(checked_factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(checked_factorial(21), None);
        assert_eq!(checked_factorial(u64::MAX), None);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    mod logs {
        use super::super::{ln, log_b};
        use core::f64::consts::E;

        #[test]
        fn test_log_b() {
            assert_eq!(log_b(2.0, 2.0), 1.0);
            assert!((log_b(8.0f64, 2.0) - 3.0).abs() < 1e-12);
            assert!((log_b(0.01f64, 10.0) + 2.0).abs() < 1e-12);
            assert!((log_b(1.0f32, 3.0) - 0.0).abs() < 1e-6);
        }

        #[test]
        fn test_log_b_degenerate() {
            // ln(1) == 0 in the denominator
            assert!(log_b(2.0f64, 1.0).is_infinite());
            assert!(log_b(1.0f64, 1.0).is_nan());
            assert!(log_b(-2.0f64, 10.0).is_nan());
            assert_eq!(log_b(0.0, 10.0), f64::NEG_INFINITY);
        }

        #[test]
        fn test_ln() {
            assert!((ln(E * E) - 2.0).abs() < 1e-15);
            assert_eq!(ln(1.0), 0.0);
            assert!((ln(10.0) - log_b(10.0, E)).abs() < 1e-15);
        }
    }
}
