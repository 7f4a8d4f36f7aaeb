// Copyright 2014-2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Complex numbers with branch-aware transcendental functions.
//!
//! [`Complex`] is a plain value type in Cartesian form. On top of the usual
//! field arithmetic it provides the logarithm and power functions of the
//! complex plane, which are multi-valued: every such method has a principal
//! form (`ln`, `log`, `powf`, `powc`, `expf`, `sqrt`) and a `_branch` form
//! whose extra `i32` argument selects another value by shifting the angle
//! of the input by `2πn`.
//!
//! ## Example
//!
//! ```
//! use num_branch::Complex64;
//! use std::f64::consts::{E, PI};
//!
//! let z: Complex64 = "-1 + 0i".parse().unwrap();
//! # #[cfg(any(feature = "std", feature = "libm"))]
//! # {
//! assert!((z.ln().im() - PI).abs() < 1e-12);
//!
//! // the next branch up adds 2πi
//! assert!((z.ln_branch(1).im() - 3.0 * PI).abs() < 1e-12);
//!
//! // e^(iπ) = -1
//! let w = Complex64::new(0.0, PI).expf(E);
//! assert!((w.re() + 1.0).abs() < 1e-12 && w.im().abs() < 1e-12);
//! # }
//! ```
//!
//! Degenerate inputs are not treated as errors: dividing by zero, taking the
//! argument of the origin or the logarithm of zero all yield infinite or NaN
//! components, just as the primitive float operations do. Only
//! [parsing](ParseComplexError) reports failure through a `Result`.
#![no_std]
#![doc(html_root_url = "https://docs.rs/num-branch/0.1")]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use complex::{Complex, Complex32, Complex64};
pub use parse::ParseComplexError;
#[cfg(any(feature = "std", feature = "libm"))]
pub use real::{ln, log_b};
pub use real::checked_factorial;

pub mod complex;
mod parse;
#[cfg(any(test, feature = "quickcheck"))]
mod quickcheck_impls;
pub mod real;
#[cfg(any(feature = "std", feature = "libm"))]
mod transcendental;

#[cfg(test)]
fn hash<T: core::hash::Hash>(x: &T) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}
