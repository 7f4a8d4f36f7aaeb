// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::string::String;
use core::fmt;
use core::ops::Neg;
use core::str::FromStr;

use num_traits::Num;

use crate::Complex;

/// Parses `a+bi` notation.
///
/// Accepted forms are `a+bi`, `a-bi`, `a+i` and `a-i`, with an optional
/// sign in front of the real part and whitespace anywhere. Both parts are
/// required. A sign directly after an `e` or `E` belongs to an exponent, so
/// `1e-3 + 2.5e2i` is read as expected.
///
/// ```
/// use num_branch::Complex64;
///
/// assert_eq!("1 + i".parse(), Ok(Complex64::new(1.0, 1.0)));
/// assert_eq!("-1 - 2.5i".parse(), Ok(Complex64::new(-1.0, -2.5)));
/// assert!("4".parse::<Complex64>().is_err());
/// ```
impl<T> FromStr for Complex<T>
where
    T: Clone + Num + Neg<Output = T> + FromStr,
{
    type Err = ParseComplexError<T::Err>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if s.is_empty() {
            return Err(ParseComplexError::new(ComplexErrorKind::Empty));
        }

        let mut boundaries = split_points(&s);
        let split = match boundaries.next() {
            Some(at) => at,
            None => return Err(ParseComplexError::new(ComplexErrorKind::MissingImaginary)),
        };
        if boundaries.next().is_some() {
            return Err(ParseComplexError::new(ComplexErrorKind::ExtraSeparator));
        }

        let (real, rest) = s.split_at(split);
        let negative = rest.starts_with('-');
        let imag = &rest[1..];

        let re = T::from_str(real).map_err(|e| ParseComplexError::new(ComplexErrorKind::InvalidReal(e)))?;

        let coefficient = match imag.strip_suffix('i') {
            Some(coefficient) => coefficient,
            None => return Err(ParseComplexError::new(ComplexErrorKind::MissingUnit)),
        };
        let im = if coefficient.is_empty() {
            T::one()
        } else {
            T::from_str(coefficient).map_err(|e| ParseComplexError::new(ComplexErrorKind::InvalidImaginary(e)))?
        };

        Ok(Complex::new(re, if negative { -im } else { im }))
    }
}

/// Byte offsets of the signs that separate terms: every `+` or `-` past
/// the first character that is not the sign of an exponent.
fn split_points(s: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().skip(1).filter_map(move |(at, &b)| {
        let exponent = matches!(bytes[at - 1], b'e' | b'E');
        if (b == b'+' || b == b'-') && !exponent {
            Some(at)
        } else {
            None
        }
    })
}

/// An error which can be returned when parsing a [`Complex`] number.
///
/// `E` is the error type of the component parser, e.g.
/// `core::num::ParseFloatError` for `Complex<f64>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseComplexError<E> {
    kind: ComplexErrorKind<E>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ComplexErrorKind<E> {
    Empty,
    MissingImaginary,
    ExtraSeparator,
    MissingUnit,
    InvalidReal(E),
    InvalidImaginary(E),
}

impl<E> ParseComplexError<E> {
    fn new(kind: ComplexErrorKind<E>) -> Self {
        ParseComplexError { kind }
    }

    /// Returns the component parser's error, if a part held an invalid
    /// number.
    pub fn component_error(&self) -> Option<&E> {
        match self.kind {
            ComplexErrorKind::InvalidReal(ref e) | ComplexErrorKind::InvalidImaginary(ref e) => Some(e),
            _ => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for ParseComplexError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ComplexErrorKind::Empty => "cannot parse complex from empty string".fmt(f),
            ComplexErrorKind::MissingImaginary => "complex string has no imaginary part".fmt(f),
            ComplexErrorKind::ExtraSeparator => "complex string has more than two terms".fmt(f),
            ComplexErrorKind::MissingUnit => "imaginary part does not end in 'i'".fmt(f),
            ComplexErrorKind::InvalidReal(ref e) => write!(f, "invalid real part: {}", e),
            ComplexErrorKind::InvalidImaginary(ref e) => write!(f, "invalid imaginary part: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: std::error::Error + 'static> std::error::Error for ParseComplexError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.component_error() {
            Some(e) => Some(e),
            None => None,
        }
    }
}
