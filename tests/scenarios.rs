//! Known values checked through the public API. Every case runs and the
//! failures are reported together.
#![cfg(any(feature = "std", feature = "libm"))]

extern crate num_branch;

use num_branch::{checked_factorial, ln, log_b, Complex64};
use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};

const TOLERANCE: f64 = 1e-10;

#[derive(Default)]
struct Report {
    failures: Vec<String>,
}

impl Report {
    fn real(&mut self, name: &str, got: f64, want: f64) {
        if !((got - want).abs() < TOLERANCE) {
            self.failures.push(format!("{}: got {}, want {}", name, got, want));
        }
    }

    fn complex(&mut self, name: &str, got: Complex64, want: Complex64) {
        let off = (got.re() - want.re()).abs().max((got.im() - want.im()).abs());
        if !(off < TOLERANCE) {
            self.failures.push(format!("{}: got {}, want {}", name, got, want));
        }
    }

    fn check(self) {
        assert!(
            self.failures.is_empty(),
            "{} scenario(s) failed:\n{}",
            self.failures.len(),
            self.failures.join("\n")
        );
    }
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn parse_scenarios() {
    let cases = [
        ("1 + i", c(1.0, 1.0)),
        ("1 - 2i", c(1.0, -2.0)),
        ("-1 + 2i", c(-1.0, 2.0)),
        ("-1 - i", c(-1.0, -1.0)),
        ("1.912871 - 7.837i", c(1.912871, -7.837)),
        ("-1.912871 + 7.837i", c(-1.912871, 7.837)),
    ];

    let mut report = Report::default();
    for &(text, want) in cases.iter() {
        match text.parse::<Complex64>() {
            Ok(got) => report.complex(text, got, want),
            Err(e) => report.failures.push(format!("{}: {}", text, e)),
        }
    }
    for text in ["", "4", "1+2", "1+-2i", "x+2i"].iter() {
        if let Ok(z) = text.parse::<Complex64>() {
            report.failures.push(format!("{:?} should not parse, got {}", text, z));
        }
    }
    report.check();
}

#[test]
fn real_scenarios() {
    let mut report = Report::default();
    report.real("log_b(2, 2)", log_b(2.0, 2.0), 1.0);
    report.real("ln(e^2)", ln(E * E), 2.0);
    if checked_factorial(5) != Some(120) {
        report.failures.push(format!("5!: got {:?}", checked_factorial(5)));
    }
    report.check();
}

#[test]
fn argument_scenarios() {
    let mut report = Report::default();
    report.real("arg(1+i)", c(1.0, 1.0).arg(), FRAC_PI_4);
    report.real("arg(-1+i)", c(-1.0, 1.0).arg(), 3.0 * FRAC_PI_4);
    report.real("arg(-1-i)", c(-1.0, -1.0).arg(), -3.0 * FRAC_PI_4);
    report.real("arg(1-i)", c(1.0, -1.0).arg(), -FRAC_PI_4);
    report.real("arg(1+0i)", c(1.0, 0.0).arg(), 0.0);
    report.real("arg(-1+0i)", c(-1.0, 0.0).arg(), PI);
    if !c(0.0, 0.0).arg().is_nan() {
        report.failures.push("arg(0+0i) should be NaN".into());
    }
    report.check();
}

#[test]
fn log_and_power_scenarios() {
    let i = Complex64::i();
    let mut report = Report::default();
    report.complex("ln(i)", i.ln(), c(0.0, FRAC_PI_2));
    report.complex("ln(-1)", c(-1.0, 0.0).ln(), c(0.0, PI));
    report.complex("ln(-1), branch 1", c(-1.0, 0.0).ln_branch(1), c(0.0, 3.0 * PI));
    report.complex("log_10(100)", c(100.0, 0.0).log(10.0), c(2.0, 0.0));
    report.complex("(1+i)^2", c(1.0, 1.0).powf(2.0), c(0.0, 2.0));
    report.complex("i^i", i.powc(i), c((-FRAC_PI_2).exp(), 0.0));
    report.complex("e^(iπ)", c(0.0, PI).expf(E), c(-1.0, 0.0));
    report.complex("sqrt(-4)", c(-4.0, 0.0).sqrt(), c(0.0, 2.0));
    report.check();
}

#[test]
fn arithmetic_scenarios() {
    let mut report = Report::default();
    report.complex("(1+i)+(2-3i)", c(1.0, 1.0) + c(2.0, -3.0), c(3.0, -2.0));
    report.complex("(2-5i)-(3+3i)", c(2.0, -5.0) - c(3.0, 3.0), c(-1.0, -8.0));
    report.complex("(1+i)(2+2i)", c(1.0, 1.0) * c(2.0, 2.0), c(0.0, 4.0));
    report.complex("(6-4i)/(2-2i)", c(6.0, -4.0) / c(2.0, -2.0), c(2.5, 0.5));
    report.complex("conj(3+4i)", c(3.0, 4.0).conj(), c(3.0, -4.0));
    report.real("|3+4i|", c(3.0, 4.0).norm(), 5.0);
    report.check();
}

#[test]
fn trigonometric_scenarios() {
    let b = (2.0 + 3f64.sqrt()).ln();
    let mut report = Report::default();
    report.complex("sin(π/2 - ln(2+√3)i)", c(FRAC_PI_2, -b).sin(), c(2.0, 0.0));
    report.complex("cos(0)", c(0.0, 0.0).cos(), c(1.0, 0.0));
    report.complex("sinh(iπ/2)", c(0.0, FRAC_PI_2).sinh(), c(0.0, 1.0));
    report.complex("cosh(iπ)", c(0.0, PI).cosh(), c(-1.0, 0.0));
    report.complex("tan(π/4)", c(FRAC_PI_4, 0.0).tan(), c(1.0, 0.0));
    report.check();
}
