//! Double-precision reals as an (inexact) coefficient field.

use crate::traits::{Field, Ring};

/// The field of double-precision floating point numbers.
///
/// The zero predicate compares against machine epsilon, so coefficient
/// purging in polynomial arithmetic treats tiny round-off residues as
/// zero. Exact algorithms (Gröbner bases, ideal arithmetic) are only
/// reliable over exact fields like [`crate::Q`]; `R64` exists for
/// evaluation-heavy workflows and for testing the epsilon path of the
/// zero predicate.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct R64(pub f64);

impl R64 {
    /// Creates a real from an f64.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the inner f64.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Ring for R64 {
    fn zero() -> Self {
        Self(0.0)
    }

    fn one() -> Self {
        Self(1.0)
    }

    fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }

    fn is_one(&self) -> bool {
        (self.0 - 1.0).abs() < f64::EPSILON
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_integer(n: i64) -> Self {
        Self(n as f64)
    }
}

impl Field for R64 {
    fn inv(&self) -> Option<Self> {
        if Ring::is_zero(self) {
            None
        } else {
            Some(Self(1.0 / self.0))
        }
    }
}

impl std::ops::Add for R64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for R64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for R64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for R64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<f64> for R64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for R64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
