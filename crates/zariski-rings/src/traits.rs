//! Algebraic structure traits.
//!
//! The polynomial algebra is generic over a coefficient field. The
//! contract is deliberately small: identities, ring operations, a zero
//! predicate owned by the field, an integer embedding for the solver,
//! and rendering.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this element counts as the additive identity.
    ///
    /// Exact types test structural equality with zero; inexact floating
    /// types compare against machine epsilon. Polynomial arithmetic
    /// purges coefficients for which this returns true.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds a signed machine integer into the ring.
    fn from_integer(n: i64) -> Self;

    /// Computes self^n for non-negative n by binary exponentiation.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field: a ring where every non-zero element is invertible.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero. Callers in the algebra
    /// layer turn that `None` into a typed division-by-zero error.
    fn inv(&self) -> Option<Self>;
}
