//! Typed errors for the polynomial algebra.

use thiserror::Error;

use crate::variable::Variable;

/// Errors surfaced by monomial and polynomial operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A monomial was constructed with a negative exponent.
    #[error("invalid exponent {exponent} for variable '{variable}'")]
    InvalidExponent {
        /// The offending variable.
        variable: Variable,
        /// The rejected exponent.
        exponent: i64,
    },

    /// A monomial division would produce a negative exponent.
    #[error("monomial is not divisible: exponent of '{variable}' would go negative")]
    NotDivisible {
        /// The variable whose exponent would go negative.
        variable: Variable,
    },

    /// A field or polynomial division by the additive identity.
    #[error("division by zero")]
    DivisionByZero,

    /// An evaluation or substitution referenced a variable that does
    /// not occur.
    #[error("variable '{0}' not found in the polynomial")]
    UnknownVariable(Variable),

    /// A polynomial power with a negative integer exponent.
    #[error("negative exponent {0} is not allowed")]
    NegativeExponent(i32),

    /// A weighted order with negative weights or a weight/permutation
    /// length mismatch.
    #[error("invalid monomial order: {0}")]
    InvalidOrder(String),
}
