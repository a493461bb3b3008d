//! # zariski-poly
//!
//! Sparse multivariate polynomial algebra for the zariski kernel.
//!
//! This crate provides:
//! - Tagged variables (`Variable`) with a reserved auxiliary namespace
//! - Monomials as sorted exponent maps with exact divisibility
//! - Four admissible monomial orders (lex, graded lex, graded reverse
//!   lex, weighted) as a single dispatched enum
//! - Polynomials over any [`zariski_rings::Field`], with a leading-term
//!   cache keyed on the order's content
//!
//! All arithmetic is purely functional: operations return new values
//! and purge coefficients the field considers zero.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod monomial;
pub mod ordering;
pub mod polynomial;
pub mod variable;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use polynomial::Polynomial;
pub use variable::Variable;
