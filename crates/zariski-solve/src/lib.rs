//! # zariski-solve
//!
//! Solving zero-dimensional polynomial systems over a field.
//!
//! The pipeline: compute a lexicographic Gröbner basis of the system
//! (which triangulates a zero-dimensional ideal), then back-substitute
//! variable by variable, calling out to an injected univariate root
//! finder for each elimination step. [`rational_roots`] supplies a
//! root finder over ℚ built on the rational-roots theorem.
//!
//! [`characteristic_equations`] answers the related question "which
//! univariate constraint does each coordinate satisfy on the variety".

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod characteristic;
pub mod error;
pub mod rational_roots;
pub mod solver;

#[cfg(test)]
mod proptests;

pub use characteristic::characteristic_equations;
pub use error::SolveError;
pub use rational_roots::{divisors, rational_roots};
pub use solver::{solve_rational_system, solve_system, Assignment};
