//! # zariski-groebner
//!
//! Multivariable division with remainder and Buchberger's algorithm.
//!
//! The division algorithm ([`reduce`]) is the workhorse of the whole
//! kernel: Gröbner extension, interreduction, ideal membership and the
//! polynomial gcd all reduce (literally) to it. [`groebner_basis`]
//! chains extension, interreduction and monic normalization to produce
//! the unique reduced Gröbner basis of its input.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod buchberger;
pub mod reduce;

#[cfg(test)]
mod proptests;

pub use buchberger::{extend_basis, groebner_basis, groebner_basis_with, interreduce};
pub use reduce::{reduce, s_polynomial};
