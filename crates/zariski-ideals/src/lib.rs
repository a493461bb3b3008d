//! # zariski-ideals
//!
//! Ideal-theoretic algorithms on top of the Gröbner engine.
//!
//! [`Ideal`] owns a generator list and memoizes its reduced Gröbner
//! basis; sums, products, intersections, elimination ideals, membership
//! and inclusion are all expressed through basis computations. The
//! free functions in [`poly_gcd`] and [`implicitize`] package the
//! classical elimination constructions: gcd/lcm via intersection of
//! principal ideals, and implicitization of polynomial and rational
//! parametrizations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ideal;
pub mod implicitize;
pub mod poly_gcd;

#[cfg(test)]
mod proptests;

pub use ideal::Ideal;
pub use implicitize::{polynomial_implicitization, rational_implicitization};
pub use poly_gcd::{gcd, gcd_all, lcm, lcm_all};
