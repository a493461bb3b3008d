//! # zariski-integers
//!
//! Arbitrary precision integer and rational arithmetic for the zariski
//! kernel.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//!
//! The rational-roots finder in `zariski-solve` leans on the integer
//! side of this crate (gcd, lcm, remainder, sign handling); everything
//! else in the kernel consumes rationals through the `Field` trait in
//! `zariski-rings`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
