//! # zariski-rings
//!
//! Coefficient fields for the zariski kernel.
//!
//! This crate defines the abstract contract the polynomial algebra
//! consumes (`Ring`, `Field`) and two concrete fields:
//!
//! - [`Q`]: exact rationals; "is zero" is structural equality with 0
//! - [`R64`]: double-precision reals; "is zero" is an epsilon test
//!
//! The split matters: every arithmetic operation on polynomials purges
//! coefficients the field considers zero, so the zero predicate travels
//! with the field rather than with the polynomial.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod reals;
pub mod traits;

pub use rationals::Q;
pub use reals::R64;
pub use traits::{Field, Ring};
