//! # Zariski
//!
//! A symbolic ideal-theory kernel for multivariate polynomial rings
//! over a field.
//!
//! Zariski computes reduced Gröbner bases under pluggable monomial
//! orders and builds the classical ideal-theoretic toolbox on top of
//! them: ideal arithmetic and membership, elimination, polynomial
//! gcd/lcm, implicitization of parametric varieties, and solving
//! zero-dimensional systems by triangulation plus univariate root
//! finding.
//!
//! ## Quick Start
//!
//! ```
//! use zariski::prelude::*;
//!
//! let x = Polynomial::<Q>::variable(Variable::user('x'));
//! let y = Polynomial::<Q>::variable(Variable::user('y'));
//!
//! // <x> ∩ <y> = <xy>
//! let i = Ideal::new(vec![x.clone()]);
//! let j = Ideal::new(vec![y.clone()]);
//! let k = i.intersect(&j).unwrap();
//! assert!(k.contains(&(&x * &y)).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use zariski_groebner as groebner;
pub use zariski_ideals as ideals;
pub use zariski_integers as integers;
pub use zariski_poly as poly;
pub use zariski_rings as rings;
pub use zariski_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use zariski_groebner::{groebner_basis, reduce, s_polynomial};
    pub use zariski_ideals::{
        gcd, gcd_all, lcm, lcm_all, polynomial_implicitization, rational_implicitization, Ideal,
    };
    pub use zariski_integers::{Integer, Rational};
    pub use zariski_poly::{Monomial, MonomialOrder, PolyError, Polynomial, Variable};
    pub use zariski_rings::{Field, Ring, Q, R64};
    pub use zariski_solve::{
        characteristic_equations, rational_roots, solve_rational_system, solve_system,
        Assignment, SolveError,
    };
}
