//! Typed errors for the solver pipeline.

use thiserror::Error;

use zariski_poly::PolyError;

/// Errors surfaced by system solving.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The Gröbner basis contains a unit: the variety is empty in every
    /// field extension.
    #[error("no solutions exist in any field extension")]
    NoSolutionsInExtension,

    /// Back-substitution ran out of univariate constraints: the variety
    /// is positive-dimensional.
    #[error("there are infinitely many solutions")]
    InfiniteSolutions,

    /// An underlying algebraic operation failed.
    #[error(transparent)]
    Algebra(#[from] PolyError),
}
