//! Recursive back-substitution over a lex Gröbner basis.

use std::collections::{BTreeMap, BTreeSet};

use zariski_groebner::groebner_basis;
use zariski_poly::{MonomialOrder, PolyError, Polynomial, Variable};
use zariski_rings::{Field, Q, Ring};

use crate::error::SolveError;
use crate::rational_roots::rational_roots;

/// A solution point: a value for each variable.
pub type Assignment<F> = BTreeMap<Variable, F>;

/// Outcome of one back-substitution layer.
enum Reduction<F> {
    /// Some equation is unsatisfiable in the field.
    NoSolutions,
    /// The remaining system has no univariate constraint: the variety
    /// is positive-dimensional.
    InfinitelyMany,
    /// The accumulated partial assignments.
    Solved(Vec<Assignment<F>>),
}

/// Solves a system of polynomial equations.
///
/// Computes a lex Gröbner basis under the canonical permutation of the
/// system's variables, then back-substitutes: at each layer the first
/// univariate basis element is handed to `root_finder`, every root is
/// substituted through the remaining equations and the reduced systems
/// are solved recursively.
///
/// "No solutions in this field" is a normal return (the empty list).
///
/// # Errors
///
/// - [`SolveError::NoSolutionsInExtension`] if the basis is `{1}`: the
///   variety is empty over every field extension.
/// - [`SolveError::InfiniteSolutions`] if back-substitution uncovers a
///   positive-dimensional variety.
/// - [`SolveError::Algebra`] for failures in the underlying algebra.
pub fn solve_system<F, R>(
    system: &[Polynomial<F>],
    root_finder: R,
) -> Result<Vec<Assignment<F>>, SolveError>
where
    F: Field,
    R: Fn(&Polynomial<F>) -> Vec<F>,
{
    let mut variables: BTreeSet<Variable> = BTreeSet::new();
    for f in system {
        variables.extend(f.variables());
    }

    let order = MonomialOrder::lex(variables.into_iter().collect());
    let basis = groebner_basis(system, &order)?;

    if basis.len() == 1 && basis[0] == F::one() {
        return Err(SolveError::NoSolutionsInExtension);
    }

    match back_substitute(&basis, &root_finder)? {
        Reduction::NoSolutions => Ok(Vec::new()),
        Reduction::InfinitelyMany => Err(SolveError::InfiniteSolutions),
        Reduction::Solved(assignments) => Ok(assignments),
    }
}

/// Solves a system over ℚ with the rational-roots finder.
///
/// # Errors
///
/// As [`solve_system`].
pub fn solve_rational_system(
    system: &[Polynomial<Q>],
) -> Result<Vec<Assignment<Q>>, SolveError> {
    solve_system(system, rational_roots)
}

fn back_substitute<F, R>(
    system: &[Polynomial<F>],
    root_finder: &R,
) -> Result<Reduction<F>, SolveError>
where
    F: Field,
    R: Fn(&Polynomial<F>) -> Vec<F>,
{
    let mut univariate: Option<&Polynomial<F>> = None;
    for f in system {
        let variables = f.variables();
        if variables.is_empty() && !f.is_zero() {
            // A nonzero constant equation is unsatisfiable
            return Ok(Reduction::NoSolutions);
        }
        if variables.len() == 1 && univariate.is_none() {
            univariate = Some(f);
        }
    }

    let Some(f) = univariate else {
        return Ok(Reduction::InfinitelyMany);
    };
    let variable = f.variables()[0];

    let roots = root_finder(f);
    if roots.is_empty() {
        return Ok(Reduction::NoSolutions);
    }

    let mut solutions: Vec<Assignment<F>> = Vec::new();

    for root in roots {
        // Substitute the root through the whole system. A polynomial
        // not containing the variable is kept unchanged; this is the
        // one place the kernel recovers from UnknownVariable.
        let mut remaining: Vec<Polynomial<F>> = Vec::new();
        for g in system {
            let substituted = match g.substitute(variable, &root) {
                Ok(h) => h,
                Err(PolyError::UnknownVariable(_)) => g.clone(),
                Err(e) => return Err(e.into()),
            };
            if !substituted.is_zero() {
                remaining.push(substituted);
            }
        }

        if remaining.is_empty() {
            solutions.push(Assignment::from([(variable, root)]));
            continue;
        }

        match back_substitute(&remaining, root_finder)? {
            Reduction::NoSolutions => {}
            Reduction::InfinitelyMany => return Ok(Reduction::InfinitelyMany),
            Reduction::Solved(extensions) => {
                for mut extension in extensions {
                    extension.insert(variable, root.clone());
                    solutions.push(extension);
                }
            }
        }
    }

    if solutions.is_empty() {
        Ok(Reduction::NoSolutions)
    } else {
        Ok(Reduction::Solved(solutions))
    }
}
