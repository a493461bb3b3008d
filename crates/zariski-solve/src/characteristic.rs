//! Characteristic equations of a polynomial system.

use std::collections::{BTreeMap, BTreeSet};

use zariski_groebner::groebner_basis;
use zariski_poly::{MonomialOrder, Polynomial, Variable};
use zariski_rings::Field;

use crate::error::SolveError;

/// Computes, for each variable of the system, a univariate polynomial
/// that coordinate must satisfy on the variety.
///
/// For a variable `v`, a lex basis is computed under a permutation
/// placing every other variable before `v`, so the last elimination
/// ideal is univariate in `v`; the first basis element involving only
/// `v` is its characteristic equation. Returns `None` if any variable
/// has no univariate element (the system is not zero-dimensional in
/// that coordinate).
///
/// # Errors
///
/// Propagates errors from the basis computations.
pub fn characteristic_equations<F: Field>(
    system: &[Polynomial<F>],
) -> Result<Option<BTreeMap<Variable, Polynomial<F>>>, SolveError> {
    let mut variables: BTreeSet<Variable> = BTreeSet::new();
    for f in system {
        variables.extend(f.variables());
    }

    let mut result = BTreeMap::new();

    for &variable in &variables {
        let mut permutation: Vec<Variable> = variables
            .iter()
            .copied()
            .filter(|&v| v != variable)
            .collect();
        permutation.push(variable);

        let basis = groebner_basis(system, &MonomialOrder::lex(permutation))?;

        let univariate = basis
            .into_iter()
            .find(|g| g.variables() == [variable]);

        match univariate {
            Some(g) => {
                result.insert(variable, g);
            }
            None => return Ok(None),
        }
    }

    Ok(Some(result))
}
