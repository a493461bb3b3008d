//! Implicitization of parametric varieties.
//!
//! Both constructions eliminate the parameters from a graph ideal: the
//! parametrization `vᵢ = fᵢ(params)` contributes generators `fᵢ − vᵢ`,
//! a lex basis is computed with the parameters ordered first, and the
//! basis elements free of parameters cut out the image variety.

use std::collections::{BTreeMap, BTreeSet};

use zariski_groebner::groebner_basis;
use zariski_poly::{MonomialOrder, PolyError, Polynomial, Variable};
use zariski_rings::Field;

use crate::ideal::Ideal;

/// Implicitizes a polynomial parametrization `{vᵢ ↦ fᵢ(params)}`.
///
/// Returns the generators of the elimination ideal in the image
/// variables only.
///
/// # Errors
///
/// Propagates errors from the basis computation.
pub fn polynomial_implicitization<F: Field>(
    equations: &BTreeMap<Variable, Polynomial<F>>,
) -> Result<Vec<Polynomial<F>>, PolyError> {
    let mut parameters: BTreeSet<Variable> = BTreeSet::new();
    let mut variables: Vec<Variable> = Vec::new();

    for (&variable, f) in equations {
        parameters.extend(f.variables());
        variables.push(variable);
    }

    let mut permutation: Vec<Variable> = parameters.into_iter().collect();
    permutation.extend(&variables);

    let generators: Vec<Polynomial<F>> = equations
        .iter()
        .map(|(&variable, f)| f - &Polynomial::variable(variable))
        .collect();

    let basis = groebner_basis(&generators, &MonomialOrder::lex(permutation))?;
    Ok(Ideal::elimination_ideal(&basis, &variables)
        .generators()
        .to_vec())
}

/// Implicitizes a rational parametrization `{vᵢ ↦ fᵢ / gᵢ}`.
///
/// The graph generators are `fᵢ − gᵢ·vᵢ`; the saturation generator
/// `1 − t·∏ᵢ gᵢ` on a fresh auxiliary variable `t` (ordered before
/// everything) forces the denominators to be units, so spurious
/// components along `∏ gᵢ = 0` are cut away.
///
/// # Errors
///
/// Propagates errors from the basis computation.
pub fn rational_implicitization<F: Field>(
    equations: &BTreeMap<Variable, (Polynomial<F>, Polynomial<F>)>,
) -> Result<Vec<Polynomial<F>>, PolyError> {
    let mut parameters: BTreeSet<Variable> = BTreeSet::new();
    let mut variables: Vec<Variable> = Vec::new();

    for (&variable, (numerator, denominator)) in equations {
        parameters.extend(numerator.variables());
        parameters.extend(denominator.variables());
        variables.push(variable);
    }

    let t = Variable::Aux(0);
    let mut permutation = vec![t];
    permutation.extend(parameters);
    permutation.extend(&variables);

    let mut generators: Vec<Polynomial<F>> = equations
        .iter()
        .map(|(&variable, (numerator, denominator))| {
            numerator - &(denominator * &Polynomial::variable(variable))
        })
        .collect();

    let mut denominator_product = Polynomial::variable(t);
    for (_, (_, denominator)) in equations {
        denominator_product = &denominator_product * denominator;
    }
    generators.push(Polynomial::one() - denominator_product);

    let basis = groebner_basis(&generators, &MonomialOrder::lex(permutation))?;
    Ok(Ideal::elimination_ideal(&basis, &variables)
        .generators()
        .to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zariski_rings::{Q, Ring};

    fn var(symbol: char) -> Variable {
        Variable::user(symbol)
    }

    fn poly(symbol: char) -> Polynomial<Q> {
        Polynomial::variable(var(symbol))
    }

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_cuspidal_cubic() {
        // x = t^2, y = t^3 implicitizes to y^2 - x^3 = 0
        let t = poly('t');
        let equations: BTreeMap<_, _> = [
            (var('x'), t.pow(2).unwrap()),
            (var('y'), t.pow(3).unwrap()),
        ]
        .into();

        let result = polynomial_implicitization(&equations).unwrap();
        let expected = poly('x').pow(3).unwrap() - poly('y').pow(2).unwrap();
        assert!(result.iter().any(|f| *f == expected));
    }

    #[test]
    fn test_tangent_surface_eliminant() {
        // x = s + u, y = s^2 + 2su, z = s^3 + 3s^2 u
        let s = poly('s');
        let u = poly('u');
        let equations: BTreeMap<_, _> = [
            (var('x'), &s + &u),
            (
                var('y'),
                s.pow(2).unwrap() + (&s * &u).scale(&q(2)),
            ),
            (
                var('z'),
                s.pow(3).unwrap() + (&s.pow(2).unwrap() * &u).scale(&q(3)),
            ),
        ]
        .into();

        let result = polynomial_implicitization(&equations).unwrap();

        // The eliminant x^3 z - (3/4) x^2 y^2 - (3/2) xyz + y^3 + (1/4) z^2
        let x = poly('x');
        let y = poly('y');
        let z = poly('z');
        let expected = &(&x.pow(3).unwrap() * &z)
            - &(&x.pow(2).unwrap() * &y.pow(2).unwrap()).scale(&Q::new(3, 4))
            - (&(&x * &y) * &z).scale(&Q::new(3, 2))
            + y.pow(3).unwrap()
            + z.pow(2).unwrap().scale(&Q::new(1, 4));
        assert!(result.iter().any(|f| *f == expected));
    }

    #[test]
    fn test_unit_circle_rational_parametrization() {
        // x = (1 - t^2)/(1 + t^2), y = 2t/(1 + t^2)
        // implicitizes to x^2 + y^2 - 1 = 0
        let t = poly('t');
        let denominator = t.pow(2).unwrap() + q(1);
        let equations: BTreeMap<_, _> = [
            (var('x'), (-&t.pow(2).unwrap() + q(1), denominator.clone())),
            (var('y'), (t.scale(&q(2)), denominator)),
        ]
        .into();

        let result = rational_implicitization(&equations).unwrap();
        let expected = poly('x').pow(2).unwrap() + poly('y').pow(2).unwrap() - q(1);
        assert!(result.iter().any(|f| *f == expected));
    }
}
