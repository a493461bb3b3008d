//! Polynomial gcd and lcm through the intersection construction.
//!
//! The lcm of two polynomials generates the intersection of the
//! principal ideals they span; the gcd then falls out of the identity
//! `f·g = gcd(f, g)·lcm(f, g)` by one exact division.

use std::collections::BTreeSet;

use zariski_groebner::{groebner_basis, reduce};
use zariski_poly::{MonomialOrder, PolyError, Polynomial, Variable};
use zariski_rings::Field;

use crate::ideal::Ideal;

fn merged_variables<F: Field>(f: &Polynomial<F>, g: &Polynomial<F>) -> Vec<Variable> {
    let mut set: BTreeSet<Variable> = f.variables().into_iter().collect();
    set.extend(g.variables());
    set.into_iter().collect()
}

/// Computes the least common multiple of two polynomials, normalized
/// to a monic leading coefficient.
///
/// `lcm(f, 0) = 0`.
///
/// # Errors
///
/// Propagates errors from the underlying basis computation.
pub fn lcm<F: Field>(f: &Polynomial<F>, g: &Polynomial<F>) -> Result<Polynomial<F>, PolyError> {
    if f.is_zero() || g.is_zero() {
        return Ok(Polynomial::zero());
    }

    let variables = merged_variables(f, g);
    let t = Variable::Aux(0);
    let t_poly = Polynomial::variable(t);

    let p = f * &t_poly;
    let q = g * &(Polynomial::one() - t_poly);

    let mut permutation = vec![t];
    permutation.extend(&variables);

    let basis = groebner_basis(&[p, q], &MonomialOrder::lex(permutation))?;
    let intersection = Ideal::elimination_ideal(&basis, &variables);

    Ok(intersection.generators()[0].clone())
}

/// Computes the greatest common divisor of two polynomials, normalized
/// to a monic leading coefficient under graded lex over the result's
/// variables.
///
/// `gcd(f, 0)` is the monic multiple of `f`; `gcd(0, 0) = 0`.
///
/// # Errors
///
/// Propagates errors from the underlying basis computation and
/// division.
pub fn gcd<F: Field>(f: &Polynomial<F>, g: &Polynomial<F>) -> Result<Polynomial<F>, PolyError> {
    if f.is_zero() && g.is_zero() {
        return Ok(Polynomial::zero());
    }
    if f.is_zero() {
        return make_monic(g.clone());
    }
    if g.is_zero() {
        return make_monic(f.clone());
    }

    let variables = merged_variables(f, g);
    let multiple = lcm(f, g)?;

    let (quotients, _) = reduce(&(f * g), &[multiple], &MonomialOrder::lex(variables))?;
    make_monic(quotients[0].clone())
}

/// Folds [`gcd`] over a list, normalizing the final result.
///
/// An empty list yields the zero polynomial.
///
/// # Errors
///
/// Propagates errors from the pairwise computations.
pub fn gcd_all<F: Field>(polynomials: &[Polynomial<F>]) -> Result<Polynomial<F>, PolyError> {
    let Some(first) = polynomials.first() else {
        return Ok(Polynomial::zero());
    };

    let mut result = first.clone();
    for p in &polynomials[1..] {
        result = gcd(&result, p)?;
    }
    make_monic(result)
}

/// Folds [`lcm`] over a list, normalizing the final result.
///
/// An empty list yields the constant polynomial 1.
///
/// # Errors
///
/// Propagates errors from the pairwise computations.
pub fn lcm_all<F: Field>(polynomials: &[Polynomial<F>]) -> Result<Polynomial<F>, PolyError> {
    let Some(first) = polynomials.first() else {
        return Ok(Polynomial::one());
    };

    let mut result = first.clone();
    for p in &polynomials[1..] {
        result = lcm(&result, p)?;
    }
    make_monic(result)
}

fn make_monic<F: Field>(p: Polynomial<F>) -> Result<Polynomial<F>, PolyError> {
    if p.is_zero() {
        return Ok(p);
    }
    let order = MonomialOrder::graded_lex(p.variables());
    p.monic(&order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zariski_rings::{Q, Ring};

    fn x() -> Polynomial<Q> {
        Polynomial::variable(Variable::user('x'))
    }

    fn y() -> Polynomial<Q> {
        Polynomial::variable(Variable::user('y'))
    }

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_monomial_gcd_lcm() {
        let f = x().pow(2).unwrap() * y();
        let g = x() * y().pow(2).unwrap();

        assert_eq!(lcm(&f, &g).unwrap(), x().pow(2).unwrap() * y().pow(2).unwrap());
        assert_eq!(gcd(&f, &g).unwrap(), x() * y());
    }

    #[test]
    fn test_univariate_gcd() {
        // f = (x-1)(x+1), g = (x-1)^2: gcd = x - 1
        let f = x().pow(2).unwrap() - q(1);
        let g = x().pow(2).unwrap() - x().scale(&q(2)) + q(1);

        assert_eq!(gcd(&f, &g).unwrap(), x() - q(1));
        // lcm = (x-1)^2 (x+1) = x^3 - x^2 - x + 1
        assert_eq!(
            lcm(&f, &g).unwrap(),
            x().pow(3).unwrap() - x().pow(2).unwrap() - x() + q(1)
        );
    }

    #[test]
    fn test_gcd_lcm_identity() {
        let f = x().pow(2).unwrap() - q(1);
        let g = x().pow(2).unwrap() - x().scale(&q(2)) + q(1);

        let product = &gcd(&f, &g).unwrap() * &lcm(&f, &g).unwrap();
        // Equal up to the unit scalar that makes both factors monic
        assert_eq!(product, &f * &g);
    }

    #[test]
    fn test_coprime_gcd() {
        let f = x() + q(1);
        let g = y() - q(2);

        assert_eq!(gcd(&f, &g).unwrap(), Polynomial::one());
        assert_eq!(lcm(&f, &g).unwrap(), &f * &g);
    }

    #[test]
    fn test_zero_edge_cases() {
        let f = x().scale(&q(3));

        assert_eq!(lcm(&f, &Polynomial::zero()).unwrap(), Polynomial::zero());
        assert_eq!(gcd(&f, &Polynomial::zero()).unwrap(), x());
        assert_eq!(
            gcd::<Q>(&Polynomial::zero(), &Polynomial::zero()).unwrap(),
            Polynomial::zero()
        );
    }

    #[test]
    fn test_list_forms() {
        let polys = [
            x().pow(2).unwrap() * y(),
            x() * y(),
            x() * y().pow(2).unwrap(),
        ];

        assert_eq!(gcd_all(&polys).unwrap(), x() * y());
        assert_eq!(
            lcm_all(&polys).unwrap(),
            x().pow(2).unwrap() * y().pow(2).unwrap()
        );
        assert_eq!(gcd_all::<Q>(&[]).unwrap(), Polynomial::zero());
        assert_eq!(lcm_all::<Q>(&[]).unwrap(), Polynomial::one());
    }
}
