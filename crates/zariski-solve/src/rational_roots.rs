//! Rational root finding via the rational-roots theorem.

use num_traits::{One, Zero};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

use zariski_integers::Integer;
use zariski_poly::{Monomial, MonomialOrder, Polynomial};
use zariski_rings::{Q, Ring};

/// Enumerates the divisors of an integer.
///
/// `divisors(0) = {0}`; a negative input yields divisors enumerated in
/// the negative direction. The result is unordered and may repeat a
/// divisor when the input is a perfect square; callers dedup through
/// the candidate set.
#[must_use]
pub fn divisors(n: &Integer) -> Vec<Integer> {
    if n.is_zero() {
        return vec![Integer::zero()];
    }

    let target = n.abs();
    let mut result = Vec::new();
    let mut i = Integer::one();
    while &i * &i <= target {
        if (&target % &i).is_zero() {
            result.push(i.clone());
            result.push(&target / &i);
        }
        i = i + Integer::one();
    }

    if n.is_negative() {
        result.into_iter().map(|d| -d).collect()
    } else {
        result
    }
}

/// Finds all rational roots of a univariate polynomial over ℚ.
///
/// The polynomial is scaled by the lcm of its coefficient denominators
/// to get integer coefficients `g`; candidates are `0` together with
/// `±p/q` for `p` a divisor of the trailing coefficient (the lowest
/// power of the variable present, so a vanishing constant term does not
/// collapse the candidate set) and `q` a divisor of the leading
/// coefficient, which is looked up under an explicit lex order on the
/// polynomial's variable rather than by term-map iteration order.
/// Candidates at which `g` vanishes are returned in ascending order.
///
/// Returns an empty list for the zero polynomial and for inputs that
/// are not univariate.
#[must_use]
pub fn rational_roots(f: &Polynomial<Q>) -> Vec<Q> {
    let variables = f.variables();
    if variables.len() != 1 {
        return Vec::new();
    }
    let variable = variables[0];

    let mut denominator_lcm = Integer::one();
    for (_, coefficient) in f.terms() {
        denominator_lcm = denominator_lcm.lcm(&coefficient.denominator());
    }
    let g = f.scale(&Q::from_parts(denominator_lcm, Integer::one()));

    let trailing_power = g
        .terms()
        .map(|(monomial, _)| monomial.exponent(variable))
        .min()
        .unwrap_or(0);
    let trailing = g.coefficient(&Monomial::var_pow(variable, trailing_power));
    let order = MonomialOrder::lex(vec![variable]);
    let leading = g.leading_coefficient(&order);

    let p_candidates = divisors(&trailing.numerator());
    let q_candidates = divisors(&leading.numerator());

    let mut candidates: FxHashSet<Q> = FxHashSet::default();
    candidates.insert(Q::from_integer(0));
    for p in &p_candidates {
        for q in &q_candidates {
            candidates.insert(Q::from_parts(p.clone(), q.clone()));
            candidates.insert(Q::from_parts(-p, q.clone()));
        }
    }

    let mut roots: Vec<Q> = candidates
        .into_iter()
        .filter(|candidate| {
            let env: BTreeMap<_, _> = [(variable, candidate.clone())].into();
            g.evaluate(&env)
                .expect("candidate environment covers the variable")
                .is_zero()
        })
        .collect();
    roots.sort();
    roots
}
