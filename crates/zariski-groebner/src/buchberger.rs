//! Buchberger's algorithm: extension, interreduction, normalization.

use zariski_poly::{Monomial, MonomialOrder, PolyError, Polynomial};
use zariski_rings::Field;

use crate::reduce::{reduce, s_polynomial};

/// The lcm criterion: the pair may be skipped when the leading
/// monomials are coprime, i.e. `lcm(a, b) = a·b`.
#[must_use]
pub fn lcm_criterion(a: &Monomial, b: &Monomial) -> bool {
    Monomial::lcm(a, b) == a * b
}

/// The chain criterion (local variant): the pair may be skipped when a
/// later basis element's leading monomial divides `lcm(a, b)`.
#[must_use]
pub fn chain_criterion(a: &Monomial, b: &Monomial, later: &[Monomial]) -> bool {
    let lcm = Monomial::lcm(a, b);
    later.iter().any(|monomial| lcm.is_divisible_by(monomial))
}

/// Extends a generating set to a Gröbner basis.
///
/// Every pair of the current basis is examined per pass; pairs passing
/// the lcm and chain criteria contribute the remainder of their
/// S-polynomial when it is nonzero. Passes repeat until one adds
/// nothing. Termination follows from Dickson's lemma: the chain of
/// leading-monomial ideals stabilizes.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if a zero polynomial reaches
/// the S-polynomial or division steps (zero generators must be filtered
/// by the caller).
pub fn extend_basis<F: Field>(
    generators: &[Polynomial<F>],
    order: &MonomialOrder,
) -> Result<Vec<Polynomial<F>>, PolyError> {
    let mut basis = generators.to_vec();

    loop {
        let n = basis.len();
        let leading: Vec<Monomial> = basis
            .iter()
            .map(|g| g.leading_monomial(order))
            .collect();
        let mut extended = basis.clone();
        let mut added = false;

        for i in 0..n {
            for j in (i + 1)..n {
                if lcm_criterion(&leading[i], &leading[j]) {
                    continue;
                }
                if chain_criterion(&leading[i], &leading[j], &leading[j + 1..]) {
                    continue;
                }

                let s = s_polynomial(&basis[i], &basis[j], order)?;
                let (_, r) = reduce(&s, &basis, order)?;

                if !r.is_zero() {
                    extended.push(r);
                    added = true;
                }
            }
        }

        if !added {
            return Ok(extended);
        }
        basis = extended;
    }
}

/// Interreduces a Gröbner basis.
///
/// First pass drops every element whose leading monomial is divisible
/// by another surviving element's. Second pass replaces each element by
/// its remainder modulo the others, repeating until a full pass changes
/// nothing; a zero remainder leaves the element in place.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if the basis contains the zero
/// polynomial.
pub fn interreduce<F: Field>(
    basis: &[Polynomial<F>],
    order: &MonomialOrder,
) -> Result<Vec<Polynomial<F>>, PolyError> {
    // Minimize. Each element is pulled out of the working set and only
    // re-admitted if no remaining element's leading monomial divides
    // its own; of two elements with equal leading monomials exactly one
    // survives.
    let mut minimal: Vec<Polynomial<F>> = basis.to_vec();
    for g in basis {
        let Some(position) = minimal.iter().position(|h| h == g) else {
            continue;
        };
        minimal.remove(position);

        let g_monomial = g.leading_monomial(order);
        let redundant = minimal
            .iter()
            .any(|h| g_monomial.is_divisible_by(&h.leading_monomial(order)));

        if !redundant {
            minimal.push(g.clone());
        }
    }

    // Auto-reduce until a full pass makes no changes.
    let mut reduced = minimal;
    loop {
        let mut changed = false;

        for i in 0..reduced.len() {
            let mut others = reduced.clone();
            others.remove(i);
            let (_, r) = reduce(&reduced[i], &others, order)?;

            if !r.is_zero() && reduced[i] != r {
                reduced[i] = r;
                changed = true;
            }
        }

        if !changed {
            return Ok(reduced);
        }
    }
}

/// Computes the reduced Gröbner basis of a generating set, with monic
/// leading coefficients.
///
/// Zero generators are discarded; an input with no nonzero generator
/// yields the empty basis (the zero ideal).
///
/// # Errors
///
/// Propagates [`PolyError::DivisionByZero`] from the underlying
/// division steps.
pub fn groebner_basis<F: Field>(
    generators: &[Polynomial<F>],
    order: &MonomialOrder,
) -> Result<Vec<Polynomial<F>>, PolyError> {
    groebner_basis_with(generators, order, true)
}

/// Computes a reduced Gröbner basis, optionally skipping the monic
/// normalization pass.
///
/// # Errors
///
/// Propagates [`PolyError::DivisionByZero`] from the underlying
/// division steps.
pub fn groebner_basis_with<F: Field>(
    generators: &[Polynomial<F>],
    order: &MonomialOrder,
    normalized: bool,
) -> Result<Vec<Polynomial<F>>, PolyError> {
    let nonzero: Vec<Polynomial<F>> = generators
        .iter()
        .filter(|g| !g.is_zero())
        .cloned()
        .collect();
    if nonzero.is_empty() {
        return Ok(Vec::new());
    }

    let extended = extend_basis(&nonzero, order)?;
    let mut basis = interreduce(&extended, order)?;

    if normalized {
        basis = basis
            .iter()
            .map(|g| g.monic(order))
            .collect::<Result<_, _>>()?;
    }

    Ok(basis)
}
