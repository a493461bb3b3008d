//! Multivariable division with remainder and S-polynomials.

use zariski_poly::{Monomial, MonomialOrder, PolyError, Polynomial};
use zariski_rings::Field;

/// Divides `f` by an ordered list of divisors.
///
/// Returns quotients `Q` (one per divisor) and a remainder `r` with
/// `f = Σ qᵢ·gᵢ + r` such that no monomial of `r` is divisible by any
/// divisor's leading monomial. At each step the *first* divisor whose
/// leading monomial divides the working leading term wins, so the
/// result is deterministic but depends on the divisor order; that
/// dependence is part of the contract.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if any divisor is the zero
/// polynomial.
pub fn reduce<F: Field>(
    f: &Polynomial<F>,
    divisors: &[Polynomial<F>],
    order: &MonomialOrder,
) -> Result<(Vec<Polynomial<F>>, Polynomial<F>), PolyError> {
    if divisors.iter().any(Polynomial::is_zero) {
        return Err(PolyError::DivisionByZero);
    }

    let leading: Vec<(Monomial, F)> = divisors
        .iter()
        .map(|g| (g.leading_monomial(order), g.leading_coefficient(order)))
        .collect();

    let mut p = f.clone();
    let mut r = Polynomial::zero();
    let mut quotients = vec![Polynomial::zero(); divisors.len()];

    while !p.is_zero() {
        let p_monomial = p.leading_monomial(order);
        let p_coefficient = p.leading_coefficient(order);
        let mut divided = false;

        for (i, (g_monomial, g_coefficient)) in leading.iter().enumerate() {
            if !p_monomial.is_divisible_by(g_monomial) {
                continue;
            }

            let term_monomial = p_monomial.div(g_monomial)?;
            let inv = g_coefficient.inv().ok_or(PolyError::DivisionByZero)?;
            let term_coefficient = p_coefficient.clone() * inv;

            p = &p - &divisors[i].mul_term(&term_monomial, &term_coefficient);
            quotients[i] = &quotients[i]
                + &Polynomial::from_monomial(term_monomial, term_coefficient);
            divided = true;
            break;
        }

        if !divided {
            let term = Polynomial::from_monomial(p_monomial, p_coefficient);
            p = &p - &term;
            r = &r + &term;
        }
    }

    Ok((quotients, r))
}

/// Computes the S-polynomial of `f` and `g`:
/// `S(f, g) = (L / LT(f))·f − (L / LT(g))·g` where
/// `L = lcm(LM(f), LM(g))`.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if either input is the zero
/// polynomial.
pub fn s_polynomial<F: Field>(
    f: &Polynomial<F>,
    g: &Polynomial<F>,
    order: &MonomialOrder,
) -> Result<Polynomial<F>, PolyError> {
    let f_monomial = f.leading_monomial(order);
    let g_monomial = g.leading_monomial(order);

    let f_inv = f
        .leading_coefficient(order)
        .inv()
        .ok_or(PolyError::DivisionByZero)?;
    let g_inv = g
        .leading_coefficient(order)
        .inv()
        .ok_or(PolyError::DivisionByZero)?;

    let lcm = Monomial::lcm(&f_monomial, &g_monomial);
    let u = f.mul_term(&lcm.div(&f_monomial)?, &f_inv);
    let v = g.mul_term(&lcm.div(&g_monomial)?, &g_inv);

    Ok(&u - &v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zariski_poly::Variable;
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

    fn lex_xy() -> MonomialOrder {
        MonomialOrder::lex(vec![Variable::user('x'), Variable::user('y')])
    }

    #[test]
    fn test_reduce_first_divisor_wins() {
        // f = x^2 y + 1 by [xy + 1, y + 1]: Q = [x, 0], r = -x + 1
        let f = x().pow(2).unwrap() * y() + q(1);
        let g1 = x() * y() + q(1);
        let g2 = y() + q(1);

        let (quotients, r) = reduce(&f, &[g1.clone(), g2.clone()], &lex_xy()).unwrap();
        assert_eq!(quotients[0], x());
        assert_eq!(quotients[1], q(0));
        assert_eq!(r, -&x() + q(1));

        // Swapping the divisors changes the outcome: Q = [x^2, 0],
        // r = -x^2 + 1
        let (quotients, r) = reduce(&f, &[g2, g1], &lex_xy()).unwrap();
        assert_eq!(quotients[0], x().pow(2).unwrap());
        assert_eq!(quotients[1], q(0));
        assert_eq!(r, -&x().pow(2).unwrap() + q(1));
    }

    #[test]
    fn test_reduce_identity() {
        // f = x^2 y + x y^2 + y^2 by [xy - 1, y^2 - 1]:
        // Q = [x + y, 1], r = x + y + 1
        let f = x().pow(2).unwrap() * y() + x() * y().pow(2).unwrap() + y().pow(2).unwrap();
        let g1 = x() * y() - q(1);
        let g2 = y().pow(2).unwrap() - q(1);
        let divisors = [g1.clone(), g2.clone()];

        let (quotients, r) = reduce(&f, &divisors, &lex_xy()).unwrap();
        assert_eq!(quotients[0], x() + y());
        assert_eq!(quotients[1], Polynomial::one());
        assert_eq!(r, x() + y() + q(1));

        // f = Σ qᵢ gᵢ + r
        let recombined = &(&(&quotients[0] * &g1) + &(&quotients[1] * &g2)) + &r;
        assert_eq!(recombined, f);
    }

    #[test]
    fn test_reduce_by_zero_divisor() {
        let f = x();
        let err = reduce(&f, &[Polynomial::zero()], &lex_xy()).unwrap_err();
        assert_eq!(err, PolyError::DivisionByZero);
    }

    #[test]
    fn test_remainder_irreducible() {
        let f = x().pow(2).unwrap() * y() + q(1);
        let g1 = x() * y() + q(1);
        let g2 = y() + q(1);
        let divisors = [g1, g2];

        let (_, r) = reduce(&f, &divisors, &lex_xy()).unwrap();
        for (monomial, _) in r.terms() {
            for g in &divisors {
                assert!(!monomial.is_divisible_by(&g.leading_monomial(&lex_xy())));
            }
        }
    }

    #[test]
    fn test_s_polynomial() {
        // S(x^3 - 2xy, x^2 y - 2y^2 + x) under grlex = -x^2
        let grlex =
            MonomialOrder::graded_lex(vec![Variable::user('x'), Variable::user('y')]);
        let f = x().pow(3).unwrap() - x() * y() * Polynomial::constant(q(2));
        let g = x().pow(2).unwrap() * y() - y().pow(2).unwrap().scale(&q(2)) + x();

        let s = s_polynomial(&f, &g, &grlex).unwrap();
        assert_eq!(s, -&x().pow(2).unwrap());
    }

    #[test]
    fn test_s_polynomial_of_zero_fails() {
        let err = s_polynomial(&Polynomial::zero(), &x(), &lex_xy()).unwrap_err();
        assert_eq!(err, PolyError::DivisionByZero);
    }
}
