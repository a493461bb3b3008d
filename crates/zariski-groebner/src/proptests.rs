//! Property-based tests for the division algorithm.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::reduce::reduce;
    use zariski_poly::{Monomial, MonomialOrder, Polynomial, Variable};
    use zariski_rings::{Q, Ring};

    fn mono(a: u32, b: u32) -> Monomial {
        &Monomial::var_pow(Variable::user('x'), a) * &Monomial::var_pow(Variable::user('y'), b)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(((0u32..4, 0u32..4), -5i64..5), 1..=4).prop_map(|terms| {
            Polynomial::from_terms(
                terms
                    .into_iter()
                    .map(|((a, b), c)| (mono(a, b), Q::from_integer(c))),
            )
        })
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("divisor must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn reduce_recombines(
            f in small_poly(),
            g1 in nonzero_poly(),
            g2 in nonzero_poly()
        ) {
            let order = MonomialOrder::graded_lex(
                vec![Variable::user('x'), Variable::user('y')],
            );
            let divisors = [g1, g2];
            let (quotients, r) = reduce(&f, &divisors, &order).unwrap();

            let mut recombined = r.clone();
            for (q, g) in quotients.iter().zip(&divisors) {
                recombined = &recombined + &(q * g);
            }
            prop_assert_eq!(recombined, f);
        }

        #[test]
        fn remainder_is_irreducible(
            f in small_poly(),
            g1 in nonzero_poly(),
            g2 in nonzero_poly()
        ) {
            let order = MonomialOrder::graded_lex(
                vec![Variable::user('x'), Variable::user('y')],
            );
            let divisors = [g1, g2];
            let (_, r) = reduce(&f, &divisors, &order).unwrap();

            for (monomial, _) in r.terms() {
                for g in &divisors {
                    prop_assert!(
                        !monomial.is_divisible_by(&g.leading_monomial(&order))
                    );
                }
            }
        }

        #[test]
        fn reduce_by_self_is_exact(f in nonzero_poly()) {
            let order = MonomialOrder::graded_lex(
                vec![Variable::user('x'), Variable::user('y')],
            );
            let (quotients, r) = reduce(&f, &[f.clone()], &order).unwrap();
            prop_assert!(r.is_zero());
            prop_assert_eq!(quotients[0].clone(), Polynomial::one());
        }
    }
}
