//! Property-based tests for ideal membership and the gcd/lcm identity.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::ideal::Ideal;
    use crate::poly_gcd::{gcd, lcm};
    use zariski_poly::{Monomial, Polynomial, Variable};
    use zariski_rings::{Q, Ring};

    fn mono(a: u32, b: u32) -> Monomial {
        &Monomial::var_pow(Variable::user('x'), a) * &Monomial::var_pow(Variable::user('y'), b)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(((0u32..3, 0u32..3), -4i64..4), 0..=3).prop_map(|terms| {
            Polynomial::from_terms(
                terms
                    .into_iter()
                    .map(|((a, b), c)| (mono(a, b), Q::from_integer(c))),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn combinations_are_members(a in small_poly(), b in small_poly()) {
            let x = Polynomial::<Q>::variable(Variable::user('x'));
            let y = Polynomial::<Q>::variable(Variable::user('y'));
            let f = x.pow(2).unwrap();
            let g = &x * &y;

            let ideal = Ideal::new(vec![f.clone(), g.clone()]);
            let combination = &(&a * &f) + &(&b * &g);
            prop_assert!(ideal.contains(&combination).unwrap());
        }

        #[test]
        fn gcd_lcm_identity_linear(a in -4i64..4, b in -4i64..4) {
            let x = Polynomial::<Q>::variable(Variable::user('x'));
            let f = &x - &Polynomial::constant(Q::from_integer(a));
            let g = &x - &Polynomial::constant(Q::from_integer(b));

            let product = &gcd(&f, &g).unwrap() * &lcm(&f, &g).unwrap();
            prop_assert_eq!(product, &f * &g);
        }

        #[test]
        fn sum_contains_both_sides(a in small_poly(), b in small_poly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            let i = Ideal::new(vec![a.clone()]);
            let j = Ideal::new(vec![b.clone()]);
            let sum = &i + &j;

            prop_assert!(i.is_subset_of(&sum).unwrap());
            prop_assert!(j.is_subset_of(&sum).unwrap());
        }
    }
}
