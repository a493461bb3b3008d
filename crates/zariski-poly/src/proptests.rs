//! Property-based tests for monomials and polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use crate::monomial::Monomial;
    use crate::ordering::MonomialOrder;
    use crate::polynomial::Polynomial;
    use crate::variable::Variable;
    use zariski_rings::{Q, Ring};

    fn mono(a: u32, b: u32) -> Monomial {
        &Monomial::var_pow(Variable::user('x'), a) * &Monomial::var_pow(Variable::user('y'), b)
    }

    fn small_monomial() -> impl Strategy<Value = Monomial> {
        ((0u32..6, 0u32..6)).prop_map(|(a, b)| mono(a, b))
    }

    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(((0u32..4, 0u32..4), -6i64..6), 0..=4).prop_map(|terms| {
            Polynomial::from_terms(
                terms
                    .into_iter()
                    .map(|((a, b), c)| (mono(a, b), Q::from_integer(c))),
            )
        })
    }

    proptest! {
        // Monomial laws

        #[test]
        fn divides_iff_div_succeeds(a in small_monomial(), b in small_monomial()) {
            prop_assert_eq!(a.is_divisible_by(&b), a.div(&b).is_ok());
        }

        #[test]
        fn product_divided_by_factor(a in small_monomial(), b in small_monomial()) {
            let product = &a * &b;
            prop_assert_eq!(product.div(&b).unwrap(), a);
        }

        #[test]
        fn lcm_divisible_by_both(a in small_monomial(), b in small_monomial()) {
            let lcm = Monomial::lcm(&a, &b);
            prop_assert!(lcm.is_divisible_by(&a));
            prop_assert!(lcm.is_divisible_by(&b));
            prop_assert!(lcm.degree() <= a.degree() + b.degree());
        }

        #[test]
        fn degree_adds_under_mul(a in small_monomial(), b in small_monomial()) {
            prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!((&a + &(-&a)).is_zero());
        }

        // Leading-term multiplicativity under an admissible order

        #[test]
        fn leading_monomial_multiplicative(a in small_poly(), b in small_poly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            let order = MonomialOrder::graded_lex(
                vec![Variable::user('x'), Variable::user('y')],
            );
            let product = &a * &b;
            prop_assert_eq!(
                product.leading_monomial(&order),
                &a.leading_monomial(&order) * &b.leading_monomial(&order)
            );
        }

        // Substitution agrees with evaluation

        #[test]
        fn substitute_evaluate_round_trip(
            p in small_poly(),
            a in -5i64..5,
            b in -5i64..5
        ) {
            let x = Variable::user('x');
            let y = Variable::user('y');
            prop_assume!(p.variables().contains(&x));

            let full: BTreeMap<_, _> = [
                (x, Q::from_integer(a)),
                (y, Q::from_integer(b)),
            ].into();

            let substituted = p.substitute(x, &Q::from_integer(a)).unwrap();
            let mut rest = full.clone();
            rest.remove(&x);
            let via_substitution = if substituted.variables().is_empty() {
                substituted.coefficient(&Monomial::one())
            } else {
                substituted.evaluate(&rest).unwrap()
            };

            prop_assert_eq!(p.evaluate(&full).unwrap(), via_substitution);
        }
    }
}
