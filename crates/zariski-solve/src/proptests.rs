//! Property-based tests for divisor enumeration and rational roots.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::rational_roots::{divisors, rational_roots};
    use zariski_integers::Integer;
    use zariski_poly::{Polynomial, Variable};
    use zariski_rings::{Q, Ring};

    proptest! {
        #[test]
        fn divisors_divide(n in -500i64..500) {
            let n = Integer::new(n);
            for d in divisors(&n) {
                if d.is_zero() {
                    prop_assert!(n.is_zero());
                } else {
                    prop_assert!((n.clone() % d).is_zero());
                }
            }
        }

        #[test]
        fn divisors_match_input_sign(n in 1i64..500) {
            for d in divisors(&Integer::new(-n)) {
                prop_assert!(d.is_negative());
            }
        }

        #[test]
        fn factored_quadratic_roots_found(a in -8i64..8, b in -8i64..8) {
            let x = Polynomial::<Q>::variable(Variable::user('x'));
            let f = &(&x - &Polynomial::constant(Q::from_integer(a)))
                * &(&x - &Polynomial::constant(Q::from_integer(b)));

            let mut expected = vec![Q::from_integer(a), Q::from_integer(b)];
            expected.sort();
            expected.dedup();
            prop_assert_eq!(rational_roots(&f), expected);
        }

        #[test]
        fn reported_roots_vanish(
            coeffs in proptest::collection::vec(-6i64..6, 1..=4)
        ) {
            let x = Polynomial::<Q>::variable(Variable::user('x'));
            let mut f = Polynomial::zero();
            for (i, &c) in coeffs.iter().enumerate() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let i = i as i32;
                f = &f + &x.pow(i).unwrap().scale(&Q::from_integer(c));
            }
            prop_assume!(!f.variables().is_empty());

            for root in rational_roots(&f) {
                let env = [(Variable::user('x'), root)].into();
                prop_assert!(Ring::is_zero(&f.evaluate(&env).unwrap()));
            }
        }
    }
}
