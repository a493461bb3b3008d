//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn integer_gcd_lcm_product(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            let l = a.lcm(&b);
            prop_assert_eq!(g * l, (a * b).abs());
        }

        #[test]
        fn rational_always_reduced(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            let g = r.numerator().gcd(&r.denominator());
            if !r.is_zero() {
                prop_assert_eq!(g, Integer::new(1));
            }
            prop_assert!(!r.denominator().is_negative());
        }

        #[test]
        fn rational_add_commutative(
            an in small_int(), ad in non_zero_int(),
            bn in small_int(), bd in non_zero_int()
        ) {
            let a = Rational::from_i64(an, ad);
            let b = Rational::from_i64(bn, bd);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_recip(n in non_zero_int(), d in non_zero_int()) {
            use num_traits::One;
            let r = Rational::from_i64(n, d);
            prop_assert!((r.clone() * r.recip()).is_one());
        }
    }
}
