//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{binomial, BigInteger, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for integers spanning several limbs
    fn wide_int() -> impl Strategy<Value = BigInteger> {
        (any::<bool>(), "[0-9]{1,60}").prop_map(|(negative, digits)| {
            let text = if negative { format!("-{digits}") } else { digits };
            BigInteger::from_literal(&text)
        })
    }

    fn non_zero_wide_int() -> impl Strategy<Value = BigInteger> {
        wide_int().prop_filter("divisor must be non-zero", |b| !b.is_zero())
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in wide_int(), b in wide_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in wide_int(), b in wide_int(), c in wide_int()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn integer_mul_commutative(a in wide_int(), b in wide_int()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn integer_mul_associative(a in wide_int(), b in wide_int(), c in wide_int()) {
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        }

        #[test]
        fn integer_distributive(a in wide_int(), b in wide_int(), c in wide_int()) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn integer_additive_inverse(a in wide_int()) {
            let zero = &a - &a;
            prop_assert!(zero.is_zero());
            prop_assert!(!zero.is_negative());
            prop_assert_eq!(&a + -&a, BigInteger::zero());
        }

        #[test]
        fn integer_matches_native(a in small_int(), b in non_zero_int()) {
            let (x, y) = (BigInteger::new(a), BigInteger::new(b));
            prop_assert_eq!((&x + &y).to_i64(), Some(a + b));
            prop_assert_eq!((&x - &y).to_i64(), Some(a - b));
            prop_assert_eq!((&x * &y).to_i64(), Some(a * b));
            prop_assert_eq!((&x / &y).to_i64(), Some(a / b));
            prop_assert_eq!((&x % &y).to_i64(), Some(a % b));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        // Division

        #[test]
        fn truncated_division_law(a in wide_int(), b in non_zero_wide_int()) {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            if !r.is_zero() {
                prop_assert_eq!(r.is_negative(), a.is_negative());
            }
        }

        // Text conversion

        #[test]
        fn render_parse_round_trip(a in wide_int()) {
            prop_assert_eq!(BigInteger::parse(&a.to_string()).unwrap(), a);
        }

        #[test]
        fn canonical_text_round_trip(negative in any::<bool>(), digits in "[1-9][0-9]{0,50}") {
            let text = if negative { format!("-{digits}") } else { digits };
            prop_assert_eq!(BigInteger::parse(&text).unwrap().to_string(), text);
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_wide_int(), b in non_zero_wide_int()) {
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn gcd_commutative(a in wide_int(), b in wide_int()) {
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        #[test]
        fn extended_gcd_bezout(a in wide_int(), b in wide_int()) {
            let (g, x, y) = a.extended_gcd(&b);
            prop_assert_eq!(&g, &a.gcd(&b));
            prop_assert_eq!(&a * &x + &b * &y, g);
        }

        // Combinatorics

        #[test]
        fn pascal_rule(n in 1u32..80, k in 1u32..80) {
            prop_assume!(k <= n);
            prop_assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
        }

        // Rational field axioms

        #[test]
        fn rational_lowest_terms(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            for r in [&a + &b, &a - &b, &a * &b, a.clone(), b.clone()] {
                prop_assert!(r.denominator().is_positive());
                prop_assert!(r.numerator().gcd(r.denominator()).is_one());
            }
        }

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            let c = Rational::from_i64(num_c, den_c).unwrap();
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den).unwrap();
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_order_matches_native(
            num_a in small_int(),
            den_a in 1i64..1000i64,
            num_b in small_int(),
            den_b in 1i64..1000i64
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(a.cmp(&b), (num_a * den_b).cmp(&(num_b * den_a)));
        }

        #[test]
        fn as_decimal_whole_part_is_truncated_quotient(
            num in small_int(),
            den in non_zero_int(),
            precision in 0usize..8
        ) {
            let r = Rational::from_i64(num, den).unwrap();
            let rendered = r.as_decimal(precision);
            let whole = rendered.split('.').next().unwrap();
            let expected = (num / den).to_string();
            let expected = if r.is_negative() && num / den == 0 {
                format!("-{expected}")
            } else {
                expected
            };
            prop_assert_eq!(whole, expected.as_str());
            let fraction_len = rendered.split('.').nth(1).map_or(0, str::len);
            prop_assert_eq!(fraction_len, precision);
        }
    }
}
