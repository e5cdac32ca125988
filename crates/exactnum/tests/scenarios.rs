//! End-to-end arithmetic scenarios through the public facade.

use exactnum::prelude::*;
use num_traits::Zero;

#[test]
fn carry_across_limb_boundary() {
    assert_eq!(bigint!(999999999) + bigint!(1), bigint!(1000000000));
}

#[test]
fn truncated_division_of_negative_dividend() {
    assert_eq!(bigint!(-5) / bigint!(2), bigint!(-2));
    assert_eq!(bigint!(-5) % bigint!(2), bigint!(-1));
}

#[test]
fn rational_normalizes_on_construction() {
    let half = Rational::new(BigInteger::new(4), BigInteger::new(8)).unwrap();
    assert_eq!(half.numerator(), &BigInteger::new(1));
    assert_eq!(half.denominator(), &BigInteger::new(2));
    assert_eq!(half.to_string(), "1/2");
}

#[test]
fn rational_decimal_is_truncated() {
    assert_eq!(Rational::from_i64(1, 3).unwrap().as_decimal(4), "0.3333");
    assert_eq!(Rational::from_i64(2, 3).unwrap().as_decimal(4), "0.6666");
}

#[test]
fn product_with_zero_is_canonical() {
    let product = bigint!("123456789012345678901234567890") * bigint!(0);
    assert_eq!(product, bigint!(0));
    assert!(!product.is_negative());
    assert_eq!(product.to_string(), "0");
}

#[test]
fn opposite_rationals_sum_to_zero() {
    let sum = Rational::from_i64(-1, 2).unwrap() + Rational::from_i64(1, 2).unwrap();
    assert_eq!(sum, Rational::from_i64(0, 1).unwrap());
    assert_eq!(sum.to_string(), "0");
}

#[test]
fn errors_surface_through_results() {
    assert_eq!(
        bigint!(7).checked_div(&BigInteger::zero()),
        Err(ArithmeticError::DivisionByZero)
    );
    assert!(matches!(
        "12-3".parse::<BigInteger>(),
        Err(ArithmeticError::MalformedInput { position: 2, .. })
    ));
    assert_eq!(
        BigInteger::parse_with("12-3", ParseMode::ZeroOnError),
        Ok(BigInteger::zero())
    );
}

#[test]
fn factorial_ratio_is_exact() {
    let ratio = Rational::new(factorial(40), factorial(38)).unwrap();
    assert_eq!(ratio.to_integer(), Some(BigInteger::new(40 * 39)));
    assert_eq!(binomial(40, 2), BigInteger::new(780));
}

#[test]
fn bezout_coefficients_for_large_operands() {
    let a = factorial(30);
    let b = &bigint!("1000000007") * &bigint!(-998244353);
    let (g, x, y) = a.extended_gcd(&b);
    assert_eq!(g, a.gcd(&b));
    assert_eq!(&(&a * &x) + &(&b * &y), g);

    let coprime = Rational::new(a.clone(), &a + &BigInteger::new(1)).unwrap();
    assert_eq!(coprime.numerator(), &a);
}
