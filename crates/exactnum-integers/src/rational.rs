//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic on top of [`BigInteger`].

use log::trace;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

use crate::error::ArithmeticError;
use crate::BigInteger;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator,
/// so derived equality and hashing are numeric.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInteger,
    denominator: BigInteger,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: BigInteger, denominator: BigInteger) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let mut value = Self {
            numerator,
            denominator,
        };
        value.normalize();
        Ok(value)
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: BigInteger) -> Self {
        Self {
            numerator: n,
            denominator: BigInteger::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Self::new(BigInteger::new(numerator), BigInteger::new(denominator))
    }

    /// Moves the sign into the numerator and reduces to lowest terms.
    fn normalize(&mut self) {
        if self.denominator.is_negative() {
            self.numerator = -&self.numerator;
            self.denominator = -&self.denominator;
        }

        let g = self.numerator.gcd(&self.denominator);
        if !g.is_zero() && !g.is_one() {
            trace!("reducing rational by {g}");
            self.numerator /= &g;
            self.denominator /= &g;
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInteger> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        // Powers of coprime values stay coprime.
        Self {
            numerator: self.numerator.pow(exp),
            denominator: self.denominator.pow(exp),
        }
    }

    /// Exact quotient.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Self::new(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        )
    }

    /// Renders a fixed-point decimal with `precision` fractional digits.
    ///
    /// Digits beyond `precision` are truncated, never rounded. A value in
    /// `(-1, 0)` keeps its minus sign even though the whole part is zero.
    /// With a precision of zero the decimal point is omitted.
    #[must_use]
    pub fn as_decimal(&self, precision: usize) -> String {
        let (whole, mut remainder) = self.split_whole();

        let mut out = String::new();
        if self.is_negative() && whole.is_zero() {
            out.push('-');
        }
        out.push_str(&whole.to_string());

        if precision == 0 {
            return out;
        }

        out.push('.');
        let ten = BigInteger::from(10u32);
        remainder = remainder.abs();
        for _ in 0..precision {
            remainder *= &ten;
            let (digit, rest) = remainder.truncated_div_rem(&self.denominator);
            out.push_str(&digit.to_string());
            remainder = rest;
        }
        out
    }

    /// Approximates the value as an `f64` through a 15-digit decimal rendering.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.as_decimal(15).parse().unwrap_or(f64::NAN)
    }

    /// Truncated whole part and signed remainder over the denominator.
    fn split_whole(&self) -> (BigInteger, BigInteger) {
        self.numerator.truncated_div_rem(&self.denominator)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInteger::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(BigInteger::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        self.numerator = &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator;
        self.denominator *= &rhs.denominator;
        self.normalize();
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        self.numerator = &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator;
        self.denominator *= &rhs.denominator;
        self.normalize();
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        self.numerator *= &rhs.numerator;
        self.denominator *= &rhs.denominator;
        self.normalize();
    }
}

impl DivAssign<&Rational> for Rational {
    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Rational::checked_div`] to recover.
    fn div_assign(&mut self, rhs: &Rational) {
        assert!(!rhs.is_zero(), "attempt to divide by zero");
        self.numerator *= &rhs.denominator;
        self.denominator *= &rhs.numerator;
        self.normalize();
    }
}

forward_binop!(Rational, Add, add, AddAssign, add_assign);
forward_binop!(Rational, Sub, sub, SubAssign, sub_assign);
forward_binop!(Rational, Mul, mul, MulAssign, mul_assign);
forward_binop!(Rational, Div, div, DivAssign, div_assign);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<BigInteger> for Rational {
    fn from(n: BigInteger) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInteger::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(BigInteger::from(n))
    }
}
