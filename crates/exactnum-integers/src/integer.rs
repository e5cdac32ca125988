//! Arbitrary precision integers.
//!
//! [`BigInteger`] stores a sign flag next to a base 10^9 magnitude. The
//! representation is canonical (no leading zero limbs, no negative zero), so
//! structural equality and hashing agree with numeric equality.

use num_traits::{Num, One, Zero};
use std::cmp::Ordering;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, RemAssign, SubAssign};

use crate::error::ArithmeticError;
use crate::limbs::Limbs;

/// An arbitrary precision signed integer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInteger {
    negative: bool,
    magnitude: Limbs,
}

impl BigInteger {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    pub(crate) fn from_parts(negative: bool, magnitude: Limbs) -> Self {
        let mut value = Self {
            negative,
            magnitude,
        };
        value.normalize();
        value
    }

    fn normalize(&mut self) {
        self.magnitude.normalize();
        if self.magnitude.is_zero() {
            self.negative = false;
        }
    }

    pub(crate) fn magnitude(&self) -> &Limbs {
        &self.magnitude
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.magnitude.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns true if this integer is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.magnitude.is_zero()
    }

    /// Truthiness: true for every value except zero.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !self.magnitude.is_zero()
    }

    /// Number of base 10^9 limbs in the magnitude.
    #[must_use]
    pub fn limb_len(&self) -> usize {
        self.magnitude.len()
    }

    /// Adds one in place.
    pub fn inc(&mut self) {
        self.add_signed(&Limbs::from_u128(1), false);
    }

    /// Subtracts one in place.
    pub fn dec(&mut self) {
        self.add_signed(&Limbs::from_u128(1), true);
    }

    /// Adds a signed magnitude to `self`.
    fn add_signed(&mut self, magnitude: &Limbs, negative: bool) {
        if self.negative == negative {
            self.magnitude.add_assign(magnitude);
        } else {
            match self.magnitude.cmp(magnitude) {
                Ordering::Less => {
                    let mut larger = magnitude.clone();
                    larger.sub_assign(&self.magnitude);
                    self.magnitude = larger;
                    self.negative = negative;
                }
                Ordering::Equal => self.magnitude = Limbs::zero(),
                Ordering::Greater => self.magnitude.sub_assign(magnitude),
            }
        }
        self.normalize();
    }

    /// Truncated division of magnitudes with signs applied. `rhs` is non-zero.
    pub(crate) fn truncated_div_rem(&self, rhs: &Self) -> (Self, Self) {
        let (quotient, remainder) = self.magnitude.div_rem(&rhs.magnitude);
        (
            Self::from_parts(self.negative != rhs.negative, quotient),
            Self::from_parts(self.negative, remainder),
        )
    }

    /// Computes quotient and remainder, rounding the quotient toward zero.
    ///
    /// The remainder carries the sign of `self`, so
    /// `self == quotient * rhs + remainder` always holds.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.truncated_div_rem(rhs))
    }

    /// Truncated quotient.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Remainder of truncated division; takes the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// In-place truncated division. `self` is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div_assign(&mut self, rhs: &Self) -> Result<(), ArithmeticError> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /// In-place remainder. `self` is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem_assign(&mut self, rhs: &Self) -> Result<(), ArithmeticError> {
        *self = self.checked_rem(rhs)?;
        Ok(())
    }

    /// Computes the greatest common divisor, always non-negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.magnitude.clone();
        let mut b = other.magnitude.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r;
        }
        Self::from_parts(false, a)
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns `(g, x, y)` with `g = self*x + other*y` and `g` equal to
    /// [`BigInteger::gcd`], so never negative.
    #[must_use]
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (mut old_r, mut r) = (self.clone(), other.clone());
        let (mut old_s, mut s) = (Self::one(), Self::zero());
        let (mut old_t, mut t) = (Self::zero(), Self::one());

        while !r.is_zero() {
            let (q, rem) = old_r.truncated_div_rem(&r);
            old_r = std::mem::replace(&mut r, rem);

            let next_s = &old_s - &(&q * &s);
            old_s = std::mem::replace(&mut s, next_s);

            let next_t = &old_t - &(&q * &t);
            old_t = std::mem::replace(&mut t, next_t);
        }

        // Truncated division leaves the sign of the inputs on the last remainder.
        if old_r.is_negative() {
            (-old_r, -old_s, -old_t)
        } else {
            (old_r, old_s, old_t)
        }
    }

    /// Computes the least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        (&self.truncated_div_rem(&g).0 * other).abs()
    }

    /// Computes self^exp by repeated squaring.
    #[must_use]
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = i128::try_from(self.magnitude.to_u128()?).ok()?;
        let value = if self.negative { -magnitude } else { magnitude };
        i64::try_from(value).ok()
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for BigInteger {
    fn one() -> Self {
        Self::from(1u32)
    }

    fn is_one(&self) -> bool {
        !self.negative && self.magnitude.is_one()
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = ArithmeticError;

    /// Only radix 10 is supported; any other radix is rejected as malformed.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix != 10 {
            return Err(ArithmeticError::malformed(s, 0));
        }
        Self::parse(s)
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Arithmetic operations
impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        self.add_signed(&rhs.magnitude, rhs.negative);
    }
}

impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        self.add_signed(&rhs.magnitude, !rhs.negative && !rhs.is_zero());
    }
}

impl MulAssign<&BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        self.magnitude = self.magnitude.mul(&rhs.magnitude);
        self.negative = self.negative != rhs.negative;
        self.normalize();
    }
}

impl DivAssign<&BigInteger> for BigInteger {
    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInteger::checked_div`] to recover.
    fn div_assign(&mut self, rhs: &BigInteger) {
        assert!(!rhs.is_zero(), "attempt to divide by zero");
        *self = self.truncated_div_rem(rhs).0;
    }
}

impl RemAssign<&BigInteger> for BigInteger {
    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInteger::checked_rem`] to recover.
    fn rem_assign(&mut self, rhs: &BigInteger) {
        assert!(
            !rhs.is_zero(),
            "attempt to calculate the remainder with a divisor of zero"
        );
        *self = self.truncated_div_rem(rhs).1;
    }
}

forward_binop!(BigInteger, Add, add, AddAssign, add_assign);
forward_binop!(BigInteger, Sub, sub, SubAssign, sub_assign);
forward_binop!(BigInteger, Mul, mul, MulAssign, mul_assign);
forward_binop!(BigInteger, Div, div, DivAssign, div_assign);
forward_binop!(BigInteger, Rem, rem, RemAssign, rem_assign);

impl Neg for BigInteger {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.magnitude.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_parts(value < 0, Limbs::from_u128(u128::from(value.unsigned_abs())))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_parts(false, Limbs::from_u128(u128::from(value)))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128);
impl_from_unsigned!(u8, u16, u32, u64, u128);
