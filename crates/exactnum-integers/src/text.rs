//! Decimal text conversion for [`BigInteger`].
//!
//! Input must match `[+-]?[0-9]+`. Digits are grouped into nine-digit limbs
//! from the least significant end. Output is the canonical form: an optional
//! `-`, the top limb unpadded, then every lower limb padded to nine digits.

use log::warn;
use num_traits::Zero;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::ArithmeticError;
use crate::integer::BigInteger;
use crate::limbs::{Limbs, LIMB_DIGITS};

/// How [`BigInteger::parse_with`] treats malformed text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Reject malformed text with [`ArithmeticError::MalformedInput`].
    #[default]
    Strict,
    /// Substitute zero for malformed text and log a warning.
    ZeroOnError,
}

impl BigInteger {
    /// Parses a decimal literal of the form `[+-]?[0-9]+`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::MalformedInput`] if the text contains
    /// anything other than one leading sign followed by at least one ASCII
    /// digit.
    pub fn parse(text: &str) -> Result<Self, ArithmeticError> {
        let bytes = text.as_bytes();
        let (negative, start) = match bytes.first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };

        let digits = &bytes[start..];
        if digits.is_empty() {
            return Err(ArithmeticError::malformed(text, text.len()));
        }
        if let Some(offset) = digits.iter().position(|b| !b.is_ascii_digit()) {
            return Err(ArithmeticError::malformed(text, start + offset));
        }

        let magnitude: Limbs = digits
            .rchunks(LIMB_DIGITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u32, |acc, &digit| acc * 10 + u32::from(digit - b'0'))
            })
            .collect();

        Ok(Self::from_parts(negative, magnitude))
    }

    /// Parses with an explicit policy for malformed text.
    ///
    /// # Errors
    ///
    /// In [`ParseMode::Strict`] this behaves like [`BigInteger::parse`].
    /// [`ParseMode::ZeroOnError`] never fails.
    pub fn parse_with(text: &str, mode: ParseMode) -> Result<Self, ArithmeticError> {
        match (Self::parse(text), mode) {
            (Err(err), ParseMode::ZeroOnError) => {
                warn!("substituting zero for unparsable integer: {err}");
                Ok(Self::zero())
            }
            (result, _) => result,
        }
    }

    /// Builds an integer from a literal known to be well formed.
    ///
    /// This backs the [`bigint!`](crate::bigint) macro.
    ///
    /// # Panics
    ///
    /// Panics if `literal` is malformed.
    #[must_use]
    pub fn from_literal(literal: &str) -> Self {
        Self::parse(literal).unwrap_or_else(|err| panic!("invalid integer literal: {err}"))
    }
}

impl FromStr for BigInteger {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = ArithmeticError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limbs = self.magnitude().as_slice();
        let mut digits = String::with_capacity(limbs.len() * LIMB_DIGITS);

        let mut iter = limbs.iter().rev();
        if let Some(top) = iter.next() {
            write!(digits, "{top}")?;
        }
        for limb in iter {
            write!(digits, "{limb:09}")?;
        }

        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({self})")
    }
}
