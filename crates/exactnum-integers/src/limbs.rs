//! Magnitude storage in base 10^9 limbs.
//!
//! A [`Limbs`] value holds the absolute value of an integer as a sequence of
//! `u32` digits in base [`LIMB_BASE`], least significant first. Every routine
//! that mutates the sequence leaves it normalized: no most-significant zero
//! limb, and zero is the single limb `[0]`.

use log::trace;
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;

/// The radix of a single limb.
pub(crate) const LIMB_BASE: u32 = 1_000_000_000;

/// Number of decimal digits held by one limb.
pub(crate) const LIMB_DIGITS: usize = 9;

const BASE: u64 = LIMB_BASE as u64;

/// A normalized non-negative magnitude.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Limbs(SmallVec<[u32; 4]>);

impl Limbs {
    pub fn zero() -> Self {
        Self(smallvec![0])
    }

    pub fn from_u128(mut value: u128) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut limbs = SmallVec::new();
        while value > 0 {
            limbs.push((value % u128::from(LIMB_BASE)) as u32);
            value /= u128::from(LIMB_BASE);
        }
        Self(limbs)
    }

    /// Converts back to a `u128`, or `None` if the magnitude does not fit.
    pub fn to_u128(&self) -> Option<u128> {
        self.0.iter().rev().try_fold(0u128, |acc, &limb| {
            acc.checked_mul(u128::from(LIMB_BASE))?
                .checked_add(u128::from(limb))
        })
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_zero(&self) -> bool {
        self.0.len() == 1 && self.0[0] == 0
    }

    pub fn is_one(&self) -> bool {
        self.0.len() == 1 && self.0[0] == 1
    }

    /// Strips most-significant zero limbs, collapsing all-zero input to `[0]`.
    pub fn normalize(&mut self) {
        while self.0.len() > 1 && self.0.last() == Some(&0) {
            self.0.pop();
        }
        if self.0.is_empty() {
            self.0.push(0);
        }
    }

    /// Multiplies the magnitude by the base.
    pub fn shift_left(&mut self) {
        self.0.insert(0, 0);
    }

    /// Adds `other` in place.
    pub fn add_assign(&mut self, other: &Self) {
        if self.0.len() < other.0.len() {
            self.0.resize(other.0.len(), 0);
        }

        let mut carry = 0u64;
        for (i, limb) in self.0.iter_mut().enumerate() {
            if i >= other.0.len() && carry == 0 {
                break;
            }
            let sum = u64::from(*limb) + carry + u64::from(other.0.get(i).copied().unwrap_or(0));
            *limb = (sum % BASE) as u32;
            carry = sum / BASE;
        }
        if carry > 0 {
            self.0.push(carry as u32);
        }

        self.normalize();
    }

    /// Subtracts `other` in place. `other` must not exceed `self`.
    pub fn sub_assign(&mut self, other: &Self) {
        debug_assert!(*self >= *other, "magnitude subtraction would underflow");

        let mut borrow = 0i64;
        for (i, limb) in self.0.iter_mut().enumerate() {
            if i >= other.0.len() && borrow == 0 {
                break;
            }
            let mut diff =
                i64::from(*limb) - borrow - i64::from(other.0.get(i).copied().unwrap_or(0));
            if diff < 0 {
                diff += i64::from(LIMB_BASE);
                borrow = 1;
            } else {
                borrow = 0;
            }
            *limb = diff as u32;
        }

        self.normalize();
    }

    /// Schoolbook product.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut out: SmallVec<[u32; 4]> = smallvec![0; self.0.len() + other.0.len()];
        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.0.iter().enumerate() {
                let cur = u64::from(out[i + j]) + carry + u64::from(a) * u64::from(b);
                out[i + j] = (cur % BASE) as u32;
                carry = cur / BASE;
            }
            // The row's final carry is below the base, and no earlier row has
            // reached this position yet.
            out[i + other.0.len()] = carry as u32;
        }

        let mut product = Self(out);
        product.normalize();
        product
    }

    /// Product with a single digit in `0..LIMB_BASE`.
    pub fn mul_digit(&self, digit: u32) -> Self {
        debug_assert!(digit < LIMB_BASE);
        if digit == 0 || self.is_zero() {
            return Self::zero();
        }

        let mut out: SmallVec<[u32; 4]> = SmallVec::with_capacity(self.0.len() + 1);
        let mut carry = 0u64;
        for &limb in &self.0 {
            let cur = u64::from(limb) * u64::from(digit) + carry;
            out.push((cur % BASE) as u32);
            carry = cur / BASE;
        }
        if carry > 0 {
            out.push(carry as u32);
        }
        Self(out)
    }

    /// Long division, one dividend limb at a time.
    ///
    /// Returns `(quotient, remainder)`. `divisor` must be non-zero.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero(), "division by a zero magnitude");

        if *self < *divisor {
            return (Self::zero(), self.clone());
        }

        trace!(
            "long division: {} dividend limbs by {} divisor limbs",
            self.len(),
            divisor.len()
        );

        let mut quotient: SmallVec<[u32; 4]> = smallvec![0; self.0.len()];
        let mut remainder = Self::zero();

        for (i, &limb) in self.0.iter().enumerate().rev() {
            remainder.shift_left();
            remainder.0[0] = limb;
            remainder.normalize();

            let digit = Self::quotient_digit(divisor, &remainder);
            quotient[i] = digit;
            remainder.sub_assign(&divisor.mul_digit(digit));
        }

        let mut quotient = Self(quotient);
        quotient.normalize();
        (quotient, remainder)
    }

    /// Largest `d` in `0..=LIMB_BASE - 1` with `divisor * d <= remainder`.
    fn quotient_digit(divisor: &Self, remainder: &Self) -> u32 {
        let mut low = 0u32;
        let mut high = LIMB_BASE - 1;
        let mut best = 0u32;

        while low <= high {
            let mid = low + (high - low) / 2;
            if divisor.mul_digit(mid) <= *remainder {
                best = mid;
                low = mid + 1;
            } else if mid == 0 {
                break;
            } else {
                high = mid - 1;
            }
        }

        best
    }
}

impl Default for Limbs {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromIterator<u32> for Limbs {
    /// Collects least-significant-first limbs and normalizes them.
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut limbs = Self(iter.into_iter().collect());
        limbs.normalize();
        limbs
    }
}

impl Ord for Limbs {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
    }
}

impl PartialOrd for Limbs {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
