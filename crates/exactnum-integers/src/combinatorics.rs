//! Exact counting functions.
//!
//! These grow far past any native integer width, which is exactly what
//! [`BigInteger`] is for.

use crate::BigInteger;
use num_traits::{One, Zero};

/// Computes n!.
#[must_use]
pub fn factorial(n: u32) -> BigInteger {
    falling_factorial(n, n)
}

/// Computes n * (n-1) * ... * (n-k+1), the number of ordered k-selections.
///
/// Returns zero when `k > n`.
#[must_use]
pub fn falling_factorial(n: u32, k: u32) -> BigInteger {
    if k > n {
        return BigInteger::zero();
    }
    (n - k + 1..=n).fold(BigInteger::one(), |acc, factor| acc * BigInteger::from(factor))
}

/// Computes the binomial coefficient C(n, k).
///
/// Returns zero when `k > n`.
#[must_use]
pub fn binomial(n: u32, k: u32) -> BigInteger {
    if k > n {
        return BigInteger::zero();
    }
    let k = k.min(n - k);

    // Each prefix product C(n-k+i, i) is an integer, so every division is exact.
    let mut result = BigInteger::one();
    for i in 1..=k {
        result *= &BigInteger::from(n - k + i);
        result /= &BigInteger::from(i);
    }
    result
}
