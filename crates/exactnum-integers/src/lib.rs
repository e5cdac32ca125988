//! # exactnum-integers
//!
//! Exact arbitrary precision integer and rational arithmetic.
//!
//! This crate provides:
//! - Arbitrary precision integers (`BigInteger`) stored as base 10^9 limbs
//! - Exact rationals (`Rational`) kept in lowest terms
//! - Decimal text conversion with a configurable malformed-input policy
//! - The `bigint!` literal macro
//! - Exact factorials and binomial coefficients
//!
//! ## Division semantics
//!
//! Integer division truncates toward zero and the remainder takes the sign
//! of the dividend, matching the native integer types:
//!
//! ```
//! use exactnum_integers::bigint;
//!
//! assert_eq!(bigint!(-5) / bigint!(2), bigint!(-2));
//! assert_eq!(bigint!(-5) % bigint!(2), bigint!(-1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod combinatorics;
pub mod error;
pub mod integer;
mod limbs;
pub mod rational;
pub mod text;

#[cfg(test)]
mod proptests;

pub use combinatorics::{binomial, factorial, falling_factorial};
pub use error::ArithmeticError;
pub use integer::BigInteger;
pub use rational::Rational;
pub use text::ParseMode;
