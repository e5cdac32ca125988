//! # exactnum
//!
//! Exact big integer and rational arithmetic.
//!
//! Numbers are arbitrary precision and never rounded: integers are stored as
//! base 10^9 limbs, rationals are kept in lowest terms, and text is the only
//! I/O boundary.
//!
//! ## Features
//!
//! - **BigInteger**: signed integers with truncated division, like `i64`
//! - **Rational**: exact fractions with truncated decimal rendering
//! - **Combinatorics**: factorials and binomial coefficients
//!
//! ## Quick Start
//!
//! ```rust
//! use exactnum::prelude::*;
//!
//! let big = bigint!("123456789012345678901234567890");
//! assert_eq!((&big * &big).to_string(), "15241578753238836750495351562536198787501905199875019052100");
//!
//! let third = Rational::from_i64(1, 3)?;
//! assert_eq!(third.as_decimal(4), "0.3333");
//! assert_eq!(factorial(25).to_string(), "15511210043330985984000000");
//! # Ok::<(), exactnum::integers::ArithmeticError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exactnum_integers as integers;
pub use exactnum_integers::bigint;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exactnum_integers::{
        bigint, binomial, factorial, falling_factorial, ArithmeticError, BigInteger, ParseMode,
        Rational,
    };
}
