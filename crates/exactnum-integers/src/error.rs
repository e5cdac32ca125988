//! Errors raised by integer and rational arithmetic.

use thiserror::Error;

/// Errors that can occur while parsing or dividing exact numbers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The text is not of the form `[+-]?[0-9]+`.
    ///
    /// `position` is the byte offset of the first offending character, or the
    /// length of the input when the digits are missing altogether.
    #[error("malformed integer literal {input:?} at byte {position}")]
    MalformedInput {
        /// The rejected text.
        input: String,
        /// Byte offset of the first invalid character.
        position: usize,
    },

    /// A zero divisor, or a rational with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
}

impl ArithmeticError {
    pub(crate) fn malformed(input: &str, position: usize) -> Self {
        Self::MalformedInput {
            input: input.to_owned(),
            position,
        }
    }
}
