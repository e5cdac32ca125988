//! Literal sugar and operator forwarding.

/// Builds a [`BigInteger`](crate::BigInteger) from a decimal literal.
///
/// Accepts integer literals, negated integer literals and string literals,
/// so constants wider than any native type can be written inline.
///
/// ```
/// use exactnum_integers::bigint;
///
/// let small = bigint!(-42);
/// let large = bigint!("123456789012345678901234567890");
/// assert_eq!(small.to_string(), "-42");
/// assert_eq!(large.to_string(), "123456789012345678901234567890");
/// ```
///
/// # Panics
///
/// Panics if the literal is not of the form `[+-]?[0-9]+`.
#[macro_export]
macro_rules! bigint {
    (- $lit:literal) => {
        $crate::BigInteger::from_literal(concat!("-", $lit))
    };
    ($lit:literal) => {
        $crate::BigInteger::from_literal(concat!($lit))
    };
}

/// Derives the owned and borrowed binary operators of `$ty` from its
/// `$assign<&$ty>` implementation.
macro_rules! forward_binop {
    ($ty:ident, $imp:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl std::ops::$imp for $ty {
            type Output = $ty;

            fn $method(mut self, rhs: $ty) -> $ty {
                std::ops::$assign::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl std::ops::$imp<&$ty> for $ty {
            type Output = $ty;

            fn $method(mut self, rhs: &$ty) -> $ty {
                std::ops::$assign::$assign_method(&mut self, rhs);
                self
            }
        }

        impl std::ops::$imp<$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                let mut out = self.clone();
                std::ops::$assign::$assign_method(&mut out, &rhs);
                out
            }
        }

        impl std::ops::$imp for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                let mut out = self.clone();
                std::ops::$assign::$assign_method(&mut out, rhs);
                out
            }
        }

        impl std::ops::$assign for $ty {
            fn $assign_method(&mut self, rhs: $ty) {
                std::ops::$assign::$assign_method(self, &rhs);
            }
        }
    };
}
