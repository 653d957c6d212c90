//! Subset membership of a single number.

use std::ops::Neg;

/// Which side of the split a number lands on.
///
/// `Plus` is subset 1 (+1), `Minus` is subset 2 (-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Returns `+1` or `-1`.
    #[inline]
    pub fn value(self) -> i64 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }

    /// Returns the opposite sign.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    /// Applies this sign to `x`.
    #[inline]
    pub fn apply(self, x: i64) -> i64 {
        match self {
            Sign::Plus => x,
            Sign::Minus => -x,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self.flipped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_values() {
        assert_eq!(Sign::Plus.value(), 1);
        assert_eq!(Sign::Minus.value(), -1);
        assert_eq!(-Sign::Plus, Sign::Minus);
        assert_eq!(Sign::Minus.flipped().flipped(), Sign::Minus);
    }

    #[test]
    fn test_sign_apply() {
        assert_eq!(Sign::Plus.apply(7), 7);
        assert_eq!(Sign::Minus.apply(7), -7);
        assert_eq!(Sign::Minus.apply(-3), 3);
    }
}
