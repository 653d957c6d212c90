//! Aggregated elements for Karmarkar-Karp differencing.

use super::sign::Sign;

/// One original number folded into an element, with the side it lands on
/// relative to the element's own aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    /// Position of the number in the input instance.
    pub index: usize,
    /// The original number.
    pub value: i64,
    pub sign: Sign,
}

/// A value paired with the signed original numbers that produced it.
///
/// Leaves wrap a single input number. Combining two elements replaces them
/// with their absolute difference and puts the second element's numbers on
/// the opposite side, so the contributions of the last surviving element
/// form a complete sign assignment.
///
/// # Invariant
///
/// The contributions cover exactly the input positions consumed by the
/// element's ancestry, each once.
///
/// # Examples
///
/// ```
/// use u_partition::model::{PartitionElement, Sign};
///
/// let a = PartitionElement::leaf(0, 8);
/// let b = PartitionElement::leaf(1, 5);
/// let c = PartitionElement::combine(a, b);
///
/// assert_eq!(c.value(), 3);
/// assert_eq!(c.contributions()[1].sign, Sign::Minus);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionElement {
    value: i64,
    contributions: Vec<Contribution>,
}

impl PartitionElement {
    /// Creates a leaf for the number at input position `index`.
    pub fn leaf(index: usize, value: i64) -> Self {
        Self {
            value,
            contributions: vec![Contribution {
                index,
                value,
                sign: Sign::Plus,
            }],
        }
    }

    /// Combines `a` and `b` into `|a - b|`, negating every sign in `b`.
    pub fn combine(a: PartitionElement, b: PartitionElement) -> Self {
        let value = (a.value - b.value).abs();
        let mut contributions = a.contributions;
        contributions.reserve(b.contributions.len());
        contributions.extend(b.contributions.into_iter().map(|c| Contribution {
            sign: -c.sign,
            ..c
        }));
        Self {
            value,
            contributions,
        }
    }

    /// The aggregate value used for selection.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// Sum of `sign * value` over all contributions.
    ///
    /// Equals [`value`](Self::value) whenever every combine took the larger
    /// element first, which is how the constructor always combines.
    pub fn signed_sum(&self) -> i64 {
        self.contributions
            .iter()
            .map(|c| c.sign.apply(c.value))
            .sum()
    }

    /// Writes each contribution's sign to its input position.
    ///
    /// Positions not covered by any contribution default to `Plus`.
    pub fn into_assignment(self, len: usize) -> Vec<Sign> {
        let mut assignment = vec![Sign::Plus; len];
        for c in self.contributions {
            if let Some(slot) = assignment.get_mut(c.index) {
                *slot = c.sign;
            }
        }
        assignment
    }
}
