//! Incrementally maintained sign assignment.

use crate::model::{signed_difference, Sign};

/// Current signs plus their signed difference `subset1 - subset2`.
///
/// The difference is computed once on creation and then updated by
/// `2 * new_sign * x` per flip, never re-summed.
#[derive(Debug, Clone)]
pub(crate) struct AnnealState<'a> {
    numbers: &'a [i64],
    signs: Vec<Sign>,
    difference: i64,
}

impl<'a> AnnealState<'a> {
    pub(crate) fn new(numbers: &'a [i64], signs: &[Sign]) -> Self {
        Self {
            numbers,
            signs: signs.to_vec(),
            difference: signed_difference(numbers, signs),
        }
    }

    /// Number of flippable positions.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.numbers.len().min(self.signs.len())
    }

    #[inline]
    pub(crate) fn signs(&self) -> &[Sign] {
        &self.signs
    }

    /// Signed difference of the current signs.
    #[inline]
    pub(crate) fn difference(&self) -> i64 {
        self.difference
    }

    /// Signed difference the state would have after flipping `i`.
    #[inline]
    pub(crate) fn flipped_difference(&self, i: usize) -> i64 {
        self.difference + 2 * self.signs[i].flipped().apply(self.numbers[i])
    }

    /// Flips position `i`.
    #[inline]
    pub(crate) fn flip(&mut self, i: usize) {
        self.difference = self.flipped_difference(i);
        self.signs[i] = self.signs[i].flipped();
    }
}
