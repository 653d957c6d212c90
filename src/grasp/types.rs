//! Local search seam of the GRASP driver.

use crate::model::Sign;
use crate::sa::Annealer;
use rand::Rng;

/// Improvement phase applied to every constructed solution.
///
/// Implementations refine `assignment` in place and return its absolute
/// difference. `difference` is the absolute difference of the incoming
/// assignment. The returned value must never exceed it, and must match
/// the assignment left behind.
pub trait LocalSearch {
    fn refine<R: Rng>(
        &self,
        numbers: &[i64],
        assignment: &mut [Sign],
        difference: i64,
        rng: &mut R,
    ) -> i64;
}

impl LocalSearch for Annealer {
    fn refine<R: Rng>(
        &self,
        numbers: &[i64],
        assignment: &mut [Sign],
        difference: i64,
        rng: &mut R,
    ) -> i64 {
        self.anneal(numbers, assignment, difference, rng)
            .best_difference
    }
}
