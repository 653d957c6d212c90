//! Combine loop of the randomized differencing heuristic.

use super::rcl::rcl_len;
use crate::error::{PartitionError, Result};
use crate::model::{Instance, PartitionElement, Sign};
use log::trace;
use rand::Rng;

/// Initial solution produced by [`GreedyConstructor::construct`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    /// One sign per input number.
    pub assignment: Vec<Sign>,
    /// Absolute difference of the assignment.
    pub difference: i64,
}

/// Randomized Karmarkar-Karp constructor.
///
/// # Tie-breaking
///
/// Elements of equal value are ordered by age: the earlier input position
/// (for leaves) or the earlier combine step (for composites) ranks higher.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_partition::construct::GreedyConstructor;
/// use u_partition::model::Instance;
///
/// let instance = Instance::new(vec![8, 7, 6, 5, 4]).unwrap();
/// let constructor = GreedyConstructor::new(0.0).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let construction = constructor.construct(&instance, &mut rng);
/// assert_eq!(construction.difference, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreedyConstructor {
    alpha: f64,
}

impl GreedyConstructor {
    /// Creates a constructor with RCL width `alpha` in `[0, 1]`.
    pub fn new(alpha: f64) -> Result<Self> {
        check_alpha(alpha)?;
        Ok(Self { alpha })
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Runs the combine loop and returns the sole surviving element.
    ///
    /// Draws one random index per combine step whose RCL holds more than
    /// one candidate, and nothing otherwise.
    pub fn build<R: Rng>(&self, instance: &Instance, rng: &mut R) -> PartitionElement {
        // Ascending by value; among equal values the older element sits
        // closer to the back. Leaves are reversed before the stable sort
        // so that earlier input positions end up nearer the back.
        let mut working: Vec<PartitionElement> = instance
            .numbers()
            .iter()
            .enumerate()
            .rev()
            .map(|(i, &x)| PartitionElement::leaf(i, x))
            .collect();
        working.sort_by_key(|e| e.value());

        while let Some(largest) = working.pop() {
            if working.is_empty() {
                return largest;
            }

            let candidates = rcl_len(&working, self.alpha);
            let pick = if candidates > 1 {
                rng.random_range(0..candidates)
            } else {
                0
            };
            let second = working.remove(working.len() - 1 - pick);

            let combined = PartitionElement::combine(largest, second);
            trace!(
                "combine: pick {}/{} -> {} ({} remaining)",
                pick,
                candidates,
                combined.value(),
                working.len()
            );

            let at = working.partition_point(|e| e.value() < combined.value());
            working.insert(at, combined);
        }

        unreachable!("Instance guarantees at least one number")
    }

    /// Builds an initial sign assignment and its difference.
    pub fn construct<R: Rng>(&self, instance: &Instance, rng: &mut R) -> Construction {
        let survivor = self.build(instance, rng);
        let difference = survivor.value().abs();
        Construction {
            assignment: survivor.into_assignment(instance.len()),
            difference,
        }
    }
}

pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(PartitionError::InvalidAlpha(alpha))
    }
}
