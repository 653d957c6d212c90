//! Validated problem instance.

use crate::error::{PartitionError, Result};

/// Largest admissible `sum(|x|)`.
///
/// With this headroom every signed sum, every `|a - b|` formed during
/// differencing, and every `2 * x` annealing delta fits in `i64`.
const MAGNITUDE_LIMIT: i64 = i64::MAX / 2;

/// An immutable, non-empty list of integers to partition.
///
/// # Examples
///
/// ```
/// use u_partition::model::Instance;
///
/// let instance = Instance::new(vec![8, 7, 6, 5, 4]).unwrap();
/// assert_eq!(instance.len(), 5);
/// assert_eq!(instance.sum(), 30);
/// assert!(Instance::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    numbers: Vec<i64>,
}

impl Instance {
    /// Validates and wraps a list of numbers.
    ///
    /// Fails on an empty list, or when the summed magnitude of the
    /// numbers leaves the range the solver can represent exactly.
    pub fn new(numbers: Vec<i64>) -> Result<Self> {
        if numbers.is_empty() {
            return Err(PartitionError::EmptyInstance);
        }

        let mut magnitude: i64 = 0;
        for (index, &x) in numbers.iter().enumerate() {
            magnitude = x
                .checked_abs()
                .and_then(|a| magnitude.checked_add(a))
                .filter(|&m| m <= MAGNITUDE_LIMIT)
                .ok_or(PartitionError::Overflow { index })?;
        }

        Ok(Self { numbers })
    }

    /// The numbers in input order.
    #[inline]
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.numbers.get(index).copied()
    }

    /// Sum of all numbers.
    pub fn sum(&self) -> i64 {
        self.numbers.iter().sum()
    }
}

impl TryFrom<Vec<i64>> for Instance {
    type Error = PartitionError;

    fn try_from(numbers: Vec<i64>) -> Result<Self> {
        Self::new(numbers)
    }
}
