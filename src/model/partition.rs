//! Output view of a sign assignment.

use super::instance::Instance;
use super::sign::Sign;
use crate::error::{PartitionError, Result};

/// Signed difference `subset1 - subset2` of an assignment.
///
/// Zips `numbers` and `assignment`; extra entries on either side are
/// ignored.
pub fn signed_difference(numbers: &[i64], assignment: &[Sign]) -> i64 {
    numbers
        .iter()
        .zip(assignment)
        .map(|(&x, &s)| s.apply(x))
        .sum()
}

/// The two subsets induced by a sign assignment.
///
/// Both subsets keep input order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Numbers assigned [`Sign::Plus`].
    pub first: Vec<i64>,
    /// Numbers assigned [`Sign::Minus`].
    pub second: Vec<i64>,
    pub first_sum: i64,
    pub second_sum: i64,
}

impl Partition {
    /// Splits `instance` according to `assignment`.
    pub fn from_assignment(instance: &Instance, assignment: &[Sign]) -> Result<Self> {
        if assignment.len() != instance.len() {
            return Err(PartitionError::AssignmentLength {
                expected: instance.len(),
                actual: assignment.len(),
            });
        }

        let mut first = Vec::new();
        let mut second = Vec::new();
        for (&x, &sign) in instance.numbers().iter().zip(assignment) {
            match sign {
                Sign::Plus => first.push(x),
                Sign::Minus => second.push(x),
            }
        }
        let first_sum = first.iter().sum();
        let second_sum = second.iter().sum();

        Ok(Self {
            first,
            second,
            first_sum,
            second_sum,
        })
    }

    /// Realized difference `|first_sum - second_sum|`.
    pub fn difference(&self) -> i64 {
        (self.first_sum - self.second_sum).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Sign::{Minus, Plus};

    #[test]
    fn test_from_assignment() {
        let instance = Instance::new(vec![8, 7, 6, 5, 4]).unwrap();
        let p = Partition::from_assignment(&instance, &[Plus, Plus, Minus, Minus, Minus]).unwrap();
        assert_eq!(p.first, vec![8, 7]);
        assert_eq!(p.second, vec![6, 5, 4]);
        assert_eq!(p.first_sum, 15);
        assert_eq!(p.second_sum, 15);
        assert_eq!(p.difference(), 0);
    }

    #[test]
    fn test_length_mismatch() {
        let instance = Instance::new(vec![1, 2, 3]).unwrap();
        assert_eq!(
            Partition::from_assignment(&instance, &[Plus]),
            Err(PartitionError::AssignmentLength {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_signed_difference() {
        assert_eq!(signed_difference(&[3, 1, 2], &[Plus, Minus, Minus]), 0);
        assert_eq!(signed_difference(&[3, 1, 2], &[Minus, Plus, Plus]), 0);
        assert_eq!(signed_difference(&[3, 1, 2], &[Minus, Minus, Minus]), -6);
    }
}
