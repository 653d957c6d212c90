//! Restricted candidate list.
//!
//! The working list is kept in ascending value order, so the largest
//! element sits at the back and the RCL is a contiguous suffix.

use crate::model::PartitionElement;

/// Lowest value admitted to the RCL.
///
/// `max - trunc(alpha * (max - min))`.
#[inline]
pub(crate) fn threshold(max: i64, min: i64, alpha: f64) -> i64 {
    max - (alpha * (max - min) as f64) as i64
}

/// Number of candidates, counted from the largest element down.
///
/// With `alpha == 0` only the largest element is a candidate, even when
/// other elements tie with it. Returns 0 only for an empty list.
pub(crate) fn rcl_len(ascending: &[PartitionElement], alpha: f64) -> usize {
    let (Some(min), Some(max)) = (ascending.first(), ascending.last()) else {
        return 0;
    };
    if alpha == 0.0 {
        return 1;
    }

    let threshold = threshold(max.value(), min.value(), alpha);
    ascending
        .iter()
        .rev()
        .take_while(|e| e.value() >= threshold)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(values: &[i64]) -> Vec<PartitionElement> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| PartitionElement::leaf(i, v))
            .collect()
    }

    #[test]
    fn test_threshold() {
        assert_eq!(threshold(10, 0, 0.0), 10);
        assert_eq!(threshold(10, 0, 1.0), 0);
        assert_eq!(threshold(10, 2, 0.5), 6);
        // truncation toward zero
        assert_eq!(threshold(10, 0, 0.33), 7);
    }

    #[test]
    fn test_rcl_greedy_single_candidate_even_with_ties() {
        let list = ascending(&[1, 4, 9, 9, 9]);
        assert_eq!(rcl_len(&list, 0.0), 1);
    }

    #[test]
    fn test_rcl_full_randomization() {
        let list = ascending(&[1, 4, 6, 9]);
        assert_eq!(rcl_len(&list, 1.0), 4);
    }

    #[test]
    fn test_rcl_partial() {
        // threshold = 9 - trunc(0.5 * 8) = 5
        let list = ascending(&[1, 4, 5, 6, 9]);
        assert_eq!(rcl_len(&list, 0.5), 3);
    }

    #[test]
    fn test_rcl_empty() {
        assert_eq!(rcl_len(&[], 0.5), 0);
    }

    #[test]
    fn test_rcl_single() {
        let list = ascending(&[3]);
        assert_eq!(rcl_len(&list, 0.0), 1);
        assert_eq!(rcl_len(&list, 1.0), 1);
    }
}
