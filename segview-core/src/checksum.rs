//! Closed-form validation of row sums
//!
//! Buffers built with the `value(i, j) = i` rule have row sums of
//! `i * row_len`. These checks compare computed sums against that value
//! with exact equality.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::traits::ViewElement;

/// Expected sum of row `row` holding `row_len` copies of `row`
fn expected_sum<T: ViewElement>(row: usize, row_len: usize) -> T {
    T::from_usize(row.wrapping_mul(row_len))
}

/// Check that `sums[i] == row_size * i` for every row
pub fn check_sum<T: ViewElement>(sums: &[T], row_size: usize) -> bool {
    sums.iter()
        .enumerate()
        .all(|(row, &sum)| sum == expected_sum::<T>(row, row_size))
}

/// Check sums of rows with varying lengths described by an offsets table
///
/// `offsets` must hold `sums.len() + 1` entries; a mismatched table fails
/// the check.
pub fn check_sum_by_offsets<T: ViewElement>(sums: &[T], offsets: &[usize]) -> bool {
    if offsets.len() != sums.len() + 1 {
        return false;
    }
    sums.iter()
        .zip(offsets.windows(2))
        .enumerate()
        .all(|(row, (&sum, bounds))| {
            bounds[0] <= bounds[1] && sum == expected_sum::<T>(row, bounds[1] - bounds[0])
        })
}

/// Rows whose sum differs from `row_size * i`
#[cfg(feature = "alloc")]
pub fn failing_rows<T: ViewElement>(sums: &[T], row_size: usize) -> Vec<usize> {
    sums.iter()
        .enumerate()
        .filter(|&(row, &sum)| sum != expected_sum::<T>(row, row_size))
        .map(|(row, _)| row)
        .collect()
}

/// Rows whose sum differs from `i * (offsets[i + 1] - offsets[i])`
///
/// Rows without a matching pair of offsets are reported as failing.
#[cfg(feature = "alloc")]
pub fn failing_rows_by_offsets<T: ViewElement>(sums: &[T], offsets: &[usize]) -> Vec<usize> {
    sums.iter()
        .enumerate()
        .filter(|&(row, &sum)| match (offsets.get(row), offsets.get(row + 1)) {
            (Some(&begin), Some(&end)) if begin <= end => {
                sum != expected_sum::<T>(row, end - begin)
            }
            _ => true,
        })
        .map(|(row, _)| row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sum() {
        assert!(check_sum(&[0usize, 5, 10, 15], 5));
        assert!(!check_sum(&[0usize, 5, 11, 15], 5));
        assert!(check_sum(&[0.0f64, 3.0, 6.0], 3));

        // Nothing to check
        assert!(check_sum::<usize>(&[], 5));
    }

    #[test]
    fn test_check_sum_by_offsets() {
        assert!(check_sum_by_offsets(&[0u64, 3, 0, 6], &[0, 2, 5, 5, 7]));
        assert!(!check_sum_by_offsets(&[0u64, 3, 1, 6], &[0, 2, 5, 5, 7]));
        assert!(!check_sum_by_offsets(&[0u64, 3], &[0, 2, 5, 7]));
        assert!(check_sum_by_offsets::<u64>(&[], &[0]));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_failing_rows() {
        assert_eq!(failing_rows(&[0u32, 5, 10, 15], 5), alloc::vec::Vec::<usize>::new());
        assert_eq!(failing_rows(&[0u32, 4, 10, 16], 5), alloc::vec![1, 3]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_failing_rows_by_offsets() {
        let offsets = [0, 2, 5, 5, 7];
        assert!(failing_rows_by_offsets(&[0u64, 3, 0, 6], &offsets).is_empty());
        assert_eq!(
            failing_rows_by_offsets(&[0u64, 2, 0, 6], &offsets),
            alloc::vec![1]
        );
        // More sums than rows described by the table
        assert_eq!(failing_rows_by_offsets(&[0u64, 3], &[0, 2]), alloc::vec![1]);
    }
}
