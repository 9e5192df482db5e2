//! Window bounds and offsets table validation
//!
//! This module provides pure validation functions for the half-open
//! windows handed to views and for CSR-style offsets tables.

use crate::ViewError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Validate a half-open window `[begin, end)` over storage of length `len`
///
/// Succeeds when `begin <= end <= len` and returns the window length.
pub const fn validate_range(begin: usize, end: usize, len: usize) -> Result<usize, ViewError> {
    if begin > end || end > len {
        return Err(ViewError::InvalidRange { begin, end, len });
    }
    Ok(end - begin)
}

/// Validate that `count` elements of `T` fit in a single allocation
///
/// Allocations are limited to `isize::MAX` bytes. Returns `count` on success.
pub const fn validate_allocation<T>(count: usize) -> Result<usize, ViewError> {
    match count.checked_mul(core::mem::size_of::<T>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(count),
        _ => Err(ViewError::SizeOverflow),
    }
}

/// Validate an offsets table against the length of the values it indexes
///
/// The table must be non-empty, start at zero, never decrease, and end at
/// `values_len`. Returns the number of rows described by the table.
pub fn validate_offsets(offsets: &[usize], values_len: usize) -> Result<usize, ViewError> {
    let (first, last) = match (offsets.first(), offsets.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(ViewError::InvalidOffsets("offsets table is empty")),
    };

    if first != 0 {
        return Err(ViewError::InvalidOffsets("first offset must be zero"));
    }

    if offsets.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(ViewError::InvalidOffsets("offsets must be non-decreasing"));
    }

    if last != values_len {
        return Err(ViewError::InvalidOffsets(
            "last offset must equal the number of values",
        ));
    }

    Ok(offsets.len() - 1)
}

/// Build an offsets table from per-row lengths by cumulative sum
///
/// Returns `lengths.len() + 1` offsets starting at zero.
#[cfg(feature = "alloc")]
pub fn offsets_from_lengths(lengths: &[usize]) -> Result<Vec<usize>, ViewError> {
    let mut offsets = Vec::with_capacity(lengths.len() + 1);
    let mut total: usize = 0;
    offsets.push(total);

    for &length in lengths {
        total = total.checked_add(length).ok_or(ViewError::SizeOverflow)?;
        offsets.push(total);
    }

    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert_eq!(validate_range(0, 5, 5), Ok(5));
        assert_eq!(validate_range(2, 2, 5), Ok(0));
        assert_eq!(validate_range(5, 5, 5), Ok(0));

        // end past storage
        assert_eq!(
            validate_range(3, 6, 5),
            Err(ViewError::InvalidRange { begin: 3, end: 6, len: 5 })
        );
        // reversed
        assert_eq!(
            validate_range(4, 2, 5),
            Err(ViewError::InvalidRange { begin: 4, end: 2, len: 5 })
        );
    }

    #[test]
    fn test_validate_allocation() {
        assert_eq!(validate_allocation::<u64>(0), Ok(0));
        assert_eq!(validate_allocation::<u64>(1024), Ok(1024));
        assert_eq!(
            validate_allocation::<u8>(isize::MAX as usize),
            Ok(isize::MAX as usize)
        );

        assert_eq!(
            validate_allocation::<u64>(usize::MAX / 4),
            Err(ViewError::SizeOverflow)
        );
        assert_eq!(
            validate_allocation::<u8>(isize::MAX as usize + 1),
            Err(ViewError::SizeOverflow)
        );
        assert_eq!(
            validate_allocation::<u32>(usize::MAX),
            Err(ViewError::SizeOverflow)
        );
    }

    #[test]
    fn test_validate_offsets() {
        assert_eq!(validate_offsets(&[0, 5, 10, 15, 20], 20), Ok(4));
        assert_eq!(validate_offsets(&[0], 0), Ok(0));
        // empty rows are allowed
        assert_eq!(validate_offsets(&[0, 0, 3, 3], 3), Ok(3));

        assert!(matches!(
            validate_offsets(&[], 0),
            Err(ViewError::InvalidOffsets(_))
        ));
        assert!(matches!(
            validate_offsets(&[1, 5], 5),
            Err(ViewError::InvalidOffsets(_))
        ));
        assert!(matches!(
            validate_offsets(&[0, 5, 4], 4),
            Err(ViewError::InvalidOffsets(_))
        ));
        assert!(matches!(
            validate_offsets(&[0, 5, 10], 12),
            Err(ViewError::InvalidOffsets(_))
        ));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_offsets_from_lengths() {
        assert_eq!(offsets_from_lengths(&[5, 5, 5, 5]), Ok(alloc::vec![0, 5, 10, 15, 20]));
        assert_eq!(offsets_from_lengths(&[]), Ok(alloc::vec![0]));
        assert_eq!(offsets_from_lengths(&[0, 2, 0]), Ok(alloc::vec![0, 0, 2, 2]));
        assert_eq!(
            offsets_from_lengths(&[usize::MAX, 1]),
            Err(ViewError::SizeOverflow)
        );
    }
}
