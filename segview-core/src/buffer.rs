//! Row-segmented buffer: one flat allocation plus an offsets index
//!
//! Row `i` occupies `values[offsets[i]..offsets[i + 1]]`. The offsets table
//! always has `row_count + 1` entries, starts at zero, never decreases and
//! ends at `values.len()`, so the rows tile the buffer with no gaps or
//! overlaps. The buffer never reallocates after construction.

use alloc::vec::Vec;
use core::cell::Cell;
use core::ops::Range;

use crate::traits::ViewElement;
use crate::validation::{offsets_from_lengths, validate_allocation, validate_offsets};
use crate::view::{RawView, SharedArray};
use crate::{Result, ViewError};

/// Flat values plus a CSR-style offsets table
#[derive(Debug, Clone, PartialEq)]
pub struct RowSegmentedBuffer<T> {
    offsets: Vec<usize>,
    values: Vec<T>,
}

impl<T: ViewElement> RowSegmentedBuffer<T> {
    /// Build `row_count` rows of `values_per_row` elements each
    ///
    /// Every element of row `i` is set to `i`.
    pub fn build(row_count: usize, values_per_row: usize) -> Result<Self> {
        let capacity = row_count.checked_add(1).ok_or(ViewError::SizeOverflow)?;
        let mut offsets: Vec<usize> =
            Vec::with_capacity(validate_allocation::<usize>(capacity)?);
        offsets.push(0);
        for i in 1..=row_count {
            offsets.push(
                offsets[i - 1]
                    .checked_add(values_per_row)
                    .ok_or(ViewError::SizeOverflow)?,
            );
        }
        Self::fill_by_row(offsets)
    }

    /// Build rows with the given lengths
    ///
    /// Every element of row `i` is set to `i`.
    pub fn from_row_lengths(lengths: &[usize]) -> Result<Self> {
        Self::fill_by_row(offsets_from_lengths(lengths)?)
    }

    /// Assemble a buffer from an existing offsets table and values
    pub fn from_parts(offsets: Vec<usize>, values: Vec<T>) -> Result<Self> {
        validate_offsets(&offsets, values.len())?;
        Ok(Self { offsets, values })
    }

    fn fill_by_row(offsets: Vec<usize>) -> Result<Self> {
        let total = offsets.last().copied().unwrap_or(0);
        let mut values: Vec<T> = bytemuck::zeroed_vec(validate_allocation::<T>(total)?);
        for (row, bounds) in offsets.windows(2).enumerate() {
            let value = T::from_usize(row);
            values[bounds[0]..bounds[1]].fill(value);
        }
        Ok(Self { offsets, values })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of values across all rows
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The offsets table (`row_count() + 1` entries)
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// All values, row after row
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// All values, mutable in place
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// The half-open value range `offsets[row]..offsets[row + 1]` of a row
    pub fn row_slice(&self, row: usize) -> Result<Range<usize>> {
        if row >= self.row_count() {
            return Err(ViewError::RowOutOfRange {
                row,
                rows: self.row_count(),
            });
        }
        Ok(self.offsets[row]..self.offsets[row + 1])
    }

    /// Number of values in a row
    pub fn row_len(&self, row: usize) -> Result<usize> {
        self.row_slice(row).map(|range| range.len())
    }

    /// The values of a row
    pub fn row(&self, row: usize) -> Result<&[T]> {
        let range = self.row_slice(row)?;
        Ok(&self.values[range])
    }

    /// Iterate over `(row, values)` pairs
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        self.offsets
            .windows(2)
            .enumerate()
            .map(move |(row, bounds)| (row, &self.values[bounds[0]..bounds[1]]))
    }

    /// Reinterpret the values as cells, for cutting borrowed views
    pub fn as_cells(&mut self) -> &[Cell<T>] {
        Cell::from_mut(&mut self.values[..]).as_slice_of_cells()
    }

    /// Offsets table alongside the values reinterpreted as cells
    ///
    /// Lets a caller cut many borrowed views while still reading row bounds.
    pub fn offsets_and_cells(&mut self) -> (&[usize], &[Cell<T>]) {
        (
            &self.offsets,
            Cell::from_mut(&mut self.values[..]).as_slice_of_cells(),
        )
    }

    /// Borrowed view over one row
    pub fn row_view(&mut self, row: usize) -> Result<RawView<'_, T>> {
        let range = self.row_slice(row)?;
        RawView::from_mut_slice(&mut self.values, range.start, range.end)
    }

    /// Copy the values into a single new shared allocation
    pub fn to_shared(&self) -> SharedArray<T> {
        SharedArray::from_vec(self.values.clone())
    }

    /// Move the values into a shared allocation, returning it with the offsets
    pub fn into_shared(self) -> (Vec<usize>, SharedArray<T>) {
        (self.offsets, SharedArray::from_vec(self.values))
    }
}
