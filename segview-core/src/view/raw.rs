//! Borrowed view over a window of existing storage

use core::cell::Cell;
use core::fmt;

use crate::traits::{SegmentView, ViewElement};
use crate::validation::validate_range;
use crate::{Result, ViewError};

/// Borrowed, allocation-free window `[begin, end)` over a run of cells
///
/// Construction and indexed access are O(1). The view never outlives the
/// storage it was cut from.
pub struct RawView<'a, T> {
    cells: &'a [Cell<T>],
}

impl<'a, T> Clone for RawView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for RawView<'a, T> {}

impl<'a, T: ViewElement> RawView<'a, T> {
    /// Create a view over `cells[begin..end]`
    ///
    /// Fails with `InvalidRange` unless `begin <= end <= cells.len()`.
    pub fn new(cells: &'a [Cell<T>], begin: usize, end: usize) -> Result<Self> {
        validate_range(begin, end, cells.len())?;
        Ok(Self {
            cells: &cells[begin..end],
        })
    }

    /// Create a view over `values[begin..end]` of a plain mutable slice
    pub fn from_mut_slice(values: &'a mut [T], begin: usize, end: usize) -> Result<Self> {
        Self::new(Cell::from_mut(values).as_slice_of_cells(), begin, end)
    }

    /// Create a view without validating the window
    ///
    /// # Safety
    ///
    /// The caller must guarantee `begin <= end <= cells.len()`.
    pub unsafe fn new_unchecked(cells: &'a [Cell<T>], begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end && end <= cells.len());
        Self {
            // SAFETY: bounds upheld by the caller
            cells: unsafe { cells.get_unchecked(begin..end) },
        }
    }

    /// Number of elements in the view
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reference to the cell at position `index`, for in-place reads and writes
    pub fn at(&self, index: usize) -> Result<&'a Cell<T>> {
        self.cells.get(index).ok_or(ViewError::IndexOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Read the element at position `index`
    pub fn get(&self, index: usize) -> Result<T> {
        self.at(index).map(Cell::get)
    }

    /// Write `value` at position `index`
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        self.at(index).map(|cell| cell.set(value))
    }

    /// Read without bounds checking
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        debug_assert!(index < self.cells.len());
        // SAFETY: index < len upheld by the caller
        unsafe { self.cells.get_unchecked(index) }.get()
    }

    /// Narrow this view to `[begin, end)` relative to its own start
    pub fn subview(&self, begin: usize, end: usize) -> Result<RawView<'a, T>> {
        RawView::new(self.cells, begin, end)
    }

    /// Iterate over the values in the view
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        self.cells.iter().map(Cell::get)
    }
}

impl<'a, T: ViewElement> SegmentView for RawView<'a, T> {
    type Element = T;

    fn len(&self) -> usize {
        RawView::len(self)
    }

    fn get(&self, index: usize) -> Result<T> {
        RawView::get(self, index)
    }

    unsafe fn get_unchecked(&self, index: usize) -> T {
        // SAFETY: forwarded contract
        unsafe { RawView::get_unchecked(self, index) }
    }
}

impl<'a, T: ViewElement> fmt::Debug for RawView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_view_window() {
        let mut values = [0usize, 0, 1, 1, 1, 2];
        let view = RawView::from_mut_slice(&mut values, 2, 5).unwrap();

        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view.get(0), Ok(1));
        assert_eq!(view.get(2), Ok(1));
        assert_eq!(SegmentView::sum(&view), 3);
    }

    #[test]
    fn test_raw_view_bounds() {
        let mut values = [1u32, 2, 3, 4];
        let view = RawView::from_mut_slice(&mut values, 1, 3).unwrap();

        assert_eq!(
            view.get(2),
            Err(ViewError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            view.set(5, 9),
            Err(ViewError::IndexOutOfRange { index: 5, len: 2 })
        );

        let mut values = [1u32, 2, 3, 4];
        assert_eq!(
            RawView::from_mut_slice(&mut values, 3, 5).unwrap_err(),
            ViewError::InvalidRange { begin: 3, end: 5, len: 4 }
        );
        let mut values = [1u32, 2, 3, 4];
        assert_eq!(
            RawView::from_mut_slice(&mut values, 3, 1).unwrap_err(),
            ViewError::InvalidRange { begin: 3, end: 1, len: 4 }
        );
    }

    #[test]
    fn test_raw_view_writes_through() {
        let mut values = [0i64; 6];
        {
            let view = RawView::from_mut_slice(&mut values, 2, 4).unwrap();
            view.set(0, 7).unwrap();
            view.at(1).unwrap().set(8);
        }
        assert_eq!(values, [0, 0, 7, 8, 0, 0]);
    }

    #[test]
    fn test_raw_view_empty_and_subview() {
        let mut values = [5u64, 6, 7, 8];
        let cells = Cell::from_mut(&mut values[..]).as_slice_of_cells();

        let empty = RawView::new(cells, 4, 4).unwrap();
        assert!(empty.is_empty());
        assert_eq!(SegmentView::sum(&empty), 0);

        let view = RawView::new(cells, 1, 4).unwrap();
        let inner = view.subview(1, 3).unwrap();
        assert_eq!(inner.get(0), Ok(7));
        assert_eq!(inner.get(1), Ok(8));
        assert!(view.subview(2, 4).is_err());

        // SAFETY: 0 <= 1 <= 3 <= 4
        let unchecked = unsafe { RawView::new_unchecked(cells, 1, 3) };
        assert_eq!(unsafe { unchecked.get_unchecked(1) }, 7);
    }

    #[test]
    fn test_views_do_not_mutate_on_read() {
        let mut values = [3usize, 3, 3];
        let cells = Cell::from_mut(&mut values[..]).as_slice_of_cells();

        let first = RawView::new(cells, 0, 3).unwrap();
        let second = RawView::new(cells, 0, 3).unwrap();
        assert_eq!(SegmentView::sum(&first), SegmentView::sum(&second));
        assert_eq!(SegmentView::sum(&first), 9);
        assert_eq!(values, [3, 3, 3]);
    }
}
