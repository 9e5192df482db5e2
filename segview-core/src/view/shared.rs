//! Reference-counted array and the views that share it

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use super::raw::RawView;
use crate::traits::{SegmentView, ViewElement};
use crate::validation::{validate_allocation, validate_range};
use crate::{Result, ViewError};

/// Fixed-length array with shared ownership of a single allocation
///
/// Cloning a `SharedArray` clones the handle, never the data.
pub struct SharedArray<T> {
    values: Rc<[Cell<T>]>,
}

impl<T> Clone for SharedArray<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
        }
    }
}

impl<T: ViewElement> SharedArray<T> {
    /// Allocate a zero-initialized array of `len` elements
    ///
    /// Fails with `SizeOverflow` when `len` elements do not fit in one allocation.
    pub fn new(len: usize) -> Result<Self> {
        let len = validate_allocation::<Cell<T>>(len)?;
        Ok(Self::from_vec(bytemuck::zeroed_vec(len)))
    }

    /// Move `values` into a new shared allocation
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            values: values.into_iter().map(Cell::new).collect(),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reference to the cell at `index`
    pub fn at(&self, index: usize) -> Result<&Cell<T>> {
        self.values.get(index).ok_or(ViewError::IndexOutOfRange {
            index,
            len: self.values.len(),
        })
    }

    /// Read the element at `index`
    pub fn get(&self, index: usize) -> Result<T> {
        self.at(index).map(Cell::get)
    }

    /// Write `value` at `index`
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        self.at(index).map(|cell| cell.set(value))
    }

    /// Number of live handles (arrays and views) to the allocation
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.values)
    }

    /// Whether `other` is a handle to the same allocation
    pub fn ptr_eq(&self, other: &SharedArray<T>) -> bool {
        Rc::ptr_eq(&self.values, &other.values)
    }

    /// Shared view over `[begin, end)`
    pub fn view(&self, begin: usize, end: usize) -> Result<SharedView<T>> {
        let len = validate_range(begin, end, self.values.len())?;
        Ok(SharedView {
            values: Rc::clone(&self.values),
            begin,
            len,
        })
    }

    /// Borrowed view over `[begin, end)`
    pub fn raw_view(&self, begin: usize, end: usize) -> Result<RawView<'_, T>> {
        RawView::new(&self.values, begin, end)
    }

    /// Copy the current contents out
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().map(Cell::get).collect()
    }
}

impl<T: ViewElement> fmt::Debug for SharedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedArray")
            .field("len", &self.len())
            .field("handles", &self.handle_count())
            .finish()
    }
}

/// Window `[begin, begin + len)` holding its own handle to a [`SharedArray`]'s allocation
///
/// The view is a handle plus an offset/length pair. Dropping every
/// `SharedArray` does not invalidate it.
pub struct SharedView<T> {
    values: Rc<[Cell<T>]>,
    begin: usize,
    len: usize,
}

impl<T> Clone for SharedView<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
            begin: self.begin,
            len: self.len,
        }
    }
}

impl<T: ViewElement> SharedView<T> {
    /// Number of elements in the view
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the view's first element in the shared allocation
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Reference to the cell at position `index`
    pub fn at(&self, index: usize) -> Result<&Cell<T>> {
        if index >= self.len {
            return Err(ViewError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&self.values[self.begin + index])
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
        debug_assert!(index < self.len);
        // SAFETY: begin + len <= values.len() by construction, index < len by contract
        unsafe { self.values.get_unchecked(self.begin + index) }.get()
    }

    /// Narrow this view to `[begin, end)` relative to its own start
    pub fn subview(&self, begin: usize, end: usize) -> Result<SharedView<T>> {
        let len = validate_range(begin, end, self.len)?;
        Ok(SharedView {
            values: Rc::clone(&self.values),
            begin: self.begin + begin,
            len,
        })
    }

    /// Borrow this window as a [`RawView`]
    pub fn as_raw(&self) -> RawView<'_, T> {
        // SAFETY: begin + len <= values.len() by construction
        unsafe { RawView::new_unchecked(&self.values, self.begin, self.begin + self.len) }
    }

    /// Iterate over the values in the view
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values[self.begin..self.begin + self.len]
            .iter()
            .map(Cell::get)
    }

    /// Whether this view windows the allocation held by `array`
    pub fn shares_storage_with(&self, array: &SharedArray<T>) -> bool {
        Rc::ptr_eq(&self.values, &array.values)
    }

    /// Recover a handle to the whole shared array
    pub fn array(&self) -> SharedArray<T> {
        SharedArray {
            values: Rc::clone(&self.values),
        }
    }
}

impl<T: ViewElement> SegmentView for SharedView<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<T> {
        SharedView::get(self, index)
    }

    unsafe fn get_unchecked(&self, index: usize) -> T {
        // SAFETY: forwarded contract
        unsafe { SharedView::get_unchecked(self, index) }
    }
}

impl<T: ViewElement> fmt::Debug for SharedView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedView")
            .field("begin", &self.begin)
            .field("len", &self.len)
            .finish()
    }
}
