//! Common interface for views over a contiguous window of a buffer

use super::element::ViewElement;
use crate::Result;

/// A constant-time window over `[begin, begin + len)` of some storage
///
/// Implemented by both the borrowed and the shared view so callers can be
/// generic over the ownership strategy.
pub trait SegmentView {
    /// The element type visible through the view
    type Element: ViewElement;

    /// Number of elements in the window
    fn len(&self) -> usize;

    /// Whether the window is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at position `index` of the window
    ///
    /// Fails with `IndexOutOfRange` when `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Element>;

    /// Read the element at position `index` without bounds checking
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    unsafe fn get_unchecked(&self, index: usize) -> Self::Element;

    /// Sum every element of the window with a sequential scan
    fn sum(&self) -> Self::Element {
        let mut sum = Self::Element::zero();
        for k in 0..self.len() {
            // SAFETY: k < len() by the loop bound
            sum = sum.wrapping_add(unsafe { self.get_unchecked(k) });
        }
        sum
    }
}
