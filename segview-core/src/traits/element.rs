//! Element type constraints for row-segmented buffers
//!
//! This module defines the trait that constrains what types can be
//! stored in a buffer and summed through a view.

use core::fmt::Debug;

/// Trait for types that can be stored as buffer elements
///
/// All element types must be plain old data so buffers can be allocated
/// zero-initialized, and must support the wrapping addition used by row sums.
pub trait ViewElement: Copy + PartialEq + Debug + bytemuck::Pod {
    /// The additive identity
    fn zero() -> Self {
        bytemuck::Zeroable::zeroed()
    }

    /// Convert from a row or column index
    ///
    /// Used to fill buffers with the closed-form `value(i, j) = i` rule
    /// and to compute expected row sums.
    fn from_usize(value: usize) -> Self;

    /// Addition that never panics on overflow
    fn wrapping_add(self, other: Self) -> Self;

    /// Convert to f64 for reporting
    fn to_f64(self) -> f64;
}

macro_rules! impl_integer_element {
    ($($ty:ty),*) => {
        $(
            impl ViewElement for $ty {
                fn from_usize(value: usize) -> Self {
                    value as $ty
                }

                fn wrapping_add(self, other: Self) -> Self {
                    <$ty>::wrapping_add(self, other)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_element!(u32, u64, usize, i32, i64);

impl ViewElement for f32 {
    fn from_usize(value: usize) -> Self {
        value as f32
    }

    fn wrapping_add(self, other: Self) -> Self {
        self + other
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl ViewElement for f64 {
    fn from_usize(value: usize) -> Self {
        value as f64
    }

    fn wrapping_add(self, other: Self) -> Self {
        self + other
    }

    fn to_f64(self) -> f64 {
        self
    }
}
