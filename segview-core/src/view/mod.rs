//! Zero-copy windows over contiguous storage
//!
//! Two ownership strategies are provided:
//!
//! - [`RawView`]: borrows the storage; the borrow checker ties its lifetime
//!   to the backing buffer
//! - [`SharedView`]: holds a clone of the reference-counted handle to a
//!   [`SharedArray`], so it keeps the allocation alive on its own
//!
//! Both windows address storage through `Cell`, which lets them read and
//! write in place without exclusive borrows.

pub mod raw;
#[cfg(feature = "alloc")]
pub mod shared;

pub use raw::RawView;
#[cfg(feature = "alloc")]
pub use shared::{SharedArray, SharedView};
