#![no_std]

//! Segview Core - Row-Segmented Buffers and Zero-Copy Views
//!
//! This crate provides the data model for CSR-style row-segmented arrays and
//! the two view flavours used to walk them: a borrowed window that relies on
//! the caller keeping the storage alive, and a shared window that holds its
//! own reference-counted handle to the storage.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod checksum;
pub mod error;
pub mod traits;
pub mod validation;
pub mod view;

#[cfg(feature = "alloc")]
pub mod buffer;

pub use checksum::{check_sum, check_sum_by_offsets};
pub use error::*;
pub use traits::*;
pub use validation::{parse_count, validate_allocation, validate_offsets, validate_range};
pub use view::RawView;

#[cfg(feature = "alloc")]
pub use buffer::RowSegmentedBuffer;
#[cfg(feature = "alloc")]
pub use checksum::{failing_rows, failing_rows_by_offsets};
#[cfg(feature = "alloc")]
pub use validation::offsets_from_lengths;
#[cfg(feature = "alloc")]
pub use view::{SharedArray, SharedView};

/// Value type used by the row-sum benchmark
pub type ValueType = usize;
