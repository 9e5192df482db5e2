//! Layout and input validation utilities
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions check index arithmetic and layout invariants.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_allocation, validate_offsets, validate_range};
#[cfg(feature = "alloc")]
pub use bounds::offsets_from_lengths;
pub use parsing::parse_count;
