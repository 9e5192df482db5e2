//! Abstract interfaces for segmented views
//!
//! This module defines the element constraint and the common view interface
//! that the borrowed and shared views both satisfy.

pub mod element;
pub mod view;

pub use element::ViewElement;
pub use view::SegmentView;
