//! Segview - Row-Segmented Array Access Benchmark
//!
//! This library times several ways of summing the rows of a CSR-style
//! row-segmented buffer and checks that every one of them computes the
//! same, correct sums.
//!
//! ## Architecture
//!
//! - **segview-core**: buffer layout, borrowed and shared views, checksums (no I/O)
//! - **segview**: benchmark variants, timing loop, reporting and CLI configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use segview::{run_all, BenchConfig};
//!
//! fn example() -> segview::Result<()> {
//!     let config = BenchConfig::default().with_nb_loops(10).with_rows(1_000);
//!     let report = run_all(&config, &mut std::io::stdout())?;
//!     print!("{}", report.render(&config.table_style()));
//!     Ok(())
//! }
//! ```

pub use segview_core::{
    // Data model and views
    RowSegmentedBuffer, RawView, SharedArray, SharedView, SegmentView, ViewElement, ValueType,
    // Validation
    check_sum, failing_rows, parse_count,
    // Error handling
    ErrorCategory, ViewError,
};

pub mod app;
pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod report;
pub mod variant;

pub use config::{BenchConfig, Cli};
pub use error::{BenchError, Result};
pub use harness::{run_all, run_variant, Fixture};
pub use report::{Measurement, Report, TableStyle};
pub use variant::Variant;
