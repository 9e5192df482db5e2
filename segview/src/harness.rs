//! Fixture construction and the timed row-sum loop

use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use segview_core::{
    check_sum, check_sum_by_offsets, failing_rows, failing_rows_by_offsets, RawView,
    RowSegmentedBuffer, SegmentView, SharedArray, ValueType, ViewError,
};
use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::report::{Measurement, Report};
use crate::variant::Variant;
use crate::Result;

/// Maximum number of failing rows reported in the log
const MAX_LOGGED_FAILURES: usize = 8;

/// Buffer, its shared copy, and the per-row sums written by every variant
pub struct Fixture {
    buffer: RowSegmentedBuffer<ValueType>,
    shared: SharedArray<ValueType>,
    sums: Vec<ValueType>,
    // None when rows have varying lengths
    row_size: Option<usize>,
}

impl Fixture {
    /// Build `rows` rows of `values_per_row` values each
    pub fn new(rows: usize, values_per_row: usize) -> Result<Self> {
        let buffer = RowSegmentedBuffer::build(rows, values_per_row)?;
        Ok(Self::from_buffer(buffer, Some(values_per_row)))
    }

    /// Build one row per entry of `lengths`
    pub fn from_row_lengths(lengths: &[usize]) -> Result<Self> {
        let buffer = RowSegmentedBuffer::from_row_lengths(lengths)?;
        Ok(Self::from_buffer(buffer, None))
    }

    fn from_buffer(buffer: RowSegmentedBuffer<ValueType>, row_size: Option<usize>) -> Self {
        // One copy, made before any timing, shared by every view afterwards
        let shared = buffer.to_shared();
        debug!(
            rows = buffer.row_count(),
            ?row_size,
            values = buffer.len(),
            "built row-segmented buffer"
        );

        Self {
            sums: vec![0; buffer.row_count()],
            buffer,
            shared,
            row_size,
        }
    }

    /// The row-segmented buffer
    pub fn buffer(&self) -> &RowSegmentedBuffer<ValueType> {
        &self.buffer
    }

    /// The shared copy of the buffer's values
    pub fn shared(&self) -> &SharedArray<ValueType> {
        &self.shared
    }

    /// Row sums written by the last pass
    pub fn sums(&self) -> &[ValueType] {
        &self.sums
    }

    /// Zero every row sum
    pub fn reset_sums(&mut self) {
        self.sums.fill(0);
    }

    /// Whether the current sums match `row * row_len` for every row
    pub fn check(&self) -> bool {
        match self.row_size {
            Some(row_size) => check_sum(&self.sums, row_size),
            None => check_sum_by_offsets(&self.sums, self.buffer.offsets()),
        }
    }

    /// Rows whose current sum is wrong
    pub fn failing_rows(&self) -> Vec<usize> {
        match self.row_size {
            Some(row_size) => failing_rows(&self.sums, row_size),
            None => failing_rows_by_offsets(&self.sums, self.buffer.offsets()),
        }
    }

    /// One pass over every row, summing it with `variant`
    pub fn sum_rows(&mut self, variant: Variant) -> Result<()> {
        let Fixture {
            buffer,
            shared,
            sums,
            ..
        } = self;

        match variant {
            Variant::Direct => {
                let offsets = buffer.offsets();
                let values = buffer.values();
                for_each_row(offsets, sums, |begin, end| {
                    let mut sum: ValueType = 0;
                    for k in begin..end {
                        sum = sum.wrapping_add(values[k]);
                    }
                    Ok(sum)
                })
            }
            Variant::RawView => {
                let (offsets, cells) = buffer.offsets_and_cells();
                for_each_row(offsets, sums, |begin, end| {
                    Ok(RawView::new(cells, begin, end)?.sum())
                })
            }
            Variant::Slice => {
                let offsets = buffer.offsets();
                let values = buffer.values();
                for_each_row(offsets, sums, |begin, end| {
                    Ok(sum_slice(&values[begin..end]))
                })
            }
            Variant::SliceGet => {
                let offsets = buffer.offsets();
                let values = buffer.values();
                for_each_row(offsets, sums, |begin, end| {
                    let row = values.get(begin..end).ok_or(ViewError::InvalidRange {
                        begin,
                        end,
                        len: values.len(),
                    })?;
                    Ok(sum_slice(row))
                })
            }
            Variant::SharedView => for_each_row(buffer.offsets(), sums, |begin, end| {
                Ok(shared.view(begin, end)?.sum())
            }),
            Variant::SharedRawView => for_each_row(buffer.offsets(), sums, |begin, end| {
                Ok(shared.raw_view(begin, end)?.sum())
            }),
        }
    }
}

fn sum_slice(row: &[ValueType]) -> ValueType {
    row.iter().fold(0, |sum, &value| sum.wrapping_add(value))
}

/// Store `row_sum(offsets[i], offsets[i + 1])` into `sums[i]` for every row
fn for_each_row<F>(offsets: &[usize], sums: &mut [ValueType], mut row_sum: F) -> Result<()>
where
    F: FnMut(usize, usize) -> std::result::Result<ValueType, ViewError>,
{
    for (sum, bounds) in sums.iter_mut().zip(offsets.windows(2)) {
        *sum = row_sum(bounds[0], bounds[1])?;
    }
    Ok(())
}

/// Time `nb_loops` passes of `variant`, then validate the sums
pub fn run_variant(fixture: &mut Fixture, variant: Variant, nb_loops: usize) -> Result<Measurement> {
    let _span = tracing::debug_span!(
        "variant",
        name = variant.name(),
        shared = variant.uses_shared_storage()
    )
    .entered();

    fixture.reset_sums();
    let start = Instant::now();
    for _ in 0..nb_loops {
        fixture.sum_rows(variant)?;
        black_box(fixture.sums());
    }
    let elapsed = start.elapsed();

    let checksum_ok = fixture.check();
    if checksum_ok {
        debug!(elapsed_secs = elapsed.as_secs_f64(), "checksum ok");
    } else {
        let failing = fixture.failing_rows();
        warn!(
            failing = failing.len(),
            first = ?&failing[..failing.len().min(MAX_LOGGED_FAILURES)],
            "checksum failed"
        );
    }

    Ok(Measurement {
        variant,
        elapsed,
        checksum_ok,
    })
}

/// Run every configured variant, writing one status line per variant to `out`
pub fn run_all<W: Write>(config: &BenchConfig, out: &mut W) -> Result<Report> {
    let mut fixture = Fixture::new(config.rows, config.values_per_row)?;
    info!(
        nb_loops = config.nb_loops,
        variants = config.variants.len(),
        "starting benchmark"
    );

    let mut report = Report::default();
    for &variant in &config.variants {
        let measurement = run_variant(&mut fixture, variant, config.nb_loops)?;
        writeln!(out, "{}", measurement.status_line())?;
        report.push(measurement);
    }

    Ok(report)
}
