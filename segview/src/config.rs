//! Benchmark configuration and command-line parsing

use clap::Parser;
use segview_core::parse_count;

use crate::report::TableStyle;
use crate::variant::Variant;
use crate::{BenchError, Result};

/// Default number of rows in the benchmark buffer
pub const DEFAULT_ROWS: usize = 100_000;

/// Default number of values per row
pub const DEFAULT_VALUES_PER_ROW: usize = 5;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Time row sums over a row-segmented buffer through raw, slice and shared views")]
pub struct Cli {
    /// Number of passes over every row, per variant
    #[arg(value_name = "nb-loops")]
    pub nb_loops: String,

    /// Number of rows in the buffer
    #[arg(long)]
    pub rows: Option<String>,

    /// Number of values in each row
    #[arg(long)]
    pub values_per_row: Option<String>,

    /// Run only this variant (repeatable)
    #[arg(long = "variant", value_enum)]
    pub variants: Vec<Variant>,

    /// Print the results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Configuration for one benchmark run
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize)]
pub struct BenchConfig {
    /// Passes over every row, per variant
    pub nb_loops: usize,
    /// Rows in the buffer
    pub rows: usize,
    /// Values in each row
    pub values_per_row: usize,
    /// Variants to run, in order
    pub variants: Vec<Variant>,
    /// Column width of the name field in the result table
    pub width: usize,
    /// Padding character of the name field
    pub fill: char,
    /// Decimal places of the elapsed time
    pub precision: usize,
    /// Emit JSON instead of the table
    pub json: bool,
}

impl BenchConfig {
    /// Set the number of passes
    pub fn with_nb_loops(mut self, nb_loops: usize) -> Self {
        self.nb_loops = nb_loops;
        self
    }

    /// Set the number of rows
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of values per row
    pub fn with_values_per_row(mut self, values_per_row: usize) -> Self {
        self.values_per_row = values_per_row;
        self
    }

    /// Restrict the run to the given variants; an empty list keeps all of them
    pub fn with_variants(mut self, variants: Vec<Variant>) -> Self {
        self.variants = if variants.is_empty() {
            Variant::ALL.to_vec()
        } else {
            variants
        };
        self
    }

    /// Switch JSON output on or off
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Result table layout
    pub fn table_style(&self) -> TableStyle {
        TableStyle {
            width: self.width,
            fill: self.fill,
            precision: self.precision,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        let style = TableStyle::default();
        Self {
            nb_loops: 1,
            rows: DEFAULT_ROWS,
            values_per_row: DEFAULT_VALUES_PER_ROW,
            variants: Variant::ALL.to_vec(),
            width: style.width,
            fill: style.fill,
            precision: style.precision,
            json: false,
        }
    }
}

fn parse_arg(name: &'static str, value: &str) -> Result<usize> {
    parse_count(value).map_err(|source| BenchError::invalid_argument(name, value, source))
}

impl TryFrom<Cli> for BenchConfig {
    type Error = BenchError;

    fn try_from(cli: Cli) -> Result<Self> {
        let mut config = BenchConfig::default()
            .with_nb_loops(parse_arg("nb-loops", &cli.nb_loops)?)
            .with_variants(cli.variants)
            .with_json(cli.json);

        if let Some(rows) = cli.rows.as_deref() {
            config = config.with_rows(parse_arg("--rows", rows)?);
        }
        if let Some(values_per_row) = cli.values_per_row.as_deref() {
            config = config.with_values_per_row(parse_arg("--values-per-row", values_per_row)?);
        }

        Ok(config)
    }
}
