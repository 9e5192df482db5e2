//! Program flow of the `segview` binary
//!
//! Kept in the library so the output order and exit statuses can be tested
//! against in-memory writers.

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use tracing::debug;

use crate::config::{BenchConfig, Cli};
use crate::harness::run_all;
use crate::{BenchError, Result};

/// One-line usage printed after argument errors
pub const USAGE: &str =
    "usage: segview <nb-loops> [--rows N] [--values-per-row N] [--variant NAME]... [--json]";

/// Exit status for a successful run, `--help` and `--version`
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for any failure
pub const EXIT_FAILURE: u8 = 1;

/// Run the benchmark described by `cli`, writing all regular output to `out`
///
/// Prints `processing N loops`, one status line per variant, then the
/// result table (or JSON).
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config = BenchConfig::try_from(cli)?;

    writeln!(out, "processing {} loops", config.nb_loops)?;

    let report = run_all(&config, &mut *out)?;

    if config.json {
        writeln!(out, "{}", report.to_json(&config)?)?;
    } else {
        write!(out, "{}", report.render(&config.table_style()))?;
    }
    Ok(())
}

/// Write the message for `err` to `err_out` and return the exit status
pub fn fail<E: Write>(err: &BenchError, err_out: &mut E) -> u8 {
    debug!(category = ?err.category(), "run failed");

    // Nothing useful can be done if stderr itself is gone
    let _ = match err {
        BenchError::Usage(usage) => write!(err_out, "{usage}"),
        other => writeln!(err_out, "error: {other}\n{USAGE}"),
    };
    EXIT_FAILURE
}

/// Parse `args` and run, returning the process exit status
pub fn main_with<I, T, W, E>(args: I, out: &mut W, err_out: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            let _ = write!(out, "{}", err.render());
            return EXIT_SUCCESS;
        }
        Err(err) => return fail(&BenchError::Usage(err.render().to_string()), err_out),
    };

    match run(cli, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => fail(&err, err_out),
    }
}
