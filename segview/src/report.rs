//! Timing results and their presentation

use std::fmt::Write as _;
use std::time::Duration;

use crate::variant::Variant;

/// Layout of the result table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    /// Minimum width of the left-justified name column
    pub width: usize,
    /// Character used to pad the name column
    pub fill: char,
    /// Decimal places printed for elapsed seconds
    pub precision: usize,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            width: 25,
            fill: '.',
            precision: 15,
        }
    }
}

/// Outcome of timing one variant
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub variant: Variant,
    pub elapsed: Duration,
    pub checksum_ok: bool,
}

impl Measurement {
    /// Status line printed after the checksum, e.g. `SharedView ok`
    pub fn status_line(&self) -> String {
        let status = if self.checksum_ok { "ok" } else { "failed" };
        format!("{} {}", self.variant.name(), status)
    }
}

/// Measurements of one benchmark run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    measurements: Vec<Measurement>,
}

impl Report {
    /// Record a measurement
    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Measurements in run order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Whether every variant produced correct sums
    pub fn all_ok(&self) -> bool {
        self.measurements.iter().all(|m| m.checksum_ok)
    }

    /// Measurements ordered by ascending elapsed time
    ///
    /// The sort is stable; variants with equal timings keep run order.
    pub fn sorted(&self) -> Vec<&Measurement> {
        let mut sorted: Vec<&Measurement> = self.measurements.iter().collect();
        sorted.sort_by_key(|m| m.elapsed);
        sorted
    }

    /// Render the result table, fastest first
    pub fn render(&self, style: &TableStyle) -> String {
        let mut out = String::new();
        for measurement in self.sorted() {
            let name = measurement.variant.name();
            let padding = style.width.saturating_sub(name.chars().count());

            out.push_str(name);
            out.extend(std::iter::repeat(style.fill).take(padding));
            // Writing into a String cannot fail
            let _ = writeln!(
                out,
                " {:.*}",
                style.precision,
                measurement.elapsed.as_secs_f64()
            );
        }
        out
    }

    /// Serialize the run as JSON, results fastest first
    pub fn to_json(&self, config: &crate::BenchConfig) -> crate::Result<String> {
        #[derive(serde::Serialize)]
        struct Entry {
            variant: Variant,
            elapsed_seconds: f64,
            checksum_ok: bool,
        }

        #[derive(serde::Serialize)]
        struct Document<'a> {
            config: &'a crate::BenchConfig,
            results: Vec<Entry>,
        }

        let document = Document {
            config,
            results: self
                .sorted()
                .into_iter()
                .map(|m| Entry {
                    variant: m.variant,
                    elapsed_seconds: m.elapsed.as_secs_f64(),
                    checksum_ok: m.checksum_ok,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(variant: Variant, millis: u64, checksum_ok: bool) -> Measurement {
        Measurement {
            variant,
            elapsed: Duration::from_millis(millis),
            checksum_ok,
        }
    }

    fn sample() -> Report {
        let mut report = Report::default();
        report.push(measurement(Variant::SharedView, 300, true));
        report.push(measurement(Variant::Direct, 100, true));
        report.push(measurement(Variant::RawView, 200, false));
        report
    }

    #[test]
    fn test_sorted_ascending() {
        let report = sample();
        let order: Vec<Variant> = report.sorted().iter().map(|m| m.variant).collect();

        assert_eq!(order, vec![Variant::Direct, Variant::RawView, Variant::SharedView]);
        assert!(!report.all_ok());
    }

    #[test]
    fn test_equal_timings_are_kept() {
        let mut report = Report::default();
        report.push(measurement(Variant::Slice, 50, true));
        report.push(measurement(Variant::SliceGet, 50, true));

        let order: Vec<Variant> = report.sorted().iter().map(|m| m.variant).collect();
        assert_eq!(order, vec![Variant::Slice, Variant::SliceGet]);
    }

    #[test]
    fn test_render_table() {
        let style = TableStyle {
            width: 16,
            fill: '.',
            precision: 3,
        };
        let table = sample().render(&style);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Buffer/Direct... 0.100");
        assert_eq!(lines[1], "Buffer|RawView.. 0.200");
        assert_eq!(lines[2], "SharedView...... 0.300");
    }

    #[test]
    fn test_render_long_name_not_truncated() {
        let mut report = Report::default();
        report.push(measurement(Variant::SharedRawView, 1, true));
        let style = TableStyle {
            width: 4,
            fill: '-',
            precision: 1,
        };

        assert_eq!(report.render(&style), "SharedArray|RawView 0.0\n");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(
            measurement(Variant::SliceGet, 1, true).status_line(),
            "Buffer::get ok"
        );
        assert_eq!(
            measurement(Variant::SharedRawView, 1, false).status_line(),
            "SharedArray|RawView failed"
        );
    }

    #[test]
    fn test_to_json() {
        let config = crate::BenchConfig::default().with_nb_loops(2);
        let json = sample().to_json(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["config"]["nb_loops"], 2);
        assert_eq!(value["results"][0]["variant"], "Buffer/Direct");
        assert_eq!(value["results"][2]["checksum_ok"], true);
        assert_eq!(value["results"].as_array().unwrap().len(), 3);
    }
}
