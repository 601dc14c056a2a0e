use crate::level::Severity;
use crate::ranker::RankedEntry;

use super::ReportFormatter;

// Tab-separated table: one header row, then one row per process.
// Only the five known levels get a column.
#[derive(Debug, Default)]
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_header(&self) -> String {
        let mut header = String::from("Process");
        for level in Severity::ALL {
            header.push('\t');
            header.push_str(level.as_str());
        }
        header
    }

    pub fn format_row(&self, entry: &RankedEntry) -> String {
        let mut row = entry.process.clone();
        for count in entry.counts {
            row.push('\t');
            row.push_str(&count.to_string());
        }
        row
    }
}

impl ReportFormatter for TableFormatter {
    fn format_report(&self, entries: &[RankedEntry]) -> String {
        let mut output = self.format_header();
        output.push('\n');
        for entry in entries {
            output.push_str(&self.format_row(entry));
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(process: &str, counts: [u64; 5], unrecognized: u64) -> RankedEntry {
        RankedEntry {
            process: process.to_string(),
            total: counts.iter().sum::<u64>() + unrecognized,
            counts,
            unrecognized,
        }
    }

    #[test]
    fn test_header_only_for_empty_report() {
        let output = TableFormatter::new().format_report(&[]);
        assert_eq!(output, "Process\tTrace\tDebug\tInfo\tWarn\tError\n");
    }

    #[test]
    fn test_default_matches_new() {
        let output = TableFormatter::default().format_report(&[entry("svc", [1, 0, 0, 0, 0], 0)]);
        assert_eq!(output, TableFormatter::new().format_report(&[entry("svc", [1, 0, 0, 0, 0], 0)]));
    }

    #[test]
    fn test_rows_in_given_order() {
        let output = TableFormatter::new().format_report(&[
            entry("svcA", [0, 0, 1, 0, 1], 0),
            entry("svcB", [0, 0, 1, 0, 0], 0),
        ]);

        assert_eq!(
            output,
            "Process\tTrace\tDebug\tInfo\tWarn\tError\nsvcA\t0\t0\t1\t0\t1\nsvcB\t0\t0\t1\t0\t0\n"
        );
    }

    #[test]
    fn test_unrecognized_counts_are_not_shown() {
        let row = TableFormatter::new().format_row(&entry("svc", [1, 2, 3, 4, 5], 100));
        assert_eq!(row, "svc\t1\t2\t3\t4\t5");
    }
}
