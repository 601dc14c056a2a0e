use serde::Serialize;

use crate::level::Severity;
use crate::ranker::RankedEntry;

use super::ReportFormatter;

#[derive(Serialize)]
struct JsonRow<'a> {
    process: &'a str,
    total: u64,
    trace: u64,
    debug: u64,
    info: u64,
    warn: u64,
    error: u64,
    other: u64,
}

impl<'a> From<&'a RankedEntry> for JsonRow<'a> {
    fn from(entry: &'a RankedEntry) -> Self {
        Self {
            process: &entry.process,
            total: entry.total,
            trace: entry.count(Severity::Trace),
            debug: entry.count(Severity::Debug),
            info: entry.count(Severity::Info),
            warn: entry.count(Severity::Warn),
            error: entry.count(Severity::Error),
            other: entry.unrecognized,
        }
    }
}

// JSON formatter: a pretty-printed array, one object per process.
// `other` carries the events the table has no column for.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, entries: &[RankedEntry]) -> String {
        let rows: Vec<JsonRow<'_>> = entries.iter().map(JsonRow::from).collect();
        let mut output = serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string());
        output.push('\n');
        output
    }
}
