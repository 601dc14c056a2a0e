mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

use crate::config::OutputFormat;
use crate::ranker::RankedEntry;

/// Renders the ranked rows into the final report text
pub trait ReportFormatter: Send + Sync {
    fn format_report(&self, entries: &[RankedEntry]) -> String;
}

pub fn create_formatter(format: &OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
