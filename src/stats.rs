use std::time::Duration;

/// Statistics collected during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub files_discovered: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub lines_read: usize,
    pub lines_counted: usize,
    pub lines_malformed: usize,
    pub processing_time: Duration,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another set of counters into this one.
    ///
    /// `files_discovered` and `processing_time` belong to the run as a whole
    /// and are not summed.
    pub fn merge(&mut self, other: &ProcessingStats) {
        self.files_processed += other.files_processed;
        self.files_failed += other.files_failed;
        self.lines_read += other.lines_read;
        self.lines_counted += other.lines_counted;
        self.lines_malformed += other.lines_malformed;
    }

    pub fn format_stats(&self) -> String {
        let mut output = format!(
            "Files processed: {} total, {} failed; Lines: {} read, {} counted, {} malformed",
            self.files_processed + self.files_failed,
            self.files_failed,
            self.lines_read,
            self.lines_counted,
            self.lines_malformed
        );

        let processing_time_ms = self.processing_time.as_millis();
        output.push_str(&format!(" in {}ms", processing_time_ms));

        if processing_time_ms > 0 && self.lines_read > 0 {
            let lines_per_sec = (self.lines_read as f64 * 1000.0) / processing_time_ms as f64;
            output.push_str(&format!(" ({:.0} lines/s)", lines_per_sec));
        }

        output
    }
}
