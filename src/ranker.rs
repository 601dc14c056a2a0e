use crate::level::Severity;
use crate::tally::GlobalTally;

/// One report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub process: String,
    /// Sum over every label, including ones without a column
    pub total: u64,
    /// Counts in `Severity::ALL` order
    pub counts: [u64; 5],
    /// Events whose label is not one of the five known levels
    pub unrecognized: u64,
}

impl RankedEntry {
    pub fn count(&self, severity: Severity) -> u64 {
        self.counts[severity.column()]
    }
}

/// Order processes by total events, highest first; ties by name, ascending.
pub fn rank(tally: &GlobalTally) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = tally
        .iter()
        .map(|(process, levels)| {
            let mut counts = [0u64; 5];
            let mut total = 0u64;
            for (label, count) in levels {
                total += count;
                if let Some(severity) = Severity::from_label(label) {
                    counts[severity.column()] += count;
                }
            }
            let unrecognized = total - counts.iter().sum::<u64>();

            RankedEntry {
                process: process.clone(),
                total,
                counts,
                unrecognized,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.process.cmp(&b.process)));
    entries
}
