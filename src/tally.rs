//! Severity counts keyed by process name and level label.

use std::collections::BTreeMap;

/// Level label -> count for a single process
pub type LevelCounts = BTreeMap<String, u64>;

/// Process name -> level label -> count.
///
/// Ordered maps keep iteration independent of hashing, so two tallies built
/// from the same lines in any order compare equal and print identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    processes: BTreeMap<String, LevelCounts>,
}

/// Tally built by one worker for one file. Never shared.
pub type LocalTally = Tally;

/// Tally merged from every file, read only after all workers have joined.
pub type GlobalTally = Tally;

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one event.
    pub fn record(&mut self, process: &str, level: &str) {
        self.add(process, level, 1);
    }

    /// Add `count` events, inserting zeroed entries as needed.
    pub fn add(&mut self, process: &str, level: &str, count: u64) {
        // Lookup by &str first; keys are only allocated for new entries
        if let Some(levels) = self.processes.get_mut(process) {
            bump(levels, level, count);
            return;
        }
        let mut levels = LevelCounts::new();
        levels.insert(level.to_string(), count);
        self.processes.insert(process.to_string(), levels);
    }

    /// Fold `other` into `self`. Commutative and associative.
    pub fn merge(&mut self, other: Tally) {
        for (process, levels) in other.processes {
            let target = self.processes.entry(process).or_default();
            for (level, count) in levels {
                *target.entry(level).or_insert(0) += count;
            }
        }
    }

    pub fn count(&self, process: &str, level: &str) -> u64 {
        self.processes
            .get(process)
            .and_then(|levels| levels.get(level))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of every count in the tally.
    pub fn total_events(&self) -> u64 {
        self.processes
            .values()
            .flat_map(|levels| levels.values())
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LevelCounts)> {
        self.processes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

fn bump(levels: &mut LevelCounts, level: &str, count: u64) {
    if let Some(existing) = levels.get_mut(level) {
        *existing += count;
        return;
    }
    levels.insert(level.to_string(), count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_inserts_zeroed_entries() {
        let mut tally = Tally::new();
        tally.record("svcA", "Info");
        tally.record("svcA", "Info");
        tally.record("svcA", "Error");

        assert_eq!(tally.count("svcA", "Info"), 2);
        assert_eq!(tally.count("svcA", "Error"), 1);
        assert_eq!(tally.count("svcA", "Warn"), 0);
        assert_eq!(tally.count("missing", "Info"), 0);
        assert_eq!(tally.total_events(), 3);
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut global = Tally::new();
        global.add("svcA", "Info", 2);

        let mut local = Tally::new();
        local.add("svcA", "Info", 3);
        local.add("svcB", "Custom", 1);

        global.merge(local);

        assert_eq!(global.count("svcA", "Info"), 5);
        assert_eq!(global.count("svcB", "Custom"), 1);
        assert_eq!(global.total_events(), 6);
        assert_eq!(global.iter().count(), 2);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut a = Tally::new();
        a.add("x", "Info", 1);
        a.add("y", "Warn", 4);
        let mut b = Tally::new();
        b.add("x", "Info", 2);
        b.add("z", "Trace", 7);

        let mut ab = Tally::new();
        ab.merge(a.clone());
        ab.merge(b.clone());

        let mut ba = Tally::new();
        ba.merge(b);
        ba.merge(a);

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_unknown_level_counts_toward_total() {
        let mut tally = Tally::new();
        tally.record("svc", "Info");
        tally.record("svc", "Fatal");

        assert_eq!(tally.count("svc", "Info"), 1);
        assert_eq!(tally.count("svc", "Fatal"), 1);
        assert_eq!(tally.total_events(), 2);
    }
}
