//! Thread-safe merge target for per-file tallies
//!
//! Workers fold their local results in through `merge_report`; the owner
//! reads the merged state only through `finish`, after every worker joined.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::counter::FileReport;
use crate::stats::ProcessingStats;
use crate::tally::{GlobalTally, LocalTally};

#[derive(Debug, Default)]
struct AggregateState {
    tally: GlobalTally,
    stats: ProcessingStats,
}

/// Shared handle to the global tally. Cloning shares the same state.
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    state: Arc<Mutex<AggregateState>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock state with poison recovery
    fn lock_state(&self) -> MutexGuard<'_, AggregateState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                eprintln!("⚠️  Worker thread panicked, recovering aggregated counts");
                poisoned.into_inner()
            }
        }
    }

    /// Add every count of `local` to the global tally.
    ///
    /// The lock covers only the fold, never any file I/O.
    pub fn merge(&self, local: LocalTally) {
        if local.is_empty() {
            return;
        }
        self.lock_state().tally.merge(local);
    }

    pub fn merge_stats(&self, stats: &ProcessingStats) {
        self.lock_state().stats.merge(stats);
    }

    /// Merge tally and stats of one file under a single lock acquisition.
    pub fn merge_report(&self, report: FileReport) {
        let mut state = self.lock_state();
        state.stats.merge(&report.stats);
        state.tally.merge(report.tally);
    }

    /// Hand off the frozen result.
    ///
    /// Any clones still alive (workers that have not been joined) keep the
    /// state shared; in that case the current contents are copied out.
    pub fn finish(self) -> (GlobalTally, ProcessingStats) {
        match Arc::try_unwrap(self.state) {
            Ok(mutex) => {
                let state = mutex.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
                (state.tally, state.stats)
            }
            Err(shared) => {
                let state = match shared.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                (state.tally.clone(), state.stats.clone())
            }
        }
    }
}
