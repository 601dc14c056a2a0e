//! Single-shot execution of one tally run
//!
//! A run moves through discovery, parallel dispatch, the join barrier,
//! ranking and report rendering exactly once.

use anyhow::{bail, Result};
use std::sync::Arc;

use crate::config::LogTallyConfig;
use crate::discovery::discover_log_files;
use crate::dispatch::{DispatchConfig, Dispatcher};
use crate::error_handling::FileFailure;
use crate::formatters::create_formatter;
use crate::parsers::{BracketParser, RecordParser};
use crate::ranker::{rank, RankedEntry};
use crate::stats::ProcessingStats;

/// Phase of a run. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunState {
    Idle,
    Discovering,
    Dispatching,
    Barrier,
    Ranking,
    Reporting,
    Done,
}

/// Everything a finished run produced
#[derive(Debug)]
pub struct RunOutcome {
    /// Rendered report, ready for stdout
    pub report: String,
    pub entries: Vec<RankedEntry>,
    pub stats: ProcessingStats,
    pub failures: Vec<FileFailure>,
}

pub struct Runner {
    config: LogTallyConfig,
    parser: Arc<dyn RecordParser>,
    state: RunState,
}

impl Runner {
    pub fn new(config: LogTallyConfig) -> Self {
        Self {
            config,
            parser: Arc::new(BracketParser::new()),
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Execute the run.
    ///
    /// Fails only if the root directory cannot be read, before any file is
    /// scheduled. A runner cannot be run twice.
    pub fn run(&mut self) -> Result<RunOutcome> {
        if self.state != RunState::Idle {
            bail!("run already started (state: {:?})", self.state);
        }

        self.state = RunState::Discovering;
        let files = discover_log_files(&self.config.input.root, &self.config.input.suffix)?;

        self.state = RunState::Dispatching;
        let dispatcher = Dispatcher::new(DispatchConfig::with_workers(
            self.config.effective_threads(),
        ));
        let outcome = dispatcher.run(files, Arc::clone(&self.parser))?;

        // The dispatcher has joined every worker; the tally is frozen from here on
        self.state = RunState::Barrier;
        let tally = outcome.tally;

        self.state = RunState::Ranking;
        let entries = rank(&tally);

        self.state = RunState::Reporting;
        let report = create_formatter(&self.config.output.format).format_report(&entries);

        self.state = RunState::Done;
        Ok(RunOutcome {
            report,
            entries,
            stats: outcome.stats,
            failures: outcome.failures,
        })
    }
}

/// Convenience wrapper: run once with the default parser.
pub fn run_tally(config: &LogTallyConfig) -> Result<RunOutcome> {
    Runner::new(config.clone()).run()
}
