//! Parallel dispatch of per-file counting
//!
//! A fixed pool of worker threads pulls paths from a queue, counts each file
//! and merges the result into a shared `Aggregator`. `Dispatcher::run` returns
//! only after every worker has been joined.

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::aggregator::Aggregator;
use crate::counter::count_file;
use crate::error_handling::FileFailure;
use crate::parsers::RecordParser;
use crate::stats::ProcessingStats;
use crate::tally::GlobalTally;

/// Configuration for the worker pool
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub num_workers: usize,
    /// Capacity of the path queue; `None` for unbounded
    pub buffer_size: Option<usize>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            buffer_size: Some(1024),
        }
    }
}

impl DispatchConfig {
    pub fn with_workers(num_workers: usize) -> Self {
        Self {
            num_workers,
            ..Default::default()
        }
    }
}

/// Everything known after the join barrier
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    pub tally: GlobalTally,
    pub stats: ProcessingStats,
    /// Files that could not be counted, sorted by path
    pub failures: Vec<FileFailure>,
}

pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    /// Count every file in `files` and merge the results.
    ///
    /// Unreadable files become `FileFailure`s and never stop the other
    /// workers. Scheduling order is unspecified; the merged result is not.
    pub fn run(
        &self,
        files: Vec<PathBuf>,
        parser: Arc<dyn RecordParser>,
    ) -> Result<DispatchOutcome> {
        let start = Instant::now();
        let files_discovered = files.len();

        if files.is_empty() {
            return Ok(DispatchOutcome::default());
        }

        let aggregator = Aggregator::new();
        let num_workers = self.config.num_workers.max(1).min(files.len());

        let (path_sender, path_receiver) = match self.config.buffer_size {
            Some(size) => bounded(size.max(1)),
            None => unbounded(),
        };
        let (failure_sender, failure_receiver) = unbounded();

        let worker_handles = spawn_workers(num_workers, |worker_id| {
            let path_receiver = path_receiver.clone();
            let failure_sender = failure_sender.clone();
            let aggregator = aggregator.clone();
            let parser = Arc::clone(&parser);

            thread::Builder::new()
                .name(format!("logtally-worker-{}", worker_id))
                .spawn(move || worker_thread(path_receiver, failure_sender, aggregator, parser))
        })?;

        // Workers hold their own clones
        drop(path_receiver);
        drop(failure_sender);

        for path in files {
            if path_sender.send(path).is_err() {
                // Every worker is gone; nothing left to feed
                break;
            }
        }
        drop(path_sender);

        // Barrier: no read of the global tally before every worker is done
        for handle in worker_handles {
            if handle.join().is_err() {
                eprintln!("⚠️  Worker thread panicked");
            }
        }

        let mut failures: Vec<FileFailure> = failure_receiver.try_iter().collect();
        failures.sort_by(|a, b| a.path.cmp(&b.path));

        let (tally, mut stats) = aggregator.finish();
        stats.files_discovered = files_discovered;
        stats.processing_time = start.elapsed();

        Ok(DispatchOutcome {
            tally,
            stats,
            failures,
        })
    }
}

/// Start up to `count` workers.
///
/// A spawn failure stops further spawning; the pool runs with the workers
/// already started. Only a pool with no worker at all is an error.
fn spawn_workers<F>(count: usize, mut spawn: F) -> Result<Vec<JoinHandle<()>>>
where
    F: FnMut(usize) -> io::Result<JoinHandle<()>>,
{
    let mut handles = Vec::with_capacity(count);
    for worker_id in 0..count {
        match spawn(worker_id) {
            Ok(handle) => handles.push(handle),
            Err(e) if handles.is_empty() => {
                return Err(e).context("Failed to start any worker thread");
            }
            Err(e) => {
                eprintln!(
                    "⚠️  Could not start worker {} ({}), continuing with {}",
                    worker_id,
                    e,
                    handles.len()
                );
                break;
            }
        }
    }
    Ok(handles)
}

/// Worker thread: counts files until the queue is closed
fn worker_thread(
    path_receiver: Receiver<PathBuf>,
    failure_sender: Sender<FileFailure>,
    aggregator: Aggregator,
    parser: Arc<dyn RecordParser>,
) {
    while let Ok(path) = path_receiver.recv() {
        let result = panic::catch_unwind(AssertUnwindSafe(|| count_file(&path, parser.as_ref())));

        let message = match result {
            Ok(Ok(report)) => {
                aggregator.merge_report(report);
                continue;
            }
            Ok(Err(e)) => format!("{:#}", e),
            Err(_) => format!("Worker panicked while counting {}", path.display()),
        };

        aggregator.merge_stats(&ProcessingStats {
            files_failed: 1,
            ..Default::default()
        });
        // The dispatcher keeps the receiver until after the join
        let _ = failure_sender.send(FileFailure { path, message });
    }
}
