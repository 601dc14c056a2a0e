// Core library for logtally: parallel per-process severity counting

pub mod aggregator;
pub mod cli;
pub mod colors;
pub mod config;
pub mod counter;
pub mod discovery;
pub mod dispatch;
pub mod error_handling;
pub mod formatters;
pub mod level;
pub mod parsers;
pub mod platform;
pub mod ranker;
pub mod runner;
pub mod stats;
pub mod tally;
pub mod tty;

pub use aggregator::Aggregator;
pub use config::LogTallyConfig;
pub use counter::{count_file, count_lines, FileReport};
pub use discovery::discover_log_files;
pub use dispatch::{DispatchConfig, DispatchOutcome, Dispatcher};
pub use level::Severity;
pub use parsers::{BracketParser, LogRecord, RecordParser};
pub use ranker::{rank, RankedEntry};
pub use runner::{run_tally, RunOutcome, RunState, Runner};
pub use tally::{GlobalTally, LocalTally, Tally};
