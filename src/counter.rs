//! Per-file counting: one file in, one local tally out.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::parsers::RecordParser;
use crate::stats::ProcessingStats;
use crate::tally::LocalTally;

/// Read buffer per file (256KB)
const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Result of counting one file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub tally: LocalTally,
    pub stats: ProcessingStats,
}

/// Count every well-formed line of `path`.
///
/// Open and read failures are returned as errors; the partial tally of a file
/// that fails mid-read is discarded. Malformed lines are skipped and counted
/// in the report's stats.
pub fn count_file<P: RecordParser + ?Sized>(path: &Path, parser: &P) -> Result<FileReport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);

    let (tally, mut stats) = count_lines(reader, parser)
        .with_context(|| format!("Failed to read log file: {}", path.display()))?;
    stats.files_processed = 1;

    Ok(FileReport {
        path: path.to_path_buf(),
        tally,
        stats,
    })
}

/// Count every well-formed line from `reader`.
///
/// Lines are decoded lossily so stray invalid UTF-8 only affects the line it
/// appears on.
pub fn count_lines<R: BufRead, P: RecordParser + ?Sized>(
    mut reader: R,
    parser: &P,
) -> Result<(LocalTally, ProcessingStats)> {
    let mut tally = LocalTally::new();
    let mut stats = ProcessingStats::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines_read += 1;

        let line = String::from_utf8_lossy(&buf);
        match parser.parse(&line) {
            Some(record) => {
                tally.record(record.process, record.level);
                stats.lines_counted += 1;
            }
            None => stats.lines_malformed += 1,
        }
    }

    Ok((tally, stats))
}
