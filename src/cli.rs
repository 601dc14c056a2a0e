// CLI-specific types and structures
// This module contains the command-line interface definitions

use clap::Parser;

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "logtally")]
#[command(about = "Count log severity levels per process across a directory tree")]
#[command(
    long_about = "Count log severity levels per process across a directory tree\n\nEvery file ending in .log below DIR is read in parallel. Lines of the form\n  [timestamp] [level] [process] message\nare counted per process and level; other lines are skipped.\n\nThe report lists processes by total event count, highest first.\n\nIf DIR is omitted, the directory is read from standard input."
)]
#[command(version)]
pub struct Cli {
    /// Directory to scan recursively (prompted for on stdin if omitted)
    pub directory: Option<String>,

    /// Report format
    #[arg(short = 'F', long = "output-format", value_enum, default_value = "table", help_heading = "Output Options")]
    pub output_format: OutputFormat,

    /// Print processing statistics to stderr after the report
    #[arg(short = 's', long = "stats", help_heading = "Output Options")]
    pub stats: bool,

    /// Do not print per-file read errors
    #[arg(short = 'q', long = "quiet", help_heading = "Output Options")]
    pub quiet: bool,

    /// Color diagnostics on stderr
    #[arg(long = "color", value_enum, default_value = "auto", help_heading = "Output Options")]
    pub color: ColorMode,

    /// Worker threads (0 = number of CPUs)
    #[arg(long = "threads", default_value_t = 0, help_heading = "Performance Options")]
    pub threads: usize,
}
