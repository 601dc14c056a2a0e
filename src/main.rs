use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use logtally::cli::Cli;
use logtally::colors::ColorScheme;
use logtally::error_handling::{create_fatal_error, ErrorReporter};
use logtally::platform::{ExitCode, SafeStdout};
use logtally::runner::Runner;
use logtally::{tty, LogTallyConfig};

/// Ask for the directory on stdout and read one line from stdin
fn prompt_for_directory(stdout: &mut SafeStdout) -> Result<PathBuf> {
    stdout.write_str("Enter directory path: ")?;
    stdout.flush()?;

    let mut line = String::new();
    let bytes_read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read directory path from stdin")?;
    if bytes_read == 0 {
        anyhow::bail!("No directory path given on stdin");
    }

    // Separate the prompt from the report
    stdout.write_str("\n")?;

    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut stdout = SafeStdout::new();
    let color_mode: logtally::config::ColorMode = cli.color.clone().into();
    let colors = ColorScheme::new(tty::should_use_colors_with_mode(&color_mode));
    let mut reporter = ErrorReporter::new(io::stderr(), colors, cli.quiet);

    let root = match &cli.directory {
        Some(directory) => PathBuf::from(directory),
        None => match prompt_for_directory(&mut stdout) {
            Ok(root) => root,
            Err(e) => {
                reporter.report_error(create_fatal_error(format!("{:#}", e)));
                ExitCode::GeneralError.exit();
            }
        },
    };

    let config = LogTallyConfig::from_cli(&cli, root);
    let outcome = match Runner::new(config.clone()).run() {
        Ok(outcome) => outcome,
        Err(e) => {
            reporter.report_error(create_fatal_error(format!("{:#}", e)));
            ExitCode::GeneralError.exit();
        }
    };

    reporter.report_failures(&outcome.failures);

    stdout.write_str(&outcome.report)?;
    stdout.flush()?;

    if config.output.stats {
        let mut stderr = reporter.into_inner();
        // Diagnostics only; a closed stderr must not change the exit code
        let _ = writeln!(stderr, "{}", outcome.stats.format_stats());
    }

    Ok(())
}
