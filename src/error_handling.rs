use std::io::Write;
use std::path::PathBuf;

use crate::colors::ColorScheme;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Fatal,  // Root directory unreadable, no directory on stdin
    Medium, // Log file unreadable
}

/// Error information for reporting
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub severity: ErrorSeverity,
    pub message: String,
}

/// A log file that could not be counted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

impl From<&FileFailure> for ErrorInfo {
    fn from(failure: &FileFailure) -> Self {
        create_medium_error(failure.message.clone())
    }
}

/// Prefix a diagnostic the way every stderr line of this tool is prefixed
pub fn format_error_message(message: &str, colors: &ColorScheme) -> String {
    format!("{}logtally:{} {}", colors.error, colors.reset, message)
}

/// Writes diagnostics to stderr (or any writer in tests).
///
/// Fatal errors are always written; per-file errors are dropped when `quiet`
/// is set. Failed files are still counted in the run's stats either way.
pub struct ErrorReporter<W: Write> {
    out: W,
    colors: ColorScheme,
    quiet: bool,
}

impl<W: Write> ErrorReporter<W> {
    pub fn new(out: W, colors: ColorScheme, quiet: bool) -> Self {
        Self { out, colors, quiet }
    }

    pub fn report_error(&mut self, error: ErrorInfo) {
        if error.severity == ErrorSeverity::Medium && self.quiet {
            return;
        }
        // Nothing sensible left to do if the diagnostic stream is gone
        let _ = writeln!(
            self.out,
            "{}",
            format_error_message(&error.message, &self.colors)
        );
    }

    pub fn report_failures(&mut self, failures: &[FileFailure]) {
        for failure in failures {
            self.report_error(failure.into());
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn create_fatal_error(message: String) -> ErrorInfo {
    ErrorInfo {
        severity: ErrorSeverity::Fatal,
        message,
    }
}

pub fn create_medium_error(message: String) -> ErrorInfo {
    ErrorInfo {
        severity: ErrorSeverity::Medium,
        message,
    }
}
