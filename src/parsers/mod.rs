pub mod bracket;

pub use bracket::BracketParser;

/// One parsed log line. Fields borrow from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub timestamp: &'a str,
    pub level: &'a str,
    pub process: &'a str,
    pub message: &'a str,
}

/// Turns a raw line into a record, or `None` when the line is malformed.
///
/// Implementations must be tolerant: malformed input is routine log noise and
/// never an error.
pub trait RecordParser: Send + Sync {
    fn parse<'a>(&self, line: &'a str) -> Option<LogRecord<'a>>;
}
