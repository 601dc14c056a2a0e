/// Severity levels shown as fixed report columns.
///
/// Tallies key on the raw label string, so anything outside this vocabulary
/// is still counted; it just has no column of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Report column order
    pub const ALL: [Severity; 5] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "Trace",
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warn => "Warn",
            Severity::Error => "Error",
        }
    }

    /// Exact, case-sensitive match against the known vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        Severity::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// Position of this level in the report columns
    pub fn column(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
