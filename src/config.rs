use std::path::PathBuf;

use crate::discovery::DEFAULT_LOG_SUFFIX;

/// Main configuration struct for a run
#[derive(Debug, Clone)]
pub struct LogTallyConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub performance: PerformanceConfig,
}

/// Input configuration
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub root: PathBuf,
    /// File name suffix that makes a file eligible
    pub suffix: String,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorMode,
    pub stats: bool,
    pub quiet: bool,
}

/// Performance configuration
#[derive(Debug, Clone)]
pub struct PerformanceConfig {
    pub threads: usize,
}

/// Report format
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Color output mode
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl LogTallyConfig {
    /// Create configuration from CLI arguments and the resolved root directory
    pub fn from_cli(cli: &crate::cli::Cli, root: PathBuf) -> Self {
        Self {
            input: InputConfig {
                root,
                suffix: DEFAULT_LOG_SUFFIX.to_string(),
            },
            output: OutputConfig {
                format: cli.output_format.clone().into(),
                color: cli.color.clone().into(),
                stats: cli.stats,
                quiet: cli.quiet,
            },
            performance: PerformanceConfig {
                threads: cli.threads,
            },
        }
    }

    /// Configuration with defaults for scanning `root`
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            input: InputConfig {
                root: root.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Get effective thread count with defaults
    pub fn effective_threads(&self) -> usize {
        if self.performance.threads == 0 {
            num_cpus::get()
        } else {
            self.performance.threads
        }
    }
}

impl Default for LogTallyConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Table,
                color: ColorMode::Auto,
                stats: false,
                quiet: false,
            },
            performance: PerformanceConfig { threads: 0 },
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            suffix: DEFAULT_LOG_SUFFIX.to_string(),
        }
    }
}

impl From<crate::cli::OutputFormat> for OutputFormat {
    fn from(format: crate::cli::OutputFormat) -> Self {
        match format {
            crate::cli::OutputFormat::Table => OutputFormat::Table,
            crate::cli::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

impl From<crate::cli::ColorMode> for ColorMode {
    fn from(mode: crate::cli::ColorMode) -> Self {
        match mode {
            crate::cli::ColorMode::Auto => ColorMode::Auto,
            crate::cli::ColorMode::Always => ColorMode::Always,
            crate::cli::ColorMode::Never => ColorMode::Never,
        }
    }
}
