use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: Logging,
    pub output: Output,
}

/// Contains parameters for the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "analytics=debug").
    pub level: String,
    /// Directory for daily-rolling log files. Logs go to stderr when absent.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// File name prefix of the rolling log files.
    pub file_prefix: String,
}

/// Contains parameters for how reports are written to stdout.
#[derive(Debug, Clone, Deserialize)]
pub struct Output {
    pub format: OutputFormat,
}

/// JSON layout of a printed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Indented, one metric per line.
    Pretty,
    /// A single line.
    Compact,
}
