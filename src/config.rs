//! Configuration handling for tabcompare

use std::path::PathBuf;

/// Columns the tables are sorted by when none are given
pub const DEFAULT_KEY_COLUMNS: [&str; 2] = ["table", "cell"];

/// Output format for diff results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the left (original) file
    pub left_file: PathBuf,
    /// Path to the right (new) file
    pub right_file: PathBuf,
    /// Columns both tables are sorted by before comparing
    pub key_columns: Vec<String>,
    /// Output format
    pub output_format: OutputFormat,
    /// Only show statistics, not the report
    pub stats_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_file: PathBuf::new(),
            right_file: PathBuf::new(),
            key_columns: DEFAULT_KEY_COLUMNS.iter().map(|c| c.to_string()).collect(),
            output_format: OutputFormat::default(),
            stats_only: false,
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(left_file: PathBuf, right_file: PathBuf) -> Self {
        Self {
            left_file,
            right_file,
            ..Default::default()
        }
    }

    /// Set the sort key columns; an empty list keeps the defaults
    pub fn with_key_columns(mut self, keys: Vec<String>) -> Self {
        if !keys.is_empty() {
            self.key_columns = keys;
        }
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Enable stats-only mode
    pub fn with_stats_only(mut self, stats_only: bool) -> Self {
        self.stats_only = stats_only;
        self
    }
}
