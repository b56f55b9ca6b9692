//! Error types for loading and comparing tables

use std::path::PathBuf;

/// Errors that can occur while loading or sorting a table.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid delimited text.
    #[error("malformed table {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A sort key column is missing from the header of a non-empty table.
    #[error("key column '{column}' not found in header of {}", path.display())]
    MissingKeyColumn { column: String, path: PathBuf },
}
