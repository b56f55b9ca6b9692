//! tabcompare - Positional diff for sorted tab-delimited tables
//!
//! Loads two tables, sorts both by a composite key and compares them row by
//! row at matching positions.

pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

use tracing::debug;

pub use config::Config;
pub use diff::DiffResult;
pub use error::CompareError;
pub use model::{Record, Table};

use parser::TsvParser;

/// Both sorted tables together with the differences between them
#[derive(Debug)]
pub struct Comparison {
    pub left: Table,
    pub right: Table,
    pub diff: DiffResult,
}

/// Load, sort and diff the two files named in `config`
pub fn compare(config: &Config) -> Result<Comparison, CompareError> {
    let parser = TsvParser::new();

    let mut left = parser.parse(&config.left_file)?;
    let mut right = parser.parse(&config.right_file)?;

    left.sort_by_keys(&config.key_columns)?;
    right.sort_by_keys(&config.key_columns)?;
    debug!(keys = ?config.key_columns, "sorted both tables");

    let diff = diff::compute_diff(&left, &right);

    Ok(Comparison { left, right, diff })
}
