//! JSON output format

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::diff::{DiffResult, DiffStats};
use crate::model::Record;

use super::OutputFormatter;

/// Pretty-printed JSON output formatter
#[derive(Debug, Default)]
pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonDiffOutput<'a> {
    left_file: String,
    right_file: String,
    removed: &'a [Record],
    added: &'a [Record],
    stats: &'a DiffStats,
}

impl OutputFormatter for JsonOutput {
    fn render(
        &self,
        diff: &DiffResult,
        left_path: &Path,
        right_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let output = JsonDiffOutput {
            left_file: left_path.display().to_string(),
            right_file: right_path.display().to_string(),
            removed: &diff.removed,
            added: &diff.added,
            stats: &diff.stats,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;

        Ok(())
    }
}
