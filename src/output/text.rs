//! Plain-text Removed/Added report

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::diff::DiffResult;
use crate::model::Record;

use super::OutputFormatter;

/// Line prefix for records only in the left table
pub const REMOVED_PREFIX: &str = "---";
/// Line prefix for records only in the right table
pub const ADDED_PREFIX: &str = "+++";

/// Tab-separated report; writes nothing when there are no changes
#[derive(Debug, Default)]
pub struct TextOutput;

impl TextOutput {
    pub fn new() -> Self {
        Self
    }

    fn write_section(
        &self,
        title: &str,
        prefix: &str,
        records: &[Record],
        writer: &mut dyn Write,
    ) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "{}:", title)?;
        for record in records {
            write!(writer, "{}", prefix)?;
            for value in record.display_values() {
                write!(writer, "\t{}", value)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl OutputFormatter for TextOutput {
    fn render(
        &self,
        diff: &DiffResult,
        _left_path: &Path,
        _right_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<()> {
        self.write_section("Removed", REMOVED_PREFIX, &diff.removed, writer)?;
        self.write_section("Added", ADDED_PREFIX, &diff.added, writer)?;
        Ok(())
    }
}
