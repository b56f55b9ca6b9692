//! Output formatting for diff results

mod json;
mod text;

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::diff::DiffResult;

pub use json::JsonOutput;
pub use text::TextOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render diff result to a writer
    fn render(
        &self,
        diff: &DiffResult,
        left_path: &Path,
        right_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Render diff result to stdout
pub fn render_to_stdout(
    diff: &DiffResult,
    left_path: &Path,
    right_path: &Path,
    format: OutputFormat,
) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = std::io::stdout().lock();
    formatter.render(diff, left_path, right_path, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
