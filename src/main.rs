//! compare - Positional diff for sorted tab-delimited tables

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tabcompare::config::{Config, OutputFormat};
use tabcompare::output::render_to_stdout;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Compare two tab-delimited tables after sorting them by key
#[derive(Parser, Debug)]
#[command(name = "compare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Left (original) file
    left_file: PathBuf,

    /// Right (new) file
    right_file: PathBuf,

    /// Column(s) to sort both tables by (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_value = "table,cell")]
    key: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: CliOutputFormat,

    /// Only show statistics, not the changed rows
    #[arg(long)]
    stats_only: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(has_changes) => {
            if has_changes {
                ExitCode::from(1) // Differences found
            } else {
                ExitCode::SUCCESS // No differences
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let config = Config::new(cli.left_file, cli.right_file)
        .with_key_columns(cli.key)
        .with_output_format(cli.format.into())
        .with_stats_only(cli.stats_only);

    let comparison = tabcompare::compare(&config).with_context(|| {
        format!(
            "Failed to compare {} with {}",
            config.left_file.display(),
            config.right_file.display()
        )
    })?;
    let diff = &comparison.diff;

    if config.stats_only {
        println!("Left file: {} ({} rows)", config.left_file.display(), diff.stats.left_row_count);
        println!("Right file: {} ({} rows)", config.right_file.display(), diff.stats.right_row_count);
        println!();
        println!("Removed: {}", diff.stats.rows_removed);
        println!("Added:   {}", diff.stats.rows_added);
        return Ok(diff.has_changes());
    }

    render_to_stdout(
        diff,
        &config.left_file,
        &config.right_file,
        config.output_format,
    )?;

    Ok(diff.has_changes())
}
