//! Tab-delimited file parser

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::CompareError;
use crate::model::{Record, Table};

/// Parser for tab-separated files with a header row
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvParser;

impl TsvParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a file and return a Table in file order
    pub fn parse(&self, path: &Path) -> Result<Table, CompareError> {
        let file = File::open(path).map_err(|source| CompareError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = self.parse_reader(path, BufReader::new(file))?;

        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse delimited text from any reader; `path` is only used in messages
    pub fn parse_reader<R: Read>(&self, path: &Path, reader: R) -> Result<Table, CompareError> {
        let parse_err = |source: csv::Error| read_error(path, source);

        let mut tsv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = tsv_reader.headers().map_err(parse_err)?.clone();
        let header: Vec<&str> = headers.iter().collect();
        let mut table = Table::new(path, header.iter().copied());

        for (row_num, result) in tsv_reader.records().enumerate() {
            let row = result.map_err(parse_err)?;
            let source_line = row
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row_num + 2); // +2 for 1-indexing and header

            if row.len() > header.len() {
                warn!(
                    path = %path.display(),
                    line = source_line,
                    extra = row.len() - header.len(),
                    "row is wider than header"
                );
            }

            table.add_record(Record::from_fields(&header, row.iter(), source_line));
        }

        Ok(table)
    }
}

/// Keep read failures apart from malformed text
fn read_error(path: &Path, source: csv::Error) -> CompareError {
    if source.is_io_error() {
        CompareError::Io {
            path: path.to_path_buf(),
            source: source.into(),
        }
    } else {
        CompareError::Parse {
            path: path.to_path_buf(),
            source,
        }
    }
}
