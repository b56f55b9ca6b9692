//! Table and Record data structures

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use super::key::KeyBuilder;
use super::schema::{columns_from_header, Column};
use crate::error::CompareError;

/// One row of a table: column name to cell value, in header order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Cell values keyed by column name; `None` marks an absent cell
    pub values: IndexMap<String, Option<String>>,
    /// Original line number in source file (1-indexed)
    pub source_line: usize,
    /// Fields beyond the header width, in file order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

impl Record {
    /// Build a record from a header and the fields of one row.
    ///
    /// Short rows leave the trailing columns absent; long rows keep the
    /// surplus fields in `extra`. A repeated header name keeps its first
    /// position and takes the last value.
    pub fn from_fields<'a>(
        header: &[&str],
        fields: impl IntoIterator<Item = &'a str>,
        source_line: usize,
    ) -> Self {
        let mut values = IndexMap::with_capacity(header.len());
        let mut fields = fields.into_iter();
        for name in header {
            // Re-inserting an existing key keeps its slot.
            values.insert(name.to_string(), fields.next().map(str::to_string));
        }
        Self {
            values,
            source_line,
            extra: fields.map(str::to_string).collect(),
        }
    }

    /// Get a cell value by column name; absent cells and unknown columns are `None`
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).and_then(|v| v.as_deref())
    }

    /// Cell values in column order followed by any extra fields, absent
    /// cells rendered as empty strings
    pub fn display_values(&self) -> impl Iterator<Item = &str> {
        self.values
            .values()
            .map(|v| v.as_deref().unwrap_or(""))
            .chain(self.extra.iter().map(String::as_str))
    }
}

/// A table loaded from one file
#[derive(Debug)]
pub struct Table {
    /// File the table was read from
    pub path: PathBuf,
    /// Column definitions
    pub columns: Vec<Column>,
    /// All records in the table
    pub records: Vec<Record>,
}

impl Table {
    /// Create a new empty table from a raw header row
    pub fn new<'a>(path: impl Into<PathBuf>, header: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            path: path.into(),
            columns: columns_from_header(header),
            records: Vec::new(),
        }
    }

    /// Add a record to the table
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Path of the source file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Number of records
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Stable sort of the records by the given key columns.
    ///
    /// Fails if a key column is missing from the header, unless the table has
    /// no records.
    pub fn sort_by_keys(&mut self, key_columns: &[String]) -> Result<(), CompareError> {
        if self.records.is_empty() {
            return Ok(());
        }

        let keys = KeyBuilder::with_column_names(self, key_columns)?;
        self.records.sort_by_cached_key(|record| keys.build_key(record));
        Ok(())
    }
}
