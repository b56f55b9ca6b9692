//! Composite sort key handling

use crate::error::CompareError;

use super::table::{Record, Table};

/// Builder for computing composite sort keys
#[derive(Debug, Clone)]
pub struct KeyBuilder {
    column_names: Vec<String>,
}

impl KeyBuilder {
    /// Set the key columns by name, checking that the table has each of them
    pub fn with_column_names(table: &Table, names: &[String]) -> Result<Self, CompareError> {
        if let Some(missing) = names.iter().find(|name| table.column_index(name).is_none()) {
            return Err(CompareError::MissingKeyColumn {
                column: missing.clone(),
                path: table.path().to_path_buf(),
            });
        }

        Ok(Self {
            column_names: names.to_vec(),
        })
    }

    /// Build the key tuple of a record; absent values sort as empty strings
    pub fn build_key(&self, record: &Record) -> Vec<String> {
        self.column_names
            .iter()
            .map(|name| record.get(name).unwrap_or_default().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_key_absent_is_empty() {
        let header = ["table", "cell", "val"];
        let mut table = Table::new("t.tsv", header);
        table.add_record(Record::from_fields(&header, ["T1"], 2));

        let names = vec!["table".to_string(), "cell".to_string()];
        let keys = KeyBuilder::with_column_names(&table, &names).unwrap();
        assert_eq!(keys.build_key(&table.records[0]), vec!["T1", ""]);
    }

    #[test]
    fn test_unknown_column() {
        let table = Table::new("t.tsv", ["table"]);
        let err = KeyBuilder::with_column_names(&table, &["cell".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "key column 'cell' not found in header of t.tsv");
    }
}
