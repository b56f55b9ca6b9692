//! Column metadata

/// Column metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name (from header)
    pub name: String,
    /// Column index (0-based position after duplicate names are folded)
    pub index: usize,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// Fold a raw header into unique columns, keeping each name at the position
/// of its first occurrence.
pub(crate) fn columns_from_header<'a>(header: impl IntoIterator<Item = &'a str>) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    for name in header {
        if !columns.iter().any(|c| c.name == name) {
            let index = columns.len();
            columns.push(Column::new(name, index));
        }
    }
    columns
}
