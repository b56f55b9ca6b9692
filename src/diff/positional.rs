//! Positional record matching
//!
//! Records are paired by index, not by key. Both tables must already be
//! sorted; a key inserted or removed in the middle shifts every later pair.

use tracing::trace;

use crate::model::{Record, Table};

use super::cell_diff::cells_equal;

/// Check whether `a` differs from its counterpart `b` in any of `a`'s columns.
///
/// Extra fields of `a` count as one more column that `b` must match exactly.
fn record_differs(a: &Record, b: &Record) -> bool {
    a.values
        .iter()
        .any(|(column, value)| !cells_equal(value.as_deref(), b.get(column)))
        || (!a.extra.is_empty() && a.extra != b.extra)
}

/// Records of `a` with no equal record at the same position in `b`, in `a`'s order
pub fn changed_records<'a>(a: &'a Table, b: &Table) -> Vec<&'a Record> {
    a.records
        .iter()
        .enumerate()
        .filter(|(i, record)| match b.records.get(*i) {
            Some(other) => record_differs(record, other),
            None => {
                trace!(index = i, "past end of other table");
                true
            }
        })
        .map(|(_, record)| record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [&str; 3] = ["table", "cell", "val"];

    fn table(rows: &[&[&str]]) -> Table {
        table_with(&HEADER, rows)
    }

    fn table_with(header: &[&str], rows: &[&[&str]]) -> Table {
        let mut table = Table::new("t.tsv", header.iter().copied());
        for (i, row) in rows.iter().enumerate() {
            table.add_record(Record::from_fields(header, row.iter().copied(), i + 2));
        }
        table
    }

    fn vals(records: &[&Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.display_values().collect::<Vec<_>>().join("\t"))
            .collect()
    }

    #[test]
    fn test_identical_tables() {
        let a = table(&[&["T1", "C1", "5"], &["T1", "C2", "6"]]);
        let b = table(&[&["T1", "C1", "5"], &["T1", "C2", "6"]]);
        assert!(changed_records(&a, &b).is_empty());
        assert!(changed_records(&b, &a).is_empty());
    }

    #[test]
    fn test_value_change() {
        let a = table(&[&["T1", "C1", "5"]]);
        let b = table(&[&["T1", "C1", "6"]]);
        assert_eq!(vals(&changed_records(&a, &b)), vec!["T1\tC1\t5"]);
        assert_eq!(vals(&changed_records(&b, &a)), vec!["T1\tC1\t6"]);
    }

    #[test]
    fn test_tail_rows_reported() {
        let a = table(&[&["T1", "C1", "5"], &["T1", "C2", "6"], &["T1", "C3", "7"]]);
        let b = table(&[&["T1", "C1", "5"]]);
        assert_eq!(
            vals(&changed_records(&a, &b)),
            vec!["T1\tC2\t6", "T1\tC3\t7"]
        );
        assert!(changed_records(&b, &a).is_empty());
    }

    #[test]
    fn test_empty_matches_absent_column() {
        let a = table_with(&["table", "cell", "note"], &[&["T1", "C1", ""]]);
        let b = table_with(&["table", "cell"], &[&["T1", "C1"]]);
        assert!(changed_records(&a, &b).is_empty());
        assert!(changed_records(&b, &a).is_empty());
    }

    #[test]
    fn test_only_own_columns_checked() {
        let a = table_with(&["table", "cell"], &[&["T1", "C1"]]);
        let b = table(&[&["T1", "C1", "5"]]);
        assert!(changed_records(&a, &b).is_empty());
        assert_eq!(changed_records(&b, &a).len(), 1);
    }

    #[test]
    fn test_extra_fields_compared() {
        let a = table(&[&["T1", "C1", "5", "X"]]);
        let b = table(&[&["T1", "C1", "5"]]);
        assert_eq!(vals(&changed_records(&a, &b)), vec!["T1\tC1\t5\tX"]);
        assert!(changed_records(&b, &a).is_empty());

        let same = table(&[&["T1", "C1", "5", "X"]]);
        assert!(changed_records(&a, &same).is_empty());
    }

    #[test]
    fn test_empty_extra_field_still_differs() {
        let a = table(&[&["T1", "C1", "5", ""]]);
        let b = table(&[&["T1", "C1", "5"]]);
        assert_eq!(changed_records(&a, &b).len(), 1);
    }

    #[test]
    fn test_column_order_irrelevant() {
        let a = table(&[&["T1", "C1", "5"]]);
        let b = table_with(&["val", "cell", "table"], &[&["5", "C1", "T1"]]);
        assert!(changed_records(&a, &b).is_empty());
    }

    #[test]
    fn test_mid_insert_desynchronizes() {
        let a = table(&[&["T1", "C1", "1"], &["T1", "C3", "3"]]);
        let b = table(&[&["T1", "C1", "1"], &["T1", "C2", "2"], &["T1", "C3", "3"]]);
        assert_eq!(vals(&changed_records(&a, &b)), vec!["T1\tC3\t3"]);
        assert_eq!(
            vals(&changed_records(&b, &a)),
            vec!["T1\tC2\t2", "T1\tC3\t3"]
        );
    }
}
