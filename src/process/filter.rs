// src/process/filter.rs

use tracing::debug;

use crate::extract::Table;

/// Keep the tables where at least one flattened row contains `keyword`.
/// Input order is preserved; no match gives an empty vec.
pub fn filter_tables_by_keyword(tables: Vec<Table>, keyword: &str) -> Vec<Table> {
    let total = tables.len();
    let kept: Vec<Table> = tables
        .into_iter()
        .filter(|table| table.contains(keyword))
        .collect();
    debug!(keyword, total, kept = kept.len(), "filtered tables");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&str]) -> Table {
        Table::new(rows.iter().map(|r| r.to_string()).collect())
    }

    #[test]
    fn keeps_matching_tables_in_order() {
        let tables = vec![
            table(&["Zone\tDST", "a\tb"]),
            table(&["nothing"]),
            table(&["x", "observes DST"]),
        ];
        let kept = filter_tables_by_keyword(tables.clone(), "DST");
        assert_eq!(kept, vec![tables[0].clone(), tables[2].clone()]);
    }

    #[test]
    fn match_is_case_sensitive_substring() {
        let tables = vec![table(&["dst only"]), table(&["MIDSTREAM"])];
        let kept = filter_tables_by_keyword(tables.clone(), "DST");
        assert_eq!(kept, vec![tables[1].clone()]);
    }

    #[test]
    fn no_match_is_empty() {
        let tables = vec![table(&["a"]), table(&["b"])];
        assert!(filter_tables_by_keyword(tables, "DST").is_empty());
        assert!(filter_tables_by_keyword(Vec::new(), "DST").is_empty());
    }

    #[test]
    fn table_without_rows_never_matches() {
        let kept = filter_tables_by_keyword(vec![Table::default()], "");
        assert!(kept.is_empty());
    }
}
