// src/process/cells.rs

use crate::config::Delimiter;
use crate::extract::Table;

/// One cleaned row. Widths vary from row to row.
pub type Record = Vec<String>;

const NBSP: char = '\u{a0}';

/// Split a flattened row on the doubled delimiter and trim each piece.
///
/// Text tokens of one `<tr>` were joined with a single delimiter, so the
/// whitespace token between two cells shows up as two delimiters in a row.
pub fn split_row(row: &str, delimiter: Delimiter) -> Vec<String> {
    let boundary = delimiter.to_string().repeat(2);
    row.split(boundary.as_str())
        .map(|cell| cell.trim().to_owned())
        .collect()
}

/// Replace leftover delimiters and non-breaking spaces with spaces, collapse
/// double spaces once, trim.
pub fn clean_cell(cell: &str, delimiter: Delimiter) -> String {
    let mut out = cell.replace(delimiter.as_char(), " ");
    out = out.replace(NBSP, " ");
    out = out.replace("  ", " ");
    out.trim().to_owned()
}

/// Clean every cell and drop the ones left empty.
pub fn clean_cells(cells: Vec<String>, delimiter: Delimiter) -> Vec<String> {
    cells
        .into_iter()
        .map(|cell| clean_cell(&cell, delimiter))
        .filter(|cell| !cell.is_empty())
        .collect()
}

pub fn normalize_row(row: &str, delimiter: Delimiter) -> Record {
    clean_cells(split_row(row, delimiter), delimiter)
}

/// All rows of all tables, in order, as records.
pub fn extract_records(tables: &[Table], delimiter: Delimiter) -> Vec<Record> {
    tables
        .iter()
        .flat_map(|table| table.rows())
        .map(|row| normalize_row(row, delimiter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB: Delimiter = Delimiter::TAB;

    fn pipe() -> Delimiter {
        "|".parse().unwrap()
    }

    #[test]
    fn doubled_delimiter_is_a_cell_boundary() {
        assert_eq!(normalize_row("A\t\tB", TAB), vec!["A", "B"]);
        assert_eq!(normalize_row("A||B", pipe()), vec!["A", "B"]);
    }

    #[test]
    fn whitespace_placeholders_collapse_into_boundaries() {
        // ["", "A", "", "", "", "B", ""] joined with a tab
        assert_eq!(split_row("\tA\t\t\t\tB\t", TAB), vec!["A", "", "B"]);
        assert_eq!(normalize_row("\tA\t\t\t\tB\t", TAB), vec!["A", "B"]);
    }

    #[test]
    fn single_delimiter_stays_inside_the_cell() {
        assert_eq!(normalize_row("A\tB", TAB), vec!["A B"]);
        assert_eq!(normalize_row("New\tYork\t\t-05:00", TAB), vec!["New York", "-05:00"]);
    }

    #[test]
    fn non_breaking_spaces_become_spaces() {
        assert_eq!(clean_cell("Pacific\u{a0}Time", TAB), "Pacific Time");
        assert_eq!(clean_cell("\u{a0}\u{a0}", TAB), "");
    }

    #[test]
    fn double_spaces_are_collapsed_once() {
        assert_eq!(clean_cell("a  b", TAB), "a b");
        assert_eq!(clean_cell("a    b", TAB), "a  b");
        assert_eq!(clean_cell("a\t\u{a0}b", TAB), "a b");
    }

    #[test]
    fn leftover_delimiter_follows_the_configured_one() {
        assert_eq!(clean_cell("a|b", pipe()), "a b");
        assert_eq!(clean_cell("a\tb", pipe()), "a\tb");
        assert_eq!(normalize_row("|Europe|Paris||+01:00|", pipe()), vec!["Europe Paris", "+01:00"]);
    }

    #[test]
    fn empty_cells_are_dropped() {
        let cells = vec!["".to_string(), "x".to_string(), " \u{a0} ".to_string()];
        assert_eq!(clean_cells(cells, TAB), vec!["x"]);
        assert!(normalize_row("", TAB).is_empty());
    }

    #[test]
    fn records_follow_table_then_row_order() {
        let tables = vec![
            Table::new(vec!["\tTimezone\t\tAbbrev\t".into(), "\tUTC\t\tUTC\t".into()]),
            Table::new(vec!["\tAmerica/New_York\t\tEST\t\t\t\tDST\t".into()]),
        ];
        let records = extract_records(&tables, TAB);
        assert_eq!(
            records,
            vec![
                vec!["Timezone", "Abbrev"],
                vec!["UTC", "UTC"],
                vec!["America/New_York", "EST", "DST"],
            ]
        );
    }
}
