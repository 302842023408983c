//! Assertion helpers for catalogue rows

use std::collections::BTreeSet;

use catalogue_db::CatalogueRow;

/// Asserts that `rows` holds exactly the `expected` names, in any order
pub fn assert_names_eq<S: AsRef<str>>(rows: &[CatalogueRow], expected: &[S]) {
    assert_eq!(
        rows.len(),
        expected.len(),
        "Expected {} rows, got {}: {:?}",
        expected.len(),
        rows.len(),
        rows
    );

    let actual: BTreeSet<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    let expected: BTreeSet<&str> = expected.iter().map(|name| name.as_ref()).collect();
    assert_eq!(actual, expected, "Catalogue names differ");
}

/// Asserts that a lookup returned the placeholder row for "no match"
pub fn assert_empty_row(row: &CatalogueRow) {
    assert!(row.is_empty(), "Expected an empty row, got {:?}", row);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, name: &str) -> CatalogueRow {
        CatalogueRow { id, name: name.to_string() }
    }

    #[test]
    fn test_names_compare_in_any_order() {
        let rows = vec![row(3, "Earth"), row(1, "Mercury")];

        assert_names_eq(&rows, &["Mercury", "Earth"]);
    }

    #[test]
    #[should_panic(expected = "Expected 3 rows")]
    fn test_missing_row_fails() {
        let rows = vec![row(1, "Mercury"), row(2, "Venus")];

        assert_names_eq(&rows, &["Mercury", "Venus", "Earth"]);
    }

    #[test]
    #[should_panic(expected = "Catalogue names differ")]
    fn test_wrong_name_fails() {
        let rows = vec![row(1, "Mercury"), row(2, "Venus")];

        assert_names_eq(&rows, &["Mercury", "Mars"]);
    }

    #[test]
    fn test_default_row_is_empty() {
        assert_empty_row(&CatalogueRow::default());
    }
}
