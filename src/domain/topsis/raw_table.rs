//! Raw Table - Unparsed tabular input as handed over by a reader.

use serde::{Deserialize, Serialize};

/// A header row plus string cells.
///
/// Column 1 holds the alternative identifier; columns 2..N hold criterion
/// values that have not been parsed yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a table from a header row and data rows.
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Number of columns, including the identifier column.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_converts_cells_to_strings() {
        let table = RawTable::new(["Model", "Price"], vec![vec!["M1", "250"]]);
        assert_eq!(table.headers, vec!["Model".to_string(), "Price".to_string()]);
        assert_eq!(table.rows[0][1], "250");
    }

    #[test]
    fn counts_reflect_shape() {
        let table = RawTable::new(
            ["Model", "Price", "Storage"],
            vec![vec!["M1", "250", "16"], vec!["M2", "200", "32"]],
        );
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn default_is_empty() {
        let table = RawTable::default();
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 0);
    }
}
