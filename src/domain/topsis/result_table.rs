//! Result Table - The input table with score and rank columns appended.

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, RawTable, TopsisEvaluation};

/// Header of the appended score column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// Output table. Row order always matches the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Appends scores and ranks to the raw input rows, keeping cells verbatim.
    ///
    /// `precision` fixes the number of decimals for scores; `None` renders the
    /// shortest representation that round-trips.
    pub fn assemble(
        table: &RawTable,
        evaluation: &TopsisEvaluation,
        precision: Option<usize>,
    ) -> Self {
        Self::append(&table.headers, table.rows.clone(), evaluation, precision)
    }

    /// Renders a typed matrix with scores and ranks appended.
    ///
    /// Values are printed in their shortest round-trip form.
    pub fn from_matrix(
        matrix: &DecisionMatrix,
        evaluation: &TopsisEvaluation,
        precision: Option<usize>,
    ) -> Self {
        let headers: Vec<String> = std::iter::once(matrix.identifier_header().to_string())
            .chain(matrix.criteria().iter().cloned())
            .collect();

        let rows = matrix
            .alternatives()
            .iter()
            .map(|alternative| {
                std::iter::once(alternative.identifier.clone())
                    .chain(alternative.values.iter().map(f64::to_string))
                    .collect()
            })
            .collect();

        Self::append(&headers, rows, evaluation, precision)
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn append(
        headers: &[String],
        rows: Vec<Vec<String>>,
        evaluation: &TopsisEvaluation,
        precision: Option<usize>,
    ) -> Self {
        let mut headers = headers.to_vec();
        headers.push(SCORE_COLUMN.to_string());
        headers.push(RANK_COLUMN.to_string());

        let rows = rows
            .into_iter()
            .zip(evaluation.scores.iter().zip(&evaluation.ranks))
            .map(|(mut row, (score, rank))| {
                row.push(format_score(*score, precision));
                row.push(rank.map(|r| r.to_string()).unwrap_or_default());
                row
            })
            .collect();

        Self { headers, rows }
    }
}

/// Renders a score; undefined scores become an empty cell.
pub fn format_score(score: Option<f64>, precision: Option<usize>) -> String {
    match (score, precision) {
        (Some(value), Some(decimals)) => format!("{:.*}", decimals, value),
        (Some(value), None) => value.to_string(),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{InputValidator, TopsisEvaluator};

    fn table() -> RawTable {
        RawTable::new(
            ["Fund", "P1", "P2"],
            vec![vec!["F1", "1", "2"], vec!["F2", "2", "1"], vec!["F3", "3", "3"]],
        )
    }

    fn evaluation() -> TopsisEvaluation {
        let input = InputValidator::validate(&table(), "1,1", "+,+").unwrap();
        TopsisEvaluator::default().evaluate(&input).unwrap()
    }

    #[test]
    fn assemble_appends_two_columns_in_order() {
        let result = ResultTable::assemble(&table(), &evaluation(), Some(4));

        assert_eq!(result.column_count(), 5);
        assert_eq!(result.row_count(), 3);
        assert_eq!(result.headers[3], SCORE_COLUMN);
        assert_eq!(result.headers[4], RANK_COLUMN);
        assert_eq!(result.rows[0], vec!["F1", "1", "2", "0.3090", "3"]);
        assert_eq!(result.rows[2], vec!["F3", "3", "3", "1.0000", "1"]);
    }

    #[test]
    fn assemble_without_precision_uses_shortest_repr() {
        let result = ResultTable::assemble(&table(), &evaluation(), None);
        assert_eq!(result.rows[2][3], "1");
    }

    #[test]
    fn from_matrix_renders_typed_values() {
        let input = InputValidator::validate(&table(), "1,1", "+,+").unwrap();
        let result = ResultTable::from_matrix(input.matrix(), &evaluation(), Some(2));

        assert_eq!(result.headers, vec!["Fund", "P1", "P2", SCORE_COLUMN, RANK_COLUMN]);
        assert_eq!(result.rows[1], vec!["F2", "2", "1", "0.31", "3"]);
    }

    #[test]
    fn from_matrix_has_same_shape_as_assemble() {
        let input = InputValidator::validate(&table(), "1,1", "+,+").unwrap();
        let typed = ResultTable::from_matrix(input.matrix(), &evaluation(), Some(4));
        let raw = ResultTable::assemble(&table(), &evaluation(), Some(4));

        assert_eq!(typed, raw);
    }

    #[test]
    fn undefined_score_renders_empty() {
        assert_eq!(format_score(None, Some(3)), "");
        assert_eq!(format_score(Some(0.5), Some(3)), "0.500");
        assert_eq!(format_score(Some(0.25), None), "0.25");
    }
}
