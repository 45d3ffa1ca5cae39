//! Ranking Report - Serializable summary of one evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EvaluationId, Timestamp};

use super::{DecisionMatrix, RankingMethod, TopsisEvaluation};

/// Score and rank of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub identifier: String,
    pub score: Option<f64>,
    pub rank: Option<usize>,
}

/// Summary of an evaluation, suitable for logging or returning to a caller.
///
/// Contains final results only, not intermediate matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Unique identifier of this evaluation.
    pub evaluation_id: EvaluationId,
    /// Alternatives in input order.
    pub alternatives: Vec<RankedAlternative>,
    /// Highest-scoring alternative (None on a tie for first or when nothing is ranked).
    pub best_alternative: Option<String>,
    /// Convention used to break ties.
    pub ranking_method: RankingMethod,
    /// When the evaluation was computed.
    pub computed_at: Timestamp,
}

impl RankingReport {
    /// Builds a report from a matrix and its evaluation.
    pub fn from_evaluation(matrix: &DecisionMatrix, evaluation: &TopsisEvaluation) -> Self {
        let alternatives: Vec<RankedAlternative> = matrix
            .alternatives()
            .iter()
            .zip(evaluation.scores.iter().zip(&evaluation.ranks))
            .map(|(alternative, (score, rank))| RankedAlternative {
                identifier: alternative.identifier.clone(),
                score: *score,
                rank: *rank,
            })
            .collect();

        let best_alternative = Self::find_best(&alternatives);

        Self {
            evaluation_id: EvaluationId::new(),
            alternatives,
            best_alternative,
            ranking_method: evaluation.ranking_method,
            computed_at: Timestamp::now(),
        }
    }

    /// Serializes the report to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Alternatives ordered best first; unranked ones are left out.
    pub fn leaderboard(&self) -> Vec<&RankedAlternative> {
        let mut ranked: Vec<_> = self.alternatives.iter().filter(|a| a.rank.is_some()).collect();
        ranked.sort_by_key(|a| a.rank);
        ranked
    }

    fn find_best(alternatives: &[RankedAlternative]) -> Option<String> {
        let top = alternatives
            .iter()
            .filter_map(|a| a.score)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut best = alternatives.iter().filter(|a| a.score == Some(top));
        match (best.next(), best.next()) {
            (Some(only), None) => Some(only.identifier.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{InputValidator, RawTable, TopsisEvaluator};

    fn report(rows: Vec<Vec<&str>>) -> RankingReport {
        let table = RawTable::new(["Id", "C1", "C2"], rows);
        let input = InputValidator::validate(&table, "1,1", "+,+").unwrap();
        let evaluation = TopsisEvaluator::default().evaluate(&input).unwrap();
        RankingReport::from_evaluation(input.matrix(), &evaluation)
    }

    #[test]
    fn best_is_unique_top_score() {
        let report = report(vec![vec!["A", "1", "2"], vec!["B", "2", "1"], vec!["C", "3", "3"]]);
        assert_eq!(report.best_alternative, Some("C".to_string()));
        assert_eq!(report.alternatives.len(), 3);
        assert_eq!(report.ranking_method, RankingMethod::Max);
    }

    #[test]
    fn tie_for_first_has_no_best() {
        let report = report(vec![vec!["A", "1", "2"], vec!["B", "2", "1"]]);
        assert_eq!(report.best_alternative, None);
        assert!(report.alternatives.iter().all(|a| a.rank == Some(2)));
    }

    #[test]
    fn leaderboard_orders_by_rank() {
        let report = report(vec![vec!["A", "1", "2"], vec!["B", "2", "1"], vec!["C", "3", "3"]]);
        let ids: Vec<_> = report
            .leaderboard()
            .iter()
            .map(|a| a.identifier.as_str())
            .collect();
        assert_eq!(ids[0], "C");
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn report_serializes() {
        let report = report(vec![vec!["A", "1", "2"], vec!["B", "2", "1"], vec!["C", "3", "3"]]);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"identifier\":\"C\""));
        assert!(json.contains("\"ranking_method\":\"max\""));
        assert!(json.contains("\"best_alternative\":\"C\""));
    }
}
