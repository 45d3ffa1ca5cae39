//! Ranking engine configuration

use serde::Deserialize;

use crate::domain::topsis::{DegeneratePolicy, EvaluationOptions, RankingMethod};

use super::error::ValidationError;

/// Largest number of decimals that still carries information for an `f64`.
pub const MAX_SCORE_PRECISION: usize = 17;

/// Ranking engine configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tie-break convention (`max`, `min`, `dense`)
    #[serde(default)]
    pub ranking_method: RankingMethod,

    /// Handling of zero-norm columns and undefined scores (`reject`, `propagate`)
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,

    /// Decimals for rendered scores; unset renders the shortest exact form
    #[serde(default)]
    pub score_precision: Option<usize>,
}

impl EngineConfig {
    /// Options passed to the evaluator.
    pub fn evaluation_options(&self) -> EvaluationOptions {
        EvaluationOptions {
            ranking_method: self.ranking_method,
            degenerate_policy: self.degenerate_policy,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(precision) = self.score_precision {
            if precision > MAX_SCORE_PRECISION {
                return Err(ValidationError::ScorePrecisionTooLarge(precision));
            }
        }
        Ok(())
    }
}
