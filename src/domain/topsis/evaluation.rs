//! TOPSIS Evaluator - Runs the full scoring pipeline on validated input.
//!
//! normalize → weight → ideal points → separations → scores → ranks.
//! Each stage takes the previous stage's output by reference and returns a
//! new value; nothing is mutated in place.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Degeneracy, TopsisError};

use super::{
    DistanceScorer, IdealPoint, IdealPointCalculator, NormalizedMatrix, Normalizer,
    RankAssigner, RankingMethod, Separation, ValidatedInput, WeightedMatrix, Weighter,
};

/// What to do when a score cannot be defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Fail the run with `DegenerateInput`.
    #[default]
    Reject,
    /// Leave affected scores undefined and their rows unranked.
    Propagate,
}

/// Knobs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvaluationOptions {
    pub ranking_method: RankingMethod,
    pub degenerate_policy: DegeneratePolicy,
}

/// Every intermediate and final value of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisEvaluation {
    pub normalized: NormalizedMatrix,
    pub weighted: WeightedMatrix,
    pub ideal: IdealPoint,
    pub separations: Vec<Separation>,
    /// One entry per alternative; `None` when undefined.
    pub scores: Vec<Option<f64>>,
    /// One entry per alternative; `None` exactly where the score is `None`.
    pub ranks: Vec<Option<usize>>,
    pub ranking_method: RankingMethod,
    /// Degeneracies tolerated under [`DegeneratePolicy::Propagate`].
    pub degeneracies: Vec<Degeneracy>,
}

impl TopsisEvaluation {
    /// True when every alternative received a score and a rank.
    pub fn is_fully_ranked(&self) -> bool {
        self.ranks.iter().all(Option::is_some)
    }

    /// Number of alternatives evaluated.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// TOPSIS pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopsisEvaluator {
    options: EvaluationOptions,
}

impl TopsisEvaluator {
    /// Creates an evaluator with the given options.
    pub fn new(options: EvaluationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Scores and ranks every alternative.
    ///
    /// # Errors
    /// Returns `DegenerateInput` under [`DegeneratePolicy::Reject`] when a
    /// column norm is zero or a score is undefined. Never fails otherwise.
    pub fn evaluate(&self, input: &ValidatedInput) -> Result<TopsisEvaluation, TopsisError> {
        let mut degeneracies = Vec::new();

        let normalized = Normalizer::normalize(input.matrix());
        for column in normalized.degenerate_columns() {
            let criterion = input.matrix().criteria()[column].clone();
            self.tolerate(Degeneracy::ZeroNormColumn { criterion }, &mut degeneracies)?;
        }

        let weighted = Weighter::apply(&normalized, input.weights());
        let ideal = IdealPointCalculator::compute(&weighted, input.impacts());
        let separations = DistanceScorer::separations(&weighted, &ideal);
        let scores = DistanceScorer::scores(&separations);

        for (alternative, score) in input.matrix().alternatives().iter().zip(&scores) {
            if score.is_none() {
                let alternative = alternative.identifier.clone();
                self.tolerate(Degeneracy::UndefinedScore { alternative }, &mut degeneracies)?;
            }
        }

        let policy = self.options.ranking_method.policy();
        let ranks = RankAssigner::assign(&scores, policy);

        Ok(TopsisEvaluation {
            normalized,
            weighted,
            ideal,
            separations,
            scores,
            ranks,
            ranking_method: policy.method(),
            degeneracies,
        })
    }

    fn tolerate(
        &self,
        degeneracy: Degeneracy,
        tolerated: &mut Vec<Degeneracy>,
    ) -> Result<(), TopsisError> {
        match self.options.degenerate_policy {
            DegeneratePolicy::Reject => Err(degeneracy.into()),
            DegeneratePolicy::Propagate => {
                tolerated.push(degeneracy);
                Ok(())
            }
        }
    }
}
