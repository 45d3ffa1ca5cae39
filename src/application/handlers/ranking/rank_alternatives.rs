//! RankAlternativesHandler - Command handler for ranking a table of alternatives.
//!
//! Validates the raw input, runs the TOPSIS pipeline with the configured
//! policies and returns the evaluation together with the output table and a
//! serializable report.

use tracing::{debug, info, info_span, warn};

use crate::config::EngineConfig;
use crate::domain::foundation::TopsisError;
use crate::domain::topsis::{
    InputValidator, RankingReport, RawTable, ResultTable, TopsisEvaluation, TopsisEvaluator,
    ValidatedInput,
};

/// Message logged once a table has been ranked.
pub const COMPLETION_MESSAGE: &str = "TOPSIS calculation completed successfully.";

/// Command to rank the alternatives of a table.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    /// Identifier column followed by criterion columns.
    pub table: RawTable,
    /// Comma-separated weights, one per criterion.
    pub weights: String,
    /// Comma-separated `+`/`-` impacts, one per criterion.
    pub impacts: String,
}

impl RankAlternativesCommand {
    pub fn new(table: RawTable, weights: impl Into<String>, impacts: impl Into<String>) -> Self {
        Self {
            table,
            weights: weights.into(),
            impacts: impacts.into(),
        }
    }
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    /// Validated input the evaluation ran on.
    pub input: ValidatedInput,
    /// All intermediate and final values.
    pub evaluation: TopsisEvaluation,
    /// Input table with `Topsis Score` and `Rank` appended.
    pub table: ResultTable,
    /// Summary for callers and logs.
    pub report: RankingReport,
}

/// Handles ranking commands.
///
/// Stateless apart from its configuration; every call computes from scratch.
pub struct RankAlternativesHandler {
    evaluator: TopsisEvaluator,
    score_precision: Option<usize>,
}

impl RankAlternativesHandler {
    /// Creates a new RankAlternativesHandler.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            evaluator: TopsisEvaluator::new(config.evaluation_options()),
            score_precision: config.score_precision,
        }
    }

    /// Validates and ranks the command's table.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or `DegenerateInput` when the
    /// configured policy rejects degenerate input. No output is produced on
    /// error.
    pub fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, TopsisError> {
        let span = info_span!(
            "topsis.rank",
            rows = cmd.table.row_count(),
            columns = cmd.table.column_count()
        );
        let _entered = span.enter();

        let input = InputValidator::validate(&cmd.table, &cmd.weights, &cmd.impacts)
            .map_err(|err| {
                warn!(code = %err.code(), error = %err, "Input validation failed");
                err
            })?;

        let evaluation = self.evaluate(&input)?;
        let table = ResultTable::assemble(&cmd.table, &evaluation, self.score_precision);
        let report = RankingReport::from_evaluation(input.matrix(), &evaluation);

        info!(
            evaluation_id = %report.evaluation_id,
            best = ?report.best_alternative,
            "{}",
            COMPLETION_MESSAGE
        );

        Ok(RankAlternativesResult {
            input,
            evaluation,
            table,
            report,
        })
    }

    /// Runs the pipeline on input that is already typed and validated.
    pub fn evaluate(&self, input: &ValidatedInput) -> Result<TopsisEvaluation, TopsisError> {
        let options = self.evaluator.options();
        debug!(
            alternatives = input.matrix().alternative_count(),
            criteria = input.matrix().criterion_count(),
            ranking_method = %options.ranking_method,
            degenerate_policy = ?options.degenerate_policy,
            "Evaluating decision matrix"
        );

        let evaluation = self.evaluator.evaluate(input).map_err(|err| {
            warn!(code = %err.code(), error = %err, "Evaluation rejected");
            err
        })?;

        debug!(norms = ?evaluation.normalized.norms(), "Normalized columns");
        debug!(best = ?evaluation.ideal.best, worst = ?evaluation.ideal.worst, "Derived ideal points");
        debug!(scores = ?evaluation.scores, ranks = ?evaluation.ranks, "Scored alternatives");

        for degeneracy in &evaluation.degeneracies {
            warn!(%degeneracy, "Propagating degenerate input");
        }

        Ok(evaluation)
    }
}
