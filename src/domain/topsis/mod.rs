//! TOPSIS Module - Pure domain services for multi-criteria ranking.
//!
//! # Components
//!
//! - `InputValidator` - Schema, numeric, count and symbol checks
//! - `Normalizer` - Column-wise L2 normalization
//! - `Weighter` - Elementwise scaling by criterion weights
//! - `IdealPointCalculator` - Ideal-best and ideal-worst vectors
//! - `DistanceScorer` - Separation from ideal points and relative closeness
//! - `RankAssigner` - Tie-aware ranks behind a `RankingPolicy`
//! - `TopsisEvaluator` - Runs the stages above in order
//!
//! All functions are pure and stateless. No ports are needed since the
//! computation performs no I/O.

mod decision_matrix;
mod distance_scorer;
mod evaluation;
mod ideal_point;
mod normalizer;
mod ranking;
mod raw_table;
mod report;
mod result_table;
mod validator;
mod weighter;

pub use decision_matrix::{
    Alternative, DecisionMatrix, DecisionMatrixBuilder, Impact, ImpactVector, WeightVector,
    DEFAULT_IDENTIFIER_HEADER,
};
pub use distance_scorer::{DistanceScorer, Separation};
pub use evaluation::{DegeneratePolicy, EvaluationOptions, TopsisEvaluation, TopsisEvaluator};
pub use ideal_point::{IdealPoint, IdealPointCalculator};
pub use normalizer::{NormalizedMatrix, Normalizer};
pub use ranking::{DenseRank, MaxRank, MinRank, RankAssigner, RankingMethod, RankingPolicy};
pub use raw_table::RawTable;
pub use report::{RankedAlternative, RankingReport};
pub use result_table::{format_score, ResultTable, RANK_COLUMN, SCORE_COLUMN};
pub use validator::{InputValidator, ValidatedInput, MIN_COLUMNS, TOKEN_SEPARATOR};
pub use weighter::{WeightedMatrix, Weighter};
