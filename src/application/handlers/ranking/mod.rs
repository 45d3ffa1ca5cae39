//! Ranking command handlers.

mod rank_alternatives;

pub use rank_alternatives::{
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
    COMPLETION_MESSAGE,
};
