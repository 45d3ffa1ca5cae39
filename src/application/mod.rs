//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations: it validates caller input,
//! runs the ranking pipeline and shapes the results for the caller.

pub mod handlers;

pub use handlers::{
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
    COMPLETION_MESSAGE,
};
