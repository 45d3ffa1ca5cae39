//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
    COMPLETION_MESSAGE,
};
