//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary of the ranking domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{Degeneracy, ErrorCode, TopsisError};
pub use ids::EvaluationId;
pub use timestamp::Timestamp;
