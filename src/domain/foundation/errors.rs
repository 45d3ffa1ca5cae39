//! Error types for the domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric conditions under which a TOPSIS score is undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum Degeneracy {
    #[error("criterion '{criterion}' has a zero or non-finite column norm")]
    ZeroNormColumn { criterion: String },

    #[error("alternative '{alternative}' has an undefined score: its distances to both ideal points sum to zero or are non-finite")]
    UndefinedScore { alternative: String },
}

/// Errors produced while validating input or evaluating a decision matrix.
///
/// Every variant is fatal to the run. Callers decide how to report it; the
/// library never terminates the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopsisError {
    #[error("Input table must contain three or more columns with at least one data row: {reason}")]
    Schema { reason: String },

    #[error("Row {row}, column '{column}': '{value}' is not a finite number. From 2nd to last columns must contain numeric values only")]
    NumericCoercion {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Number of weights ({weights}), impacts ({impacts}) and numeric columns ({criteria}) must be the same")]
    CountMismatch {
        weights: usize,
        impacts: usize,
        criteria: usize,
    },

    #[error("Impact '{token}' is invalid. Impacts must be either '+' or '-'")]
    ImpactSymbol { token: String },

    #[error("Weight '{token}' is invalid. Weights must be non-negative numbers separated by comma")]
    WeightFormat { token: String },

    #[error("Degenerate input: {0}")]
    DegenerateInput(Degeneracy),
}

impl TopsisError {
    /// Creates a schema error.
    pub fn schema(reason: impl Into<String>) -> Self {
        TopsisError::Schema {
            reason: reason.into(),
        }
    }

    /// Creates a numeric coercion error. `row` is 1-based.
    pub fn numeric_coercion(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        TopsisError::NumericCoercion {
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Creates a count mismatch error.
    pub fn count_mismatch(weights: usize, impacts: usize, criteria: usize) -> Self {
        TopsisError::CountMismatch {
            weights,
            impacts,
            criteria,
        }
    }

    /// Creates an impact symbol error.
    pub fn impact_symbol(token: impl Into<String>) -> Self {
        TopsisError::ImpactSymbol {
            token: token.into(),
        }
    }

    /// Creates a weight format error.
    pub fn weight_format(token: impl Into<String>) -> Self {
        TopsisError::WeightFormat {
            token: token.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::Schema { .. } => ErrorCode::SchemaError,
            TopsisError::NumericCoercion { .. } => ErrorCode::NumericCoercionError,
            TopsisError::CountMismatch { .. } => ErrorCode::CountMismatchError,
            TopsisError::ImpactSymbol { .. } => ErrorCode::ImpactSymbolError,
            TopsisError::WeightFormat { .. } => ErrorCode::WeightFormatError,
            TopsisError::DegenerateInput(_) => ErrorCode::DegenerateInputError,
        }
    }

    /// Process exit code a command-line front end should use for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Returns true if the error was raised by input validation.
    pub fn is_validation(&self) -> bool {
        !matches!(self, TopsisError::DegenerateInput(_))
    }
}

impl From<Degeneracy> for TopsisError {
    fn from(degeneracy: Degeneracy) -> Self {
        TopsisError::DegenerateInput(degeneracy)
    }
}

/// Error codes for every failure the ranker can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    SchemaError,
    NumericCoercionError,
    CountMismatchError,
    ImpactSymbolError,
    WeightFormatError,
    DegenerateInputError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::SchemaError => "SCHEMA_ERROR",
            ErrorCode::NumericCoercionError => "NUMERIC_COERCION_ERROR",
            ErrorCode::CountMismatchError => "COUNT_MISMATCH_ERROR",
            ErrorCode::ImpactSymbolError => "IMPACT_SYMBOL_ERROR",
            ErrorCode::WeightFormatError => "WEIGHT_FORMAT_ERROR",
            ErrorCode::DegenerateInputError => "DEGENERATE_INPUT_ERROR",
        };
        write!(f, "{}", s)
    }
}
