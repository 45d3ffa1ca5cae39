//! Input Validator - Turns a raw table and weight/impact strings into typed input.
//!
//! Checks run in a fixed order and stop at the first failure:
//! schema, numeric cells, counts, impact symbols, weights.

use crate::domain::foundation::TopsisError;

use super::{Alternative, DecisionMatrix, Impact, ImpactVector, RawTable, WeightVector};

/// Separator between weight and impact tokens.
pub const TOKEN_SEPARATOR: char = ',';

/// Fewest columns a table may have, including the identifier column.
pub const MIN_COLUMNS: usize = DecisionMatrix::MIN_CRITERIA + 1;

/// A decision matrix with weight and impact vectors of matching length.
///
/// Only obtainable through [`ValidatedInput::try_new`] or
/// [`InputValidator::validate`], so the lengths always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    matrix: DecisionMatrix,
    weights: WeightVector,
    impacts: ImpactVector,
}

impl ValidatedInput {
    /// Assembles already-typed values, checking that the lengths agree.
    pub fn try_new(
        matrix: DecisionMatrix,
        weights: WeightVector,
        impacts: ImpactVector,
    ) -> Result<Self, TopsisError> {
        InputValidator::check_counts(weights.len(), impacts.len(), matrix.criterion_count())?;
        Ok(Self {
            matrix,
            weights,
            impacts,
        })
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn impacts(&self) -> &ImpactVector {
        &self.impacts
    }
}

/// Validation of caller-supplied input.
pub struct InputValidator;

impl InputValidator {
    /// Validates a raw table together with comma-separated weights and impacts.
    ///
    /// # Errors
    /// - `Schema` - fewer than 3 columns, no rows, or a ragged row
    /// - `NumericCoercion` - a criterion cell is not a finite number
    /// - `CountMismatch` - weight or impact count differs from criterion count
    /// - `ImpactSymbol` - an impact token is not exactly `+` or `-`
    /// - `WeightFormat` - a weight token is not a non-negative number
    pub fn validate(
        table: &RawTable,
        weights: &str,
        impacts: &str,
    ) -> Result<ValidatedInput, TopsisError> {
        let matrix = Self::parse_matrix(table)?;

        let weight_tokens: Vec<&str> = weights.split(TOKEN_SEPARATOR).collect();
        let impact_tokens: Vec<&str> = impacts.split(TOKEN_SEPARATOR).collect();

        Self::check_counts(
            weight_tokens.len(),
            impact_tokens.len(),
            matrix.criterion_count(),
        )?;

        let impacts = Self::parse_impacts(&impact_tokens)?;
        let weights = Self::parse_weights(&weight_tokens)?;

        Ok(ValidatedInput {
            matrix,
            weights,
            impacts,
        })
    }

    /// Parses the numeric part of a raw table.
    pub fn parse_matrix(table: &RawTable) -> Result<DecisionMatrix, TopsisError> {
        let column_count = table.column_count();
        if column_count < MIN_COLUMNS {
            return Err(TopsisError::schema(format!(
                "found {} column(s)",
                column_count
            )));
        }

        if table.rows.is_empty() {
            return Err(TopsisError::schema("no data rows"));
        }

        let criteria: Vec<String> = table.headers.iter().skip(1).cloned().collect();
        let mut alternatives = Vec::with_capacity(table.row_count());

        for (index, row) in table.rows.iter().enumerate() {
            let Some((identifier, cells)) = row.split_first() else {
                return Err(TopsisError::schema(format!("row {} is empty", index + 1)));
            };

            if row.len() != column_count {
                return Err(TopsisError::schema(format!(
                    "row {} has {} column(s), expected {}",
                    index + 1,
                    row.len(),
                    column_count
                )));
            }

            let values = cells
                .iter()
                .zip(&criteria)
                .map(|(cell, criterion)| {
                    Self::parse_cell(cell).ok_or_else(|| {
                        TopsisError::numeric_coercion(index + 1, criterion.clone(), cell.clone())
                    })
                })
                .collect::<Result<Vec<f64>, TopsisError>>()?;

            alternatives.push(Alternative::new(identifier.clone(), values));
        }

        DecisionMatrix::try_new(table.headers[0].clone(), criteria, alternatives)
    }

    /// Checks that weight and impact counts both equal the criterion count.
    pub fn check_counts(
        weights: usize,
        impacts: usize,
        criteria: usize,
    ) -> Result<(), TopsisError> {
        if weights != criteria || impacts != criteria {
            return Err(TopsisError::count_mismatch(weights, impacts, criteria));
        }
        Ok(())
    }

    /// Parses impact tokens. Tokens must be exactly `+` or `-`.
    pub fn parse_impacts(tokens: &[&str]) -> Result<ImpactVector, TopsisError> {
        tokens
            .iter()
            .map(|token| token.parse::<Impact>())
            .collect::<Result<Vec<_>, _>>()
            .map(ImpactVector::new)
    }

    /// Parses weight tokens. Surrounding whitespace is ignored.
    pub fn parse_weights(tokens: &[&str]) -> Result<WeightVector, TopsisError> {
        let mut weights = Vec::with_capacity(tokens.len());
        for token in tokens {
            let weight = token
                .trim()
                .parse::<f64>()
                .map_err(|_| TopsisError::weight_format(*token))?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(TopsisError::weight_format(*token));
            }
            weights.push(weight);
        }
        WeightVector::try_new(weights)
    }

    fn parse_cell(cell: &str) -> Option<f64> {
        cell.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}
