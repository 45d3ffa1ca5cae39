//! Normalizer - Column-wise vector (L2) normalization.

use serde::{Deserialize, Serialize};

use super::DecisionMatrix;

/// Decision matrix with every column divided by its Euclidean norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMatrix {
    norms: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl NormalizedMatrix {
    /// The L2 norm of each raw column.
    pub fn norms(&self) -> &[f64] {
        &self.norms
    }

    /// Normalized rows in alternative order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Indexes of columns whose norm is zero or non-finite.
    ///
    /// Dividing by such a norm does not yield a usable value.
    pub fn degenerate_columns(&self) -> Vec<usize> {
        self.norms
            .iter()
            .enumerate()
            .filter(|(_, norm)| !(norm.is_finite() && **norm > 0.0))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Vector normalization of decision matrices.
pub struct Normalizer;

impl Normalizer {
    /// Computes `sqrt(sum of squares)` for every criterion column.
    ///
    /// Values are scaled by the column's largest magnitude before squaring,
    /// so the norm is zero only for an all-zero column and stays finite for
    /// any finite input.
    pub fn column_norms(matrix: &DecisionMatrix) -> Vec<f64> {
        (0..matrix.criterion_count())
            .map(|criterion| Self::scaled_norm(matrix, criterion))
            .collect()
    }

    fn scaled_norm(matrix: &DecisionMatrix, criterion: usize) -> f64 {
        let scale = matrix
            .column(criterion)
            .fold(0.0_f64, |largest, value| largest.max(value.abs()));
        if scale == 0.0 {
            return 0.0;
        }

        let sum_of_squares: f64 = matrix
            .column(criterion)
            .map(|value| (value / scale).powi(2))
            .sum();
        scale * sum_of_squares.sqrt()
    }

    /// Divides each value by its column norm.
    ///
    /// A zero-norm column produces non-finite values; they are returned as is
    /// and reported through [`NormalizedMatrix::degenerate_columns`].
    pub fn normalize(matrix: &DecisionMatrix) -> NormalizedMatrix {
        let norms = Self::column_norms(matrix);

        let rows = matrix
            .alternatives()
            .iter()
            .map(|alternative| {
                alternative
                    .values
                    .iter()
                    .zip(&norms)
                    .map(|(value, norm)| value / norm)
                    .collect()
            })
            .collect();

        NormalizedMatrix { norms, rows }
    }
}
