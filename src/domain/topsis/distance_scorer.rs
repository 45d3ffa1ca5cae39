//! Distance Scorer - Separation from the ideal points and relative closeness.

use serde::{Deserialize, Serialize};

use super::{IdealPoint, WeightedMatrix};

/// Euclidean distances of one alternative to both ideal points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    pub to_best: f64,
    pub to_worst: f64,
}

impl Separation {
    /// Relative closeness `to_worst / (to_best + to_worst)`.
    ///
    /// Returns `None` when the sum is zero or either distance is not finite,
    /// i.e. when the ratio is undefined.
    pub fn closeness(&self) -> Option<f64> {
        let total = self.to_best + self.to_worst;
        if total > 0.0 && total.is_finite() {
            Some(self.to_worst / total)
        } else {
            None
        }
    }
}

/// Distance and score computation.
pub struct DistanceScorer;

impl DistanceScorer {
    /// Distances of every alternative to the ideal best and ideal worst points.
    pub fn separations(weighted: &WeightedMatrix, ideal: &IdealPoint) -> Vec<Separation> {
        weighted
            .rows()
            .iter()
            .map(|row| Separation {
                to_best: Self::euclidean(row, &ideal.best),
                to_worst: Self::euclidean(row, &ideal.worst),
            })
            .collect()
    }

    /// Scores in alternative order. `None` marks an undefined score.
    pub fn scores(separations: &[Separation]) -> Vec<Option<f64>> {
        separations.iter().map(Separation::closeness).collect()
    }

    fn euclidean(row: &[f64], point: &[f64]) -> f64 {
        row.iter()
            .zip(point)
            .map(|(value, ideal)| (value - ideal).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}
