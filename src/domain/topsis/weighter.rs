//! Weighter - Scales normalized columns by their weights.

use serde::{Deserialize, Serialize};

use super::{NormalizedMatrix, WeightVector};

/// Normalized matrix scaled column-wise by the weight vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightedMatrix {
    rows: Vec<Vec<f64>>,
}

impl WeightedMatrix {
    /// Weighted rows in alternative order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of criteria, zero when there are no rows.
    pub fn criterion_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Iterates over one criterion column, top to bottom.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[criterion])
    }
}

/// Elementwise weighting.
pub struct Weighter;

impl Weighter {
    /// Computes `normalized[i][j] * weight[j]`. Weights are not rescaled.
    pub fn apply(normalized: &NormalizedMatrix, weights: &WeightVector) -> WeightedMatrix {
        let rows = normalized
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.as_slice())
                    .map(|(value, weight)| value * weight)
                    .collect()
            })
            .collect();

        WeightedMatrix { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{DecisionMatrix, Normalizer};

    fn normalized() -> NormalizedMatrix {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["C1", "C2"])
            .alternative("A", vec![3.0, 1.0])
            .alternative("B", vec![4.0, 1.0])
            .build()
            .unwrap();
        Normalizer::normalize(&matrix)
    }

    #[test]
    fn weights_scale_each_column() {
        let weights = WeightVector::try_new(vec![2.0, 0.5]).unwrap();
        let weighted = Weighter::apply(&normalized(), &weights);

        assert!((weighted.rows()[0][0] - 1.2).abs() < 1e-12);
        assert!((weighted.rows()[1][0] - 1.6).abs() < 1e-12);
        assert!((weighted.rows()[0][1] - 0.5 / 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_weight_removes_criterion() {
        let weights = WeightVector::try_new(vec![0.0, 1.0]).unwrap();
        let weighted = Weighter::apply(&normalized(), &weights);

        assert!(weighted.column(0).all(|value| value == 0.0));
    }

    #[test]
    fn weights_are_not_normalized() {
        let unit = Weighter::apply(&normalized(), &WeightVector::try_new(vec![1.0, 1.0]).unwrap());
        let tenfold =
            Weighter::apply(&normalized(), &WeightVector::try_new(vec![10.0, 10.0]).unwrap());

        for (a, b) in unit.column(0).zip(tenfold.column(0)) {
            assert!((b - 10.0 * a).abs() < 1e-12);
        }
        assert_eq!(tenfold.criterion_count(), 2);
    }
}
