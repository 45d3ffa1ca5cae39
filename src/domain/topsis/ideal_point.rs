//! Ideal Point Calculator - Ideal-best and ideal-worst vectors.

use serde::{Deserialize, Serialize};

use super::{Impact, ImpactVector, WeightedMatrix};

/// The best and worst observed weighted value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoint {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Derivation of ideal points from a weighted matrix.
pub struct IdealPointCalculator;

impl IdealPointCalculator {
    /// Picks per-criterion extremes according to each impact direction.
    ///
    /// Beneficial criteria take the column maximum as best; cost criteria take
    /// the column minimum. A column containing NaN yields NaN for both.
    pub fn compute(weighted: &WeightedMatrix, impacts: &ImpactVector) -> IdealPoint {
        let (best, worst) = impacts
            .as_slice()
            .iter()
            .enumerate()
            .map(|(criterion, impact)| {
                let (min, max) = Self::extremes(weighted.column(criterion));
                match impact {
                    Impact::Beneficial => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip();

        IdealPoint { best, worst }
    }

    fn extremes(values: impl Iterator<Item = f64>) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if value.is_nan() {
                return (f64::NAN, f64::NAN);
            }
            min = min.min(value);
            max = max.max(value);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{DecisionMatrix, Normalizer, WeightVector, Weighter};

    fn weighted(rows: Vec<(&str, Vec<f64>)>) -> WeightedMatrix {
        let mut builder = DecisionMatrix::builder().criteria(vec!["C1", "C2"]);
        for (id, values) in rows {
            builder = builder.alternative(id, values);
        }
        let matrix = builder.build().unwrap();
        let weights = WeightVector::try_new(vec![1.0, 1.0]).unwrap();
        Weighter::apply(&Normalizer::normalize(&matrix), &weights)
    }

    #[test]
    fn beneficial_best_is_max() {
        let w = weighted(vec![("A", vec![1.0, 2.0]), ("B", vec![2.0, 1.0]), ("C", vec![3.0, 3.0])]);
        let impacts = ImpactVector::new(vec![Impact::Beneficial, Impact::Beneficial]);
        let ideal = IdealPointCalculator::compute(&w, &impacts);

        assert!((ideal.best[0] - w.rows()[2][0]).abs() < 1e-12);
        assert!((ideal.worst[0] - w.rows()[0][0]).abs() < 1e-12);
        assert!((ideal.best[1] - w.rows()[2][1]).abs() < 1e-12);
        assert!((ideal.worst[1] - w.rows()[1][1]).abs() < 1e-12);
    }

    #[test]
    fn cost_best_is_min() {
        let w = weighted(vec![("A", vec![1.0, 2.0]), ("B", vec![2.0, 1.0]), ("C", vec![3.0, 3.0])]);
        let impacts = ImpactVector::new(vec![Impact::Cost, Impact::Beneficial]);
        let ideal = IdealPointCalculator::compute(&w, &impacts);

        assert!((ideal.best[0] - w.rows()[0][0]).abs() < 1e-12);
        assert!((ideal.worst[0] - w.rows()[2][0]).abs() < 1e-12);
    }

    #[test]
    fn single_alternative_best_equals_worst() {
        let w = weighted(vec![("A", vec![1.0, 2.0])]);
        let impacts = ImpactVector::new(vec![Impact::Beneficial, Impact::Cost]);
        let ideal = IdealPointCalculator::compute(&w, &impacts);
        assert_eq!(ideal.best, ideal.worst);
    }

    #[test]
    fn nan_column_propagates() {
        let w = weighted(vec![("A", vec![0.0, 2.0]), ("B", vec![0.0, 1.0])]);
        let impacts = ImpactVector::new(vec![Impact::Beneficial, Impact::Beneficial]);
        let ideal = IdealPointCalculator::compute(&w, &impacts);

        assert!(ideal.best[0].is_nan());
        assert!(ideal.worst[0].is_nan());
        assert!(ideal.best[1].is_finite());
    }
}
