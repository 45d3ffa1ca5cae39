//! Decision Matrix - Validated alternatives with their weight and impact vectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::TopsisError;

/// Whether higher values of a criterion are desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    Beneficial,
    Cost,
}

impl Impact {
    /// Returns the input symbol for this impact.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Beneficial => "+",
            Impact::Cost => "-",
        }
    }

    /// Returns true for criteria where more is better.
    pub fn is_beneficial(&self) -> bool {
        matches!(self, Impact::Beneficial)
    }
}

impl FromStr for Impact {
    type Err = TopsisError;

    /// Parses `+` or `-`. Any other token, including padded ones, is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Impact::Beneficial),
            "-" => Ok(Impact::Cost),
            other => Err(TopsisError::impact_symbol(other)),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One impact direction per criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Non-negative finite weights, one per criterion.
///
/// Weights are used as given; they are not required to sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = TopsisError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_new(weights)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}

impl WeightVector {
    /// Creates a weight vector, rejecting negative or non-finite weights.
    pub fn try_new(weights: Vec<f64>) -> Result<Self, TopsisError> {
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(TopsisError::weight_format(bad.to_string()));
        }
        Ok(Self(weights))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A candidate being ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Opaque identifier, carried through but never used in computation.
    pub identifier: String,
    /// Criterion values in column order.
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(identifier: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            identifier: identifier.into(),
            values,
        }
    }
}

/// Header used for the identifier column when none is given.
pub const DEFAULT_IDENTIFIER_HEADER: &str = "Alternative";

/// Alternatives by criteria, validated and immutable.
///
/// Invariants: at least [`DecisionMatrix::MIN_CRITERIA`] criteria, at least
/// one alternative, one finite value per criterion in every row.
///
/// Only serialized; a matrix is built through [`DecisionMatrix::try_new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    identifier_header: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Fewest criteria a matrix may have (three columns with the identifier).
    pub const MIN_CRITERIA: usize = 2;

    /// Creates a matrix, checking every invariant.
    ///
    /// # Errors
    /// - `Schema` if there are too few criteria, no alternatives, or a row
    ///   of the wrong width
    /// - `NumericCoercion` if a value is NaN or infinite
    pub fn try_new(
        identifier_header: impl Into<String>,
        criteria: Vec<String>,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, TopsisError> {
        if criteria.len() < Self::MIN_CRITERIA {
            return Err(TopsisError::schema(format!(
                "found {} column(s)",
                criteria.len() + 1
            )));
        }

        if alternatives.is_empty() {
            return Err(TopsisError::schema("no alternatives to rank"));
        }

        for (index, alternative) in alternatives.iter().enumerate() {
            if alternative.values.len() != criteria.len() {
                return Err(TopsisError::schema(format!(
                    "row {} has {} column(s), expected {}",
                    index + 1,
                    alternative.values.len() + 1,
                    criteria.len() + 1
                )));
            }

            for (value, criterion) in alternative.values.iter().zip(&criteria) {
                if !value.is_finite() {
                    return Err(TopsisError::numeric_coercion(
                        index + 1,
                        criterion.clone(),
                        value.to_string(),
                    ));
                }
            }
        }

        Ok(Self {
            identifier_header: identifier_header.into(),
            criteria,
            alternatives,
        })
    }

    /// Starts building a matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::default()
    }

    /// Header of the identifier column.
    pub fn identifier_header(&self) -> &str {
        &self.identifier_header
    }

    /// Criterion names in column order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Alternatives in input order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Iterates over the values of one criterion, top to bottom.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.alternatives
            .iter()
            .map(move |alternative| alternative.values[criterion])
    }
}

/// Builder for [`DecisionMatrix`].
#[derive(Debug)]
pub struct DecisionMatrixBuilder {
    identifier_header: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl Default for DecisionMatrixBuilder {
    fn default() -> Self {
        Self {
            identifier_header: DEFAULT_IDENTIFIER_HEADER.to_string(),
            criteria: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}

impl DecisionMatrixBuilder {
    /// Names the identifier column.
    pub fn identifier_header(mut self, header: impl Into<String>) -> Self {
        self.identifier_header = header.into();
        self
    }

    /// Sets the criterion names.
    pub fn criteria(mut self, criteria: Vec<impl Into<String>>) -> Self {
        self.criteria = criteria.into_iter().map(Into::into).collect();
        self
    }

    /// Appends an alternative.
    pub fn alternative(mut self, identifier: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push(Alternative::new(identifier, values));
        self
    }

    /// Validates and builds the matrix.
    pub fn build(self) -> Result<DecisionMatrix, TopsisError> {
        DecisionMatrix::try_new(self.identifier_header, self.criteria, self.alternatives)
    }
}
