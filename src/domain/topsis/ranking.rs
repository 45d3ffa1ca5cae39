//! Rank Assigner - Converts scores into integer ranks under a ranking policy.
//!
//! The tie-break convention is a business rule, so it sits behind the
//! [`RankingPolicy`] trait. The default [`MaxRank`] gives every member of a
//! tie group the position of the group's last member.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy for turning scores into ranks.
///
/// # Contract
///
/// Implementations receive finite scores and return one rank per score,
/// index-aligned with the input. Higher scores must receive smaller ranks,
/// and exactly equal scores must receive equal ranks.
pub trait RankingPolicy: Send + Sync {
    /// Assigns 1-based ranks to `scores`.
    fn assign(&self, scores: &[f64]) -> Vec<usize>;

    /// The method this policy implements.
    fn method(&self) -> RankingMethod;
}

/// Ranking conventions available through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMethod {
    /// Tied scores share the rank of the last position in their group.
    #[default]
    Max,
    /// Tied scores share the rank of the first position in their group.
    Min,
    /// Tie groups are numbered consecutively.
    Dense,
}

impl RankingMethod {
    /// Returns the policy implementing this method.
    pub fn policy(&self) -> &'static dyn RankingPolicy {
        match self {
            RankingMethod::Max => &MaxRank,
            RankingMethod::Min => &MinRank,
            RankingMethod::Dense => &DenseRank,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankingMethod::Max => "max",
            RankingMethod::Min => "min",
            RankingMethod::Dense => "dense",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RankingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(RankingMethod::Max),
            "min" => Ok(RankingMethod::Min),
            "dense" => Ok(RankingMethod::Dense),
            other => Err(format!("unknown ranking method '{}'", other)),
        }
    }
}

/// Count of alternatives scoring at least as well ("max" ranking).
///
/// Sorted scores `[1.0, 0.4, 0.4, 0.1]` rank `[1, 3, 3, 4]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxRank;

impl RankingPolicy for MaxRank {
    fn assign(&self, scores: &[f64]) -> Vec<usize> {
        assign_by_group(scores, |group, _| group.last_position)
    }

    fn method(&self) -> RankingMethod {
        RankingMethod::Max
    }
}

/// Sorted scores `[1.0, 0.4, 0.4, 0.1]` rank `[1, 2, 2, 4]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinRank;

impl RankingPolicy for MinRank {
    fn assign(&self, scores: &[f64]) -> Vec<usize> {
        assign_by_group(scores, |group, _| group.first_position)
    }

    fn method(&self) -> RankingMethod {
        RankingMethod::Min
    }
}

/// Sorted scores `[1.0, 0.4, 0.4, 0.1]` rank `[1, 2, 2, 3]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseRank;

impl RankingPolicy for DenseRank {
    fn assign(&self, scores: &[f64]) -> Vec<usize> {
        assign_by_group(scores, |_, group_number| group_number)
    }

    fn method(&self) -> RankingMethod {
        RankingMethod::Dense
    }
}

/// A run of exactly equal scores in descending order (positions 1-based).
struct TieGroup {
    first_position: usize,
    last_position: usize,
    members: Vec<usize>,
}

fn tie_groups(scores: &[f64]) -> Vec<TieGroup> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut groups = Vec::new();
    let mut start = 0;
    while start < order.len() {
        let value = scores[order[start]];
        let mut end = start + 1;
        while end < order.len() && scores[order[end]] == value {
            end += 1;
        }
        groups.push(TieGroup {
            first_position: start + 1,
            last_position: end,
            members: order[start..end].to_vec(),
        });
        start = end;
    }
    groups
}

fn assign_by_group(scores: &[f64], rank_of: impl Fn(&TieGroup, usize) -> usize) -> Vec<usize> {
    let mut ranks = vec![0; scores.len()];
    for (index, group) in tie_groups(scores).iter().enumerate() {
        let rank = rank_of(group, index + 1);
        for &member in &group.members {
            ranks[member] = rank;
        }
    }
    ranks
}

/// Applies a ranking policy to possibly-undefined scores.
pub struct RankAssigner;

impl RankAssigner {
    /// Ranks every defined score; undefined scores stay unranked.
    ///
    /// Undefined entries do not count towards the ranks of the others. The
    /// output is index-aligned with `scores`.
    pub fn assign(scores: &[Option<f64>], policy: &dyn RankingPolicy) -> Vec<Option<usize>> {
        let (indexes, defined): (Vec<usize>, Vec<f64>) = scores
            .iter()
            .enumerate()
            .filter_map(|(index, score)| score.filter(|s| s.is_finite()).map(|s| (index, s)))
            .unzip();

        let mut ranks = vec![None; scores.len()];
        for (index, rank) in indexes.into_iter().zip(policy.assign(&defined)) {
            ranks[index] = Some(rank);
        }
        ranks
    }
}
