#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Which end of a score vector is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOrder {
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// Zero-based row index in the decision matrix.
    pub alternative: usize,
    pub score: f64,
    /// One-based competition rank; equal scores share a rank.
    pub rank: usize,
}

/// Alternatives ordered best first.
///
/// Ties keep their original row order and share the same rank, so the
/// result is a total preorder over alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    order: ScoreOrder,
    entries: Vec<RankedAlternative>,
}

impl Ranking {
    /// Fails on the first NaN or infinite score.
    pub fn from_scores(scores: &[f64], order: ScoreOrder) -> Result<Self, PipelineError> {
        if let Some(alternative) = scores.iter().position(|s| !s.is_finite()) {
            return Err(PipelineError::NonFiniteScore { alternative });
        }
        let mut indices: Vec<usize> = (0..scores.len()).collect();
        indices.sort_by(|&a, &b| match order {
            ScoreOrder::HigherIsBetter => scores[b].total_cmp(&scores[a]),
            ScoreOrder::LowerIsBetter => scores[a].total_cmp(&scores[b]),
        });

        let mut entries: Vec<RankedAlternative> = Vec::with_capacity(indices.len());
        for (position, alternative) in indices.into_iter().enumerate() {
            let score = scores[alternative];
            let rank = match entries.last() {
                Some(prev) if prev.score == score => prev.rank,
                _ => position + 1,
            };
            entries.push(RankedAlternative {
                alternative,
                score,
                rank,
            });
        }
        Ok(Self { order, entries })
    }

    #[must_use]
    pub const fn order(&self) -> ScoreOrder {
        self.order
    }

    #[must_use]
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    #[must_use]
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    #[must_use]
    pub fn rank_of(&self, alternative: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.alternative == alternative)
            .map(|entry| entry.rank)
    }

    /// Alternative indices, best first.
    #[must_use]
    pub fn order_of_alternatives(&self) -> Vec<usize> {
        self.entries.iter().map(|entry| entry.alternative).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
