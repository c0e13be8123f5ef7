#![forbid(unsafe_code)]

use rankwise_core::{PipelineError, Precision};
use rankwise_fuzzy::{AggregationRule, FuzzyNumber, LinguisticScale, aggregate};

use crate::error::MethodError;

/// Linguistic input of a group fuzzy decision.
///
/// `weights` has one row per criterion; `ratings` is alternative-major, so
/// row `i * criteria + j` rates alternative `i` on criterion `j`. Every row
/// carries one label per decision maker.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyJudgments<'a, const N: usize, S> {
    pub weight_scale: &'a LinguisticScale<N>,
    pub rating_scale: &'a LinguisticScale<N>,
    pub weights: &'a [Vec<S>],
    pub ratings: &'a [Vec<S>],
    pub decision_makers: usize,
}

/// Aggregated fuzzy weights and the alternatives × criteria fuzzy ratings.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedJudgments<const N: usize> {
    pub weights: Vec<FuzzyNumber<N>>,
    pub ratings: Vec<Vec<FuzzyNumber<N>>>,
}

impl<const N: usize, S: AsRef<str>> FuzzyJudgments<'_, N, S> {
    #[must_use]
    pub fn criteria(&self) -> usize {
        self.weights.len()
    }

    pub fn alternatives(&self) -> Result<usize, MethodError> {
        let criteria = self.criteria();
        if criteria == 0 || self.ratings.is_empty() {
            return Err(PipelineError::EmptyMatrix.into());
        }
        if self.ratings.len() % criteria != 0 {
            return Err(MethodError::RatingLayout {
                ratings: self.ratings.len(),
                criteria,
            });
        }
        Ok(self.ratings.len() / criteria)
    }

    pub fn aggregate(
        &self,
        rule: AggregationRule,
        precision: Precision,
    ) -> Result<AggregatedJudgments<N>, MethodError> {
        let criteria = self.criteria();
        self.alternatives()?;
        let weights = aggregate(
            self.weight_scale,
            self.weights,
            self.decision_makers,
            rule,
            precision,
        )?;
        let flat = aggregate(
            self.rating_scale,
            self.ratings,
            self.decision_makers,
            rule,
            precision,
        )?;
        let ratings = flat.chunks(criteria).map(<[_]>::to_vec).collect();
        Ok(AggregatedJudgments { weights, ratings })
    }
}
