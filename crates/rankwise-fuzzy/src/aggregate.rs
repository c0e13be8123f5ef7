#![forbid(unsafe_code)]

//! Group aggregation of linguistic judgments from several decision makers.

use rankwise_core::Precision;
use serde::{Deserialize, Serialize};

use crate::error::FuzzyError;
use crate::number::FuzzyNumber;
use crate::scale::LinguisticScale;

/// How the decision makers' fuzzy numbers are combined per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationRule {
    /// Minimum of the first component, mean of the interior components and
    /// maximum of the last component.
    #[default]
    Envelope,
    /// Mean of every component.
    Mean,
}

impl AggregationRule {
    fn combine<const N: usize>(self, numbers: &[FuzzyNumber<N>]) -> [f64; N] {
        let k = numbers.len() as f64;
        let mut out = [0.0; N];
        for (c, slot) in out.iter_mut().enumerate() {
            *slot = numbers.iter().map(|x| x.components()[c]).sum::<f64>() / k;
        }
        if self == Self::Envelope && N > 0 {
            out[0] = numbers
                .iter()
                .map(FuzzyNumber::lower)
                .fold(f64::INFINITY, f64::min);
            out[N - 1] = numbers
                .iter()
                .map(FuzzyNumber::upper)
                .fold(f64::NEG_INFINITY, f64::max);
        }
        out
    }
}

/// Aggregate each row of labels into one fuzzy number.
///
/// `judgments[row]` holds one label per decision maker; every row must carry
/// exactly `decision_makers` labels. Components are rounded to `precision`.
pub fn aggregate<const N: usize, S: AsRef<str>>(
    scale: &LinguisticScale<N>,
    judgments: &[Vec<S>],
    decision_makers: usize,
    rule: AggregationRule,
    precision: Precision,
) -> Result<Vec<FuzzyNumber<N>>, FuzzyError> {
    if decision_makers == 0 {
        return Err(FuzzyError::NoDecisionMakers);
    }
    judgments
        .iter()
        .enumerate()
        .map(|(row, labels)| {
            if labels.len() != decision_makers {
                return Err(FuzzyError::JudgmentShape {
                    row,
                    expected: decision_makers,
                    actual: labels.len(),
                });
            }
            let numbers = labels
                .iter()
                .map(|label| scale.get(label.as_ref()).copied())
                .collect::<Result<Vec<_>, _>>()?;
            FuzzyNumber::new(rule.combine(&numbers)).map(|n| n.rounded(precision))
        })
        .collect()
}
