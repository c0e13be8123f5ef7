#![forbid(unsafe_code)]

//! Revised Simos (Simos–Roy–Figueira) criterion weighting.
//!
//! The decision maker orders criterion cards from least to most important,
//! placing criteria of equal importance on the same rank and inserting blank
//! cards to widen the gap between consecutive ranks. With `z` the ratio
//! between the most and least important rank and `e_r = 1 + blanks after
//! rank r`, the unit is `u = (z − 1) / Σ e_r` and rank `r` scores
//! `k_r = 1 + u Σ_{s<r} e_s`. A criterion's weight is its `k` over the sum of
//! all criteria's `k`.

use std::collections::BTreeSet;

use rankwise_core::{Precision, Weights};
use serde::{Deserialize, Serialize};

use crate::error::MethodError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimosCard {
    /// One rank: criteria of equal importance.
    Criteria(Vec<String>),
    Blank,
}

impl SimosCard {
    pub fn criteria<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Criteria(names.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimosWeight {
    pub criterion: String,
    /// One-based rank, 1 = least important.
    pub rank: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimosResult {
    /// `u`.
    pub unit: f64,
    /// `k_r` per rank, least important first.
    pub rank_values: Vec<f64>,
    /// In card order.
    pub weights: Vec<SimosWeight>,
}

impl SimosResult {
    #[must_use]
    pub fn weight_of(&self, criterion: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|w| w.criterion == criterion)
            .map(|w| w.weight)
    }

    /// Weights arranged in the given criterion order, ready for a method.
    pub fn to_weights(&self, order: &[&str]) -> Result<Weights, MethodError> {
        let values = order
            .iter()
            .map(|name| {
                self.weight_of(name).ok_or_else(|| MethodError::SimosLayout {
                    reason: format!("criterion `{name}` has no card"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Weights::new(values)?)
    }
}

pub fn revised_simos(
    cards: &[SimosCard],
    z: f64,
    precision: Precision,
) -> Result<SimosResult, MethodError> {
    if !(z.is_finite() && z >= 1.0) {
        return Err(MethodError::InvalidSimosRatio { z });
    }
    let layout_error = |reason: &str| MethodError::SimosLayout {
        reason: reason.to_owned(),
    };
    if matches!(cards.first(), Some(SimosCard::Blank))
        || matches!(cards.last(), Some(SimosCard::Blank))
    {
        return Err(layout_error("blank cards must sit between two ranks"));
    }

    // Ranks with the spacing e_r that follows each of them.
    let mut ranks: Vec<(&[String], usize)> = Vec::new();
    let mut seen = BTreeSet::new();
    for card in cards {
        match card {
            SimosCard::Blank => {
                if let Some((_, spacing)) = ranks.last_mut() {
                    *spacing += 1;
                }
            }
            SimosCard::Criteria(names) => {
                if names.is_empty() {
                    return Err(layout_error("a rank must hold at least one criterion"));
                }
                for name in names {
                    if !seen.insert(name.as_str()) {
                        return Err(MethodError::SimosLayout {
                            reason: format!("criterion `{name}` appears more than once"),
                        });
                    }
                }
                ranks.push((names.as_slice(), 1));
            }
        }
    }
    if ranks.is_empty() {
        return Err(layout_error("no criteria"));
    }

    let gaps: usize = ranks[..ranks.len() - 1].iter().map(|(_, e)| e).sum();
    let unit = if gaps == 0 {
        0.0
    } else {
        (z - 1.0) / gaps as f64
    };
    let mut rank_values = Vec::with_capacity(ranks.len());
    let mut offset = 0usize;
    for (_, spacing) in &ranks {
        rank_values.push(1.0 + unit * offset as f64);
        offset += spacing;
    }
    let total: f64 = ranks
        .iter()
        .zip(&rank_values)
        .map(|((names, _), k)| k * names.len() as f64)
        .sum();

    let weights = ranks
        .iter()
        .zip(&rank_values)
        .enumerate()
        .flat_map(|(r, ((names, _), &k))| {
            names.iter().map(move |name| SimosWeight {
                criterion: name.clone(),
                rank: r + 1,
                weight: precision.apply(k / total),
            })
        })
        .collect();

    Ok(SimosResult {
        unit,
        rank_values,
        weights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_cards() -> Vec<SimosCard> {
        vec![
            SimosCard::criteria(["b", "d"]),
            SimosCard::criteria(["c"]),
            SimosCard::Blank,
            SimosCard::criteria(["e", "f", "h"]),
            SimosCard::Blank,
            SimosCard::Blank,
            SimosCard::criteria(["a", "g"]),
        ]
    }

    #[test]
    fn book_example() {
        let result = revised_simos(&book_cards(), 6.5, Precision::Full).expect("valid layout");
        assert!((result.unit - 5.5 / 6.0).abs() < 1e-12);
        let expected_k = [1.0, 1.0 + 5.5 / 6.0, 3.75, 6.5];
        for (k, e) in result.rank_values.iter().zip(expected_k) {
            assert!((k - e).abs() < 1e-12, "{k} vs {e}");
        }
        let total = 2.0 + (1.0 + 5.5 / 6.0) + 3.0 * 3.75 + 2.0 * 6.5;
        assert!((result.weight_of("b").expect("ranked") - 1.0 / total).abs() < 1e-12);
        assert!((result.weight_of("a").expect("ranked") - 6.5 / total).abs() < 1e-12);
        let sum: f64 = result.weights.iter().map(|w| w.weight).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn book_example_rounded() {
        let result = revised_simos(&book_cards(), 6.5, Precision::default()).expect("valid");
        assert_eq!(result.weight_of("d"), Some(0.036));
        assert_eq!(result.weight_of("c"), Some(0.068));
        assert_eq!(result.weight_of("f"), Some(0.133));
        assert_eq!(result.weight_of("g"), Some(0.231));
        let weights = result
            .to_weights(&["a", "b", "c", "d", "e", "f", "g", "h"])
            .expect("all ranked");
        assert_eq!(weights.len(), 8);
    }

    #[test]
    fn single_rank_gives_equal_weights() {
        let result = revised_simos(&[SimosCard::criteria(["x", "y"])], 3.0, Precision::Full)
            .expect("valid");
        assert_eq!(result.unit, 0.0);
        assert_eq!(result.weight_of("x"), Some(0.5));
    }

    #[test]
    fn layout_errors() {
        assert!(matches!(
            revised_simos(&[SimosCard::Blank, SimosCard::criteria(["x"])], 2.0, Precision::Full),
            Err(MethodError::SimosLayout { .. })
        ));
        assert!(matches!(
            revised_simos(
                &[SimosCard::criteria(["x"]), SimosCard::criteria(["x"])],
                2.0,
                Precision::Full
            ),
            Err(MethodError::SimosLayout { .. })
        ));
        assert_eq!(
            revised_simos(&[SimosCard::criteria(["x"])], 0.5, Precision::Full),
            Err(MethodError::InvalidSimosRatio { z: 0.5 })
        );
    }
}
