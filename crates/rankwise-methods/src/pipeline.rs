#![forbid(unsafe_code)]

//! Data-driven entry point: one [`RankingConfig`] in, one [`Ranking`] out.

use rankwise_core::{
    DecisionMatrix, Direction, IdealMode, Normalization, Precision, Ranking, RuntimeMode, Weights,
};
use serde::{Deserialize, Serialize};

use crate::error::MethodError;
use crate::preference::PreferenceFunction;
use crate::promethee::{PrometheeOptions, promethee};
use crate::sir::{SirAggregation, SirOptions, SirScore, sir};
use crate::topsis::{TopsisOptions, topsis};
use crate::vikor::{VikorOptions, vikor};

/// Method-specific settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MethodConfig {
    Topsis {
        #[serde(default)]
        normalization: Normalization,
        #[serde(default)]
        ideal: IdealMode,
    },
    Vikor {
        #[serde(default)]
        v: Option<f64>,
    },
    PrometheeIi {
        preference: Vec<PreferenceFunction>,
    },
    Sir {
        preference: Vec<PreferenceFunction>,
        #[serde(default)]
        aggregation: SirAggregation,
        #[serde(default)]
        score: SirScore,
    },
}

impl MethodConfig {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Topsis { .. } => "topsis",
            Self::Vikor { .. } => "vikor",
            Self::PrometheeIi { .. } => "promethee_ii",
            Self::Sir { .. } => "sir",
        }
    }
}

/// A complete ranking run described as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    pub matrix: DecisionMatrix,
    pub weights: Weights,
    /// One per criterion; every criterion is maximized when omitted.
    #[serde(default)]
    pub directions: Option<Vec<Direction>>,
    #[serde(default)]
    pub mode: RuntimeMode,
    #[serde(default = "default_check_finite")]
    pub check_finite: bool,
    #[serde(default)]
    pub precision: Precision,
    pub method: MethodConfig,
}

fn default_check_finite() -> bool {
    true
}

impl RankingConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn resolved_directions(&self) -> Vec<Direction> {
        self.directions
            .clone()
            .unwrap_or_else(|| vec![Direction::Maximize; self.matrix.criteria()])
    }
}

/// Run the configured method and compose its ranking in the method's
/// preferred direction.
pub fn rank_alternatives(config: &RankingConfig) -> Result<Ranking, MethodError> {
    let directions = config.resolved_directions();
    let (matrix, weights) = (&config.matrix, &config.weights);
    let (mode, check_finite, precision) = (config.mode, config.check_finite, config.precision);
    tracing::debug!(
        method = config.method.name(),
        alternatives = matrix.alternatives(),
        criteria = matrix.criteria(),
        "ranking alternatives"
    );

    let ranking = match &config.method {
        MethodConfig::Topsis {
            normalization,
            ideal,
        } => topsis(
            matrix,
            weights,
            &directions,
            TopsisOptions {
                mode,
                check_finite,
                precision,
                normalization: *normalization,
                ideal: *ideal,
            },
        )?
        .ranking()?,
        MethodConfig::Vikor { v } => vikor(
            matrix,
            weights,
            &directions,
            VikorOptions {
                mode,
                check_finite,
                precision,
                v: *v,
            },
        )?
        .ranking()?,
        MethodConfig::PrometheeIi { preference } => promethee(
            matrix,
            weights,
            &directions,
            preference,
            PrometheeOptions {
                mode,
                check_finite,
                precision,
            },
        )?
        .ranking()?,
        MethodConfig::Sir {
            preference,
            aggregation,
            score,
        } => sir(
            matrix,
            weights,
            &directions,
            preference,
            SirOptions {
                mode,
                check_finite,
                precision,
                aggregation: *aggregation,
                score: *score,
            },
        )?
        .ranking()?,
    };
    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankwise_core::ScoreOrder;

    const BOOK: &str = r#"{
        "matrix": [[8,7,2,1],[5,3,7,5],[7,5,6,4],[9,9,7,3],[11,10,3,7],[6,9,5,4]],
        "weights": [0.4, 0.3, 0.1, 0.2],
        "method": { "method": "topsis" }
    }"#;

    #[test]
    fn topsis_from_json_with_defaults() {
        let config = RankingConfig::from_json(BOOK).expect("valid config");
        assert_eq!(config.precision, Precision::Decimals(3));
        assert!(config.check_finite);
        let ranking = rank_alternatives(&config).expect("book example");
        assert_eq!(ranking.order(), ScoreOrder::HigherIsBetter);
        assert_eq!(ranking.order_of_alternatives(), vec![4, 3, 5, 2, 0, 1]);
        assert_eq!(ranking.entries()[0].score, 0.87);
    }

    #[test]
    fn vikor_ranks_lower_first() {
        let mut config = RankingConfig::from_json(BOOK).expect("valid config");
        config.method = MethodConfig::Vikor { v: None };
        let ranking = rank_alternatives(&config).expect("book example");
        assert_eq!(ranking.order(), ScoreOrder::LowerIsBetter);
        assert_eq!(ranking.best().map(|e| e.alternative), Some(4));
        assert_eq!(ranking.best().map(|e| e.score), Some(0.0));
    }

    #[test]
    fn promethee_and_sir_from_json() {
        let promethee_config = r#"{
            "matrix": [[8,7,2,1],[5,3,7,5],[7,5,6,4],[9,9,7,3],[11,10,3,7],[6,9,5,4]],
            "weights": [0.4, 0.3, 0.1, 0.2],
            "directions": ["maximize", "maximize", "maximize", "maximize"],
            "method": {
                "method": "promethee_ii",
                "preference": [
                    {"shape": "linear", "q": 1, "p": 2},
                    {"shape": "linear", "q": 1, "p": 2},
                    {"shape": "linear", "q": 1, "p": 2},
                    {"shape": "linear", "q": 1, "p": 2}
                ]
            }
        }"#;
        let ranking =
            rank_alternatives(&RankingConfig::from_json(promethee_config).expect("valid")).expect("runs");
        assert_eq!(ranking.entries()[0].score, 0.7);

        let sir_config = promethee_config.replace("\"promethee_ii\"", "\"sir\", \"score\": \"ratio\"");
        let ranking =
            rank_alternatives(&RankingConfig::from_json(&sir_config).expect("valid")).expect("runs");
        assert_eq!(ranking.best().map(|e| e.score), Some(0.907));
    }

    #[test]
    fn sir_net_score_ranks_tied_alternatives() {
        let tied = r#"{
            "matrix": [[1, 4], [1, 4], [1, 4]],
            "weights": [0.5, 0.5],
            "method": {
                "method": "sir",
                "preference": [{"shape": "usual"}, {"shape": "usual"}],
                "score": "net"
            }
        }"#;
        let ranking =
            rank_alternatives(&RankingConfig::from_json(tied).expect("valid")).expect("net is defined");
        assert_eq!(ranking.order_of_alternatives(), vec![0, 1, 2]);
        assert!(ranking.entries().iter().all(|e| e.score == 0.0));
    }

    #[test]
    fn invalid_thresholds_fail_at_load_time() {
        let bad = r#"{
            "matrix": [[1,2],[3,4]],
            "weights": [0.5, 0.5],
            "method": { "method": "promethee_ii", "preference": [
                {"shape": "linear", "q": 2, "p": 1},
                {"shape": "usual"}
            ]}
        }"#;
        assert!(RankingConfig::from_json(bad).is_err());
    }

    #[test]
    fn ragged_matrix_fails_at_load_time() {
        let bad = r#"{
            "matrix": [[1,2],[3]],
            "weights": [0.5, 0.5],
            "method": { "method": "vikor" }
        }"#;
        let err = RankingConfig::from_json(bad).expect_err("ragged");
        assert!(err.to_string().contains("equal length"));
    }
}
