#![forbid(unsafe_code)]

//! Fixture-driven conformance harness.
//!
//! Each JSON packet under `fixtures/` holds cases that describe a ranking
//! run as data ([`RankingConfig`]) together with the reference scores. The
//! harness replays every case through [`rank_alternatives`] and reports
//! per-case pass/fail. Portfolio cases additionally feed the PROMETHEE II net
//! flows into PROMETHEE V selection.

use rankwise_core::Ranking;
use rankwise_methods::{MethodError, RankingConfig, rank_alternatives};
use rankwise_optimize::{
    BinaryEnumerationSolver, Constraint, OptimizeError, SolveStatus, select_portfolio,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub fixture_root: PathBuf,
}

impl HarnessConfig {
    #[must_use]
    pub fn default_paths() -> Self {
        Self {
            fixture_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures"),
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::default_paths()
    }
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("fixture load failed for {path}: {source}")]
    FixtureIo { path: PathBuf, source: io::Error },
    #[error("fixture parse failed for {path}: {source}")]
    FixtureParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("case config is invalid: {0}")]
    Config(#[from] serde_json::Error),
    #[error("ranking failed: {0}")]
    Method(#[from] MethodError),
    #[error("portfolio selection failed: {0}")]
    Optimize(#[from] OptimizeError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectedRanking {
    /// Scores in alternative (row) order, optionally with the best-first order.
    Scores {
        values: Vec<f64>,
        atol: f64,
        #[serde(default)]
        order: Option<Vec<usize>>,
    },
    /// The run must fail and the error text must contain `contains`.
    Error { contains: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpectedPortfolio {
    pub status: SolveStatus,
    pub selected: Vec<usize>,
    #[serde(default)]
    pub objective: Option<f64>,
    pub atol: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConformanceCase {
    Ranking {
        case_id: String,
        /// Kept as raw JSON so load-time validation failures are case outcomes.
        config: serde_json::Value,
        expected: ExpectedRanking,
    },
    Portfolio {
        case_id: String,
        config: serde_json::Value,
        constraints: Vec<Constraint>,
        expected: ExpectedPortfolio,
    },
}

impl ConformanceCase {
    pub fn case_id(&self) -> &str {
        match self {
            Self::Ranking { case_id, .. } | Self::Portfolio { case_id, .. } => case_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PacketFixture {
    pub packet_id: String,
    pub family: String,
    pub cases: Vec<ConformanceCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseResult {
    pub case_id: String,
    pub passed: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PacketReport {
    pub packet_id: String,
    pub family: String,
    pub case_results: Vec<CaseResult>,
    pub passed_cases: usize,
    pub failed_cases: usize,
}

impl PacketReport {
    pub fn all_passed(&self) -> bool {
        self.failed_cases == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.case_results.iter().filter(|case| !case.passed)
    }
}

pub fn load_fixture(path: &Path) -> Result<PacketFixture, HarnessError> {
    let raw = fs::read_to_string(path).map_err(|source| HarnessError::FixtureIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| HarnessError::FixtureParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run_packet(config: &HarnessConfig, fixture_name: &str) -> Result<PacketReport, HarnessError> {
    let fixture = load_fixture(&config.fixture_root.join(fixture_name))?;
    Ok(run_fixture(&fixture))
}

/// Runs every `*.json` packet under the fixture root, in file-name order.
pub fn run_all_packets(config: &HarnessConfig) -> Result<Vec<PacketReport>, HarnessError> {
    let root = &config.fixture_root;
    let entries = fs::read_dir(root).map_err(|source| HarnessError::FixtureIo {
        path: root.clone(),
        source,
    })?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| HarnessError::FixtureIo {
            path: root.clone(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    paths
        .iter()
        .map(|path| load_fixture(path).map(|fixture| run_fixture(&fixture)))
        .collect()
}

pub fn run_fixture(fixture: &PacketFixture) -> PacketReport {
    let case_results: Vec<CaseResult> = fixture.cases.iter().map(run_case).collect();
    let passed_cases = case_results.iter().filter(|r| r.passed).count();
    let failed_cases = case_results.len().saturating_sub(passed_cases);
    PacketReport {
        packet_id: fixture.packet_id.clone(),
        family: fixture.family.clone(),
        case_results,
        passed_cases,
        failed_cases,
    }
}

pub fn run_case(case: &ConformanceCase) -> CaseResult {
    let (passed, message) = match case {
        ConformanceCase::Ranking {
            config, expected, ..
        } => compare_ranking(replay_ranking(config), expected),
        ConformanceCase::Portfolio {
            config,
            constraints,
            expected,
            ..
        } => compare_portfolio(config, constraints, expected),
    };
    CaseResult {
        case_id: case.case_id().to_owned(),
        passed,
        message,
    }
}

/// Parses and runs one ranking config.
pub fn replay_ranking(config: &serde_json::Value) -> Result<Ranking, HarnessError> {
    let config = RankingConfig::deserialize(config)?;
    Ok(rank_alternatives(&config)?)
}

/// Scores of a ranking re-indexed by alternative.
pub fn scores_by_alternative(ranking: &Ranking) -> Vec<f64> {
    let mut scores = vec![f64::NAN; ranking.len()];
    for entry in ranking.entries() {
        scores[entry.alternative] = entry.score;
    }
    scores
}

fn compare_ranking(
    outcome: Result<Ranking, HarnessError>,
    expected: &ExpectedRanking,
) -> (bool, String) {
    match (expected, outcome) {
        (ExpectedRanking::Scores { values, atol, order }, Ok(ranking)) => {
            let actual = scores_by_alternative(&ranking);
            let actual_order = ranking.order_of_alternatives();
            let scores_match = allclose_vec(&actual, values, *atol);
            let order_matches = order.as_ref().is_none_or(|order| *order == actual_order);
            if scores_match && order_matches {
                (true, "scores matched reference".to_owned())
            } else {
                (
                    false,
                    format!(
                        "mismatch: expected scores={values:?}, order={order:?}; got scores={actual:?}, order={actual_order:?}"
                    ),
                )
            }
        }
        (ExpectedRanking::Error { contains }, Err(actual)) => {
            let text = actual.to_string();
            if text.contains(contains.as_str()) {
                (true, "error matched expected contract".to_owned())
            } else {
                (false, format!("mismatch: expected error containing `{contains}`, got `{text}`"))
            }
        }
        (expected, result) => (
            false,
            format!("shape mismatch: expected {expected:?}, got {result:?}"),
        ),
    }
}

fn compare_portfolio(
    config: &serde_json::Value,
    constraints: &[Constraint],
    expected: &ExpectedPortfolio,
) -> (bool, String) {
    let selection = replay_ranking(config).and_then(|ranking| {
        let flows = scores_by_alternative(&ranking);
        Ok(select_portfolio(
            &BinaryEnumerationSolver::default(),
            &flows,
            constraints.iter().cloned(),
        )?)
    });
    match selection {
        Ok(selection) => {
            let objective_matches = match (selection.objective, expected.objective) {
                (Some(actual), Some(wanted)) => (actual - wanted).abs() <= expected.atol,
                (None, None) => true,
                _ => false,
            };
            if selection.status == expected.status
                && selection.selected == expected.selected
                && objective_matches
            {
                (true, "portfolio matched reference".to_owned())
            } else {
                (
                    false,
                    format!(
                        "mismatch: expected {:?} {:?} {:?}; got {:?} {:?} {:?}",
                        expected.status,
                        expected.selected,
                        expected.objective,
                        selection.status,
                        selection.selected,
                        selection.objective
                    ),
                )
            }
        }
        Err(err) => (false, format!("portfolio case failed: {err}")),
    }
}

fn allclose_vec(actual: &[f64], expected: &[f64], atol: f64) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, e)| (a - e).abs() <= atol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book_topsis() -> serde_json::Value {
        json!({
            "matrix": [[8,7,2,1],[5,3,7,5],[7,5,6,4],[9,9,7,3],[11,10,3,7],[6,9,5,4]],
            "weights": [0.4, 0.3, 0.1, 0.2],
            "method": { "method": "topsis" }
        })
    }

    #[test]
    fn ranking_case_passes_on_reference_scores() {
        let case = ConformanceCase::Ranking {
            case_id: "topsis_book".into(),
            config: book_topsis(),
            expected: ExpectedRanking::Scores {
                values: vec![0.387, 0.327, 0.389, 0.617, 0.87, 0.493],
                atol: 1e-9,
                order: Some(vec![4, 3, 5, 2, 0, 1]),
            },
        };
        let result = run_case(&case);
        assert!(result.passed, "{}", result.message);
    }

    #[test]
    fn ranking_case_fails_on_wrong_order() {
        let case = ConformanceCase::Ranking {
            case_id: "topsis_wrong_order".into(),
            config: book_topsis(),
            expected: ExpectedRanking::Scores {
                values: vec![0.387, 0.327, 0.389, 0.617, 0.87, 0.493],
                atol: 1e-9,
                order: Some(vec![0, 1, 2, 3, 4, 5]),
            },
        };
        let result = run_case(&case);
        assert!(!result.passed);
        assert!(result.message.starts_with("mismatch"));
    }

    #[test]
    fn expected_error_that_succeeds_is_a_failure() {
        let case = ConformanceCase::Ranking {
            case_id: "unexpected_success".into(),
            config: book_topsis(),
            expected: ExpectedRanking::Error {
                contains: "weight".into(),
            },
        };
        let result = run_case(&case);
        assert!(!result.passed);
        assert!(result.message.starts_with("shape mismatch"));
    }

    #[test]
    fn scores_reindexed_by_alternative() {
        let ranking = Ranking::from_scores(&[0.2, 0.9, 0.5], rankwise_core::ScoreOrder::HigherIsBetter)
            .expect("finite scores");
        assert_eq!(scores_by_alternative(&ranking), vec![0.2, 0.9, 0.5]);
    }

    #[test]
    fn missing_fixture_reports_path() {
        let err = load_fixture(Path::new("/nonexistent/packet.json")).unwrap_err();
        assert!(matches!(err, HarnessError::FixtureIo { .. }));
        assert!(err.to_string().contains("/nonexistent/packet.json"));
    }
}
