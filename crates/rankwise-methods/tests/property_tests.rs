//! Property tests for the rankwise-methods ranking pipeline.
//!
//! Convention: test_{module}_{function}_{scenario}
//!
//! Reproduce: `PROPTEST_SEED=<seed> cargo test -p rankwise-methods --test property_tests`

use proptest::prelude::*;
use rankwise_core::{DecisionMatrix, Direction, IdealMode, Normalization, Precision, Weights};
use rankwise_methods::{
    MethodConfig, MethodError, PreferenceFunction, PreferenceShape, RankingConfig,
    SirAggregation, SirScore, rank_alternatives,
};

fn problem() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, Vec<Direction>)> {
    (2usize..9, 1usize..6).prop_flat_map(|(m, n)| {
        (
            proptest::collection::vec(proptest::collection::vec(1.0f64..100.0, n), m),
            proptest::collection::vec(0.01f64..1.0, n),
            proptest::collection::vec(
                prop_oneof![Just(Direction::Maximize), Just(Direction::Minimize)],
                n,
            ),
        )
    })
}

fn method(criteria: usize) -> impl Strategy<Value = MethodConfig> {
    let linear = PreferenceFunction::new(PreferenceShape::Linear, 1.0, 10.0).expect("valid");
    prop_oneof![
        (
            prop_oneof![Just(Normalization::Vector), Just(Normalization::Linear)],
            prop_oneof![Just(IdealMode::Relative), Just(IdealMode::Absolute)],
        )
            .prop_map(|(normalization, ideal)| MethodConfig::Topsis {
                normalization,
                ideal
            }),
        Just(MethodConfig::Vikor { v: None }),
        Just(MethodConfig::PrometheeIi {
            preference: vec![linear; criteria]
        }),
        (1.0f64..4.0, any::<bool>()).prop_map(move |(exponent, ratio)| MethodConfig::Sir {
            preference: vec![PreferenceFunction::usual(); criteria],
            aggregation: SirAggregation::Topsis { exponent },
            score: if ratio { SirScore::Ratio } else { SirScore::Net },
        }),
    ]
}

// ═══════════════════════════════════════════════════════════════
// Property 1: every method yields a best-first permutation of the alternatives
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_pipeline_rank_alternatives_is_a_sorted_permutation(
        ((rows, w, directions), config) in problem().prop_flat_map(|p| {
            let criteria = p.1.len();
            (Just(p), method(criteria))
        }),
    ) {
        let m = rows.len();
        let config = RankingConfig {
            matrix: DecisionMatrix::new(rows).expect("valid shape"),
            weights: Weights::new(w).expect("positive"),
            directions: Some(directions),
            mode: Default::default(),
            check_finite: true,
            precision: Precision::default(),
            method: config,
        };
        match rank_alternatives(&config) {
            Ok(ranking) => {
                let mut seen = ranking.order_of_alternatives();
                seen.sort_unstable();
                prop_assert_eq!(seen, (0..m).collect::<Vec<_>>());
                let entries = ranking.entries();
                for pair in entries.windows(2) {
                    prop_assert!(pair[0].rank <= pair[1].rank);
                }
                prop_assert_eq!(entries[0].rank, 1);
            }
            // Random matrices may collapse a range (e.g. every S_i equal).
            Err(err) => prop_assert!(
                matches!(err, MethodError::Pipeline(_)),
                "unexpected error {err:?}"
            ),
        }
    }
}
