//! Property tests for rankwise-optimize portfolio selection.
//!
//! Convention: test_{module}_{function}_{scenario}
//!
//! Seed replay: `PROPTEST_CASES=1000 cargo test -p rankwise-optimize --test property_tests`

use proptest::prelude::*;
use rankwise_optimize::{
    BinaryEnumerationSolver, Constraint, SolveStatus, Solver, portfolio_model, resource_usage,
    select_portfolio, selection_sum,
};

fn distinct_flows() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::btree_set(-1000i32..1000, 2..10)
        .prop_map(|set| set.into_iter().map(|v| f64::from(v) / 1000.0).collect::<Vec<_>>())
        .prop_shuffle()
}

// ═══════════════════════════════════════════════════════════════
// Property 1: a pure cardinality constraint selects the k largest flows
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_portfolio_select_cardinality_takes_top_flows(
        flows in distinct_flows(),
        k_seed in 0usize..100,
    ) {
        let k = k_seed % (flows.len() + 1);
        let selection = select_portfolio(
            &BinaryEnumerationSolver::default(),
            &flows,
            [Constraint::equal("cardinality", selection_sum(0..flows.len()), k as f64)],
        )
        .expect("cardinality model is valid");

        let mut by_flow: Vec<usize> = (0..flows.len()).collect();
        by_flow.sort_by(|&a, &b| flows[b].total_cmp(&flows[a]));
        let mut expected: Vec<usize> = by_flow.into_iter().take(k).collect();
        expected.sort_unstable();

        prop_assert_eq!(selection.status, SolveStatus::Optimal);
        prop_assert_eq!(&selection.selected, &expected);
        let total: f64 = expected.iter().map(|&i| flows[i]).sum();
        prop_assert!((selection.objective.expect("optimal objective") - total).abs() < 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 2: an optimal solution always satisfies the model
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_enumerate_solve_optimal_is_feasible(
        flows in distinct_flows(),
        costs in prop::collection::vec(1u32..20, 10),
        budget in 0u32..60,
    ) {
        let costs: Vec<f64> = costs.into_iter().take(flows.len()).map(f64::from).collect();
        let model = portfolio_model(
            &flows,
            [Constraint::less_eq("budget", resource_usage(&costs), f64::from(budget))],
        )
        .expect("budget model is valid");
        let solution = BinaryEnumerationSolver::default()
            .solve(&model)
            .expect("binary model solves");

        // The empty portfolio always fits a non-negative budget.
        prop_assert_eq!(solution.status, SolveStatus::Optimal);
        prop_assert!(model.is_feasible(&solution.values, 1e-9).expect("values cover the model"));
        prop_assert!(solution.objective.expect("optimal objective") >= 0.0);
    }
}
