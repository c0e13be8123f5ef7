#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rankwise_optimize::{
    BinaryEnumerationSolver, Constraint, SolveStatus, resource_usage, select_portfolio,
    selection_sum,
};

#[derive(Debug, Arbitrary)]
struct PortfolioInput {
    flows: Vec<i16>,
    costs: Vec<u8>,
    budget: u16,
    cardinality: u8,
}

fuzz_target!(|input: PortfolioInput| {
    let flows: Vec<f64> = input
        .flows
        .iter()
        .take(12)
        .map(|&v| f64::from(v) / 1000.0)
        .collect();
    let mut costs: Vec<f64> = input.costs.iter().map(|&c| f64::from(c)).collect();
    costs.resize(flows.len(), 1.0);
    let constraints = vec![
        Constraint::less_eq("budget", resource_usage(&costs), f64::from(input.budget)),
        Constraint::less_eq(
            "cardinality",
            selection_sum(0..flows.len()),
            f64::from(input.cardinality),
        ),
    ];
    let Ok(selection) = select_portfolio(&BinaryEnumerationSolver::default(), &flows, constraints)
    else {
        return;
    };
    // The empty portfolio satisfies both constraints.
    assert_eq!(selection.status, SolveStatus::Optimal);
    let spent: f64 = selection.selected.iter().map(|&i| costs[i]).sum();
    assert!(spent <= f64::from(input.budget) + 1e-9);
    assert!(selection.selected.len() <= usize::from(input.cardinality));
});
