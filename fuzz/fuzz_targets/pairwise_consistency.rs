#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rankwise_core::Precision;
use rankwise_methods::{PairwiseMatrix, PriorityMethod, consistency, priority_vector};

#[derive(Debug, Arbitrary)]
struct PairwiseInput {
    order: u8,
    upper: Vec<f64>,
}

const METHODS: [PriorityMethod; 3] = [
    PriorityMethod::Eigenvector,
    PriorityMethod::ColumnSum,
    PriorityMethod::GeometricMean,
];

fuzz_target!(|input: PairwiseInput| {
    let order = usize::from(input.order % 11);
    let mut upper = input
        .upper
        .into_iter()
        .map(|v| v.abs().clamp(1.0 / 9.0, 9.0))
        .filter(|v| v.is_finite());
    let mut rows = vec![vec![1.0; order]; order];
    for i in 0..order {
        for j in (i + 1)..order {
            let value = upper.next().unwrap_or(1.0);
            rows[i][j] = value;
            rows[j][i] = 1.0 / value;
        }
    }
    let Ok(matrix) = PairwiseMatrix::new(rows) else {
        return;
    };
    for method in METHODS {
        let priorities = priority_vector(&matrix, method, Precision::Full);
        let total: f64 = priorities.iter().sum();
        assert!((total - 1.0).abs() < 1e-6, "{method:?} priorities sum to {total}");
    }
    if let Ok(report) = consistency(&matrix) {
        assert!(report.consistency_index >= -1e-6, "negative CI {}", report.consistency_index);
    }
});
