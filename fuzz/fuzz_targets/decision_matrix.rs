#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rankwise_core::{DecisionMatrix, Direction, Precision, RuntimeMode, Weights};
use rankwise_methods::{TopsisOptions, VikorOptions, topsis, vikor};

#[derive(Debug, Arbitrary)]
struct MatrixInput {
    rows: u8,
    cols: u8,
    hardened: bool,
    check_finite: bool,
    full_precision: bool,
    minimize_mask: u8,
    values: Vec<f64>,
    weights: Vec<f64>,
}

fn build_matrix(rows: usize, cols: usize, values: &[f64]) -> Vec<Vec<f64>> {
    let mut matrix = vec![vec![0.0; cols]; rows];
    for (idx, value) in values.iter().copied().take(rows * cols).enumerate() {
        matrix[idx / cols][idx % cols] = value;
    }
    matrix
}

fuzz_target!(|input: MatrixInput| {
    let rows = usize::from(input.rows % 8);
    let cols = usize::from(input.cols % 6);
    let Ok(matrix) = DecisionMatrix::new(build_matrix(rows, cols, &input.values)) else {
        return;
    };
    let mut weights = input.weights;
    weights.resize(cols, 0.25);
    let Ok(weights) = Weights::new(weights) else {
        return;
    };
    let directions: Vec<Direction> = (0..cols)
        .map(|j| {
            if input.minimize_mask & (1 << (j % 8)) == 0 {
                Direction::Maximize
            } else {
                Direction::Minimize
            }
        })
        .collect();
    let mode = if input.hardened {
        RuntimeMode::Hardened
    } else {
        RuntimeMode::Strict
    };
    let precision = if input.full_precision {
        Precision::Full
    } else {
        Precision::Decimals(3)
    };

    let topsis_options = TopsisOptions {
        mode,
        check_finite: input.check_finite,
        precision,
        ..TopsisOptions::default()
    };
    if let Ok(result) = topsis(&matrix, &weights, &directions, topsis_options)
        && matrix.is_finite()
    {
        for c in &result.closeness {
            assert!(c.is_nan() || (0.0..=1.0).contains(c), "closeness {c} out of range");
        }
    }

    let vikor_options = VikorOptions {
        mode,
        check_finite: input.check_finite,
        precision,
        v: None,
    };
    let _ = vikor(&matrix, &weights, &directions, vikor_options);
});
