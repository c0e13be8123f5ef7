#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rankwise_methods::{PreferenceFunction, PreferenceShape};

#[derive(Debug, Arbitrary)]
struct PreferenceInput {
    shape: u8,
    q: f64,
    p: f64,
    differences: Vec<f64>,
}

const SHAPES: [PreferenceShape; 6] = [
    PreferenceShape::Usual,
    PreferenceShape::UShape,
    PreferenceShape::VShape,
    PreferenceShape::Level,
    PreferenceShape::Linear,
    PreferenceShape::Gaussian,
];

fuzz_target!(|input: PreferenceInput| {
    let shape = SHAPES[usize::from(input.shape) % SHAPES.len()];
    let Ok(function) = PreferenceFunction::new(shape, input.q, input.p) else {
        return;
    };
    for d in input.differences.into_iter().take(64).filter(|d| d.is_finite()) {
        let degree = function.degree(d);
        assert!(
            (0.0..=1.0).contains(&degree),
            "{shape:?} q={} p={} d={d} gave {degree}",
            input.q,
            input.p
        );
        if d <= 0.0 {
            assert_eq!(degree, 0.0, "{shape:?} must ignore non-positive differences");
        }
    }
});
