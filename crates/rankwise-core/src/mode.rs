#![forbid(unsafe_code)]

//! Runtime mode definitions for Strict (reference-compatible) and Hardened operation.

use serde::{Deserialize, Serialize};

/// Operational mode governing compatibility/safety trade-offs.
///
/// - **Strict**: Reproduce the reference book computations, including the
///   three-decimal rounding after every stage. Finite checks follow the
///   caller's `check_finite` flag.
/// - **Hardened**: Same numerics, but every input matrix and weight vector is
///   checked for NaN/Inf regardless of `check_finite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeMode {
    #[default]
    Strict,
    Hardened,
}

impl RuntimeMode {
    /// Whether finite-value validation must run for this call.
    #[must_use]
    pub fn must_check_finite(self, check_finite: bool) -> bool {
        check_finite || self == Self::Hardened
    }
}

#[cfg(test)]
mod tests {
    use super::RuntimeMode;

    #[test]
    fn hardened_forces_finite_checks() {
        assert!(RuntimeMode::Hardened.must_check_finite(false));
        assert!(!RuntimeMode::Strict.must_check_finite(false));
        assert!(RuntimeMode::Strict.must_check_finite(true));
    }

    #[test]
    fn default_mode_is_strict() {
        assert_eq!(RuntimeMode::default(), RuntimeMode::Strict);
    }
}
