#![forbid(unsafe_code)]

use rankwise_core::Precision;

use crate::error::FuzzyError;

/// A fuzzy number with `N` non-decreasing, finite components.
///
/// `N = 3` is a triangular number `(l, m, h)`, `N = 4` a trapezoidal number
/// `(a, b, c, d)`. Arithmetic is component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyNumber<const N: usize>([f64; N]);

pub type Triangular = FuzzyNumber<3>;
pub type Trapezoidal = FuzzyNumber<4>;

impl<const N: usize> FuzzyNumber<N> {
    pub fn new(components: [f64; N]) -> Result<Self, FuzzyError> {
        if components.iter().any(|c| !c.is_finite()) {
            return Err(FuzzyError::NonFinite {
                components: components.to_vec(),
            });
        }
        if components.windows(2).any(|w| w[0] > w[1]) {
            return Err(FuzzyError::Unordered {
                components: components.to_vec(),
            });
        }
        Ok(Self(components))
    }

    /// The crisp number `value` repeated in every component.
    #[must_use]
    pub fn crisp(value: f64) -> Self {
        Self([value; N])
    }

    #[must_use]
    pub const fn components(&self) -> &[f64; N] {
        &self.0
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.0[N - 1]
    }

    /// Apply `f` to every component and re-validate.
    pub fn try_map(&self, f: impl Fn(f64) -> f64) -> Result<Self, FuzzyError> {
        Self::new(self.0.map(f))
    }

    /// Component-wise product, e.g. a normalized rating times a fuzzy weight.
    pub fn try_mul(&self, other: &Self) -> Result<Self, FuzzyError> {
        let mut out = self.0;
        for (c, w) in out.iter_mut().zip(other.0) {
            *c *= w;
        }
        Self::new(out)
    }

    /// Round every component; rounding is monotone so ordering is kept.
    #[must_use]
    pub fn rounded(&self, precision: Precision) -> Self {
        Self(self.0.map(|c| precision.apply(c)))
    }
}

impl Triangular {
    /// Embed `(l, m, h)` as the trapezoid `(l, m, m, h)`.
    #[must_use]
    pub fn to_trapezoidal(&self) -> Trapezoidal {
        let [l, m, h] = self.0;
        FuzzyNumber([l, m, m, h])
    }
}

impl<const N: usize> TryFrom<[f64; N]> for FuzzyNumber<N> {
    type Error = FuzzyError;

    fn try_from(components: [f64; N]) -> Result<Self, Self::Error> {
        Self::new(components)
    }
}

/// Vertex distance `sqrt((1/N) Σ (aᵢ − bᵢ)²)` between two fuzzy numbers.
#[must_use]
pub fn vertex_distance<const N: usize>(a: &FuzzyNumber<N>, b: &FuzzyNumber<N>) -> f64 {
    let sum: f64 = a.0.iter().zip(&b.0).map(|(x, y)| (x - y).powi(2)).sum();
    (sum / N as f64).sqrt()
}
