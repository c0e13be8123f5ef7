#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use crate::error::FuzzyError;
use crate::number::FuzzyNumber;

/// Mapping from linguistic labels ("VL", "High", ...) to fuzzy numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinguisticScale<const N: usize> {
    terms: BTreeMap<String, FuzzyNumber<N>>,
}

impl<const N: usize> LinguisticScale<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Build a scale from `(label, components)` pairs, validating each number.
    pub fn from_terms<'a, I>(terms: I) -> Result<Self, FuzzyError>
    where
        I: IntoIterator<Item = (&'a str, [f64; N])>,
    {
        let mut scale = Self::new();
        for (label, components) in terms {
            scale.insert(label, FuzzyNumber::new(components)?);
        }
        Ok(scale)
    }

    /// Insert or replace a term, returning the previous number if any.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        number: FuzzyNumber<N>,
    ) -> Option<FuzzyNumber<N>> {
        self.terms.insert(label.into(), number)
    }

    pub fn get(&self, label: &str) -> Result<&FuzzyNumber<N>, FuzzyError> {
        self.terms.get(label).ok_or_else(|| FuzzyError::UnknownLabel {
            label: label.to_owned(),
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
