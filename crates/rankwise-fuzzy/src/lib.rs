#![forbid(unsafe_code)]

//! Fuzzy judgments for the fuzzy MCDA variants.
//!
//! ## Module layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | `number`    | [`FuzzyNumber`], [`Triangular`], [`Trapezoidal`], vertex distance |
//! | `scale`     | [`LinguisticScale`] label → fuzzy number tables               |
//! | `aggregate` | multi-decision-maker [`aggregate`] with an [`AggregationRule`] |
//! | `defuzzify` | [`Defuzzify`] centroid collapse                               |

pub mod aggregate;
pub mod defuzzify;
pub mod error;
pub mod number;
pub mod scale;

pub use aggregate::{AggregationRule, aggregate};
pub use defuzzify::{Defuzzify, centroid};
pub use error::FuzzyError;
pub use number::{FuzzyNumber, Trapezoidal, Triangular, vertex_distance};
pub use scale::LinguisticScale;
