#![forbid(unsafe_code)]

//! Rankwise core: the shared stages of the MCDA ranking pipeline.
//!
//! ## Module layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | `mode`      | [`RuntimeMode`] enum (Strict / Hardened)                       |
//! | `precision` | [`Precision`] stage rounding policy, [`round_to`]              |
//! | `matrix`    | [`DecisionMatrix`], shape helpers                              |
//! | `criteria`  | [`Direction`], [`Weights`]                                     |
//! | `normalize` | [`Normalization`] policies, [`normalize`]                      |
//! | `weighting` | [`apply_weights`]                                              |
//! | `reference` | ideal/anti-ideal and best/worst points, pairwise differences   |
//! | `ranking`   | [`Ranking`] composition with an explicit [`ScoreOrder`]        |
//! | `render`    | [`ScoreRenderer`] output collaborator, [`TextRenderer`]        |

pub mod criteria;
pub mod error;
pub mod matrix;
pub mod mode;
pub mod normalize;
pub mod precision;
pub mod ranking;
pub mod reference;
pub mod render;
pub mod weighting;

pub use criteria::{Direction, Weights, check_directions, validate_finite_vector};
pub use error::PipelineError;
pub use matrix::{DecisionMatrix, matrix_shape, square_order};
pub use mode::RuntimeMode;
pub use normalize::{Normalization, normalize};
pub use precision::{MAX_DECIMALS, Precision, round_to};
pub use ranking::{RankedAlternative, Ranking, ScoreOrder};
pub use reference::{
    BestWorst, IdealMode, ReferencePoints, best_worst, ideal_points, pairwise_differences,
};
pub use render::{ScoreRenderer, TextRenderer};
pub use weighting::apply_weights;
