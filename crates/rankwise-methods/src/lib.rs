#![forbid(unsafe_code)]

//! Rankwise methods: MCDA ranking methods over the shared core pipeline.
//!
//! ## Module layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | `topsis`       | [`topsis`] closeness coefficients                           |
//! | `fuzzy_topsis` | [`fuzzy_topsis`] over triangular group judgments            |
//! | `vikor`        | [`vikor`] group utility, regret and compromise index        |
//! | `fuzzy_vikor`  | [`fuzzy_vikor`] via centroid defuzzification                |
//! | `preference`   | [`PreferenceFunction`] family shared by PROMETHEE and SIR   |
//! | `promethee`    | [`promethee`] PROMETHEE I/II flows                          |
//! | `sir`          | [`sir`] superiority/inferiority flows                       |
//! | `ahp`          | [`ahp`] priorities, consistency reports                     |
//! | `simos`        | [`revised_simos`] criterion weighting                       |
//! | `judgments`    | [`FuzzyJudgments`] linguistic input of the fuzzy methods    |
//! | `pipeline`     | [`RankingConfig`] and [`rank_alternatives`]                 |

pub mod ahp;
pub mod error;
pub mod fuzzy_topsis;
pub mod fuzzy_vikor;
pub mod judgments;
pub mod pipeline;
pub mod preference;
pub mod promethee;
pub mod simos;
pub mod sir;
pub mod topsis;
mod validation;
pub mod vikor;

pub use ahp::{
    AhpOptions, AhpResult, AhpWarning, CONSISTENCY_THRESHOLD, ConsistencyReport,
    MatrixConsistency, MatrixRole, PairwiseMatrix, PriorityMethod, RANDOM_INDEX, ahp,
    consistency, principal_eigen, priority_vector,
};
pub use error::MethodError;
pub use fuzzy_topsis::{FuzzyTopsisOptions, FuzzyTopsisResult, fuzzy_topsis};
pub use fuzzy_vikor::{FuzzyVikorOptions, FuzzyVikorResult, fuzzy_vikor};
pub use judgments::{AggregatedJudgments, FuzzyJudgments};
pub use pipeline::{MethodConfig, RankingConfig, rank_alternatives};
pub use preference::{PreferenceFunction, PreferenceShape, PreferenceSpec, preference};
pub use promethee::{PrometheeOptions, PrometheeResult, promethee};
pub use simos::{SimosCard, SimosResult, SimosWeight, revised_simos};
pub use sir::{SirAggregation, SirOptions, SirResult, SirScore, sir, superiority_inferiority};
pub use topsis::{TopsisOptions, TopsisResult, closeness_coefficient, topsis};
pub use vikor::{VikorOptions, VikorResult, compromise_index, default_strategy_weight, vikor};
