//! # lendscore-core
//! Foundation types and traits for wallet credit scoring.

pub mod config;
pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

pub use config::{ScoreRange, ScoreWeights, ScoringConfig};
pub use error::LendscoreError;
pub use types::{
    ActionKind, RawRecord, ScoreBreakdown, ScoreResult, TransactionRecord, WalletActivity,
    WalletFeatureVector,
};
pub use validation::validate_batch;
