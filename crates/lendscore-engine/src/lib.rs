//! # lendscore-engine — Batch credit score engine.
//!
//! Turns per-wallet feature vectors into bounded, batch-comparable scores in
//! three steps:
//! - **Weighted sum**: repay, redeem, non-liquidation, and normalized activity
//!   terms, each scaled by a configurable weight.
//! - **Compression**: `ln(1 + raw * 5)` dampens long-tailed raw scores.
//! - **Rescaling**: min-max map of the whole batch onto the target range.
//!   Zero-variance batches collapse to the range minimum.

pub mod engine;
pub mod rescale;
pub mod transform;

pub use engine::ScoreEngine;
pub use rescale::rescale;
pub use transform::compress;
