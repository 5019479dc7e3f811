//! # lendscore-features — Feature Aggregator.
//!
//! Groups validated transaction records by wallet and reduces each group to
//! a fixed-size behavioral feature vector:
//! - **repay_ratio**: repays per borrow (0 without borrows)
//! - **redeem_ratio**: redemptions per deposit (0 without deposits)
//! - **liquid_rate**: share of the wallet's records that are liquidations
//! - **active_days**: distinct UTC calendar dates with any record

pub mod aggregator;

pub use aggregator::FeatureAggregator;
