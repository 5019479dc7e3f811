//! Scoring constants. Weights and range bounds here are defaults only; the
//! engine reads the effective values from [`ScoringConfig`](crate::ScoringConfig).

/// Default weight applied to `repay_ratio`.
pub const DEFAULT_WEIGHT_REPAY: f64 = 6.0;
/// Default weight applied to `redeem_ratio`.
pub const DEFAULT_WEIGHT_REDEEM: f64 = 3.0;
/// Default weight applied to `1 - liquid_rate`.
pub const DEFAULT_WEIGHT_LIQUID: f64 = 8.0;
/// Default weight applied to the normalized activity term.
pub const DEFAULT_WEIGHT_ACTIVITY: f64 = 5.0;

/// Default lower bound of the rescaled credit score.
pub const DEFAULT_SCORE_MIN: f64 = 0.0;
/// Default upper bound of the rescaled credit score.
pub const DEFAULT_SCORE_MAX: f64 = 1000.0;

/// Multiplier applied to the raw score before `ln(1 + x)`.
///
/// Fixed part of the scoring formula; not exposed through configuration.
pub const COMPRESSION_FACTOR: f64 = 5.0;

/// Default number of buckets in the score distribution report.
///
/// Ten buckets over the default range gives 100-point bins.
pub const DEFAULT_REPORT_BUCKETS: usize = 10;

/// Canonical action names, lower case.
pub const ACTION_DEPOSIT: &str = "deposit";
pub const ACTION_BORROW: &str = "borrow";
pub const ACTION_REPAY: &str = "repay";
pub const ACTION_REDEEM_UNDERLYING: &str = "redeemunderlying";
pub const ACTION_LIQUIDATION_CALL: &str = "liquidationcall";

/// Seconds per UTC calendar day.
pub const SECS_PER_DAY: i64 = 86_400;
