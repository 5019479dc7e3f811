//! Core data types: action vocabulary, transaction records, per-wallet
//! features, and score results.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACTION_BORROW, ACTION_DEPOSIT, ACTION_LIQUIDATION_CALL, ACTION_REDEEM_UNDERLYING,
    ACTION_REPAY,
};

/// Kind of lending-protocol action, resolved once when a record is ingested.
///
/// Matching is case-insensitive. Strings outside the counted vocabulary are
/// kept (lower-cased) in [`ActionKind::Other`]; they contribute to a wallet's
/// active days but to none of its counters.
///
/// # Examples
///
/// ```
/// use lendscore_core::ActionKind;
/// assert_eq!(ActionKind::parse("RedeemUnderlying"), ActionKind::RedeemUnderlying);
/// assert_eq!(ActionKind::parse("Stake"), ActionKind::Other("stake".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Deposit,
    Borrow,
    Repay,
    RedeemUnderlying,
    LiquidationCall,
    /// Any unrecognized action, lower-cased.
    Other(String),
}

impl ActionKind {
    /// Resolve an action string. Never fails.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        match lower.as_str() {
            ACTION_DEPOSIT => Self::Deposit,
            ACTION_BORROW => Self::Borrow,
            ACTION_REPAY => Self::Repay,
            ACTION_REDEEM_UNDERLYING => Self::RedeemUnderlying,
            ACTION_LIQUIDATION_CALL => Self::LiquidationCall,
            _ => Self::Other(lower),
        }
    }

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Deposit => ACTION_DEPOSIT,
            Self::Borrow => ACTION_BORROW,
            Self::Repay => ACTION_REPAY,
            Self::RedeemUnderlying => ACTION_REDEEM_UNDERLYING,
            Self::LiquidationCall => ACTION_LIQUIDATION_CALL,
            Self::Other(name) => name,
        }
    }

    /// Whether this action feeds one of the named counters.
    pub fn is_counted(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record as it appears in an exported transaction history, before
/// validation. Every field is optional so that a missing field surfaces as a
/// [`RecordError`](crate::error::RecordError) with context instead of a
/// generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, alias = "userWallet", alias = "user")]
    pub wallet: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    /// Seconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// A validated transaction record.
///
/// Fields are private so that `date` always agrees with `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    wallet: String,
    action: ActionKind,
    timestamp: i64,
    date: NaiveDate,
}

impl TransactionRecord {
    /// Build a record. Returns `None` if `timestamp` has no UTC calendar date.
    pub fn new(wallet: impl Into<String>, action: ActionKind, timestamp: i64) -> Option<Self> {
        let date = DateTime::<Utc>::from_timestamp(timestamp, 0)?.date_naive();
        Some(Self {
            wallet: wallet.into(),
            action,
            timestamp,
            date,
        })
    }

    pub fn wallet(&self) -> &str {
        &self.wallet
    }

    pub fn action(&self) -> &ActionKind {
        &self.action
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// UTC calendar date of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Raw per-wallet counters behind a [`WalletFeatureVector`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletActivity {
    pub wallet: String,
    pub deposits: u64,
    pub borrows: u64,
    pub repays: u64,
    pub redeems: u64,
    pub liquidations: u64,
    /// All records for the wallet, including unrecognized actions.
    pub total: u64,
    /// Distinct UTC dates with at least one record.
    pub active_days: u64,
}

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio_or_zero(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl WalletActivity {
    /// Reduce the counters to the behavioral feature vector.
    ///
    /// Ratios are not clamped: more repays than borrows gives `repay_ratio > 1`.
    pub fn features(&self) -> WalletFeatureVector {
        WalletFeatureVector {
            wallet: self.wallet.clone(),
            repay_ratio: ratio_or_zero(self.repays, self.borrows),
            redeem_ratio: ratio_or_zero(self.redeems, self.deposits),
            liquid_rate: ratio_or_zero(self.liquidations, self.total),
            active_days: self.active_days,
        }
    }
}

/// Behavioral features for one wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletFeatureVector {
    pub wallet: String,
    /// `repays / borrows`, 0 without borrows.
    pub repay_ratio: f64,
    /// `redeems / deposits`, 0 without deposits.
    pub redeem_ratio: f64,
    /// `liquidations / total`, 0 without records.
    pub liquid_rate: f64,
    pub active_days: u64,
}

/// Final score for one wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub wallet: String,
    pub credit_score: f64,
}

/// Intermediate values of the scoring formula for one wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub wallet: String,
    /// Weighted sum before the compressive transform.
    pub raw: f64,
    /// `ln(1 + raw * COMPRESSION_FACTOR)`.
    pub adjusted: f64,
    pub credit_score: f64,
}

impl From<ScoreBreakdown> for ScoreResult {
    fn from(b: ScoreBreakdown) -> Self {
        Self {
            wallet: b.wallet,
            credit_score: b.credit_score,
        }
    }
}
