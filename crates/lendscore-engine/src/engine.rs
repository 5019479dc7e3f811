//! Score engine implementing the [`CreditScorer`] trait.
//!
//! Scoring a batch has two batch-wide barriers: `max_active_days` must be
//! known before any raw score is computed, and `min`/`max` of the adjusted
//! scores must be known before any score is rescaled. Everything between the
//! barriers is independent per wallet.

use lendscore_core::config::{ScoreWeights, ScoringConfig};
use lendscore_core::error::ConfigError;
use lendscore_core::traits::CreditScorer;
use lendscore_core::types::{ScoreBreakdown, ScoreResult, WalletFeatureVector};
use tracing::{debug, warn};

use crate::rescale::{bounds, rescale, saturate};
use crate::transform::compress;

/// The production scorer.
///
/// Holds a validated [`ScoringConfig`]; construction fails on invalid
/// weights or range so no computation ever runs with a bad config.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    /// Create an engine, rejecting invalid configuration up front.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Largest `active_days` in the batch, 0 for an empty batch.
    pub fn max_active_days(features: &[WalletFeatureVector]) -> u64 {
        features.iter().map(|f| f.active_days).max().unwrap_or(0)
    }

    /// Weighted sum for one wallet.
    ///
    /// The activity term is `active_days / max_active_days`, or 0 when
    /// `max_active_days` is 0.
    pub fn raw_score(&self, features: &WalletFeatureVector, max_active_days: u64) -> f64 {
        let ScoreWeights {
            repay,
            redeem,
            liquid,
            activity,
        } = self.config.weights;

        let activity_share = if max_active_days == 0 {
            0.0
        } else {
            features.active_days as f64 / max_active_days as f64
        };

        features.repay_ratio * repay
            + features.redeem_ratio * redeem
            + (1.0 - features.liquid_rate) * liquid
            + activity_share * activity
    }

    /// Raw, adjusted, and final score for every wallet, in input order.
    ///
    /// A raw or adjusted score that overflows saturates at `f64::MAX`.
    pub fn breakdown(&self, features: &[WalletFeatureVector]) -> Vec<ScoreBreakdown> {
        let max_days = Self::max_active_days(features);

        let raw: Vec<f64> = features
            .iter()
            .map(|f| {
                let raw = self.raw_score(f, max_days);
                if !raw.is_finite() {
                    warn!(wallet = %f.wallet, raw, "engine: raw score overflowed, saturating");
                }
                saturate(raw)
            })
            .collect();
        let adjusted: Vec<f64> = raw.iter().map(|&r| saturate(compress(r))).collect();
        let scores = rescale(&adjusted, &self.config.range);

        if let Some((lo, hi)) = bounds(&adjusted) {
            debug!(
                wallets = features.len(),
                max_active_days = max_days,
                adjusted_min = lo,
                adjusted_max = hi,
                "engine: batch scored"
            );
        }

        features
            .iter()
            .zip(raw)
            .zip(adjusted)
            .zip(scores)
            .map(|(((f, raw), adjusted), credit_score)| ScoreBreakdown {
                wallet: f.wallet.clone(),
                raw,
                adjusted,
                credit_score,
            })
            .collect()
    }
}

impl CreditScorer for ScoreEngine {
    fn score_batch(&self, features: &[WalletFeatureVector]) -> Vec<ScoreResult> {
        self.breakdown(features)
            .into_iter()
            .map(ScoreResult::from)
            .collect()
    }
}
