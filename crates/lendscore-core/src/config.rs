//! Scoring configuration: component weights and the target score range.
//!
//! All fields deserialize with defaults, so a partial config file (or an
//! environment override of a single weight) yields a complete
//! [`ScoringConfig`]. Call [`ScoringConfig::validate`] before scoring.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SCORE_MAX, DEFAULT_SCORE_MIN, DEFAULT_WEIGHT_ACTIVITY, DEFAULT_WEIGHT_LIQUID,
    DEFAULT_WEIGHT_REDEEM, DEFAULT_WEIGHT_REPAY,
};
use crate::error::ConfigError;

/// Weights of the four components of the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub repay: f64,
    pub redeem: f64,
    /// Weight of `1 - liquid_rate`.
    pub liquid: f64,
    pub activity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            repay: DEFAULT_WEIGHT_REPAY,
            redeem: DEFAULT_WEIGHT_REDEEM,
            liquid: DEFAULT_WEIGHT_LIQUID,
            activity: DEFAULT_WEIGHT_ACTIVITY,
        }
    }
}

impl ScoreWeights {
    /// Named weights in declaration order.
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("repay", self.repay),
            ("redeem", self.redeem),
            ("liquid", self.liquid),
            ("activity", self.activity),
        ]
    }

    /// Reject negative or non-finite weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Closed target interval for the rescaled credit score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_SCORE_MIN,
            max: DEFAULT_SCORE_MAX,
        }
    }
}

impl ScoreRange {
    /// Reject non-finite, inverted, or zero-width ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub range: ScoreRange,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.range.validate()
    }
}
