//! Trait interfaces for the scoring pipeline.
//!
//! These traits define the contracts between crates:
//! - [`RecordSource`] — yields validated transaction records (lendscore-batch implements)
//! - [`ResultSink`] — accepts the final score table (lendscore-batch implements)
//! - [`CreditScorer`] — feature vectors to scores (lendscore-engine implements)

use crate::error::{SinkError, SourceError};
use crate::types::{ScoreResult, TransactionRecord, WalletFeatureVector};

/// Supplier of one batch of validated records.
pub trait RecordSource {
    /// Read the full batch. Malformed input fails the whole read.
    fn read_records(&mut self) -> Result<Vec<TransactionRecord>, SourceError>;
}

/// Consumer of the final `(wallet, credit_score)` table.
pub trait ResultSink {
    fn write_scores(&mut self, scores: &[ScoreResult]) -> Result<(), SinkError>;
}

/// Batch scorer. Scores are only comparable within one call.
pub trait CreditScorer: Send + Sync {
    /// Score every wallet in `features`, one result per input row, same order.
    fn score_batch(&self, features: &[WalletFeatureVector]) -> Vec<ScoreResult>;
}

/// In-memory [`RecordSource`] over an owned batch.
///
/// The batch is handed out once; later reads return an empty batch.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    records: Vec<TransactionRecord>,
}

impl VecSource {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for VecSource {
    fn read_records(&mut self) -> Result<Vec<TransactionRecord>, SourceError> {
        Ok(std::mem::take(&mut self.records))
    }
}

/// In-memory [`ResultSink`] that keeps the last table written.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    pub scores: Vec<ScoreResult>,
}

impl ResultSink for VecSink {
    fn write_scores(&mut self, scores: &[ScoreResult]) -> Result<(), SinkError> {
        self.scores = scores.to_vec();
        Ok(())
    }
}
