//! End-to-end batch: records → features → scores.
//!
//! The batch flows as explicit values between stages; nothing is shared or
//! retained across runs.

use lendscore_core::error::LendscoreError;
use lendscore_core::traits::{CreditScorer, RecordSource, ResultSink};
use lendscore_core::types::{
    ScoreBreakdown, ScoreResult, TransactionRecord, WalletActivity, WalletFeatureVector,
};
use lendscore_engine::ScoreEngine;
use lendscore_features::FeatureAggregator;
use serde::Serialize;
use tracing::info;

/// Everything computed for one batch, one entry per wallet in wallet order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub activity: Vec<WalletActivity>,
    pub features: Vec<WalletFeatureVector>,
    pub breakdown: Vec<ScoreBreakdown>,
}

impl BatchOutcome {
    /// The final `(wallet, credit_score)` table.
    pub fn scores(&self) -> Vec<ScoreResult> {
        self.breakdown
            .iter()
            .map(|b| ScoreResult {
                wallet: b.wallet.clone(),
                credit_score: b.credit_score,
            })
            .collect()
    }
}

/// Aggregate and score an in-memory batch, keeping every intermediate.
pub fn run_batch(records: &[TransactionRecord], engine: &ScoreEngine) -> BatchOutcome {
    let activity = FeatureAggregator::new().activity(records);
    let features: Vec<WalletFeatureVector> =
        activity.iter().map(WalletActivity::features).collect();
    let breakdown = engine.breakdown(&features);
    BatchOutcome {
        activity,
        features,
        breakdown,
    }
}

/// Read a batch from `source`, score it with `scorer`, write it to `sink`.
///
/// Returns the score table that was written.
pub fn run<S>(
    source: &mut dyn RecordSource,
    sink: &mut dyn ResultSink,
    scorer: &S,
) -> Result<Vec<ScoreResult>, LendscoreError>
where
    S: CreditScorer + ?Sized,
{
    let records = source.read_records()?;
    info!(records = records.len(), "pipeline: records loaded");

    let features = FeatureAggregator::new().aggregate(&records);
    info!(wallets = features.len(), "pipeline: features engineered");

    let scores = scorer.score_batch(&features);
    info!(wallets = scores.len(), "pipeline: scores computed");

    sink.write_scores(&scores)?;
    info!(rows = scores.len(), "pipeline: scores written");

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendscore_core::constants::SECS_PER_DAY;
    use lendscore_core::error::{SinkError, SourceError};
    use lendscore_core::traits::{VecSink, VecSource};
    use lendscore_core::types::ActionKind;

    const DAY0: i64 = 1_619_827_200;

    fn rec(wallet: &str, action: &str, day: i64) -> TransactionRecord {
        TransactionRecord::new(wallet, ActionKind::parse(action), DAY0 + day * SECS_PER_DAY)
            .unwrap()
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn read_records(&mut self) -> Result<Vec<TransactionRecord>, SourceError> {
            Err(SourceError::Io("disk on fire".to_string()))
        }
    }

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn write_scores(&mut self, _scores: &[ScoreResult]) -> Result<(), SinkError> {
            Err(SinkError::Io("read-only".to_string()))
        }
    }

    #[test]
    fn run_batch_keeps_intermediates_aligned() {
        let records = vec![
            rec("b", "deposit", 0),
            rec("a", "borrow", 0),
            rec("a", "repay", 1),
        ];
        let out = run_batch(&records, &ScoreEngine::default());
        assert_eq!(out.activity.len(), 2);
        assert_eq!(out.features.len(), 2);
        assert_eq!(out.breakdown.len(), 2);
        for ((a, f), b) in out.activity.iter().zip(&out.features).zip(&out.breakdown) {
            assert_eq!(a.wallet, f.wallet);
            assert_eq!(f.wallet, b.wallet);
        }
        assert_eq!(out.scores().len(), 2);
    }

    #[test]
    fn run_batch_empty() {
        assert_eq!(run_batch(&[], &ScoreEngine::default()), BatchOutcome::default());
    }

    #[test]
    fn run_writes_every_wallet() {
        let records = vec![
            rec("a", "deposit", 0),
            rec("a", "redeemunderlying", 1),
            rec("b", "borrow", 0),
            rec("b", "liquidationcall", 0),
            rec("c", "stake", 2),
        ];
        let mut source = VecSource::new(records);
        let mut sink = VecSink::default();
        let scores = run(&mut source, &mut sink, &ScoreEngine::default()).unwrap();

        assert_eq!(sink.scores, scores);
        let wallets: Vec<&str> = scores.iter().map(|s| s.wallet.as_str()).collect();
        assert_eq!(wallets, vec!["a", "b", "c"]);
    }

    #[test]
    fn run_propagates_source_error() {
        let mut sink = VecSink::default();
        let err = run(&mut FailingSource, &mut sink, &ScoreEngine::default()).unwrap_err();
        assert!(matches!(err, LendscoreError::Source(SourceError::Io(_))));
        assert!(sink.scores.is_empty());
    }

    #[test]
    fn run_propagates_sink_error() {
        let mut source = VecSource::new(vec![rec("a", "deposit", 0)]);
        let err = run(&mut source, &mut FailingSink, &ScoreEngine::default()).unwrap_err();
        assert!(matches!(err, LendscoreError::Sink(SinkError::Io(_))));
    }

    #[test]
    fn run_accepts_trait_object_scorer() {
        let scorer: Box<dyn CreditScorer> = Box::new(ScoreEngine::default());
        let mut source = VecSource::new(Vec::new());
        let mut sink = VecSink::default();
        assert!(run(&mut source, &mut sink, scorer.as_ref()).unwrap().is_empty());
    }
}
