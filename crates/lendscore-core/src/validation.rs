//! Record validation: turn [`RawRecord`]s into [`TransactionRecord`]s.
//!
//! Validation is all-or-nothing. The first malformed record aborts the
//! batch; nothing is skipped silently.

use crate::error::RecordError;
use crate::types::{ActionKind, RawRecord, TransactionRecord};

impl RawRecord {
    /// Validate a single record. `index` is its position in the batch and is
    /// carried into any error.
    pub fn validate(self, index: usize) -> Result<TransactionRecord, RecordError> {
        let wallet = self.wallet.ok_or(RecordError::MissingField {
            index,
            field: "wallet",
        })?;
        if wallet.is_empty() {
            return Err(RecordError::EmptyWallet { index });
        }
        let action = self.action.ok_or(RecordError::MissingField {
            index,
            field: "action",
        })?;
        let timestamp = self.timestamp.ok_or(RecordError::MissingField {
            index,
            field: "timestamp",
        })?;

        let action = ActionKind::parse(&action);
        match TransactionRecord::new(wallet.as_str(), action, timestamp) {
            Some(record) => Ok(record),
            None => Err(RecordError::TimestampOutOfRange {
                index,
                wallet,
                timestamp,
            }),
        }
    }
}

/// Validate a whole batch. An empty batch is valid.
pub fn validate_batch(raw: Vec<RawRecord>) -> Result<Vec<TransactionRecord>, RecordError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}
