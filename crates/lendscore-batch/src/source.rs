//! JSON record source.
//!
//! Reads a JSON array of transaction objects. Only `wallet` (or `userWallet`
//! / `user`), `action`, and `timestamp` are used; other fields are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use lendscore_core::error::SourceError;
use lendscore_core::traits::RecordSource;
use lendscore_core::types::{RawRecord, TransactionRecord};
use lendscore_core::validation::validate_batch;
use tracing::debug;

/// Parse and validate a JSON array of records from any reader.
pub fn read_json_records<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, SourceError> {
    let raw: Vec<RawRecord> =
        serde_json::from_reader(reader).map_err(|e| SourceError::Parse(e.to_string()))?;
    debug!(records = raw.len(), "source: parsed json array");
    Ok(validate_batch(raw)?)
}

/// [`RecordSource`] backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    path: PathBuf,
}

impl JsonRecordSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonRecordSource {
    fn read_records(&mut self) -> Result<Vec<TransactionRecord>, SourceError> {
        let file = File::open(&self.path)
            .map_err(|e| SourceError::Io(format!("{}: {e}", self.path.display())))?;
        read_json_records(BufReader::new(file))
    }
}
