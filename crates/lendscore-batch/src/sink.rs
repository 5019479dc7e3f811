//! Result sinks: CSV and JSON score tables.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lendscore_core::error::SinkError;
use lendscore_core::traits::ResultSink;
use lendscore_core::types::ScoreResult;

/// CSV header row.
pub const CSV_HEADER: &str = "wallet,credit_score";

fn io_err(path: &Path, e: std::io::Error) -> SinkError {
    SinkError::Io(format!("{}: {e}", path.display()))
}

fn csv_err(e: csv::Error) -> SinkError {
    if e.is_io_error() {
        SinkError::Io(e.to_string())
    } else {
        SinkError::Serialize(e.to_string())
    }
}

/// Write `wallet,credit_score` rows with two decimal places.
///
/// Wallets containing delimiters, quotes, or line breaks are quoted.
pub fn write_csv<W: Write>(writer: W, scores: &[ScoreResult]) -> Result<(), csv::Error> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    w.write_record(["wallet", "credit_score"])?;
    for s in scores {
        w.write_record([s.wallet.as_str(), &format!("{:.2}", s.credit_score)])?;
    }
    w.flush()?;
    Ok(())
}

/// CSV file sink.
#[derive(Debug, Clone)]
pub struct CsvScoreSink {
    path: PathBuf,
}

impl CsvScoreSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ResultSink for CsvScoreSink {
    fn write_scores(&mut self, scores: &[ScoreResult]) -> Result<(), SinkError> {
        let file = File::create(&self.path).map_err(|e| io_err(&self.path, e))?;
        write_csv(BufWriter::new(file), scores).map_err(csv_err)
    }
}

/// JSON file sink: a pretty-printed array of `{wallet, credit_score}`.
#[derive(Debug, Clone)]
pub struct JsonScoreSink {
    path: PathBuf,
}

impl JsonScoreSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ResultSink for JsonScoreSink {
    fn write_scores(&mut self, scores: &[ScoreResult]) -> Result<(), SinkError> {
        let file = File::create(&self.path).map_err(|e| io_err(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, scores)
            .map_err(|e| SinkError::Serialize(e.to_string()))?;
        writer.flush().map_err(|e| io_err(&self.path, e))
    }
}

/// JSON sink for a `.json` extension (any case), CSV otherwise.
pub fn sink_for_path(path: impl AsRef<Path>) -> Box<dyn ResultSink> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Box::new(JsonScoreSink::new(path))
    } else {
        Box::new(CsvScoreSink::new(path))
    }
}
