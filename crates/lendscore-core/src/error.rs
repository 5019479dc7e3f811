//! Error types for Lendscore.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record {index}: missing field `{field}`")] MissingField { index: usize, field: &'static str },
    #[error("record {index}: empty wallet identifier")] EmptyWallet { index: usize },
    #[error("record {index} (wallet {wallet}): timestamp {timestamp} out of range")] TimestampOutOfRange { index: usize, wallet: String, timestamp: i64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid weight `{name}`: {value} (must be finite and >= 0)")] InvalidWeight { name: &'static str, value: f64 },
    #[error("invalid score range: min {min}, max {max}")] InvalidRange { min: f64, max: f64 },
    #[error("config load: {0}")] Load(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("source I/O: {0}")] Io(String),
    #[error("source parse: {0}")] Parse(String),
    #[error(transparent)] Record(#[from] RecordError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("sink I/O: {0}")] Io(String),
    #[error("sink serialize: {0}")] Serialize(String),
}

#[derive(Error, Debug)]
pub enum LendscoreError {
    #[error(transparent)] Record(#[from] RecordError),
    #[error(transparent)] Config(#[from] ConfigError),
    #[error(transparent)] Source(#[from] SourceError),
    #[error(transparent)] Sink(#[from] SinkError),
}
