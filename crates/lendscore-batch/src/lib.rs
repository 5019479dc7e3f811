//! # lendscore-batch — Batch composition around the scoring core.
//!
//! Wires the collaborators to the core:
//! - [`source::JsonRecordSource`] — exported JSON transaction history
//! - [`sink`] — CSV and JSON score tables
//! - [`report::ScoreDistribution`] — bucketed score histogram
//! - [`settings`] — scoring config from file and environment
//! - [`pipeline`] — read, aggregate, score, write

pub mod pipeline;
pub mod report;
pub mod settings;
pub mod sink;
pub mod source;

pub use pipeline::{run, run_batch, BatchOutcome};
pub use report::ScoreDistribution;
pub use settings::load_scoring_config;
pub use sink::{sink_for_path, CsvScoreSink, JsonScoreSink};
pub use source::JsonRecordSource;
