//! Cross-crate integration tests for Lendscore.
//!
//! Tests drive the full pipeline (JSON export in, score table out) and check
//! the batch-level scoring invariants over generated inputs.

pub mod helpers;
