//! N-gram frequency counting library.
//!
//! This crate provides a small text-analysis pipeline including:
//! - Word/punctuation tokenization of UTF-8 text files
//! - Sliding-window n-gram generation
//! - Frequency tables ranked by count with first-seen tie-breaking
//! - TSV output, for one window size or for every size up to a maximum

/// Tokenizer, n-gram generator, frequency tables and run pipelines.
pub mod model;

/// File helpers: input reading, output path derivation, TSV read/write.
pub mod io;

/// Crate-wide error type.
pub mod error;

pub use error::{NgramError, Result};
pub use model::frequency_table::FrequencyTable;
pub use model::run_config::RunConfig;
