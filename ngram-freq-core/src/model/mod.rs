//! Tokenization and n-gram counting pipeline.
//!
//! Data flows one way:
//! raw text → tokens (`tokenizer`) → n-gram windows (`ngram`)
//! → counts (`frequency_table`) → per-size files (`multi_resolution`)

/// Word/punctuation tokenizer.
///
/// Splits lines into maximal word runs and single symbol characters.
pub mod tokenizer;

/// Sliding windows of `n` consecutive tokens.
pub mod ngram;

/// Occurrence counts of distinct n-grams, ranked with a stable tie-break.
pub mod frequency_table;

/// One frequency file (plus completion marker) per window size from 1 to `max_n`.
pub mod multi_resolution;

/// Validated run inputs and the two end-to-end pipelines.
pub mod run_config;
