//! Core library for legibility.
//!
//! Scores English text with eight classic readability formulas (Gunning Fog,
//! Flesch Reading Ease, Flesch-Kincaid, SMOG, Coleman-Liau, ARI, Dale-Chall
//! and Linsear Write) and summarizes word frequency.
//!
//! # Modules
//!
//! - [`text`] - Whitespace normalization, word extraction, sentence counting
//! - [`syllables`] - Heuristic syllable estimation
//! - [`classify`] - Proper-noun, difficult-word and complex-word tests
//! - [`word_lists`] - Reference (Dale-Chall) and stop-word lists
//! - [`readability`] - The formula engine
//! - [`frequency`] - Word frequency summary
//! - [`interpret`] - Plain-language labels for scores
//! - [`export`] - JSON, CSV and text export
//! - [`markdown`] - Markdown to prose
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use legibility_core::calculate_readability_metrics;
//!
//! let metrics = calculate_readability_metrics("The quick brown fox jumps over the lazy dog.");
//! assert_eq!(metrics.word_count, 9);
//! assert!(metrics.flesch_reading_ease > 90.0);
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod frequency;
pub mod interpret;
pub mod markdown;
pub mod readability;
pub mod syllables;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, Settings};
pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, WordListError, WordListResult,
};
pub use export::{ExportFormat, ExportOptions, export_metrics, export_metrics_at};
pub use frequency::{FrequencyOptions, WordFrequency, word_frequency};
pub use readability::{
    Metric, ReadabilityCalculator, ReadabilityMetrics, calculate_readability_metrics,
};
pub use word_lists::ReferenceWordList;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
