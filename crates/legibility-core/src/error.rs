//! Error types for legibility-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text is empty or has no scorable words.
    #[error("no scorable text in input")]
    EmptyInput,

    /// An unknown export format name was provided.
    #[error("unknown export format: {name}. Use: {available}")]
    UnknownFormat {
        /// The format name that was requested.
        name: String,
        /// Comma-separated list of available format names.
        available: String,
    },

    /// The metrics record could not be serialized.
    #[error("failed to serialize metrics: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors raised while loading a reference word list.
#[derive(Error, Debug)]
pub enum WordListError {
    /// The word list file could not be read.
    #[error("failed to read word list {path}")]
    Read {
        /// Path of the word list file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The word list contained no entries.
    #[error("word list is empty")]
    Empty,

    /// A line held something other than a single word.
    #[error("invalid entry on line {line}: {entry:?}")]
    InvalidEntry {
        /// 1-based line number of the offending entry.
        line: usize,
        /// The raw entry text.
        entry: String,
    },
}

/// Result type alias using [`WordListError`].
pub type WordListResult<T> = Result<T, WordListError>;
