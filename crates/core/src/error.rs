//! Error types for setup and configuration.
//!
//! Gameplay itself never fails: misses and dropped words are regular
//! outcomes, not errors.

use thiserror::Error;

/// Errors raised while preparing a session.
#[derive(Debug, Error)]
pub enum WordSearchError {
    /// Difficulty name not in the static table.
    #[error("Unknown difficulty {0:?} (expected easy, medium, hard or expert)")]
    UnknownDifficulty(String),

    /// Theme name not among the built-in themes.
    #[error("Unknown theme {0:?}")]
    UnknownTheme(String),

    /// Custom word list could not be read.
    #[error("Failed to read word list {path}: {source}")]
    WordListIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Custom word list had nothing playable in it.
    #[error("Word list {path} contains no usable words")]
    EmptyWordList { path: String },
}
