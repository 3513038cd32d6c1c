//! Error types for the endgame domain.

use derive_more::{Display, Error};
use tracing::instrument;

/// A character that is not a guessable letter.
#[derive(Debug, Clone, Display, Error)]
#[display("Letter error: {} at {}:{}", message, file, line)]
pub struct LetterError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LetterError {
    /// Creates a new letter error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A string that cannot be used as a secret word.
#[derive(Debug, Clone, Display, Error)]
#[display("Word error: {} at {}:{}", message, file, line)]
pub struct WordError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordError {
    /// Creates a new word error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Catalog could not be read, parsed or validated.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<WordError> for CatalogError {
    #[track_caller]
    fn from(err: WordError) -> Self {
        Self::new(format!("Invalid word: {}", err.message))
    }
}

impl From<toml::de::Error> for CatalogError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse catalog: {}", err))
    }
}
