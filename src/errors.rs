//! Error types for rapid_rake_ja

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RakeError>;

/// Errors surfaced by the extractor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RakeError {
    /// The morphological analyzer failed to initialize or to parse the input.
    ///
    /// The analyzer's message is carried verbatim.
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    /// Extractor options could not be loaded.
    #[error("invalid extractor options: {0}")]
    InvalidOptions(String),
}

impl RakeError {
    /// Create a tokenization error
    pub fn tokenization(message: impl Into<String>) -> Self {
        RakeError::Tokenization(message.into())
    }

    /// Create an invalid-options error
    pub fn invalid_options(message: impl Into<String>) -> Self {
        RakeError::InvalidOptions(message.into())
    }

    /// Whether this error came from the tokenizer
    pub fn is_tokenization(&self) -> bool {
        matches!(self, RakeError::Tokenization(_))
    }
}

impl From<serde_json::Error> for RakeError {
    fn from(err: serde_json::Error) -> Self {
        RakeError::InvalidOptions(err.to_string())
    }
}
