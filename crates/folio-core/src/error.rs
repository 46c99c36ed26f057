// crates/folio-core/src/error.rs
// Standardized error types for folio

use thiserror::Error;

/// Main error type for the behavior layer
#[derive(Error, Debug)]
pub enum FolioError {
    /// An element the component depends on is not in the document.
    /// Components treat this as "disabled", never as a failure.
    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid value: {0}")]
    Invalid(String),
}

/// Convenience type alias for Result using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Shorthand for a missing element keyed by its selector
    pub fn missing(selector: impl Into<String>) -> Self {
        FolioError::MissingElement(selector.into())
    }

    /// True when the error only means "this component has nothing to attach to"
    pub fn is_missing(&self) -> bool {
        matches!(self, FolioError::MissingElement(_))
    }
}
