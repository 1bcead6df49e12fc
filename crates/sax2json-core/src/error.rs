//! Error types for XML-to-JSON conversion.

use thiserror::Error;

/// Errors that can occur while building a JSON tree from XML events.
///
/// Every variant except [`ConvertError::Json`] aborts the conversion: no
/// partial tree is ever returned alongside an error.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Open/close events do not pair up: a close names a different element
    /// than the active one, a close arrives with nothing open, or the document
    /// ends while elements are still open.
    #[error("Unbalanced structure: {0}")]
    UnbalancedStructure(String),

    /// Non-blank character data appeared next to child elements.
    #[error("Mixed content is not supported in element '{element}'")]
    MixedContent { element: String },

    /// An event was delivered to a builder that already failed.
    #[error("Builder cannot be reused after a failed conversion")]
    Poisoned,

    /// The XML adapter could not tokenize the input.
    /// `position` is the byte offset where the reader stopped.
    #[error("XML parse error at byte {position}: {message}")]
    Xml { position: usize, message: String },

    /// The JSON adapter could not encode or decode a tree.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout sax2json-core.
pub type Result<T> = std::result::Result<T, ConvertError>;
