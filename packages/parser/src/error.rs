//! Error types for the parser.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// No process in the document is executable or contains flow nodes.
    #[error("no valid process found: document contains no executable process and no flow content")]
    NoValidProcess,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParserError {
    /// True when the failure is attributable to the submitted document
    /// rather than to the environment.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::XmlParse(_) | Self::NoValidProcess)
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
