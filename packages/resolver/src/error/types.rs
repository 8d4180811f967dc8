//! Format resolution error types
//!
//! Core error types for carrier traversal, format lookup and payload recovery.

use crate::config::ConfigurationError;
use crate::payload::FormatId;

/// Result type for format resolution operations
pub type FormatResult<T> = Result<T, FormatError>;

/// Format resolution errors
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The id never occurs with an inline structure in the bound payload.
    ///
    /// Raised only after the traversal has been fully exhausted, so retrying
    /// the same lookup yields the same result.
    #[error("format {id} not found")]
    FormatNotFound { id: FormatId },

    /// Payload nesting exceeded the configured traversal depth
    #[error("payload nesting depth {depth} exceeds limit {limit}")]
    DepthLimitExceeded { depth: usize, limit: usize },

    /// Raw payload could not be decoded
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Resolver configuration rejected by validation
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Coarse classification used by callers that only branch on error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lookup of an unknown format id
    Lookup,
    /// Structural limit hit while walking the payload
    Limit,
    /// Undecodable payload bytes
    Payload,
    /// Invalid configuration
    Configuration,
}

impl FormatError {
    /// Category of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::FormatNotFound { .. } => ErrorKind::Lookup,
            FormatError::DepthLimitExceeded { .. } => ErrorKind::Limit,
            FormatError::InvalidPayload(_) => ErrorKind::Payload,
            FormatError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Whether this is a lookup failure for an absent format id
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FormatError::FormatNotFound { .. })
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(error: serde_json::Error) -> Self {
        FormatError::invalid_payload(error.to_string())
    }
}
