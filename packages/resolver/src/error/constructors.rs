//! Error constructor functions
//!
//! Factory methods for creating format errors with proper context.

use super::types::FormatError;
use crate::payload::FormatId;

impl FormatError {
    /// Creates a lookup error for a format id absent from the payload
    ///
    /// # Examples
    /// ```
    /// use recfmt_resolver::error::FormatError;
    ///
    /// let error = FormatError::format_not_found(3);
    /// assert_eq!(error.to_string(), "format 3 not found");
    /// ```
    #[must_use]
    pub fn format_not_found(id: FormatId) -> Self {
        FormatError::FormatNotFound { id }
    }

    /// Creates a depth limit error
    #[must_use]
    pub fn depth_limit_exceeded(depth: usize, limit: usize) -> Self {
        FormatError::DepthLimitExceeded { depth, limit }
    }

    /// Creates a payload decoding error
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        FormatError::InvalidPayload(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn constructors_map_to_kinds() {
        assert_eq!(FormatError::format_not_found(7).kind(), ErrorKind::Lookup);
        assert_eq!(
            FormatError::depth_limit_exceeded(10, 8).kind(),
            ErrorKind::Limit
        );
        assert_eq!(
            FormatError::invalid_payload("eof").kind(),
            ErrorKind::Payload
        );
    }

    #[test]
    fn depth_error_message_names_both_values() {
        let message = FormatError::depth_limit_exceeded(65, 64).to_string();
        assert!(message.contains("65"));
        assert!(message.contains("64"));
    }
}
