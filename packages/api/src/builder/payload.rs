//! Payload decoding helpers
//!
//! Parse raw payload bytes and inline their referenced structures.

use serde_json::Value;

use recfmt_resolver::{FormatController, FormatError, FormatResult};

/// Parse raw payload bytes into a JSON tree
///
/// # Errors
///
/// Returns `FormatError::InvalidPayload` when the bytes are not valid JSON.
pub fn parse_payload(bytes: &[u8]) -> FormatResult<Value> {
    serde_json::from_slice(bytes).map_err(|e| {
        log::debug!("Failed to parse payload of {} bytes: {}", bytes.len(), e);
        FormatError::from(e)
    })
}

/// Parse a payload string into a JSON tree
///
/// # Errors
///
/// Returns `FormatError::InvalidPayload` when the text is not valid JSON.
pub fn parse_payload_str(text: &str) -> FormatResult<Value> {
    parse_payload(text.as_bytes())
}

/// Inline every referenced structure of `payload` in place
///
/// # Errors
///
/// Returns `FormatError::FormatNotFound` when a carrier refers to an
/// undeclared format.
pub fn recover(payload: &mut Value) -> FormatResult<()> {
    FormatController::recover_data(payload, None)
}

/// Parse raw payload bytes and inline every referenced structure
///
/// # Errors
///
/// Fails like [`parse_payload`] and [`recover`].
pub fn decode(bytes: &[u8]) -> FormatResult<Value> {
    let mut payload = parse_payload(bytes)?;
    recover(&mut payload)?;
    Ok(payload)
}
