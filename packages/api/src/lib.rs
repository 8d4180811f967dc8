//! recfmt Public API
//!
//! Lazy format resolution for reference-deduplicated record and table payloads,
//! with a fluent builder for controllers and one-call payload decoding.
//!
//! ```rust
//! use recfmt::Formats;
//! use serde_json::json;
//!
//! let payload = json!([{"f": 1, "s": [{"n": "id"}], "d": [{"f": 1, "d": [[7]]}]}]);
//! let mut controller = Formats::builder().payload(&payload).eager().build().unwrap();
//! assert_eq!(controller.get_format(1).unwrap(), &[json!({"n": "id"})]);
//!
//! let decoded = recfmt::decode(br#"[{"f": 2, "s": ["x"]}, {"f": 2}]"#).unwrap();
//! assert_eq!(decoded, json!([{"s": ["x"]}, {"s": ["x"]}]));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::{
    FieldList, FormatController, FormatId, FormatResult, FormatsBuilder, PayloadNotSet,
    PayloadSet, ResolverConfig, decode, parse_payload, parse_payload_str, recover,
};

// Re-export important types from the resolver package
pub use recfmt_resolver::{
    CacheStatsSnapshot, Carrier, ErrorKind, FormatCache, FormatError, FormatLookup,
    RecoverOptions, Validator, is_carrier, recover_with,
};

use serde_json::Value;

/// Main entry point providing static builder methods
pub struct Formats;

impl Formats {
    /// Create a new controller builder
    ///
    /// Shorthand for `FormatsBuilder::new()`
    #[must_use]
    pub fn builder() -> FormatsBuilder {
        FormatsBuilder::new()
    }

    /// Controller over `payload` with default configuration
    #[must_use]
    pub fn from_payload(payload: &Value) -> FormatController<'_> {
        FormatController::new(payload)
    }
}

/// Create a new controller builder
///
/// Shorthand for `FormatsBuilder::new()`
#[must_use]
pub fn builder() -> FormatsBuilder {
    FormatsBuilder::new()
}
