//! recfmt resolver prelude
//!
//! The types consumers of the resolver need. Engine internals stay in their
//! modules.

// Controller and lookup seam
pub use crate::controller::{FormatController, FormatLookup, RecoverOptions, recover_with};

// Cache
pub use crate::cache::{CacheStatsSnapshot, FormatCache};

// Configuration
pub use crate::config::{ConfigurationError, ResolverConfig, Validator};

// Error types
pub use crate::error::{ErrorKind, FormatError, FormatResult};

// Payload model
pub use crate::payload::{Carrier, FieldList, FormatId, is_carrier};
