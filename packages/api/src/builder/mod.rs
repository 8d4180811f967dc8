//! recfmt Builder API modules
//!
//! Fluent construction of format controllers plus payload decoding helpers.

pub mod core;
pub mod payload;

// Re-export all public types for convenience
pub use self::core::*;
pub use payload::*;
