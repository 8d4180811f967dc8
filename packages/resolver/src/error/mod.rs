//! Format resolution error handling module
//!
//! Error types, constructors and the result alias shared by the traversal
//! engine, the format cache and the controller.

mod constructors;
mod types;

pub use types::{ErrorKind, FormatError, FormatResult};
