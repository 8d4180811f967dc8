//! # recfmt resolver
//!
//! Lazy format resolution for reference-deduplicated record and table payloads.
//!
//! Remote payloads declare each record/table structure once, as a carrier
//! object `{"f": <id>, "s": [<field>, ...], "d": <nested>}`, and refer to it
//! elsewhere by `{"f": <id>}` alone. This crate finds the first declaration of
//! an id without scanning the whole payload up front, caches every
//! declaration passed on the way, and resumes the same walk for the next
//! lookup.
//!
//! ## Features
//!
//! - **Resumable depth-first traversal** driven by an explicit stack
//! - **First-declaration-wins** resolution in document order
//! - **Append-only format cache** with hit/miss statistics
//! - **Eager scanning** for consumers that want every format up front
//! - **Data recovery** that inlines referenced structures back into payloads
//!
//! ## Usage
//!
//! ```rust
//! use recfmt_resolver::FormatController;
//! use serde_json::json;
//!
//! let payload = json!([
//!     {"f": 1, "s": [{"n": "id"}], "d": [{"f": 2, "s": [{"n": "x"}]}, {"f": 1}]}
//! ]);
//! let mut controller = FormatController::new(&payload);
//!
//! assert_eq!(controller.get_format(1).unwrap(), &[json!({"n": "id"})]);
//! assert_eq!(controller.get_format(2).unwrap(), &[json!({"n": "x"})]);
//! assert!(controller.get_format(3).unwrap_err().is_not_found());
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod payload;
pub mod traversal;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
