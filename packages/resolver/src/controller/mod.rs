//! Format controller
//!
//! - `core`: `FormatController` with lookups, seeding and scanning
//! - `lookup`: `FormatLookup` trait shared by controllers and caches
//! - `recovery`: inlining referenced structures back into payloads

pub mod core;
pub mod lookup;
pub mod recovery;

pub use self::core::FormatController;
pub use lookup::FormatLookup;
pub use recovery::{RecoverOptions, recover_with};
