//! Resolver configuration
//!
//! - `resolver_config`: `ResolverConfig` with defaults and named presets
//! - `validation`: `Validator` trait and `ConfigurationError`

pub mod resolver_config;
pub mod validation;

pub use resolver_config::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, ResolverConfig};
pub use validation::{ConfigResult, ConfigurationError, Validator};
