//! Configuration validation
//!
//! Validation trait and error type for resolver configuration.

use super::resolver_config::{MAX_DEPTH_CEILING, ResolverConfig};

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid depth limit: {0}")]
    InvalidDepth(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidDepth` - if a depth limit is zero or above the ceiling
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for ResolverConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigurationError::InvalidDepth(
                "max_depth cannot be zero".to_string(),
            ));
        }

        if self.max_depth > MAX_DEPTH_CEILING {
            return Err(ConfigurationError::InvalidDepth(format!(
                "max_depth cannot exceed {MAX_DEPTH_CEILING}"
            )));
        }

        match self.traversal_depth_limit {
            Some(0) => Err(ConfigurationError::InvalidDepth(
                "traversal_depth_limit cannot be zero".to_string(),
            )),
            Some(limit) if limit > MAX_DEPTH_CEILING => Err(ConfigurationError::InvalidDepth(
                format!("traversal_depth_limit cannot exceed {MAX_DEPTH_CEILING}"),
            )),
            _ => Ok(()),
        }
    }
}
