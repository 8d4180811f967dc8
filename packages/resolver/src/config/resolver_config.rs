//! Resolver configuration and preset policies
//!
//! Provides `ResolverConfig` for configuring nesting limits, eager scanning
//! and reference stripping during data recovery.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth of recursive data recovery
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Hard ceiling accepted by validation
pub const MAX_DEPTH_CEILING: usize = 65_536;

/// Resolver configuration and limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum number of nested arrays/objects data recovery will recurse into
    pub max_depth: usize,
    /// Optional cap on the traversal stack; `None` walks any nesting
    pub traversal_depth_limit: Option<usize>,
    /// Remove `f` from every carrier visited by data recovery
    pub strip_format_ids: bool,
    /// Walk the whole payload when the controller is built
    pub eager_scan: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            traversal_depth_limit: None,
            strip_format_ids: true,
            eager_scan: false,
        }
    }
}

impl ResolverConfig {
    /// Shallow limits and eager scan, for small payloads from untrusted sources
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_depth: 64,
            traversal_depth_limit: Some(64),
            strip_format_ids: true,
            eager_scan: true,
        }
    }

    /// Deep limit and references kept after recovery
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            max_depth: MAX_DEPTH_CEILING,
            traversal_depth_limit: None,
            strip_format_ids: false,
            eager_scan: false,
        }
    }

    /// Set the maximum recovery depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Cap the traversal stack, or lift the cap with `None`
    #[must_use]
    pub fn with_traversal_depth_limit(mut self, limit: Option<usize>) -> Self {
        self.traversal_depth_limit = limit;
        self
    }

    /// Enable or disable eager scanning at build time
    #[must_use]
    pub fn with_eager_scan(mut self, eager_scan: bool) -> Self {
        self.eager_scan = eager_scan;
        self
    }

    /// Keep or strip `f` during data recovery
    #[must_use]
    pub fn with_strip_format_ids(mut self, strip: bool) -> Self {
        self.strip_format_ids = strip;
        self
    }
}
