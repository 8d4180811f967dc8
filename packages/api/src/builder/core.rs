//! Core `FormatsBuilder` structures and base functionality
//!
//! Contains the `FormatsBuilder` struct, its payload state types and the
//! methods that assemble a configured `FormatController`.

use serde_json::Value;

pub use recfmt_resolver::{FieldList, FormatController, FormatId, FormatResult, ResolverConfig};

/// State marker indicating no payload has been bound
#[derive(Debug, Clone, Copy)]
pub struct PayloadNotSet;

/// State carrying the payload root the controller will be bound to
#[derive(Debug, Clone, Copy)]
pub struct PayloadSet<'a> {
    /// Payload root
    pub payload: &'a Value,
}

/// Builder for format controllers
///
/// Type parameter `S` tracks the payload state:
/// - `PayloadNotSet`: default state, configuration methods and `payload` available
/// - `PayloadSet`: payload bound, `build` available
#[derive(Debug, Clone)]
pub struct FormatsBuilder<S = PayloadNotSet> {
    /// Type state - stores actual state data, not just a marker
    pub(crate) state: S,
    /// Resolver configuration
    pub(crate) config: ResolverConfig,
    /// Formats stored before any traversal
    pub(crate) seeds: Vec<(FormatId, FieldList)>,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl Default for FormatsBuilder<PayloadNotSet> {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatsBuilder<PayloadNotSet> {
    /// Start building a controller with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PayloadNotSet,
            config: ResolverConfig::default(),
            seeds: Vec::new(),
            debug_enabled: false,
        }
    }

    /// Bind the payload root
    ///
    /// # Returns
    /// `FormatsBuilder<PayloadSet>` ready to `build`
    #[must_use]
    pub fn payload(self, payload: &Value) -> FormatsBuilder<PayloadSet<'_>> {
        FormatsBuilder {
            state: PayloadSet { payload },
            config: self.config,
            seeds: self.seeds,
            debug_enabled: self.debug_enabled,
        }
    }
}

impl<S> FormatsBuilder<S> {
    /// Replace the whole resolver configuration
    #[must_use]
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit recovery nesting depth
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Cap traversal nesting depth
    #[must_use]
    pub fn traversal_depth_limit(mut self, limit: usize) -> Self {
        self.config.traversal_depth_limit = Some(limit);
        self
    }

    /// Walk the whole payload at build time
    #[must_use]
    pub fn eager(mut self) -> Self {
        self.config.eager_scan = true;
        self
    }

    /// Keep `f` on carriers during data recovery
    #[must_use]
    pub fn keep_format_ids(mut self) -> Self {
        self.config.strip_format_ids = false;
        self
    }

    /// Pre-seed format `id`; seeded formats shadow payload declarations
    #[must_use]
    pub fn seed(mut self, id: FormatId, fields: impl Into<FieldList>) -> Self {
        self.seeds.push((id, fields.into()));
        self
    }

    /// Enable debug logging
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }
}

impl<'a> FormatsBuilder<PayloadSet<'a>> {
    /// Build the controller
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Configuration` for an invalid configuration and
    /// `FormatError::DepthLimitExceeded` when an eager scan hits the depth limit.
    pub fn build(self) -> FormatResult<FormatController<'a>> {
        let eager = self.config.eager_scan;
        let mut controller = FormatController::with_config(
            self.state.payload,
            self.config.with_eager_scan(false),
        )?;

        let seeded = self.seeds.len();
        for (id, fields) in self.seeds {
            controller.set_original(id, fields);
        }

        if eager {
            controller.scan_formats()?;
        }

        if self.debug_enabled {
            log::debug!(
                "recfmt Builder: controller ready ({} seeded, {} cached, eager: {})",
                seeded,
                controller.cache().len(),
                eager
            );
        }

        Ok(controller)
    }
}
