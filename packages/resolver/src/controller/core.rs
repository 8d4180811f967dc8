//! Core FormatController structure and lookups
//!
//! The controller binds one payload root to one format cache and one lazily
//! created traversal engine. Lookups that miss the cache resume the engine
//! instead of restarting it, so a run of lookups costs at most one full pass.

use serde_json::Value;

use crate::cache::FormatCache;
use crate::config::{ResolverConfig, Validator};
use crate::error::{FormatError, FormatResult};
use crate::payload::{FieldList, FormatId};
use crate::traversal::{Advance, TraversalEngine, TraversalStats, drain};

/// Format cache and lazy resolver for one payload
#[derive(Debug)]
pub struct FormatController<'a> {
    /// Payload root the engine walks
    pub(super) data: &'a Value,
    /// Canonical field lists by id
    pub(super) cache: FormatCache,
    /// Created on the first cache miss, then reused
    pub(super) engine: Option<TraversalEngine<'a>>,
    /// Configuration
    pub(super) config: ResolverConfig,
}

impl<'a> FormatController<'a> {
    /// Controller over `data` with default configuration
    #[must_use]
    pub fn new(data: &'a Value) -> Self {
        Self {
            data,
            cache: FormatCache::new(),
            engine: None,
            config: ResolverConfig::default(),
        }
    }

    /// Controller over `data` with a validated configuration.
    ///
    /// Runs a full scan right away when `config.eager_scan` is set.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Configuration` for an invalid configuration and
    /// `FormatError::DepthLimitExceeded` when an eager scan hits the depth limit.
    pub fn with_config(data: &'a Value, config: ResolverConfig) -> FormatResult<Self> {
        config.validate()?;
        let eager = config.eager_scan;
        let mut controller = Self {
            data,
            cache: FormatCache::new(),
            engine: None,
            config,
        };
        if eager {
            controller.scan_formats()?;
        }
        Ok(controller)
    }

    /// Fields of format `id`.
    ///
    /// The returned slice is the canonical cached entry; use
    /// [`get_format_copy`](Self::get_format_copy) for an owned copy.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::FormatNotFound` when the payload holds no
    /// declaration of `id`, and `FormatError::DepthLimitExceeded` when the
    /// walk toward it passes a configured traversal depth limit.
    pub fn get_format(&mut self, id: FormatId) -> FormatResult<&[Value]> {
        if self.cache.lookup(id).is_none() {
            self.resolve(id)?;
        }
        self.cache
            .get(id)
            .ok_or_else(|| FormatError::format_not_found(id))
    }

    /// Independent copy of the fields of format `id`
    ///
    /// # Errors
    ///
    /// Same as [`get_format`](Self::get_format).
    pub fn get_format_copy(&mut self, id: FormatId) -> FormatResult<FieldList> {
        self.get_format(id).map(<[Value]>::to_vec)
    }

    /// Store `fields` as the definition of `id`, replacing any cached entry
    pub fn set_original(&mut self, id: FormatId, fields: impl Into<FieldList>) {
        self.cache.set(id, fields.into());
    }

    /// Walk the rest of the bound payload, caching every declaration.
    ///
    /// Returns the number of cached formats.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::DepthLimitExceeded` when the payload nests deeper than
    /// a configured traversal depth limit.
    pub fn scan_formats(&mut self) -> FormatResult<usize> {
        let depth_limit = self.config.traversal_depth_limit;
        let engine = Self::engine_for(&mut self.engine, self.data, depth_limit);
        drain(engine, &mut self.cache)?;

        tracing::debug!(
            target: "recfmt::controller",
            formats = self.cache.len(),
            "Scanned bound payload"
        );
        Ok(self.cache.len())
    }

    /// Walk another payload, merging its declarations into this cache.
    ///
    /// Ids already cached keep their entry. Returns the number of cached formats.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::DepthLimitExceeded` when the payload nests deeper than
    /// a configured traversal depth limit.
    pub fn scan_payload(&mut self, payload: &Value) -> FormatResult<usize> {
        let mut engine =
            TraversalEngine::with_depth_limit(payload, self.config.traversal_depth_limit);
        drain(&mut engine, &mut self.cache)?;
        Ok(self.cache.len())
    }

    fn resolve(&mut self, id: FormatId) -> FormatResult<()> {
        let depth_limit = self.config.traversal_depth_limit;
        let engine = Self::engine_for(&mut self.engine, self.data, depth_limit);

        loop {
            match engine.advance(&mut self.cache, Some(id))? {
                Advance::Yielded(found) if found == id => {
                    tracing::debug!(
                        target: "recfmt::controller",
                        format_id = id,
                        depth = engine.depth(),
                        "Resolved format by traversal"
                    );
                    return Ok(());
                }
                Advance::Yielded(_) => {}
                Advance::Exhausted => {
                    tracing::debug!(
                        target: "recfmt::controller",
                        format_id = id,
                        cached = self.cache.len(),
                        "Format not found in exhausted payload"
                    );
                    return Err(FormatError::format_not_found(id));
                }
            }
        }
    }

    fn engine_for<'e>(
        slot: &'e mut Option<TraversalEngine<'a>>,
        data: &'a Value,
        depth_limit: Option<usize>,
    ) -> &'e mut TraversalEngine<'a> {
        slot.get_or_insert_with(|| TraversalEngine::with_depth_limit(data, depth_limit))
    }

    /// Payload root bound to this controller
    #[inline]
    pub fn data(&self) -> &'a Value {
        self.data
    }

    /// Format cache
    #[inline]
    pub fn cache(&self) -> &FormatCache {
        &self.cache
    }

    /// Configuration
    #[inline]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Whether the bound payload has been walked completely
    pub fn is_exhausted(&self) -> bool {
        self.engine.as_ref().is_some_and(TraversalEngine::is_exhausted)
    }

    /// Traversal counters, once the engine exists
    pub fn traversal_stats(&self) -> Option<&TraversalStats> {
        self.engine.as_ref().map(TraversalEngine::stats)
    }
}
