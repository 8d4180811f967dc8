//! Format cache
//!
//! Maps format ids to their canonical field lists. Entries are only added
//! by the traversal (first declaration wins) or replaced through an explicit
//! overwrite; nothing is ever evicted.

use hashbrown::HashMap;
use serde_json::Value;

use super::cache_stats::CacheStats;
use crate::payload::{FieldList, FormatId};

/// Id to field list cache owned by one controller
#[derive(Debug, Default)]
pub struct FormatCache {
    entries: HashMap<FormatId, FieldList>,
    stats: CacheStats,
}

impl FormatCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached fields for `id`, without touching statistics
    #[inline]
    pub fn get(&self, id: FormatId) -> Option<&[Value]> {
        self.entries.get(&id).map(Vec::as_slice)
    }

    /// Cached fields for `id`, counted as a hit or a miss
    pub fn lookup(&self, id: FormatId) -> Option<&[Value]> {
        let found = self.get(id);
        if found.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        found
    }

    /// Whether `id` has an entry
    #[inline]
    pub fn contains(&self, id: FormatId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Record a declaration unless `id` is already cached.
    ///
    /// Returns `true` when the entry was inserted.
    pub fn insert_first(&mut self, id: FormatId, fields: &[Value]) -> bool {
        if self.entries.contains_key(&id) {
            self.stats.record_duplicate();
            tracing::trace!(
                target: "recfmt::cache",
                format_id = id,
                "Skipped later declaration of cached format"
            );
            return false;
        }

        self.entries.insert(id, fields.to_vec());
        self.stats.record_insert();
        tracing::trace!(
            target: "recfmt::cache",
            format_id = id,
            field_count = fields.len(),
            "Cached format declaration"
        );
        true
    }

    /// Store `fields` under `id`, replacing any existing entry
    pub fn set(&mut self, id: FormatId, fields: FieldList) -> Option<FieldList> {
        let previous = self.entries.insert(id, fields);
        if previous.is_some() {
            self.stats.record_overwrite();
            tracing::debug!(
                target: "recfmt::cache",
                format_id = id,
                "Overwrote cached format"
            );
        }
        previous
    }

    /// Number of cached formats
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no formats
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached ids in ascending order
    pub fn ids(&self) -> Vec<FormatId> {
        let mut ids: Vec<FormatId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
