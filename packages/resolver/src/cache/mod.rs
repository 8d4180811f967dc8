//! Format caching
//!
//! - `format_cache`: append-only id to field list map
//! - `cache_stats`: hit, miss and declaration counters

pub mod cache_stats;
pub mod format_cache;

pub use cache_stats::{CacheStats, CacheStatsSnapshot};
pub use format_cache::FormatCache;
