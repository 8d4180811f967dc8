//! Format lookup seam
//!
//! Data recovery only needs "give me the fields of id N". Both a live
//! controller (which may still have to walk its payload) and a fully
//! populated cache can answer that.

use crate::cache::FormatCache;
use crate::error::{FormatError, FormatResult};
use crate::payload::{FieldList, FormatId};

use super::core::FormatController;

/// Source of field lists by format id
pub trait FormatLookup {
    /// Owned fields of format `id`
    ///
    /// # Errors
    ///
    /// Returns `FormatError::FormatNotFound` when `id` is unknown to the source.
    fn resolve_format(&mut self, id: FormatId) -> FormatResult<FieldList>;
}

impl FormatLookup for FormatController<'_> {
    fn resolve_format(&mut self, id: FormatId) -> FormatResult<FieldList> {
        self.get_format_copy(id)
    }
}

impl FormatLookup for FormatCache {
    fn resolve_format(&mut self, id: FormatId) -> FormatResult<FieldList> {
        self.lookup(id)
            .map(<[_]>::to_vec)
            .ok_or_else(|| FormatError::format_not_found(id))
    }
}
