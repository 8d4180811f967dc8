//! Data recovery
//!
//! Inlines referenced structures back into a payload. Every carrier that
//! refers to a format by `f` without carrying `s` gets the resolved `s`
//! attached, and `f` is dropped from every carrier once its subtree is done.
//! The whole tree is covered, plain objects included, so this is a plain
//! eager recursion.

use serde_json::{Map, Value};

use super::core::FormatController;
use super::lookup::FormatLookup;
use crate::cache::FormatCache;
use crate::config::ResolverConfig;
use crate::error::{FormatError, FormatResult};
use crate::payload::carrier::is_carrier_map;
use crate::payload::{Carrier, FORMAT_ID_KEY, NESTED_KEY, STRUCTURE_KEY};

/// Knobs for one recovery pass
#[derive(Debug, Clone, Copy)]
pub struct RecoverOptions {
    /// Remove `f` from visited carriers
    pub strip_format_ids: bool,
    /// Deepest array/object nesting accepted
    pub max_depth: usize,
}

impl From<&ResolverConfig> for RecoverOptions {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            strip_format_ids: config.strip_format_ids,
            max_depth: config.max_depth,
        }
    }
}

impl Default for RecoverOptions {
    fn default() -> Self {
        Self::from(&ResolverConfig::default())
    }
}

impl FormatController<'_> {
    /// Inline referenced structures into `payload` in place.
    ///
    /// With a controller, references are resolved through it (lazily walking
    /// its own payload as needed). Without one, every declaration in `payload`
    /// is collected into a standalone cache first, plain objects included, and
    /// references are resolved against that.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::FormatNotFound` for a reference to an undeclared
    /// format and `FormatError::DepthLimitExceeded` for payloads nested too deep.
    pub fn recover_data(
        payload: &mut Value,
        controller: Option<&mut FormatController<'_>>,
    ) -> FormatResult<()> {
        match controller {
            Some(controller) => {
                let options = RecoverOptions::from(controller.config());
                recover_with(payload, controller, options)
            }
            None => {
                let options = RecoverOptions::default();
                let mut cache = FormatCache::new();
                collect_declarations(payload, &mut cache, options.max_depth, 1)?;
                recover_with(payload, &mut cache, options)
            }
        }
    }
}

/// Inline referenced structures into `payload` using any lookup source
///
/// # Errors
///
/// Same as [`FormatController::recover_data`].
pub fn recover_with<L>(payload: &mut Value, lookup: &mut L, options: RecoverOptions) -> FormatResult<()>
where
    L: FormatLookup + ?Sized,
{
    let mut recovered = 0usize;
    recover_value(payload, lookup, options, 1, &mut recovered)?;

    tracing::debug!(
        target: "recfmt::controller",
        recovered = recovered,
        "Recovered referenced structures"
    );
    Ok(())
}

fn recover_value<L>(
    value: &mut Value,
    lookup: &mut L,
    options: RecoverOptions,
    depth: usize,
    recovered: &mut usize,
) -> FormatResult<()>
where
    L: FormatLookup + ?Sized,
{
    match value {
        Value::Array(items) => {
            check_depth(depth, options.max_depth)?;
            for item in items {
                recover_value(item, lookup, options, depth + 1, recovered)?;
            }
        }
        Value::Object(fields) if is_carrier_map(fields) => {
            check_depth(depth, options.max_depth)?;
            recover_carrier(fields, lookup, options, depth, recovered)?;
        }
        Value::Object(fields) => {
            check_depth(depth, options.max_depth)?;
            for field in fields.values_mut() {
                recover_value(field, lookup, options, depth + 1, recovered)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn recover_carrier<L>(
    fields: &mut Map<String, Value>,
    lookup: &mut L,
    options: RecoverOptions,
    depth: usize,
    recovered: &mut usize,
) -> FormatResult<()>
where
    L: FormatLookup + ?Sized,
{
    let has_structure = fields.get(STRUCTURE_KEY).is_some_and(|s| !s.is_null());
    if !has_structure {
        if let Some(id) = fields.get(FORMAT_ID_KEY).and_then(Value::as_u64) {
            let structure = lookup.resolve_format(id)?;
            fields.insert(STRUCTURE_KEY.to_string(), Value::Array(structure));
            *recovered += 1;
        }
    }

    if let Some(nested) = fields.get_mut(NESTED_KEY) {
        recover_value(nested, lookup, options, depth + 1, recovered)?;
    }

    if options.strip_format_ids {
        fields.remove(FORMAT_ID_KEY);
    }
    Ok(())
}

/// Record every declaration under `value` in document order, first one wins
fn collect_declarations(
    value: &Value,
    cache: &mut FormatCache,
    max_depth: usize,
    depth: usize,
) -> FormatResult<()> {
    match value {
        Value::Array(items) => {
            check_depth(depth, max_depth)?;
            for item in items {
                collect_declarations(item, cache, max_depth, depth + 1)?;
            }
        }
        Value::Object(fields) => {
            check_depth(depth, max_depth)?;
            match Carrier::from_map(fields) {
                Some(carrier) => {
                    if let Some((id, structure)) = carrier.declaration() {
                        cache.insert_first(id, structure);
                    }
                    if let Some(nested) = carrier.nested() {
                        collect_declarations(nested, cache, max_depth, depth + 1)?;
                    }
                }
                None => {
                    for field in fields.values() {
                        collect_declarations(field, cache, max_depth, depth + 1)?;
                    }
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn check_depth(depth: usize, max_depth: usize) -> FormatResult<()> {
    if depth > max_depth {
        return Err(FormatError::depth_limit_exceeded(depth, max_depth));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn options_follow_config() {
        let options = RecoverOptions::from(&ResolverConfig::permissive());
        assert!(!options.strip_format_ids);
        assert!(RecoverOptions::default().strip_format_ids);
    }

    #[test]
    fn recovery_without_stripping_keeps_ids() {
        let mut payload = json!([{"f": 1, "s": ["a"]}, {"f": 1}]);
        let mut cache = FormatCache::new();
        cache.insert_first(1, &[json!("a")]);
        let options = RecoverOptions {
            strip_format_ids: false,
            max_depth: 8,
        };

        recover_with(&mut payload, &mut cache, options).expect("recover");
        assert_eq!(payload, json!([{"f": 1, "s": ["a"]}, {"f": 1, "s": ["a"]}]));
    }

    #[test]
    fn recovery_honours_depth_limit() {
        let mut payload = json!([[[{"f": 1}]]]);
        let mut cache = FormatCache::new();
        let options = RecoverOptions {
            strip_format_ids: true,
            max_depth: 2,
        };

        let error = recover_with(&mut payload, &mut cache, options).expect_err("too deep");
        assert!(matches!(error, FormatError::DepthLimitExceeded { depth: 3, limit: 2 }));
    }

    #[test]
    fn null_structure_is_recovered() {
        let mut payload = json!([{"f": 1, "s": null}]);
        let mut cache = FormatCache::new();
        cache.insert_first(1, &[json!("a")]);

        recover_with(&mut payload, &mut cache, RecoverOptions::default()).expect("recover");
        assert_eq!(payload, json!([{"s": ["a"]}]));
    }

    #[test]
    fn declarations_under_plain_objects_are_collected() {
        let payload = json!({"meta": {"f": 3, "s": ["x"]}, "rows": [{"f": 3, "s": ["later"]}]});
        let mut cache = FormatCache::new();

        collect_declarations(&payload, &mut cache, 8, 1).expect("collect");
        assert_eq!(cache.get(3), Some(&[json!("x")][..]));
        assert_eq!(cache.stats().snapshot().duplicates_skipped, 1);
    }
}
