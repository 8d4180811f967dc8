//! Carrier nodes
//!
//! A carrier is any JSON object holding `f` (format id) or `s` (inline
//! structure), optionally with `d` (nested payload). Everything else in the
//! payload is either an array to walk through or an opaque leaf.

use serde_json::{Map, Value};

/// Integer back-reference to a declared structure
pub type FormatId = u64;

/// Ordered field descriptors of one structure literal
pub type FieldList = Vec<Value>;

/// Key of the format id
pub const FORMAT_ID_KEY: &str = "f";
/// Key of the inline structure literal
pub const STRUCTURE_KEY: &str = "s";
/// Key of the nested payload
pub const NESTED_KEY: &str = "d";

/// Check whether `value` is a carrier object
#[inline]
pub fn is_carrier(value: &Value) -> bool {
    value.as_object().is_some_and(is_carrier_map)
}

#[inline]
pub(crate) fn is_carrier_map(map: &Map<String, Value>) -> bool {
    map.contains_key(FORMAT_ID_KEY) || map.contains_key(STRUCTURE_KEY)
}

/// Borrowed view over a carrier object
#[derive(Debug, Clone, Copy)]
pub struct Carrier<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Carrier<'a> {
    /// View `value` as a carrier, if it is one
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().and_then(Self::from_map)
    }

    /// View an object map as a carrier, if it is one
    pub fn from_map(fields: &'a Map<String, Value>) -> Option<Self> {
        is_carrier_map(fields).then_some(Self { fields })
    }

    /// Format id, when `f` holds a non-negative integer
    pub fn format_id(&self) -> Option<FormatId> {
        self.fields.get(FORMAT_ID_KEY).and_then(Value::as_u64)
    }

    /// Inline structure, when `s` holds an array
    pub fn structure(&self) -> Option<&'a [Value]> {
        self.fields
            .get(STRUCTURE_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// Nested payload under `d`
    pub fn nested(&self) -> Option<&'a Value> {
        self.fields.get(NESTED_KEY)
    }

    /// Whether the carrier declares an inline structure key at all
    #[inline]
    pub fn has_structure(&self) -> bool {
        self.fields.contains_key(STRUCTURE_KEY)
    }

    /// Format id and structure, when the carrier is a well-formed declaration
    pub fn declaration(&self) -> Option<(FormatId, &'a [Value])> {
        Some((self.format_id()?, self.structure()?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn carrier_requires_f_or_s() {
        assert!(is_carrier(&json!({"f": 1})));
        assert!(is_carrier(&json!({"s": []})));
        assert!(!is_carrier(&json!({"d": [{"f": 1}]})));
        assert!(!is_carrier(&json!([{"f": 1}])));
        assert!(!is_carrier(&json!("f")));
    }

    #[test]
    fn declaration_needs_integer_id_and_array_structure() {
        let good = json!({"f": 4, "s": [{"n": "id"}]});
        let carrier = Carrier::from_value(&good).expect("carrier");
        let (id, fields) = carrier.declaration().expect("declaration");
        assert_eq!(id, 4);
        assert_eq!(fields, &[json!({"n": "id"})]);

        let text_id = json!({"f": "4", "s": []});
        assert!(Carrier::from_value(&text_id).expect("carrier").declaration().is_none());

        let negative_id = json!({"f": -1, "s": []});
        assert!(Carrier::from_value(&negative_id).expect("carrier").format_id().is_none());

        let object_structure = json!({"f": 4, "s": {"n": "id"}});
        let carrier = Carrier::from_value(&object_structure).expect("carrier");
        assert!(carrier.has_structure());
        assert!(carrier.declaration().is_none());
    }

    #[test]
    fn nested_payload_is_exposed() {
        let value = json!({"f": 1, "d": [1, 2]});
        let carrier = Carrier::from_value(&value).expect("carrier");
        assert_eq!(carrier.nested(), Some(&json!([1, 2])));
    }
}
