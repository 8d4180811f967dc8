//! Traversal node
//!
//! One position in the nested payload and how far the walk has progressed
//! through it.

use serde_json::Value;

use crate::payload::Carrier;

/// Array or carrier currently being examined
#[derive(Debug, Clone)]
pub enum TraversalNode<'a> {
    /// Array being walked element by element
    Array {
        /// Remaining elements; a consumed iterator cannot be rewound
        items: std::slice::Iter<'a, Value>,
    },
    /// Carrier object visited once through its declaration and nested data
    Record {
        /// Carrier view of the object
        carrier: Carrier<'a>,
        /// Declaration already offered to the cache
        declared: bool,
        /// Nested data already pushed; the node only waits to be popped
        completed: bool,
    },
}

impl<'a> TraversalNode<'a> {
    /// Node for `value`: arrays and carriers get one, every other value is a leaf
    pub fn for_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(TraversalNode::Array {
                items: items.iter(),
            }),
            Value::Object(fields) => {
                Carrier::from_map(fields).map(|carrier| TraversalNode::Record {
                    carrier,
                    declared: false,
                    completed: false,
                })
            }
            _ => None,
        }
    }

    /// Nothing left to do at this position
    #[inline]
    pub fn is_done(&self) -> bool {
        match self {
            TraversalNode::Array { items } => items.as_slice().is_empty(),
            TraversalNode::Record { completed, .. } => *completed,
        }
    }

    /// Whether the node wraps an array
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, TraversalNode::Array { .. })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn leaves_produce_no_node() {
        assert!(TraversalNode::for_value(&json!(1)).is_none());
        assert!(TraversalNode::for_value(&json!("text")).is_none());
        assert!(TraversalNode::for_value(&json!({"n": "plain"})).is_none());
    }

    #[test]
    fn empty_array_is_done_immediately() {
        let value = json!([]);
        let node = TraversalNode::for_value(&value).expect("array node");
        assert!(node.is_array());
        assert!(node.is_done());
    }

    #[test]
    fn fresh_record_is_pending() {
        let value = json!({"f": 1, "s": []});
        let node = TraversalNode::for_value(&value).expect("record node");
        assert!(!node.is_array());
        assert!(!node.is_done());
    }
}
