//! Flattening of nested structured values into a single-level map.
//!
//! Operates on [`serde_json::Value`] so "is this structured?" is a variant
//! match instead of a runtime type probe. Null is a leaf, never a node; a
//! naive object check would recurse into it and lose the value.

#![forbid(unsafe_code)]

use log::debug;
use serde_json::{Map, Value};

/// True for values that flattening recurses into: objects and arrays.
///
/// `Null` is explicitly a leaf. Booleans, numbers, and strings are leaves.
#[inline]
pub fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Flatten `value` into a single-level key/value map.
///
/// Traversal follows each level's own enumeration order: insertion order for
/// object keys, index order for arrays (indices become string keys).
/// Structured children are recursed into and merged; leaf children are copied
/// as-is, `Null` included.
///
/// With `preserve_path` set, merged keys carry their full dotted ancestor
/// path (`"a.b.0"`), which keeps them collision-free. Without it, children
/// keep their own unqualified names and a deeper key silently overwrites an
/// earlier one that shares its name; the overwrite is logged at debug level.
///
/// A non-structured `value` has no keys to enumerate and yields an empty map.
pub fn flatten_value(value: &Value, preserve_path: bool) -> Map<String, Value> {
    let mut flat = Map::new();
    match value {
        Value::Object(fields) => {
            for (key, child) in fields {
                merge_child(&mut flat, key, child, preserve_path);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                merge_child(&mut flat, &index.to_string(), child, preserve_path);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
    flat
}

fn merge_child(flat: &mut Map<String, Value>, key: &str, child: &Value, preserve_path: bool) {
    if is_structured(child) {
        for (nested_key, leaf) in flatten_value(child, preserve_path) {
            let path = if preserve_path {
                format!("{key}.{nested_key}")
            } else {
                nested_key
            };
            insert_leaf(flat, path, leaf);
        }
    } else {
        insert_leaf(flat, key.to_owned(), child.clone());
    }
}

fn insert_leaf(flat: &mut Map<String, Value>, key: String, leaf: Value) {
    if let Some(previous) = flat.insert(key.clone(), leaf) {
        debug!("flatten collision on key {key:?}, overwrote {previous}");
    }
}
