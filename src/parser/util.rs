//! Shared field-extraction helpers used by every parser submodule.
//!
//! Each parser function consumes a [`ValueMap`] by removing the keys it understands and
//! folding whatever remains into the holder's `extensions` (keys starting with `x-`) and, for
//! schemas, `custom_keywords` maps. This keeps every holder's "extra data" lossless without
//! requiring a derive macro that cannot express the reference-with-siblings shape.

use indexmap::IndexMap;

use crate::value::{Value, ValueMap};

/// Removes and returns a field as a raw [`Value`].
pub fn take(map: &mut ValueMap, key: &str) -> Option<Value> {
    map.shift_remove(key)
}

/// Removes and returns a field as a `String`, tolerating a non-string value by stringifying it
/// (a schema `format`, e.g., is occasionally authored as a bare token without quotes in YAML).
pub fn take_string(map: &mut ValueMap, key: &str) -> Option<String> {
    take(map, key).map(value_to_string)
}

fn value_to_string(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Removes and returns a field as a `bool`.
pub fn take_bool(map: &mut ValueMap, key: &str) -> Option<bool> {
    take(map, key).and_then(|v| v.as_bool())
}

/// Removes and returns a field as a `u64`, accepting any non-negative integral value.
pub fn take_u64(map: &mut ValueMap, key: &str) -> Option<u64> {
    take(map, key).and_then(|v| match v {
        Value::Int(i) if i >= 0 => Some(i as u64),
        Value::Float(f) if f >= 0.0 => Some(f as u64),
        _ => None,
    })
}

/// Removes and returns a field as an `f64`.
pub fn take_f64(map: &mut ValueMap, key: &str) -> Option<f64> {
    take(map, key).and_then(|v| match v {
        Value::Int(i) => Some(i as f64),
        Value::Float(f) => Some(f),
        _ => None,
    })
}

/// Removes and returns a field as a `Vec<String>`, skipping any non-string element.
pub fn take_string_vec(map: &mut ValueMap, key: &str) -> Vec<String> {
    take(map, key)
        .and_then(|v| match v {
            Value::Seq(items) => Some(
                items
                    .into_iter()
                    .filter_map(|i| i.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => None,
        })
        .unwrap_or_default()
}

/// Removes and returns a field as a nested `ValueMap`.
pub fn take_map(map: &mut ValueMap, key: &str) -> Option<ValueMap> {
    take(map, key).and_then(|v| match v {
        Value::Map(m) => Some(m),
        _ => None,
    })
}

/// Removes and returns a field as a nested `Vec<Value>`.
pub fn take_seq(map: &mut ValueMap, key: &str) -> Option<Vec<Value>> {
    take(map, key).and_then(|v| match v {
        Value::Seq(s) => Some(s),
        _ => None,
    })
}

/// Drains whatever remains of `map` into an `extensions` table (`x-` prefixed keys) and a
/// `leftover` table (everything else, for callers that track unknown-keyword custom data).
pub fn split_remainder(map: ValueMap) -> (IndexMap<String, Value>, IndexMap<String, Value>) {
    let mut extensions = IndexMap::new();
    let mut leftover = IndexMap::new();
    for (k, v) in map {
        if k.starts_with("x-") {
            extensions.insert(k, v);
        } else {
            leftover.insert(k, v);
        }
    }
    (extensions, leftover)
}

/// Drains whatever remains of `map` into an `extensions` table, discarding any non-`x-` key
/// (used by holders that do not track unrecognized keywords separately).
pub fn take_extensions(map: ValueMap) -> IndexMap<String, Value> {
    split_remainder(map).0
}
