//! Small helpers for conditionally inserting optional fields, mirroring `parser::util`'s
//! `take_*` family in the opposite direction.

use crate::value::{Value, ValueMap};

pub fn put_string(map: &mut ValueMap, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::String(v.clone()));
    }
}

pub fn put_bool(map: &mut ValueMap, key: &str, value: Option<bool>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::Bool(v));
    }
}

pub fn put_u64(map: &mut ValueMap, key: &str, value: Option<u64>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::Int(v as i64));
    }
}

pub fn put_f64(map: &mut ValueMap, key: &str, value: Option<f64>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::Float(v));
    }
}

pub fn put_string_vec(map: &mut ValueMap, key: &str, values: &[String]) {
    if !values.is_empty() {
        map.insert(
            key.to_string(),
            Value::Seq(values.iter().cloned().map(Value::String).collect()),
        );
    }
}

pub fn extend_extensions(map: &mut ValueMap, extensions: &indexmap::IndexMap<String, Value>) {
    for (k, v) in extensions {
        map.insert(k.clone(), v.clone());
    }
}
