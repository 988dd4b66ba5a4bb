//! The tagged value tree: the lowest common denominator between JSON and YAML.
//!
//! Everything downstream of this module (the parser, the validator, the writer) works only
//! against [`Value`]; neither `serde_json` nor `serde_yaml` types leak past the conversion
//! functions here.

use base64::Engine as _;
use indexmap::IndexMap;
use std::fmt;

use crate::error::{Error, Result};

/// An insertion-ordered string-keyed map, as required by JSON Schema / OpenAPI's rule that
/// property iteration order must match source order.
pub type ValueMap = IndexMap<String, Value>;

/// The tagged value tree.
///
/// Numbers are split into integer and floating-point tags, mirroring the distinction both
/// JSON and YAML numeric literals carry; this matters for faithfully re-emitting `42` as `42`
/// rather than `42.0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null` / YAML `~`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// An integral number.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string scalar.
    String(String),
    /// An opaque byte blob, produced only by YAML's `!!binary` tag.
    Bytes(Vec<u8>),
    /// An ordered sequence.
    Seq(Vec<Value>),
    /// An ordered mapping.
    Map(ValueMap),
}

impl Value {
    /// Convenience constructor for an empty mapping.
    pub fn empty_map() -> Self {
        Value::Map(ValueMap::new())
    }

    /// Convenience constructor for an empty sequence.
    pub fn empty_seq() -> Self {
        Value::Seq(Vec::new())
    }

    /// Returns the backing map if this is [`Value::Map`].
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the backing sequence if this is [`Value::Seq`].
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the backing string if this is [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the backing bool if this is [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// True for `Value::Map` with no entries.
    pub fn is_empty_map(&self) -> bool {
        matches!(self, Value::Map(m) if m.is_empty())
    }

    /// True for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// The requested or sniffed input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Force JSON parsing / emission.
    Json,
    /// Force YAML parsing / emission.
    Yaml,
    /// Sniff the format from the input (parsing only).
    #[default]
    Auto,
}

/// Sniffs JSON vs YAML from the first non-whitespace byte: `{` or `[` means JSON, anything
/// else is treated as YAML (YAML is a superset of JSON for our purposes, but we keep the two
/// front ends separate so each can apply its own tag handling).
pub fn sniff(text: &str) -> Format {
    match text.trim_start().as_bytes().first() {
        Some(b'{') | Some(b'[') => Format::Json,
        _ => Format::Yaml,
    }
}

/// Parses `text` into a [`Value`] tree using `format`, resolving `Format::Auto` via [`sniff`].
pub fn parse(text: &str, format: Format) -> Result<Value> {
    let resolved = match format {
        Format::Auto => sniff(text),
        other => other,
    };
    match resolved {
        Format::Json => parse_json(text),
        Format::Yaml => parse_yaml(text),
        Format::Auto => unreachable!("resolved above"),
    }
}

fn parse_json(text: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| Error::invalid(format!("malformed JSON: {e}")))?;
    Ok(from_serde_json(parsed))
}

fn parse_yaml(text: &str) -> Result<Value> {
    let parsed: serde_yaml::Value = serde_yaml::from_str(text)
        .map_err(|e| Error::invalid(format!("malformed YAML: {e}")))?;
    from_serde_yaml(parsed)
}

fn from_serde_json(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Null
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Seq(items.into_iter().map(from_serde_json).collect())
        }
        serde_json::Value::Object(map) => {
            let mut out = ValueMap::with_capacity(map.len());
            for (k, v) in map {
                out.insert(k, from_serde_json(v));
            }
            Value::Map(out)
        }
    }
}

fn from_serde_yaml(v: serde_yaml::Value) -> Result<Value> {
    Ok(match v {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Null
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(from_serde_yaml(item)?);
            }
            Value::Seq(out)
        }
        serde_yaml::Value::Mapping(map) => {
            let mut out = ValueMap::with_capacity(map.len());
            for (k, v) in map {
                let key = yaml_key_to_string(&k)?;
                out.insert(key, from_serde_yaml(v)?);
            }
            Value::Map(out)
        }
        serde_yaml::Value::Tagged(tagged) => from_tagged_yaml(*tagged)?,
    })
}

fn yaml_key_to_string(key: &serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::invalid(format!(
            "unsupported YAML mapping key: {other:?}"
        ))),
    }
}

fn from_tagged_yaml(tagged: serde_yaml::value::TaggedValue) -> Result<Value> {
    let is_binary = tagged.tag.to_string().ends_with("binary");
    if is_binary {
        if let serde_yaml::Value::String(encoded) = &tagged.value {
            let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
            let decoded = base64::engine::general_purpose::STANDARD
                .decode(cleaned)
                .map_err(|e| Error::invalid(format!("malformed !!binary scalar: {e}")))?;
            return Ok(Value::Bytes(decoded));
        }
    }
    // Unknown tags degrade to their untagged value; the tag itself is not semantically
    // significant to anything this crate models.
    from_serde_yaml(tagged.value)
}

/// Converts a [`Value`] to a `serde_json::Value`, used by the writer's JSON backend.
pub fn to_serde_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bytes(b) => {
            serde_json::Value::String(base64::engine::general_purpose::STANDARD.encode(b))
        }
        Value::Seq(items) => serde_json::Value::Array(items.iter().map(to_serde_json).collect()),
        Value::Map(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (k, v) in map {
                out.insert(k.clone(), to_serde_json(v));
            }
            serde_json::Value::Object(out)
        }
    }
}

/// Converts a [`Value`] to a `serde_yaml::Value`, used by the writer's YAML backend.
pub fn to_serde_yaml(v: &Value) -> serde_yaml::Value {
    match v {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Int(i) => serde_yaml::Value::Number((*i).into()),
        Value::Float(f) => serde_yaml::Value::Number((*f).into()),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Bytes(b) => {
            serde_yaml::Value::String(base64::engine::general_purpose::STANDARD.encode(b))
        }
        Value::Seq(items) => serde_yaml::Value::Sequence(items.iter().map(to_serde_yaml).collect()),
        Value::Map(map) => {
            let mut out = serde_yaml::Mapping::with_capacity(map.len());
            for (k, v) in map {
                out.insert(serde_yaml::Value::String(k.clone()), to_serde_yaml(v));
            }
            serde_yaml::Value::Mapping(out)
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Yaml => write!(f, "yaml"),
            Format::Auto => write!(f, "auto"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_json_from_brace() {
        assert_eq!(sniff("  {\"a\":1}"), Format::Json);
        assert_eq!(sniff("[1,2]"), Format::Json);
    }

    #[test]
    fn sniffs_yaml_otherwise() {
        assert_eq!(sniff("openapi: 3.2.0"), Format::Yaml);
        assert_eq!(sniff(""), Format::Yaml);
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let v = parse(r#"{"b":1,"a":2}"#, Format::Json).unwrap();
        let map = v.as_map().unwrap();
        let keys: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn yaml_binary_tag_decodes_to_bytes() {
        let yaml = "data: !!binary aGVsbG8=\n";
        let v = parse(yaml, Format::Yaml).unwrap();
        let data = v.as_map().unwrap().get("data").unwrap();
        assert_eq!(data, &Value::Bytes(b"hello".to_vec()));
    }

    #[test]
    fn distinguishes_int_and_float() {
        let v = parse(r#"{"i":1,"f":1.5}"#, Format::Json).unwrap();
        let map = v.as_map().unwrap();
        assert_eq!(map.get("i"), Some(&Value::Int(1)));
        assert_eq!(map.get("f"), Some(&Value::Float(1.5)));
    }
}
