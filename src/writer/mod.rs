//! Serializes the typed document model back into JSON or YAML text.
//!
//! Each holder writes its recognized keywords in a fixed canonical order; a composition
//! keyword re-interleaves its inline and `$ref` entries in their originally stored order.
//! When the source document carried a `self` URI, every in-document `$ref` (one starting with
//! `#`) is absolutized against it so downstream consumers can treat it standalone.

pub mod content;
pub mod document;
pub mod examples;
pub mod params;
pub mod paths;
pub mod schema;
pub mod security;
mod util;

use crate::error::Result;
use crate::model::document::{Definition, SchemaDocument};
use crate::value::{self, Format, Value};

/// Writes a [`Definition`] to a JSON string.
pub fn write_json(doc: &Definition) -> Result<String> {
    let value = to_value(doc);
    Ok(serde_json::to_string_pretty(&value::to_serde_json(&value))
        .expect("a Value tree always serializes to JSON"))
}

/// Writes a [`Definition`] to a YAML string.
pub fn write_yaml(doc: &Definition) -> Result<String> {
    let value = to_value(doc);
    Ok(serde_yaml::to_string(&value::to_serde_yaml(&value))
        .expect("a Value tree always serializes to YAML"))
}

/// Writes a [`Definition`] in the requested format. `Format::Auto` resolves to JSON.
pub fn write(doc: &Definition, format: Format) -> Result<String> {
    match format {
        Format::Yaml => write_yaml(doc),
        Format::Json | Format::Auto => write_json(doc),
    }
}

/// Writes a [`Definition`] to a file, inferring nothing from the path — `format` is always
/// explicit here since there is no source text to sniff.
pub fn write_to_file(doc: &Definition, path: &str, format: Format) -> Result<()> {
    let text = write(doc, format)?;
    std::fs::write(path, text).map_err(|e| crate::error::Error::Io {
        path: path.to_string(),
        source: e,
    })
}

/// Writes a [`SchemaDocument`] to a JSON string.
pub fn write_schema_json(doc: &SchemaDocument) -> Result<String> {
    let value = to_schema_value(doc);
    Ok(serde_json::to_string_pretty(&value::to_serde_json(&value))
        .expect("a Value tree always serializes to JSON"))
}

/// Writes a [`SchemaDocument`] to a YAML string.
pub fn write_schema_yaml(doc: &SchemaDocument) -> Result<String> {
    let value = to_schema_value(doc);
    Ok(serde_yaml::to_string(&value::to_serde_yaml(&value))
        .expect("a Value tree always serializes to YAML"))
}

/// Writes a [`SchemaDocument`] in the requested format. `Format::Auto` resolves to JSON.
pub fn write_schema(doc: &SchemaDocument, format: Format) -> Result<String> {
    match format {
        Format::Yaml => write_schema_yaml(doc),
        Format::Json | Format::Auto => write_schema_json(doc),
    }
}

fn to_value(doc: &Definition) -> Value {
    let mut value = Value::Map(document::write_definition(doc));
    if let Some(self_uri) = &doc.self_uri {
        absolutize_refs(&mut value, self_uri);
    }
    value
}

fn to_schema_value(doc: &SchemaDocument) -> Value {
    let mut value = schema::write_schema(&doc.root);
    if let Some(self_uri) = &doc.self_uri {
        absolutize_refs(&mut value, self_uri);
    }
    value
}

/// Rewrites every in-document `$ref` (one whose value starts with `#`) to be prefixed with
/// `self_uri`, so a `$ref` extracted from this document remains resolvable on its own.
fn absolutize_refs(value: &mut Value, self_uri: &str) {
    match value {
        Value::Map(map) => {
            if let Some(Value::String(r)) = map.get_mut("$ref") {
                if r.starts_with('#') {
                    *r = format!("{self_uri}{r}");
                }
            }
            for v in map.values_mut() {
                absolutize_refs(v, self_uri);
            }
        }
        Value::Seq(items) => {
            for v in items {
                absolutize_refs(v, self_uri);
            }
        }
        _ => {}
    }
}
