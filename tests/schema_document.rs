//! Exercises the standalone JSON Schema entry points, independent of any OpenAPI document
//! wrapper: composition ordering, `$ref` absolutization against a document's own base URI, and
//! the format-agnostic `parse_string` dispatch.

use pretty_assertions::assert_eq;

use oas::{Format, ParsedInput, Schema};

const PRODUCT_SCHEMA: &str = r##"{
  "$id": "https://example.com/schemas/product.json",
  "type": "object",
  "properties": {
    "id": { "type": "string" },
    "variant": {
      "oneOf": [
        { "$ref": "#/$defs/Physical" },
        { "type": "object", "properties": { "downloadUrl": { "type": "string" } } },
        { "$ref": "#/$defs/Bundle" }
      ]
    }
  },
  "$defs": {
    "Physical": { "type": "object", "properties": { "weightGrams": { "type": "integer" } } },
    "Bundle": { "type": "object", "properties": { "items": { "type": "array" } } }
  }
}"##;

#[test]
fn parse_string_dispatches_bare_schemas_without_an_openapi_key() {
    match oas::parse_string(PRODUCT_SCHEMA, Format::Json).unwrap() {
        ParsedInput::Schema(doc) => {
            let obj = doc.root.as_object().expect("object schema");
            assert!(obj.types.contains(&"object".to_string()));
        }
        ParsedInput::Document(_) => panic!("a schema with no 'openapi' key must not parse as a document"),
    }
}

#[test]
fn composition_alternatives_round_trip_in_original_order() {
    let doc = oas::parse_schema_string(PRODUCT_SCHEMA, Format::Json).unwrap();
    let obj = doc.root.as_object().unwrap();
    let variant = obj.properties.get("variant").unwrap().as_object().unwrap();
    let one_of = variant.one_of.as_ref().expect("oneOf present");

    // Two $refs and one inline schema, interleaved ref/inline/ref in the source.
    assert_eq!(one_of.refs.len(), 2);
    assert_eq!(one_of.schemas.len(), 1);
    assert_eq!(one_of.order.len(), 3);

    let text = oas::write_schema_json(&doc).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let written_one_of = value["properties"]["variant"]["oneOf"].as_array().unwrap();
    assert_eq!(written_one_of.len(), 3);
    assert!(written_one_of[0].get("$ref").is_some());
    assert!(written_one_of[1].get("type").is_some());
    assert!(written_one_of[2].get("$ref").is_some());
}

#[test]
fn self_uri_absolutizes_fragment_only_refs_on_write() {
    let doc = oas::parse_schema_string_at(
        PRODUCT_SCHEMA,
        Format::Json,
        Some("https://example.com/schemas/product.json".to_string()),
    )
    .unwrap();
    let text = oas::write_schema_json(&doc).unwrap();
    assert!(text.contains("\"https://example.com/schemas/product.json#/$defs/Physical\""));
    assert!(text.contains("\"https://example.com/schemas/product.json#/$defs/Bundle\""));
}

#[test]
fn boolean_schema_round_trips() {
    let doc = oas::parse_schema_string("true", Format::Json).unwrap();
    assert_eq!(doc.root, Schema::Boolean(true));
    let text = oas::write_schema_json(&doc).unwrap();
    assert_eq!(text.trim(), "true");
}
