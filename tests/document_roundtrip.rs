//! Parses representative OpenAPI documents, checks the typed model captured what the source
//! actually said (including the presence-vs-absence distinctions plain `serde` would lose), and
//! confirms writing the model back out round-trips through a second parse cleanly.

use pretty_assertions::assert_eq;

use oas::{Format, HttpMethod, OpenApiDocumentRegistry, ParameterLocation};

const PETSTORE: &str = r##"{
  "openapi": "3.2.0",
  "info": { "title": "Petstore", "version": "1.0.0" },
  "paths": {
    "/pets/{petId}": {
      "get": {
        "operationId": "getPet",
        "parameters": [
          { "name": "petId", "in": "path", "required": true, "schema": { "type": "string" } }
        ],
        "responses": {
          "200": {
            "description": "ok",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
            }
          },
          "default": { "description": "error" }
        }
      },
      "delete": {
        "operationId": "deletePet",
        "parameters": [
          { "name": "petId", "in": "path", "required": true, "schema": { "type": "string" } }
        ],
        "responses": { "204": { "description": "deleted" } }
      }
    }
  },
  "components": {
    "schemas": {
      "Pet": {
        "type": "object",
        "required": ["id", "name"],
        "properties": {
          "id": { "type": "integer" },
          "name": { "type": "string" }
        }
      }
    }
  }
}"##;

#[test]
fn captures_path_parameters_and_operations() {
    let doc = oas::parse_document_string(PETSTORE, Format::Json).unwrap();
    let item = doc.paths.get("/pets/{petId}").expect("path present");

    let get = item.operations.get(&HttpMethod::Get).expect("get operation");
    assert_eq!(get.operation_id.as_deref(), Some("getPet"));
    assert!(get.operation_id_explicit);
    assert_eq!(get.parameters[0].location, Some(ParameterLocation::Path));
    assert_eq!(get.responses.keys().collect::<Vec<_>>(), vec!["200", "default"]);

    assert!(item.operations.contains_key(&HttpMethod::Delete));
    assert!(!item.operations.contains_key(&HttpMethod::Post));

    let registry = OpenApiDocumentRegistry::new();
    let issues = oas::validate(&doc, &registry);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn writer_output_reparses_to_an_equal_model() {
    let doc = oas::parse_document_string(PETSTORE, Format::Json).unwrap();
    let text = oas::write_json(&doc).unwrap();
    let reparsed = oas::parse_document_string(&text, Format::Json).unwrap();
    assert_eq!(doc, reparsed);
}

#[test]
fn writer_output_survives_a_yaml_round_trip() {
    let doc = oas::parse_document_string(PETSTORE, Format::Json).unwrap();
    let yaml = oas::write_yaml(&doc).unwrap();
    let reparsed = oas::parse_document_string(&yaml, Format::Yaml).unwrap();
    assert_eq!(doc, reparsed);
}

#[test]
fn absent_and_empty_paths_are_distinguished() {
    let absent = oas::parse_document_string(
        r#"{"openapi":"3.2.0","info":{"title":"T","version":"1"},"components":{"schemas":{}}}"#,
        Format::Json,
    )
    .unwrap();
    assert!(!absent.paths_explicit_empty);
    assert!(absent.paths.is_empty());

    let empty = oas::parse_document_string(
        r#"{"openapi":"3.2.0","info":{"title":"T","version":"1"},"paths":{}}"#,
        Format::Json,
    )
    .unwrap();
    assert!(empty.paths_explicit_empty);
    assert!(empty.paths.is_empty());

    // Writing the explicit-empty case back out must still produce a "paths": {} key, not drop
    // it as if it were absent.
    let text = oas::write_json(&empty).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value.get("paths").is_some());
}

#[test]
fn operation_security_overrides_document_default() {
    let text = r#"{
      "openapi": "3.2.0",
      "info": { "title": "T", "version": "1" },
      "security": [{ "apiKeyAuth": [] }],
      "paths": {
        "/open": {
          "get": {
            "security": [],
            "responses": { "200": { "description": "ok" } }
          }
        }
      },
      "components": {
        "securitySchemes": {
          "apiKeyAuth": { "type": "apiKey", "name": "X-Api-Key", "in": "header" }
        }
      }
    }"#;
    let doc = oas::parse_document_string(text, Format::Json).unwrap();
    assert_eq!(doc.security.as_ref().map(Vec::len), Some(1));
    let op = doc.paths["/open"].operations[&HttpMethod::Get].clone();
    assert_eq!(op.security, Some(Vec::new()));

    let registry = OpenApiDocumentRegistry::new();
    assert!(oas::validate(&doc, &registry).is_empty());
}
