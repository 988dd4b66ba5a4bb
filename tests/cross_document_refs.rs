//! Exercises the registry and resolver together across two independently parsed documents, and
//! checks that a `$ref` carrying sibling fields keeps those fields on the holder rather than
//! discarding them in favor of the reference.

use oas::{Format, OpenApiDocumentRegistry};

const SHARED_COMPONENTS: &str = r#"{
  "openapi": "3.2.0",
  "info": { "title": "Shared", "version": "1.0.0" },
  "paths": {},
  "components": {
    "schemas": {
      "Pet": {
        "type": "object",
        "properties": { "id": { "type": "integer" }, "name": { "type": "string" } }
      }
    }
  }
}"#;

#[test]
fn resolves_a_ref_into_a_separately_registered_document() {
    let shared = oas::parse_document_string(SHARED_COMPONENTS, Format::Json).unwrap();
    let shared_tree = oas::write_json(&shared).unwrap();
    let shared_value = oas::value::parse(&shared_tree, Format::Json).unwrap();

    let registry = OpenApiDocumentRegistry::new();
    registry.register("https://example.com/shared.json", shared_value);

    let local_root = oas::Value::empty_map();
    let resolved = oas::resolve(
        &registry,
        Some("https://example.com/api.json"),
        &local_root,
        "shared.json#/components/schemas/Pet",
    )
    .unwrap();

    let pet = resolved.value.get();
    let as_map = match pet {
        oas::Value::Map(m) => m,
        _ => panic!("expected a mapping"),
    };
    assert_eq!(as_map.get("type").and_then(|v| v.as_str()), Some("object"));
    assert_eq!(
        resolved.document_uri.as_deref(),
        Some("https://example.com/shared.json")
    );
}

#[test]
fn ref_with_sibling_description_keeps_the_sibling_on_the_holder() {
    let text = r##"{
      "openapi": "3.2.0",
      "info": { "title": "T", "version": "1" },
      "paths": {
        "/pets": {
          "get": {
            "responses": {
              "200": {
                "$ref": "#/components/responses/PetList",
                "description": "a list of pets, overriding the shared description"
              }
            }
          }
        }
      },
      "components": {
        "responses": {
          "PetList": { "description": "shared description" }
        }
      }
    }"##;
    let doc = oas::parse_document_string(text, Format::Json).unwrap();
    let response = &doc.paths["/pets"].operations[&oas::HttpMethod::Get].responses["200"];
    assert!(response.reference.is_some());
    assert_eq!(
        response.description.as_deref(),
        Some("a list of pets, overriding the shared description")
    );

    // Writing it back out must keep both the $ref and the sibling description.
    let out = oas::write_json(&doc).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let written = &value["paths"]["/pets"]["get"]["responses"]["200"];
    assert!(written.get("$ref").is_some());
    assert_eq!(
        written["description"],
        "a list of pets, overriding the shared description"
    );
}
