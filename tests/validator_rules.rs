//! Exercises the validator's rule catalog against deliberately broken documents, checking both
//! that real problems are flagged and that well-formed documents pass clean.

use oas::{Format, OpenApiDocumentRegistry, Severity};

fn issues_for(text: &str) -> Vec<oas::Issue> {
    let doc = oas::parse_document_string(text, Format::Json).unwrap();
    let registry = OpenApiDocumentRegistry::new();
    oas::validate(&doc, &registry)
}

fn has_error_containing(issues: &[oas::Issue], needle: &str) -> bool {
    issues
        .iter()
        .any(|i| i.severity == Severity::Error && i.message.contains(needle))
}

#[test]
fn missing_path_and_webhooks_and_components_is_an_error() {
    let issues = issues_for(r#"{"openapi":"3.2.0","info":{"title":"T","version":"1"}}"#);
    assert!(has_error_containing(&issues, "at least one of"));
}

#[test]
fn path_parameter_without_matching_declaration_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets/{petId}": {
              "get": { "responses": { "200": { "description": "ok" } } }
            }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "no matching 'in: path' parameter"));
}

#[test]
fn non_required_path_parameter_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets/{petId}": {
              "get": {
                "parameters": [
                  { "name": "petId", "in": "path", "schema": { "type": "string" } }
                ],
                "responses": { "200": { "description": "ok" } }
              }
            }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "must set 'required: true'"));
}

#[test]
fn duplicate_parameter_name_and_location_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets": {
              "get": {
                "parameters": [
                  { "name": "limit", "in": "query", "schema": { "type": "integer" } },
                  { "name": "limit", "in": "query", "schema": { "type": "integer" } }
                ],
                "responses": { "200": { "description": "ok" } }
              }
            }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "duplicate parameter"));
}

#[test]
fn schema_and_content_together_on_a_parameter_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets": {
              "get": {
                "parameters": [
                  {
                    "name": "filter", "in": "query",
                    "schema": { "type": "string" },
                    "content": { "application/json": { "schema": { "type": "object" } } }
                  }
                ],
                "responses": { "200": { "description": "ok" } }
              }
            }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "mutually exclusive"));
}

#[test]
fn responses_key_present_but_empty_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets": { "get": { "responses": {} } }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "at least one entry"));
}

#[test]
fn missing_responses_key_entirely_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": { "/pets": { "get": {} } }
        }"#,
    );
    assert!(has_error_containing(&issues, "'responses' is required"));
}

#[test]
fn invalid_status_code_key_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets": { "get": { "responses": { "abc": { "description": "x" } } } }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "not a valid status code"));
}

#[test]
fn malformed_media_type_range_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets": {
              "get": {
                "responses": {
                  "200": {
                    "description": "ok",
                    "content": { "not-a-media-range": { "schema": { "type": "string" } } }
                  }
                }
              }
            }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "not a syntactically valid media type range"));
}

#[test]
fn example_and_examples_together_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets": {
              "get": {
                "responses": {
                  "200": {
                    "description": "ok",
                    "content": {
                      "application/json": {
                        "schema": { "type": "string" },
                        "example": "a",
                        "examples": { "e1": { "value": "b" } }
                      }
                    }
                  }
                }
              }
            }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "mutually exclusive"));
}

#[test]
fn example_value_and_external_value_together_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": { "/pets": { "get": { "responses": { "200": { "description": "ok" } } } } },
          "components": {
            "examples": {
              "Bad": { "value": "x", "externalValue": "https://example.com/x" }
            }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "mutually exclusive"));
}

#[test]
fn security_requirement_referencing_undeclared_scheme_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "security": [{ "missingScheme": [] }],
          "paths": { "/pets": { "get": { "responses": { "200": { "description": "ok" } } } } }
        }"#,
    );
    assert!(has_error_containing(&issues, "undeclared scheme"));
}

#[test]
fn oauth2_scope_not_declared_on_the_scheme_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "security": [{ "oauth": ["write:pets"] }],
          "paths": { "/pets": { "get": { "responses": { "200": { "description": "ok" } } } } },
          "components": {
            "securitySchemes": {
              "oauth": {
                "type": "oauth2",
                "flows": {
                  "clientCredentials": {
                    "tokenUrl": "https://example.com/token",
                    "scopes": { "read:pets": "read access" }
                  }
                }
              }
            }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "is not declared by security scheme"));
}

#[test]
fn server_url_with_query_string_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "servers": [{ "url": "https://example.com/api?x=1" }],
          "paths": { "/pets": { "get": { "responses": { "200": { "description": "ok" } } } } }
        }"#,
    );
    assert!(has_error_containing(&issues, "query string or fragment"));
}

#[test]
fn server_variable_default_not_in_enum_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "servers": [{
            "url": "https://{env}.example.com",
            "variables": { "env": { "enum": ["prod", "staging"], "default": "dev" } }
          }],
          "paths": { "/pets": { "get": { "responses": { "200": { "description": "ok" } } } } }
        }"#,
    );
    assert!(has_error_containing(&issues, "must be one of 'enum'"));
}

#[test]
fn invalid_schema_pattern_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": { "/pets": { "get": { "responses": { "200": { "description": "ok" } } } } },
          "components": {
            "schemas": { "Bad": { "type": "string", "pattern": "(unclosed" } }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "not a valid regular expression"));
}

#[test]
fn inverted_min_max_length_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": { "/pets": { "get": { "responses": { "200": { "description": "ok" } } } } },
          "components": {
            "schemas": { "Bad": { "type": "string", "minLength": 10, "maxLength": 2 } }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "must not exceed"));
}

#[test]
fn invalid_link_runtime_expression_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets": {
              "get": {
                "responses": {
                  "200": {
                    "description": "ok",
                    "links": {
                      "next": { "operationId": "getPet", "parameters": { "petId": "$notAnExpression" } }
                    }
                  }
                }
              }
            }
          }
        }"#,
    );
    assert!(!issues.is_empty());
}

#[test]
fn duplicate_operation_id_across_paths_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "paths": {
            "/pets": {
              "get": { "operationId": "listPets", "responses": { "200": { "description": "ok" } } }
            },
            "/pets/legacy": {
              "get": { "operationId": "listPets", "responses": { "200": { "description": "ok" } } }
            }
          }
        }"#,
    );
    assert!(has_error_containing(&issues, "not unique across the document"));
}

#[test]
fn missing_info_title_and_version_are_errors() {
    let issues = issues_for(r#"{"openapi":"3.2.0","info":{},"paths":{}}"#);
    assert!(has_error_containing(&issues, "'info.title' is required"));
    assert!(has_error_containing(&issues, "'info.version' is required"));
}

#[test]
fn license_identifier_and_url_together_is_an_error() {
    let issues = issues_for(
        r#"{
          "openapi": "3.2.0",
          "info": {
            "title": "T", "version": "1",
            "license": { "name": "MIT", "identifier": "MIT", "url": "https://example.com" }
          },
          "paths": {}
        }"#,
    );
    assert!(has_error_containing(&issues, "mutually exclusive"));
}

#[test]
fn well_formed_document_has_no_errors() {
    let issues = issues_for(
        r##"{
          "openapi": "3.2.0",
          "info": { "title": "T", "version": "1" },
          "servers": [{ "url": "https://{env}.example.com/v1", "variables": { "env": { "default": "prod" } } }],
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
                    "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } }
                  }
                }
              }
            }
          },
          "components": {
            "schemas": {
              "Pet": { "type": "object", "properties": { "id": { "type": "integer" } } }
            }
          }
        }"##,
    );
    assert!(
        issues.iter().all(|i| i.severity != Severity::Error),
        "unexpected errors: {issues:?}"
    );
}
