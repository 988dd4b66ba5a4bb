//! Parses raw JSON/YAML text into the typed document model.
//!
//! Parsing never fails on semantically wrong documents — a missing `info.title` becomes an
//! empty string, an unrecognized `in` value is dropped into `custom_keywords` — it only fails
//! when the input cannot be read as a [`crate::value::Value`] tree at all (malformed JSON/YAML,
//! or a root that isn't a mapping). Every semantic rule lives in [`crate::validator`].

pub mod context;
pub mod document;
pub mod examples;
pub mod content;
pub mod paths;
pub mod params;
pub mod schema;
pub mod security;
mod util;

use crate::error::{Error, Result};
use crate::model::document::{Definition, SchemaDocument, Server};
use crate::model::schema::Schema;
use crate::registry::OpenApiDocumentRegistry;
use crate::value::{self, Format, Value};

/// Parses an OpenAPI document from a string, sniffing JSON vs YAML unless `format` forces one.
pub fn parse_document_string(text: &str, format: Format) -> Result<Definition> {
    parse_document_string_at(text, format, None, None)
}

/// Same as [`parse_document_string`], but stamps `base_uri` onto the result for relative
/// reference resolution (combined with the document's own `$self`, if it declares one) and
/// resolves `$ref`s against `registry` as the document is parsed.
pub fn parse_document_string_at(
    text: &str,
    format: Format,
    base_uri: Option<String>,
    registry: Option<&OpenApiDocumentRegistry>,
) -> Result<Definition> {
    let root = value::parse(text, format)?;
    let map = match root {
        Value::Map(m) => m,
        _ => return Err(Error::invalid("OpenAPI document root must be a mapping")),
    };
    let local_registry = OpenApiDocumentRegistry::new();
    let registry = registry.unwrap_or(&local_registry);
    let mut definition = document::parse_definition(map, base_uri, registry);
    apply_default_server(&mut definition.servers);
    Ok(definition)
}

/// Reads and parses an OpenAPI document from a file path, using the file's extension to guide
/// format sniffing and its canonicalized path as the document's base URI when it can be
/// determined.
pub fn parse_file(path: &str) -> Result<Definition> {
    parse_file_at(path, None)
}

/// Same as [`parse_file`], but resolves `$ref`s against `registry` as the document is parsed.
pub fn parse_file_at(path: &str, registry: Option<&OpenApiDocumentRegistry>) -> Result<Definition> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_string(),
        source: e,
    })?;
    let base_uri = std::fs::canonicalize(path)
        .ok()
        .and_then(|p| url::Url::from_file_path(p).ok())
        .map(|u| u.to_string());
    parse_document_string_at(&text, Format::Auto, base_uri, registry)
}

/// Parses a standalone JSON Schema document from a string.
pub fn parse_schema_string(text: &str, format: Format) -> Result<SchemaDocument> {
    parse_schema_string_at(text, format, None)
}

/// Same as [`parse_schema_string`], but stamps `self_uri` onto the result.
pub fn parse_schema_string_at(
    text: &str,
    format: Format,
    self_uri: Option<String>,
) -> Result<SchemaDocument> {
    let root = value::parse(text, format)?;
    let parsed: Schema = schema::parse_schema(root);
    Ok(SchemaDocument {
        root: parsed,
        self_uri,
    })
}

/// Generic entry point used by callers that don't know ahead of time whether `text` is an
/// OpenAPI document or a bare JSON Schema document: it is an OpenAPI document if and only if it
/// has a top-level `openapi` key.
pub fn parse_string(text: &str, format: Format) -> Result<ParsedInput> {
    parse_string_at(text, format, None, None)
}

/// Same as [`parse_string`], but stamps `base_uri` onto the result and resolves `$ref`s against
/// `registry` (for the `Document` branch) as the document is parsed.
pub fn parse_string_at(
    text: &str,
    format: Format,
    base_uri: Option<String>,
    registry: Option<&OpenApiDocumentRegistry>,
) -> Result<ParsedInput> {
    let root = value::parse(text, format)?;
    match &root {
        Value::Map(m) if m.contains_key("openapi") => {
            let map = match root {
                Value::Map(m) => m,
                _ => unreachable!(),
            };
            let local_registry = OpenApiDocumentRegistry::new();
            let registry = registry.unwrap_or(&local_registry);
            let mut definition = document::parse_definition(map, base_uri, registry);
            apply_default_server(&mut definition.servers);
            Ok(ParsedInput::Document(definition))
        }
        _ => Ok(ParsedInput::Schema(SchemaDocument {
            root: schema::parse_schema(root),
            self_uri: base_uri,
        })),
    }
}

/// The result of [`parse_string`]'s format-agnostic dispatch.
pub enum ParsedInput {
    Document(Definition),
    Schema(SchemaDocument),
}

/// When `servers` is entirely absent from the source, OpenAPI specifies an implicit default
/// server at `/`. An explicitly empty `servers: []` is left alone (the caller meant it).
fn apply_default_server(servers: &mut Vec<Server>) {
    if servers.is_empty() {
        servers.push(Server {
            url: "/".to_string(),
            description: None,
            variables: indexmap::IndexMap::new(),
            name: None,
            extensions: indexmap::IndexMap::new(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document_and_applies_default_server() {
        let doc = parse_document_string(
            r#"{"openapi":"3.2.0","info":{"title":"T","version":"1"},"paths":{}}"#,
            Format::Json,
        )
        .unwrap();
        assert_eq!(doc.info.title, "T");
        assert!(doc.paths_explicit_empty);
        assert_eq!(doc.servers.len(), 1);
        assert_eq!(doc.servers[0].url, "/");
    }

    #[test]
    fn distinguishes_absent_and_empty_paths() {
        let absent = parse_document_string(
            r#"{"openapi":"3.2.0","info":{"title":"T","version":"1"}}"#,
            Format::Json,
        )
        .unwrap();
        assert!(!absent.paths_explicit_empty);
    }

    #[test]
    fn rejects_non_mapping_root() {
        let err = parse_document_string("[1,2,3]", Format::Json);
        assert!(err.is_err());
    }

    #[test]
    fn dispatches_schema_vs_document_by_openapi_key() {
        match parse_string(r#"{"type":"string"}"#, Format::Json).unwrap() {
            ParsedInput::Schema(_) => {}
            ParsedInput::Document(_) => panic!("expected schema"),
        }
        match parse_string(
            r#"{"openapi":"3.2.0","info":{"title":"T","version":"1"},"paths":{}}"#,
            Format::Json,
        )
        .unwrap()
        {
            ParsedInput::Document(_) => {}
            ParsedInput::Schema(_) => panic!("expected document"),
        }
    }

    #[test]
    fn reads_self_and_absolutizes_against_base_uri() {
        let doc = parse_document_string_at(
            r#"{"openapi":"3.2.0","$self":"openapi.json","info":{"title":"T","version":"1"},"paths":{}}"#,
            Format::Json,
            Some("https://example.com/docs/".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(doc.self_uri.as_deref(), Some("https://example.com/docs/openapi.json"));
    }
}
