//! # `oas` — an OpenAPI 3.2 / JSON Schema 2020-12 document model, parser, validator, and writer
//!
//! This crate parses OpenAPI 3.2 documents and standalone JSON Schema 2020-12 documents into a
//! format-agnostic, insertion-ordered in-memory model (the "IR"), validates that model against
//! the specification's rule catalog, and writes it back out to JSON or YAML.
//!
//! Parsing never fails on a semantically wrong document — only on input that cannot be read as
//! JSON/YAML at all, or that is the wrong top-level shape for the entry point called. Semantic
//! problems are reported by [`validate`] as a list of [`Issue`]s, never raised as exceptions.
//!
//! ## Quick start
//!
//! ```rust
//! use oas::{Format, OpenApiDocumentRegistry};
//!
//! let text = r#"{
//!     "openapi": "3.2.0",
//!     "info": { "title": "Example", "version": "1.0.0" },
//!     "paths": {}
//! }"#;
//!
//! let doc = oas::parse_document_string(text, Format::Json).unwrap();
//! let registry = OpenApiDocumentRegistry::new();
//! let issues = oas::validate(&doc, &registry);
//! assert!(issues.is_empty());
//!
//! let emitted = oas::write_json(&doc).unwrap();
//! assert!(emitted.contains("\"openapi\""));
//! ```

pub mod model;
pub mod parser;
pub mod pointer;
pub mod registry;
pub mod resolver;
pub mod runtime_expr;
pub mod uri;
pub mod validator;
pub mod value;
pub mod writer;

mod error;

pub use error::{Error, Result};
pub use model::{
    Callback, CallbackItem, Components, Contact, Definition, Discriminator, Encoding, Example,
    ExternalDocumentation, Header, HttpMethod, Info, License, Link, LinkParameterValue,
    MediaTypeObject, OAuthFlow, OAuthFlows, Operation, Parameter, ParameterLocation, PathItem,
    Reference, ReferenceOr, RequestBody, Response, Schema, SchemaDocument, SchemaObject,
    SecurityRequirement, SecurityScheme, Server, ServerVariable, Tag,
};
pub use parser::{
    parse_document_string, parse_document_string_at, parse_file, parse_schema_string,
    parse_schema_string_at, parse_string, ParsedInput,
};
pub use registry::{OpenApiDocumentRegistry, RegisteredDocument};
pub use resolver::{resolve, Resolved, ResolvedValue};
pub use runtime_expr::RuntimeExpression;
pub use validator::{validate, Issue, Severity};
pub use value::{Format, Value, ValueMap};
pub use writer::{
    write, write_json, write_schema as write_schema_document, write_schema_json,
    write_schema_yaml, write_to_file, write_yaml,
};
