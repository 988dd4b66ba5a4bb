//! The document root and its top-level metadata objects.

use indexmap::IndexMap;

use crate::model::components::Components;
use crate::model::paths::PathItem;
use crate::model::reference::Reference;
use crate::model::security::SecurityRequirement;
use crate::value::Value;

/// The root of a parsed OpenAPI document.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// The `openapi` version string, verbatim.
    pub openapi: String,
    /// `$schema` — the default JSON Schema dialect for schemas with no dialect of their own.
    pub json_schema_dialect: Option<String>,
    /// `info`.
    pub info: Info,
    /// `servers`. Defaults to a single server at `/` when entirely absent, per the resolution
    /// rule applied at parse time rather than deferred to callers.
    pub servers: Vec<Server>,
    /// `paths`, keyed by literal path template string, preserving declaration order.
    pub paths: IndexMap<String, PathItem>,
    /// True when the `paths` key was present in the source document at all (even as `{}`).
    pub paths_explicit_empty: bool,
    /// `webhooks`.
    pub webhooks: IndexMap<String, PathItem>,
    /// True when the `webhooks` key was present in the source document.
    pub webhooks_explicit_empty: bool,
    /// `components`.
    pub components: Option<Components>,
    /// `security`. `None` means the key was absent; `Some(vec![])` means it was present and
    /// empty (no security requirements anywhere, overriding any default).
    pub security: Option<Vec<SecurityRequirement>>,
    /// `tags`.
    pub tags: Vec<Tag>,
    /// `externalDocs`.
    pub external_docs: Option<ExternalDocumentation>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
    /// The base URI this document was loaded from, if known, used by the reference resolver
    /// to turn relative `$ref` URIs into canonical ones.
    pub self_uri: Option<String>,
}

/// The `info` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Info {
    /// `title`.
    pub title: String,
    /// `summary` (3.1+).
    pub summary: Option<String>,
    /// `description`.
    pub description: Option<String>,
    /// `termsOfService`.
    pub terms_of_service: Option<String>,
    /// `contact`.
    pub contact: Option<Contact>,
    /// `license`.
    pub license: Option<License>,
    /// `version` — the document's own version, distinct from `openapi`.
    pub version: String,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// The `info.contact` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contact {
    /// `name`.
    pub name: Option<String>,
    /// `url`.
    pub url: Option<String>,
    /// `email`.
    pub email: Option<String>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// The `info.license` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct License {
    /// `name`.
    pub name: String,
    /// `identifier` — an SPDX expression, mutually exclusive with `url` in the source but not
    /// enforced as such by the model (the validator reports both-present as an issue).
    pub identifier: Option<String>,
    /// `url`.
    pub url: Option<String>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A `servers[]` entry, or an operation/path-item-level server override.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    /// `url`, possibly containing `{variable}` templates.
    pub url: String,
    /// `description`.
    pub description: Option<String>,
    /// `variables`.
    pub variables: IndexMap<String, ServerVariable>,
    /// `name` (3.2).
    pub name: Option<String>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A `servers[].variables` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerVariable {
    /// `enum`.
    pub enum_values: Vec<String>,
    /// `default`.
    pub default: String,
    /// `description`.
    pub description: Option<String>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A `tags[]` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// `name`.
    pub name: String,
    /// `summary` (3.2).
    pub summary: Option<String>,
    /// `description`.
    pub description: Option<String>,
    /// `externalDocs`.
    pub external_docs: Option<ExternalDocumentation>,
    /// `parent` (3.2) — the name of a parent tag, for building a tag hierarchy.
    pub parent: Option<String>,
    /// `kind` (3.2) — a free-text classification such as `"nav"` or `"badge"`.
    pub kind: Option<String>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// The `externalDocs` object, reused by the document root, tags, operations, and schemas.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalDocumentation {
    /// `description`.
    pub description: Option<String>,
    /// `url`.
    pub url: String,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A self-contained, reference-rooted JSON Schema document (when a document loaded via
/// `parseSchemaString`/registered standalone, rather than embedded in an OpenAPI document).
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    /// The root schema.
    pub root: crate::model::schema::Schema,
    /// The base URI this document was loaded from, if known.
    pub self_uri: Option<String>,
}

/// A reference-or-inline holder, used only where the model departs from the usual
/// "embed `Option<Reference>` on the struct itself" pattern because the inline type has no
/// independent existence of its own (currently only [`crate::model::examples::Callback`]).
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceOr<T> {
    /// An inline value.
    Item(T),
    /// A `$ref` to a value defined elsewhere, with possible sibling `summary`/`description`.
    Reference(Reference),
}
