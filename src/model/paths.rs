//! `PathItem` and `Operation`, including the 3.2 `additionalOperations` extension point.

use indexmap::IndexMap;

use crate::model::content::{RequestBody, Response};
use crate::model::document::Server;
use crate::model::examples::Callback;
use crate::model::params::Parameter;
use crate::model::reference::Reference;
use crate::model::security::SecurityRequirement;
use crate::value::Value;

/// A standard HTTP method recognized as its own `PathItem` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
    /// `query` (3.2) — the `QUERY` HTTP method.
    Query,
}

impl HttpMethod {
    /// All standard methods, in the fixed order the writer emits them.
    pub const ALL: [HttpMethod; 9] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
        HttpMethod::Query,
    ];

    /// The lowercase field name used in the source document.
    pub fn field_name(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
            HttpMethod::Query => "query",
        }
    }

    /// Parses a field name into a standard method, if it is one.
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.field_name() == name)
    }
}

/// A `PathItem`, shared by `paths`, `webhooks`, and `components.pathItems`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    /// A reference to a reusable path item, with inline fields below acting as overrides.
    pub reference: Option<Reference>,
    /// `summary`.
    pub summary: Option<String>,
    /// `description`.
    pub description: Option<String>,
    /// The standard-method operations, keyed by [`HttpMethod`].
    pub operations: IndexMap<HttpMethod, Operation>,
    /// `additionalOperations` (3.2): a nested map of literal method-name keys (e.g. `"get"`,
    /// `"purge"`) to operations, for custom HTTP methods and any standard method a caller
    /// chose to declare this way instead of as a direct field.
    pub additional_operations: IndexMap<String, Operation>,
    /// `servers`.
    pub servers: Vec<Server>,
    /// `parameters`.
    pub parameters: Vec<Parameter>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// An `Operation` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Operation {
    /// `tags`.
    pub tags: Vec<String>,
    /// `summary`.
    pub summary: Option<String>,
    /// `description`.
    pub description: Option<String>,
    /// `externalDocs`.
    pub external_docs: Option<crate::model::document::ExternalDocumentation>,
    /// `operationId`, as written.
    pub operation_id: Option<String>,
    /// True when `operationId` was present in the source (distinguishes an absent id from one
    /// the parser might otherwise synthesize for internal bookkeeping).
    pub operation_id_explicit: bool,
    /// `parameters`.
    pub parameters: Vec<Parameter>,
    /// `requestBody`.
    pub request_body: Option<RequestBody>,
    /// `responses`, keyed by status code string (`"200"`, `"2XX"`) or `"default"`, preserving
    /// declaration order exactly (including where `"default"` falls relative to numeric
    /// codes).
    pub responses: IndexMap<String, Response>,
    /// True when the `responses` key was present in the source document at all.
    pub responses_explicit: bool,
    /// `callbacks`.
    pub callbacks: IndexMap<String, Callback>,
    /// `deprecated`.
    pub deprecated: Option<bool>,
    /// `security`. `None` means inherit the document-level default; `Some(vec![])` means "no
    /// auth for this operation" even if the document has a default.
    pub security: Option<Vec<SecurityRequirement>>,
    /// True when the `security` key was present in the source (even as `[]`).
    pub security_explicit_empty: bool,
    /// `servers`.
    pub servers: Vec<Server>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}
