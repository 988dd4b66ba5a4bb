//! The `Parameter` object (path, query, header, and cookie parameters).

use indexmap::IndexMap;

use crate::model::content::{Example as MediaExample, MediaTypeObject};
use crate::model::reference::Reference;
use crate::model::schema::Schema;
use crate::value::Value;

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Query,
    /// `querystring` (3.2) — binds the entire raw query string to one parameter; valid only
    /// with `content`, never `schema`/`style`/`explode`/`allowReserved`.
    QueryString,
    Header,
    Path,
    Cookie,
}

impl ParameterLocation {
    /// Parses the `in` field's raw string value.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "query" => Some(ParameterLocation::Query),
            "querystring" => Some(ParameterLocation::QueryString),
            "header" => Some(ParameterLocation::Header),
            "path" => Some(ParameterLocation::Path),
            "cookie" => Some(ParameterLocation::Cookie),
            _ => None,
        }
    }

    /// The default `style` for this location, per the OpenAPI style/explode defaulting table.
    pub fn default_style(self) -> &'static str {
        match self {
            ParameterLocation::Query => "form",
            ParameterLocation::QueryString => "",
            ParameterLocation::Header => "simple",
            ParameterLocation::Path => "simple",
            ParameterLocation::Cookie => "form",
        }
    }

    /// The default `explode` value for this location's default style (`true` only for `form`).
    pub fn default_explode(self) -> bool {
        matches!(self, ParameterLocation::Query | ParameterLocation::Cookie)
    }
}

/// A parameter object, whether standalone (`parameters[]`) or reusable
/// (`components.parameters`).
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// A reference to a reusable parameter, with inline fields below acting as overrides.
    pub reference: Option<Reference>,
    /// `name`.
    pub name: Option<String>,
    /// `in`, parsed into an enum; `None` if the raw value was unrecognized (preserved in
    /// `custom_keywords` under `"in"` so the writer still emits it).
    pub location: Option<ParameterLocation>,
    /// `description`.
    pub description: Option<String>,
    /// `required`.
    pub required: Option<bool>,
    /// `deprecated`.
    pub deprecated: Option<bool>,
    /// `allowEmptyValue`.
    pub allow_empty_value: Option<bool>,
    /// `style`.
    pub style: Option<String>,
    /// `explode`.
    pub explode: Option<bool>,
    /// `allowReserved`.
    pub allow_reserved: Option<bool>,
    /// `schema`.
    pub schema: Option<Schema>,
    /// The singular `example` keyword.
    pub example: Option<Value>,
    /// `examples`, mapping name to an inline or referenced Example Object.
    pub examples: IndexMap<String, MediaExample>,
    /// `content`, keyed by media type range.
    pub content: IndexMap<String, MediaTypeObject>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}
