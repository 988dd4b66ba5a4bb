//! Request/response bodies, media types, encodings, headers, and example objects.

use indexmap::IndexMap;

use crate::model::reference::Reference;
use crate::value::Value;

/// The `requestBody` object.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    /// A reference to a reusable request body, with inline fields below acting as overrides.
    pub reference: Option<Reference>,
    /// `description`.
    pub description: Option<String>,
    /// `content`, keyed by media type range, preserving declaration order for the writer and
    /// for type-inference ranking.
    pub content: IndexMap<String, MediaTypeObject>,
    /// True when the `content` key was present in the source document at all (even as `{}`).
    pub content_present: bool,
    /// `required`.
    pub required: Option<bool>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A single `responses` entry. The container itself is `IndexMap<String, Response>` (see
/// [`crate::model::paths::Operation::responses`]) so that declaration order — including where
/// `"default"` falls relative to numeric and range status codes — survives round-tripping
/// without a dedicated wrapper type.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// A reference to a reusable response, with inline fields below acting as overrides.
    pub reference: Option<Reference>,
    /// `description`.
    pub description: Option<String>,
    /// `headers`, keyed by header name (case-insensitively unique per the validator, stored
    /// here exactly as written).
    pub headers: IndexMap<String, Header>,
    /// `content`, keyed by media type range.
    pub content: IndexMap<String, MediaTypeObject>,
    /// True when the `content` key was present in the source document at all (even as `{}`).
    pub content_present: bool,
    /// `links`, keyed by link name.
    pub links: IndexMap<String, crate::model::examples::Link>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A `content` entry: a media type range mapped to its schema/example/encoding.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaTypeObject {
    /// `schema`.
    pub schema: Option<crate::model::schema::Schema>,
    /// The singular `example` keyword.
    pub example: Option<Value>,
    /// `examples`, mapping name to an inline or referenced Example Object.
    pub examples: IndexMap<String, Example>,
    /// `encoding`, keyed by property name (only meaningful under
    /// `multipart/*` or `application/x-www-form-urlencoded`).
    pub encoding: IndexMap<String, Encoding>,
    /// `itemSchema` (3.2) — the schema for each item when this media type streams a sequence
    /// (e.g. `application/jsonl`).
    pub item_schema: Option<crate::model::schema::Schema>,
    /// `itemEncoding` (3.2), parallel to `itemSchema`.
    pub item_encoding: Option<Box<Encoding>>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A `content[*].encoding` entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Encoding {
    /// `contentType`.
    pub content_type: Option<String>,
    /// `headers`.
    pub headers: IndexMap<String, Header>,
    /// `style`.
    pub style: Option<String>,
    /// `explode`.
    pub explode: Option<bool>,
    /// `allowReserved`.
    pub allow_reserved: Option<bool>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A `headers` entry: shaped exactly like a [`crate::model::params::Parameter`] minus `name`
/// and `in` (both implied by context).
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// A reference to a reusable header, with inline fields below acting as overrides.
    pub reference: Option<Reference>,
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
    pub schema: Option<crate::model::schema::Schema>,
    /// The singular `example` keyword.
    pub example: Option<Value>,
    /// `examples`.
    pub examples: IndexMap<String, Example>,
    /// `content`.
    pub content: IndexMap<String, MediaTypeObject>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// The Example Object (distinct from the schema-level `example`/`examples` shapes).
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    /// A reference to a reusable example, with inline fields below acting as overrides.
    pub reference: Option<Reference>,
    /// `summary`.
    pub summary: Option<String>,
    /// `description`.
    pub description: Option<String>,
    /// `value`, the pre-3.2 alias for `dataValue`. Mutually exclusive with `external_value` in
    /// a well-formed document; both may be `None` (an empty example) or, if the source set
    /// both, both may be `Some` (the validator reports the conflict rather than the parser
    /// resolving it).
    pub value: Option<Value>,
    /// `dataValue` (3.2) — the primary spelling of an inline example value, mutually exclusive
    /// with `value` in a well-formed document.
    pub data_value: Option<Value>,
    /// `serializedValue` (3.2) — an example given as an already-serialized string (e.g. a raw
    /// XML or CSV blob) rather than a structured value.
    pub serialized_value: Option<Value>,
    /// `externalValue`.
    pub external_value: Option<String>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}
