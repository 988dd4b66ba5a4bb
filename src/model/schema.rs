//! The Schema entity — 2020-12 JSON Schema plus the OpenAPI 3.2 extensions (`xml`,
//! `discriminator`, `externalDocs`, the three example shapes), boolean-schema shorthand, and
//! verbatim-preserved custom keywords.

use indexmap::IndexMap;

use crate::model::reference::Reference;
use crate::value::Value;

/// A schema is either the 2020-12 boolean shorthand (`true`/`false` in place of an object) or
/// a full schema object.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// `true` accepts everything, `false` accepts nothing.
    Boolean(bool),
    /// The full schema object.
    Object(Box<SchemaObject>),
}

impl Schema {
    /// Convenience constructor for a fresh, empty schema object.
    pub fn empty_object() -> Self {
        Schema::Object(Box::new(SchemaObject::default()))
    }

    /// Returns the inner object if this is [`Schema::Object`].
    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            Schema::Object(o) => Some(o),
            Schema::Boolean(_) => None,
        }
    }
}

/// One alternative in an `oneOf`/`anyOf`/`allOf` composition: either a pure `$ref` string
/// (the "legacy" form) or an inline schema, storing enough information for the writer to
/// rejoin both lists back into their original source order.
#[derive(Debug, Clone, PartialEq)]
pub enum CompositionSlot {
    /// Index into [`Composition::refs`].
    Ref(usize),
    /// Index into [`Composition::schemas`].
    Inline(usize),
}

/// Parallel storage for a composition keyword (`oneOf`, `anyOf`, `allOf`), keeping the
/// legacy ref-string list and the inline-schema list separate while recording interleave
/// order so the writer can reproduce the source exactly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composition {
    /// Pure `{"$ref": "..."}` alternatives, in the order they appeared among ref alternatives.
    pub refs: Vec<String>,
    /// Inline schema alternatives, in the order they appeared among inline alternatives.
    pub schemas: Vec<Schema>,
    /// Full original order, indexing into whichever of the two lists above applies.
    pub order: Vec<CompositionSlot>,
}

impl Composition {
    /// True if no alternatives were recorded at all.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Appends a ref alternative, updating the interleave order.
    pub fn push_ref(&mut self, uri: String) {
        self.order.push(CompositionSlot::Ref(self.refs.len()));
        self.refs.push(uri);
    }

    /// Appends an inline alternative, updating the interleave order.
    pub fn push_inline(&mut self, schema: Schema) {
        self.order.push(CompositionSlot::Inline(self.schemas.len()));
        self.schemas.push(schema);
    }
}

/// A schema's `xml` metadata object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Xml {
    /// Overrides the element/attribute name used in the XML representation.
    pub name: Option<String>,
    /// The XML namespace URI.
    pub namespace: Option<String>,
    /// The prefix to be used for the name.
    pub prefix: Option<String>,
    /// Declares whether the property should be an attribute instead of an element.
    pub attribute: Option<bool>,
    /// Signals that the array should be wrapped in a container element.
    pub wrapped: Option<bool>,
}

/// A schema's `discriminator` object, used with `oneOf`/`anyOf`/`allOf` composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Discriminator {
    /// The name of the property in the payload that holds the discriminator value.
    pub property_name: String,
    /// Mapping between payload values and schema names or `$ref` URIs.
    pub mapping: IndexMap<String, String>,
    /// The schema to use when a payload value has no entry in `mapping` (3.2-mandated
    /// alongside `oneOf`/`anyOf`).
    pub default_mapping: Option<String>,
}

/// The full schema object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaObject {
    /// A reference carried by this schema holder, with any sibling overrides captured on
    /// the fields below.
    pub reference: Option<Reference>,

    /// The normalized `type` set; legacy `nullable`/`x-nullable: true` contributes `"null"`
    /// here rather than being preserved as its own keyword.
    pub types: Vec<String>,
    /// The `format` keyword.
    pub format: Option<String>,

    /// `$id`.
    pub id: Option<String>,
    /// `$schema` — the active dialect for this schema subtree, overriding the document's
    /// `jsonSchemaDialect` for validator dialect-policing purposes.
    pub schema_dialect: Option<String>,
    /// `$anchor`.
    pub anchor: Option<String>,
    /// `$dynamicAnchor`.
    pub dynamic_anchor: Option<String>,
    /// `$dynamicRef`.
    pub dynamic_ref: Option<String>,
    /// `$defs`.
    pub defs: IndexMap<String, Schema>,

    /// `minimum`.
    pub minimum: Option<f64>,
    /// `maximum`.
    pub maximum: Option<f64>,
    /// `exclusiveMinimum`.
    pub exclusive_minimum: Option<f64>,
    /// `exclusiveMaximum`.
    pub exclusive_maximum: Option<f64>,
    /// `multipleOf`.
    pub multiple_of: Option<f64>,

    /// `minLength`.
    pub min_length: Option<u64>,
    /// `maxLength`.
    pub max_length: Option<u64>,
    /// `pattern`.
    pub pattern: Option<String>,

    /// `minItems`.
    pub min_items: Option<u64>,
    /// `maxItems`.
    pub max_items: Option<u64>,
    /// `uniqueItems`.
    pub unique_items: Option<bool>,
    /// `prefixItems`.
    pub prefix_items: Vec<Schema>,
    /// `items`.
    pub items: Option<Box<Schema>>,
    /// `contains`.
    pub contains: Option<Box<Schema>>,
    /// `minContains`.
    pub min_contains: Option<u64>,
    /// `maxContains`.
    pub max_contains: Option<u64>,
    /// `unevaluatedItems`.
    pub unevaluated_items: Option<Box<Schema>>,

    /// `properties`.
    pub properties: IndexMap<String, Schema>,
    /// `required`.
    pub required: Vec<String>,
    /// `additionalProperties`.
    pub additional_properties: Option<Box<Schema>>,
    /// `patternProperties`.
    pub pattern_properties: IndexMap<String, Schema>,
    /// `propertyNames`.
    pub property_names: Option<Box<Schema>>,
    /// `dependentRequired`.
    pub dependent_required: IndexMap<String, Vec<String>>,
    /// `dependentSchemas`.
    pub dependent_schemas: IndexMap<String, Schema>,
    /// `unevaluatedProperties`.
    pub unevaluated_properties: Option<Box<Schema>>,
    /// `minProperties`.
    pub min_properties: Option<u64>,
    /// `maxProperties`.
    pub max_properties: Option<u64>,

    /// `oneOf`.
    pub one_of: Option<Composition>,
    /// `anyOf`.
    pub any_of: Option<Composition>,
    /// `allOf`.
    pub all_of: Option<Composition>,
    /// `not` — always a single inline schema (never a parallel-list composition).
    pub not: Option<Box<Schema>>,

    /// `if`.
    pub if_: Option<Box<Schema>>,
    /// `then`.
    pub then: Option<Box<Schema>>,
    /// `else`.
    pub else_: Option<Box<Schema>>,

    /// `contentMediaType`.
    pub content_media_type: Option<String>,
    /// `contentEncoding`.
    pub content_encoding: Option<String>,
    /// `contentSchema`.
    pub content_schema: Option<Box<Schema>>,

    /// `enum`.
    pub enum_values: Option<Vec<Value>>,
    /// `const`.
    pub const_value: Option<Value>,
    /// `default`.
    pub default_value: Option<Value>,

    /// `xml`.
    pub xml: Option<Xml>,
    /// `discriminator`.
    pub discriminator: Option<Discriminator>,
    /// `externalDocs`.
    pub external_docs: Option<super::document::ExternalDocumentation>,

    /// The legacy singular `example` keyword.
    pub example: Option<Value>,
    /// A mapping-shaped `examples` keyword (OAS-style named examples, distinguished from the
    /// 2020-12 array form by the shape of the source value).
    pub examples: IndexMap<String, Value>,
    /// The 2020-12 standard array-shaped `examples` keyword.
    pub examples_list: Vec<Value>,

    /// `deprecated`.
    pub deprecated: Option<bool>,
    /// `readOnly`.
    pub read_only: Option<bool>,
    /// `writeOnly`.
    pub write_only: Option<bool>,

    /// `title`.
    pub title: Option<String>,
    /// `description`.
    pub description: Option<String>,

    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
    /// Any other keyword unrecognized by both 2020-12 and the OpenAPI base dialect,
    /// preserved verbatim.
    pub custom_keywords: IndexMap<String, Value>,
}
