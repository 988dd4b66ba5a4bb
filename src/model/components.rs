//! The `components` container: one `IndexMap` per reusable object kind.

use indexmap::IndexMap;

use crate::model::content::{Example as MediaExample, Header, MediaTypeObject, RequestBody, Response};
use crate::model::examples::{Callback, Link};
use crate::model::params::Parameter;
use crate::model::paths::PathItem;
use crate::model::schema::Schema;
use crate::model::security::SecurityScheme;
use crate::value::Value;

/// The `components` object. Every field preserves declaration order via `IndexMap`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Components {
    /// `components.schemas`.
    pub schemas: IndexMap<String, Schema>,
    /// `components.responses`.
    pub responses: IndexMap<String, Response>,
    /// `components.parameters`.
    pub parameters: IndexMap<String, Parameter>,
    /// `components.examples`.
    pub examples: IndexMap<String, MediaExample>,
    /// `components.requestBodies`.
    pub request_bodies: IndexMap<String, RequestBody>,
    /// `components.headers`.
    pub headers: IndexMap<String, Header>,
    /// `components.securitySchemes`.
    pub security_schemes: IndexMap<String, SecurityScheme>,
    /// `components.links`.
    pub links: IndexMap<String, Link>,
    /// `components.callbacks`.
    pub callbacks: IndexMap<String, Callback>,
    /// `components.pathItems` (3.1+) — validated with the same rules as top-level `paths`
    /// entries.
    pub path_items: IndexMap<String, PathItem>,
    /// `components.mediaTypes` (3.2) — reusable named media type objects.
    pub media_types: IndexMap<String, MediaTypeObject>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}
