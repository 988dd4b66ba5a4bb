//! The in-memory document model (the "IR"): format-agnostic, insertion-ordered, and shared by
//! the parser, validator, and writer.

pub mod components;
pub mod content;
pub mod document;
pub mod examples;
pub mod params;
pub mod paths;
pub mod reference;
pub mod schema;
pub mod security;

pub use components::Components;
pub use content::{Encoding, Example, Header, MediaTypeObject, RequestBody, Response};
pub use document::{
    Contact, Definition, ExternalDocumentation, Info, License, ReferenceOr, SchemaDocument,
    Server, ServerVariable, Tag,
};
pub use examples::{Callback, CallbackItem, Link, LinkParameterValue};
pub use params::{Parameter, ParameterLocation};
pub use paths::{HttpMethod, Operation, PathItem};
pub use reference::Reference;
pub use schema::{Composition, CompositionSlot, Discriminator, Schema, SchemaObject, Xml};
pub use security::{OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};
