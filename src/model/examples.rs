//! `Link` and `Callback`, the two objects that cross-reference other parts of a document at
//! runtime rather than at parse time.

use indexmap::IndexMap;

use crate::model::document::ReferenceOr;
use crate::model::paths::PathItem;
use crate::model::reference::Reference;
use crate::runtime_expr::RuntimeExpression;
use crate::value::Value;

/// The `Link` object.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// A reference to a reusable link, with inline fields below acting as overrides.
    pub reference: Option<Reference>,
    /// `operationRef`.
    pub operation_ref: Option<String>,
    /// `operationId`.
    pub operation_id: Option<String>,
    /// `parameters`, mapping a target parameter name to a runtime expression (or a constant
    /// value written alongside one, per the "expression or literal" grammar).
    pub parameters: IndexMap<String, LinkParameterValue>,
    /// `requestBody`.
    pub request_body: Option<LinkParameterValue>,
    /// `description`.
    pub description: Option<String>,
    /// `server`.
    pub server: Option<crate::model::document::Server>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A `Link.parameters`/`Link.requestBody` value: either a runtime expression or a literal
/// value embedded directly.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkParameterValue {
    /// A `{$...}`-style runtime expression (or a template containing one).
    Expression(RuntimeExpression),
    /// Any other literal value.
    Literal(Value),
}

/// A `Callback` object: a map of runtime-expression-keyed templates to path items describing
/// an out-of-band request the API may make to the caller.
///
/// Unlike every other holder in the model, a callback has no inline fields of its own besides
/// the map itself, so it is one of the few places the model uses [`ReferenceOr`] rather than
/// an embedded `Option<Reference>`.
pub type Callback = ReferenceOr<CallbackItem>;

/// The inline form of a [`Callback`]: one path item per expression template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallbackItem {
    /// Set when this callback was declared as a pure `$ref` — the original reference, kept so
    /// the writer can re-emit it rather than inlining the resolved expressions it was given.
    pub reference: Option<Reference>,
    /// Expression template (e.g. `{$request.body#/callbackUrl}`) to the path item describing
    /// the callback request/response, in declaration order. Populated from the reference
    /// target when `reference` is set and resolution succeeds; empty if it doesn't.
    pub expressions: IndexMap<String, PathItem>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}
