//! Parses `Link` and `Callback` objects.

use indexmap::IndexMap;

use crate::model::document::ReferenceOr;
use crate::model::examples::{Callback, CallbackItem, Link, LinkParameterValue};
use crate::model::reference::Reference;
use crate::parser::context::ParseCtx;
use crate::parser::util::*;
use crate::runtime_expr::RuntimeExpression;
use crate::value::{Value, ValueMap};

pub fn parse_link(mut map: ValueMap) -> Link {
    let reference = take_string(&mut map, "$ref").map(Reference::new);
    let parameters = take_map(&mut map, "parameters")
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k, parse_link_parameter_value(v)))
        .collect();
    Link {
        reference,
        operation_ref: take_string(&mut map, "operationRef"),
        operation_id: take_string(&mut map, "operationId"),
        parameters,
        request_body: take(&mut map, "requestBody").map(parse_link_parameter_value),
        description: take_string(&mut map, "description"),
        server: take_map(&mut map, "server").map(super::document::parse_server),
        extensions: take_extensions(map),
    }
}

fn parse_link_parameter_value(v: Value) -> LinkParameterValue {
    match &v {
        Value::String(s) if s.trim_start().starts_with('$') || s.contains("{$") => {
            LinkParameterValue::Expression(RuntimeExpression::new(s.clone()))
        }
        _ => LinkParameterValue::Literal(v),
    }
}

/// Parses a `callbacks[name]` entry, which is either a `$ref`-only object (rare, but legal
/// since a callback map has no fields of its own besides the `$ref`/expression keys) or an
/// inline map of expression templates to path items.
///
/// A pure-`$ref` callback is always resolved into an inline [`CallbackItem`] rather than left
/// as a bare reference: the item carries the original reference (so the writer can re-emit it
/// faithfully) alongside the target's expressions when resolution succeeds, or zero
/// expressions when it doesn't.
pub fn parse_callback(map: ValueMap, ctx: &ParseCtx) -> Callback {
    if map.len() == 1 {
        if let Some(Value::String(uri)) = map.get("$ref") {
            let reference = Reference::new(uri.clone());
            let expressions = ctx
                .resolve(uri)
                .and_then(|resolved| match resolved.value.get() {
                    Value::Map(m) => Some(parse_callback_entries(m.clone(), ctx).0),
                    _ => None,
                })
                .unwrap_or_default();
            return ReferenceOr::Item(CallbackItem {
                reference: Some(reference),
                expressions,
                extensions: IndexMap::new(),
            });
        }
    }
    let (expressions, extensions) = parse_callback_entries(map, ctx);
    ReferenceOr::Item(CallbackItem {
        reference: None,
        expressions,
        extensions,
    })
}

fn parse_callback_entries(
    map: ValueMap,
    ctx: &ParseCtx,
) -> (IndexMap<String, crate::model::paths::PathItem>, IndexMap<String, Value>) {
    let mut expressions = IndexMap::new();
    let mut extensions = IndexMap::new();
    for (k, v) in map {
        if k.starts_with("x-") {
            extensions.insert(k, v);
            continue;
        }
        if let Value::Map(item_map) = v {
            expressions.insert(k, super::paths::parse_path_item(item_map, ctx));
        }
    }
    (expressions, extensions)
}
