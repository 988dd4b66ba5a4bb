//! Writes `Link` and `Callback` objects.

use crate::model::document::ReferenceOr;
use crate::model::examples::{Callback, CallbackItem, Link, LinkParameterValue};
use crate::value::{Value, ValueMap};
use crate::writer::document::write_server;
use crate::writer::paths::write_path_item;
use crate::writer::util::*;

pub fn write_link(link: &Link) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(r) = &link.reference {
        map.insert("$ref".to_string(), Value::String(r.uri.clone()));
    }
    put_string(&mut map, "operationRef", &link.operation_ref);
    put_string(&mut map, "operationId", &link.operation_id);
    if !link.parameters.is_empty() {
        let m = link
            .parameters
            .iter()
            .map(|(k, v)| (k.clone(), write_link_parameter_value(v)))
            .collect();
        map.insert("parameters".to_string(), Value::Map(m));
    }
    if let Some(body) = &link.request_body {
        map.insert("requestBody".to_string(), write_link_parameter_value(body));
    }
    put_string(&mut map, "description", &link.description);
    if let Some(server) = &link.server {
        map.insert("server".to_string(), Value::Map(write_server(server)));
    }
    extend_extensions(&mut map, &link.extensions);
    map
}

fn write_link_parameter_value(value: &LinkParameterValue) -> Value {
    match value {
        LinkParameterValue::Expression(expr) => Value::String(expr.as_str().to_string()),
        LinkParameterValue::Literal(v) => v.clone(),
    }
}

pub fn write_callback(callback: &Callback) -> ValueMap {
    match callback {
        ReferenceOr::Reference(r) => {
            let mut map = ValueMap::new();
            map.insert("$ref".to_string(), Value::String(r.uri.clone()));
            map
        }
        ReferenceOr::Item(item) => write_callback_item(item),
    }
}

fn write_callback_item(item: &CallbackItem) -> ValueMap {
    let mut map = ValueMap::new();
    // A resolved pure-`$ref` callback re-emits just the reference: its expressions were
    // pulled in from the target for internal use (validation, runtime-expression checks), not
    // to be duplicated back into the source.
    if let Some(r) = &item.reference {
        map.insert("$ref".to_string(), Value::String(r.uri.clone()));
        return map;
    }
    for (template, path_item) in &item.expressions {
        map.insert(template.clone(), Value::Map(write_path_item(path_item)));
    }
    extend_extensions(&mut map, &item.extensions);
    map
}
