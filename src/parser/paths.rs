//! Parses `PathItem` and `Operation`, including the 3.2 `additionalOperations` extension point.

use indexmap::IndexMap;

use crate::model::document::Server;
use crate::model::paths::{HttpMethod, Operation, PathItem};
use crate::model::reference::Reference;
use crate::parser::content::{parse_request_body, parse_response};
use crate::parser::context::ParseCtx;
use crate::parser::examples::parse_callback;
use crate::parser::params::parse_parameter;
use crate::parser::security::parse_security_requirement;
use crate::parser::util::*;
use crate::validator::is_http_token;
use crate::value::{Value, ValueMap};

pub fn parse_path_item(mut map: ValueMap, ctx: &ParseCtx) -> PathItem {
    let reference = take_string(&mut map, "$ref").map(Reference::new);
    let summary = take_string(&mut map, "summary");
    let description = take_string(&mut map, "description");

    let mut operations = IndexMap::new();
    for method in HttpMethod::ALL {
        if let Some(Value::Map(op_map)) = take(&mut map, method.field_name()) {
            operations.insert(method, parse_operation(op_map, ctx));
        }
    }

    let mut additional_operations: IndexMap<String, Operation> =
        take_map(&mut map, "additionalOperations")
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::Map(m) => Some((k, parse_operation(m, ctx))),
                _ => None,
            })
            .collect();

    let servers = take_seq(&mut map, "servers")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::Map(m) => Some(super::document::parse_server(m)),
            _ => None,
        })
        .collect();

    let parameters = take_seq(&mut map, "parameters")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::Map(m) => Some(parse_parameter(m)),
            _ => None,
        })
        .collect();

    // Whatever is left over may still declare a custom method directly as a PathItem sibling
    // (e.g. `"purge": {...}`) rather than nested under `additionalOperations` — both spellings
    // are admitted into the same map.
    let direct_custom_methods: Vec<String> = map
        .iter()
        .filter(|(k, v)| !k.starts_with("x-") && is_http_token(k) && matches!(v, Value::Map(_)))
        .map(|(k, _)| k.clone())
        .collect();
    for key in direct_custom_methods {
        if let Some(Value::Map(m)) = take(&mut map, &key) {
            additional_operations
                .entry(key)
                .or_insert_with(|| parse_operation(m, ctx));
        }
    }

    PathItem {
        reference,
        summary,
        description,
        operations,
        additional_operations,
        servers,
        parameters,
        extensions: take_extensions(map),
    }
}

fn parse_operation(mut map: ValueMap, ctx: &ParseCtx) -> Operation {
    let operation_id = take_string(&mut map, "operationId");
    let operation_id_explicit = operation_id.is_some();

    let responses_explicit = map.contains_key("responses");
    let responses = take_map(&mut map, "responses")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_response(m, ctx))),
            _ => None,
        })
        .collect();

    let security_explicit_empty =
        matches!(map.get("security"), Some(Value::Seq(items)) if items.is_empty());
    let security = take_seq(&mut map, "security").map(|items| {
        items
            .into_iter()
            .filter_map(|v| match v {
                Value::Map(m) => Some(parse_security_requirement(m)),
                _ => None,
            })
            .collect()
    });

    let callbacks = take_map(&mut map, "callbacks")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_callback(m, ctx))),
            _ => None,
        })
        .collect();

    let servers: Vec<Server> = take_seq(&mut map, "servers")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::Map(m) => Some(super::document::parse_server(m)),
            _ => None,
        })
        .collect();

    let parameters = take_seq(&mut map, "parameters")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::Map(m) => Some(parse_parameter(m)),
            _ => None,
        })
        .collect();

    Operation {
        tags: take_string_vec(&mut map, "tags"),
        summary: take_string(&mut map, "summary"),
        description: take_string(&mut map, "description"),
        external_docs: take_map(&mut map, "externalDocs").map(super::document::parse_external_docs),
        operation_id,
        operation_id_explicit,
        parameters,
        request_body: take_map(&mut map, "requestBody").map(|m| parse_request_body(m, ctx)),
        responses,
        responses_explicit,
        callbacks,
        deprecated: take_bool(&mut map, "deprecated"),
        security,
        security_explicit_empty,
        servers,
        extensions: take_extensions(map),
    }
}
