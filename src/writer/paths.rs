//! Writes `PathItem` and `Operation`, including the 3.2 `additionalOperations` extension point.

use crate::model::paths::{HttpMethod, Operation, PathItem};
use crate::value::{Value, ValueMap};
use crate::writer::content::{write_request_body, write_response};
use crate::writer::document::write_server;
use crate::writer::examples::write_callback;
use crate::writer::params::write_parameter;
use crate::writer::security::write_security_requirement;
use crate::writer::util::*;

pub fn write_path_item(item: &PathItem) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(r) = &item.reference {
        map.insert("$ref".to_string(), Value::String(r.uri.clone()));
    }
    put_string(&mut map, "summary", &item.summary);
    put_string(&mut map, "description", &item.description);

    for method in HttpMethod::ALL {
        if let Some(op) = item.operations.get(&method) {
            map.insert(method.field_name().to_string(), Value::Map(write_operation(op)));
        }
    }
    if !item.additional_operations.is_empty() {
        let m = item
            .additional_operations
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_operation(v))))
            .collect();
        map.insert("additionalOperations".to_string(), Value::Map(m));
    }

    if !item.servers.is_empty() {
        map.insert(
            "servers".to_string(),
            Value::Seq(item.servers.iter().map(|s| Value::Map(write_server(s))).collect()),
        );
    }
    if !item.parameters.is_empty() {
        map.insert(
            "parameters".to_string(),
            Value::Seq(item.parameters.iter().map(|p| Value::Map(write_parameter(p))).collect()),
        );
    }
    extend_extensions(&mut map, &item.extensions);
    map
}

pub fn write_operation(op: &Operation) -> ValueMap {
    let mut map = ValueMap::new();
    put_string_vec(&mut map, "tags", &op.tags);
    put_string(&mut map, "summary", &op.summary);
    put_string(&mut map, "description", &op.description);
    if let Some(docs) = &op.external_docs {
        map.insert(
            "externalDocs".to_string(),
            Value::Map(super::document::write_external_docs(docs)),
        );
    }
    if op.operation_id_explicit {
        put_string(&mut map, "operationId", &op.operation_id);
    }
    if !op.parameters.is_empty() {
        map.insert(
            "parameters".to_string(),
            Value::Seq(op.parameters.iter().map(|p| Value::Map(write_parameter(p))).collect()),
        );
    }
    if let Some(body) = &op.request_body {
        map.insert("requestBody".to_string(), Value::Map(write_request_body(body)));
    }
    if op.responses_explicit || !op.responses.is_empty() {
        let m = op
            .responses
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_response(v))))
            .collect();
        map.insert("responses".to_string(), Value::Map(m));
    }
    if !op.callbacks.is_empty() {
        let m = op
            .callbacks
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_callback(v))))
            .collect();
        map.insert("callbacks".to_string(), Value::Map(m));
    }
    put_bool(&mut map, "deprecated", op.deprecated);
    if let Some(security) = &op.security {
        map.insert(
            "security".to_string(),
            Value::Seq(
                security
                    .iter()
                    .map(|r| Value::Map(write_security_requirement(r)))
                    .collect(),
            ),
        );
    }
    if !op.servers.is_empty() {
        map.insert(
            "servers".to_string(),
            Value::Seq(op.servers.iter().map(|s| Value::Map(write_server(s))).collect()),
        );
    }
    extend_extensions(&mut map, &op.extensions);
    map
}
