//! Runtime expression rules: every `Link` parameter/request-body expression and every
//! `Callback` expression-template key must parse against the runtime expression grammar; plus
//! `Link` object shape rules (`operationId` XOR `operationRef`, key syntax, resolvability).

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::document::{Definition, ReferenceOr};
use crate::model::examples::{Link, LinkParameterValue};
use crate::model::paths::PathItem;
use crate::runtime_expr;
use crate::validator::{encode_pointer_segment, Issue};

fn link_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9.\-_]+$").unwrap())
}

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();
    let known_operation_ids = collect_operation_ids(doc);

    for (path_key, item) in &doc.paths {
        let pointer = format!("/paths/{}", encode_pointer_segment(path_key));
        for (method, op) in &item.operations {
            let op_pointer = format!("{pointer}/{}", method.field_name());
            for (code, response) in &op.responses {
                for (name, link) in &response.links {
                    check_link(
                        &format!("{op_pointer}/responses/{code}/links/{name}"),
                        name,
                        link,
                        doc,
                        &known_operation_ids,
                        &mut issues,
                    );
                }
            }
            for (name, callback) in &op.callbacks {
                check_callback(&format!("{op_pointer}/callbacks/{name}"), callback, &mut issues);
            }
        }
    }

    if let Some(components) = &doc.components {
        for (name, link) in &components.links {
            check_link(
                &format!("/components/links/{name}"),
                name,
                link,
                doc,
                &known_operation_ids,
                &mut issues,
            );
        }
        for (name, callback) in &components.callbacks {
            check_callback(&format!("/components/callbacks/{name}"), callback, &mut issues);
        }
    }

    issues
}

/// Collects every known `operationId`: top-level paths, webhooks, component path items, and
/// the path items nested inside every inline callback.
fn collect_operation_ids(doc: &Definition) -> HashSet<&str> {
    let mut ids = HashSet::new();
    for item in doc.paths.values() {
        collect_from_path_item(item, &mut ids);
    }
    for item in doc.webhooks.values() {
        collect_from_path_item(item, &mut ids);
    }
    if let Some(components) = &doc.components {
        for item in components.path_items.values() {
            collect_from_path_item(item, &mut ids);
        }
    }
    ids
}

fn collect_from_path_item<'a>(item: &'a PathItem, ids: &mut HashSet<&'a str>) {
    for op in item.operations.values() {
        if let Some(id) = &op.operation_id {
            ids.insert(id.as_str());
        }
        for callback in op.callbacks.values() {
            if let ReferenceOr::Item(cb) = callback {
                for nested in cb.expressions.values() {
                    collect_from_path_item(nested, ids);
                }
            }
        }
    }
    for op in item.additional_operations.values() {
        if let Some(id) = &op.operation_id {
            ids.insert(id.as_str());
        }
    }
}

fn check_link(
    pointer: &str,
    name: &str,
    link: &Link,
    doc: &Definition,
    known_operation_ids: &HashSet<&str>,
    issues: &mut Vec<Issue>,
) {
    if !link_key_re().is_match(name) {
        issues.push(Issue::error(
            pointer,
            format!("link key '{name}' must match '^[A-Za-z0-9.\\-_]+$'"),
        ));
    }

    if link.reference.is_none() {
        match (&link.operation_id, &link.operation_ref) {
            (Some(_), Some(_)) => issues.push(Issue::error(
                pointer,
                "'operationId' and 'operationRef' are mutually exclusive",
            )),
            (None, None) => issues.push(Issue::error(
                pointer,
                "exactly one of 'operationId' or 'operationRef' is required",
            )),
            (Some(id), None) => {
                if !known_operation_ids.contains(id.as_str()) {
                    issues.push(Issue::error(
                        format!("{pointer}/operationId"),
                        format!("'{id}' does not match any known operationId"),
                    ));
                }
            }
            (None, Some(op_ref)) => {
                if !resolves_operation_ref(doc, op_ref) {
                    issues.push(Issue::error(
                        format!("{pointer}/operationRef"),
                        format!("'{op_ref}' does not resolve to an operation"),
                    ));
                }
            }
        }
    }

    for (param_name, value) in &link.parameters {
        check_link_value(&format!("{pointer}/parameters/{param_name}"), value, issues);
    }
    if let Some(value) = &link.request_body {
        check_link_value(&format!("{pointer}/requestBody"), value, issues);
    }
}

/// Resolves an `operationRef`: either an absolute URI matching the document's own `$self`, or
/// a local fragment of the shape `#/paths/{encoded-path}/{method}`.
fn resolves_operation_ref(doc: &Definition, op_ref: &str) -> bool {
    let (uri_part, fragment) = crate::uri::split_ref(op_ref);
    if !uri_part.is_empty() {
        let Some(self_uri) = &doc.self_uri else {
            return false;
        };
        if crate::uri::without_fragment(self_uri) != uri_part {
            return false;
        }
    }
    let Ok(tokens) = crate::pointer::decode_tokens(fragment) else {
        return false;
    };
    if tokens.len() < 3 || tokens[0] != "paths" {
        return false;
    }
    let path_key = &tokens[1];
    let method = &tokens[2];
    let Some(item) = doc.paths.get(path_key.as_str()) else {
        return false;
    };
    if let Some(m) = crate::model::paths::HttpMethod::from_field_name(method) {
        item.operations.contains_key(&m)
    } else {
        item.additional_operations.contains_key(method.as_str())
    }
}

fn check_link_value(pointer: &str, value: &LinkParameterValue, issues: &mut Vec<Issue>) {
    if let LinkParameterValue::Expression(expr) = value {
        if let Err(message) = expr.validate() {
            issues.push(Issue::error(pointer, message));
        }
    }
}

fn check_callback(
    pointer: &str,
    callback: &crate::model::examples::Callback,
    issues: &mut Vec<Issue>,
) {
    let ReferenceOr::Item(item) = callback else {
        return;
    };
    for template in item.expressions.keys() {
        for expr in runtime_expr::embedded_expressions(template) {
            if let Err(message) = runtime_expr::validate(&expr) {
                issues.push(Issue::error(pointer, message));
            }
        }
        if template.trim_start().starts_with('$') {
            if let Err(message) = runtime_expr::validate(template.trim()) {
                issues.push(Issue::error(pointer, message));
            }
        }
    }
}
