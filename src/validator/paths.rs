//! `paths`/`webhooks` rules: template syntax, path-parameter consistency, `operationId`
//! uniqueness.

use std::collections::HashSet;

use crate::model::document::Definition;
use crate::model::params::ParameterLocation;
use crate::model::paths::PathItem;
use crate::validator::{encode_pointer_segment, is_http_token, Issue};

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen_operation_ids: HashSet<&str> = HashSet::new();

    check_template_collisions(doc, &mut issues);

    for (path_key, item) in &doc.paths {
        let pointer = format!("/paths/{}", encode_pointer_segment(path_key));
        if !path_key.starts_with('/') {
            issues.push(Issue::error(
                pointer.clone(),
                "path templates must start with '/'",
            ));
        }
        check_path_item(&pointer, path_key, item, &mut issues, &mut seen_operation_ids);
    }

    for (hook_name, item) in &doc.webhooks {
        let pointer = format!("/webhooks/{}", encode_pointer_segment(hook_name));
        check_path_item(&pointer, "/", item, &mut issues, &mut seen_operation_ids);
    }

    issues
}

/// Two path templates that differ only in the names of their variables describe the same
/// structural shape and will collide at request-routing time.
fn check_template_collisions(doc: &Definition, issues: &mut Vec<Issue>) {
    let mut seen: Vec<(String, &str)> = Vec::new();
    for path_key in doc.paths.keys() {
        let shape = template_shape(path_key);
        if let Some((_, other)) = seen.iter().find(|(s, _)| *s == shape) {
            issues.push(Issue::error(
                format!("/paths/{}", encode_pointer_segment(path_key)),
                format!("path '{path_key}' collides with '{other}': templates differ only in variable names"),
            ));
        } else {
            seen.push((shape, path_key.as_str()));
        }
    }
}

/// Replaces every `{var}` segment with a placeholder so two templates that differ only in
/// variable naming compare equal.
fn template_shape(path: &str) -> String {
    let mut out = String::new();
    let mut in_var = false;
    for c in path.chars() {
        match c {
            '{' => {
                in_var = true;
                out.push('{');
                out.push('}');
            }
            '}' => in_var = false,
            _ if in_var => {}
            _ => out.push(c),
        }
    }
    out
}

fn check_path_item<'a>(
    pointer: &str,
    path_key: &str,
    item: &'a PathItem,
    issues: &mut Vec<Issue>,
    seen_operation_ids: &mut HashSet<&'a str>,
) {
    let template_vars = extract_template_vars(path_key);
    check_duplicate_template_vars(pointer, &template_vars, issues);

    if item.reference.is_some()
        && (item.summary.is_some()
            || item.description.is_some()
            || !item.operations.is_empty()
            || !item.additional_operations.is_empty()
            || !item.servers.is_empty()
            || !item.parameters.is_empty())
    {
        issues.push(Issue::warning(
            pointer,
            "a path item '$ref' should be used without sibling fields",
        ));
    }

    for (method, op) in &item.operations {
        let op_pointer = format!("{pointer}/{}", method.field_name());
        if let Some(id) = &op.operation_id {
            if !seen_operation_ids.insert(id.as_str()) {
                issues.push(Issue::error(
                    format!("{op_pointer}/operationId"),
                    format!("'{id}' is not unique across the document"),
                ));
            }
        }
        check_path_parameter_coverage(&op_pointer, &template_vars, item, op, issues);
    }

    for (name, op) in &item.additional_operations {
        let op_pointer = format!("{pointer}/additionalOperations/{name}");
        if !is_http_token(name) {
            issues.push(Issue::error(
                &op_pointer,
                format!("'{name}' is not a valid HTTP method token"),
            ));
        }
        if let Some(id) = &op.operation_id {
            if !seen_operation_ids.insert(id.as_str()) {
                issues.push(Issue::error(
                    format!("{op_pointer}/operationId"),
                    format!("'{id}' is not unique across the document"),
                ));
            }
        }
    }
}

/// A path template's `{name}` variables must each appear at most once; `/users/{id}/{id}`
/// cannot be matched to a single `in: path` parameter named `id` unambiguously.
fn check_duplicate_template_vars(pointer: &str, template_vars: &[String], issues: &mut Vec<Issue>) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for var in template_vars {
        if !seen.insert(var.as_str()) && reported.insert(var.as_str()) {
            issues.push(Issue::error(
                pointer,
                format!("path template variable '{{{var}}}' must not appear more than once"),
            ));
        }
    }
}

fn check_path_parameter_coverage(
    op_pointer: &str,
    template_vars: &[String],
    item: &PathItem,
    op: &crate::model::paths::Operation,
    issues: &mut Vec<Issue>,
) {
    let declared: HashSet<&str> = item
        .parameters
        .iter()
        .chain(op.parameters.iter())
        .filter(|p| p.location == Some(ParameterLocation::Path))
        .filter_map(|p| p.name.as_deref())
        .collect();

    let mut unique_vars: Vec<&str> = Vec::new();
    for var in template_vars {
        if !unique_vars.contains(&var.as_str()) {
            unique_vars.push(var.as_str());
        }
    }

    for var in unique_vars {
        if !declared.contains(var) {
            issues.push(Issue::error(
                op_pointer,
                format!("path template variable '{{{var}}}' has no matching 'in: path' parameter"),
            ));
        }
    }

    for p in item.parameters.iter().chain(op.parameters.iter()) {
        if p.location == Some(ParameterLocation::Path) {
            if let Some(name) = &p.name {
                if !template_vars.iter().any(|v| v == name) {
                    issues.push(Issue::warning(
                        op_pointer,
                        format!("path parameter '{name}' is declared but not used in the template"),
                    ));
                }
                if p.required != Some(true) {
                    issues.push(Issue::error(
                        op_pointer,
                        format!("path parameter '{name}' must set 'required: true'"),
                    ));
                }
            }
        }
    }
}

fn extract_template_vars(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut chars = path.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '{' {
            continue;
        }
        let mut name = String::new();
        for n in chars.by_ref() {
            if n == '}' {
                break;
            }
            name.push(n);
        }
        out.push(name);
    }
    out
}

