//! `Server` object rules: URL shape and variable substitution consistency.

use crate::model::document::{Definition, Server};
use crate::uri;
use crate::validator::{encode_pointer_segment, Issue};

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_duplicate_names("/servers", &doc.servers, &mut issues);
    for (i, server) in doc.servers.iter().enumerate() {
        check_server(&format!("/servers/{i}"), server, &mut issues);
    }
    for (path_key, item) in &doc.paths {
        let base = format!("/paths/{}", encode_pointer_segment(path_key));
        for (i, server) in item.servers.iter().enumerate() {
            check_server(&format!("{base}/servers/{i}"), server, &mut issues);
        }
        for (method, op) in &item.operations {
            for (i, server) in op.servers.iter().enumerate() {
                check_server(
                    &format!("{base}/{}/servers/{i}", method.field_name()),
                    server,
                    &mut issues,
                );
            }
        }
    }
    issues
}

fn check_duplicate_names(pointer: &str, servers: &[Server], issues: &mut Vec<Issue>) {
    let mut seen = std::collections::HashSet::new();
    for server in servers {
        if let Some(name) = &server.name {
            if !seen.insert(name.as_str()) {
                issues.push(Issue::error(pointer, format!("duplicate server name '{name}'")));
            }
        }
    }
}

fn check_server(path: &str, server: &Server, issues: &mut Vec<Issue>) {
    if server.url.is_empty() {
        issues.push(Issue::error(format!("{path}/url"), "'url' is required"));
        return;
    }
    if !uri::has_no_query_or_fragment(&server.url) {
        issues.push(Issue::error(
            format!("{path}/url"),
            "server URL must not contain a query string or fragment",
        ));
    }

    let declared = extract_template_vars(&server.url);
    for name in &declared {
        if !server.variables.contains_key(name) {
            issues.push(Issue::error(
                format!("{path}/url"),
                format!("server URL references undeclared variable '{{{name}}}'"),
            ));
        }
    }
    for (name, variable) in &server.variables {
        if name.contains('{') || name.contains('}') {
            issues.push(Issue::error(
                format!("{path}/variables/{name}"),
                "server variable names must not contain '{' or '}'",
            ));
        }
        if !declared.contains(name) {
            issues.push(Issue::warning(
                format!("{path}/variables/{name}"),
                format!("variable '{name}' is declared but not referenced in the URL"),
            ));
        }
        if !variable.enum_values.is_empty() && !variable.enum_values.contains(&variable.default) {
            issues.push(Issue::error(
                format!("{path}/variables/{name}/default"),
                "default value must be one of 'enum'",
            ));
        }
    }
}

fn extract_template_vars(url: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut chars = url.chars().peekable();
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

