//! `Parameter` and `Header` rules: name/location uniqueness, the `schema`/`content`
//! exclusivity rule, style/location compatibility, and the `querystring` location's special
//! constraints.

use std::collections::HashSet;

use crate::model::content::Header;
use crate::model::document::Definition;
use crate::model::params::{Parameter, ParameterLocation};
use crate::validator::{encode_pointer_segment, is_http_token, Issue};

const RESERVED_HEADER_NAMES: &[&str] = &["Accept", "Content-Type", "Authorization"];

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (path_key, item) in &doc.paths {
        let pointer = format!("/paths/{}", encode_pointer_segment(path_key));
        check_list(&format!("{pointer}/parameters"), &item.parameters, &mut issues);
        for (method, op) in &item.operations {
            let op_pointer = format!("{pointer}/{}", method.field_name());
            check_list(&format!("{op_pointer}/parameters"), &op.parameters, &mut issues);

            let has_query = item
                .parameters
                .iter()
                .chain(op.parameters.iter())
                .any(|p| p.location == Some(ParameterLocation::Query));
            let has_querystring = item
                .parameters
                .iter()
                .chain(op.parameters.iter())
                .any(|p| p.location == Some(ParameterLocation::QueryString));
            if has_query && has_querystring {
                issues.push(Issue::error(
                    &op_pointer,
                    "'query' and 'querystring' parameters must not coexist on the same operation",
                ));
            }

            for (code, response) in &op.responses {
                for (name, header) in &response.headers {
                    check_header(
                        &format!("{op_pointer}/responses/{code}/headers/{name}"),
                        name,
                        header,
                        &mut issues,
                    );
                }
            }
        }
    }

    if let Some(components) = &doc.components {
        for (name, p) in &components.parameters {
            check_one(&format!("/components/parameters/{name}"), p, &mut issues);
        }
        for (name, h) in &components.headers {
            check_header(&format!("/components/headers/{name}"), name, h, &mut issues);
        }
    }

    issues
}

fn check_list(pointer: &str, params: &[Parameter], issues: &mut Vec<Issue>) {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for (i, p) in params.iter().enumerate() {
        let item_pointer = format!("{pointer}/{i}");
        check_one(&item_pointer, p, issues);
        if let (Some(name), Some(location)) = (&p.name, p.location) {
            let key = (name.clone(), format!("{location:?}"));
            if !seen.insert(key) {
                issues.push(Issue::error(
                    item_pointer,
                    format!("duplicate parameter '{name}' for the same location"),
                ));
            }
        }
    }
}

fn check_one(pointer: &str, p: &Parameter, issues: &mut Vec<Issue>) {
    if p.reference.is_some() {
        return;
    }
    if p.name.is_none() {
        issues.push(Issue::error(pointer, "'name' is required"));
    }
    let Some(location) = p.location else {
        issues.push(Issue::error(pointer, "'in' is required and must be a recognized location"));
        return;
    };

    if location == ParameterLocation::QueryString {
        if p.schema.is_some() {
            issues.push(Issue::error(
                pointer,
                "'querystring' parameters must use 'content', not 'schema'",
            ));
        }
        if p.content.len() != 1 {
            issues.push(Issue::error(
                pointer,
                "'querystring' parameters must declare exactly one 'content' entry",
            ));
        }
        if p.style.is_some() || p.explode.is_some() || p.allow_reserved.is_some() {
            issues.push(Issue::error(
                pointer,
                "'querystring' parameters must not set 'style', 'explode', or 'allowReserved'",
            ));
        }
        return;
    }

    if p.schema.is_some() && !p.content.is_empty() {
        issues.push(Issue::error(
            pointer,
            "'schema' and 'content' are mutually exclusive",
        ));
    }
    if p.schema.is_none() && p.content.is_empty() {
        issues.push(Issue::warning(
            pointer,
            "parameter has neither 'schema' nor 'content'",
        ));
    }
    if p.content.len() > 1 {
        issues.push(Issue::error(
            pointer,
            "'content' must contain exactly one entry",
        ));
    }
    if !p.content.is_empty() && (p.style.is_some() || p.explode.is_some() || p.allow_reserved.is_some()) {
        issues.push(Issue::error(
            pointer,
            "parameters using 'content' must not also define 'style', 'explode', or 'allowReserved'",
        ));
    }
    if p.allow_empty_value.is_some() && location != ParameterLocation::Query {
        issues.push(Issue::error(
            pointer,
            "'allowEmptyValue' is only valid on 'query' parameters",
        ));
    }

    if let Some(style) = &p.style {
        if !style_allowed(location, style) {
            issues.push(Issue::error(
                format!("{pointer}/style"),
                format!("style '{style}' is not valid for location '{location:?}'"),
            ));
        }
        if style == "spaceDelimited" && p.explode == Some(true) {
            issues.push(Issue::error(
                format!("{pointer}/explode"),
                "'spaceDelimited' does not accept 'explode: true'",
            ));
        }
        if style == "deepObject" {
            let is_object = p
                .schema
                .as_ref()
                .and_then(|s| s.as_object())
                .map(|o| o.types.iter().any(|t| t == "object"))
                .unwrap_or(false);
            if !is_object {
                issues.push(Issue::warning(
                    format!("{pointer}/style"),
                    "'deepObject' is only meaningful for an object-typed schema",
                ));
            }
        }
    }

    if location == ParameterLocation::Header {
        if let Some(name) = &p.name {
            if !is_http_token(name) {
                issues.push(Issue::error(pointer, format!("'{name}' is not a valid HTTP header field name")));
            }
            if RESERVED_HEADER_NAMES.iter().any(|r| r.eq_ignore_ascii_case(name)) {
                issues.push(Issue::warning(
                    pointer,
                    format!("header parameter '{name}' duplicates a standard HTTP header"),
                ));
            }
        }
        if let Some(style) = &p.style {
            if style != "simple" {
                issues.push(Issue::error(
                    format!("{pointer}/style"),
                    "header parameters must use style 'simple'",
                ));
            }
        }
    }
}

fn style_allowed(location: ParameterLocation, style: &str) -> bool {
    match location {
        ParameterLocation::Path => matches!(style, "simple" | "label" | "matrix"),
        ParameterLocation::Query => {
            matches!(style, "form" | "spaceDelimited" | "pipeDelimited" | "deepObject")
        }
        ParameterLocation::Cookie => matches!(style, "form"),
        ParameterLocation::Header => style == "simple",
        ParameterLocation::QueryString => false,
    }
}

fn check_header(pointer: &str, name: &str, header: &Header, issues: &mut Vec<Issue>) {
    if header.reference.is_some() {
        return;
    }
    if name.eq_ignore_ascii_case("content-type") {
        issues.push(Issue::error(pointer, "response headers must not declare 'Content-Type'"));
    }
    if !is_http_token(name) {
        issues.push(Issue::error(pointer, format!("'{name}' is not a valid HTTP header field name")));
    }
    if let Some(style) = &header.style {
        if style != "simple" {
            issues.push(Issue::error(
                format!("{pointer}/style"),
                "header style must be 'simple' when set",
            ));
        }
    }
    if !header.content.is_empty() {
        if header.content.len() != 1 {
            issues.push(Issue::error(
                format!("{pointer}/content"),
                "'content' must contain exactly one entry",
            ));
        }
        if header.style.is_some() || header.explode.is_some() {
            issues.push(Issue::error(
                pointer,
                "headers using 'content' must not also define 'style'/'explode'",
            ));
        }
        if header.schema.is_some() {
            issues.push(Issue::error(
                pointer,
                "'schema' and 'content' are mutually exclusive",
            ));
        }
    }
    if RESERVED_HEADER_NAMES.iter().any(|r| r.eq_ignore_ascii_case(name)) {
        issues.push(Issue::warning(
            pointer,
            format!("header '{name}' duplicates a standard HTTP header"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_style_mismatched_with_location() {
        assert!(!style_allowed(ParameterLocation::Path, "deepObject"));
        assert!(style_allowed(ParameterLocation::Path, "matrix"));
        assert!(style_allowed(ParameterLocation::Query, "deepObject"));
        assert!(!style_allowed(ParameterLocation::Header, "form"));
    }
}
