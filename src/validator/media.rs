//! `content` rules: media type range syntax, `itemSchema`/`itemEncoding` applicability, and
//! `encoding` applicability.

use regex::Regex;
use std::sync::OnceLock;

use crate::model::content::MediaTypeObject;
use crate::model::document::Definition;
use crate::validator::{encode_pointer_segment, Issue};

const LINE_DELIMITED_TYPES: &[&str] = &[
    "application/jsonl",
    "application/x-ndjson",
    "application/json-seq",
    "text/event-stream",
];

/// True if `s` is a syntactically valid media type range (`type/subtype[;params]` or `*/*`),
/// shared with the schema validator's `contentMediaType` check.
pub(crate) fn is_valid_media_range(s: &str) -> bool {
    s == "*/*" || media_range_re().is_match(s)
}

fn media_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\*|[A-Za-z0-9!#$&^_.+-]+)/(\*|[A-Za-z0-9!#$&^_.+-]+)(\s*;.*)?$").unwrap()
    })
}

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (path_key, item) in &doc.paths {
        let pointer = format!("/paths/{}", encode_pointer_segment(path_key));
        for (method, op) in &item.operations {
            let op_pointer = format!("{pointer}/{}", method.field_name());
            if let Some(body) = &op.request_body {
                check_content_map(&format!("{op_pointer}/requestBody/content"), &body.content, &mut issues);
            }
            for (code, response) in &op.responses {
                check_content_map(
                    &format!("{op_pointer}/responses/{code}/content"),
                    &response.content,
                    &mut issues,
                );
            }
        }
    }
    issues
}

fn check_content_map(
    pointer: &str,
    content: &indexmap::IndexMap<String, MediaTypeObject>,
    issues: &mut Vec<Issue>,
) {
    for (key, media) in content {
        let media_pointer = format!("{pointer}/{key}");
        if key != "*/*" && !media_range_re().is_match(key) {
            issues.push(Issue::error(
                &media_pointer,
                format!("'{key}' is not a syntactically valid media type range"),
            ));
        }
        check_media_type_object(&media_pointer, key, media, issues);
    }
}

fn check_media_type_object(pointer: &str, key: &str, media: &MediaTypeObject, issues: &mut Vec<Issue>) {
    let essence = key.split(';').next().unwrap_or(key).trim();

    if media.item_schema.is_some() && !LINE_DELIMITED_TYPES.contains(&essence) {
        issues.push(Issue::error(
            format!("{pointer}/itemSchema"),
            "'itemSchema' is only valid on a sequential/line-delimited media type",
        ));
    }

    let is_multipart = essence.starts_with("multipart/");
    if media.item_encoding.is_some() {
        if !is_multipart {
            issues.push(Issue::error(
                format!("{pointer}/itemEncoding"),
                "'itemEncoding' is only valid on a 'multipart/*' media type",
            ));
        }
        if !media.encoding.is_empty() {
            issues.push(Issue::error(
                pointer,
                "'encoding' and 'itemEncoding' are mutually exclusive",
            ));
        }
        let has_array_with_prefix_items = media
            .schema
            .as_ref()
            .and_then(|s| s.as_object())
            .map(|o| o.types.iter().any(|t| t == "array") && !o.prefix_items.is_empty())
            .unwrap_or(false);
        if !has_array_with_prefix_items {
            issues.push(Issue::error(
                format!("{pointer}/itemEncoding"),
                "'itemEncoding' requires an array schema with 'prefixItems'",
            ));
        }
    }

    if !media.encoding.is_empty() {
        if essence != "application/x-www-form-urlencoded" && !is_multipart {
            issues.push(Issue::warning(
                pointer,
                "'encoding' only applies to 'multipart/*' and 'application/x-www-form-urlencoded'",
            ));
        }
        if let Some(props) = media
            .schema
            .as_ref()
            .and_then(|s| s.as_object())
            .filter(|o| !o.properties.is_empty())
        {
            for name in media.encoding.keys() {
                if !props.properties.contains_key(name) {
                    issues.push(Issue::warning(
                        format!("{pointer}/encoding/{name}"),
                        format!("encoding entry '{name}' is not a property of the schema"),
                    ));
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_ranges() {
        assert!(media_range_re().is_match("application/json"));
        assert!(media_range_re().is_match("application/vnd.api+json"));
        assert!(media_range_re().is_match("text/*"));
        assert!(media_range_re().is_match("application/json; charset=utf-8"));
    }

    #[test]
    fn rejects_malformed_range() {
        assert!(!media_range_re().is_match("application"));
        assert!(!media_range_re().is_match("/json"));
    }
}
