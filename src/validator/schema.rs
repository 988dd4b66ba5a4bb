//! Schema rules: numeric/length range sanity, pattern compilability, recognized `type` values,
//! discriminator shape, dynamic-reference resolvability, content-keyword validity, and
//! dialect-vocabulary policing (which OpenAPI-only keywords and custom keywords are allowed
//! depends on the active `jsonSchemaDialect`/per-schema `$schema`).

use regex::Regex;

use crate::model::content::{Header, MediaTypeObject, RequestBody, Response};
use crate::model::document::Definition;
use crate::model::params::Parameter;
use crate::model::paths::PathItem;
use crate::model::schema::{Schema, SchemaObject};
use crate::validator::media::is_valid_media_range;
use crate::validator::{encode_pointer_segment, Issue};

const RECOGNIZED_TYPES: &[&str] = &[
    "string", "number", "integer", "boolean", "object", "array", "null",
];

const STRICT_2020_12_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Context threaded through the schema walk: the owning document (for local `$ref`
/// resolvability checks), the dialect in effect (possibly overridden per-subtree by
/// `$schema`), and the set of `$dynamicAnchor`s declared by enclosing schemas, for
/// `$dynamicRef` resolvability checks.
struct Ctx<'a> {
    doc: &'a Definition,
    dialect: Option<&'a str>,
    dynamic_anchors: Vec<&'a str>,
}

impl<'a> Ctx<'a> {
    fn root(doc: &'a Definition) -> Self {
        Ctx { doc, dialect: doc.json_schema_dialect.as_deref(), dynamic_anchors: Vec::new() }
    }
}

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(components) = &doc.components {
        for (name, schema) in &components.schemas {
            walk(&format!("/components/schemas/{name}"), schema, &Ctx::root(doc), &mut issues);
        }
        for (name, p) in &components.parameters {
            walk_parameter(&format!("/components/parameters/{name}"), p, &Ctx::root(doc), &mut issues);
        }
        for (name, h) in &components.headers {
            walk_header(&format!("/components/headers/{name}"), h, &Ctx::root(doc), &mut issues);
        }
        for (name, body) in &components.request_bodies {
            walk_request_body(&format!("/components/requestBodies/{name}"), body, &Ctx::root(doc), &mut issues);
        }
        for (name, resp) in &components.responses {
            walk_response(&format!("/components/responses/{name}"), resp, &Ctx::root(doc), &mut issues);
        }
        for (name, item) in &components.path_items {
            let pointer = format!("/components/pathItems/{}", encode_pointer_segment(name));
            walk_path_item(&pointer, item, doc, &mut issues);
        }
        for (name, mt) in &components.media_types {
            walk_media_type(&format!("/components/mediaTypes/{name}"), mt, &Ctx::root(doc), &mut issues);
        }
    }

    for (path_key, item) in &doc.paths {
        let pointer = format!("/paths/{}", encode_pointer_segment(path_key));
        walk_path_item(&pointer, item, doc, &mut issues);
    }

    for (hook_name, item) in &doc.webhooks {
        let pointer = format!("/webhooks/{}", encode_pointer_segment(hook_name));
        walk_path_item(&pointer, item, doc, &mut issues);
    }

    issues
}

fn walk_path_item(pointer: &str, item: &PathItem, doc: &Definition, issues: &mut Vec<Issue>) {
    for p in &item.parameters {
        walk_parameter(&format!("{pointer}/parameters"), p, &Ctx::root(doc), issues);
    }
    for (method, op) in &item.operations {
        let op_pointer = format!("{pointer}/{}", method.field_name());
        walk_operation(&op_pointer, op, doc, issues);
    }
    for (name, op) in &item.additional_operations {
        let op_pointer = format!("{pointer}/additionalOperations/{name}");
        walk_operation(&op_pointer, op, doc, issues);
    }
}

fn walk_operation(op_pointer: &str, op: &crate::model::paths::Operation, doc: &Definition, issues: &mut Vec<Issue>) {
    for (i, p) in op.parameters.iter().enumerate() {
        walk_parameter(&format!("{op_pointer}/parameters/{i}"), p, &Ctx::root(doc), issues);
    }
    if let Some(body) = &op.request_body {
        walk_request_body(&format!("{op_pointer}/requestBody"), body, &Ctx::root(doc), issues);
    }
    for (code, response) in &op.responses {
        walk_response(&format!("{op_pointer}/responses/{code}"), response, &Ctx::root(doc), issues);
    }
}

fn walk_request_body(pointer: &str, body: &RequestBody, ctx: &Ctx, issues: &mut Vec<Issue>) {
    for (mt, media) in &body.content {
        walk_media_type(&format!("{pointer}/content/{mt}"), media, ctx, issues);
    }
}

fn walk_response(pointer: &str, response: &Response, ctx: &Ctx, issues: &mut Vec<Issue>) {
    for (name, header) in &response.headers {
        walk_header(&format!("{pointer}/headers/{name}"), header, ctx, issues);
    }
    for (mt, media) in &response.content {
        walk_media_type(&format!("{pointer}/content/{mt}"), media, ctx, issues);
    }
}

fn walk_parameter(pointer: &str, p: &Parameter, ctx: &Ctx, issues: &mut Vec<Issue>) {
    if let Some(schema) = &p.schema {
        walk(&format!("{pointer}/schema"), schema, ctx, issues);
    }
    for (mt, media) in &p.content {
        walk_media_type(&format!("{pointer}/content/{mt}"), media, ctx, issues);
    }
}

fn walk_header(pointer: &str, h: &Header, ctx: &Ctx, issues: &mut Vec<Issue>) {
    if let Some(schema) = &h.schema {
        walk(&format!("{pointer}/schema"), schema, ctx, issues);
    }
    for (mt, media) in &h.content {
        walk_media_type(&format!("{pointer}/content/{mt}"), media, ctx, issues);
    }
}

fn walk_media_type(pointer: &str, media: &MediaTypeObject, ctx: &Ctx, issues: &mut Vec<Issue>) {
    if let Some(schema) = &media.schema {
        walk(&format!("{pointer}/schema"), schema, ctx, issues);
    }
    if let Some(schema) = &media.item_schema {
        walk(&format!("{pointer}/itemSchema"), schema, ctx, issues);
    }
}

fn walk<'a>(pointer: &str, schema: &'a Schema, ctx: &Ctx<'a>, issues: &mut Vec<Issue>) {
    let Schema::Object(obj) = schema else {
        return;
    };
    if let Some(r) = &obj.reference {
        check_ref_resolves(pointer, &r.uri, ctx.doc, issues);
    }
    let dialect = obj.schema_dialect.as_deref().or(ctx.dialect);
    let mut anchors = ctx.dynamic_anchors.clone();
    if let Some(a) = obj.dynamic_anchor.as_deref() {
        anchors.push(a);
    }
    let inner = Ctx { doc: ctx.doc, dialect, dynamic_anchors: anchors };
    check_object(pointer, obj, &inner, issues);
}

/// Checks a `$ref` of the shape `#/components/<pool>/<name>` or `#/$defs/<name>` against the
/// document's own components / the schema's own `$defs`. Cross-document and non-local refs
/// are left to the resolver (they are not a schema-validator concern).
fn check_ref_resolves(pointer: &str, raw_ref: &str, doc: &Definition, issues: &mut Vec<Issue>) {
    let (uri_part, fragment) = crate::uri::split_ref(raw_ref);
    if !uri_part.is_empty() {
        return;
    }
    let Ok(tokens) = crate::pointer::decode_tokens(fragment) else {
        return;
    };
    if tokens.len() == 3 && tokens[0] == "components" {
        let pool = tokens[1].as_str();
        let name = tokens[2].as_str();
        let found = doc.components.as_ref().map(|c| pool_contains(c, pool, name)).unwrap_or(false);
        if !found {
            issues.push(Issue::error(
                format!("{pointer}/$ref"),
                format!("'{raw_ref}' does not resolve to components.{pool}"),
            ));
        }
    }
}

fn pool_contains(components: &crate::model::components::Components, pool: &str, name: &str) -> bool {
    match pool {
        "schemas" => components.schemas.contains_key(name),
        "responses" => components.responses.contains_key(name),
        "parameters" => components.parameters.contains_key(name),
        "examples" => components.examples.contains_key(name),
        "requestBodies" => components.request_bodies.contains_key(name),
        "headers" => components.headers.contains_key(name),
        "securitySchemes" => components.security_schemes.contains_key(name),
        "links" => components.links.contains_key(name),
        "callbacks" => components.callbacks.contains_key(name),
        "pathItems" => components.path_items.contains_key(name),
        "mediaTypes" => components.media_types.contains_key(name),
        _ => true,
    }
}

fn check_object(pointer: &str, obj: &SchemaObject, ctx: &Ctx<'_>, issues: &mut Vec<Issue>) {
    for t in &obj.types {
        if !RECOGNIZED_TYPES.contains(&t.as_str()) {
            issues.push(Issue::warning(
                format!("{pointer}/type"),
                format!("'{t}' is not a recognized JSON Schema type"),
            ));
        }
    }

    if let Some(pattern) = &obj.pattern {
        if Regex::new(pattern).is_err() {
            issues.push(Issue::error(
                format!("{pointer}/pattern"),
                format!("'{pattern}' is not a valid regular expression"),
            ));
        }
    }

    check_range(pointer, "minLength", "maxLength", obj.min_length, obj.max_length, issues);
    check_range(pointer, "minItems", "maxItems", obj.min_items, obj.max_items, issues);
    check_range(
        pointer,
        "minProperties",
        "maxProperties",
        obj.min_properties,
        obj.max_properties,
        issues,
    );
    check_range(pointer, "minContains", "maxContains", obj.min_contains, obj.max_contains, issues);
    if (obj.min_contains.is_some() || obj.max_contains.is_some()) && obj.contains.is_none() {
        issues.push(Issue::error(
            pointer,
            "'minContains'/'maxContains' require a 'contains' schema",
        ));
    }
    if let (Some(min), Some(max)) = (obj.minimum, obj.maximum) {
        if min > max {
            issues.push(Issue::error(pointer, "'minimum' must not exceed 'maximum'"));
        }
    }

    if let Some(media_type) = &obj.content_media_type {
        if !is_valid_media_range(media_type) {
            issues.push(Issue::error(
                format!("{pointer}/contentMediaType"),
                format!("'{media_type}' is not a syntactically valid media type"),
            ));
        }
    }
    if obj.content_encoding.is_some() && !obj.types.iter().any(|t| t == "string") && !obj.types.is_empty() {
        issues.push(Issue::warning(
            format!("{pointer}/contentEncoding"),
            "'contentEncoding' is only meaningful on a string-typed schema",
        ));
    }

    if let Some(dynamic_ref) = &obj.dynamic_ref {
        let (_, fragment) = crate::uri::split_ref(dynamic_ref);
        let anchor = fragment.trim_start_matches('#');
        if !anchor.is_empty() && !ctx.dynamic_anchors.contains(&anchor) {
            issues.push(Issue::warning(
                format!("{pointer}/$dynamicRef"),
                format!("'{dynamic_ref}' has no in-scope '$dynamicAnchor' named '{anchor}'"),
            ));
        }
    }

    if let Some(dialect) = ctx.dialect {
        if dialect == STRICT_2020_12_DIALECT {
            if obj.xml.is_some() {
                issues.push(Issue::warning(format!("{pointer}/xml"), "'xml' is not in the active 2020-12 vocabulary"));
            }
            if obj.discriminator.is_some() {
                issues.push(Issue::warning(
                    format!("{pointer}/discriminator"),
                    "'discriminator' is not in the active 2020-12 vocabulary",
                ));
            }
            if obj.external_docs.is_some() {
                issues.push(Issue::warning(
                    format!("{pointer}/externalDocs"),
                    "'externalDocs' is not in the active 2020-12 vocabulary",
                ));
            }
            if obj.example.is_some() {
                issues.push(Issue::warning(format!("{pointer}/example"), "'example' is not in the active 2020-12 vocabulary"));
            }
            if !obj.examples.is_empty() {
                issues.push(Issue::warning(
                    format!("{pointer}/examples"),
                    "'examples' is not in the active 2020-12 vocabulary",
                ));
            }
        }
    }
    for key in obj.custom_keywords.keys() {
        issues.push(Issue::warning(
            format!("{pointer}/{key}"),
            format!("'{key}' is not a recognized JSON Schema or OpenAPI keyword"),
        ));
    }

    if let Some(discriminator) = &obj.discriminator {
        if discriminator.property_name.is_empty() {
            issues.push(Issue::error(
                format!("{pointer}/discriminator/propertyName"),
                "'propertyName' is required",
            ));
        }
        let one_of_or_any_of = obj.one_of.as_ref().map(|c| !c.is_empty()).unwrap_or(false)
            || obj.any_of.as_ref().map(|c| !c.is_empty()).unwrap_or(false);
        let has_composition = one_of_or_any_of
            || obj.all_of.as_ref().map(|c| !c.is_empty()).unwrap_or(false);
        if !has_composition {
            issues.push(Issue::warning(
                format!("{pointer}/discriminator"),
                "discriminator is only meaningful alongside 'oneOf', 'anyOf', or 'allOf'",
            ));
        } else if one_of_or_any_of && discriminator.default_mapping.is_none() {
            issues.push(Issue::error(
                format!("{pointer}/discriminator"),
                "'defaultMapping' is required alongside 'oneOf'/'anyOf' in 3.2",
            ));
        }
    }

    if let Some(xml) = &obj.xml {
        if xml.wrapped == Some(true) && !obj.types.iter().any(|t| t == "array") {
            issues.push(Issue::error(
                format!("{pointer}/xml/wrapped"),
                "'xml.wrapped' is only valid on an array-typed schema",
            ));
        }
    }

    for (name, prop) in &obj.properties {
        walk(&format!("{pointer}/properties/{name}"), prop, ctx, issues);
    }
    if let Some(items) = &obj.items {
        walk(&format!("{pointer}/items"), items, ctx, issues);
    }
    if let Some(contains) = &obj.contains {
        walk(&format!("{pointer}/contains"), contains, ctx, issues);
    }
    for (i, s) in obj.prefix_items.iter().enumerate() {
        walk(&format!("{pointer}/prefixItems/{i}"), s, ctx, issues);
    }
    if let Some(composition) = &obj.one_of {
        for (i, s) in composition.schemas.iter().enumerate() {
            walk(&format!("{pointer}/oneOf/{i}"), s, ctx, issues);
        }
        for r in &composition.refs {
            check_ref_resolves(&format!("{pointer}/oneOf"), r, ctx.doc, issues);
        }
    }
    if let Some(composition) = &obj.any_of {
        for (i, s) in composition.schemas.iter().enumerate() {
            walk(&format!("{pointer}/anyOf/{i}"), s, ctx, issues);
        }
        for r in &composition.refs {
            check_ref_resolves(&format!("{pointer}/anyOf"), r, ctx.doc, issues);
        }
    }
    if let Some(composition) = &obj.all_of {
        for (i, s) in composition.schemas.iter().enumerate() {
            walk(&format!("{pointer}/allOf/{i}"), s, ctx, issues);
        }
        for r in &composition.refs {
            check_ref_resolves(&format!("{pointer}/allOf"), r, ctx.doc, issues);
        }
    }
    if let Some(not) = &obj.not {
        walk(&format!("{pointer}/not"), not, ctx, issues);
    }
    for (name, def) in &obj.defs {
        walk(&format!("{pointer}/$defs/{name}"), def, ctx, issues);
    }
}

fn check_range(
    pointer: &str,
    min_name: &str,
    max_name: &str,
    min: Option<u64>,
    max: Option<u64>,
    issues: &mut Vec<Issue>,
) {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            issues.push(Issue::error(
                pointer,
                format!("'{min_name}' must not exceed '{max_name}'"),
            ));
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::Definition;
    use crate::model::schema::SchemaObject;

    fn blank_doc() -> Definition {
        Definition {
            openapi: "3.2.0".to_string(),
            self_uri: None,
            json_schema_dialect: None,
            info: crate::model::document::Info {
                title: String::new(),
                summary: None,
                description: None,
                terms_of_service: None,
                contact: None,
                license: None,
                version: String::new(),
                extensions: Default::default(),
            },
            servers: Vec::new(),
            paths: Default::default(),
            paths_explicit_empty: false,
            webhooks: Default::default(),
            webhooks_explicit_empty: false,
            components: None,
            security: None,
            tags: Vec::new(),
            external_docs: None,
            extensions: Default::default(),
        }
    }

    #[test]
    fn flags_invalid_regex_pattern() {
        let mut obj = SchemaObject::default();
        obj.pattern = Some("(unclosed".to_string());
        let mut issues = Vec::new();
        let doc = blank_doc();
        check_object("/x", &obj, &Ctx::root(&doc), &mut issues);
        assert!(issues.iter().any(|i| i.message.contains("regular expression")));
    }

    #[test]
    fn flags_inverted_length_range() {
        let mut obj = SchemaObject::default();
        obj.min_length = Some(10);
        obj.max_length = Some(2);
        let mut issues = Vec::new();
        let doc = blank_doc();
        check_object("/x", &obj, &Ctx::root(&doc), &mut issues);
        assert!(!issues.is_empty());
    }
}
