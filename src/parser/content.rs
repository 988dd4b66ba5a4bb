//! Parses request bodies, responses, media types, encodings, headers, and example objects.

use indexmap::IndexMap;

use crate::model::content::{Encoding, Example, Header, MediaTypeObject, RequestBody, Response};
use crate::model::reference::Reference;
use crate::parser::context::ParseCtx;
use crate::parser::schema::parse_schema;
use crate::parser::util::*;
use crate::value::{Value, ValueMap};

pub fn parse_request_body(mut map: ValueMap, ctx: &ParseCtx) -> RequestBody {
    let reference = take_string(&mut map, "$ref").map(Reference::new);
    let content_present = map.contains_key("content");
    let mut description = take_string(&mut map, "description");
    if description.is_none() {
        if let Some(r) = &reference {
            description = resolve_string_field(ctx, &r.uri, "description");
        }
    }
    RequestBody {
        reference,
        description,
        content: parse_media_type_map(take_map(&mut map, "content")),
        content_present,
        required: take_bool(&mut map, "required"),
        extensions: take_extensions(map),
    }
}

pub fn parse_response(mut map: ValueMap, ctx: &ParseCtx) -> Response {
    let reference = take_string(&mut map, "$ref").map(Reference::new);
    let content_present = map.contains_key("content");
    let mut description = take_string(&mut map, "description");
    if description.is_none() {
        if let Some(r) = &reference {
            description = resolve_string_field(ctx, &r.uri, "description");
        }
    }
    let headers = take_map(&mut map, "headers")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_header(m))),
            _ => None,
        })
        .collect();
    let links = take_map(&mut map, "links")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, super::examples::parse_link(m))),
            _ => None,
        })
        .collect();
    Response {
        reference,
        description,
        headers,
        content: parse_media_type_map(take_map(&mut map, "content")),
        content_present,
        links,
        extensions: take_extensions(map),
    }
}

/// Looks up `field` on the target a `$ref` points at, for holders (`RequestBody`, `Response`)
/// whose inline fields act as overrides on top of a referenced object: a sibling field absent
/// at the reference site falls back to the one declared on the target.
fn resolve_string_field(ctx: &ParseCtx, raw_ref: &str, field: &str) -> Option<String> {
    let resolved = ctx.resolve(raw_ref)?;
    match resolved.value.get() {
        Value::Map(m) => m.get(field).and_then(|v| v.as_str().map(str::to_string)),
        _ => None,
    }
}

pub fn parse_media_type_map(map: Option<ValueMap>) -> IndexMap<String, MediaTypeObject> {
    map.unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_media_type(m))),
            _ => None,
        })
        .collect()
}

pub fn parse_media_type(mut map: ValueMap) -> MediaTypeObject {
    MediaTypeObject {
        schema: take(&mut map, "schema").map(parse_schema),
        example: take(&mut map, "example"),
        examples: parse_example_map(take_map(&mut map, "examples")),
        encoding: take_map(&mut map, "encoding")
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::Map(m) => Some((k, parse_encoding(m))),
                _ => None,
            })
            .collect(),
        item_schema: take(&mut map, "itemSchema").map(parse_schema),
        item_encoding: take_map(&mut map, "itemEncoding").map(|m| Box::new(parse_encoding(m))),
        extensions: take_extensions(map),
    }
}

fn parse_encoding(mut map: ValueMap) -> Encoding {
    Encoding {
        content_type: take_string(&mut map, "contentType"),
        headers: take_map(&mut map, "headers")
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::Map(m) => Some((k, parse_header(m))),
                _ => None,
            })
            .collect(),
        style: take_string(&mut map, "style"),
        explode: take_bool(&mut map, "explode"),
        allow_reserved: take_bool(&mut map, "allowReserved"),
        extensions: take_extensions(map),
    }
}

pub fn parse_header(mut map: ValueMap) -> Header {
    let reference = take_string(&mut map, "$ref").map(Reference::new);
    Header {
        reference,
        description: take_string(&mut map, "description"),
        required: take_bool(&mut map, "required"),
        deprecated: take_bool(&mut map, "deprecated"),
        allow_empty_value: take_bool(&mut map, "allowEmptyValue"),
        style: take_string(&mut map, "style"),
        explode: take_bool(&mut map, "explode"),
        allow_reserved: take_bool(&mut map, "allowReserved"),
        schema: take(&mut map, "schema").map(parse_schema),
        example: take(&mut map, "example"),
        examples: parse_example_map(take_map(&mut map, "examples")),
        content: parse_media_type_map(take_map(&mut map, "content")),
        extensions: take_extensions(map),
    }
}

pub fn parse_example_map(map: Option<ValueMap>) -> IndexMap<String, Example> {
    map.unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_example(m))),
            _ => None,
        })
        .collect()
}

pub fn parse_example(mut map: ValueMap) -> Example {
    let reference = take_string(&mut map, "$ref").map(Reference::new);
    Example {
        reference,
        summary: take_string(&mut map, "summary"),
        description: take_string(&mut map, "description"),
        value: take(&mut map, "value"),
        data_value: take(&mut map, "dataValue"),
        serialized_value: take(&mut map, "serializedValue"),
        external_value: take_string(&mut map, "externalValue"),
        extensions: take_extensions(map),
    }
}
