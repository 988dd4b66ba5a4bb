//! Writes request bodies, responses, media types, encodings, headers, and example objects.

use indexmap::IndexMap;

use crate::model::content::{Encoding, Example, Header, MediaTypeObject, RequestBody, Response};
use crate::value::{Value, ValueMap};
use crate::writer::schema::write_schema;
use crate::writer::util::*;

pub fn write_request_body(body: &RequestBody) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(r) = &body.reference {
        map.insert("$ref".to_string(), Value::String(r.uri.clone()));
    }
    put_string(&mut map, "description", &body.description);
    if body.content_present || !body.content.is_empty() {
        map.insert("content".to_string(), write_media_type_map(&body.content));
    }
    put_bool(&mut map, "required", body.required);
    extend_extensions(&mut map, &body.extensions);
    map
}

pub fn write_response(response: &Response) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(r) = &response.reference {
        map.insert("$ref".to_string(), Value::String(r.uri.clone()));
    }
    put_string(&mut map, "description", &response.description);
    if !response.headers.is_empty() {
        let m = response
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_header(v))))
            .collect();
        map.insert("headers".to_string(), Value::Map(m));
    }
    if response.content_present || !response.content.is_empty() {
        map.insert("content".to_string(), write_media_type_map(&response.content));
    }
    if !response.links.is_empty() {
        let m = response
            .links
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(super::examples::write_link(v))))
            .collect();
        map.insert("links".to_string(), Value::Map(m));
    }
    extend_extensions(&mut map, &response.extensions);
    map
}

pub fn write_media_type_map(media: &IndexMap<String, MediaTypeObject>) -> Value {
    let m = media
        .iter()
        .map(|(k, v)| (k.clone(), Value::Map(write_media_type(v))))
        .collect();
    Value::Map(m)
}

pub fn write_media_type(media: &MediaTypeObject) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(schema) = &media.schema {
        map.insert("schema".to_string(), write_schema(schema));
    }
    if let Some(v) = &media.example {
        map.insert("example".to_string(), v.clone());
    }
    if !media.examples.is_empty() {
        map.insert("examples".to_string(), write_example_map(&media.examples));
    }
    if !media.encoding.is_empty() {
        let m = media
            .encoding
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_encoding(v))))
            .collect();
        map.insert("encoding".to_string(), Value::Map(m));
    }
    if let Some(schema) = &media.item_schema {
        map.insert("itemSchema".to_string(), write_schema(schema));
    }
    if let Some(enc) = &media.item_encoding {
        map.insert("itemEncoding".to_string(), Value::Map(write_encoding(enc)));
    }
    extend_extensions(&mut map, &media.extensions);
    map
}

fn write_encoding(encoding: &Encoding) -> ValueMap {
    let mut map = ValueMap::new();
    put_string(&mut map, "contentType", &encoding.content_type);
    if !encoding.headers.is_empty() {
        let m = encoding
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_header(v))))
            .collect();
        map.insert("headers".to_string(), Value::Map(m));
    }
    put_string(&mut map, "style", &encoding.style);
    put_bool(&mut map, "explode", encoding.explode);
    put_bool(&mut map, "allowReserved", encoding.allow_reserved);
    extend_extensions(&mut map, &encoding.extensions);
    map
}

pub fn write_header(header: &Header) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(r) = &header.reference {
        map.insert("$ref".to_string(), Value::String(r.uri.clone()));
    }
    put_string(&mut map, "description", &header.description);
    put_bool(&mut map, "required", header.required);
    put_bool(&mut map, "deprecated", header.deprecated);
    put_bool(&mut map, "allowEmptyValue", header.allow_empty_value);
    put_string(&mut map, "style", &header.style);
    put_bool(&mut map, "explode", header.explode);
    put_bool(&mut map, "allowReserved", header.allow_reserved);
    if let Some(schema) = &header.schema {
        map.insert("schema".to_string(), write_schema(schema));
    }
    if let Some(v) = &header.example {
        map.insert("example".to_string(), v.clone());
    }
    if !header.examples.is_empty() {
        map.insert("examples".to_string(), write_example_map(&header.examples));
    }
    if !header.content.is_empty() {
        map.insert("content".to_string(), write_media_type_map(&header.content));
    }
    extend_extensions(&mut map, &header.extensions);
    map
}

pub fn write_example_map(examples: &IndexMap<String, Example>) -> Value {
    let m = examples
        .iter()
        .map(|(k, v)| (k.clone(), Value::Map(write_example(v))))
        .collect();
    Value::Map(m)
}

pub fn write_example(example: &Example) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(r) = &example.reference {
        map.insert("$ref".to_string(), Value::String(r.uri.clone()));
    }
    put_string(&mut map, "summary", &example.summary);
    put_string(&mut map, "description", &example.description);
    if let Some(v) = &example.value {
        map.insert("value".to_string(), v.clone());
    }
    if let Some(v) = &example.data_value {
        map.insert("dataValue".to_string(), v.clone());
    }
    if let Some(v) = &example.serialized_value {
        map.insert("serializedValue".to_string(), v.clone());
    }
    put_string(&mut map, "externalValue", &example.external_value);
    extend_extensions(&mut map, &example.extensions);
    map
}
