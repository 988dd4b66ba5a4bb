//! Writes the `Parameter` object.

use crate::model::params::{Parameter, ParameterLocation};
use crate::value::{Value, ValueMap};
use crate::writer::content::{write_example_map, write_media_type_map};
use crate::writer::schema::write_schema;
use crate::writer::util::*;

pub fn write_parameter(param: &Parameter) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(r) = &param.reference {
        map.insert("$ref".to_string(), Value::String(r.uri.clone()));
    }
    put_string(&mut map, "name", &param.name);
    if let Some(location) = param.location {
        map.insert("in".to_string(), Value::String(location_str(location).to_string()));
    }
    put_string(&mut map, "description", &param.description);
    put_bool(&mut map, "required", param.required);
    put_bool(&mut map, "deprecated", param.deprecated);
    put_bool(&mut map, "allowEmptyValue", param.allow_empty_value);
    put_string(&mut map, "style", &param.style);
    put_bool(&mut map, "explode", param.explode);
    put_bool(&mut map, "allowReserved", param.allow_reserved);
    if let Some(schema) = &param.schema {
        map.insert("schema".to_string(), write_schema(schema));
    }
    if let Some(v) = &param.example {
        map.insert("example".to_string(), v.clone());
    }
    if !param.examples.is_empty() {
        map.insert("examples".to_string(), write_example_map(&param.examples));
    }
    if !param.content.is_empty() {
        map.insert("content".to_string(), write_media_type_map(&param.content));
    }
    extend_extensions(&mut map, &param.extensions);
    map
}

fn location_str(location: ParameterLocation) -> &'static str {
    match location {
        ParameterLocation::Query => "query",
        ParameterLocation::QueryString => "querystring",
        ParameterLocation::Header => "header",
        ParameterLocation::Path => "path",
        ParameterLocation::Cookie => "cookie",
    }
}
