//! Parses `Parameter` objects.

use crate::model::params::{Parameter, ParameterLocation};
use crate::model::reference::Reference;
use crate::parser::content::{parse_example_map, parse_media_type_map};
use crate::parser::schema::parse_schema;
use crate::parser::util::*;
use crate::value::ValueMap;

pub fn parse_parameter(mut map: ValueMap) -> Parameter {
    let reference = take_string(&mut map, "$ref").map(Reference::new);
    let location = take_string(&mut map, "in").and_then(|s| ParameterLocation::from_str(&s));
    Parameter {
        reference,
        name: take_string(&mut map, "name"),
        location,
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
