//! Parses a raw [`Value`] into a [`Schema`]: 2020-12 JSON Schema, the OpenAPI base dialect
//! extensions, boolean-schema shorthand, legacy `nullable`, and the dual-shaped `examples`
//! keyword.

use indexmap::IndexMap;

use crate::model::document::ExternalDocumentation;
use crate::model::reference::Reference;
use crate::model::schema::{Composition, Discriminator, Schema, SchemaObject, Xml};
use crate::parser::util::*;
use crate::value::{Value, ValueMap};

/// Parses any schema-shaped value: `true`/`false` shorthand or a full object.
pub fn parse_schema(value: Value) -> Schema {
    match value {
        Value::Bool(b) => Schema::Boolean(b),
        Value::Map(map) => Schema::Object(Box::new(parse_schema_object(map))),
        // A malformed schema (wrong JSON type entirely) degrades to the permissive `true`
        // shorthand; the validator is responsible for flagging the malformed source.
        _ => Schema::Boolean(true),
    }
}

fn parse_schema_object(mut map: ValueMap) -> SchemaObject {
    let mut obj = SchemaObject::default();

    if let Some(uri) = take_string(&mut map, "$ref") {
        obj.reference = Some(Reference::new(uri));
    }

    parse_type_keyword(&mut map, &mut obj);
    obj.format = take_string(&mut map, "format");

    obj.id = take_string(&mut map, "$id");
    obj.schema_dialect = take_string(&mut map, "$schema");
    obj.anchor = take_string(&mut map, "$anchor");
    obj.dynamic_anchor = take_string(&mut map, "$dynamicAnchor");
    obj.dynamic_ref = take_string(&mut map, "$dynamicRef");
    obj.defs = parse_schema_map(take_map(&mut map, "$defs"));

    obj.minimum = take_f64(&mut map, "minimum");
    obj.maximum = take_f64(&mut map, "maximum");
    obj.exclusive_minimum = take_f64(&mut map, "exclusiveMinimum");
    obj.exclusive_maximum = take_f64(&mut map, "exclusiveMaximum");
    obj.multiple_of = take_f64(&mut map, "multipleOf");

    obj.min_length = take_u64(&mut map, "minLength");
    obj.max_length = take_u64(&mut map, "maxLength");
    obj.pattern = take_string(&mut map, "pattern");

    obj.min_items = take_u64(&mut map, "minItems");
    obj.max_items = take_u64(&mut map, "maxItems");
    obj.unique_items = take_bool(&mut map, "uniqueItems");
    obj.prefix_items = take_seq(&mut map, "prefixItems")
        .unwrap_or_default()
        .into_iter()
        .map(parse_schema)
        .collect();
    obj.items = take(&mut map, "items").map(|v| Box::new(parse_schema(v)));
    obj.contains = take(&mut map, "contains").map(|v| Box::new(parse_schema(v)));
    obj.min_contains = take_u64(&mut map, "minContains");
    obj.max_contains = take_u64(&mut map, "maxContains");
    obj.unevaluated_items = take(&mut map, "unevaluatedItems").map(|v| Box::new(parse_schema(v)));

    obj.properties = parse_schema_map(take_map(&mut map, "properties"));
    obj.required = take_string_vec(&mut map, "required");
    obj.additional_properties =
        take(&mut map, "additionalProperties").map(|v| Box::new(parse_schema(v)));
    obj.pattern_properties = parse_schema_map(take_map(&mut map, "patternProperties"));
    obj.property_names = take(&mut map, "propertyNames").map(|v| Box::new(parse_schema(v)));
    obj.dependent_required = parse_string_list_map(take_map(&mut map, "dependentRequired"));
    obj.dependent_schemas = parse_schema_map(take_map(&mut map, "dependentSchemas"));
    obj.unevaluated_properties =
        take(&mut map, "unevaluatedProperties").map(|v| Box::new(parse_schema(v)));
    obj.min_properties = take_u64(&mut map, "minProperties");
    obj.max_properties = take_u64(&mut map, "maxProperties");

    obj.one_of = take_seq(&mut map, "oneOf").map(|items| parse_composition(items));
    obj.any_of = take_seq(&mut map, "anyOf").map(|items| parse_composition(items));
    obj.all_of = take_seq(&mut map, "allOf").map(|items| parse_composition(items));
    obj.not = take(&mut map, "not").map(|v| Box::new(parse_schema(v)));

    obj.if_ = take(&mut map, "if").map(|v| Box::new(parse_schema(v)));
    obj.then = take(&mut map, "then").map(|v| Box::new(parse_schema(v)));
    obj.else_ = take(&mut map, "else").map(|v| Box::new(parse_schema(v)));

    obj.content_media_type = take_string(&mut map, "contentMediaType");
    obj.content_encoding = take_string(&mut map, "contentEncoding");
    obj.content_schema = take(&mut map, "contentSchema").map(|v| Box::new(parse_schema(v)));

    obj.enum_values = take_seq(&mut map, "enum");
    obj.const_value = take(&mut map, "const");
    obj.default_value = take(&mut map, "default");

    obj.xml = take_map(&mut map, "xml").map(parse_xml);
    obj.discriminator = take_map(&mut map, "discriminator").map(parse_discriminator);
    obj.external_docs = take_map(&mut map, "externalDocs").map(parse_external_docs);

    obj.example = take(&mut map, "example");
    parse_examples_keyword(&mut map, &mut obj);

    obj.deprecated = take_bool(&mut map, "deprecated");
    obj.read_only = take_bool(&mut map, "readOnly");
    obj.write_only = take_bool(&mut map, "writeOnly");

    obj.title = take_string(&mut map, "title");
    obj.description = take_string(&mut map, "description");

    let (extensions, leftover) = split_remainder(map);
    obj.extensions = extensions;
    obj.custom_keywords = leftover;

    obj
}

/// `type` may be a bare string or a list; `nullable`/`x-nullable: true` folds in as `"null"`.
fn parse_type_keyword(map: &mut ValueMap, obj: &mut SchemaObject) {
    obj.types = match take(map, "type") {
        Some(Value::String(s)) => vec![s],
        Some(Value::Seq(items)) => items
            .into_iter()
            .filter_map(|i| i.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    let legacy_nullable = take_bool(map, "nullable")
        .or_else(|| take_bool(map, "x-nullable"))
        .unwrap_or(false);
    if legacy_nullable && !obj.types.iter().any(|t| t == "null") {
        obj.types.push("null".to_string());
    }
}

/// The `examples` keyword is dual-shaped: a 2020-12 document uses an array of instance values,
/// while some OAS-flavored documents use a mapping of named example values. The source shape
/// decides which field it lands in.
fn parse_examples_keyword(map: &mut ValueMap, obj: &mut SchemaObject) {
    match take(map, "examples") {
        Some(Value::Seq(items)) => obj.examples_list = items,
        Some(Value::Map(entries)) => obj.examples = entries,
        _ => {}
    }
}

fn parse_schema_map(map: Option<ValueMap>) -> IndexMap<String, Schema> {
    map.unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k, parse_schema(v)))
        .collect()
}

fn parse_string_list_map(map: Option<ValueMap>) -> IndexMap<String, Vec<String>> {
    map.unwrap_or_default()
        .into_iter()
        .map(|(k, v)| {
            let list = match v {
                Value::Seq(items) => items
                    .into_iter()
                    .filter_map(|i| i.as_str().map(str::to_string))
                    .collect(),
                _ => Vec::new(),
            };
            (k, list)
        })
        .collect()
}

fn parse_composition(items: Vec<Value>) -> Composition {
    let mut composition = Composition::default();
    for item in items {
        if let Value::Map(m) = &item {
            if m.len() == 1 {
                if let Some(Value::String(uri)) = m.get("$ref") {
                    composition.push_ref(uri.clone());
                    continue;
                }
            }
        }
        composition.push_inline(parse_schema(item));
    }
    composition
}

fn parse_xml(mut map: ValueMap) -> Xml {
    Xml {
        name: take_string(&mut map, "name"),
        namespace: take_string(&mut map, "namespace"),
        prefix: take_string(&mut map, "prefix"),
        attribute: take_bool(&mut map, "attribute"),
        wrapped: take_bool(&mut map, "wrapped"),
    }
}

fn parse_discriminator(mut map: ValueMap) -> Discriminator {
    let mapping = take_map(&mut map, "mapping")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
        .collect();
    Discriminator {
        property_name: take_string(&mut map, "propertyName").unwrap_or_default(),
        mapping,
        default_mapping: take_string(&mut map, "defaultMapping"),
    }
}

fn parse_external_docs(mut map: ValueMap) -> ExternalDocumentation {
    ExternalDocumentation {
        description: take_string(&mut map, "description"),
        url: take_string(&mut map, "url").unwrap_or_default(),
        extensions: take_extensions(map),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(pairs: Vec<(&str, Value)>) -> Value {
        let mut m = ValueMap::new();
        for (k, v) in pairs {
            m.insert(k.to_string(), v);
        }
        Value::Map(m)
    }

    #[test]
    fn boolean_schema_round_trips_as_is() {
        assert_eq!(parse_schema(Value::Bool(true)), Schema::Boolean(true));
        assert_eq!(parse_schema(Value::Bool(false)), Schema::Boolean(false));
    }

    #[test]
    fn type_array_is_preserved_verbatim() {
        let v = obj(vec![(
            "type",
            Value::Seq(vec![Value::String("string".into()), Value::String("null".into())]),
        )]);
        let schema = parse_schema(v);
        let schema_obj = schema.as_object().unwrap();
        assert_eq!(schema_obj.types, vec!["string", "null"]);
    }

    #[test]
    fn legacy_nullable_folds_into_types() {
        let v = obj(vec![
            ("type", Value::String("string".into())),
            ("nullable", Value::Bool(true)),
        ]);
        let schema = parse_schema(v);
        let schema_obj = schema.as_object().unwrap();
        assert_eq!(schema_obj.types, vec!["string", "null"]);
    }

    #[test]
    fn one_of_splits_refs_and_inline_preserving_order() {
        let v = obj(vec![(
            "oneOf",
            Value::Seq(vec![
                obj(vec![("$ref", Value::String("#/components/schemas/A".into()))]),
                obj(vec![("type", Value::String("integer".into()))]),
                obj(vec![("$ref", Value::String("#/components/schemas/B".into()))]),
            ]),
        )]);
        let schema = parse_schema(v);
        let composition = schema.as_object().unwrap().one_of.as_ref().unwrap();
        assert_eq!(composition.refs, vec!["#/components/schemas/A", "#/components/schemas/B"]);
        assert_eq!(composition.schemas.len(), 1);
        assert_eq!(composition.order.len(), 3);
    }

    #[test]
    fn ref_with_sibling_description_is_not_treated_as_pure_ref_alternative() {
        let v = obj(vec![(
            "anyOf",
            Value::Seq(vec![obj(vec![
                ("$ref", Value::String("#/components/schemas/A".into())),
                ("description", Value::String("override".into())),
            ])]),
        )]);
        let schema = parse_schema(v);
        let composition = schema.as_object().unwrap().any_of.as_ref().unwrap();
        assert!(composition.refs.is_empty());
        assert_eq!(composition.schemas.len(), 1);
    }

    #[test]
    fn examples_array_and_mapping_land_in_different_fields() {
        let list_form = obj(vec![(
            "examples",
            Value::Seq(vec![Value::Int(1), Value::Int(2)]),
        )]);
        let schema_obj = parse_schema(list_form);
        assert_eq!(schema_obj.as_object().unwrap().examples_list.len(), 2);

        let map_form = obj(vec![(
            "examples",
            obj(vec![("basic", Value::Int(1))]),
        )]);
        let schema_obj = parse_schema(map_form);
        assert_eq!(schema_obj.as_object().unwrap().examples.len(), 1);
    }

    #[test]
    fn unknown_keyword_preserved_as_custom() {
        let v = obj(vec![("x-internal-id", Value::Int(42)), ("unknownKeyword", Value::Bool(true))]);
        let schema = parse_schema(v);
        let schema_obj = schema.as_object().unwrap();
        assert_eq!(schema_obj.extensions.get("x-internal-id"), Some(&Value::Int(42)));
        assert_eq!(schema_obj.custom_keywords.get("unknownKeyword"), Some(&Value::Bool(true)));
    }
}
