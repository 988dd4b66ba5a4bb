//! Writes a [`Schema`] back into a [`Value`] tree, in canonical keyword order.

use indexmap::IndexMap;

use crate::model::schema::{Composition, CompositionSlot, Schema, SchemaObject};
use crate::value::{Value, ValueMap};
use crate::writer::util::*;

pub fn write_schema(schema: &Schema) -> Value {
    match schema {
        Schema::Boolean(b) => Value::Bool(*b),
        Schema::Object(obj) => Value::Map(write_schema_object(obj)),
    }
}

fn write_schema_object(obj: &SchemaObject) -> ValueMap {
    let mut map = ValueMap::new();

    if let Some(reference) = &obj.reference {
        map.insert("$ref".to_string(), Value::String(reference.uri.clone()));
    }

    put_string(&mut map, "$id", &obj.id);
    put_string(&mut map, "$schema", &obj.schema_dialect);
    put_string(&mut map, "$anchor", &obj.anchor);
    put_string(&mut map, "$dynamicAnchor", &obj.dynamic_anchor);
    put_string(&mut map, "$dynamicRef", &obj.dynamic_ref);
    put_schema_map(&mut map, "$defs", &obj.defs);

    write_type_keyword(&mut map, obj);
    put_string(&mut map, "format", &obj.format);

    put_f64(&mut map, "multipleOf", obj.multiple_of);
    put_f64(&mut map, "maximum", obj.maximum);
    put_f64(&mut map, "exclusiveMaximum", obj.exclusive_maximum);
    put_f64(&mut map, "minimum", obj.minimum);
    put_f64(&mut map, "exclusiveMinimum", obj.exclusive_minimum);

    put_u64(&mut map, "maxLength", obj.max_length);
    put_u64(&mut map, "minLength", obj.min_length);
    put_string(&mut map, "pattern", &obj.pattern);

    if !obj.prefix_items.is_empty() {
        map.insert(
            "prefixItems".to_string(),
            Value::Seq(obj.prefix_items.iter().map(write_schema).collect()),
        );
    }
    if let Some(items) = &obj.items {
        map.insert("items".to_string(), write_schema(items));
    }
    if let Some(contains) = &obj.contains {
        map.insert("contains".to_string(), write_schema(contains));
    }
    put_u64(&mut map, "maxItems", obj.max_items);
    put_u64(&mut map, "minItems", obj.min_items);
    put_bool(&mut map, "uniqueItems", obj.unique_items);
    put_u64(&mut map, "maxContains", obj.max_contains);
    put_u64(&mut map, "minContains", obj.min_contains);
    if let Some(s) = &obj.unevaluated_items {
        map.insert("unevaluatedItems".to_string(), write_schema(s));
    }

    put_schema_map(&mut map, "properties", &obj.properties);
    put_schema_map(&mut map, "patternProperties", &obj.pattern_properties);
    if let Some(s) = &obj.additional_properties {
        map.insert("additionalProperties".to_string(), write_schema(s));
    }
    if let Some(s) = &obj.property_names {
        map.insert("propertyNames".to_string(), write_schema(s));
    }
    if !obj.required.is_empty() {
        map.insert(
            "required".to_string(),
            Value::Seq(obj.required.iter().cloned().map(Value::String).collect()),
        );
    }
    put_u64(&mut map, "maxProperties", obj.max_properties);
    put_u64(&mut map, "minProperties", obj.min_properties);
    if !obj.dependent_required.is_empty() {
        let mut m = ValueMap::new();
        for (k, v) in &obj.dependent_required {
            m.insert(k.clone(), Value::Seq(v.iter().cloned().map(Value::String).collect()));
        }
        map.insert("dependentRequired".to_string(), Value::Map(m));
    }
    put_schema_map(&mut map, "dependentSchemas", &obj.dependent_schemas);
    if let Some(s) = &obj.unevaluated_properties {
        map.insert("unevaluatedProperties".to_string(), write_schema(s));
    }

    if let Some(c) = &obj.one_of {
        map.insert("oneOf".to_string(), write_composition(c));
    }
    if let Some(c) = &obj.any_of {
        map.insert("anyOf".to_string(), write_composition(c));
    }
    if let Some(c) = &obj.all_of {
        map.insert("allOf".to_string(), write_composition(c));
    }
    if let Some(s) = &obj.not {
        map.insert("not".to_string(), write_schema(s));
    }

    if let Some(s) = &obj.if_ {
        map.insert("if".to_string(), write_schema(s));
    }
    if let Some(s) = &obj.then {
        map.insert("then".to_string(), write_schema(s));
    }
    if let Some(s) = &obj.else_ {
        map.insert("else".to_string(), write_schema(s));
    }

    put_string(&mut map, "contentEncoding", &obj.content_encoding);
    put_string(&mut map, "contentMediaType", &obj.content_media_type);
    if let Some(s) = &obj.content_schema {
        map.insert("contentSchema".to_string(), write_schema(s));
    }

    if let Some(values) = &obj.enum_values {
        map.insert("enum".to_string(), Value::Seq(values.clone()));
    }
    if let Some(v) = &obj.const_value {
        map.insert("const".to_string(), v.clone());
    }
    if let Some(v) = &obj.default_value {
        map.insert("default".to_string(), v.clone());
    }

    put_string(&mut map, "title", &obj.title);
    put_string(&mut map, "description", &obj.description);
    put_bool(&mut map, "deprecated", obj.deprecated);
    put_bool(&mut map, "readOnly", obj.read_only);
    put_bool(&mut map, "writeOnly", obj.write_only);

    if let Some(v) = &obj.example {
        map.insert("example".to_string(), v.clone());
    }
    if !obj.examples_list.is_empty() {
        map.insert("examples".to_string(), Value::Seq(obj.examples_list.clone()));
    } else if !obj.examples.is_empty() {
        map.insert(
            "examples".to_string(),
            Value::Map(obj.examples.clone().into_iter().collect()),
        );
    }

    if let Some(xml) = &obj.xml {
        let mut m = ValueMap::new();
        put_string(&mut m, "name", &xml.name);
        put_string(&mut m, "namespace", &xml.namespace);
        put_string(&mut m, "prefix", &xml.prefix);
        put_bool(&mut m, "attribute", xml.attribute);
        put_bool(&mut m, "wrapped", xml.wrapped);
        map.insert("xml".to_string(), Value::Map(m));
    }
    if let Some(d) = &obj.discriminator {
        let mut m = ValueMap::new();
        m.insert("propertyName".to_string(), Value::String(d.property_name.clone()));
        if !d.mapping.is_empty() {
            let mapping = d
                .mapping
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            m.insert("mapping".to_string(), Value::Map(mapping));
        }
        put_string(&mut m, "defaultMapping", &d.default_mapping);
        map.insert("discriminator".to_string(), Value::Map(m));
    }
    if let Some(docs) = &obj.external_docs {
        map.insert(
            "externalDocs".to_string(),
            Value::Map(super::document::write_external_docs(docs)),
        );
    }

    for (k, v) in &obj.custom_keywords {
        map.insert(k.clone(), v.clone());
    }
    for (k, v) in &obj.extensions {
        map.insert(k.clone(), v.clone());
    }

    map
}

fn write_type_keyword(map: &mut ValueMap, obj: &SchemaObject) {
    match obj.types.as_slice() {
        [] => {}
        [single] => {
            map.insert("type".to_string(), Value::String(single.clone()));
        }
        many => {
            map.insert(
                "type".to_string(),
                Value::Seq(many.iter().cloned().map(Value::String).collect()),
            );
        }
    }
}

fn put_schema_map(map: &mut ValueMap, key: &str, schemas: &IndexMap<String, Schema>) {
    if schemas.is_empty() {
        return;
    }
    let m = schemas
        .iter()
        .map(|(k, v)| (k.clone(), write_schema(v)))
        .collect();
    map.insert(key.to_string(), Value::Map(m));
}

/// Rejoins a [`Composition`]'s parallel ref/inline lists back into a single ordered sequence.
fn write_composition(composition: &Composition) -> Value {
    let items = composition
        .order
        .iter()
        .map(|slot| match slot {
            CompositionSlot::Ref(i) => {
                let mut m = ValueMap::new();
                m.insert("$ref".to_string(), Value::String(composition.refs[*i].clone()));
                Value::Map(m)
            }
            CompositionSlot::Inline(i) => write_schema(&composition.schemas[*i]),
        })
        .collect();
    Value::Seq(items)
}
