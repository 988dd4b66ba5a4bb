//! Writes the document root and its top-level metadata objects.

use crate::model::components::Components;
use crate::model::document::{Contact, Definition, ExternalDocumentation, Info, License, Server, ServerVariable, Tag};
use crate::value::{Value, ValueMap};
use crate::writer::content::write_response;
use crate::writer::examples::write_callback;
use crate::writer::params::write_parameter;
use crate::writer::paths::write_path_item;
use crate::writer::schema::write_schema;
use crate::writer::security::{write_security_requirement, write_security_scheme};
use crate::writer::util::*;

pub fn write_definition(doc: &Definition) -> ValueMap {
    let mut map = ValueMap::new();
    map.insert("openapi".to_string(), Value::String(doc.openapi.clone()));
    put_string(&mut map, "$self", &doc.self_uri);
    put_string(&mut map, "jsonSchemaDialect", &doc.json_schema_dialect);
    map.insert("info".to_string(), Value::Map(write_info(&doc.info)));
    if !doc.servers.is_empty() {
        map.insert(
            "servers".to_string(),
            Value::Seq(doc.servers.iter().map(|s| Value::Map(write_server(s))).collect()),
        );
    }
    if doc.paths_explicit_empty || !doc.paths.is_empty() {
        let m = doc
            .paths
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_path_item(v))))
            .collect();
        map.insert("paths".to_string(), Value::Map(m));
    }
    if doc.webhooks_explicit_empty || !doc.webhooks.is_empty() {
        let m = doc
            .webhooks
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_path_item(v))))
            .collect();
        map.insert("webhooks".to_string(), Value::Map(m));
    }
    if let Some(components) = &doc.components {
        map.insert("components".to_string(), Value::Map(write_components(components)));
    }
    if let Some(security) = &doc.security {
        map.insert(
            "security".to_string(),
            Value::Seq(
                security
                    .iter()
                    .map(|r| Value::Map(write_security_requirement(r)))
                    .collect(),
            ),
        );
    }
    if !doc.tags.is_empty() {
        map.insert(
            "tags".to_string(),
            Value::Seq(doc.tags.iter().map(|t| Value::Map(write_tag(t))).collect()),
        );
    }
    if let Some(docs) = &doc.external_docs {
        map.insert("externalDocs".to_string(), Value::Map(write_external_docs(docs)));
    }
    extend_extensions(&mut map, &doc.extensions);
    map
}

fn write_info(info: &Info) -> ValueMap {
    let mut map = ValueMap::new();
    map.insert("title".to_string(), Value::String(info.title.clone()));
    put_string(&mut map, "summary", &info.summary);
    put_string(&mut map, "description", &info.description);
    put_string(&mut map, "termsOfService", &info.terms_of_service);
    if let Some(contact) = &info.contact {
        map.insert("contact".to_string(), Value::Map(write_contact(contact)));
    }
    if let Some(license) = &info.license {
        map.insert("license".to_string(), Value::Map(write_license(license)));
    }
    map.insert("version".to_string(), Value::String(info.version.clone()));
    extend_extensions(&mut map, &info.extensions);
    map
}

fn write_contact(contact: &Contact) -> ValueMap {
    let mut map = ValueMap::new();
    put_string(&mut map, "name", &contact.name);
    put_string(&mut map, "url", &contact.url);
    put_string(&mut map, "email", &contact.email);
    extend_extensions(&mut map, &contact.extensions);
    map
}

fn write_license(license: &License) -> ValueMap {
    let mut map = ValueMap::new();
    map.insert("name".to_string(), Value::String(license.name.clone()));
    put_string(&mut map, "identifier", &license.identifier);
    put_string(&mut map, "url", &license.url);
    extend_extensions(&mut map, &license.extensions);
    map
}

pub fn write_server(server: &Server) -> ValueMap {
    let mut map = ValueMap::new();
    map.insert("url".to_string(), Value::String(server.url.clone()));
    put_string(&mut map, "description", &server.description);
    if !server.variables.is_empty() {
        let m = server
            .variables
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_server_variable(v))))
            .collect();
        map.insert("variables".to_string(), Value::Map(m));
    }
    put_string(&mut map, "name", &server.name);
    extend_extensions(&mut map, &server.extensions);
    map
}

fn write_server_variable(variable: &ServerVariable) -> ValueMap {
    let mut map = ValueMap::new();
    if !variable.enum_values.is_empty() {
        map.insert(
            "enum".to_string(),
            Value::Seq(variable.enum_values.iter().cloned().map(Value::String).collect()),
        );
    }
    map.insert("default".to_string(), Value::String(variable.default.clone()));
    put_string(&mut map, "description", &variable.description);
    extend_extensions(&mut map, &variable.extensions);
    map
}

fn write_tag(tag: &Tag) -> ValueMap {
    let mut map = ValueMap::new();
    map.insert("name".to_string(), Value::String(tag.name.clone()));
    put_string(&mut map, "summary", &tag.summary);
    put_string(&mut map, "description", &tag.description);
    if let Some(docs) = &tag.external_docs {
        map.insert("externalDocs".to_string(), Value::Map(write_external_docs(docs)));
    }
    put_string(&mut map, "parent", &tag.parent);
    put_string(&mut map, "kind", &tag.kind);
    extend_extensions(&mut map, &tag.extensions);
    map
}

pub fn write_external_docs(docs: &ExternalDocumentation) -> ValueMap {
    let mut map = ValueMap::new();
    put_string(&mut map, "description", &docs.description);
    map.insert("url".to_string(), Value::String(docs.url.clone()));
    extend_extensions(&mut map, &docs.extensions);
    map
}

fn write_components(components: &Components) -> ValueMap {
    let mut map = ValueMap::new();
    if !components.schemas.is_empty() {
        let m = components
            .schemas
            .iter()
            .map(|(k, v)| (k.clone(), write_schema(v)))
            .collect();
        map.insert("schemas".to_string(), Value::Map(m));
    }
    if !components.responses.is_empty() {
        let m = components
            .responses
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_response(v))))
            .collect();
        map.insert("responses".to_string(), Value::Map(m));
    }
    if !components.parameters.is_empty() {
        let m = components
            .parameters
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_parameter(v))))
            .collect();
        map.insert("parameters".to_string(), Value::Map(m));
    }
    if !components.examples.is_empty() {
        map.insert(
            "examples".to_string(),
            crate::writer::content::write_example_map(&components.examples),
        );
    }
    if !components.request_bodies.is_empty() {
        let m = components
            .request_bodies
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(crate::writer::content::write_request_body(v))))
            .collect();
        map.insert("requestBodies".to_string(), Value::Map(m));
    }
    if !components.headers.is_empty() {
        let m = components
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(crate::writer::content::write_header(v))))
            .collect();
        map.insert("headers".to_string(), Value::Map(m));
    }
    if !components.security_schemes.is_empty() {
        let m = components
            .security_schemes
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_security_scheme(v))))
            .collect();
        map.insert("securitySchemes".to_string(), Value::Map(m));
    }
    if !components.links.is_empty() {
        let m = components
            .links
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(crate::writer::examples::write_link(v))))
            .collect();
        map.insert("links".to_string(), Value::Map(m));
    }
    if !components.callbacks.is_empty() {
        let m = components
            .callbacks
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_callback(v))))
            .collect();
        map.insert("callbacks".to_string(), Value::Map(m));
    }
    if !components.path_items.is_empty() {
        let m = components
            .path_items
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(write_path_item(v))))
            .collect();
        map.insert("pathItems".to_string(), Value::Map(m));
    }
    if !components.media_types.is_empty() {
        let m = components
            .media_types
            .iter()
            .map(|(k, v)| (k.clone(), Value::Map(crate::writer::content::write_media_type(v))))
            .collect();
        map.insert("mediaTypes".to_string(), Value::Map(m));
    }
    extend_extensions(&mut map, &components.extensions);
    map
}
