//! Parses the document root and its top-level metadata objects.

use crate::model::components::Components;
use crate::model::document::{
    Contact, Definition, ExternalDocumentation, Info, License, Server, ServerVariable, Tag,
};
use crate::model::security::SecurityRequirement;
use crate::parser::content::{parse_example_map, parse_header, parse_request_body, parse_response};
use crate::parser::context::ParseCtx;
use crate::parser::params::parse_parameter;
use crate::parser::paths::parse_path_item;
use crate::parser::schema::parse_schema;
use crate::parser::security::{parse_security_requirement, parse_security_scheme};
use crate::parser::util::*;
use crate::registry::OpenApiDocumentRegistry;
use crate::value::{Value, ValueMap};

/// Parses a full OpenAPI document from its root [`ValueMap`].
///
/// `base_uri` is the caller-supplied location the document was loaded from (a file path turned
/// into a `file://` URL, a fetch URL, or `None`). The document's own `$self` keyword, if
/// present, is absolutized against it to produce the canonical URI stamped onto
/// [`Definition::self_uri`] and used to resolve every relative `$ref` encountered below.
pub fn parse_definition(
    mut map: ValueMap,
    base_uri: Option<String>,
    registry: &OpenApiDocumentRegistry,
) -> Definition {
    // Taken before anything else is consumed: parsing below destructively drains `map`, but
    // local `$ref`s need an intact copy of the original tree to resolve against.
    let root_snapshot = Value::Map(map.clone());

    let declared_self = take_string(&mut map, "$self");
    let self_uri = match declared_self {
        Some(s) => Some(crate::uri::resolve(base_uri.as_deref(), &s)),
        None => base_uri,
    };
    tracing::debug!(self_uri = ?self_uri, "parsing OpenAPI document root");

    let ctx = ParseCtx {
        self_uri: self_uri.clone(),
        root: &root_snapshot,
        registry,
    };

    let openapi = take_string(&mut map, "openapi").unwrap_or_default();
    let json_schema_dialect = take_string(&mut map, "jsonSchemaDialect");
    let info = take_map(&mut map, "info").map(parse_info).unwrap_or_default();

    let servers = take_seq(&mut map, "servers")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::Map(m) => Some(parse_server(m)),
            _ => None,
        })
        .collect();

    let paths_explicit_empty = map.contains_key("paths");
    let paths = take_map(&mut map, "paths")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_path_item(m, &ctx))),
            _ => None,
        })
        .collect();

    let webhooks_explicit_empty = map.contains_key("webhooks");
    let webhooks = take_map(&mut map, "webhooks")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_path_item(m, &ctx))),
            _ => None,
        })
        .collect();

    let components = take_map(&mut map, "components").map(|m| parse_components(m, &ctx));

    let security = take_seq(&mut map, "security").map(|items| {
        items
            .into_iter()
            .filter_map(|v| match v {
                Value::Map(m) => Some(parse_security_requirement(m)),
                _ => None,
            })
            .collect::<Vec<SecurityRequirement>>()
    });

    let tags = take_seq(&mut map, "tags")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::Map(m) => Some(parse_tag(m)),
            _ => None,
        })
        .collect();

    let external_docs = take_map(&mut map, "externalDocs").map(parse_external_docs);

    Definition {
        openapi,
        json_schema_dialect,
        info,
        servers,
        paths,
        paths_explicit_empty,
        webhooks,
        webhooks_explicit_empty,
        components,
        security,
        tags,
        external_docs,
        extensions: take_extensions(map),
        self_uri,
    }
}

fn parse_info(mut map: ValueMap) -> Info {
    Info {
        title: take_string(&mut map, "title").unwrap_or_default(),
        summary: take_string(&mut map, "summary"),
        description: take_string(&mut map, "description"),
        terms_of_service: take_string(&mut map, "termsOfService"),
        contact: take_map(&mut map, "contact").map(parse_contact),
        license: take_map(&mut map, "license").map(parse_license),
        version: take_string(&mut map, "version").unwrap_or_default(),
        extensions: take_extensions(map),
    }
}

fn parse_contact(mut map: ValueMap) -> Contact {
    Contact {
        name: take_string(&mut map, "name"),
        url: take_string(&mut map, "url"),
        email: take_string(&mut map, "email"),
        extensions: take_extensions(map),
    }
}

fn parse_license(mut map: ValueMap) -> License {
    License {
        name: take_string(&mut map, "name").unwrap_or_default(),
        identifier: take_string(&mut map, "identifier"),
        url: take_string(&mut map, "url"),
        extensions: take_extensions(map),
    }
}

pub fn parse_server(mut map: ValueMap) -> Server {
    let variables = take_map(&mut map, "variables")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_server_variable(m))),
            _ => None,
        })
        .collect();
    Server {
        url: take_string(&mut map, "url").unwrap_or_default(),
        description: take_string(&mut map, "description"),
        variables,
        name: take_string(&mut map, "name"),
        extensions: take_extensions(map),
    }
}

fn parse_server_variable(mut map: ValueMap) -> ServerVariable {
    ServerVariable {
        enum_values: take_string_vec(&mut map, "enum"),
        default: take_string(&mut map, "default").unwrap_or_default(),
        description: take_string(&mut map, "description"),
        extensions: take_extensions(map),
    }
}

fn parse_tag(mut map: ValueMap) -> Tag {
    Tag {
        name: take_string(&mut map, "name").unwrap_or_default(),
        summary: take_string(&mut map, "summary"),
        description: take_string(&mut map, "description"),
        external_docs: take_map(&mut map, "externalDocs").map(parse_external_docs),
        parent: take_string(&mut map, "parent"),
        kind: take_string(&mut map, "kind"),
        extensions: take_extensions(map),
    }
}

pub fn parse_external_docs(mut map: ValueMap) -> ExternalDocumentation {
    ExternalDocumentation {
        description: take_string(&mut map, "description"),
        url: take_string(&mut map, "url").unwrap_or_default(),
        extensions: take_extensions(map),
    }
}

fn parse_components(mut map: ValueMap, ctx: &ParseCtx) -> Components {
    let schemas = take_map(&mut map, "schemas")
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k, parse_schema(v)))
        .collect();

    let responses = take_map(&mut map, "responses")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_response(m, ctx))),
            _ => None,
        })
        .collect();

    let parameters = take_map(&mut map, "parameters")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_parameter(m))),
            _ => None,
        })
        .collect();

    let examples = parse_example_map(take_map(&mut map, "examples"));

    let request_bodies = take_map(&mut map, "requestBodies")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_request_body(m, ctx))),
            _ => None,
        })
        .collect();

    let headers = take_map(&mut map, "headers")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_header(m))),
            _ => None,
        })
        .collect();

    let security_schemes = take_map(&mut map, "securitySchemes")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_security_scheme(m))),
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

    let callbacks = take_map(&mut map, "callbacks")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, super::examples::parse_callback(m, ctx))),
            _ => None,
        })
        .collect();

    let path_items = take_map(&mut map, "pathItems")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, parse_path_item(m, ctx))),
            _ => None,
        })
        .collect();

    let media_types = take_map(&mut map, "mediaTypes")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Map(m) => Some((k, super::content::parse_media_type(m))),
            _ => None,
        })
        .collect();

    Components {
        schemas,
        responses,
        parameters,
        examples,
        request_bodies,
        headers,
        security_schemes,
        links,
        callbacks,
        path_items,
        media_types,
        extensions: take_extensions(map),
    }
}
