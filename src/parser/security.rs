//! Parses security schemes and security requirements.

use indexmap::IndexMap;

use crate::model::security::{OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};
use crate::parser::util::*;
use crate::value::{Value, ValueMap};

pub fn parse_security_scheme(mut map: ValueMap) -> SecurityScheme {
    let reference = take_string(&mut map, "$ref").map(crate::model::reference::Reference::new);
    SecurityScheme {
        reference,
        scheme_type: take_string(&mut map, "type"),
        description: take_string(&mut map, "description"),
        name: take_string(&mut map, "name"),
        location: take_string(&mut map, "in"),
        http_scheme: take_string(&mut map, "scheme"),
        bearer_format: take_string(&mut map, "bearerFormat"),
        flows: take_map(&mut map, "flows").map(parse_oauth_flows),
        open_id_connect_url: take_string(&mut map, "openIdConnectUrl"),
        deprecated: take_bool(&mut map, "deprecated"),
        extensions: take_extensions(map),
    }
}

fn parse_oauth_flows(mut map: ValueMap) -> OAuthFlows {
    OAuthFlows {
        implicit: take_map(&mut map, "implicit").map(parse_oauth_flow),
        password: take_map(&mut map, "password").map(parse_oauth_flow),
        client_credentials: take_map(&mut map, "clientCredentials").map(parse_oauth_flow),
        authorization_code: take_map(&mut map, "authorizationCode").map(parse_oauth_flow),
        device_authorization: take_map(&mut map, "deviceAuthorization").map(parse_oauth_flow),
        extensions: take_extensions(map),
    }
}

fn parse_oauth_flow(mut map: ValueMap) -> OAuthFlow {
    let scopes = take_map(&mut map, "scopes")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
        .collect();
    OAuthFlow {
        authorization_url: take_string(&mut map, "authorizationUrl"),
        token_url: take_string(&mut map, "tokenUrl"),
        device_authorization_url: take_string(&mut map, "deviceAuthorizationUrl"),
        refresh_url: take_string(&mut map, "refreshUrl"),
        scopes,
        extensions: take_extensions(map),
    }
}

/// Parses a single `security[]` / `operation.security[]` entry.
pub fn parse_security_requirement(map: ValueMap) -> SecurityRequirement {
    let mut requirements = IndexMap::new();
    for (k, v) in map {
        let scopes = match v {
            Value::Seq(items) => items
                .into_iter()
                .filter_map(|i| i.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
        requirements.insert(k, scopes);
    }
    SecurityRequirement { requirements }
}
