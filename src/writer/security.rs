//! Writes security schemes, OAuth2 flows, and security requirements.

use crate::model::security::{OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};
use crate::value::{Value, ValueMap};
use crate::writer::util::*;

pub fn write_security_scheme(scheme: &SecurityScheme) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(r) = &scheme.reference {
        map.insert("$ref".to_string(), Value::String(r.uri.clone()));
    }
    put_string(&mut map, "type", &scheme.scheme_type);
    put_string(&mut map, "description", &scheme.description);
    put_string(&mut map, "name", &scheme.name);
    put_string(&mut map, "in", &scheme.location);
    put_string(&mut map, "scheme", &scheme.http_scheme);
    put_string(&mut map, "bearerFormat", &scheme.bearer_format);
    if let Some(flows) = &scheme.flows {
        map.insert("flows".to_string(), Value::Map(write_oauth_flows(flows)));
    }
    put_string(&mut map, "openIdConnectUrl", &scheme.open_id_connect_url);
    put_bool(&mut map, "deprecated", scheme.deprecated);
    extend_extensions(&mut map, &scheme.extensions);
    map
}

fn write_oauth_flows(flows: &OAuthFlows) -> ValueMap {
    let mut map = ValueMap::new();
    if let Some(f) = &flows.implicit {
        map.insert("implicit".to_string(), Value::Map(write_oauth_flow(f)));
    }
    if let Some(f) = &flows.password {
        map.insert("password".to_string(), Value::Map(write_oauth_flow(f)));
    }
    if let Some(f) = &flows.client_credentials {
        map.insert("clientCredentials".to_string(), Value::Map(write_oauth_flow(f)));
    }
    if let Some(f) = &flows.authorization_code {
        map.insert("authorizationCode".to_string(), Value::Map(write_oauth_flow(f)));
    }
    if let Some(f) = &flows.device_authorization {
        map.insert("deviceAuthorization".to_string(), Value::Map(write_oauth_flow(f)));
    }
    extend_extensions(&mut map, &flows.extensions);
    map
}

fn write_oauth_flow(flow: &OAuthFlow) -> ValueMap {
    let mut map = ValueMap::new();
    put_string(&mut map, "authorizationUrl", &flow.authorization_url);
    put_string(&mut map, "tokenUrl", &flow.token_url);
    put_string(&mut map, "deviceAuthorizationUrl", &flow.device_authorization_url);
    put_string(&mut map, "refreshUrl", &flow.refresh_url);
    let scopes = flow
        .scopes
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    map.insert("scopes".to_string(), Value::Map(scopes));
    extend_extensions(&mut map, &flow.extensions);
    map
}

pub fn write_security_requirement(requirement: &SecurityRequirement) -> ValueMap {
    requirement
        .requirements
        .iter()
        .map(|(k, v)| {
            (
                k.clone(),
                Value::Seq(v.iter().cloned().map(Value::String).collect()),
            )
        })
        .collect()
}
