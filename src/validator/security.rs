//! Security rules: requirement entries must name a declared scheme, and OAuth2/OpenID Connect
//! scopes must be declared on that scheme's flows.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::model::document::Definition;
use crate::model::security::{OAuthFlow, SecurityRequirement, SecurityScheme};
use crate::uri;
use crate::validator::{encode_pointer_segment, Issue};

const VALID_SCHEME_TYPES: &[&str] = &["apiKey", "http", "oauth2", "openIdConnect", "mutualTLS"];

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();
    let empty = IndexMap::new();
    let schemes = doc
        .components
        .as_ref()
        .map(|c| &c.security_schemes)
        .unwrap_or(&empty);

    for (name, scheme) in schemes {
        check_scheme(&format!("/components/securitySchemes/{name}"), name, scheme, &mut issues);
    }

    if let Some(security) = &doc.security {
        for (i, req) in security.iter().enumerate() {
            check_requirement(&format!("/security/{i}"), req, schemes, &mut issues);
        }
    }

    for (path_key, item) in &doc.paths {
        let pointer = format!("/paths/{}", encode_pointer_segment(path_key));
        for (method, op) in &item.operations {
            if let Some(security) = &op.security {
                for (i, req) in security.iter().enumerate() {
                    check_requirement(
                        &format!("{pointer}/{}/security/{i}", method.field_name()),
                        req,
                        schemes,
                        &mut issues,
                    );
                }
            }
        }
    }

    issues
}

fn check_scheme(pointer: &str, name: &str, scheme: &SecurityScheme, issues: &mut Vec<Issue>) {
    if scheme.reference.is_some() {
        return;
    }
    if uri::is_absolute(name) {
        issues.push(Issue::warning(
            pointer,
            format!("security scheme name '{name}' looks like a URI"),
        ));
    }

    let Some(scheme_type) = &scheme.scheme_type else {
        issues.push(Issue::error(pointer, "'type' is required"));
        return;
    };
    if !VALID_SCHEME_TYPES.contains(&scheme_type.as_str()) {
        issues.push(Issue::error(
            format!("{pointer}/type"),
            format!("'{scheme_type}' is not a recognized security scheme type"),
        ));
        return;
    }

    match scheme_type.as_str() {
        "apiKey" => {
            if scheme.name.as_deref().unwrap_or("").is_empty() {
                issues.push(Issue::error(format!("{pointer}/name"), "'name' is required for an apiKey scheme"));
            }
            match scheme.location.as_deref() {
                Some("header") | Some("query") | Some("cookie") => {}
                _ => issues.push(Issue::error(
                    format!("{pointer}/in"),
                    "'in' must be one of 'header', 'query', 'cookie' for an apiKey scheme",
                )),
            }
        }
        "http" => {
            if scheme.http_scheme.as_deref().unwrap_or("").is_empty() {
                issues.push(Issue::error(
                    format!("{pointer}/scheme"),
                    "'scheme' is required for an http scheme",
                ));
            }
        }
        "oauth2" => {
            let Some(flows) = &scheme.flows else {
                issues.push(Issue::error(pointer, "oauth2 security scheme requires flows"));
                return;
            };
            if let Some(flow) = &flows.implicit {
                check_flow(&format!("{pointer}/flows/implicit"), flow, &["authorization_url"], issues);
            }
            if let Some(flow) = &flows.password {
                check_flow(&format!("{pointer}/flows/password"), flow, &["token_url"], issues);
            }
            if let Some(flow) = &flows.client_credentials {
                check_flow(&format!("{pointer}/flows/clientCredentials"), flow, &["token_url"], issues);
            }
            if let Some(flow) = &flows.authorization_code {
                check_flow(
                    &format!("{pointer}/flows/authorizationCode"),
                    flow,
                    &["authorization_url", "token_url"],
                    issues,
                );
            }
            if let Some(flow) = &flows.device_authorization {
                check_flow(
                    &format!("{pointer}/flows/deviceAuthorization"),
                    flow,
                    &["device_authorization_url", "token_url"],
                    issues,
                );
            }
        }
        "openIdConnect" => {
            let url = scheme.open_id_connect_url.as_deref().unwrap_or("");
            if url.is_empty() {
                issues.push(Issue::error(
                    format!("{pointer}/openIdConnectUrl"),
                    "'openIdConnectUrl' is required for an openIdConnect scheme",
                ));
            } else if !uri::is_valid_uri_reference(url) {
                issues.push(Issue::error(
                    format!("{pointer}/openIdConnectUrl"),
                    format!("'{url}' is not a valid URL"),
                ));
            }
        }
        _ => {}
    }
}

fn check_flow(pointer: &str, flow: &OAuthFlow, required: &[&str], issues: &mut Vec<Issue>) {
    for field in required {
        let present = match *field {
            "authorization_url" => flow.authorization_url.as_deref().unwrap_or("").is_empty(),
            "token_url" => flow.token_url.as_deref().unwrap_or("").is_empty(),
            "device_authorization_url" => {
                flow.device_authorization_url.as_deref().unwrap_or("").is_empty()
            }
            _ => false,
        };
        if present {
            let keyword = match *field {
                "authorization_url" => "authorizationUrl",
                "token_url" => "tokenUrl",
                "device_authorization_url" => "deviceAuthorizationUrl",
                other => other,
            };
            issues.push(Issue::error(pointer, format!("'{keyword}' is required for this flow")));
        }
    }
}

fn check_requirement(
    pointer: &str,
    req: &SecurityRequirement,
    schemes: &IndexMap<String, SecurityScheme>,
    issues: &mut Vec<Issue>,
) {
    for (name, scopes) in &req.requirements {
        let Some(scheme) = schemes.get(name) else {
            if !uri::is_absolute(name) {
                issues.push(Issue::error(
                    pointer,
                    format!("security requirement references undeclared scheme '{name}'"),
                ));
            }
            continue;
        };
        if matches!(scheme.scheme_type.as_deref(), Some("oauth2") | Some("openIdConnect")) {
            let declared = declared_scopes(scheme);
            for scope in scopes {
                if !declared.contains(scope.as_str()) {
                    issues.push(Issue::error(
                        pointer,
                        format!("scope '{scope}' is not declared by security scheme '{name}'"),
                    ));
                }
            }
        } else if !scopes.is_empty() {
            issues.push(Issue::warning(
                pointer,
                format!("non-OAuth2 scheme '{name}' should use an empty scope list"),
            ));
        }
    }
}

fn declared_scopes(scheme: &SecurityScheme) -> HashSet<&str> {
    let Some(flows) = &scheme.flows else {
        return HashSet::new();
    };
    [
        &flows.implicit,
        &flows.password,
        &flows.client_credentials,
        &flows.authorization_code,
        &flows.device_authorization,
    ]
    .into_iter()
    .flatten()
    .flat_map(|flow| flow.scopes.keys().map(String::as_str))
    .collect()
}

