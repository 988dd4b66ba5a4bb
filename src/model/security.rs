//! Security scheme and requirement objects.

use indexmap::IndexMap;

use crate::model::reference::Reference;
use crate::value::Value;

/// A `security[]` / `operation.security[]` entry: scheme name to required scopes.
///
/// An empty map means "no authentication required" (the OAS `{}` idiom), distinct from the
/// field being absent entirely at the document or operation level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SecurityRequirement {
    /// Security scheme name to the list of required scopes (OAuth2/OpenID Connect) or an
    /// empty list (any other scheme type).
    pub requirements: IndexMap<String, Vec<String>>,
}

/// The `components.securitySchemes` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityScheme {
    /// A reference to a reusable scheme, with inline fields below acting as overrides.
    pub reference: Option<Reference>,
    /// `type`: `apiKey`, `http`, `mutualTLS`, `oauth2`, or `openIdConnect`.
    pub scheme_type: Option<String>,
    /// `description`.
    pub description: Option<String>,
    /// `name` — required when `type` is `apiKey`.
    pub name: Option<String>,
    /// `in` — required when `type` is `apiKey`: `query`, `header`, or `cookie`.
    pub location: Option<String>,
    /// `scheme` — required when `type` is `http`.
    pub http_scheme: Option<String>,
    /// `bearerFormat`.
    pub bearer_format: Option<String>,
    /// `flows` — required when `type` is `oauth2`.
    pub flows: Option<OAuthFlows>,
    /// `openIdConnectUrl` — required when `type` is `openIdConnect`.
    pub open_id_connect_url: Option<String>,
    /// `deprecated` (3.2).
    pub deprecated: Option<bool>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// The `securityScheme.flows` object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OAuthFlows {
    /// `implicit`.
    pub implicit: Option<OAuthFlow>,
    /// `password`.
    pub password: Option<OAuthFlow>,
    /// `clientCredentials`.
    pub client_credentials: Option<OAuthFlow>,
    /// `authorizationCode`.
    pub authorization_code: Option<OAuthFlow>,
    /// `deviceAuthorization` (3.2).
    pub device_authorization: Option<OAuthFlow>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}

/// A single OAuth2 flow's configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OAuthFlow {
    /// `authorizationUrl` — required for `implicit` and `authorizationCode`.
    pub authorization_url: Option<String>,
    /// `tokenUrl` — required for all but `implicit`.
    pub token_url: Option<String>,
    /// `deviceAuthorizationUrl` (3.2) — required for `deviceAuthorization`.
    pub device_authorization_url: Option<String>,
    /// `refreshUrl`.
    pub refresh_url: Option<String>,
    /// `scopes`, mapping scope name to a human-readable description.
    pub scopes: IndexMap<String, String>,
    /// Keys starting with `x-`.
    pub extensions: IndexMap<String, Value>,
}
