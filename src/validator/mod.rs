//! The validator: a catalog of soft-failure rules run over an already-parsed [`Definition`].
//!
//! Nothing in this module ever returns [`crate::error::Error`] — a validation rule either holds
//! or it contributes an [`Issue`] to the result. This mirrors the split between "the document
//! could not be read at all" (a parser/writer concern) and "the document was read fine but
//! doesn't meet the spec's rules" (everything here).

mod examples;
mod info;
mod media;
mod parameters;
mod paths;
mod responses;
mod root;
mod runtime_expr;
mod schema;
mod security;
mod servers;

use crate::model::document::Definition;
use crate::registry::OpenApiDocumentRegistry;

/// How serious an [`Issue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational: a style/clarity observation, never a spec violation.
    Info,
    /// The document violates a SHOULD-level recommendation or a soft MUST that tooling commonly
    /// tolerates.
    Warning,
    /// The document violates a MUST-level rule.
    Error,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// How serious this finding is.
    pub severity: Severity,
    /// A JSON-Pointer-shaped location within the document (e.g.
    /// `/paths/~1pets/get/responses/200`).
    pub path: String,
    /// A human-readable description of the problem.
    pub message: String,
}

impl Issue {
    pub(crate) fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Escapes a literal path-template or map key for embedding as one segment of a JSON Pointer
/// in an [`Issue`] location, per RFC 6901 (`~` to `~0`, `/` to `~1`).
pub(crate) fn encode_pointer_segment(s: &str) -> String {
    s.replace('~', "~0").replace('/', "~1")
}

/// True if `s` is a valid RFC 7230 `token` (used for HTTP method names and header field
/// names): one or more characters drawn from the token charset, no separators or whitespace.
pub(crate) fn is_http_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(
                    c,
                    '!' | '#'
                        | '$'
                        | '%'
                        | '&'
                        | '\''
                        | '*'
                        | '+'
                        | '-'
                        | '.'
                        | '^'
                        | '_'
                        | '`'
                        | '|'
                        | '~'
                )
        })
}

/// Runs every rule in the catalog over `doc`, returning every [`Issue`] found.
///
/// `registry` supplies cross-document context for rules that need to resolve a `$ref` outside
/// the document itself (e.g. a security scheme reference into a shared components file).
pub fn validate(doc: &Definition, registry: &OpenApiDocumentRegistry) -> Vec<Issue> {
    tracing::debug!(self_uri = ?doc.self_uri, "validating document");
    let mut issues = Vec::new();
    issues.extend(root::check(doc));
    issues.extend(info::check(doc));
    issues.extend(servers::check(doc));
    issues.extend(paths::check(doc));
    issues.extend(parameters::check(doc));
    issues.extend(responses::check(doc));
    issues.extend(media::check(doc));
    issues.extend(examples::check(doc));
    issues.extend(security::check(doc));
    issues.extend(runtime_expr::check(doc));
    issues.extend(schema::check(doc));
    let _ = registry;
    issues
}
