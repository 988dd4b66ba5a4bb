//! Document-root rules: the `openapi` version string and `jsonSchemaDialect`.

use crate::model::document::Definition;
use crate::uri;
use crate::validator::Issue;

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();

    if doc.openapi.is_empty() {
        issues.push(Issue::error("/openapi", "'openapi' is required"));
    } else if !looks_like_semver(&doc.openapi) {
        issues.push(Issue::error(
            "/openapi",
            format!("'{}' is not a valid semantic version string", doc.openapi),
        ));
    }

    if let Some(dialect) = &doc.json_schema_dialect {
        if !uri::is_valid_uri_reference(dialect) || !uri::is_absolute(dialect) {
            issues.push(Issue::error(
                "/jsonSchemaDialect",
                format!("'{dialect}' is not a valid absolute URI"),
            ));
        }
    }

    if let Some(self_uri) = &doc.self_uri {
        if !uri::is_valid_uri_reference(self_uri) {
            issues.push(Issue::error("/$self", format!("'{self_uri}' is not a valid URI")));
        }
    }

    if let Some(docs) = &doc.external_docs {
        if !uri::is_valid_uri_reference(&docs.url) {
            issues.push(Issue::error(
                "/externalDocs/url",
                format!("'{}' is not a valid URL", docs.url),
            ));
        }
    }

    if let Some(tos) = &doc.info.terms_of_service {
        if !uri::is_valid_uri_reference(tos) {
            issues.push(Issue::error(
                "/info/termsOfService",
                format!("'{tos}' is not a valid URL"),
            ));
        }
    }

    let has_paths = doc.paths_explicit_empty || !doc.paths.is_empty();
    let has_webhooks = doc.webhooks_explicit_empty || !doc.webhooks.is_empty();
    if !has_paths && !has_webhooks && doc.components.is_none() {
        issues.push(Issue::error(
            "/",
            "at least one of 'paths', 'webhooks', or 'components' must be present",
        ));
    }

    issues
}

fn looks_like_semver(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() >= 2
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::{Definition, Info};
    use indexmap::IndexMap;

    fn base() -> Definition {
        Definition {
            openapi: "3.2.0".to_string(),
            json_schema_dialect: None,
            info: Info::default(),
            servers: Vec::new(),
            paths: IndexMap::new(),
            paths_explicit_empty: true,
            webhooks: IndexMap::new(),
            webhooks_explicit_empty: false,
            components: None,
            security: None,
            tags: Vec::new(),
            external_docs: None,
            extensions: IndexMap::new(),
            self_uri: None,
        }
    }

    #[test]
    fn accepts_well_formed_version() {
        assert!(check(&base()).is_empty());
    }

    #[test]
    fn rejects_garbage_version() {
        let mut doc = base();
        doc.openapi = "latest".to_string();
        assert!(!check(&doc).is_empty());
    }
}
