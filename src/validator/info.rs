//! `info` object rules.

use crate::model::document::Definition;
use crate::uri;
use crate::validator::Issue;

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();

    if doc.info.title.is_empty() {
        issues.push(Issue::error("/info/title", "'info.title' is required"));
    }
    if doc.info.version.is_empty() {
        issues.push(Issue::error("/info/version", "'info.version' is required"));
    }

    if let Some(license) = &doc.info.license {
        if license.name.is_empty() {
            issues.push(Issue::error("/info/license/name", "'license.name' is required"));
        }
        if license.identifier.is_some() && license.url.is_some() {
            issues.push(Issue::error(
                "/info/license",
                "'identifier' and 'url' are mutually exclusive",
            ));
        }
    }

    if let Some(contact) = &doc.info.contact {
        if let Some(email) = &contact.email {
            if !uri::is_valid_email(email) {
                issues.push(Issue::error(
                    "/info/contact/email",
                    format!("'{email}' is not a valid email address"),
                ));
            }
        }
        if let Some(url) = &contact.url {
            if !uri::is_valid_uri_reference(url) {
                issues.push(Issue::error(
                    "/info/contact/url",
                    format!("'{url}' is not a valid URL"),
                ));
            }
        }
    }

    issues
}
