//! URI helpers: absolute/relative resolution against a base, and the syntactic checks used
//! throughout the validator's root-level rule group.

use url::Url;

/// Resolves `reference` against `base`, when both are given.
///
/// - If `reference` already parses as an absolute URL, it is returned as-is.
/// - If `base` parses as an absolute URL, `reference` is joined against it.
/// - Otherwise, `reference` is returned unchanged (there is nothing to resolve against).
pub fn resolve(base: Option<&str>, reference: &str) -> String {
    if Url::parse(reference).is_ok() {
        return reference.to_string();
    }
    match base.and_then(|b| Url::parse(b).ok()) {
        Some(base_url) => base_url
            .join(reference)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| reference.to_string()),
        None => reference.to_string(),
    }
}

/// Strips the fragment from a URI string, for "ignoring fragment" equality comparisons.
pub fn without_fragment(uri: &str) -> &str {
    match uri.find('#') {
        Some(idx) => &uri[..idx],
        None => uri,
    }
}

/// Splits a `$ref` string into its URI part and fragment (the part after `#`, not including
/// `#` itself). A ref with no `#` has an empty fragment.
pub fn split_ref(raw: &str) -> (&str, &str) {
    match raw.find('#') {
        Some(idx) => (&raw[..idx], &raw[idx + 1..]),
        None => (raw, ""),
    }
}

/// Returns true if `s` is a syntactically valid absolute or relative URI reference.
///
/// This is intentionally permissive: OpenAPI URLs are frequently relative (`/v1`, `./x.json`)
/// and RFC 3986 relative-reference syntax admits almost any non-whitespace string. We treat a
/// string as invalid only when it contains characters that can never appear in a URI
/// reference (unencoded whitespace or control characters) or, once it declares a scheme
/// (`scheme:`), fails to parse as an absolute URL.
pub fn is_valid_uri_reference(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    if has_scheme(s) {
        return Url::parse(s).is_ok();
    }
    true
}

/// Returns true if `s` parses as an absolute URL.
pub fn is_absolute(s: &str) -> bool {
    Url::parse(s).is_ok()
}

fn has_scheme(s: &str) -> bool {
    match s.find(':') {
        Some(idx) if idx > 0 => {
            let scheme = &s[..idx];
            scheme.chars().next().map(|c| c.is_ascii_alphabetic()).unwrap_or(false)
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Returns true if a URL string has no query and no fragment component, as required of
/// `Server.url`.
pub fn has_no_query_or_fragment(s: &str) -> bool {
    // Server URLs may contain `{variable}` templating that is not valid URL syntax, so we
    // check syntactically on the raw string rather than requiring a successful `Url::parse`.
    let without_template = s; // templates use `{}` which never collide with `?`/`#`.
    !without_template.contains('?') && !without_template.contains('#')
}

/// A conservative RFC 5321-flavored email syntax check: `local@domain` with no whitespace, a
/// non-empty local part, and a domain containing at least one `.`.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !s.chars().any(|c| c.is_whitespace())
        && s.matches('@').count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_against_base() {
        let resolved = resolve(
            Some("https://example.com/root/openapi.json"),
            "/api/openapi.json",
        );
        assert_eq!(resolved, "https://example.com/api/openapi.json");
    }

    #[test]
    fn absolute_reference_is_unchanged_by_base() {
        let resolved = resolve(Some("https://base.example.com/"), "https://other.example.com/x");
        assert_eq!(resolved, "https://other.example.com/x");
    }

    #[test]
    fn splits_ref_into_uri_and_fragment() {
        assert_eq!(
            split_ref("https://example.com/openapi.json#/components/responses/Ok"),
            ("https://example.com/openapi.json", "/components/responses/Ok")
        );
        assert_eq!(split_ref("#/components/schemas/Pet"), ("", "/components/schemas/Pet"));
    }

    #[test]
    fn validates_uri_references() {
        assert!(is_valid_uri_reference("https://example.com"));
        assert!(is_valid_uri_reference("/relative/path"));
        assert!(!is_valid_uri_reference("http://bad uri"));
        assert!(!is_valid_uri_reference(""));
    }

    #[test]
    fn validates_email_addresses() {
        assert!(is_valid_email("support@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@example.com"));
    }
}
