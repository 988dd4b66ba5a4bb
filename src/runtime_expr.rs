//! The OpenAPI runtime-expression mini-language used by Links and Callbacks.
//!
//! Grammar:
//! ```text
//! $url | $method | $statusCode
//!   | $request.(query|path|header|body)(#(/token)*)?
//!   | $response.(header|body)(#(/token)*)?
//! ```
//! Callback keys and Link `server.url` may embed an expression inside `{...}` alongside
//! literal text; [`embedded_expressions`] extracts those for validation.

use crate::pointer;

/// A raw runtime-expression string as captured by the parser.
///
/// The parser never rejects malformed expressions — malformed runtime expressions pass
/// parsing and only fail validation; this type is a thin marker distinguishing
/// "this string is meant to be a runtime expression" from an ordinary string field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuntimeExpression(String);

impl RuntimeExpression {
    /// Wraps a raw string as a runtime expression, trimming a single layer of `{...}` braces
    /// if present (callback keys and embedded link parameters are often written that way).
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        let unwrapped = if trimmed.starts_with('{') && trimmed.ends_with('}') && trimmed.len() >= 2
        {
            trimmed[1..trimmed.len() - 1].trim()
        } else {
            trimmed
        };
        RuntimeExpression(unwrapped.to_string())
    }

    /// The raw expression text (without surrounding braces).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this looks like it was meant to be an expression (`$`-prefixed) rather than a
    /// plain literal.
    pub fn looks_like_expression(&self) -> bool {
        self.0.starts_with('$')
    }

    /// Validates this expression against the grammar above.
    pub fn validate(&self) -> Result<(), String> {
        validate(&self.0)
    }
}

impl std::fmt::Display for RuntimeExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a bare `$...` runtime expression string (no surrounding braces).
pub fn validate(expr: &str) -> Result<(), String> {
    match expr {
        "$url" | "$method" | "$statusCode" => return Ok(()),
        _ => {}
    }

    if let Some(rest) = expr.strip_prefix("$request.") {
        return validate_request_source(rest);
    }
    if let Some(rest) = expr.strip_prefix("$response.") {
        return validate_response_source(rest);
    }

    Err(format!("invalid runtime expression: '{expr}'"))
}

fn validate_request_source(rest: &str) -> Result<(), String> {
    if let Some(name) = rest.strip_prefix("query.") {
        return require_nonempty(name, "query");
    }
    if let Some(name) = rest.strip_prefix("path.") {
        return require_nonempty(name, "path");
    }
    if let Some(token) = rest.strip_prefix("header.") {
        return validate_header_token(token);
    }
    if let Some(tail) = rest.strip_prefix("body") {
        return validate_body_tail(tail);
    }
    Err(format!("invalid $request source: '{rest}'"))
}

fn validate_response_source(rest: &str) -> Result<(), String> {
    if let Some(token) = rest.strip_prefix("header.") {
        return validate_header_token(token);
    }
    if let Some(tail) = rest.strip_prefix("body") {
        return validate_body_tail(tail);
    }
    Err(format!("invalid $response source: '{rest}'"))
}

fn require_nonempty(name: &str, kind: &str) -> Result<(), String> {
    if name.is_empty() {
        Err(format!("runtime expression {kind} name must not be empty"))
    } else {
        Ok(())
    }
}

fn validate_header_token(token: &str) -> Result<(), String> {
    if token.is_empty() {
        return Err("runtime expression header token must not be empty".into());
    }
    if token.chars().all(is_tchar) {
        Ok(())
    } else {
        Err(format!("invalid header token in runtime expression: '{token}'"))
    }
}

fn validate_body_tail(tail: &str) -> Result<(), String> {
    if tail.is_empty() {
        return Ok(());
    }
    let Some(ptr) = tail.strip_prefix('#') else {
        return Err(format!("invalid $request/$response.body suffix: '{tail}'"));
    };
    if pointer::is_syntactically_valid(ptr) {
        Ok(())
    } else {
        Err(format!("invalid JSON Pointer fragment in runtime expression: '{ptr}'"))
    }
}

fn is_tchar(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// Extracts `{$...}` embedded expressions from a template string (callback keys, Link
/// `server.url`). Non-`$` braces are ignored as literal text.
pub fn embedded_expressions(template: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '{' {
            continue;
        }
        let mut inner = String::new();
        let mut closed = false;
        for n in chars.by_ref() {
            if n == '}' {
                closed = true;
                break;
            }
            inner.push(n);
        }
        if closed {
            let trimmed = inner.trim();
            if trimmed.starts_with('$') {
                out.push(trimmed.to_string());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_keywords() {
        assert!(validate("$url").is_ok());
        assert!(validate("$method").is_ok());
        assert!(validate("$statusCode").is_ok());
    }

    #[test]
    fn accepts_request_and_response_sources() {
        assert!(validate("$request.path.id").is_ok());
        assert!(validate("$request.query.q").is_ok());
        assert!(validate("$request.header.X-Id").is_ok());
        assert!(validate("$request.body#/id").is_ok());
        assert!(validate("$response.header.Location").is_ok());
        assert!(validate("$response.body#/items/0").is_ok());
    }

    #[test]
    fn rejects_response_path_and_query() {
        assert!(validate("$response.path.id").is_err());
        assert!(validate("$response.query.id").is_err());
    }

    #[test]
    fn rejects_malformed_pointer() {
        assert!(validate("$request.body#bad").is_err());
    }

    #[test]
    fn strips_one_layer_of_braces() {
        let e = RuntimeExpression::new("{$request.body#/id}");
        assert_eq!(e.as_str(), "$request.body#/id");
    }

    #[test]
    fn extracts_embedded_expressions_from_template() {
        let exprs = embedded_expressions(
            "http://example.com?foo={$request.path.id}&bar={$response.header.Location}",
        );
        assert_eq!(
            exprs,
            vec![
                "$request.path.id".to_string(),
                "$response.header.Location".to_string()
            ]
        );
    }
}
