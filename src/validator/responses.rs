//! `responses` rules: status code key syntax and the "must declare at least one response" rule.

use crate::model::document::Definition;
use crate::validator::{encode_pointer_segment, Issue};

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (path_key, item) in &doc.paths {
        let pointer = format!("/paths/{}", encode_pointer_segment(path_key));
        for (method, op) in &item.operations {
            let op_pointer = format!("{pointer}/{}", method.field_name());
            check_operation_responses(&op_pointer, op, &mut issues);
        }
    }
    issues
}

fn check_operation_responses(
    op_pointer: &str,
    op: &crate::model::paths::Operation,
    issues: &mut Vec<Issue>,
) {
    if op.responses_explicit && op.responses.is_empty() {
        issues.push(Issue::error(
            format!("{op_pointer}/responses"),
            "'responses' must contain at least one entry",
        ));
    }
    if !op.responses_explicit {
        issues.push(Issue::error(op_pointer, "'responses' is required"));
    }
    for code in op.responses.keys() {
        if !is_valid_status_key(code) {
            issues.push(Issue::error(
                format!("{op_pointer}/responses/{code}"),
                format!("'{code}' is not a valid status code, range, or 'default'"),
            ));
        }
    }
    if !op.responses.is_empty() && !op.responses.keys().any(|c| is_success_key(c)) {
        issues.push(Issue::warning(
            format!("{op_pointer}/responses"),
            "no response in the 2XX range is declared",
        ));
    }
}

fn is_success_key(code: &str) -> bool {
    code.starts_with('2') && code.len() == 3
}

fn is_valid_status_key(code: &str) -> bool {
    if code == "default" {
        return true;
    }
    if code.len() != 3 {
        return false;
    }
    let bytes = code.as_bytes();
    matches!(bytes[0], b'1'..=b'5')
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_digit() || *b == b'X' || *b == b'x')
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_default_and_range_codes() {
        assert!(is_valid_status_key("200"));
        assert!(is_valid_status_key("default"));
        assert!(is_valid_status_key("2XX"));
        assert!(!is_valid_status_key("20"));
        assert!(!is_valid_status_key("abc"));
    }
}
