//! Example Object rules: `value`/`externalValue` mutual exclusivity, and `example`/`examples`
//! mutual exclusivity on the holders that carry both.

use crate::model::content::{Example, MediaTypeObject};
use crate::model::document::Definition;
use crate::validator::{encode_pointer_segment, Issue};

pub fn check(doc: &Definition) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (path_key, item) in &doc.paths {
        let pointer = format!("/paths/{}", encode_pointer_segment(path_key));
        for (method, op) in &item.operations {
            let op_pointer = format!("{pointer}/{}", method.field_name());
            for p in &op.parameters {
                check_example_exclusivity(
                    &format!("{op_pointer}/parameters"),
                    p.example.is_some(),
                    &p.examples,
                    &mut issues,
                );
            }
            if let Some(body) = &op.request_body {
                for (mt, media) in &body.content {
                    check_media(&format!("{op_pointer}/requestBody/content/{mt}"), media, &mut issues);
                }
            }
            for (code, response) in &op.responses {
                for (mt, media) in &response.content {
                    check_media(
                        &format!("{op_pointer}/responses/{code}/content/{mt}"),
                        media,
                        &mut issues,
                    );
                }
            }
        }
    }

    if let Some(components) = &doc.components {
        for (name, example) in &components.examples {
            check_example(&format!("/components/examples/{name}"), example, &mut issues);
        }
    }

    issues
}

fn check_media(pointer: &str, media: &MediaTypeObject, issues: &mut Vec<Issue>) {
    check_example_exclusivity(pointer, media.example.is_some(), &media.examples, issues);
}

fn check_example_exclusivity(
    pointer: &str,
    has_singular: bool,
    examples: &indexmap::IndexMap<String, Example>,
    issues: &mut Vec<Issue>,
) {
    if has_singular && !examples.is_empty() {
        issues.push(Issue::error(
            pointer,
            "'example' and 'examples' are mutually exclusive",
        ));
    }
    for (name, ex) in examples {
        check_example(&format!("{pointer}/examples/{name}"), ex, issues);
    }
}

fn check_example(pointer: &str, example: &Example, issues: &mut Vec<Issue>) {
    if example.reference.is_some() {
        return;
    }
    if example.value.is_some() && example.external_value.is_some() {
        issues.push(Issue::error(
            pointer,
            "'value' and 'externalValue' are mutually exclusive",
        ));
    }
    if example.value.is_some() && example.data_value.is_some() {
        issues.push(Issue::error(
            pointer,
            "'value' and 'dataValue' are mutually exclusive",
        ));
    }
    if example.data_value.is_some() && example.external_value.is_some() {
        issues.push(Issue::error(
            pointer,
            "'dataValue' and 'externalValue' are mutually exclusive",
        ));
    }
}

