//! The reference marker embedded on every holder type in the model.
//!
//! OpenAPI 3.2 treats `$ref` as an ordinary sibling key rather than a mutually-exclusive
//! wrapper: a holder can carry both a reference *and* its own inline fields (`summary`,
//! `description`, and so on), with the inline fields overriding the referenced target's
//! fields at the holder site. Every holder type therefore embeds `Option<Reference>` directly
//! alongside its normal fields rather than wrapping itself in an enum — the one exception is
//! [`crate::model::examples::Callback`], which is modeled as a tagged `Inline | Reference`
//! variant since a callback has no fields of its own besides the expression map itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    /// The raw `$ref` URI, exactly as written (not yet resolved).
    pub uri: String,
}

impl Reference {
    /// Creates a reference to `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Reference { uri: uri.into() }
    }
}
