//! Shared state threaded through every parser submodule call.

use crate::registry::OpenApiDocumentRegistry;
use crate::resolver::{self, Resolved};
use crate::value::Value;

/// Context carried through a single `parse*` call.
///
/// Parsing destructively drains the [`crate::value::ValueMap`] it's handed (each `take_*` call
/// removes a key), so anything that needs to resolve a local `$ref` mid-parse needs its own,
/// untouched copy of the document root to resolve against — that's `root`. `self_uri` is the
/// document's own canonical URI (already absolutized against any caller-supplied base), and
/// `registry` is where a `$ref` that names another document gets looked up.
pub struct ParseCtx<'a> {
    /// The document's own canonical URI, if known.
    pub self_uri: Option<String>,
    /// A pristine snapshot of the document root, taken before any field was consumed.
    pub root: &'a Value,
    /// The registry consulted for references that resolve outside this document.
    pub registry: &'a OpenApiDocumentRegistry,
}

impl<'a> ParseCtx<'a> {
    /// Resolves `raw_ref` against this document (falling back to the registry for
    /// cross-document references). Returns `None` on any resolution failure; callers treat an
    /// unresolvable reference as "no override available" rather than a parse error.
    pub fn resolve(&self, raw_ref: &str) -> Option<Resolved<'a>> {
        resolver::resolve(self.registry, self.self_uri.as_deref(), self.root, raw_ref).ok()
    }
}
