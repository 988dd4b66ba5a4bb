//! Reference resolution: turning a raw `$ref` string into the [`Value`] it points at.
//!
//! Resolution proceeds in five steps: split the reference into its URI part and fragment, treat
//! an empty URI part as "the current document", resolve a non-empty URI part against the
//! current document's base URI, look the resulting canonical URI up in the
//! [`OpenApiDocumentRegistry`], and finally walk the fragment as a JSON Pointer against
//! whichever document was found.

use crate::pointer;
use crate::registry::OpenApiDocumentRegistry;
use crate::uri;
use crate::value::Value;

/// The outcome of successfully resolving a `$ref`.
pub struct Resolved<'a> {
    /// The canonical URI of the document the value was found in (`None` for an anonymous
    /// current document resolved against itself).
    pub document_uri: Option<String>,
    /// The resolved value: borrowed when it came from the caller's own document, cloned out of
    /// a registry entry otherwise (registry entries are reference-counted and may outlive this
    /// call, so their contents are not borrowed across the call boundary).
    pub value: ResolvedValue<'a>,
}

/// A resolved value, either borrowed from the current document or cloned from the registry.
pub enum ResolvedValue<'a> {
    Borrowed(&'a Value),
    Owned(Value),
}

impl<'a> ResolvedValue<'a> {
    /// Borrows the resolved value, regardless of which arm produced it.
    pub fn get(&self) -> &Value {
        match self {
            ResolvedValue::Borrowed(v) => v,
            ResolvedValue::Owned(v) => v,
        }
    }
}

/// Resolves `raw_ref` against the document currently being processed.
///
/// `current_uri` is the current document's own base URI (`None` if unknown/anonymous);
/// `current_root` is its parsed tree.
pub fn resolve<'a>(
    registry: &OpenApiDocumentRegistry,
    current_uri: Option<&str>,
    current_root: &'a Value,
    raw_ref: &str,
) -> Result<Resolved<'a>, String> {
    let (uri_part, fragment) = uri::split_ref(raw_ref);
    let tokens = pointer::decode_tokens(fragment)
        .map_err(|e| format!("malformed reference '{raw_ref}': {e}"))?;

    if uri_part.is_empty() {
        tracing::trace!(raw_ref, "resolving within current document");
        let value = pointer::resolve(current_root, &tokens)
            .ok_or_else(|| format!("unresolved reference '{raw_ref}' in current document"))?;
        return Ok(Resolved {
            document_uri: current_uri.map(str::to_string),
            value: ResolvedValue::Borrowed(value),
        });
    }

    let resolved_uri = uri::resolve(current_uri, uri_part);
    tracing::trace!(raw_ref, resolved_uri, "resolving against registry");

    if Some(resolved_uri.as_str()) == current_uri {
        let value = pointer::resolve(current_root, &tokens)
            .ok_or_else(|| format!("unresolved reference '{raw_ref}' in current document"))?;
        return Ok(Resolved {
            document_uri: current_uri.map(str::to_string),
            value: ResolvedValue::Borrowed(value),
        });
    }

    let doc = registry
        .get(&resolved_uri)
        .ok_or_else(|| format!("no document registered for '{resolved_uri}'"))?;
    let value = pointer::resolve(&doc.root, &tokens)
        .ok_or_else(|| format!("unresolved reference '{raw_ref}' in document '{resolved_uri}'"))?
        .clone();
    Ok(Resolved {
        document_uri: Some(doc.uri.clone()),
        value: ResolvedValue::Owned(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use indexmap::IndexMap;

    fn map(pairs: Vec<(&str, Value)>) -> Value {
        let mut m = IndexMap::new();
        for (k, v) in pairs {
            m.insert(k.to_string(), v);
        }
        Value::Map(m)
    }

    #[test]
    fn resolves_within_current_document() {
        let registry = OpenApiDocumentRegistry::new();
        let root = map(vec![(
            "components",
            map(vec![(
                "schemas",
                map(vec![("Pet", Value::String("pet-schema".into()))]),
            )]),
        )]);
        let resolved = resolve(&registry, None, &root, "#/components/schemas/Pet").unwrap();
        assert_eq!(resolved.value.get().as_str(), Some("pet-schema"));
    }

    #[test]
    fn resolves_across_registered_documents() {
        let registry = OpenApiDocumentRegistry::new();
        let other = map(vec![("Pet", Value::String("external-pet".into()))]);
        registry.register("https://example.com/common.json", other);

        let root = Value::empty_map();
        let resolved = resolve(
            &registry,
            Some("https://example.com/openapi.json"),
            &root,
            "common.json#/Pet",
        )
        .unwrap();
        assert_eq!(resolved.value.get().as_str(), Some("external-pet"));
        assert_eq!(
            resolved.document_uri.as_deref(),
            Some("https://example.com/common.json")
        );
    }

    #[test]
    fn reports_unresolved_reference() {
        let registry = OpenApiDocumentRegistry::new();
        let root = Value::empty_map();
        assert!(resolve(&registry, None, &root, "#/components/schemas/Missing").is_err());
    }
}
