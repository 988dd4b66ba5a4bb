//! The document registry: a process-wide table of canonical URI to parsed document, consulted
//! by the reference resolver whenever a `$ref` points outside the document currently being
//! resolved.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::document::{Definition, SchemaDocument};
use crate::model::paths::PathItem;
use crate::value::Value;

/// One entry in the registry: the raw parsed tree a document was loaded from, plus the
/// canonical URI it is keyed under.
#[derive(Debug, Clone)]
pub struct RegisteredDocument {
    /// The canonical URI this document is registered under.
    pub uri: String,
    /// The parsed tree, pre-typed-model (the resolver walks this with JSON Pointers; typed
    /// parsing of any given sub-tree happens lazily, on demand, as the parser visits it).
    pub root: Value,
}

/// A typed registry entry, alongside the raw tree every entry also gets in `entries` so the
/// JSON-Pointer-based resolver keeps working regardless of how a document was registered.
#[derive(Debug, Clone)]
enum TypedEntry {
    OpenApi(Rc<Definition>),
    Schema(Rc<SchemaDocument>),
}

/// A registry of documents keyed by canonical URI, so that a `$ref` in one document can be
/// resolved against another previously-registered one.
///
/// Interior mutability mirrors the single-threaded, call-and-response usage pattern described
/// for this crate: callers register documents as they load them and hand the registry to the
/// resolver by shared reference.
#[derive(Debug, Default)]
pub struct OpenApiDocumentRegistry {
    entries: RefCell<HashMap<String, Rc<RegisteredDocument>>>,
    typed: RefCell<HashMap<String, TypedEntry>>,
}

impl OpenApiDocumentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        OpenApiDocumentRegistry::default()
    }

    /// Registers a document's raw tree under `uri`, replacing any prior entry at that URI.
    pub fn register(&self, uri: impl Into<String>, root: Value) {
        let uri = uri.into();
        tracing::debug!(uri = %uri, "registering document");
        self.entries.borrow_mut().insert(
            uri.clone(),
            Rc::new(RegisteredDocument { uri, root }),
        );
    }

    /// Looks up a previously registered document by its canonical URI.
    pub fn get(&self, uri: &str) -> Option<Rc<RegisteredDocument>> {
        self.entries.borrow().get(uri).cloned()
    }

    /// True if a document is registered under `uri`.
    pub fn contains(&self, uri: &str) -> bool {
        self.entries.borrow().contains_key(uri)
    }

    /// The number of registered documents.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True if no documents are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Registers a parsed OpenAPI document, typed, under both its own `$self` (absolutized
    /// against `base_uri`) and `base_uri` itself, so a later `$ref` can resolve against either
    /// URI a caller might have used to name it. Also mirrors the document into the raw-tree
    /// table under the same keys, so [`crate::resolver::resolve`]'s JSON-Pointer walk keeps
    /// working for cross-document fragment lookups.
    pub fn register_open_api(&self, definition: Definition, base_uri: Option<&str>) {
        let raw = Value::Map(crate::writer::document::write_definition(&definition));
        let self_key = definition
            .self_uri
            .as_deref()
            .map(|s| crate::uri::resolve(base_uri, s));
        let base_key = base_uri.map(crate::uri::without_fragment).map(str::to_string);

        let definition = Rc::new(definition);
        {
            let mut typed = self.typed.borrow_mut();
            if let Some(key) = &self_key {
                typed.insert(
                    crate::uri::without_fragment(key).to_string(),
                    TypedEntry::OpenApi(definition.clone()),
                );
            }
            if let Some(key) = &base_key {
                typed.insert(key.clone(), TypedEntry::OpenApi(definition.clone()));
            }
        }
        if let Some(key) = self_key {
            self.register(crate::uri::without_fragment(&key).to_string(), raw.clone());
        }
        if let Some(key) = base_key {
            self.register(key, raw);
        }
    }

    /// Registers a standalone JSON Schema document, typed, under its own `$id` (absolutized
    /// against `base_uri`) and `base_uri` itself, mirroring [`Self::register_open_api`].
    pub fn register_schema(&self, schema: SchemaDocument, base_uri: Option<&str>) {
        let raw = crate::writer::schema::write_schema(&schema.root);
        let declared_id = schema.root.as_object().and_then(|o| o.id.clone());
        let self_key = schema
            .self_uri
            .as_deref()
            .or(declared_id.as_deref())
            .map(|s| crate::uri::resolve(base_uri, s));
        let base_key = base_uri.map(crate::uri::without_fragment).map(str::to_string);

        let schema = Rc::new(schema);
        {
            let mut typed = self.typed.borrow_mut();
            if let Some(key) = &self_key {
                typed.insert(
                    crate::uri::without_fragment(key).to_string(),
                    TypedEntry::Schema(schema.clone()),
                );
            }
            if let Some(key) = &base_key {
                typed.insert(key.clone(), TypedEntry::Schema(schema.clone()));
            }
        }
        if let Some(key) = self_key {
            self.register(crate::uri::without_fragment(&key).to_string(), raw.clone());
        }
        if let Some(key) = base_key {
            self.register(key, raw);
        }
    }

    /// Looks up a previously registered OpenAPI document by canonical URI (fragment ignored).
    pub fn resolve_open_api(&self, uri: &str) -> Option<Rc<Definition>> {
        match self.typed.borrow().get(crate::uri::without_fragment(uri)) {
            Some(TypedEntry::OpenApi(def)) => Some(def.clone()),
            _ => None,
        }
    }

    /// Looks up a previously registered schema document by canonical URI (fragment ignored).
    pub fn resolve_schema(&self, uri: &str) -> Option<Rc<SchemaDocument>> {
        match self.typed.borrow().get(crate::uri::without_fragment(uri)) {
            Some(TypedEntry::Schema(doc)) => Some(doc.clone()),
            _ => None,
        }
    }

    /// Resolves a `components.pathItems` entry from a registered document, the shape a
    /// `pathItemResolver` callback needs to satisfy OpenAPI's "Path Item reuse" story.
    pub fn path_item_resolver(&self, document_uri: &str, component_name: &str) -> Option<PathItem> {
        let def = self.resolve_open_api(document_uri)?;
        def.components.as_ref()?.path_items.get(component_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_and_looks_up_by_uri() {
        let registry = OpenApiDocumentRegistry::new();
        registry.register("https://example.com/a.json", Value::empty_map());
        assert!(registry.contains("https://example.com/a.json"));
        assert!(registry.get("https://example.com/a.json").is_some());
        assert!(registry.get("https://example.com/b.json").is_none());
    }

    #[test]
    fn registers_and_resolves_typed_open_api_document() {
        let registry = OpenApiDocumentRegistry::new();
        let mut definition = crate::parser::parse_document_string(
            r#"{"openapi":"3.2.0","info":{"title":"T","version":"1"},"paths":{}}"#,
            crate::value::Format::Json,
        )
        .unwrap();
        definition.self_uri = Some("common.json".to_string());
        registry.register_open_api(definition, Some("https://example.com/root.json"));

        let resolved = registry
            .resolve_open_api("https://example.com/common.json")
            .expect("resolves under the absolutized self URI");
        assert_eq!(resolved.info.title, "T");
        assert!(registry
            .resolve_open_api("https://example.com/root.json")
            .is_some());
    }
}
