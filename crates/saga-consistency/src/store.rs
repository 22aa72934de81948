//! Content section store.
//!
//! Keyed storage of `(scope, section_id) -> text` with overwrite semantics.
//! Written by tool handlers, read by propagators. Sections are never deleted
//! by this core; deletion, if any, belongs to the persistence collaborator.
//!
//! The store is shared across handlers within one dispatch call via `Arc`.
//! Interior locking exists only for that shared ownership — dispatch is
//! strictly sequential, so writes from handler *i* are visible to handler
//! *i+1* without any further coordination.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::collections::HashMap;

use saga_core::changes::ContentSection;

/// Keyed storage of scenario content sections.
///
/// Per-scope iteration order is first-write order; overwriting a section
/// keeps its original position.
#[derive(Debug, Default)]
pub struct SectionStore {
    scopes: RwLock<HashMap<String, IndexMap<String, String>>>,
}

impl SectionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a section's content, if present.
    #[must_use]
    pub fn get(&self, scope: &str, section_id: &str) -> Option<String> {
        self.scopes
            .read()
            .get(scope)
            .and_then(|sections| sections.get(section_id).cloned())
    }

    /// Write a section. Creates it on first write, overwrites afterwards.
    pub fn set(&self, scope: &str, section_id: &str, content: impl Into<String>) {
        let mut scopes = self.scopes.write();
        let sections = scopes.entry(scope.to_owned()).or_default();
        let _ = sections.insert(section_id.to_owned(), content.into());
    }

    /// All sections in a scope, in first-write order.
    ///
    /// Unknown scopes yield an empty list.
    #[must_use]
    pub fn get_all(&self, scope: &str) -> Vec<ContentSection> {
        self.scopes.read().get(scope).map_or_else(Vec::new, |sections| {
            sections
                .iter()
                .map(|(id, content)| ContentSection::new(id.clone(), content.clone()))
                .collect()
        })
    }

    /// Number of sections in a scope.
    #[must_use]
    pub fn len(&self, scope: &str) -> usize {
        self.scopes.read().get(scope).map_or(0, IndexMap::len)
    }

    /// Whether a scope has no sections.
    #[must_use]
    pub fn is_empty(&self, scope: &str) -> bool {
        self.len(scope) == 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
