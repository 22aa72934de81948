//! Entity-change records and propagation result types.
//!
//! When a tool handler mutates a named entity (renames a character, rewrites
//! a motivation), other document sections that reference it drift. These
//! types describe the observed change and the two ways the consistency
//! engine keeps sections aligned: mechanical substitution and structured
//! hints for the generative service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Content sections
// ─────────────────────────────────────────────────────────────────────────────

/// A named unit of document content within a scope (e.g. a scene).
///
/// Mutated by tool handlers, read by propagators. No history is retained;
/// last write wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    /// Section identifier, unique within its scope.
    pub section_id: String,
    /// Section text.
    pub content: String,
}

impl ContentSection {
    /// Create a new section.
    #[must_use]
    pub fn new(section_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            content: content.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entity changes
// ─────────────────────────────────────────────────────────────────────────────

/// One old/new value pair inside a bundled change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChange {
    /// Value before the change.
    pub old: String,
    /// Value after the change.
    pub new: String,
}

/// One observed mutation to a named entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityChange {
    /// Kind of entity (e.g. `character`, `location`).
    pub entity_type: String,
    /// Entity identifier.
    pub entity_id: String,
    /// Kind of change (e.g. `rename`, `motivation`, `rename_and_role`).
    pub change_type: String,
    /// Value before the change.
    pub old_value: String,
    /// Value after the change.
    pub new_value: String,
    /// Additional attribute changes bundled with this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_changes: Option<HashMap<String, ValueChange>>,
}

/// Propagation strategy derived from an [`EntityChange`].
///
/// Derived, never stored: [`detect`](crate::changes) classification is a
/// pure function of the change record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationType {
    /// Safe mechanical text substitution (pure renames).
    Deterministic,
    /// Structured hint for the generative service to reconcile.
    Semantic,
    /// Rename bundled with a deeper attribute change.
    Both,
    /// No propagation required.
    None,
}

// ─────────────────────────────────────────────────────────────────────────────
// Propagation results
// ─────────────────────────────────────────────────────────────────────────────

/// A section rewritten by deterministic propagation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedSection {
    /// Section identifier.
    pub section_id: String,
    /// Content after substitution.
    pub updated_content: String,
    /// Number of replacements made in this section. Always ≥ 1.
    pub replacement_count: usize,
}

/// Outcome of a deterministic propagation pass.
///
/// `total_replacements` always equals the sum of the per-section counts;
/// sections with zero matches are omitted entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeterministicPropagationResult {
    /// Sections that contained at least one match.
    pub updated_sections: Vec<UpdatedSection>,
    /// Sum of all per-section replacement counts.
    pub total_replacements: usize,
}

/// A section referencing the changed entity, paired with its full content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedSection {
    /// Section identifier.
    pub section_id: String,
    /// The section's original content, unexcerpted.
    pub current_content: String,
}

/// Structured instruction for the generative service to reconcile a deep
/// attribute change in the sections that reference the entity.
///
/// Advisory only: building a hint never mutates the section store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticPropagationHint {
    /// The entity's display name as it appears in section text.
    pub entity_name: String,
    /// Human-readable description of what changed.
    pub change_description: String,
    /// Sections referencing the entity, in input order.
    pub affected_sections: Vec<AffectedSection>,
    /// What the service should do about it.
    pub suggested_action: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
