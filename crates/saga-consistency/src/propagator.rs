//! Deterministic propagator — mechanical rename substitution.
//!
//! Given an old and new entity name, rewrites every section that references
//! the old name by whole-word literal match, reporting per-section counts.
//! The originating section (where the edit was already applied) can be
//! excluded to avoid double substitution.

use tracing::debug;

use saga_core::changes::{ContentSection, DeterministicPropagationResult, UpdatedSection};

use crate::matcher::{count_occurrences, word_pattern};

/// Replace `old_name` with `new_name` across `sections`.
///
/// Sections with zero matches are omitted from the result entirely, and the
/// sum of per-section counts always equals `total_replacements`. A no-op
/// rename (`old_name == new_name`), an empty name, or an empty section list
/// yields an empty result rather than an error.
#[must_use]
pub fn propagate(
    sections: &[ContentSection],
    old_name: &str,
    new_name: &str,
    exclude_section_id: Option<&str>,
) -> DeterministicPropagationResult {
    if old_name == new_name {
        return DeterministicPropagationResult::default();
    }
    let Some(pattern) = word_pattern(old_name) else {
        return DeterministicPropagationResult::default();
    };

    let mut result = DeterministicPropagationResult::default();

    for section in sections {
        if exclude_section_id == Some(section.section_id.as_str()) {
            continue;
        }
        let count = count_occurrences(&pattern, &section.content);
        if count == 0 {
            continue;
        }
        // NoExpand: the replacement is a literal name, never a capture template
        let updated_content = pattern
            .replace_all(&section.content, regex::NoExpand(new_name))
            .into_owned();
        result.updated_sections.push(UpdatedSection {
            section_id: section.section_id.clone(),
            updated_content,
            replacement_count: count,
        });
        result.total_replacements += count;
    }

    debug!(
        old_name,
        new_name,
        sections_updated = result.updated_sections.len(),
        total_replacements = result.total_replacements,
        "deterministic propagation"
    );

    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
