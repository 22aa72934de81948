//! Semantic hint builder.
//!
//! Deep attribute changes (motivation, backstory, voice) cannot be fixed by
//! text substitution. Instead, the engine identifies the sections that
//! reference the entity and composes a structured instruction for the
//! generative service to reconcile them on a subsequent turn. Building a
//! hint never mutates the section store.

use saga_core::changes::{AffectedSection, ContentSection, EntityChange, SemanticPropagationHint};

use crate::matcher::{count_occurrences, word_pattern};

/// Suggested follow-up actions keyed by change type.
const SUGGESTED_ACTIONS: &[(&str, &str)] = &[
    (
        "motivation",
        "Revise this character's dialogue and behavior to reflect the new motivation.",
    ),
    (
        "role",
        "Adjust interactions and framing to match the new role.",
    ),
    (
        "description",
        "Update physical descriptions to match the new appearance.",
    ),
    (
        "backstory",
        "Revise foreshadowing and references to this character's past.",
    ),
    (
        "voice",
        "Adjust this character's speech patterns and word choice.",
    ),
    (
        "secret",
        "Update clues and hints pointing at this character's secret.",
    ),
];

/// Fallback action for change types without a dedicated suggestion.
const FALLBACK_ACTION: &str =
    "Review sections referencing this entity and update them for consistency.";

/// Build a semantic propagation hint for `change`.
///
/// Scans `sections` for word-boundary occurrences of `entity_name` (the
/// same matching rule the deterministic propagator uses, read-only) and
/// collects the referencing subset in input order, each paired with its
/// full original content.
#[must_use]
pub fn build_hint(
    change: &EntityChange,
    sections: &[ContentSection],
    entity_name: &str,
) -> SemanticPropagationHint {
    let affected_sections = match word_pattern(entity_name) {
        Some(pattern) => sections
            .iter()
            .filter(|section| count_occurrences(&pattern, &section.content) >= 1)
            .map(|section| AffectedSection {
                section_id: section.section_id.clone(),
                current_content: section.content.clone(),
            })
            .collect(),
        None => Vec::new(),
    };

    SemanticPropagationHint {
        entity_name: entity_name.to_owned(),
        change_description: describe_change(change),
        affected_sections,
        suggested_action: suggested_action(&change.change_type).to_owned(),
    }
}

/// Compose a human-readable description of the change.
fn describe_change(change: &EntityChange) -> String {
    format!(
        "{} {} changed from \"{}\" to \"{}\"",
        change.entity_type, change.change_type, change.old_value, change.new_value
    )
}

/// Look up the suggested action for a change type.
fn suggested_action(change_type: &str) -> &'static str {
    SUGGESTED_ACTIONS
        .iter()
        .find(|(key, _)| *key == change_type)
        .map_or(FALLBACK_ACTION, |(_, action)| action)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn motivation_change() -> EntityChange {
        EntityChange {
            entity_type: "character".into(),
            entity_id: "npc-1".into(),
            change_type: "motivation".into(),
            old_value: "duty".into(),
            new_value: "revenge".into(),
            additional_changes: None,
        }
    }

    fn scenario_sections() -> Vec<ContentSection> {
        vec![
            ContentSection::new("setup", "Aldric stands at the gate."),
            ContentSection::new("developments", "The passage lies open."),
            ContentSection::new("transitions", "Aldric's resolve hardens."),
        ]
    }

    #[test]
    fn collects_only_referencing_sections_in_order() {
        let hint = build_hint(&motivation_change(), &scenario_sections(), "Aldric");

        let ids: Vec<&str> = hint
            .affected_sections
            .iter()
            .map(|s| s.section_id.as_str())
            .collect();
        assert_eq!(ids, vec!["setup", "transitions"]);
    }

    #[test]
    fn affected_sections_carry_full_content() {
        let hint = build_hint(&motivation_change(), &scenario_sections(), "Aldric");
        assert_eq!(
            hint.affected_sections[0].current_content,
            "Aldric stands at the gate."
        );
    }

    #[test]
    fn word_boundary_rule_matches_propagator() {
        let sections = vec![
            ContentSection::new("a", "Aldricson waits"),
            ContentSection::new("b", "Aldric's sword"),
        ];
        let hint = build_hint(&motivation_change(), &sections, "Aldric");
        let ids: Vec<&str> = hint
            .affected_sections
            .iter()
            .map(|s| s.section_id.as_str())
            .collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn description_mentions_change_type_and_values() {
        let hint = build_hint(&motivation_change(), &[], "Aldric");
        assert_eq!(
            hint.change_description,
            "character motivation changed from \"duty\" to \"revenge\""
        );
    }

    #[test]
    fn suggested_actions_per_change_type() {
        let cases = [
            ("motivation", "dialogue and behavior"),
            ("role", "interactions and framing"),
            ("description", "physical descriptions"),
            ("backstory", "foreshadowing"),
            ("voice", "speech patterns"),
            ("secret", "clues"),
        ];
        for (change_type, expected_fragment) in cases {
            let change = EntityChange {
                change_type: change_type.into(),
                ..motivation_change()
            };
            let hint = build_hint(&change, &[], "Aldric");
            assert!(
                hint.suggested_action.contains(expected_fragment),
                "{change_type}: {}",
                hint.suggested_action
            );
        }
    }

    #[test]
    fn unknown_change_type_gets_fallback_action() {
        let change = EntityChange {
            change_type: "allegiance".into(),
            ..motivation_change()
        };
        let hint = build_hint(&change, &[], "Aldric");
        assert_eq!(hint.suggested_action, FALLBACK_ACTION);
    }

    #[test]
    fn case_sensitive_matching() {
        let sections = vec![ContentSection::new("a", "ALDRIC shouts")];
        let hint = build_hint(&motivation_change(), &sections, "Aldric");
        assert!(hint.affected_sections.is_empty());
    }

    #[test]
    fn empty_entity_name_affects_nothing() {
        let hint = build_hint(&motivation_change(), &scenario_sections(), "");
        assert!(hint.affected_sections.is_empty());
        assert_eq!(hint.entity_name, "");
    }

    #[test]
    fn never_mutates_input_sections() {
        let sections = scenario_sections();
        let before = sections.clone();
        let _ = build_hint(&motivation_change(), &sections, "Aldric");
        assert_eq!(sections, before);
    }
}
