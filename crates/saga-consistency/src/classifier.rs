//! Change classifier — maps an entity change to a propagation strategy.
//!
//! Table-driven: new change types are added to one of the const sets below
//! without touching the rule evaluation itself.

use saga_core::changes::{EntityChange, PropagationType};

/// Change types that bundle a rename with another attribute change.
const COMBINED_CHANGE_TYPES: &[&str] = &[
    "rename_and_role",
    "rename_and_motivation",
    "rename_and_description",
];

/// Change types that are pure renames, safe for mechanical substitution.
const DETERMINISTIC_CHANGE_TYPES: &[&str] = &["rename"];

/// Deep attribute changes the generative service must reconcile itself.
const SEMANTIC_CHANGE_TYPES: &[&str] = &[
    "motivation",
    "role",
    "description",
    "backstory",
    "voice",
    "secret",
    "personality",
    "relationship",
];

/// Classify an entity change into a propagation strategy.
///
/// Pure and total: never fails, and the same change always classifies the
/// same way. Ordered rule evaluation, first match wins:
///
/// 1. Identical values with nothing bundled → [`PropagationType::None`]
/// 2. Combined set → [`PropagationType::Both`]
/// 3. Deterministic set → [`PropagationType::Deterministic`]
/// 4. Semantic set → [`PropagationType::Semantic`]
/// 5. Anything else → [`PropagationType::None`] (unknown types are no-ops,
///    not errors)
#[must_use]
pub fn detect_propagation_type(change: &EntityChange) -> PropagationType {
    let no_additional = change
        .additional_changes
        .as_ref()
        .is_none_or(std::collections::HashMap::is_empty);

    if change.old_value == change.new_value && no_additional {
        return PropagationType::None;
    }

    let change_type = change.change_type.as_str();
    if COMBINED_CHANGE_TYPES.contains(&change_type) {
        PropagationType::Both
    } else if DETERMINISTIC_CHANGE_TYPES.contains(&change_type) {
        PropagationType::Deterministic
    } else if SEMANTIC_CHANGE_TYPES.contains(&change_type) {
        PropagationType::Semantic
    } else {
        PropagationType::None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;
    use saga_core::changes::ValueChange;

    use super::*;

    fn change(change_type: &str, old: &str, new: &str) -> EntityChange {
        EntityChange {
            entity_type: "character".into(),
            entity_id: "npc-1".into(),
            change_type: change_type.into(),
            old_value: old.into(),
            new_value: new.into(),
            additional_changes: None,
        }
    }

    #[test]
    fn rename_is_deterministic() {
        assert_eq!(
            detect_propagation_type(&change("rename", "Aldric", "Theron")),
            PropagationType::Deterministic
        );
    }

    #[test]
    fn combined_change_is_both() {
        assert_eq!(
            detect_propagation_type(&change("rename_and_role", "Aldric", "Theron")),
            PropagationType::Both
        );
    }

    #[test]
    fn motivation_is_semantic() {
        assert_eq!(
            detect_propagation_type(&change("motivation", "duty", "revenge")),
            PropagationType::Semantic
        );
        assert_eq!(
            detect_propagation_type(&change("backstory", "farmer", "deserter")),
            PropagationType::Semantic
        );
        assert_eq!(
            detect_propagation_type(&change("secret", "none", "is the heir")),
            PropagationType::Semantic
        );
    }

    #[test]
    fn identical_values_are_none() {
        // Identical values submitted twice are a no-op even for a rename
        assert_eq!(
            detect_propagation_type(&change("rename", "Aldric", "Aldric")),
            PropagationType::None
        );
    }

    #[test]
    fn identical_values_with_additional_changes_still_classify() {
        let mut extra = HashMap::new();
        let _ = extra.insert(
            "role".into(),
            ValueChange {
                old: "guard".into(),
                new: "captain".into(),
            },
        );
        let c = EntityChange {
            additional_changes: Some(extra),
            ..change("rename_and_role", "Aldric", "Aldric")
        };
        assert_eq!(detect_propagation_type(&c), PropagationType::Both);
    }

    #[test]
    fn empty_additional_changes_counts_as_absent() {
        let c = EntityChange {
            additional_changes: Some(HashMap::new()),
            ..change("rename", "Aldric", "Aldric")
        };
        assert_eq!(detect_propagation_type(&c), PropagationType::None);
    }

    #[test]
    fn unrecognized_change_type_is_none() {
        assert_eq!(
            detect_propagation_type(&change("theme_song", "dirge", "march")),
            PropagationType::None
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let c = change("motivation", "duty", "revenge");
        assert_eq!(detect_propagation_type(&c), detect_propagation_type(&c));
    }

    proptest! {
        // Total over arbitrary inputs: never panics, always deterministic
        #[test]
        fn total_and_pure(
            change_type in ".{0,24}",
            old in ".{0,24}",
            new in ".{0,24}",
        ) {
            let c = change(&change_type, &old, &new);
            let first = detect_propagation_type(&c);
            let second = detect_propagation_type(&c);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn identical_values_without_extras_always_none(value in ".{0,24}") {
            let c = change("rename", &value, &value);
            prop_assert_eq!(detect_propagation_type(&c), PropagationType::None);
        }
    }
}
