//! `update_character` — change a character's attributes and keep the rest
//! of the scenario consistent.
//!
//! Classifies the change, then:
//! - pure renames rewrite every other section by word-boundary substitution
//!   (excluding the originating section, where the edit already happened)
//! - deep attribute changes produce a semantic hint for the generative
//!   service to resolve on a later turn
//! - combined changes do both, building the hint against the post-rename
//!   sections so it references the name the text now uses

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use saga_consistency::{
    Notification, NotificationBuffer, SectionStore, build_hint, detect_propagation_type, propagate,
};
use saga_core::changes::{EntityChange, PropagationType, ValueChange};
use saga_core::tools::{SagaToolResult, Tool, ToolParameterSchema, text_result};

use crate::errors::ToolError;
use crate::traits::{SagaTool, ToolContext};

/// Applies a character change and propagates it across sections.
pub struct UpdateCharacterTool {
    store: Arc<SectionStore>,
    notifications: Arc<NotificationBuffer>,
}

/// Input parameters, validated on entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UpdateCharacterParams {
    /// Scope (scene) whose sections should stay consistent.
    scene_id: String,
    /// Identifier of the character being changed.
    character_id: String,
    /// The character's display name as it appears in section text.
    name: String,
    /// Kind of change, e.g. `rename`, `motivation`, `rename_and_role`.
    change_type: String,
    /// Value before the change.
    old_value: String,
    /// Value after the change.
    new_value: String,
    /// Section where the edit was already applied, excluded from
    /// substitution to avoid doubling it.
    #[serde(default)]
    section_id: Option<String>,
    /// Additional attribute changes bundled with this one.
    #[serde(default)]
    additional_changes: Option<HashMap<String, ValueChange>>,
}

impl UpdateCharacterTool {
    /// Create the tool with its shared store and notification buffer.
    #[must_use]
    pub fn new(store: Arc<SectionStore>, notifications: Arc<NotificationBuffer>) -> Self {
        Self {
            store,
            notifications,
        }
    }

    /// Run deterministic substitution and write the results back.
    ///
    /// Returns the number of replacements made.
    fn apply_rename(&self, params: &UpdateCharacterParams) -> usize {
        let sections = self.store.get_all(&params.scene_id);
        let result = propagate(
            &sections,
            &params.old_value,
            &params.new_value,
            params.section_id.as_deref(),
        );
        for updated in &result.updated_sections {
            self.store.set(
                &params.scene_id,
                &updated.section_id,
                updated.updated_content.clone(),
            );
            self.notifications.append(Notification::SectionChanged {
                scope: params.scene_id.clone(),
                section_id: updated.section_id.clone(),
            });
        }
        result.total_replacements
    }

    /// Build a semantic hint against the current sections and stage it.
    fn stage_hint(&self, params: &UpdateCharacterParams, entity_name: &str) -> Value {
        let change = entity_change(params);
        let sections = self.store.get_all(&params.scene_id);
        let hint = build_hint(&change, &sections, entity_name);
        self.notifications.append(Notification::SemanticHint {
            scope: params.scene_id.clone(),
            hint: hint.clone(),
        });
        json!(hint)
    }
}

/// Build the entity-change record from the validated parameters.
fn entity_change(params: &UpdateCharacterParams) -> EntityChange {
    EntityChange {
        entity_type: "character".into(),
        entity_id: params.character_id.clone(),
        change_type: params.change_type.clone(),
        old_value: params.old_value.clone(),
        new_value: params.new_value.clone(),
        additional_changes: params.additional_changes.clone(),
    }
}

#[async_trait]
impl SagaTool for UpdateCharacterTool {
    fn name(&self) -> &str {
        "update_character"
    }

    fn definition(&self) -> Tool {
        Tool {
            name: "update_character".into(),
            description: "Change a character attribute (name, motivation, role, ...) and \
                          keep every other scenario section consistent with it."
                .into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "sceneId".into(),
                        json!({"type": "string", "description": "Scene whose sections to update"}),
                    );
                    let _ = m.insert(
                        "characterId".into(),
                        json!({"type": "string", "description": "Character being changed"}),
                    );
                    let _ = m.insert(
                        "name".into(),
                        json!({"type": "string", "description": "Display name as used in section text"}),
                    );
                    let _ = m.insert(
                        "changeType".into(),
                        json!({"type": "string", "description": "rename, motivation, role, description, backstory, voice, secret, or a rename_and_* combination"}),
                    );
                    let _ = m.insert(
                        "oldValue".into(),
                        json!({"type": "string", "description": "Value before the change"}),
                    );
                    let _ = m.insert(
                        "newValue".into(),
                        json!({"type": "string", "description": "Value after the change"}),
                    );
                    let _ = m.insert(
                        "sectionId".into(),
                        json!({"type": "string", "description": "Section already edited, excluded from substitution"}),
                    );
                    let _ = m.insert(
                        "additionalChanges".into(),
                        json!({"type": "object", "description": "Bundled attribute changes, keyed by attribute"}),
                    );
                    m
                }),
                required: Some(vec![
                    "sceneId".into(),
                    "characterId".into(),
                    "name".into(),
                    "changeType".into(),
                    "oldValue".into(),
                    "newValue".into(),
                ]),
                description: None,
                extra: serde_json::Map::new(),
            },
        }
    }

    async fn execute(
        &self,
        params: Value,
        ctx: &ToolContext,
    ) -> Result<SagaToolResult, ToolError> {
        let params: UpdateCharacterParams = serde_json::from_value(params)
            .map_err(|e| ToolError::validation(format!("invalid update_character input: {e}")))?;

        if params.scene_id.is_empty() {
            return Ok(text_result("sceneId must not be empty", true));
        }
        if params.change_type.is_empty() {
            return Ok(text_result("changeType must not be empty", true));
        }

        let change = entity_change(&params);
        let propagation = detect_propagation_type(&change);
        debug!(
            tool_invocation_id = %ctx.tool_invocation_id,
            character_id = %params.character_id,
            change_type = %params.change_type,
            ?propagation,
            "character change classified"
        );

        let result = match propagation {
            PropagationType::None => text_result(
                format!(
                    "No propagation needed for '{}' ({}).",
                    params.name, params.change_type
                ),
                false,
            ),

            PropagationType::Deterministic => {
                let replacements = self.apply_rename(&params);
                SagaToolResult {
                    content: format!(
                        "Renamed '{}' to '{}' ({replacements} replacements).",
                        params.old_value, params.new_value
                    ),
                    details: Some(json!({"totalReplacements": replacements})),
                    is_error: false,
                }
            }

            PropagationType::Semantic => {
                let hint = self.stage_hint(&params, &params.name);
                SagaToolResult {
                    content: format!(
                        "Updated {} of '{}'; staged a consistency hint.",
                        params.change_type, params.name
                    ),
                    details: Some(json!({"hint": hint})),
                    is_error: false,
                }
            }

            PropagationType::Both => {
                let replacements = self.apply_rename(&params);
                // Sections now reference the new name; match the hint on it
                let hint = self.stage_hint(&params, &params.new_value);
                SagaToolResult {
                    content: format!(
                        "Renamed '{}' to '{}' ({replacements} replacements); staged a consistency hint.",
                        params.old_value, params.new_value
                    ),
                    details: Some(json!({
                        "totalReplacements": replacements,
                        "hint": hint,
                    })),
                    is_error: false,
                }
            }
        };

        info!(
            character_id = %params.character_id,
            change_type = %params.change_type,
            "character updated"
        );
        Ok(result)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
