//! `set_section_content` — write one content section.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use saga_consistency::{Notification, NotificationBuffer, SectionStore};
use saga_core::tools::{SagaToolResult, Tool, ToolParameterSchema, text_result};

use crate::errors::ToolError;
use crate::traits::{SagaTool, ToolContext};

/// Writes a content section and stages a section-changed notification.
pub struct SetSectionTool {
    store: Arc<SectionStore>,
    notifications: Arc<NotificationBuffer>,
}

/// Input parameters, validated on entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SetSectionParams {
    /// Scope (scene) the section belongs to.
    scene_id: String,
    /// Section to write.
    section_id: String,
    /// New section text.
    content: String,
}

impl SetSectionTool {
    /// Create the tool with its shared store and notification buffer.
    #[must_use]
    pub fn new(store: Arc<SectionStore>, notifications: Arc<NotificationBuffer>) -> Self {
        Self {
            store,
            notifications,
        }
    }
}

#[async_trait]
impl SagaTool for SetSectionTool {
    fn name(&self) -> &str {
        "set_section_content"
    }

    fn definition(&self) -> Tool {
        Tool {
            name: "set_section_content".into(),
            description: "Write the full text of one scenario section. \
                          Overwrites any existing content for that section."
                .into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "sceneId".into(),
                        json!({"type": "string", "description": "Scene the section belongs to"}),
                    );
                    let _ = m.insert(
                        "sectionId".into(),
                        json!({"type": "string", "description": "Section to write, e.g. setup"}),
                    );
                    let _ = m.insert(
                        "content".into(),
                        json!({"type": "string", "description": "Full section text"}),
                    );
                    m
                }),
                required: Some(vec!["sceneId".into(), "sectionId".into(), "content".into()]),
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
        let params: SetSectionParams = serde_json::from_value(params)
            .map_err(|e| ToolError::validation(format!("invalid set_section_content input: {e}")))?;

        if params.scene_id.is_empty() {
            return Ok(text_result("sceneId must not be empty", true));
        }
        if params.section_id.is_empty() {
            return Ok(text_result("sectionId must not be empty", true));
        }

        self.store
            .set(&params.scene_id, &params.section_id, params.content);
        self.notifications.append(Notification::SectionChanged {
            scope: params.scene_id.clone(),
            section_id: params.section_id.clone(),
        });

        debug!(
            tool_invocation_id = %ctx.tool_invocation_id,
            scene_id = %params.scene_id,
            section_id = %params.section_id,
            "section written"
        );

        Ok(text_result(
            format!("Section '{}' updated.", params.section_id),
            false,
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
