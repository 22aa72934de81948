//! Tool registry — central index of all registered tools.
//!
//! The [`ToolRegistry`] maps tool names to their [`SagaTool`] implementations.
//! The runtime registers tools at startup and queries the registry to
//! dispatch invocations and to generate the service's tool schema.
//!
//! This is an explicit instance, constructed once per server process or per
//! test. Multiple independent registries (one per adventure stage) coexist
//! without sharing state; `clear()` only ever resets the instance it is
//! called on.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use saga_core::tools::Tool;

use crate::traits::SagaTool;

/// Central registry mapping tool names to their implementations.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn SagaTool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Overwrites any existing tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn SagaTool>) {
        debug!(tool_name = tool.name(), "tool registered");
        let _ = self.tools.insert(tool.name().to_owned(), tool);
    }

    /// Look up a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn SagaTool>> {
        self.tools.get(name).cloned()
    }

    /// Return all tool schemas for the generative service.
    #[must_use]
    pub fn definitions(&self) -> Vec<Tool> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Return all tool names, sorted alphabetically.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Remove a tool by name, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn SagaTool>> {
        self.tools.remove(name)
    }

    /// Whether a tool with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Remove all registrations.
    pub fn clear(&mut self) {
        self.tools.clear();
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::Value;

    use saga_core::tools::{SagaToolResult, ToolParameterSchema, text_result};

    use super::*;
    use crate::errors::ToolError;
    use crate::traits::ToolContext;

    /// Minimal stub tool for registry tests.
    struct StubTool {
        tool_name: String,
    }

    impl StubTool {
        fn new(name: &str) -> Self {
            Self {
                tool_name: name.into(),
            }
        }
    }

    #[async_trait]
    impl SagaTool for StubTool {
        fn name(&self) -> &str {
            &self.tool_name
        }

        fn definition(&self) -> Tool {
            Tool {
                name: self.tool_name.clone(),
                description: format!("Stub {}", self.tool_name),
                parameters: ToolParameterSchema::empty_object(),
            }
        }

        async fn execute(
            &self,
            _params: Value,
            _ctx: &ToolContext,
        ) -> Result<SagaToolResult, ToolError> {
            Ok(text_result("ok", false))
        }
    }

    #[test]
    fn new_creates_empty_registry() {
        let reg = ToolRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn register_and_get() {
        let mut reg = ToolRegistry::new();
        reg.register(Arc::new(StubTool::new("set_section_content")));
        let tool = reg.get("set_section_content");
        assert!(tool.is_some());
        assert_eq!(tool.unwrap().name(), "set_section_content");
    }

    #[test]
    fn get_unknown_returns_none() {
        let reg = ToolRegistry::new();
        assert!(reg.get("nonexistent").is_none());
    }

    #[test]
    fn register_duplicate_overwrites() {
        let mut reg = ToolRegistry::new();
        reg.register(Arc::new(StubTool::new("set_section_content")));
        reg.register(Arc::new(StubTool::new("set_section_content")));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn definitions_returns_schemas() {
        let mut reg = ToolRegistry::new();
        reg.register(Arc::new(StubTool::new("set_section_content")));
        reg.register(Arc::new(StubTool::new("update_character")));
        let defs = reg.definitions();
        assert_eq!(defs.len(), 2);
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert!(names.contains(&"set_section_content"));
        assert!(names.contains(&"update_character"));
    }

    #[test]
    fn names_returns_sorted() {
        let mut reg = ToolRegistry::new();
        reg.register(Arc::new(StubTool::new("update_character")));
        reg.register(Arc::new(StubTool::new("advance_scene")));
        reg.register(Arc::new(StubTool::new("set_section_content")));
        assert_eq!(
            reg.names(),
            vec!["advance_scene", "set_section_content", "update_character"]
        );
    }

    #[test]
    fn remove_existing_returns_some() {
        let mut reg = ToolRegistry::new();
        reg.register(Arc::new(StubTool::new("set_section_content")));
        let removed = reg.remove("set_section_content");
        assert!(removed.is_some());
        assert!(reg.is_empty());
    }

    #[test]
    fn remove_unknown_returns_none() {
        let mut reg = ToolRegistry::new();
        assert!(reg.remove("nonexistent").is_none());
    }

    #[test]
    fn contains_true_and_false() {
        let mut reg = ToolRegistry::new();
        reg.register(Arc::new(StubTool::new("set_section_content")));
        assert!(reg.contains("set_section_content"));
        assert!(!reg.contains("update_character"));
    }

    #[test]
    fn clear_resets_registrations() {
        let mut reg = ToolRegistry::new();
        reg.register(Arc::new(StubTool::new("set_section_content")));
        reg.register(Arc::new(StubTool::new("update_character")));
        reg.clear();
        assert!(reg.is_empty());
        assert!(!reg.contains("set_section_content"));
    }

    #[test]
    fn independent_registries_do_not_share_state() {
        let mut one = ToolRegistry::new();
        let mut two = ToolRegistry::new();
        one.register(Arc::new(StubTool::new("set_section_content")));
        two.register(Arc::new(StubTool::new("update_character")));
        one.clear();
        assert!(one.is_empty());
        assert!(two.contains("update_character"));
    }
}
