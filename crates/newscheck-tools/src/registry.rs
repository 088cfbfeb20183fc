//! Registry of available tools.

use std::collections::HashMap;
use std::sync::Arc;

use newscheck_core::tools::Tool;

/// Registry mapping a stable tool name to its capability.
///
/// Multiple stages may hold clones referencing the same tool instances;
/// calls are always issued one at a time from within a single stage's
/// turn, so there is no tool-level concurrency control.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let _ = self.tools.insert(tool.name().to_string(), tool);
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).map(Arc::clone)
    }

    /// Whether a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Sorted tool names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// `name: description` lines for prompt rendering, sorted by name.
    pub fn catalog(&self) -> Vec<String> {
        let mut entries: Vec<String> = self
            .tools
            .values()
            .map(|t| format!("{}: {}", t.name(), t.description()))
            .collect();
        entries.sort();
        entries
    }

    /// Total tool count.
    pub fn count(&self) -> usize {
        self.tools.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use newscheck_core::tools::ToolError;

    struct DummyTool {
        name: String,
    }

    impl DummyTool {
        fn new(name: &str) -> Self {
            Self { name: name.into() }
        }
    }

    #[async_trait]
    impl Tool for DummyTool {
        fn name(&self) -> &str {
            &self.name
        }
        fn description(&self) -> &str {
            "a dummy tool"
        }
        async fn invoke(&self, _input: &str) -> Result<String, ToolError> {
            Ok("ok".into())
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool::new("Search")));

        assert!(registry.contains("Search"));
        assert!(!registry.contains("Missing"));
        assert_eq!(registry.count(), 1);
        assert!(registry.get("Search").is_some());
    }

    #[test]
    fn names_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool::new("Zeta")));
        registry.register(Arc::new(DummyTool::new("Alpha")));

        assert_eq!(registry.names(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn catalog_lines() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool::new("Search")));

        assert_eq!(registry.catalog(), vec!["Search: a dummy tool"]);
    }

    #[test]
    fn shared_instance_across_clones() {
        let mut registry = ToolRegistry::new();
        let tool: Arc<dyn Tool> = Arc::new(DummyTool::new("Search"));
        registry.register(Arc::clone(&tool));

        let cloned = registry.clone();
        assert!(Arc::ptr_eq(&cloned.get("Search").unwrap(), &tool));
    }
}
