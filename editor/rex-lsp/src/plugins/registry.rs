//! Plugin registry
//!
//! Manages plugin registration and routes requests to the appropriate
//! plugin by document language identifier, falling back to the file
//! extension when a client sends none.

use super::traits::CompletionPlugin;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of language plugins
pub struct PluginRegistry {
    /// Registered plugins
    plugins: Vec<Arc<dyn CompletionPlugin>>,
    /// Map from LSP language identifier to plugin index
    language_map: HashMap<String, usize>,
    /// Map from file extension to plugin index
    extension_map: HashMap<String, usize>,
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            language_map: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Register a plugin
    pub fn register<P: CompletionPlugin + 'static>(&mut self, plugin: P) {
        let idx = self.plugins.len();
        let plugin = Arc::new(plugin);

        for id in plugin.language_ids() {
            self.language_map.insert(id.to_lowercase(), idx);
        }
        for ext in plugin.file_extensions() {
            let ext = ext.trim_start_matches('.');
            self.extension_map.insert(ext.to_lowercase(), idx);
        }

        self.plugins.push(plugin);
    }

    /// Get plugin for an LSP language identifier
    pub fn plugin_for_language(&self, language_id: &str) -> Option<&Arc<dyn CompletionPlugin>> {
        let idx = self.language_map.get(&language_id.to_lowercase())?;
        self.plugins.get(*idx)
    }

    /// Get plugin for a URI string, by file extension
    pub fn plugin_for_uri(&self, uri: &str) -> Option<&Arc<dyn CompletionPlugin>> {
        let file = uri.rsplit('/').next()?;
        let ext = file.rsplit('.').next()?;
        let idx = self.extension_map.get(&ext.to_lowercase())?;
        self.plugins.get(*idx)
    }

    /// Get all registered plugins
    pub fn plugins(&self) -> &[Arc<dyn CompletionPlugin>] {
        &self.plugins
    }

    /// Check if any plugin handles the given language identifier
    pub fn supports_language(&self, language_id: &str) -> bool {
        self.language_map.contains_key(&language_id.to_lowercase())
    }

    /// Get combined trigger characters from all plugins
    pub fn all_trigger_characters(&self) -> Vec<String> {
        let mut chars: Vec<char> = self
            .plugins
            .iter()
            .flat_map(|p| p.trigger_characters().to_vec())
            .collect();
        chars.sort_unstable();
        chars.dedup();
        chars.into_iter().map(|c| c.to_string()).collect()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::regex::RegexPlugin;

    #[test]
    fn test_registry_new() {
        let registry = PluginRegistry::new();
        assert!(registry.plugins().is_empty());
        assert!(registry.all_trigger_characters().is_empty());
    }

    #[test]
    fn test_routing_by_language_id() {
        let mut registry = PluginRegistry::new();
        registry.register(RegexPlugin::new());

        assert!(registry.plugin_for_language("javascript").is_some());
        assert!(registry.plugin_for_language("typescript").is_some());
        assert!(registry.plugin_for_language("vue").is_some());
        assert!(registry.plugin_for_language("TypeScript").is_some());
    }

    #[test]
    fn test_unsupported_language_gets_nothing() {
        let mut registry = PluginRegistry::new();
        registry.register(RegexPlugin::new());

        assert!(registry.plugin_for_language("python").is_none());
        assert!(!registry.supports_language("python"));
        assert!(registry.plugin_for_uri("file:///script.py").is_none());
    }

    #[test]
    fn test_routing_by_extension() {
        let mut registry = PluginRegistry::new();
        registry.register(RegexPlugin::new());

        assert!(registry.plugin_for_uri("file:///app/main.ts").is_some());
        assert!(registry.plugin_for_uri("file:///app/Widget.vue").is_some());
        assert!(registry.plugin_for_uri("file:///app/index.JS").is_some());
    }

    #[test]
    fn test_all_trigger_characters_sorted_unique() {
        let mut registry = PluginRegistry::new();
        registry.register(RegexPlugin::new());

        let chars = registry.all_trigger_characters();
        assert!(chars.contains(&"\\".to_string()));
        assert!(chars.contains(&"(".to_string()));

        let mut sorted = chars.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(chars, sorted);
    }
}
