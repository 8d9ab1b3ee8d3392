//! Configuration loading for the LSP engine
//!
//! Loads settings from YAML configuration files. A missing or unreadable
//! file never fails startup; the engine falls back to defaults.

use serde::Deserialize;
use std::path::Path;

/// Main engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EngineConfig {
    /// Engine settings
    pub engine: EngineSettings,
    /// Plugin settings
    pub plugins: PluginSettings,
}

/// Core engine settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Server name
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Plugin configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Enabled plugins (empty = all)
    pub enabled: Vec<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            name: "rex-lsp".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from default locations
    pub fn load_default(workspace_root: &Path) -> Self {
        let candidates = [
            workspace_root.join(".rex-lsp.yaml"),
            workspace_root.join(".rex-lsp.yml"),
            workspace_root.join("rex-lsp.yaml"),
            workspace_root.join("rex-lsp.yml"),
        ];

        for candidate in &candidates {
            if candidate.exists() {
                if let Ok(config) = Self::load(candidate) {
                    return config;
                }
            }
        }

        Self::default()
    }

    /// Check whether a plugin is enabled (empty list enables all)
    pub fn plugin_enabled(&self, name: &str) -> bool {
        self.plugins.enabled.is_empty() || self.plugins.enabled.iter().any(|p| p == name)
    }
}
