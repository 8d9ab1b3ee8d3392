//! Regex pattern completion Language Server
//!
//! A generic LSP engine with a plugin architecture. The regex plugin
//! offers a fixed catalog of regular expression tokens and reference
//! patterns as completions inside JavaScript, TypeScript, and Vue
//! documents.
//!
//! # Architecture
//!
//! The server is built with a plugin system:
//!
//! - **Engine**: Generic LSP server that delegates to plugins
//! - **Plugins**: Language-specific completion providers (e.g., regex)
//! - **Config**: YAML-based configuration
//!
//! # Usage
//!
//! Run the language server via stdio:
//!
//! ```bash
//! rex-lsp
//! ```
//!
//! # Configuration
//!
//! Create a `.rex-lsp.yaml` in your workspace root:
//!
//! ```yaml
//! engine:
//!   name: rex-lsp
//!   log_level: info
//!
//! plugins:
//!   enabled:
//!     - regex
//! ```

pub mod engine;
pub mod plugins;

pub use engine::{DocumentManager, EngineConfig, LspServer};
pub use plugins::regex::RegexPlugin;
pub use plugins::PluginRegistry;
