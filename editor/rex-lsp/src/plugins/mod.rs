//! Plugin system for rex-lsp
//!
//! This module provides the plugin architecture that allows different
//! language plugins to be registered with the LSP server.

pub mod regex;
pub mod registry;
pub mod traits;

pub use registry::PluginRegistry;
pub use traits::{
    Completion, CompletionKind, CompletionPlugin, CompletionProvider, LanguagePlugin, ReplaceSpan,
};
