//! Regex pattern plugin
//!
//! Offers the built-in pattern catalog as completions inside
//! JavaScript, TypeScript, and Vue documents. Every catalog entry maps
//! to exactly one suggestion, in catalog order; the plugin never
//! inspects the surrounding document text.

use crate::plugins::traits::{
    Completion, CompletionKind, CompletionProvider, LanguagePlugin, ReplaceSpan,
};
use rex_patterns::{PatternCatalog, PatternKind};

/// Regex pattern plugin
pub struct RegexPlugin {
    /// Pattern catalog, fixed at construction
    catalog: PatternCatalog,
    /// Trigger characters derived from the catalog (first char of each token)
    trigger_chars: Vec<char>,
}

impl RegexPlugin {
    /// Create a plugin over the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(PatternCatalog::builtin())
    }

    /// Create a plugin over an explicit catalog
    pub fn with_catalog(catalog: PatternCatalog) -> Self {
        let trigger_chars = catalog.trigger_characters();
        Self {
            catalog,
            trigger_chars,
        }
    }

    /// The catalog this plugin serves
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }
}

impl Default for RegexPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for RegexPlugin {
    fn name(&self) -> &str {
        "regex"
    }

    fn language_ids(&self) -> &[&str] {
        &["javascript", "typescript", "vue"]
    }

    fn file_extensions(&self) -> &[&str] {
        &[
            ".js", ".jsx", ".mjs", ".cjs", ".ts", ".tsx", ".mts", ".cts", ".vue",
        ]
    }

    fn trigger_characters(&self) -> &[char] {
        &self.trigger_chars
    }
}

impl CompletionProvider for RegexPlugin {
    fn complete(&self, _source: &str, line: u32, character: u32) -> Vec<Completion> {
        // Accepting a suggestion replaces the trigger character, i.e. the
        // single character left of the cursor (clamped at column 0).
        let span = ReplaceSpan::before_cursor(line, character);

        self.catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| Completion {
                label: entry.token.clone(),
                kind: match entry.kind {
                    PatternKind::Construct => CompletionKind::Construct,
                    PatternKind::Reference => CompletionKind::Reference,
                },
                detail: match entry.kind {
                    PatternKind::Construct => None,
                    PatternKind::Reference => Some("reference pattern".to_string()),
                },
                documentation: Some(entry.description.clone()),
                insert_text: entry.token.clone(),
                replace_span: span,
                sort_priority: idx as u32,
            })
            .collect()
    }
}
