//! Generic LSP server implementation
//!
//! This server delegates to registered plugins based on the document's
//! language identifier.

use super::config::EngineConfig;
use super::convert;
use super::document::DocumentManager;
use crate::plugins::{CompletionPlugin, PluginRegistry};
use std::sync::Arc;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

/// Generic Language Server
pub struct LspServer {
    /// LSP client for sending notifications
    client: Client,
    /// Document manager
    documents: DocumentManager,
    /// Plugin registry
    plugins: Arc<PluginRegistry>,
    /// Engine configuration
    config: EngineConfig,
}

impl LspServer {
    /// Create a new LSP server with the given plugins
    pub fn new(client: Client, plugins: PluginRegistry) -> Self {
        Self::with_config(client, plugins, EngineConfig::default())
    }

    /// Create with configuration
    pub fn with_config(client: Client, plugins: PluginRegistry, config: EngineConfig) -> Self {
        Self {
            client,
            documents: DocumentManager::new(),
            plugins: Arc::new(plugins),
            config,
        }
    }

    /// Resolve the plugin for an open document: language identifier first,
    /// file extension as fallback for clients that sent none.
    fn plugin_for_document(&self, uri: &Url, language_id: &str) -> Option<Arc<dyn CompletionPlugin>> {
        self.plugins
            .plugin_for_language(language_id)
            .or_else(|| self.plugins.plugin_for_uri(uri.as_str()))
            .cloned()
    }
}

/// Server capabilities based on the registered plugins
pub fn capabilities(plugins: &PluginRegistry) -> ServerCapabilities {
    let trigger_chars = plugins.all_trigger_characters();

    ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Options(
            TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::FULL),
                will_save: None,
                will_save_wait_until: None,
                save: None,
            },
        )),

        completion_provider: Some(CompletionOptions {
            trigger_characters: if trigger_chars.is_empty() {
                None
            } else {
                Some(trigger_chars)
            },
            resolve_provider: Some(false),
            work_done_progress_options: WorkDoneProgressOptions::default(),
            all_commit_characters: None,
            completion_item: None,
        }),

        ..ServerCapabilities::default()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for LspServer {
    async fn initialize(&self, _params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("{} initializing", self.config.engine.name);

        Ok(InitializeResult {
            capabilities: capabilities(&self.plugins),
            server_info: Some(ServerInfo {
                name: self.config.engine.name.clone(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("{} initialized", self.config.engine.name);
        self.client
            .log_message(
                MessageType::INFO,
                format!("{} ready", self.config.engine.name),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("{} shutting down", self.config.engine.name);
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;

        tracing::debug!("Document opened: {} ({})", doc.uri, doc.language_id);
        self.documents
            .open(doc.uri, doc.language_id, doc.text, doc.version);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        if let Some(change) = params.content_changes.into_iter().next() {
            self.documents.update(&uri, change.text, version);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::debug!("Document closed: {}", uri);
        self.documents.close(&uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };

        if let Some(plugin) = self.plugin_for_document(uri, &doc.language_id) {
            let completions =
                plugin.complete(&doc.content, position.line, position.character);

            let items: Vec<_> = completions.iter().map(convert::to_lsp_completion).collect();

            return Ok(Some(CompletionResponse::Array(items)));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::regex::RegexPlugin;

    #[test]
    fn test_capabilities_empty_registry() {
        let caps = capabilities(&PluginRegistry::new());
        let completion = caps.completion_provider.unwrap();
        assert!(completion.trigger_characters.is_none());
    }

    #[test]
    fn test_capabilities_advertise_triggers() {
        let mut registry = PluginRegistry::new();
        registry.register(RegexPlugin::new());

        let caps = capabilities(&registry);
        let completion = caps.completion_provider.unwrap();
        let triggers = completion.trigger_characters.unwrap();
        assert!(triggers.contains(&"\\".to_string()));
        assert!(triggers.contains(&"{".to_string()));
    }

    #[test]
    fn test_capabilities_full_text_sync() {
        let caps = capabilities(&PluginRegistry::new());
        match caps.text_document_sync {
            Some(TextDocumentSyncCapability::Options(options)) => {
                assert_eq!(options.change, Some(TextDocumentSyncKind::FULL));
                assert_eq!(options.open_close, Some(true));
            }
            other => panic!("expected sync options, got {:?}", other),
        }
    }

    #[test]
    fn test_no_stray_capabilities() {
        let caps = capabilities(&PluginRegistry::new());
        assert!(caps.hover_provider.is_none());
        assert!(caps.document_symbol_provider.is_none());
        assert!(caps.document_formatting_provider.is_none());
    }
}
