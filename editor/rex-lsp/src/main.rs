//! Regex pattern Language Server executable
//!
//! Entry point for the regex completion language server. Runs in stdio
//! mode for editor integration; logging goes to stderr so it cannot
//! corrupt the LSP transport.

use tower_lsp::{LspService, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use rex_lsp::{EngineConfig, LspServer, PluginRegistry, RegexPlugin};

#[tokio::main]
async fn main() {
    let config = std::env::current_dir()
        .map(|dir| EngineConfig::load_default(&dir))
        .unwrap_or_default();

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.engine.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting {}", config.engine.name);

    let mut registry = PluginRegistry::new();
    if config.plugin_enabled("regex") {
        registry.register(RegexPlugin::new());
    }

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(|client| LspServer::with_config(client, registry, config));
    Server::new(stdin, stdout, socket).serve(service).await;
}
