//! mindforge MCP server entrypoint

use anyhow::Result;
use mindforge::{config::Config, server::MindForgeServer};
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    mindforge::load_env();

    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // stdout carries the MCP stream; all logging goes to stderr
    let log_level = config
        .log_level
        .as_deref()
        .unwrap_or("mindforge=info,rmcp=info");
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {} MCP server", config.descriptor.name);
    info!("Config: {}", config.config_file.display());
    info!("YAML recipes: {}", config.recipes_dir.display());

    let server = MindForgeServer::new(&config).map_err(|e| {
        eprintln!("Failed to create server: {}", e);
        e
    })?;
    info!("Loaded {} recipes", server.registry.len());

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
