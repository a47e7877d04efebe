//! Server module containing the MindForgeServer implementation

use crate::config::Config;
use crate::error::Result;
use crate::recipes::RecipeRegistry;
use std::sync::Arc;

// Submodules
pub mod router;

/// Main MindForge server implementation.
///
/// The registry is built once here and never mutated afterwards; handlers
/// only ever read from it, so the server clones freely across requests.
#[derive(Clone)]
pub struct MindForgeServer {
    pub registry: Arc<RecipeRegistry>,
    pub config: Arc<Config>, // Retain config to avoid future env reads
}

impl MindForgeServer {
    /// Create a server by loading every recipe under the configured
    /// directory.
    pub fn new(config: &Config) -> Result<Self> {
        let registry = RecipeRegistry::load_from_dir(&config.recipes_dir)?;
        Ok(Self {
            registry: Arc::new(registry),
            config: Arc::new(config.clone()),
        })
    }
}
