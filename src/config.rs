//! Typed configuration for the mindforge server.
//!
//! Two sources feed into [`Config`]:
//! - environment variables (`MINDFORGE_YAML_DIR`, `MINDFORGE_CONFIG`,
//!   `MINDFORGE_LOG`), each falling back to a relative default
//! - an optional descriptive JSON file (`mindforge-config.json`) whose
//!   absence or unreadability never aborts startup

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

const DEFAULT_RECIPES_DIR: &str = "recipes";
const DEFAULT_CONFIG_FILE: &str = "mindforge-config.json";

/// Main configuration loaded at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for `*.yaml` recipe definitions
    pub recipes_dir: PathBuf,
    /// Path of the descriptive JSON config file
    pub config_file: PathBuf,
    /// Descriptive metadata surfaced through the MCP server info
    pub descriptor: Descriptor,
    /// Env-filter directive for tracing
    pub log_level: Option<String>,
}

/// Descriptive metadata about this MindForge deployment.
///
/// Loaded from the JSON config file; any failure falls back to
/// [`Descriptor::default`] so the server always starts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Descriptor {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub workflow: Option<serde_json::Value>,
    #[serde(default)]
    pub usage_guidelines: Option<serde_json::Value>,
    #[serde(default)]
    pub integration_notes: Option<serde_json::Value>,
}

/// Wrapper matching the on-disk layout: `{ "mindforge": { ... } }`
#[derive(Debug, Deserialize)]
struct DescriptorFile {
    mindforge: Descriptor,
}

impl Default for Descriptor {
    fn default() -> Self {
        Self {
            name: "MindForge".to_string(),
            description: "Recipe-based AI development assistant".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            workflow: None,
            usage_guidelines: None,
            integration_notes: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables and the descriptive
    /// config file.
    pub fn load() -> Result<Self> {
        let recipes_dir = std::env::var("MINDFORGE_YAML_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_RECIPES_DIR));
        let config_file = std::env::var("MINDFORGE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let log_level = std::env::var("MINDFORGE_LOG").ok();

        let descriptor = load_descriptor(&config_file);

        Ok(Self {
            recipes_dir,
            config_file,
            descriptor,
            log_level,
        })
    }
}

fn load_descriptor(path: &Path) -> Descriptor {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<DescriptorFile>(&contents) {
            Ok(file) => file.mindforge,
            Err(e) => {
                warn!("Failed to parse MindForge configuration {}: {}", path.display(), e);
                Descriptor::default()
            }
        },
        // Missing file is the common case for fresh installs
        Err(_) => Descriptor::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_defaults_when_file_missing() {
        let descriptor = load_descriptor(Path::new("does-not-exist/mindforge-config.json"));
        assert_eq!(descriptor.name, "MindForge");
        assert_eq!(descriptor.description, "Recipe-based AI development assistant");
    }

    #[test]
    fn descriptor_parses_wrapped_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mindforge-config.json");
        std::fs::write(
            &path,
            r#"{"mindforge": {"name": "Forge", "description": "test", "version": "9.9.9"}}"#,
        )
        .unwrap();

        let descriptor = load_descriptor(&path);
        assert_eq!(descriptor.name, "Forge");
        assert_eq!(descriptor.version, "9.9.9");
    }

    #[test]
    fn descriptor_defaults_on_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mindforge-config.json");
        std::fs::write(&path, "not json at all").unwrap();

        let descriptor = load_descriptor(&path);
        assert_eq!(descriptor.name, "MindForge");
    }
}
