//! Recipe definitions and the in-memory registry.
//!
//! Recipes are YAML documents describing an analytical persona, its
//! mission, and its behavioral guidance. The registry is built once at
//! startup from a directory of `*.yaml` files and is read-only afterwards;
//! every tool call operates on the same immutable mapping.

use crate::error::Result;
use crate::guidance::GuidanceNode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Filenames like `01_explore_archaeologist.yaml` carry the workflow
/// sequence as a digit prefix.
static SEQUENCE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)_").expect("valid sequence prefix regex"));

/// The analytical persona a recipe embodies
#[derive(Debug, Clone, Deserialize)]
pub struct Persona {
    pub name: String,
    pub mindset: String,
    pub philosophy: String,
    pub approach: String,
}

/// One depth variant under `mode_variants` (keyed by lite/standard/full)
#[derive(Debug, Clone, Deserialize)]
pub struct ModeVariant {
    pub description: String,
    #[serde(default)]
    pub time_estimate: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
}

/// A parsed recipe definition.
///
/// `name` is the registry key. The persona block and `core_mission` are
/// required at parse time; a file missing them is logged and skipped by the
/// loader, so renderers never see a partial definition.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeDefinition {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
    pub persona: Persona,
    pub core_mission: String,
    #[serde(default)]
    pub primary_use_cases: Option<Vec<String>>,
    #[serde(default)]
    pub when_to_use: Option<String>,
    #[serde(default)]
    pub avoid_when: Option<String>,
    #[serde(default)]
    pub typical_inputs: Option<Vec<String>>,
    #[serde(default)]
    pub output_style: Option<String>,
    #[serde(default)]
    pub output_format: Option<String>,
    #[serde(default)]
    pub mode_variants: Option<HashMap<String, ModeVariant>>,
    #[serde(default)]
    pub behavioral_guidelines: Option<GuidanceNode>,
    #[serde(default)]
    pub wisdom_notes: Option<String>,
    /// Unknown fields are preserved but unused by rendering
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Immutable mapping of recipe name -> definition, plus a side table of
/// recipe name -> originating file stem used to resolve sequence numbers
/// without rescanning the directory per call.
#[derive(Debug, Default)]
pub struct RecipeRegistry {
    recipes: HashMap<String, RecipeDefinition>,
    sources: HashMap<String, String>,
}

impl RecipeRegistry {
    /// Load every `*.yaml` recipe in `dir`.
    ///
    /// Files that fail to parse (including files without a `name` field)
    /// are logged and skipped. A missing directory yields an empty
    /// registry rather than an error so the server can still start and
    /// report an empty catalog. Files are visited in sorted name order, so
    /// a duplicate `name` deterministically resolves to the
    /// lexicographically last file (with a warning).
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut registry = Self::default();

        if !dir.is_dir() {
            warn!(
                "Recipe directory not found: {} (set MINDFORGE_YAML_DIR or create it)",
                dir.display()
            );
            return Ok(registry);
        }

        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("yaml"))
            .collect();
        paths.sort();

        for path in paths {
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(s) => s.to_string(),
                None => continue,
            };

            let parsed = std::fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|contents| {
                    serde_yaml::from_str::<RecipeDefinition>(&contents).map_err(Into::into)
                });

            match parsed {
                Ok(recipe) => {
                    if registry.recipes.contains_key(&recipe.name) {
                        warn!(
                            "Duplicate recipe name '{}' in {}; replacing earlier definition",
                            recipe.name,
                            path.display()
                        );
                    }
                    info!("Loaded {}: {}", recipe.name, recipe.title);
                    registry.sources.insert(recipe.name.clone(), stem);
                    registry.recipes.insert(recipe.name.clone(), recipe);
                }
                Err(e) => {
                    warn!("Failed to load YAML recipe from {}: {}", path.display(), e);
                }
            }
        }

        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&RecipeDefinition> {
        self.recipes.get(name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe names in sorted order (used for the tool schema enum)
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.recipes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a recipe's workflow sequence position from the digit prefix
    /// of its originating filename. Recipes loaded from files without a
    /// prefix (or unknown names) have no position.
    pub fn sequence_of(&self, name: &str) -> Option<u32> {
        let stem = self.sources.get(name)?;
        sequence_from_stem(stem)
    }

    /// Human-readable summary of the whole workflow: sequenced recipes as
    /// an arrow-joined chain in ascending order, unsequenced recipes as a
    /// trailing "Special" list.
    pub fn catalog_summary(&self) -> String {
        let mut sequenced: Vec<(u32, &str)> = Vec::new();
        let mut special: Vec<String> = Vec::new();

        for name in self.names() {
            let recipe = &self.recipes[name];
            match self.sequence_of(name) {
                Some(seq) => sequenced.push((seq, name)),
                None => special.push(format!("{} ({})", name, recipe.persona.name)),
            }
        }

        sequenced.sort_by_key(|(seq, _)| *seq);

        let workflow = sequenced
            .iter()
            .map(|(seq, name)| format!("{seq}. {name}"))
            .collect::<Vec<_>>()
            .join(" → ");

        let special = if special.is_empty() {
            String::new()
        } else {
            format!("\nSpecial: {}", special.join(", "))
        };

        format!("Sequential workflow: {workflow}{special}")
    }
}

fn sequence_from_stem(stem: &str) -> Option<u32> {
    SEQUENCE_PREFIX
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, persona_name: &str) -> RecipeDefinition {
        serde_yaml::from_str(&format!(
            r#"
name: {name}
title: Test {name}
persona:
  name: {persona_name}
  mindset: curious
  philosophy: look twice
  approach: methodical
core_mission: test mission
"#
        ))
        .unwrap()
    }

    fn registry_with(entries: &[(&str, &str, &str)]) -> RecipeRegistry {
        let mut registry = RecipeRegistry::default();
        for (name, persona_name, stem) in entries {
            registry
                .recipes
                .insert(name.to_string(), recipe(name, persona_name));
            registry
                .sources
                .insert(name.to_string(), stem.to_string());
        }
        registry
    }

    #[test]
    fn sequence_prefix_parses_leading_digits() {
        assert_eq!(sequence_from_stem("01_explore_archaeologist"), Some(1));
        assert_eq!(sequence_from_stem("14_validate"), Some(14));
        assert_eq!(sequence_from_stem("audit"), None);
        assert_eq!(sequence_from_stem("7validate"), None);
        assert_eq!(sequence_from_stem("_01_x"), None);
    }

    #[test]
    fn sequence_of_unknown_recipe_is_none() {
        let registry = RecipeRegistry::default();
        assert_eq!(registry.sequence_of("nope"), None);
    }

    #[test]
    fn catalog_summary_orders_chain_and_appends_special() {
        let registry = registry_with(&[
            ("build", "The Builder", "09_build"),
            ("ideate", "The Ideator", "02_ideate"),
            ("audit", "The Auditor", "audit"),
        ]);

        assert_eq!(
            registry.catalog_summary(),
            "Sequential workflow: 2. ideate → 9. build\nSpecial: audit (The Auditor)"
        );
    }

    #[test]
    fn catalog_summary_without_special_has_no_trailer() {
        let registry = registry_with(&[("explore", "The Archaeologist", "01_explore")]);
        assert_eq!(
            registry.catalog_summary(),
            "Sequential workflow: 1. explore"
        );
    }

    #[test]
    fn catalog_summary_is_deterministic() {
        let registry = registry_with(&[
            ("build", "The Builder", "09_build"),
            ("ideate", "The Ideator", "02_ideate"),
            ("audit", "The Auditor", "audit"),
            ("meta", "The Meta", "meta"),
        ]);
        let first = registry.catalog_summary();
        for _ in 0..10 {
            assert_eq!(registry.catalog_summary(), first);
        }
    }

    #[test]
    fn names_are_sorted() {
        let registry = registry_with(&[
            ("zeta", "Z", "03_zeta"),
            ("alpha", "A", "01_alpha"),
        ]);
        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
    }
}
