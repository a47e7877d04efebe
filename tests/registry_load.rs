//! Integration tests for recipe loading and the registry side table.

use mindforge::recipes::RecipeRegistry;
use std::path::Path;
use tempfile::TempDir;

fn write_recipe(dir: &Path, filename: &str, name: &str, title: &str) {
    let yaml = format!(
        r#"
name: {name}
title: {title}
persona:
  name: The {title}
  mindset: inquisitive
  philosophy: assume nothing
  approach: bottom-up
core_mission: Understand the system before changing it.
"#
    );
    std::fs::write(dir.join(filename), yaml).unwrap();
}

#[test]
fn loads_recipes_keyed_by_name_field() {
    let dir = TempDir::new().unwrap();
    write_recipe(dir.path(), "01_explore_archaeologist.yaml", "archaeologist", "Archaeologist");
    write_recipe(dir.path(), "02_ideate.yaml", "ideate", "Ideator");

    let registry = RecipeRegistry::load_from_dir(dir.path()).unwrap();

    assert_eq!(registry.len(), 2);
    let recipe = registry.get("archaeologist").expect("keyed by name, not filename");
    assert_eq!(recipe.title, "Archaeologist");
    assert!(registry.get("01_explore_archaeologist").is_none());
}

#[test]
fn sequence_resolves_from_source_filename() {
    let dir = TempDir::new().unwrap();
    write_recipe(dir.path(), "01_explore_archaeologist.yaml", "archaeologist", "Archaeologist");
    write_recipe(dir.path(), "09_build.yaml", "build", "Builder");
    write_recipe(dir.path(), "audit.yaml", "audit", "Auditor");

    let registry = RecipeRegistry::load_from_dir(dir.path()).unwrap();

    assert_eq!(registry.sequence_of("archaeologist"), Some(1));
    assert_eq!(registry.sequence_of("build"), Some(9));
    assert_eq!(registry.sequence_of("audit"), None);
    assert_eq!(registry.sequence_of("unknown"), None);
}

#[test]
fn catalog_summary_chains_sequenced_and_lists_special() {
    let dir = TempDir::new().unwrap();
    write_recipe(dir.path(), "02_ideate.yaml", "ideate", "Ideator");
    write_recipe(dir.path(), "09_build.yaml", "build", "Builder");
    write_recipe(dir.path(), "audit.yaml", "audit", "Auditor");

    let registry = RecipeRegistry::load_from_dir(dir.path()).unwrap();

    assert_eq!(
        registry.catalog_summary(),
        "Sequential workflow: 2. ideate → 9. build\nSpecial: audit (The Auditor)"
    );
}

#[test]
fn file_without_name_field_is_skipped() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("nameless.yaml"),
        "title: No Name\ncore_mission: missing its key\n",
    )
    .unwrap();
    write_recipe(dir.path(), "01_explore.yaml", "explore", "Explorer");

    let registry = RecipeRegistry::load_from_dir(dir.path()).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.get("explore").is_some());
}

#[test]
fn unparseable_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("broken.yaml"), "name: [unclosed\n  - bad").unwrap();
    write_recipe(dir.path(), "03_refine.yaml", "refine", "Refiner");

    let registry = RecipeRegistry::load_from_dir(dir.path()).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.get("refine").is_some());
}

#[test]
fn duplicate_name_last_loaded_wins() {
    let dir = TempDir::new().unwrap();
    write_recipe(dir.path(), "aa_first.yaml", "dup", "First");
    write_recipe(dir.path(), "zz_second.yaml", "dup", "Second");

    let registry = RecipeRegistry::load_from_dir(dir.path()).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("dup").unwrap().title, "Second");
}

#[test]
fn non_yaml_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_recipe(dir.path(), "01_explore.yaml", "explore", "Explorer");
    std::fs::write(dir.path().join("README.md"), "# not a recipe").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "scratch").unwrap();

    let registry = RecipeRegistry::load_from_dir(dir.path()).unwrap();

    assert_eq!(registry.len(), 1);
}

#[test]
fn missing_directory_yields_empty_registry() {
    let registry =
        RecipeRegistry::load_from_dir(Path::new("does-not-exist/recipes")).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.catalog_summary(), "Sequential workflow: ");
}

#[test]
fn optional_fields_survive_loading() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("04_design.yaml"),
        r#"
name: design
title: Designer
persona:
  name: The Designer
  mindset: structural
  philosophy: boundaries first
  approach: outside-in
core_mission: Shape the architecture.
primary_use_cases:
  - new subsystems
  - API boundaries
mode_variants:
  lite:
    description: Quick pass
    time_estimate: 5-15min
behavioral_guidelines:
  Sketch:
    - draw the modules
custom_field: preserved but unused
"#,
    )
    .unwrap();

    let registry = RecipeRegistry::load_from_dir(dir.path()).unwrap();
    let recipe = registry.get("design").unwrap();

    assert_eq!(
        recipe.primary_use_cases.as_deref(),
        Some(&["new subsystems".to_string(), "API boundaries".to_string()][..])
    );
    let variants = recipe.mode_variants.as_ref().unwrap();
    assert_eq!(variants["lite"].description, "Quick pass");
    assert_eq!(variants["lite"].time_estimate.as_deref(), Some("5-15min"));
    assert!(variants["lite"].output.is_none());
    assert!(recipe.behavioral_guidelines.is_some());
    assert!(recipe.extra.contains_key("custom_field"));
}
