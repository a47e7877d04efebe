use crate::recipes::RecipeRegistry;
use serde_json::{Map, Value, json};
use std::sync::Arc;

pub fn get_recipe_schema(registry: &RecipeRegistry) -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "recipe": {
                "type": "string",
                "enum": registry.names(),
                "description": registry.catalog_summary()
            },
            "context": {
                "type": "string",
                "description": "The code, system, or problem context to analyze"
            },
            "mode": {
                "type": "string",
                "enum": ["lite", "standard", "full"],
                "description": "Analysis depth: lite (5-15min), standard (20-40min), full (45+min)",
                "default": "standard"
            },
            "focus": {
                "type": "string",
                "description": "Optional specific focus area or constraint"
            }
        },
        "required": ["recipe", "context"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn apply_recipe_schema(registry: &RecipeRegistry) -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "recipe": {
                "type": "string",
                "enum": registry.names(),
                "description": registry.catalog_summary()
            },
            "target": {
                "type": "string",
                "description": "The actual code content, file path, or system to analyze"
            },
            "mode": {
                "type": "string",
                "enum": ["lite", "standard", "full"],
                "description": "Analysis depth",
                "default": "standard"
            },
            "focus": {
                "type": "string",
                "description": "Optional specific focus area"
            }
        },
        "required": ["recipe", "target"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}
