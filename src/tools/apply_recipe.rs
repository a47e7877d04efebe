//! mindforge_apply_recipe tool handler: binds a recipe to a concrete target

use crate::error::{MindForgeError, Result};
use crate::render;
use crate::server::MindForgeServer;
use rmcp::model::{CallToolRequestParam, CallToolResult, Content};

/// Parameters for the apply_recipe tool
#[derive(Debug, serde::Deserialize)]
pub struct ApplyRecipeParams {
    /// Name of a loaded recipe
    pub recipe: String,

    /// The actual code content, file path, or system to analyze
    pub target: String,

    /// Analysis depth: "lite", "standard", or "full"
    #[serde(default)]
    pub mode: Option<String>,

    /// Optional specific focus area
    #[serde(default)]
    pub focus: Option<String>,
}

impl MindForgeServer {
    /// Handle the mindforge_apply_recipe tool call
    pub async fn handle_apply_recipe(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| MindForgeError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: ApplyRecipeParams = serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| MindForgeError::InvalidParams {
                message: format!("Invalid parameters: {}", e),
            })?;
        let mode = params.mode.as_deref().unwrap_or("standard");

        let recipe = self.registry.get(&params.recipe).ok_or_else(|| {
            MindForgeError::InvalidParams {
                message: format!("Unknown recipe: {}", params.recipe),
            }
        })?;

        let doc = render::render_analysis(recipe, &params.target, mode, params.focus.as_deref());

        Ok(CallToolResult::success(vec![Content::text(doc)]))
    }
}
