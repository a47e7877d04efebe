//! mindforge_get_recipe tool handler: renders a recipe's framework document

use crate::error::{MindForgeError, Result};
use crate::render;
use crate::server::MindForgeServer;
use rmcp::model::{CallToolRequestParam, CallToolResult, Content};

/// Parameters for the get_recipe tool
#[derive(Debug, serde::Deserialize)]
pub struct GetRecipeParams {
    /// Name of a loaded recipe
    pub recipe: String,

    /// The code, system, or problem context to analyze
    pub context: String,

    /// Analysis depth: "lite", "standard", or "full"
    #[serde(default)]
    pub mode: Option<String>,

    /// Optional specific focus area or constraint
    #[serde(default)]
    pub focus: Option<String>,
}

impl MindForgeServer {
    /// Handle the mindforge_get_recipe tool call
    pub async fn handle_get_recipe(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| MindForgeError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: GetRecipeParams = serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| MindForgeError::InvalidParams {
                message: format!("Invalid parameters: {}", e),
            })?;
        let mode = params.mode.as_deref().unwrap_or("standard");

        let recipe = self.registry.get(&params.recipe).ok_or_else(|| {
            MindForgeError::InvalidParams {
                message: format!("Unknown recipe: {}", params.recipe),
            }
        })?;
        let sequence = self.registry.sequence_of(&params.recipe);

        let doc = render::render_framework(
            recipe,
            sequence,
            &params.context,
            mode,
            params.focus.as_deref(),
        );

        Ok(CallToolResult::success(vec![Content::text(doc)]))
    }
}
