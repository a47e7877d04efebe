use crate::server::MindForgeServer;
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
        InitializeResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo, ToolsCapability,
    },
    service::{RequestContext, RoleServer},
};
use tracing::info;

impl ServerHandler for MindForgeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "mindforge".to_string(),
                title: Some(self.config.descriptor.name.clone()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                website_url: None,
                icons: None,
            },
            instructions: Some(self.config.descriptor.description.clone()),
            ..Default::default()
        }
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        let mut info = self.get_info();
        info.protocol_version = request.protocol_version.clone();
        Ok(info)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("tools/list requested");

        use rmcp::model::Tool;

        let get_recipe_schema = crate::schemas::get_recipe_schema(&self.registry);
        let apply_recipe_schema = crate::schemas::apply_recipe_schema(&self.registry);

        let tools = vec![
            Tool {
                name: "mindforge_get_recipe".into(),
                title: Some("Get Recipe".into()),
                description: Some(
                    "Get a specialized analytical recipe for development tasks. Use recipes 1-12 in sequence for systematic workflow. Audit (13) is for prompt engineering only."
                        .into(),
                ),
                input_schema: get_recipe_schema,
                icons: None,
                annotations: None,
                output_schema: None, // Single free-form text document
                meta: None,
            },
            Tool {
                name: "mindforge_apply_recipe".into(),
                title: Some("Apply Recipe".into()),
                description: Some(
                    "Apply a recipe to analyze actual code/content. Use recipes 1-12 in sequence for systematic workflow. Audit (13) is for prompt engineering only."
                        .into(),
                ),
                input_schema: apply_recipe_schema,
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
        ];

        Ok(ListToolsResult {
            tools,
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        // Route to appropriate tool handler
        match request.name.as_ref() {
            "mindforge_get_recipe" => self.handle_get_recipe(request).await.map_err(|e| e.into()),
            "mindforge_apply_recipe" => self
                .handle_apply_recipe(request)
                .await
                .map_err(|e| e.into()),
            _ => Err(McpError {
                code: rmcp::model::ErrorCode::METHOD_NOT_FOUND,
                message: format!("Unknown tool: {}", request.name).into(),
                data: None,
            }),
        }
    }
}
