//! MCP server exposing SanJS component scaffold generation.

mod types;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};

use crate::scaffold::{self, GenerateRequest, GenerationResult, ScaffoldError};

#[derive(Clone)]
pub struct McpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl McpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Shared tool logic: run the generator and map failures into the
    /// generic generation-failure message.
    fn generate(&self, request: GenerateRequest) -> Result<GenerationResult, McpError> {
        scaffold::handle(&request).map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    // ============================================================
    // Test helpers - expose tool logic for testing
    // ============================================================

    pub fn test_generate(&self, request: GenerateRequest) -> Result<GenerationResult, McpError> {
        self.generate(request)
    }

    pub async fn test_call_san(
        &self,
        request: GenerateComponentRequest,
    ) -> Result<CallToolResult, McpError> {
        self.san(Parameters(request)).await
    }
}

#[tool_router]
impl McpServer {
    #[tool(
        description = "生成 SanJS 组件的基础代码结构，包括组件模板、样式和逻辑。不传 componentName 时返回可用的 Cosmic 组件列表。"
    )]
    async fn san(
        &self,
        params: Parameters<GenerateComponentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.generate(params.0.into())?;

        let json = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(ScaffoldError::Generation(e.to_string()).to_string(), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "san-scaffold".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"san-scaffold generates boilerplate for new SanJS components.

USAGE:
1. Call san without componentName to list the available Cosmic components.
2. Call san with componentName (PascalCase) to generate a scaffold.
   - features: comma-separated flags (template, style, computed, lifecycle,
     store, typescript). typescript and style are always included; unknown
     names are ignored.
   - description: free text, placed in the generated doc comment.
   - selectedComponents: Cosmic components to import and register. When
     set, generation uses the full class template and Button is always
     included.
3. Save the returned files yourself - the server never writes to disk.

Generation is deterministic: identical inputs produce identical files."#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server() -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new();
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
