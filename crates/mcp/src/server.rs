use std::{ops::Deref, sync::Arc};

use llm::Provider;
use rmcp::{
    RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, ErrorCode, ErrorData, Implementation, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};

use crate::tool::{RmcpTool, claude::ClaudeTool};

#[derive(Clone)]
pub(crate) struct McpServer(Arc<McpServerInner>);

pub(crate) struct McpServerInner {
    info: ServerInfo,
    tools: Vec<Box<dyn RmcpTool>>,
}

impl Deref for McpServer {
    type Target = McpServerInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl McpServer {
    pub(crate) fn new(provider: Arc<dyn Provider>) -> Self {
        let server_info = Implementation {
            name: "Periscope".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Implementation::default()
        };

        let inner = McpServerInner {
            info: ServerInfo {
                protocol_version: ProtocolVersion::default(),
                capabilities: ServerCapabilities::builder().enable_tools().build(),
                server_info,
                instructions: Some(instructions().to_string()),
            },
            tools: vec![Box::new(ClaudeTool::new(provider))],
        };

        Self(Arc::new(inner))
    }
}

impl McpServerInner {
    fn tool_list(&self) -> Vec<rmcp::model::Tool> {
        self.tools.iter().map(|tool| tool.to_tool()).collect()
    }

    /// Routes a call to the matching tool. An unknown name is a routing
    /// fault surfaced as a protocol error, never as a tool result.
    async fn dispatch(
        &self,
        CallToolRequestParam { name, arguments }: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let Some(tool) = self.tools.iter().find(|tool| tool.name() == name) else {
            return Err(ErrorData::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool '{name}'"),
                None,
            ));
        };

        Ok(tool.call(arguments).await)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        self.info.clone()
    }

    async fn list_tools(
        &self,
        _: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.tool_list(),
        })
    }

    async fn call_tool(
        &self,
        params: CallToolRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(params).await
    }
}

fn instructions() -> &'static str {
    indoc::indoc! {r#"
        This server exposes a single tool, `anthropic_claude`, which sends a prompt to
        Claude with web search enabled and returns the generated text. Use it for any
        question that benefits from current, real-time information.
    "#}
}
