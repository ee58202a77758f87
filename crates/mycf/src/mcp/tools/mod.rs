mod jobs;
mod widget;

use mycf_core::widget::{TOOL_DESCRIPTION, TOOL_NAME, WIDGET_TITLE};
use serde::{Deserialize, Serialize};

pub use widget::{handle_resource_templates_list, handle_resources_list, handle_resources_read};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
    pub resources: Option<ResourcesCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct ResourcesCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "structuredContent", skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<serde_json::Value>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl CallToolResult {
    /// A failed call reported to the model as text rather than as a protocol error
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            structured_content: None,
            is_error: Some(true),
            meta: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(rename = "resource")]
    Resource { resource: ResourceContents },
}

#[derive(Debug, Serialize)]
pub struct ResourceContents {
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

fn to_json<T: Serialize>(result: T) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
            resources: Some(ResourcesCapability {}),
        },
        server_info: ServerInfo {
            name: "mycareersfuture".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    to_json(result)
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![Tool {
        name: TOOL_NAME.to_string(),
        title: WIDGET_TITLE.to_string(),
        description: TOOL_DESCRIPTION.to_string(),
        input_schema: mycf_core::input::input_schema(),
        meta: mycf_core::widget::tool_meta(),
    }];

    to_json(ToolsList { tools })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    match params.name.as_str() {
        TOOL_NAME => {
            let client =
                crate::search::MyCareersFutureClient::from_global(global).map_err(|e| {
                    JsonRpcError {
                        code: -32603,
                        message: format!("Tool execution error: {e}"),
                        data: None,
                    }
                })?;
            jobs::handle_job_list(params.arguments, &client, global).await
        }
        _ => {
            log::warn!("Unknown tool requested: {}", params.name);
            to_json(CallToolResult::error(format!("Unknown tool: {}", params.name)))
        }
    }
}
