//! JSON-RPC 2.0 message types and MCP method dispatch.
//!
//! Shared by the stdio and HTTP transports.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::tools::{McpTool, ToolContext};

/// Protocol version answered when the client does not name one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error codes.
pub mod codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;

    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid method parameters.
    pub const INVALID_PARAMS: i32 = -32602;

    /// A tool ran and failed.
    pub const TOOL_ERROR: i32 = -32000;
}

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    /// Requests without an id are notifications and get no reply.
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// JSON-RPC version constant.
    const VERSION: &'static str = "2.0";

    #[must_use]
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self { jsonrpc: Cow::Borrowed(Self::VERSION), result: Some(result), error: None, id }
    }

    #[must_use]
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: Cow::Borrowed(Self::VERSION),
            result: None,
            error: Some(JsonRpcError { code, message: message.into(), data: None }),
            id,
        }
    }
}

/// MCP tool info for tools/list response.
#[derive(Debug, Serialize)]
pub struct McpToolInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Parse one raw message and dispatch it.
///
/// Returns `None` when no reply is due (notifications).
pub async fn handle_message(
    raw: &str,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> Option<JsonRpcResponse> {
    match serde_json::from_str::<JsonRpcRequest>(raw) {
        Ok(request) => handle_request(&request, tools, ctx).await,
        Err(e) => {
            tracing::warn!(error = %e, "Unparseable JSON-RPC message");
            Some(JsonRpcResponse::error(None, codes::PARSE_ERROR, format!("Parse error: {e}")))
        }
    }
}

/// Dispatch a parsed request.
///
/// Returns `None` when no reply is due (notifications).
pub async fn handle_request(
    req: &JsonRpcRequest,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> Option<JsonRpcResponse> {
    tracing::debug!(method = %req.method, "Received request");

    let id = req.id.clone();
    let response = match req.method.as_str() {
        "initialize" => JsonRpcResponse::success(id, handle_initialize(&req.params)),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => JsonRpcResponse::success(id, handle_tools_list(tools)),
        "tools/call" => handle_tools_call(id, &req.params, tools, ctx).await,
        method if method.starts_with("notifications/") => return None,
        method => JsonRpcResponse::error(
            id,
            codes::METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        ),
    };

    if req.is_notification() { None } else { Some(response) }
}

fn handle_initialize(params: &serde_json::Value) -> serde_json::Value {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    tracing::info!(protocol_version, "MCP initialize");

    json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "serverInfo": {
            "name": "kegg-mcp",
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn handle_tools_list(tools: &[Box<dyn McpTool>]) -> serde_json::Value {
    let tool_list: Vec<McpToolInfo> = tools
        .iter()
        .map(|t| McpToolInfo {
            name: t.name().to_string(),
            description: t.description().to_string(),
            input_schema: t.input_schema(),
        })
        .collect();

    json!({ "tools": tool_list })
}

async fn handle_tools_call(
    id: Option<serde_json::Value>,
    params: &serde_json::Value,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> JsonRpcResponse {
    let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::error(id, codes::INVALID_PARAMS, "Missing 'name' parameter");
    };

    let Some(tool) = tools.iter().find(|t| t.name() == tool_name) else {
        return JsonRpcResponse::error(
            id,
            codes::INVALID_PARAMS,
            format!("Tool not found: {tool_name}"),
        );
    };

    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    tracing::info!(tool = %tool_name, "Executing tool");

    match tool.execute(ctx, arguments).await {
        Ok(text) => JsonRpcResponse::success(
            id,
            json!({
                "content": [{
                    "type": "text",
                    "text": text
                }]
            }),
        ),
        Err(e) if e.is_invalid_params() => {
            tracing::warn!(tool = %tool_name, error = %e, "Rejected tool arguments");
            JsonRpcResponse::error(id, codes::INVALID_PARAMS, e.to_user_message())
        }
        Err(e) => {
            tracing::error!(tool = %tool_name, error = %e, "Tool execution failed");
            let message = format!("Tool error: {}", e.to_user_message());
            JsonRpcResponse::error(id, codes::TOOL_ERROR, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::KeggApi;
    use crate::error::ClientResult;
    use crate::models::DrugRecord;
    use crate::tools::register_all_tools;

    struct StubApi;

    #[async_trait::async_trait]
    impl KeggApi for StubApi {
        async fn list_pathway_drugs(&self, _pathway_id: &str) -> ClientResult<Vec<String>> {
            Ok(vec!["D00109".to_string()])
        }

        async fn get_drug_info(&self, drug_id: &str) -> ClientResult<DrugRecord> {
            Ok(DrugRecord::not_found(drug_id))
        }
    }

    async fn call(raw: &str) -> Option<JsonRpcResponse> {
        let tools = register_all_tools();
        let ctx = ToolContext::new(Arc::new(StubApi));
        handle_message(raw, &tools, &ctx).await
    }

    #[tokio::test]
    async fn test_initialize_echoes_protocol_version() {
        let msg = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {"protocolVersion": "2025-03-26"}
        });
        let resp = call(&msg.to_string()).await.unwrap();

        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], "2025-03-26");
        assert_eq!(result["serverInfo"]["name"], "kegg-mcp");
    }

    #[tokio::test]
    async fn test_notifications_get_no_reply() {
        assert!(call(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).await.is_none());
        assert!(call(r#"{"jsonrpc":"2.0","method":"ping"}"#).await.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_names() {
        let resp = call(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#).await.unwrap();
        let result = resp.result.unwrap();
        let names: Vec<&str> =
            result["tools"].as_array().unwrap().iter().filter_map(|t| t["name"].as_str()).collect();
        assert_eq!(names, ["list_pathway_drugs", "get_drug_info", "pathway_drug_table"]);
    }

    #[tokio::test]
    async fn test_error_codes() {
        let resp = call("{not json").await.unwrap();
        assert_eq!(resp.error.unwrap().code, codes::PARSE_ERROR);

        let resp = call(r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#).await.unwrap();
        assert_eq!(resp.error.unwrap().code, codes::METHOD_NOT_FOUND);

        let resp = call(
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"nope"}}"#,
        )
        .await
        .unwrap();
        assert_eq!(resp.error.unwrap().code, codes::INVALID_PARAMS);

        let msg = json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {"name": "list_pathway_drugs", "arguments": {"pathwayId": "nothing here"}}
        });
        let resp = call(&msg.to_string()).await.unwrap();
        assert_eq!(resp.id, Some(json!(5)));
        assert_eq!(resp.error.unwrap().code, codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_returns_text_content() {
        let msg = json!({
            "jsonrpc": "2.0",
            "id": 6,
            "method": "tools/call",
            "params": {
                "name": "list_pathway_drugs",
                "arguments": {"pathwayId": "hsa04012", "responseFormat": "json"}
            }
        });
        let resp = call(&msg.to_string()).await.unwrap();

        let result = resp.result.unwrap();
        assert_eq!(result["content"][0]["type"], "text");
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("D00109"));
        assert!(text.contains("path:hsa04012"));
    }
}
