//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates its input parameters
//! 2. Calls the KEGG lookups through [`KeggApi`]
//! 3. Formats results as Markdown or JSON

mod drug;
mod pathway;
mod table;

pub use drug::*;
pub use pathway::*;
pub use table::*;

use std::sync::Arc;

use crate::client::KeggApi;
use crate::error::ToolResult;

/// Tool execution context.
pub struct ToolContext {
    /// KEGG lookups, cached or direct.
    pub client: Arc<dyn KeggApi>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<dyn KeggApi>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "get_drug_info").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(pathway::ListPathwayDrugsTool),
        Box::new(drug::GetDrugInfoTool),
        Box::new(table::PathwayDrugTableTool),
    ]
}
