//! Drug tool: get_drug_info.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{GetDrugInfoInput, ResponseFormat};

/// Fetches name, class and targets for a KEGG drug.
pub struct GetDrugInfoTool;

#[async_trait::async_trait]
impl McpTool for GetDrugInfoTool {
    fn name(&self) -> &'static str {
        "get_drug_info"
    }

    fn description(&self) -> &'static str {
        "Given a drug ID (e.g., D00109), returns detailed information about the drug: \
         name, class and molecular targets."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "drugId": {
                    "type": "string",
                    "pattern": "^D[0-9]+$",
                    "description": "KEGG drug ID, e.g. 'D00109'"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["drugId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GetDrugInfoInput = serde_json::from_value(input)?;
        // Passed through verbatim; surrounding whitespace is an invalid ID.
        if params.drug_id.is_empty() {
            return Err(ToolError::validation("drugId", "cannot be empty"));
        }

        let record = ctx.client.get_drug_info(&params.drug_id).await?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_drug_markdown(&record)),
            ResponseFormat::Json => Ok(serde_json::to_string_pretty(&record)?),
        }
    }
}
