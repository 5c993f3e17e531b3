//! Pathway tool: list_pathway_drugs.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{ListPathwayDrugsInput, PathwayId, ResponseFormat};

/// Lists the drug IDs attached to a KEGG pathway.
pub struct ListPathwayDrugsTool;

#[async_trait::async_trait]
impl McpTool for ListPathwayDrugsTool {
    fn name(&self) -> &'static str {
        "list_pathway_drugs"
    }

    fn description(&self) -> &'static str {
        "Given a KEGG pathway ID (e.g., hsa04012), returns a list of drug IDs \
         associated with that pathway."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "pathwayId": {
                    "type": "string",
                    "description": "KEGG pathway ID, e.g. 'hsa04012' or 'path:map00010'"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["pathwayId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ListPathwayDrugsInput = serde_json::from_value(input)?;
        let pathway_id = PathwayId::normalize(&params.pathway_id)?;

        let drug_ids = ctx
            .client
            .list_pathway_drugs(pathway_id.as_str())
            .await?;

        match params.response_format {
            ResponseFormat::Markdown => {
                Ok(formatters::format_drug_ids_markdown(pathway_id.as_str(), &drug_ids))
            }
            ResponseFormat::Json => Ok(serde_json::to_string_pretty(
                &formatters::pathway_drugs_json(pathway_id.as_str(), &drug_ids),
            )?),
        }
    }
}
