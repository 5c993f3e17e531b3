//! Pathway drug table tool: pathway_drug_table.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{PathwayDrugTableInput, PathwayId, ResponseFormat};

/// Upper bound on drugs looked up in one call.
const MAX_DRUGS_LIMIT: usize = 200;

/// Lists a pathway's drugs and fetches each record.
pub struct PathwayDrugTableTool;

#[async_trait::async_trait]
impl McpTool for PathwayDrugTableTool {
    fn name(&self) -> &'static str {
        "pathway_drug_table"
    }

    fn description(&self) -> &'static str {
        "Given a KEGG pathway ID, lists its drugs and fetches name, class and targets \
         for each one. Lookups are rate limited, so large pathways take a while; \
         use maxDrugs to cap the number of lookups."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "pathwayId": {
                    "type": "string",
                    "description": "KEGG pathway ID, e.g. 'hsa04012'"
                },
                "maxDrugs": {
                    "type": "integer",
                    "default": 25,
                    "minimum": 1,
                    "maximum": MAX_DRUGS_LIMIT,
                    "description": "Maximum drugs to look up"
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
        let params: PathwayDrugTableInput = serde_json::from_value(input)?;

        if params.max_drugs == 0 || params.max_drugs > MAX_DRUGS_LIMIT {
            return Err(ToolError::validation(
                "maxDrugs",
                format!("must be between 1 and {MAX_DRUGS_LIMIT}"),
            ));
        }

        let pathway_id = PathwayId::normalize(&params.pathway_id)?;
        let drug_ids = ctx
            .client
            .list_pathway_drugs(pathway_id.as_str())
            .await?;

        // A drug can be listed more than once; look each up a single time.
        let mut unique: Vec<&str> = Vec::new();
        for id in &drug_ids {
            if !unique.contains(&id.as_str()) {
                unique.push(id);
            }
        }
        let total = unique.len();
        unique.truncate(params.max_drugs);

        let mut records = Vec::with_capacity(unique.len());
        let mut failures = Vec::new();
        for drug_id in unique {
            match ctx.client.get_drug_info(drug_id).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(drug_id, error = %e, "Drug lookup failed");
                    failures.push((drug_id.to_string(), e.to_string()));
                }
            }
        }

        match params.response_format {
            ResponseFormat::Markdown => {
                if total == 0 {
                    return Ok(formatters::format_drug_ids_markdown(pathway_id.as_str(), &[]));
                }

                let mut output = format!(
                    "# Drugs in {} ({} of {} looked up)\n\n",
                    pathway_id,
                    records.len() + failures.len(),
                    total
                );
                output.push_str(&formatters::format_drug_records_table(&records));

                if !failures.is_empty() {
                    output.push_str("\n**Failed lookups**:\n");
                    for (id, error) in &failures {
                        output.push_str(&format!("- {id}: {error}\n"));
                    }
                }

                Ok(output)
            }
            ResponseFormat::Json => Ok(serde_json::to_string_pretty(
                &formatters::drug_table_json(pathway_id.as_str(), total, &records, &failures),
            )?),
        }
    }
}
