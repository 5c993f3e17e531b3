//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use super::ResponseFormat;

/// Input for listing the drugs of a pathway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPathwayDrugsInput {
    /// Pathway ID, loosely formatted (e.g., "hsa04012" or "path:map00010").
    pub pathway_id: String,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for fetching one drug record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDrugInfoInput {
    /// KEGG drug ID (e.g., "D00109").
    pub drug_id: String,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for the pathway drug table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayDrugTableInput {
    /// Pathway ID, loosely formatted.
    pub pathway_id: String,

    /// Maximum drugs to look up (each costs one request).
    #[serde(default = "default_max_drugs")]
    pub max_drugs: usize,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_max_drugs() -> usize {
    25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_keys() {
        let input: ListPathwayDrugsInput =
            serde_json::from_value(serde_json::json!({"pathwayId": "hsa04012"})).unwrap();
        assert_eq!(input.pathway_id, "hsa04012");
        assert!(input.response_format.is_markdown());

        let input: GetDrugInfoInput = serde_json::from_value(
            serde_json::json!({"drugId": "D00001", "responseFormat": "json"}),
        )
        .unwrap();
        assert_eq!(input.drug_id, "D00001");
        assert!(input.response_format.is_json());
    }

    #[test]
    fn test_table_default_max_drugs() {
        let input: PathwayDrugTableInput =
            serde_json::from_value(serde_json::json!({"pathwayId": "map00010"})).unwrap();
        assert_eq!(input.max_drugs, 25);
    }

    #[test]
    fn test_missing_required_field() {
        let result = serde_json::from_value::<GetDrugInfoInput>(serde_json::json!({}));
        assert!(result.is_err());
    }
}
