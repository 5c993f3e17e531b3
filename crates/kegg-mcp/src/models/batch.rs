//! Result rows produced by the batch processor.

use serde::{Deserialize, Serialize};

use super::DrugRecord;

/// Outcome of processing one input pathway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRow {
    /// The pathway ID exactly as it appeared in the input.
    pub pathway_id: String,

    /// Drugs found, or the error that stopped this row.
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

/// Either the drugs of a pathway or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    /// Lookup succeeded.
    Drugs {
        /// Drug IDs in pathway order.
        drug_ids: Vec<String>,
        /// One record per drug ID, same order.
        drug_details: Vec<DrugRecord>,
    },
    /// Lookup failed; the message is kept instead of aborting the batch.
    Failed {
        /// Error message.
        error: String,
    },
}

impl BatchRow {
    /// Row for a successful lookup.
    #[must_use]
    pub fn drugs(
        pathway_id: impl Into<String>,
        drug_ids: Vec<String>,
        drug_details: Vec<DrugRecord>,
    ) -> Self {
        Self {
            pathway_id: pathway_id.into(),
            outcome: BatchOutcome::Drugs { drug_ids, drug_details },
        }
    }

    /// Row for a failed lookup.
    #[must_use]
    pub fn failed(pathway_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            pathway_id: pathway_id.into(),
            outcome: BatchOutcome::Failed { error: error.into() },
        }
    }

    /// Error message, if the row failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            BatchOutcome::Failed { error } => Some(error),
            BatchOutcome::Drugs { .. } => None,
        }
    }

    /// Drug records, empty for a failed row.
    #[must_use]
    pub fn drug_details(&self) -> &[DrugRecord] {
        match &self.outcome {
            BatchOutcome::Drugs { drug_details, .. } => drug_details,
            BatchOutcome::Failed { .. } => &[],
        }
    }

    /// Drug IDs, empty for a failed row.
    #[must_use]
    pub fn drug_ids(&self) -> &[String] {
        match &self.outcome {
            BatchOutcome::Drugs { drug_ids, .. } => drug_ids,
            BatchOutcome::Failed { .. } => &[],
        }
    }
}

/// One drug of one pathway, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugTableRow {
    /// Pathway the drug was listed in.
    pub pathway_id: String,

    /// The drug record (`Drug ID`, `Name`, `Class`, `Targets`).
    #[serde(flatten)]
    pub drug: DrugRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_row_shape() {
        let row = BatchRow::drugs(
            "hsa04012",
            vec!["D00001".into()],
            vec![DrugRecord::not_found("D00001")],
        );
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["pathway_id"], "hsa04012");
        assert_eq!(value["drug_ids"][0], "D00001");
        assert_eq!(value["drug_details"][0]["Drug ID"], "D00001");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failed_row_shape() {
        let row = BatchRow::failed("nonsense", "Invalid pathway_id: nonsense");
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["error"], "Invalid pathway_id: nonsense");
        assert!(value.get("drug_ids").is_none());
        assert_eq!(row.error(), Some("Invalid pathway_id: nonsense"));
        assert!(row.drug_details().is_empty());
    }

    #[test]
    fn test_rows_deserialize_back() {
        let json = r#"[{"pathway_id":"a","error":"boom"},
                       {"pathway_id":"b","drug_ids":[],"drug_details":[]}]"#;
        let rows: Vec<BatchRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0], BatchRow::failed("a", "boom"));
        assert_eq!(rows[1], BatchRow::drugs("b", vec![], vec![]));
    }

    #[test]
    fn test_table_row_flattens_record() {
        let row =
            DrugTableRow { pathway_id: "path:map00010".into(), drug: DrugRecord::not_found("D1") };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["pathway_id"], "path:map00010");
        assert_eq!(value["Drug ID"], "D1");
        assert_eq!(value["Name"], "Not found");
    }
}
