//! JSON output formatting.

use serde_json::{Value, json};

use crate::models::DrugRecord;

/// Drug list of a pathway as a JSON object.
#[must_use]
pub fn pathway_drugs_json(pathway_id: &str, drug_ids: &[String]) -> Value {
    json!({
        "pathway_id": pathway_id,
        "count": drug_ids.len(),
        "drug_ids": drug_ids,
    })
}

/// Drug table of a pathway, with any lookups that failed.
#[must_use]
pub fn drug_table_json(
    pathway_id: &str,
    total_drugs: usize,
    records: &[DrugRecord],
    failures: &[(String, String)],
) -> Value {
    let mut obj = json!({
        "pathway_id": pathway_id,
        "total_drugs": total_drugs,
        "drugs": records,
    });

    if !failures.is_empty() {
        obj["failed"] = failures
            .iter()
            .map(|(id, error)| json!({"Drug ID": id, "error": error}))
            .collect();
    }

    obj
}
