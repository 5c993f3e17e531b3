//! CSV output formatting.

use crate::models::{BatchRow, DrugTableRow};

/// Separator for multi-valued cells (drug IDs, targets).
pub const LIST_SEPARATOR: &str = "; ";

/// Quote a CSV field when needed.
///
/// Fields starting with a formula character get a leading `'` so that
/// spreadsheets do not evaluate them.
#[must_use]
pub fn csv_escape(s: &str) -> String {
    let guarded = if s.starts_with(['=', '+', '-', '@']) { format!("'{s}") } else { s.to_string() };

    if guarded.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", guarded.replace('"', "\"\""))
    } else {
        guarded
    }
}

/// One line per (pathway, drug).
#[must_use]
pub fn format_drug_table_csv(rows: &[DrugTableRow]) -> String {
    let mut output = String::from("pathway_id,Drug ID,Name,Class,Targets\n");

    for row in rows {
        output.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_escape(&row.pathway_id),
            csv_escape(&row.drug.drug_id),
            csv_escape(&row.drug.name),
            csv_escape(&row.drug.class),
            csv_escape(&row.drug.targets_joined(LIST_SEPARATOR)),
        ));
    }

    output
}

/// One line per input pathway.
#[must_use]
pub fn format_batch_csv(rows: &[BatchRow]) -> String {
    let mut output = String::from("pathway_id,drug_count,drug_ids,error\n");

    for row in rows {
        output.push_str(&format!(
            "{},{},{},{}\n",
            csv_escape(&row.pathway_id),
            row.drug_ids().len(),
            csv_escape(&row.drug_ids().join(LIST_SEPARATOR)),
            csv_escape(row.error().unwrap_or("")),
        ));
    }

    output
}
