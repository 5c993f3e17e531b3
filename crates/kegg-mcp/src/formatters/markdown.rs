//! Markdown output formatting.

use std::borrow::Cow;

use crate::models::{BatchOutcome, BatchRow, DrugRecord, DrugTableRow};

/// Format the drug list of a pathway as Markdown.
#[must_use]
pub fn format_drug_ids_markdown(pathway_id: &str, drug_ids: &[String]) -> String {
    if drug_ids.is_empty() {
        return format!("No drugs listed for pathway `{pathway_id}`.");
    }

    let mut output = format!("# Drugs in {} ({} entries)\n\n", pathway_id, drug_ids.len());
    for id in drug_ids {
        output.push_str(&format!("- {id}\n"));
    }
    output
}

/// Format a single drug record as Markdown.
#[must_use]
pub fn format_drug_markdown(record: &DrugRecord) -> String {
    let mut output = format!("## {}\n\n", record.drug_id);

    output.push_str(&format!("**Name**: {}\n\n", record.name));
    output.push_str(&format!("**Class**: {}\n\n", record.class));

    if record.targets.is_empty() {
        output.push_str("**Targets**: none listed\n");
    } else {
        output.push_str("**Targets**:\n");
        for target in &record.targets {
            output.push_str(&format!("- {target}\n"));
        }
    }

    output
}

/// Format drug records as a Markdown table.
#[must_use]
pub fn format_drug_records_table(records: &[DrugRecord]) -> String {
    let mut output = String::from("| Drug ID | Name | Class | Targets |\n|---|---|---|---|\n");
    for record in records {
        output.push_str(&record_row(record));
    }
    output
}

/// Format flattened (pathway, drug) rows as a Markdown table.
#[must_use]
pub fn format_drug_table_markdown(rows: &[DrugTableRow]) -> String {
    if rows.is_empty() {
        return "No drugs found.".to_string();
    }

    let mut output =
        String::from("| Pathway | Drug ID | Name | Class | Targets |\n|---|---|---|---|---|\n");
    for row in rows {
        output.push_str(&format!("| {} ", cell(&row.pathway_id)));
        output.push_str(&record_row(&row.drug));
    }
    output
}

/// Format batch results as Markdown, one section per input pathway.
#[must_use]
pub fn format_batch_markdown(rows: &[BatchRow]) -> String {
    let failed = rows.iter().filter(|r| r.error().is_some()).count();
    let mut output = format!(
        "# Batch results ({} pathways, {} failed)\n\n",
        rows.len(),
        failed
    );

    for row in rows {
        output.push_str(&format!("## {}\n\n", row.pathway_id));
        match &row.outcome {
            BatchOutcome::Failed { error } => {
                output.push_str(&format!("**Error**: {error}\n\n"));
            }
            BatchOutcome::Drugs { drug_details, .. } if drug_details.is_empty() => {
                output.push_str("No drugs listed.\n\n");
            }
            BatchOutcome::Drugs { drug_details, .. } => {
                output.push_str(&format_drug_records_table(drug_details));
                output.push('\n');
            }
        }
    }

    output
}

fn record_row(record: &DrugRecord) -> String {
    format!(
        "| {} | {} | {} | {} |\n",
        cell(&record.drug_id),
        cell(&record.name),
        cell(&record.class),
        cell(&record.targets_joined("<br>")),
    )
}

/// Escape pipes so a value stays inside its table cell.
fn cell(s: &str) -> Cow<'_, str> {
    if s.contains('|') { Cow::Owned(s.replace('|', "\\|")) } else { Cow::Borrowed(s) }
}
