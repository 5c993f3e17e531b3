//! Batch processing of pathway IDs from a CSV file.
//!
//! Each input row is handled on its own: a failure is recorded on that row
//! and the batch moves on. Lookups run one after another so the client's
//! throttling applies across the whole run.

use std::path::Path;

use crate::client::KeggApi;
use crate::error::{BatchError, ClientResult};
use crate::formatters;
use crate::models::{BatchRow, DrugRecord, DrugTableRow, OutputFormat, PathwayId};

/// Column holding the pathway IDs.
pub const PATHWAY_COLUMN: &str = "pathway_id";

/// Read pathway IDs from a CSV file.
///
/// # Errors
///
/// Returns error if the file cannot be read or has no `pathway_id` column.
pub async fn read_pathway_ids(path: &Path) -> Result<Vec<String>, BatchError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BatchError::Io { path: path.to_path_buf(), source })?;

    parse_pathway_csv(&content)
}

/// Extract the `pathway_id` column from CSV text.
///
/// The first non-blank record is the header. Blank cells are skipped. Quoted
/// fields may contain commas, doubled quotes and line breaks.
///
/// # Errors
///
/// Returns error if the input is empty or the column is missing.
pub fn parse_pathway_csv(content: &str) -> Result<Vec<String>, BatchError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = split_csv_records(content).into_iter();

    let header = records.next().ok_or(BatchError::Empty)?;
    let column = header
        .iter()
        .position(|name| name.trim() == PATHWAY_COLUMN)
        .ok_or(BatchError::MissingColumn { column: PATHWAY_COLUMN })?;

    Ok(records
        .filter_map(|record| record.into_iter().nth(column))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect())
}

/// Split CSV text into records of fields, dropping blank records.
///
/// A newline inside quotes belongs to the field. Outside quotes it ends the
/// record and a `\r` is discarded.
fn split_csv_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', _) => in_quotes = !in_quotes,
            (',', false) => fields.push(std::mem::take(&mut current)),
            ('\n', false) => {
                fields.push(std::mem::take(&mut current));
                push_record(&mut records, std::mem::take(&mut fields));
            }
            ('\r', false) => {}
            _ => current.push(c),
        }
    }
    fields.push(current);
    push_record(&mut records, fields);

    records
}

fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    let blank = matches!(record.as_slice(), [only] if only.trim().is_empty());
    if !blank {
        records.push(record);
    }
}

/// Drug IDs and records for one loosely formatted pathway ID.
///
/// Stops at the first failing drug lookup.
///
/// # Errors
///
/// Returns error if the pathway ID cannot be normalized or a lookup fails.
pub async fn lookup_pathway(
    api: &dyn KeggApi,
    raw_id: &str,
) -> ClientResult<(Vec<String>, Vec<DrugRecord>)> {
    let pathway_id = PathwayId::normalize(raw_id)?;
    let drug_ids = api.list_pathway_drugs(pathway_id.as_str()).await?;

    let mut details = Vec::with_capacity(drug_ids.len());
    for drug_id in &drug_ids {
        details.push(api.get_drug_info(drug_id).await?);
    }

    Ok((drug_ids, details))
}

/// Process one input row, capturing any error on the row.
pub async fn process_pathway(api: &dyn KeggApi, raw_id: &str) -> BatchRow {
    match lookup_pathway(api, raw_id).await {
        Ok((drug_ids, details)) => {
            tracing::info!(pathway_id = raw_id, drugs = drug_ids.len(), "Processed pathway");
            BatchRow::drugs(raw_id, drug_ids, details)
        }
        Err(e) => {
            tracing::warn!(pathway_id = raw_id, error = %e, "Pathway lookup failed");
            BatchRow::failed(raw_id, e.to_string())
        }
    }
}

/// Process every pathway ID in order.
pub async fn run_batch(api: &dyn KeggApi, raw_ids: &[String]) -> Vec<BatchRow> {
    let mut rows = Vec::with_capacity(raw_ids.len());
    for raw_id in raw_ids {
        rows.push(process_pathway(api, raw_id).await);
    }

    let failed = rows.iter().filter(|r| r.error().is_some()).count();
    tracing::info!(pathways = rows.len(), failed, "Batch complete");
    rows
}

/// Flatten successful rows into one row per (pathway, drug).
///
/// Failed rows contribute nothing.
#[must_use]
pub fn compile_drug_table(rows: &[BatchRow]) -> Vec<DrugTableRow> {
    rows.iter()
        .flat_map(|row| {
            row.drug_details()
                .iter()
                .map(|drug| DrugTableRow { pathway_id: row.pathway_id.clone(), drug: drug.clone() })
        })
        .collect()
}

/// Render batch results.
///
/// With `table` set the output has one row per drug instead of one per
/// pathway.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render(rows: &[BatchRow], format: OutputFormat, table: bool) -> serde_json::Result<String> {
    if table {
        let table = compile_drug_table(rows);
        return Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&table)?,
            OutputFormat::Markdown => formatters::format_drug_table_markdown(&table),
            OutputFormat::Csv => formatters::format_drug_table_csv(&table),
        });
    }

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
        OutputFormat::Markdown => formatters::format_batch_markdown(rows),
        OutputFormat::Csv => formatters::format_batch_csv(rows),
    })
}
