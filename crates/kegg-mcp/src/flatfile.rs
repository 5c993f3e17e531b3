//! Parsing for KEGG flat-file entries.
//!
//! A `get` response is line oriented: each field starts with an upper-case
//! keyword in column 0 and continues on lines that begin with whitespace.
//! Only the handful of fields this crate needs are extracted; everything
//! else is ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{DrugRecord, NOT_FOUND};

/// `DRUG` block: from the keyword up to the next line starting with a
/// non-space character, or end of text.
static DRUG_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^DRUG\s+(.+?)(?:^\S|\z)").expect("valid DRUG block pattern")
});

static DRUG_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bD\d+\b").expect("valid drug entry pattern"));

const NAME: &str = "NAME";
const CLASS: &str = "CLASS";
const TARGET: &str = "TARGET";

/// The body of the `DRUG` block of a pathway entry, if there is one.
#[must_use]
pub fn drug_block(text: &str) -> Option<&str> {
    DRUG_BLOCK.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// Drug identifiers listed in a pathway entry, in order of appearance.
///
/// Duplicates are kept. A missing `DRUG` block yields an empty list.
#[must_use]
pub fn extract_drug_ids(text: &str) -> Vec<String> {
    drug_block(text)
        .map(|block| DRUG_ENTRY.find_iter(block).map(|m| m.as_str().to_string()).collect())
        .unwrap_or_default()
}

/// Trimmed remainder of the first line that starts with `keyword`.
#[must_use]
pub fn first_field<'a>(lines: &[&'a str], keyword: &str) -> Option<&'a str> {
    lines.iter().find_map(|line| line.strip_prefix(keyword)).map(str::trim)
}

/// Lines of the first `TARGET` block.
///
/// Collection stops at the first line after the opening one that does not
/// begin with whitespace; any later `TARGET` block is not read.
#[must_use]
pub fn collect_targets(lines: &[&str]) -> Vec<String> {
    let mut targets = Vec::new();
    let mut in_target = false;

    for line in lines {
        if !in_target {
            if let Some(rest) = line.strip_prefix(TARGET) {
                in_target = true;
                targets.push(rest.trim().to_string());
            }
        } else if line.starts_with(char::is_whitespace) {
            targets.push(line.trim().to_string());
        } else {
            break;
        }
    }

    targets
}

/// Build a [`DrugRecord`] from the lines of a drug entry.
///
/// Pass an empty slice for an unusable response; every field then takes its
/// default.
#[must_use]
pub fn parse_drug_record(drug_id: &str, lines: &[&str]) -> DrugRecord {
    DrugRecord {
        drug_id: drug_id.to_string(),
        name: first_field(lines, NAME).unwrap_or(NOT_FOUND).to_string(),
        class: first_field(lines, CLASS).unwrap_or(NOT_FOUND).to_string(),
        targets: collect_targets(lines),
    }
}
