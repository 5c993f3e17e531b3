//! Drug record extracted from a KEGG DRUG entry.

use serde::{Deserialize, Serialize};

/// Placeholder used when a field is absent from the entry.
pub const NOT_FOUND: &str = "Not found";

/// Metadata for a single KEGG drug.
///
/// Serialized keys match the column names used in batch output
/// (`"Drug ID"`, `"Name"`, `"Class"`, `"Targets"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugRecord {
    /// The requested drug identifier, echoed back.
    #[serde(rename = "Drug ID")]
    pub drug_id: String,

    /// First `NAME` line of the entry.
    #[serde(rename = "Name")]
    pub name: String,

    /// First `CLASS` line of the entry.
    #[serde(rename = "Class")]
    pub class: String,

    /// Lines of the first `TARGET` block, in order.
    #[serde(rename = "Targets", default)]
    pub targets: Vec<String>,
}

impl DrugRecord {
    /// A record with every field defaulted.
    #[must_use]
    pub fn not_found(drug_id: impl Into<String>) -> Self {
        Self {
            drug_id: drug_id.into(),
            name: NOT_FOUND.to_string(),
            class: NOT_FOUND.to_string(),
            targets: Vec::new(),
        }
    }

    /// Whether the entry carried a `NAME` field.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name != NOT_FOUND
    }

    /// Whether the entry carried a `CLASS` field.
    #[must_use]
    pub fn has_class(&self) -> bool {
        self.class != NOT_FOUND
    }

    /// Targets joined for single-cell display.
    #[must_use]
    pub fn targets_joined(&self, sep: &str) -> String {
        self.targets.join(sep)
    }
}
