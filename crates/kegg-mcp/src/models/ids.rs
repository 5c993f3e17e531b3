//! Validated KEGG identifiers.
//!
//! Both identifier types can only be built through their parsers, so holding
//! one means the string already matched its shape and is safe to put in a
//! request URL.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

static PATHWAY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^path:[a-z0-9]+$").expect("valid pathway id pattern"));

static DRUG_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^D[0-9]+$").expect("valid drug id pattern"));

/// Three letters and five digits anywhere in free text (e.g. "hsa04012").
static PATHWAY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z]{3}[0-9]{5}").expect("valid pathway code pattern"));

/// A KEGG pathway identifier such as `path:hsa04012`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathwayId(String);

impl PathwayId {
    /// Validate a strict pathway identifier (`path:` + lowercase alphanumerics).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] if the shape does not match.
    pub fn parse(raw: &str) -> ClientResult<Self> {
        if PATHWAY_ID.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ClientError::invalid_input("pathway_id", raw))
        }
    }

    /// Pull a pathway code out of loosely formatted input.
    ///
    /// Accepts things like `"hsa04012"`, `" HSA04012 "`, `"(map00010)"` or an
    /// already prefixed `"path:map00010"`. The first three-letter, five-digit
    /// code found is lowercased and prefixed with `path:`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] if no code is present.
    pub fn normalize(raw: &str) -> ClientResult<Self> {
        let code = PATHWAY_CODE
            .find(raw.trim())
            .ok_or_else(|| ClientError::invalid_input("pathway_id", raw))?;

        Ok(Self(format!("path:{}", code.as_str().to_ascii_lowercase())))
    }

    /// The identifier as sent to KEGG.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code without the `path:` prefix.
    #[must_use]
    pub fn code(&self) -> &str {
        self.0.strip_prefix("path:").unwrap_or(&self.0)
    }
}

/// A KEGG drug identifier such as `D00001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DrugId(String);

impl DrugId {
    /// Validate a drug identifier (`D` followed by digits).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] if the shape does not match.
    pub fn parse(raw: &str) -> ClientResult<Self> {
        if DRUG_ID.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ClientError::invalid_input("drug_id", raw))
        }
    }

    /// The identifier as sent to KEGG.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_id_traits {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $ty {
            type Err = ClientError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ClientError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(id: $ty) -> Self {
                id.0
            }
        }
    };
}

impl_id_traits!(PathwayId);
impl_id_traits!(DrugId);
