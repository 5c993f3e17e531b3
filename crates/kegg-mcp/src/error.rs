//! Error types for the KEGG MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;

/// Errors from the KEGG client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Identifier rejected before any request was made
    #[error("Invalid {field}: {value}")]
    InvalidInput {
        /// Which identifier failed (e.g. "pathway_id")
        field: &'static str,
        /// The rejected input, verbatim
        value: String,
    },
}

impl ClientError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput { field, value: value.into() }
    }

    /// Returns true if the caller supplied a malformed identifier.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the KEGG client
    #[error("KEGG error: {0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Whether the caller's arguments were at fault rather than the lookup.
    #[must_use]
    pub const fn is_invalid_params(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::Serialization(_)
                | Self::Client(ClientError::InvalidInput { .. })
        )
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::InvalidInput { field, value }) => {
                format!("Invalid input for '{field}': {value:?} is not a valid KEGG identifier.")
            }
            Self::Client(ClientError::Http(e)) => {
                format!("Could not reach the KEGG API: {e}")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Errors that abort a whole batch run.
///
/// Per-row lookup failures are not represented here; they are captured on
/// the row and the batch continues.
#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    /// The input file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The header row has no `pathway_id` column
    #[error("CSV input has no '{column}' column")]
    MissingColumn {
        /// Expected column name
        column: &'static str,
    },

    /// The input file has no header row
    #[error("CSV input is empty")]
    Empty,
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_names_field_and_value() {
        let err = ClientError::invalid_input("drug_id", "X123");
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid drug_id: X123");
    }

    #[test]
    fn test_tool_error_user_message() {
        let err = ToolError::validation("pathwayId", "cannot be empty");
        assert!(err.to_user_message().contains("pathwayId"));
        assert!(err.to_user_message().contains("cannot be empty"));

        let err = ToolError::from(ClientError::invalid_input("pathway_id", "path:MAP"));
        let msg = err.to_user_message();
        assert!(msg.contains("pathway_id"));
        assert!(msg.contains("path:MAP"));
        assert!(err.is_invalid_params());
        let http = reqwest::Client::new().get("not a url").build().unwrap_err();
        assert!(!ToolError::from(ClientError::Http(http)).is_invalid_params());
    }

    #[test]
    fn test_batch_error_missing_column() {
        let err = BatchError::MissingColumn { column: "pathway_id" };
        assert!(err.to_string().contains("pathway_id"));
    }
}
