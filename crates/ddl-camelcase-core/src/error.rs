//! Error types for migration script generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid {kind} identifier: {name:?}")]
    InvalidIdentifier { kind: IdentifierKind, name: String },
}

/// Which option an invalid identifier was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Schema,
    ExcludedTable,
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::Schema => write!(f, "schema"),
            IdentifierKind::ExcludedTable => write!(f, "excluded table"),
        }
    }
}
