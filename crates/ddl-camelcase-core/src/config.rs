//! Configuration for migration script generation.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, IdentifierKind};
use crate::naming::is_identifier;

/// Schema used for statements that cannot take it from a table header.
pub const DEFAULT_SCHEMA: &str = "public";

/// Table dropped instead of migrated when no exclusion list is configured.
pub const DEFAULT_EXCLUDED_TABLE: &str = "eventManagers";

/// A foreign-key relationship listed in the advisory section of the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Referencing table (post-rename name).
    pub from: String,
    /// Referenced table (post-rename name).
    pub to: String,
    /// Referencing column (post-rename name).
    pub column: String,
}

impl Relationship {
    pub fn new(from: &str, to: &str, column: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            column: column.to_string(),
        }
    }
}

/// Options for migration script generation.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `excluded-tables`).
/// This naming convention is part of the config file contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConvertOptions {
    /// Schema qualifier for the drop phase and for tables declared without one.
    pub schema: String,
    /// Tables dropped with `CASCADE` and skipped by every rename phase.
    pub excluded_tables: Vec<String>,
    /// Relationships that must be checked by hand after the migration.
    pub relationships: Vec<Relationship>,
    /// Free-form lines for the permissions section, one comment line each.
    /// When empty, the section is derived from `excluded_tables`.
    pub permission_notes: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            excluded_tables: vec![DEFAULT_EXCLUDED_TABLE.to_string()],
            relationships: vec![
                Relationship::new("eventSpaces", "hotels", "hotelId"),
                Relationship::new("eventBookings", "eventSpaces", "eventSpaceId"),
                Relationship::new("eventBookings", "hotels", "hotelId"),
                Relationship::new("hotelBookings", "hotels", "hotelId"),
                Relationship::new("hotelBookings", "roomTypes", "roomTypeId"),
            ],
            permission_notes: Vec::new(),
        }
    }
}

impl ConvertOptions {
    /// Parse options from a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject schema or excluded-table names that are not plain identifiers.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !is_identifier(&self.schema) {
            return Err(ConvertError::InvalidIdentifier {
                kind: IdentifierKind::Schema,
                name: self.schema.clone(),
            });
        }
        if let Some(bad) = self.excluded_tables.iter().find(|t| !is_identifier(t)) {
            return Err(ConvertError::InvalidIdentifier {
                kind: IdentifierKind::ExcludedTable,
                name: bad.clone(),
            });
        }
        Ok(())
    }

    pub fn is_excluded(&self, table: &str) -> bool {
        self.excluded_tables.iter().any(|t| t == table)
    }
}
