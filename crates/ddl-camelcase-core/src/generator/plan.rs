//! Rename planning: decides which statements the script will contain.
//!
//! The plan is computed from the model in three linear passes (drops, table
//! renames, column renames) and is the only input the renderer needs besides
//! the options.

use serde::Serialize;

use crate::config::ConvertOptions;
use crate::model::SchemaModel;
use crate::naming::{is_quoted, renamed_table, snake_to_camel};

/// A table renamed from `snake_case` to `camelCase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRename {
    pub schema: String,
    pub from: String,
    pub to: String,
}

/// A column renamed inside an already-renamed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRename {
    pub schema: String,
    /// Post-rename table name.
    pub table: String,
    pub from: String,
    pub to: String,
}

/// Every generated statement, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamePlan {
    /// Excluded tables, dropped with `CASCADE` whether or not the model has them.
    pub drops: Vec<String>,
    pub table_renames: Vec<TableRename>,
    pub column_renames: Vec<ColumnRename>,
    /// Tables in the model that are not excluded.
    pub processed_tables: usize,
}

/// Build the rename plan for `model`. Never fails.
pub fn plan(model: &SchemaModel, options: &ConvertOptions) -> RenamePlan {
    let schema_of = |schema: &Option<String>| -> String {
        schema.clone().unwrap_or_else(|| options.schema.clone())
    };

    let drops = options.excluded_tables.clone();

    let table_renames: Vec<TableRename> = model
        .iter()
        .filter(|t| t.name.contains('_') && !options.is_excluded(&t.name))
        .map(|t| TableRename {
            schema: schema_of(&t.schema),
            from: t.name.clone(),
            to: snake_to_camel(&t.name),
        })
        .collect();

    let mut column_renames = Vec::new();
    for table in model.iter().filter(|t| !options.is_excluded(&t.name)) {
        let resolved = renamed_table(&table.name);
        for column in &table.columns {
            if column.contains('_') && !is_quoted(column) {
                column_renames.push(ColumnRename {
                    schema: schema_of(&table.schema),
                    table: resolved.clone(),
                    from: column.clone(),
                    to: snake_to_camel(column),
                });
            }
        }
    }

    let processed_tables = model
        .table_names()
        .filter(|name| !options.is_excluded(name))
        .count();

    tracing::debug!(
        drops = drops.len(),
        table_renames = table_renames.len(),
        column_renames = column_renames.len(),
        processed_tables,
        "rename plan built"
    );

    RenamePlan {
        drops,
        table_renames,
        column_renames,
        processed_tables,
    }
}
