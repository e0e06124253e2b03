//! Conversion script generator.
//!
//! [`generate`] renders a [`RenamePlan`] into a PostgreSQL script whose
//! sections always appear in the same order:
//!
//! 1. drop the excluded tables
//! 2. rename `snake_case` tables
//! 3. rename `snake_case` columns (against the post-rename table names)
//! 4. – 8. advisory comments: constraints, indices, functions, relationships
//!    and permissions that have to be handled by hand
//!
//! followed by a `DO $$ ... $$` block that reports completion at run time.

pub mod plan;
mod script;

pub use plan::{plan, ColumnRename, RenamePlan, TableRename};

use crate::config::ConvertOptions;
use crate::model::SchemaModel;
use crate::naming::quote_if_needed as q;
use script::ScriptWriter;

/// Generate the full conversion script for `model`. Never fails.
pub fn generate(model: &SchemaModel, options: &ConvertOptions) -> String {
    render(&plan(model, options), options)
}

/// Render an already-built plan.
pub fn render(plan: &RenamePlan, options: &ConvertOptions) -> String {
    let mut w = ScriptWriter::new();

    w.comment("Generated by ddl-camelcase: snake_case to camelCase conversion");
    if plan.drops.is_empty() {
        w.comment("No tables excluded");
    } else {
        w.comment(format!("Excluded (dropped) tables: {}", plan.drops.join(", ")));
    }

    w.section("DROP EXCLUDED TABLES");
    for table in &plan.drops {
        w.statement(format!(
            "DROP TABLE IF EXISTS {}.\"{}\" CASCADE;",
            options.schema, table
        ));
    }

    w.section("RENAME snake_case TABLES TO camelCase");
    for rename in &plan.table_renames {
        w.statement(format!(
            "ALTER TABLE IF EXISTS {}.{} RENAME TO {};",
            q(&rename.schema),
            q(&rename.from),
            q(&rename.to)
        ));
    }

    w.section("RENAME snake_case COLUMNS TO camelCase");
    for rename in &plan.column_renames {
        w.statement(format!(
            "ALTER TABLE IF EXISTS {}.{} RENAME COLUMN {} TO {};",
            q(&rename.schema),
            q(&rename.table),
            q(&rename.from),
            q(&rename.to)
        ));
    }

    w.section("RECREATE CONSTRAINTS WITH NEW NAMES");
    w.comment("NOTE: constraints must be recreated manually");
    w.comment("after checking the new table and column names");

    w.section("RECREATE INDICES");
    w.comment("NOTE: indices keep their old names and definitions;");
    w.comment("recreate them against the new column names");

    w.section("UPDATE FUNCTIONS AND PROCEDURES");
    w.comment("NOTE: every function referencing renamed tables/columns");
    w.comment("must be recreated with the new names");

    w.section("VERIFY RELATIONSHIPS");
    if options.relationships.is_empty() {
        w.comment("No relationships configured");
    } else {
        w.comment("Relationships to verify:");
        for (i, rel) in options.relationships.iter().enumerate() {
            w.comment(format!("{}. {} -> {} ({})", i + 1, rel.from, rel.to, rel.column));
        }
    }

    w.section("REVIEW PERMISSIONS");
    if !options.permission_notes.is_empty() {
        for note in &options.permission_notes {
            w.comment(note);
        }
    } else if plan.drops.is_empty() {
        w.comment("No tables removed; existing permissions are unchanged");
    } else {
        w.comment(format!(
            "With {} removed, access granted through them",
            plan.drops.join(", ")
        ));
        w.comment("must be reassigned to the owners of the remaining tables");
    }

    w.blank();
    w.statement("DO $$");
    w.statement("BEGIN");
    w.statement("    RAISE NOTICE 'camelCase conversion finished at %', NOW();");
    w.statement(format!(
        "    RAISE NOTICE 'Tables processed: %', {};",
        plan.processed_tables
    ));
    w.statement("END $$;");

    tracing::debug!(
        statements = plan.drops.len() + plan.table_renames.len() + plan.column_renames.len(),
        "script rendered"
    );

    w.finish()
}
