//! # ddl-camelcase-core
//!
//! Reads a PostgreSQL DDL dump, reconstructs the tables it declares and
//! generates a migration script that renames every `snake_case` table and
//! column to `camelCase`, dropping the configured excluded tables instead.
//!
//! ```
//! use ddl_camelcase_core::{convert, ConvertOptions};
//!
//! let ddl = "CREATE TABLE public.hotel_bookings (\n  room_type_id integer\n);";
//! let result = convert(ddl, &ConvertOptions::default()).unwrap();
//! assert!(result
//!     .script
//!     .contains("ALTER TABLE IF EXISTS public.hotel_bookings RENAME TO hotelBookings;"));
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;

pub use analyzer::analyze;
pub use config::{ConvertOptions, Relationship};
pub use error::ConvertError;
pub use generator::{generate, plan, RenamePlan};
pub use model::{SchemaModel, TableDescriptor};
pub use naming::snake_to_camel;

/// Output of [`convert`].
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Tables discovered in the input.
    pub model: SchemaModel,
    /// Statements the script contains.
    pub plan: RenamePlan,
    /// The rendered SQL script (no trailing newline).
    pub script: String,
}

/// Analyze `ddl` and generate its conversion script.
///
/// Fails only when `options` carries an invalid schema or excluded-table name;
/// the DDL itself is always accepted on a best-effort basis.
pub fn convert(ddl: &str, options: &ConvertOptions) -> Result<ConvertResult, ConvertError> {
    options.validate()?;

    let model = analyze(ddl);
    tracing::debug!(tables = model.len(), "schema analyzed");

    let plan = plan(&model, options);
    let script = generator::render(&plan, options);

    Ok(ConvertResult {
        model,
        plan,
        script,
    })
}
