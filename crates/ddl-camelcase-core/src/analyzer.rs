//! Schema analyzer: a single forward scan over a DDL dump.
//!
//! The scan is a two-state machine. Outside a table every line is ignored
//! except a `CREATE TABLE` header; inside a table each line is checked,
//! independently and in order, as a column declaration, as a `CONSTRAINT`
//! line and as the `);` terminator.
//!
//! Only `CREATE TABLE` headers, column lines and `CONSTRAINT` lines are
//! understood. Anything else is skipped without error.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{SchemaModel, TableDescriptor};
use crate::naming::unquote;

/// `CREATE TABLE [IF NOT EXISTS] [schema.]name`, each part bare or double-quoted.
static CREATE_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^CREATE TABLE\s+(?:IF NOT EXISTS\s+)?(?:(\w+|"[^"]+")\.)?(\w+|"[^"]+")"#)
        .expect("CREATE TABLE pattern is valid")
});

/// A leading identifier (bare or quoted) followed by whitespace.
static COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^("[^"]+"|\w+)\s+"#).expect("column pattern is valid")
});

const CONSTRAINT_TOKEN: &str = "CONSTRAINT";
const CHECK_TOKEN: &str = "CHECK";
const TABLE_TERMINATOR: &str = ");";

/// Scanner state.
#[derive(Debug)]
enum ParseState {
    Outside,
    InsideTable(TableBuilder),
}

/// Accumulates the body of the table currently being scanned.
#[derive(Debug)]
struct TableBuilder {
    table: TableDescriptor,
    start_line: usize,
}

impl TableBuilder {
    fn new(name: &str, schema: Option<&str>, start_line: usize) -> Self {
        Self {
            table: TableDescriptor::new(unquote(name), schema.map(|s| unquote(s).to_string())),
            start_line,
        }
    }

    /// Apply the column and constraint checks to one trimmed body line.
    fn absorb(&mut self, line: &str) {
        let is_constraint = line.contains(CONSTRAINT_TOKEN);

        if !is_constraint && !line.contains(CHECK_TOKEN) {
            if let Some(caps) = COLUMN.captures(line) {
                self.table.columns.push(caps[1].to_string());
            }
        }

        if is_constraint {
            self.table.constraints.push(line.to_string());
        }
    }

    fn finish(self, model: &mut SchemaModel) {
        tracing::debug!(
            table = %self.table.name,
            line = self.start_line,
            columns = self.table.columns.len(),
            constraints = self.table.constraints.len(),
            "registered table"
        );
        model.insert(self.table);
    }
}

/// Build a [`SchemaModel`] from raw DDL text.
///
/// Never fails: malformed or unrecognized lines are skipped. A table whose
/// `);` terminator is missing is still registered with whatever was read
/// before the next header or the end of input.
pub fn analyze(ddl: &str) -> SchemaModel {
    let mut model = SchemaModel::new();
    let mut state = ParseState::Outside;

    for (idx, raw) in ddl.lines().enumerate() {
        state = step(state, raw.trim(), idx + 1, &mut model);
    }

    if let ParseState::InsideTable(builder) = state {
        tracing::warn!(
            table = %builder.table.name,
            line = builder.start_line,
            "table block not terminated before end of input"
        );
        builder.finish(&mut model);
    }

    model
}

fn step(state: ParseState, line: &str, line_no: usize, model: &mut SchemaModel) -> ParseState {
    if let Some(caps) = CREATE_TABLE.captures(line) {
        if let ParseState::InsideTable(previous) = state {
            tracing::warn!(
                table = %previous.table.name,
                line = line_no,
                "new CREATE TABLE before previous table was terminated"
            );
            previous.finish(model);
        }
        let schema = caps.get(1).map(|m| m.as_str());
        return ParseState::InsideTable(TableBuilder::new(&caps[2], schema, line_no));
    }

    match state {
        ParseState::Outside => {
            if !line.is_empty() {
                tracing::trace!(line = line_no, "ignoring line outside table block");
            }
            ParseState::Outside
        }
        ParseState::InsideTable(mut builder) => {
            builder.absorb(line);
            if line == TABLE_TERMINATOR {
                builder.finish(model);
                ParseState::Outside
            } else {
                ParseState::InsideTable(builder)
            }
        }
    }
}
