use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ddl_camelcase_core::{analyze, convert, ConvertOptions, RenamePlan, SchemaModel};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

const DEFAULT_INPUT: &str = "migrations/004_schema_full.sql";

#[derive(Parser)]
#[command(name = "ddl-camelcase")]
#[command(about = "Generate a snake_case to camelCase migration script from a PostgreSQL DDL dump")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the conversion script for a DDL dump
    Convert {
        /// Input DDL dump
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output script file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON options file (schema, excluded-tables, relationships, permission-notes)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Schema qualifier for generated statements
        #[arg(long)]
        schema: Option<String>,

        /// Table to drop instead of converting (repeatable; replaces the configured list)
        #[arg(long = "exclude", value_name = "TABLE")]
        exclude: Vec<String>,

        /// Write a JSON summary of the planned renames
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Print the schema model reconstructed from a DDL dump as JSON
    Analyze {
        /// Input DDL dump
        input: PathBuf,

        /// Output JSON file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

/// Sidecar report written by `convert --summary`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    generated_at: String,
    source: String,
    tables_found: usize,
    processed_tables: usize,
    table_renames: usize,
    column_renames: usize,
    plan: &'a RenamePlan,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for the script
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            schema,
            exclude,
            summary,
        } => {
            let mut options = match &config {
                Some(path) => load_options(path)?,
                None => ConvertOptions::default(),
            };
            if let Some(schema) = schema {
                options.schema = schema;
            }
            if !exclude.is_empty() {
                options.excluded_tables = exclude;
            }

            let ddl = read_input(&input)?;

            eprintln!("Analyzing schema...");
            let result = convert(&ddl, &options)
                .map_err(|e| anyhow::Error::from(e).context("Conversion failed"))?;
            report_tables(&result.model);

            write_text(&result.script, output.as_ref())?;
            if let Some(path) = &output {
                eprintln!("\nConversion script written: {}", path.display());
            }

            if let Some(path) = summary {
                let report = Summary {
                    generated_at: chrono::Utc::now().to_rfc3339(),
                    source: input.display().to_string(),
                    tables_found: result.model.len(),
                    processed_tables: result.plan.processed_tables,
                    table_renames: result.plan.table_renames.len(),
                    column_renames: result.plan.column_renames.len(),
                    plan: &result.plan,
                };
                write_json(&report, Some(&path), OutputFormat::Pretty)?;
            }

            eprintln!("\nRequired follow-up after running the script:");
            eprintln!("1. Recreate all constraints (PK, FK, UNIQUE, CHECK)");
            eprintln!("2. Recreate all indices with the new names");
            eprintln!("3. Recreate every function that references tables/columns");
            eprintln!("4. Update the application to use the new names");
            eprintln!("5. Test relationship integrity");
        }
        Commands::Analyze {
            input,
            output,
            format,
        } => {
            let ddl = read_input(&input)?;
            let model = analyze(&ddl);
            write_json(&model, output.as_ref(), format)?;
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

fn load_options(path: &Path) -> Result<ConvertOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    ConvertOptions::from_json(&content)
        .with_context(|| format!("Failed to parse config from: {}", path.display()))
}

fn report_tables(model: &SchemaModel) {
    eprintln!("Found {} tables:", model.len());
    let mut tables: Vec<_> = model.iter().collect();
    tables.sort_by(|a, b| a.name.cmp(&b.name));
    for table in tables {
        eprintln!("  - {} ({} columns)", table.name, table.columns.len());
    }
}

fn open_writer(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    })
}

fn write_text(text: &str, path: Option<&PathBuf>) -> Result<()> {
    let mut writer = open_writer(path)?;
    writeln!(writer, "{text}").context("Failed to write script")?;
    writer.flush().context("Failed to flush script")?;
    Ok(())
}

fn write_json<T: Serialize>(val: &T, path: Option<&PathBuf>, format: OutputFormat) -> Result<()> {
    let mut writer = open_writer(path)?;

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    // Ensure trailing newline
    writeln!(writer).context("Failed to write trailing newline")?;
    writer.flush().context("Failed to flush JSON output")?;

    Ok(())
}
