mod config;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use schema::{ExecutionContext, Identifier, Schema, SchemaDocument, resolve};
use std::path::{Path, PathBuf};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "schema-check")]
#[command(about = "Validate interface conformance and resolve interface values", long_about = None)]
struct Cli {
    /// Configuration file (defaults to discovery)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a schema document and report every conformance problem
    Check {
        /// Path to the JSON schema document
        schema: PathBuf,
    },
    /// Resolve a runtime value of an interface to its object type
    Resolve {
        /// Path to the JSON schema document
        schema: PathBuf,
        /// Identifier of the interface the value is typed as
        #[arg(short, long)]
        interface: String,
        /// The runtime value, as JSON
        #[arg(short, long)]
        value: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::loader::load_from_file(path)?,
        None => config::loader::load_with_discovery()?,
    };

    match cli.command {
        Commands::Check { schema } => check(&config, &schema),
        Commands::Resolve {
            schema,
            interface,
            value,
        } => resolve_value(&config, &schema, &interface, &value),
    }
}

fn build_schema(config: &Config, path: &Path) -> Result<Schema> {
    let document = SchemaDocument::load_from_file(path)?;
    let builder = document
        .into_builder()
        .match_options(config.matcher.match_options());
    tracing::debug!("Loaded {} type definitions from {}", builder.len(), path.display());

    match builder.build() {
        Ok(schema) => Ok(schema),
        Err(err) => {
            for error in &err.errors {
                eprintln!("error: {}", error);
            }
            Err(err).with_context(|| format!("Schema {} failed validation", path.display()))
        }
    }
}

fn check(config: &Config, path: &Path) -> Result<()> {
    let schema = build_schema(config, path)?;
    println!(
        "{}: {} interfaces, {} objects, all conforming",
        path.display(),
        schema.interfaces().count(),
        schema.objects().count()
    );
    Ok(())
}

fn resolve_value(config: &Config, path: &Path, interface: &str, value: &str) -> Result<()> {
    let schema = build_schema(config, path)?;
    let value: serde_json::Value =
        serde_json::from_str(value).context("Failed to parse --value as JSON")?;

    let Some(interface) = schema.interface(&Identifier::new(interface)) else {
        bail!("No interface '{}' in {}", interface, path.display());
    };

    let ctx = ExecutionContext::new(&schema);
    match resolve(interface, &value, &ctx)? {
        Some(object) => println!("{}", object.name),
        None => println!("unknown"),
    }
    Ok(())
}
