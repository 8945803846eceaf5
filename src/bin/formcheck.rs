//! Formcheck CLI
//!
//! Validates JSON form payloads against any of the three schema backends.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use formcheck::{
    backend_options, BackendId, FieldError, FormPayload, FormSchema, FormcheckConfig,
    OutputFormat, SchemaSelector,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(about = "Validate form payloads against interchangeable schema backends")]
struct Cli {
    /// Path to a config file (otherwise formcheck.toml and FORMCHECK__* env)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable backends
    Backends,

    /// Validate a JSON payload file
    Validate {
        /// Path to the payload JSON
        payload: PathBuf,

        /// Backend to validate with (default from config)
        #[arg(short, long)]
        backend: Option<BackendId>,
    },

    /// Print a payload that satisfies every constraint
    Sample,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        FormcheckConfig::load_from(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Backends => {
            for option in backend_options() {
                println!("{:<12} {}", option.id.as_str(), option.label);
            }
            Ok(())
        }

        Commands::Sample => {
            let payload = FormPayload::sample();
            let out = match config.output.format {
                OutputFormat::Pretty => serde_json::to_string_pretty(&payload)?,
                OutputFormat::Compact => serde_json::to_string(&payload)?,
            };
            println!("{out}");
            Ok(())
        }

        Commands::Validate { payload, backend } => {
            let id = backend.unwrap_or(config.validation.backend);
            let selector = SchemaSelector::with_active(id)?;

            let form = FormPayload::from_json_file(&payload)
                .with_context(|| format!("reading payload {}", payload.display()))?;

            let report = selector.schema().validate(&form);
            if report.is_valid() {
                println!("✅ {} - payload is valid", id.label());
                return Ok(());
            }

            let shown: Vec<&FieldError> = if config.validation.fail_fast {
                report.first().into_iter().collect()
            } else {
                report.errors().iter().collect()
            };

            println!("❌ {} - {} violated constraint(s)", id.label(), report.len());
            for error in shown {
                println!("  └─ {}: {}", error.field, error.message);
            }
            std::process::exit(1);
        }
    }
}
