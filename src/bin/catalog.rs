//! Tuple Catalog CLI
//!
//! Inspect the static tuple catalog: list kinds, show field tables, and
//! export the whole catalog as JSON for external tooling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use msi_tuples::config::{OutputFormat, TuplesConfig};
use msi_tuples::{TupleDefinition, TupleKind};

#[derive(Parser)]
#[command(name = "tuple-catalog")]
#[command(about = "Inspect the tuple catalog")]
struct Cli {
    /// Path to a config file (overrides the default locations)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every tuple kind with its field count
    List,

    /// Show the field table for one tuple kind
    Show {
        /// Kind name, e.g. "Component"
        name: String,
    },

    /// Export the full catalog as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default config file to edit
    Init {
        /// Destination path
        #[arg(short, long, default_value = "tuples.toml")]
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = TuplesConfig::load_from(cli.config.as_deref())?;

    match cli.command {
        Commands::List => {
            println!("{} tuple kinds:", TupleKind::ALL.len());
            for kind in TupleKind::ALL {
                let def = kind.definition();
                println!("  {:<24} {} fields", def.name, def.fields.len());
            }
            Ok(())
        }

        Commands::Show { name } => {
            let def = match TupleDefinition::by_name(&name) {
                Some(def) => def,
                None => {
                    eprintln!("Unknown tuple kind: {}", name);
                    for suggestion in TupleKind::suggest(&name) {
                        eprintln!("  did you mean: {}?", suggestion);
                    }
                    std::process::exit(1);
                }
            };

            println!("{} ({} fields)", def.name, def.fields.len());
            for (index, field) in def.fields.iter().enumerate() {
                let nullable = if field.nullable { ", nullable" } else { "" };
                println!("  [{:>2}] {:<24} {}{}", index, field.name, field.ty, nullable);
            }
            Ok(())
        }

        Commands::Export { output } => {
            let catalog: Vec<&TupleDefinition> =
                TupleKind::ALL.iter().map(|k| k.definition()).collect();
            let export = serde_json::json!({
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "kinds": catalog,
            });

            let json = match config.output.format {
                OutputFormat::Pretty => serde_json::to_string_pretty(&export)?,
                OutputFormat::Compact => serde_json::to_string(&export)?,
            };

            if let Some(path) = output {
                std::fs::write(&path, &json)?;
                println!("Catalog written to {}", path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }

        Commands::Init { path } => {
            TuplesConfig::default().save(&path)?;
            println!("Default config written to {}", path);
            Ok(())
        }
    }
}
