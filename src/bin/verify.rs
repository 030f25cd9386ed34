//! Intermediate Verifier CLI
//!
//! Checks intermediate files before they are handed to the linker:
//! format version, content checksum, and every row against the catalog.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use msi_tuples::config::TuplesConfig;
use msi_tuples::Intermediate;

#[derive(Parser)]
#[command(name = "tuple-verify")]
#[command(about = "Verify intermediate files against the tuple catalog")]
struct Cli {
    /// Path to a config file (overrides the default locations)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an intermediate and validate every row
    Check {
        /// Intermediate file (falls back to verify.default_intermediate)
        file: Option<PathBuf>,

        /// Also require all non-nullable fields to be set
        #[arg(long, conflicts_with = "no_strict")]
        strict: bool,

        /// Skip the completeness check even when the config enables it
        #[arg(long)]
        no_strict: bool,
    },

    /// Print row counts per kind and section
    Stats {
        /// Intermediate file
        file: PathBuf,
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
        Commands::Check {
            file,
            strict,
            no_strict,
        } => {
            let path = file
                .or(config.verify.default_intermediate.clone())
                .ok_or("no intermediate file given and none configured")?;

            // Load already verifies version, checksum, and row shapes
            let intermediate = Intermediate::load(&path)?;

            if resolve_strict(strict, no_strict, config.verify.strict) {
                intermediate.validate_complete()?;
            }

            println!(
                "{} - {} sections, {} tuples, all rows valid",
                path.display(),
                intermediate.sections.len(),
                intermediate.tuples().count(),
            );
            Ok(())
        }

        Commands::Stats { file } => {
            let intermediate = Intermediate::load(&file)?;

            println!("{} ({})", intermediate.id, file.display());
            for section in &intermediate.sections {
                println!(
                    "  section {:<24} {:?}, {} tuples",
                    section.id.as_deref().unwrap_or("<anonymous>"),
                    section.kind,
                    section.tuples.len(),
                );
            }

            println!();
            for (kind, count) in intermediate.kind_counts() {
                println!("  {:<24} {}", kind, count);
            }
            Ok(())
        }
    }
}

/// Either flag overrides the configured default; clap rejects both at once
fn resolve_strict(strict: bool, no_strict: bool, configured: bool) -> bool {
    if strict {
        true
    } else if no_strict {
        false
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_strict_flags_override_config() {
        assert!(resolve_strict(true, false, false));
        assert!(!resolve_strict(false, true, true));
        assert!(resolve_strict(false, false, true));
        assert!(!resolve_strict(false, false, false));
    }
}
