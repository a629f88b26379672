//! Persona CLI
//!
//! Rankings, nearest neighbors, tiers and anchor lookups over CSV exports.
//! Reports are printed to stdout as JSON; logs go to stderr (`RUST_LOG`).

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use persona_core::{AbilityAxis, InfluenceDomain};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "persona_cli")]
#[command(about = "Rank, compare and classify archived personas", long_about = None)]
struct Cli {
    /// Engine config YAML (defaults to $PERSONA_ENGINE_CONFIG, then built-ins)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Rank individuals from an influence CSV
    Rank {
        /// Influence CSV path
        #[arg(long)]
        csv: PathBuf,

        /// Count only individuals with a positive score in the percentile denominator
        #[arg(long, default_value = "false")]
        exclude_unscored: bool,

        /// Rank by a single domain (political, strategic, tech, social, economic, cultural)
        #[arg(long)]
        domain: Option<InfluenceDomain>,
    },

    /// Nearest neighbors of one individual from a persona CSV
    Neighbors {
        /// Persona CSV path
        #[arg(long)]
        csv: PathBuf,

        /// Target id
        #[arg(long)]
        id: u64,

        /// Number of neighbors (defaults to the configured value)
        #[arg(long)]
        k: Option<usize>,
    },

    /// Aura and battle tier of a raw score
    Tier {
        #[arg(long, allow_negative_numbers = true)]
        score: f64,
    },

    /// Reference anchor of an ability score
    Anchor {
        /// command, martial, intellect or charisma
        #[arg(long)]
        axis: AbilityAxis,

        #[arg(long, allow_negative_numbers = true)]
        score: f64,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = persona_cli::engine_from_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Rank {
            csv,
            exclude_unscored,
            domain,
        } => {
            let (table, stats) = persona_cli::load_influence_csv(&csv)?;
            report_stats(&csv, &stats);

            let basis = match domain {
                Some(domain) => persona_cli::RankingBasis::Domain(domain),
                None => persona_cli::RankingBasis::Total,
            };
            let report =
                persona_cli::build_ranking_report(&engine, &table, basis, exclude_unscored);
            print_json(&report)?;
        }

        Commands::Neighbors { csv, id, k } => {
            let (table, stats) = persona_cli::load_personas_csv(&csv)?;
            report_stats(&csv, &stats);

            let report = persona_cli::build_neighbor_report(&engine, &table, id, k);
            if !report.found {
                tracing::warn!(id, "target not found in persona CSV");
            }
            print_json(&report)?;
        }

        Commands::Tier { score } => {
            print_json(&persona_cli::build_tier_report(&engine, score))?;
        }

        Commands::Anchor { axis, score } => {
            print_json(&persona_cli::build_anchor_report(&engine, axis, score))?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn report_stats(path: &std::path::Path, stats: &persona_cli::ParseStats) {
    tracing::info!(
        path = %path.display(),
        rows = stats.total_rows,
        parsed = stats.parsed,
        failed = stats.failed,
        duplicates = stats.duplicates,
        "loaded csv"
    );
    if stats.failed > 0 {
        tracing::warn!(failed = stats.failed, "some rows were skipped; see warnings above");
    }
}

#[cfg(feature = "cli")]
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("persona_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
