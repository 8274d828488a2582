//! Bindmap — ligand and interface residue overlap analysis.
//! Entry point for the CLI binary.

mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bindmap_analysis::{OverlapPipeline, PartnerMatch};
use bindmap_pdbe::PdbeClient;

/// Find the ligands observed to bind where predicted binding sites overlap
/// a chosen interaction partner's interface.
#[derive(Debug, Parser)]
#[command(name = "bindmap", version, about)]
struct Cli {
    /// UniProt accession of the query protein (e.g. P00734 for thrombin).
    accession: String,

    /// Interaction partner name to select; defaults to the configured one.
    #[arg(long)]
    partner: Option<String>,

    /// How to match the partner name.
    #[arg(long, value_enum, default_value = "exact")]
    partner_match: MatchMode,

    /// Annotation provider to allowlist (repeatable); overrides the config.
    #[arg(long = "provider")]
    providers: Vec<String>,

    /// Path to the config file (otherwise bindmap.toml / BINDMAP_CONFIG).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MatchMode {
    Exact,
    Prefix,
    Contains,
}

impl MatchMode {
    fn into_partner_match(self, name: String) -> PartnerMatch {
        match self {
            MatchMode::Exact    => PartnerMatch::Exact(name),
            MatchMode::Prefix   => PartnerMatch::Prefix(name),
            MatchMode::Contains => PartnerMatch::Contains(name),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bindmap=debug,info")),
        )
        .init();

    let cli = Cli::parse();

    info!("🔬 Bindmap starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => config::Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::Config::load()?,
    };

    let partner_name = cli
        .partner
        .clone()
        .unwrap_or_else(|| config.analysis.partner.clone());
    let partner = cli.partner_match.into_partner_match(partner_name);
    let providers = if cli.providers.is_empty() {
        config.analysis.providers.clone()
    } else {
        cli.providers.clone()
    };

    let client = PdbeClient::with_base_url(config.api.base_url.clone())
        .context("building PDBe client")?;
    let pipeline = OverlapPipeline::new(client, providers, partner);

    let report = pipeline.run(&cli.accession).await?;

    println!("Accession: {}", report.accession);
    println!("Interface residues in predicted binding sites ({}):", report.interface_residues.len());
    println!("  {:?}", report.interface_residues);
    println!("Ligands observed at those residues ({}):", report.ligand_count());
    for ligand in &report.ligands {
        println!("  {}", ligand);
    }

    Ok(())
}
