//! Configuration loading for Bindmap.
//! Reads bindmap.toml from the current directory or path in BINDMAP_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String { "https://www.ebi.ac.uk/pdbe/graph-api".to_string() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Annotation providers whose predicted binding sites are pooled.
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,
    /// Interaction partner whose interface residues gate the analysis.
    #[serde(default = "default_partner")]
    pub partner: String,
}

fn default_providers() -> Vec<String> {
    vec!["p2rank".to_string(), "3dligandsite".to_string()]
}
fn default_partner() -> String { "Hirudin variant-1".to_string() }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            partner: default_partner(),
        }
    }
}


impl Config {
    /// Load configuration from bindmap.toml.
    /// Checks BINDMAP_CONFIG env var first, then the current directory.
    /// A missing file falls back to defaults so the CLI works out of the box.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("BINDMAP_CONFIG")
            .unwrap_or_else(|_| "bindmap.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
