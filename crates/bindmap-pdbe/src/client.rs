//! PDBe Aggregated API client.
//!
//! Endpoints used (GET, keyed by UniProt accession):
//!   annotations:        https://www.ebi.ac.uk/pdbe/graph-api/uniprot/annotations/{accession}
//!   interface residues: https://www.ebi.ac.uk/pdbe/graph-api/uniprot/interface_residues/{accession}
//!   ligand sites:       https://www.ebi.ac.uk/pdbe/graph-api/uniprot/ligand_sites/{accession}

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use bindmap_common::error::{BindmapError, Result};
use bindmap_common::sandbox::SandboxClient as Client;

use crate::models::{
    take_records, AnnotationRecord, InteractionPartnerRecord, LigandRecord, SiteDocument,
};

const PDBE_GRAPH_API_URL: &str = "https://www.ebi.ac.uk/pdbe/graph-api";

/// Common interface for the three per-accession site data feeds.
///
/// The analysis pipeline consumes this trait rather than the concrete
/// client, so it can run against in-memory fixture documents in tests.
#[async_trait]
pub trait SiteDataSource: Send + Sync {
    /// Predicted binding-site annotations, one record per provider.
    async fn fetch_annotations(&self, accession: &str) -> Result<Vec<AnnotationRecord>>;

    /// Observed interface residues, one record per interaction partner.
    async fn fetch_interface_residues(
        &self,
        accession: &str,
    ) -> Result<Vec<InteractionPartnerRecord>>;

    /// Observed ligand binding sites, one record per ligand observation.
    async fn fetch_ligand_sites(&self, accession: &str) -> Result<Vec<LigandRecord>>;
}

/// Client for the PDBe Aggregated API.
pub struct PdbeClient {
    client: Client,
    base_url: String,
}

impl PdbeClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(PDBE_GRAPH_API_URL)
    }

    /// Point the client at a different API root, e.g. a local fixture server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new()?,
            base_url: base_url.into(),
        })
    }

    /// Fetch one endpoint document and narrow it to the query accession.
    ///
    /// Any non-200 status is a `NoData` error; the body is only parsed on
    /// success, and parsed constructively into the typed document.
    async fn fetch_document<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        accession: &str,
    ) -> Result<Vec<T>> {
        let url = format!("{}/uniprot/{}/{}", self.base_url, endpoint, accession);

        let resp = self.client.get(&url)?.send().await?;

        if resp.status() != reqwest::StatusCode::OK {
            return Err(BindmapError::NoData {
                endpoint: endpoint.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let body = resp.text().await?;
        let doc: SiteDocument<T> = serde_json::from_str(&body)?;
        take_records(doc, accession, endpoint)
    }
}

#[async_trait]
impl SiteDataSource for PdbeClient {
    #[instrument(skip(self))]
    async fn fetch_annotations(&self, accession: &str) -> Result<Vec<AnnotationRecord>> {
        let records = self.fetch_document("annotations", accession).await?;
        debug!(count = records.len(), "annotations endpoint returned records");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn fetch_interface_residues(
        &self,
        accession: &str,
    ) -> Result<Vec<InteractionPartnerRecord>> {
        let records = self.fetch_document("interface_residues", accession).await?;
        debug!(count = records.len(), "interface_residues endpoint returned records");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn fetch_ligand_sites(&self, accession: &str) -> Result<Vec<LigandRecord>> {
        let records = self.fetch_document("ligand_sites", accession).await?;
        debug!(count = records.len(), "ligand_sites endpoint returned records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls_are_allowlisted() {
        let client = PdbeClient::new().unwrap();
        for endpoint in ["annotations", "interface_residues", "ligand_sites"] {
            let url = format!("{}/uniprot/{}/P00734", client.base_url, endpoint);
            assert!(client.client.is_allowed(&url), "{url} should be allowed");
        }
    }

    #[test]
    fn test_custom_base_url() {
        let client = PdbeClient::with_base_url("http://localhost:8080/graph-api").unwrap();
        assert!(client
            .client
            .is_allowed("http://localhost:8080/graph-api/uniprot/annotations/P00734"));
    }
}
