//! Sequential orchestrator for the overlap analysis.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use bindmap_common::error::Result;
use bindmap_pdbe::client::SiteDataSource;
use bindmap_pdbe::models::Residue;

use crate::filter::{interface_residues, overlapping_ligands, predicted_binding_residues};
use crate::partner::PartnerMatch;

/// Result of one overlap run.
#[derive(Debug, Clone, Serialize)]
pub struct OverlapReport {
    pub accession: String,
    /// Residues both predicted as binding sites and in contact with the
    /// selected partner, in encounter order.
    pub interface_residues: Vec<u32>,
    /// One ligand id per qualifying ligand-site record, in encounter order.
    pub ligands: Vec<String>,
}

impl OverlapReport {
    pub fn ligand_count(&self) -> usize {
        self.ligands.len()
    }
}

/// Three-stage overlap pipeline over one accession.
///
/// Stages run strictly in sequence: each fetch completes before the next
/// stage starts, since stage 2 filters against stage 1's output and stage 3
/// against stage 2's.
pub struct OverlapPipeline<S> {
    source: S,
    providers: Vec<String>,
    partner: PartnerMatch,
}

impl<S: SiteDataSource> OverlapPipeline<S> {
    pub fn new(source: S, providers: Vec<String>, partner: PartnerMatch) -> Self {
        Self {
            source,
            providers,
            partner,
        }
    }

    pub async fn run(&self, accession: &str) -> Result<OverlapReport> {
        info!(accession, partner = ?self.partner, "running binding/interface overlap analysis");

        let annotations = self.source.fetch_annotations(accession).await?;
        warn_on_zero_indices("annotations", annotations.iter().flat_map(|r| &r.residues));
        let predicted = predicted_binding_residues(&annotations, &self.providers);
        debug!(count = predicted.len(), "predicted binding residues collected");

        let candidates: HashSet<u32> = predicted.iter().copied().collect();

        let partners = self.source.fetch_interface_residues(accession).await?;
        warn_on_zero_indices("interface_residues", partners.iter().flat_map(|r| &r.residues));
        let interface = interface_residues(&partners, &self.partner, &candidates);
        debug!(count = interface.len(), "interface residues overlapping predictions");

        let targets: HashSet<u32> = interface.iter().copied().collect();

        let ligand_records = self.source.fetch_ligand_sites(accession).await?;
        warn_on_zero_indices("ligand_sites", ligand_records.iter().flat_map(|r| &r.residues));
        let ligands = overlapping_ligands(&ligand_records, &targets);

        info!(
            accession,
            interface_residues = interface.len(),
            ligands = ligands.len(),
            "overlap analysis complete"
        );

        Ok(OverlapReport {
            accession: accession.to_string(),
            interface_residues: interface,
            ligands,
        })
    }
}

/// All three endpoints number residues 1-based; an index of 0 means the
/// shared-numbering assumption does not hold for this accession.
fn warn_on_zero_indices<'a, I>(endpoint: &str, residues: I)
where
    I: IntoIterator<Item = &'a Residue>,
{
    let zeroes = residues.into_iter().filter(|r| r.start_index == 0).count();
    if zeroes > 0 {
        warn!(endpoint, count = zeroes, "residue index 0 seen; expected 1-based numbering");
    }
}
