//! bindmap-analysis — Residue set intersection pipeline.
//!
//! Chains three extractions for one accession: predicted ligand-binding
//! residues from allowlisted providers, narrowed to the residues in contact
//! with a chosen interaction partner, then the ligands observed binding at
//! any of those residues.

pub mod filter;
pub mod partner;
pub mod pipeline;

pub use filter::{interface_residues, overlapping_ligands, predicted_binding_residues};
pub use partner::PartnerMatch;
pub use pipeline::{OverlapPipeline, OverlapReport};
