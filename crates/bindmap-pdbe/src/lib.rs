//! bindmap-pdbe — Typed client for the PDBe Aggregated API.
//!
//! Fetches the three per-accession feeds the overlap analysis consumes:
//! predicted binding-site annotations, interaction interface residues, and
//! observed ligand binding sites.

pub mod client;
pub mod models;

pub use client::{PdbeClient, SiteDataSource};
pub use models::{AnnotationRecord, InteractionPartnerRecord, LigandRecord, Residue};
