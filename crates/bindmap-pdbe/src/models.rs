//! Typed payloads for the PDBe Aggregated API endpoints.
//!
//! Every endpoint returns a document keyed by the query accession:
//!   { "<accession>": { "data": [ <record>, ... ] } }
//! Record residue lists are ordered and may contain duplicates; both are
//! meaningful downstream and must be preserved.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use bindmap_common::error::{BindmapError, Result};

/// A single residue reference within a record.
///
/// `start_index` is the 1-based position in the query protein sequence. All
/// three endpoints number residues against the same UniProt sequence, so
/// indices from different feeds compare directly as integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residue {
    #[serde(rename = "startIndex")]
    pub start_index: u32,
    #[serde(rename = "endIndex", default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<u32>,
}

/// One provider's predictions from the annotations endpoint.
///
/// The JSON `accession` field here is the provider id (e.g. "p2rank"),
/// not a protein accession.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationRecord {
    #[serde(rename = "accession")]
    pub provider: String,
    pub residues: Vec<Residue>,
}

/// One interaction partner from the interface-residues endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionPartnerRecord {
    pub name: String,
    pub residues: Vec<Residue>,
}

/// One observed ligand site from the ligand-sites endpoint.
///
/// `ligand_id` is a chemical component identifier; the same ligand can
/// appear in several records, one per structural observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LigandRecord {
    #[serde(rename = "accession")]
    pub ligand_id: String,
    pub residues: Vec<Residue>,
}

/// The `data` wrapper each endpoint nests its record list under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataBlock<T> {
    pub data: Vec<T>,
}

/// A decoded endpoint document, keyed by accession.
pub type SiteDocument<T> = HashMap<String, DataBlock<T>>;

/// Pull the record list for one accession out of a decoded document.
///
/// An absent accession key is an API contract violation and surfaces as
/// `AccessionMissing`, never as a silent empty list.
pub fn take_records<T>(
    mut doc: SiteDocument<T>,
    accession: &str,
    endpoint: &str,
) -> Result<Vec<T>> {
    match doc.remove(accession) {
        Some(block) => Ok(block.data),
        None => Err(BindmapError::AccessionMissing {
            accession: accession.to_string(),
            endpoint: endpoint.to_string(),
        }),
    }
}
