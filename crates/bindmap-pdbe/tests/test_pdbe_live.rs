//! Test the PDBe Aggregated API client against the live service.
//!
//! Run with: cargo test --package bindmap-pdbe --test test_pdbe_live -- --ignored --nocapture

use bindmap_pdbe::client::{PdbeClient, SiteDataSource};

// Human prothrombin; the worked example throughout the workspace.
const THROMBIN: &str = "P00734";

#[tokio::test]
#[ignore] // Requires network access
async fn test_fetch_thrombin_annotations() {
    let client = PdbeClient::new().expect("client build failed");

    let records = client
        .fetch_annotations(THROMBIN)
        .await
        .expect("annotations fetch failed");

    println!("Found {} annotation providers", records.len());
    for record in &records {
        println!("  {} ({} residues)", record.provider, record.residues.len());
    }

    assert!(!records.is_empty(), "Thrombin should have annotation records");
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_fetch_thrombin_interface_residues() {
    let client = PdbeClient::new().expect("client build failed");

    let records = client
        .fetch_interface_residues(THROMBIN)
        .await
        .expect("interface residues fetch failed");

    println!("Found {} interaction partners", records.len());

    assert!(
        records.iter().any(|r| r.name.starts_with("Hirudin")),
        "Thrombin should list a hirudin interaction partner"
    );
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_fetch_thrombin_ligand_sites() {
    let client = PdbeClient::new().expect("client build failed");

    let records = client
        .fetch_ligand_sites(THROMBIN)
        .await
        .expect("ligand sites fetch failed");

    println!("Found {} ligand site records", records.len());

    assert!(!records.is_empty(), "Thrombin should have observed ligands");
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_unknown_accession_is_an_error() {
    let client = PdbeClient::new().expect("client build failed");

    let result = client.fetch_annotations("X99999").await;
    assert!(result.is_err(), "nonsense accession should not yield data");
}
