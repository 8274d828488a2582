//! The three extraction operations of the overlap analysis.
//!
//! All three preserve encounter order and retain duplicates. The ligand
//! stage appends one entry per qualifying source record, so a ligand id
//! observed in several structures is counted once per observation.

use std::collections::HashSet;

use bindmap_pdbe::models::{AnnotationRecord, InteractionPartnerRecord, LigandRecord};

use crate::partner::PartnerMatch;

/// Collect every residue index predicted by an allowlisted provider.
///
/// Provider matching is exact and case-sensitive. An allowlist that matches
/// no record yields an empty vec, not an error.
pub fn predicted_binding_residues(
    records: &[AnnotationRecord],
    providers: &[String],
) -> Vec<u32> {
    records
        .iter()
        .filter(|r| providers.iter().any(|p| p == &r.provider))
        .flat_map(|r| r.residues.iter().map(|res| res.start_index))
        .collect()
}

/// Collect the interface residues of the selected partner(s) that are also
/// in `candidates`.
///
/// No record matching the partner predicate yields an empty vec, not an
/// error.
pub fn interface_residues(
    records: &[InteractionPartnerRecord],
    partner: &PartnerMatch,
    candidates: &HashSet<u32>,
) -> Vec<u32> {
    records
        .iter()
        .filter(|r| partner.matches(&r.name))
        .flat_map(|r| r.residues.iter().map(|res| res.start_index))
        .filter(|idx| candidates.contains(idx))
        .collect()
}

/// Collect the ligand id of every record with at least one residue in
/// `targets`.
///
/// Membership short-circuits within a record; each qualifying record
/// contributes its id exactly once.
pub fn overlapping_ligands(records: &[LigandRecord], targets: &HashSet<u32>) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.residues.iter().any(|res| targets.contains(&res.start_index)))
        .map(|r| r.ligand_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindmap_pdbe::models::Residue;
    use pretty_assertions::assert_eq;

    fn residues(indices: &[u32]) -> Vec<Residue> {
        indices
            .iter()
            .map(|&i| Residue { start_index: i, end_index: Some(i) })
            .collect()
    }

    fn annotation(provider: &str, indices: &[u32]) -> AnnotationRecord {
        AnnotationRecord {
            provider: provider.to_string(),
            residues: residues(indices),
        }
    }

    fn partner_record(name: &str, indices: &[u32]) -> InteractionPartnerRecord {
        InteractionPartnerRecord {
            name: name.to_string(),
            residues: residues(indices),
        }
    }

    fn ligand(id: &str, indices: &[u32]) -> LigandRecord {
        LigandRecord {
            ligand_id: id.to_string(),
            residues: residues(indices),
        }
    }

    fn allowlist() -> Vec<String> {
        vec!["p2rank".to_string(), "3dligandsite".to_string()]
    }

    #[test]
    fn test_predicted_residues_union_in_source_order() {
        let records = vec![
            annotation("p2rank", &[388, 406, 434]),
            annotation("cansar", &[12, 13]),
            annotation("3dligandsite", &[541, 388]),
        ];

        let result = predicted_binding_residues(&records, &allowlist());

        // cansar is not allowlisted; 388 appears once per source occurrence
        assert_eq!(result, vec![388, 406, 434, 541, 388]);
    }

    #[test]
    fn test_predicted_residues_empty_allowlist_match() {
        let records = vec![annotation("cansar", &[12])];
        let result = predicted_binding_residues(&records, &allowlist());
        assert!(result.is_empty());
    }

    #[test]
    fn test_interface_residues_worked_example() {
        let predicted = vec![388, 406, 434, 541, 565, 566, 568, 589, 591, 700];
        let candidates: HashSet<u32> = predicted.into_iter().collect();

        let records = vec![
            partner_record(
                "Hirudin variant-1",
                &[5, 388, 406, 434, 541, 565, 566, 568, 589, 591, 600],
            ),
            partner_record("Hirudin-2", &[388, 406]),
        ];

        let result = interface_residues(
            &records,
            &PartnerMatch::Exact("Hirudin variant-1".to_string()),
            &candidates,
        );

        assert_eq!(result, vec![388, 406, 434, 541, 565, 566, 568, 589, 591]);
    }

    #[test]
    fn test_interface_residues_are_subset_of_candidates() {
        let candidates: HashSet<u32> = [1, 2, 3].into_iter().collect();
        let records = vec![partner_record("Fibrinogen alpha chain", &[2, 9, 3, 2])];

        let result = interface_residues(
            &records,
            &PartnerMatch::Exact("Fibrinogen alpha chain".to_string()),
            &candidates,
        );

        assert!(result.iter().all(|i| candidates.contains(i)));
        assert_eq!(result, vec![2, 3, 2]);
    }

    #[test]
    fn test_interface_residues_unmatched_partner() {
        let candidates: HashSet<u32> = [388, 406].into_iter().collect();
        let records = vec![partner_record("Hirudin variant-1", &[388])];

        let result = interface_residues(
            &records,
            &PartnerMatch::Exact("Hirudin variant-3".to_string()),
            &candidates,
        );

        assert!(result.is_empty());
    }

    #[test]
    fn test_overlapping_ligands_once_per_record() {
        let targets: HashSet<u32> = [388, 565, 591].into_iter().collect();

        let records = vec![
            ligand("GOL", &[565]),
            ligand("TYS", &[999]),
            // Two target residues in one record still contribute one entry
            ligand("0G6", &[388, 591]),
            // Same ligand id in a second structural record is retained
            ligand("GOL", &[591, 14]),
        ];

        let result = overlapping_ligands(&records, &targets);

        assert_eq!(result, vec!["GOL", "0G6", "GOL"]);
    }

    #[test]
    fn test_overlapping_ligands_empty_target_set() {
        let targets = HashSet::new();
        let records = vec![ligand("GOL", &[565])];

        let result = overlapping_ligands(&records, &targets);
        assert!(result.is_empty());
    }

    #[test]
    fn test_pipeline_stages_are_idempotent() {
        let annotations = vec![annotation("p2rank", &[388, 406, 388])];
        let first = predicted_binding_residues(&annotations, &allowlist());
        let second = predicted_binding_residues(&annotations, &allowlist());
        assert_eq!(first, second);

        let candidates: HashSet<u32> = first.iter().copied().collect();
        let partners = vec![partner_record("Hirudin variant-1", &[388, 406])];
        let matcher = PartnerMatch::Exact("Hirudin variant-1".to_string());
        assert_eq!(
            interface_residues(&partners, &matcher, &candidates),
            interface_residues(&partners, &matcher, &candidates)
        );
    }
}
