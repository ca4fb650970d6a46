use nonb_motif_rs::alphabet::reverse_complement;
use nonb_motif_rs::cruciform::{detect_cruciform, find_cruciforms, CruciformParams};
use nonb_motif_rs::error::MotifError;
use nonb_motif_rs::features::{extract_features, extract_features_with, ExtractorConfig};
use nonb_motif_rs::motifs::{detect_g_quadruplex, detect_tata_box, detect_z_dna};
use nonb_motif_rs::perplexity::perplexity;
use nonb_motif_rs::types::MotifMatch;
use proptest::prelude::*;

#[test]
fn test_motif_reference_sequences() {
    assert_eq!(detect_g_quadruplex("GGGTTTGGGTTTGGGTTTGGG"), 1);
    assert_eq!(detect_z_dna("CGCGCGCGCGCG"), 1);
    assert_eq!(detect_z_dna("CGCGCGCGCG"), 0);
    assert_eq!(detect_tata_box("TATAAAAG"), 1);
    assert_eq!(detect_tata_box("TATACCC"), 0);
}

#[test]
fn test_unit_perplexity() {
    assert_eq!(perplexity("GGGGGGGGGGGG", 3).unwrap(), 1.0);
    assert_eq!(perplexity("ACGTAC", 6).unwrap(), 1.0);
    assert_eq!(extract_features("aaaaaaa").unwrap().perplexity, 1.0);
}

#[test]
fn test_full_record() {
    let seq = "TATAAAAGGGTTTGGGTTTGGGTTTGGGCGCGCGCGCGCGCAGCAGCAG";
    let record = extract_features(seq).unwrap();
    assert_eq!(record.length, seq.len());
    assert_eq!(record.tata_box, 1);
    assert_eq!(record.g_quadruplex, 1);
    assert_eq!(record.z_dna, 1);
    assert!(record.direct_repeats >= 1);
    assert!(record.perplexity > 1.0);
}

#[test]
fn test_ambiguity_codes_are_tolerated() {
    let record = extract_features("NNNNACGTRYACGT").unwrap();
    assert_eq!(record.length, 14);

    let err = extract_features("ACGTU").unwrap_err();
    assert!(matches!(err, MotifError::InvalidSequence { position: 4, .. }));
}

#[test]
fn test_sequence_shorter_than_k() {
    let config = ExtractorConfig {
        kmer_size: 5,
        ..Default::default()
    };
    assert!(matches!(
        extract_features_with("ACGT", &config),
        Err(MotifError::InvalidSequence { .. })
    ));
}

#[test]
fn test_inputs_shorter_than_default_k() {
    // no 3-mers means no perplexity, so the record is refused rather than zero-filled
    for seq in ["A", "AC", "gt"] {
        match extract_features(seq) {
            Err(MotifError::InvalidSequence { position, .. }) => assert_eq!(position, seq.len()),
            other => panic!("expected InvalidSequence for {:?}, got {:?}", seq, other),
        }
    }

    // the same short inputs are fine once k fits
    let config = ExtractorConfig {
        kmer_size: 1,
        ..Default::default()
    };
    for seq in ["A", "AC", "gt"] {
        let record = extract_features_with(seq, &config).unwrap();
        assert_eq!(record.length, seq.len());
        assert_eq!(record.cruciform, 0);
        assert_eq!(record.direct_repeats, 0);
    }
}

#[test]
fn test_cruciform_custom_geometry() {
    let params = CruciformParams::new(3, 3, 2).unwrap();
    // AAC .. GTT
    assert_eq!(
        find_cruciforms("AACGGGTT", &params),
        vec![MotifMatch::new(0, 8)]
    );
}

#[test]
fn test_cruciform_ambiguity_maps_to_itself() {
    let params = CruciformParams::new(4, 4, 2).unwrap();
    // revcomp(ANCG) = CGNT
    assert_eq!(detect_cruciform("ANCGTTCGNT", &params), 1);
}

fn dna(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], 0..max_len)
        .prop_map(|bases| bases.into_iter().collect())
}

proptest! {
    #[test]
    fn cruciform_count_is_strand_symmetric(seq in dna(120)) {
        let params = CruciformParams::default();
        let forward = find_cruciforms(&seq, &params);
        let reverse = find_cruciforms(&reverse_complement(&seq), &params);
        prop_assert_eq!(forward.len(), reverse.len());

        // mirrored coordinates line up hit for hit
        let n = seq.len();
        let mut mirrored: Vec<MotifMatch> = reverse
            .iter()
            .map(|m| MotifMatch::new(n - m.end, n - m.start))
            .collect();
        let mut forward_sorted = forward.clone();
        mirrored.sort();
        forward_sorted.sort();
        prop_assert_eq!(forward_sorted, mirrored);
    }

    #[test]
    fn record_length_matches_input(seq in dna(200)) {
        prop_assume!(seq.len() >= 3);
        let record = extract_features(&seq).unwrap();
        prop_assert_eq!(record.length, seq.len());
        prop_assert!(record.perplexity.is_finite());
        prop_assert!(record.perplexity >= 1.0 - 1e-12);
    }

    #[test]
    fn short_records_keep_their_length(seq in dna(3)) {
        prop_assume!(!seq.is_empty());
        let config = ExtractorConfig {
            kmer_size: 1,
            ..Default::default()
        };
        let record = extract_features_with(&seq, &config).unwrap();
        prop_assert_eq!(record.length, seq.len());
        prop_assert!(extract_features(&seq).is_err());
    }

    #[test]
    fn extraction_is_deterministic_and_case_blind(seq in dna(200)) {
        prop_assume!(seq.len() >= 3);
        let first = extract_features(&seq).unwrap();
        let second = extract_features(&seq).unwrap();
        let lower = extract_features(&seq.to_lowercase()).unwrap();
        prop_assert_eq!(first.perplexity.to_bits(), second.perplexity.to_bits());
        prop_assert_eq!(first.perplexity.to_bits(), lower.perplexity.to_bits());
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, lower);
    }
}
