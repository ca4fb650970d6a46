use nonb_motif_rs::error::MotifError;
use nonb_motif_rs::fasta;
use std::io::Write;

#[test]
fn test_read_sequences() {
    let path = "tests/data/test1.fasta";
    let records = fasta::read_sequences(path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].label, "chr1-4357766-4357930_CPPP_WT");
    assert_eq!(
        records[0].sequence,
        "AGCTTTTTAATAGAGTCAGCAAAACTGAAGCCTtatataaagggtttgggtttgggtttggg"
    );
    assert_eq!(records[2].label, "chr1-4357712-4357732_CPPP_WT");

    // test file does not exist
    let result = fasta::read_sequences("tests/data/nonexistent.fasta");
    assert!(matches!(result, Err(MotifError::Io(_))));
}

#[test]
fn test_read_empty_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "\n   \n").unwrap();
    let result = fasta::read_sequences(file.path());
    assert!(matches!(result, Err(MotifError::InvalidFileFormat(_))));
}

#[test]
fn test_plain_text_is_one_sequence() {
    let records = fasta::parse_sequences("ACGTACGT\n  ggggcccc  \n\nTTTT\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].label, "Seq_1");
    assert_eq!(records[0].sequence, "ACGTACGTggggccccTTTT");
}

#[test]
fn test_blank_headers_get_positional_labels() {
    let records = fasta::parse_sequences(">\nACGT\n>named extra words\nGGGG\n>\nTTTT\n");
    let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Seq_1", "named", "Seq_3"]);
}

#[test]
fn test_header_without_sequence_is_kept() {
    let records = fasta::parse_sequences(">first\n>second\nACGT\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sequence, "");
    assert_eq!(records[1].sequence, "ACGT");
}

#[test]
fn test_leading_headerless_lines() {
    let records = fasta::parse_sequences("ACGT\n>next\nGGGG\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].label, "Seq_1");
    assert_eq!(records[1].label, "next");
}
