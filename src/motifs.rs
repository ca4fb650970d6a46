//! Pattern-based detectors for G-quadruplex, Z-DNA, TATA-box and triplex motifs.
//!
//! All detectors expect an uppercase sequence (see [`crate::alphabet::normalize_sequence`])
//! and report non-overlapping matches scanned left to right.

use crate::types::MotifMatch;
use once_cell::sync::Lazy;
use regex::Regex;

/// Four G-runs of at least 3 guanines, separated by loops of 1 to 7 symbols
static G_QUADRUPLEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:G{3,}[A-Z]{1,7}){3,}G{3,}").expect("valid G4 pattern"));

/// At least six CG dinucleotides in phase
static Z_DNA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:CG){6,}").expect("valid Z-DNA pattern"));

/// TATA[AT]A[AT] consensus
static TATA_BOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TATA[AT]A[AT]").expect("valid TATA pattern"));

/// Homopurine stretch of at least 10 bases
static TRIPLEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[AG]{10,}").expect("valid triplex pattern"));

fn find_all(pattern: &Regex, sequence: &str) -> Vec<MotifMatch> {
    pattern
        .find_iter(sequence)
        .map(|m| MotifMatch::new(m.start(), m.end()))
        .collect()
}

pub fn find_g_quadruplexes(sequence: &str) -> Vec<MotifMatch> {
    find_all(&G_QUADRUPLEX, sequence)
}

/// Counts G-quadruplex motifs (G3+ N1-7 G3+ N1-7 G3+ N1-7 G3+).
pub fn detect_g_quadruplex(sequence: &str) -> usize {
    G_QUADRUPLEX.find_iter(sequence).count()
}

pub fn find_z_dna(sequence: &str) -> Vec<MotifMatch> {
    find_all(&Z_DNA, sequence)
}

/// Counts runs of six or more CG repeats.
pub fn detect_z_dna(sequence: &str) -> usize {
    Z_DNA.find_iter(sequence).count()
}

pub fn find_tata_boxes(sequence: &str) -> Vec<MotifMatch> {
    find_all(&TATA_BOX, sequence)
}

pub fn detect_tata_box(sequence: &str) -> usize {
    TATA_BOX.find_iter(sequence).count()
}

/// Homopurine runs that can host a triple helix. Not part of the feature record.
pub fn find_triplexes(sequence: &str) -> Vec<MotifMatch> {
    find_all(&TRIPLEX, sequence)
}

pub fn detect_triplex(sequence: &str) -> usize {
    TRIPLEX.find_iter(sequence).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn g_quadruplex_canonical() {
        assert_eq!(detect_g_quadruplex("GGGTTTGGGTTTGGGTTTGGG"), 1);
        assert_eq!(
            find_g_quadruplexes("AAGGGTTTGGGTTTGGGTTTGGGAA"),
            vec![MotifMatch::new(2, 23)]
        );
    }

    #[test]
    fn g_quadruplex_needs_four_runs() {
        assert_eq!(detect_g_quadruplex("GGGTTTGGGTTTGGG"), 0);
        // loop longer than 7
        assert_eq!(detect_g_quadruplex("GGGTTTTTTTTGGGTTTGGGTTTGGG"), 0);
    }

    #[test]
    fn z_dna_requires_six_repeats() {
        assert_eq!(detect_z_dna("CGCGCGCGCGCG"), 1);
        assert_eq!(detect_z_dna("CGCGCGCGCG"), 0);
        assert_eq!(detect_z_dna("CGCGCGCGCGCGATCGCGCGCGCGCG"), 2);
    }

    #[test]
    fn tata_box_consensus() {
        assert_eq!(detect_tata_box("TATAAAAG"), 1);
        assert_eq!(detect_tata_box("TATACCC"), 0);
        assert_eq!(find_tata_boxes("GCTATATAT"), vec![MotifMatch::new(2, 9)]);
    }

    #[test]
    fn triplex_homopurine_run() {
        assert_eq!(detect_triplex("CCAGAGAGAGAGCC"), 1);
        assert_eq!(detect_triplex("AGAGAGAGA"), 0);
    }
}
