//! Nucleotide alphabet handling: validation, normalization and reverse complement.

use crate::error::{MotifError, Result};
use phf::{phf_map, phf_set};

/// Symbols accepted in an input sequence (uppercase): ACGT plus IUPAC ambiguity codes
static NUCLEOTIDES: phf::Set<u8> = phf_set! {
    b'A', b'C', b'G', b'T',
    b'R', b'Y', b'S', b'W', b'K', b'M',
    b'B', b'D', b'H', b'V', b'N',
};

/// Watson-Crick pairs; anything missing here complements to itself
static COMPLEMENT: phf::Map<u8, u8> = phf_map! {
    b'A' => b'T',
    b'T' => b'A',
    b'C' => b'G',
    b'G' => b'C',
    b'a' => b't',
    b't' => b'a',
    b'c' => b'g',
    b'g' => b'c',
};

/// Returns true if `base` belongs to the tolerated nucleotide alphabet (either case).
pub fn is_nucleotide(base: u8) -> bool {
    NUCLEOTIDES.contains(&base.to_ascii_uppercase())
}

/// Uppercases a raw sequence and checks every symbol against the nucleotide alphabet.
///
/// # Errors
/// * `MotifError::InvalidSequence` carrying the zero-based position of the first
///   symbol outside the alphabet
pub fn normalize_sequence(raw: &str) -> Result<String> {
    if let Some((position, c)) = raw
        .char_indices()
        .find(|&(_, c)| !c.is_ascii() || !is_nucleotide(c as u8))
    {
        return Err(MotifError::invalid_sequence(
            position,
            format!("unexpected symbol {:?}", c),
        ));
    }
    Ok(raw.to_ascii_uppercase())
}

/// Complement of a single base, case preserving; unknown symbols map to themselves.
pub fn complement(base: u8) -> u8 {
    COMPLEMENT.get(&base).copied().unwrap_or(base)
}

/// Generates the reverse complement of a DNA sequence.
///
/// # Returns
/// * `String` - The reverse complement sequence where:
///   - A ↔ T
///   - C ↔ G
///   - ambiguity codes and any other symbol are kept as they are
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .chars()
        .rev()
        .map(|c| if c.is_ascii() { complement(c as u8) as char } else { c })
        .collect()
}
