use crate::error::{MotifError, Result};
use std::collections::BTreeMap;

/// Default k-mer width used by the perplexity model
pub const DEFAULT_KMER_SIZE: usize = 3;

/// Counts the overlapping k-mers of `sequence`, keyed by k-mer.
///
/// Keys are uppercased so that counts do not depend on input case. The map is ordered,
/// which keeps every downstream floating point reduction in a fixed order.
pub fn kmer_counts(sequence: &str, k: usize) -> BTreeMap<Vec<u8>, usize> {
    let bytes = sequence.as_bytes();
    let mut counts = BTreeMap::new();
    if k == 0 || bytes.len() < k {
        return counts;
    }
    for window in bytes.windows(k) {
        *counts
            .entry(window.to_ascii_uppercase())
            .or_insert(0usize) += 1;
    }
    counts
}

/// Shannon entropy (base 2) of the empirical k-mer distribution.
///
/// # Errors
/// * `MotifError::InvalidParameter` if `k` is zero
/// * `MotifError::InvalidSequence` if the sequence is shorter than `k` (no k-mers)
pub fn kmer_entropy(sequence: &str, k: usize) -> Result<f64> {
    if k == 0 {
        return Err(MotifError::invalid_parameter(
            "kmer_size",
            k,
            "k-mer size must be positive",
        ));
    }
    if sequence.len() < k {
        return Err(MotifError::invalid_sequence(
            sequence.len(),
            format!("sequence of length {} has no {}-mers", sequence.len(), k),
        ));
    }

    let counts = kmer_counts(sequence, k);
    let total = (sequence.len() - k + 1) as f64;
    let entropy = counts.values().fold(0.0f64, |acc, &count| {
        let p = count as f64 / total;
        acc - p * p.log2()
    });
    Ok(entropy)
}

/// Perplexity of a sequence under a zero-order empirical k-mer model, `2^H`.
///
/// Higher values mean more uniform k-mer usage; a sequence made of a single
/// repeated k-mer scores exactly 1.
///
/// # Arguments
/// * `sequence` - DNA sequence (case-insensitive)
/// * `k` - k-mer width, see [`DEFAULT_KMER_SIZE`]
///
/// # Errors
/// Same as [`kmer_entropy`].
pub fn perplexity(sequence: &str, k: usize) -> Result<f64> {
    kmer_entropy(sequence, k).map(f64::exp2)
}
