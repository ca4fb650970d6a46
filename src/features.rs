use crate::alphabet::normalize_sequence;
use crate::cruciform::{detect_cruciform, find_cruciforms, CruciformParams};
use crate::error::{MotifError, Result};
use crate::motifs::*;
use crate::perplexity::{perplexity, DEFAULT_KMER_SIZE};
use crate::repeats::{detect_direct_repeats, find_direct_repeats};
use crate::types::{FeatureRecord, MotifKind, MotifMatch};
use serde::{Deserialize, Serialize};

/// Parameters shared by every extraction in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// k-mer width of the perplexity model
    pub kmer_size: usize,
    pub cruciform: CruciformParams,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            kmer_size: DEFAULT_KMER_SIZE,
            cruciform: CruciformParams::default(),
        }
    }
}

impl ExtractorConfig {
    /// # Errors
    /// * `MotifError::InvalidParameter` for a zero k-mer size or inconsistent cruciform arms
    pub fn validate(&self) -> Result<()> {
        if self.kmer_size == 0 {
            return Err(MotifError::invalid_parameter(
                "kmer_size",
                self.kmer_size,
                "k-mer size must be positive",
            ));
        }
        self.cruciform.validate()
    }
}

/// A single detector hit, tagged with its motif family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MotifHit {
    pub kind: MotifKind,
    #[serde(flatten)]
    pub span: MotifMatch,
}

/// Uppercases and validates `raw`, rejecting empty input.
fn prepare(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(MotifError::invalid_sequence(0, "empty sequence"));
    }
    normalize_sequence(raw)
}

/// Computes the feature record of a sequence with the default configuration.
///
/// See [`extract_features_with`].
pub fn extract_features(sequence: &str) -> Result<FeatureRecord> {
    extract_features_with(sequence, &ExtractorConfig::default())
}

/// Computes perplexity and the five structural-motif counts of a sequence.
///
/// The input is case-insensitive; it is uppercased before any detector runs.
///
/// # Errors
/// * `MotifError::InvalidParameter` if `config` does not validate
/// * `MotifError::InvalidSequence` if the sequence is empty, holds a symbol outside
///   the nucleotide alphabet, or is shorter than the k-mer size
pub fn extract_features_with(sequence: &str, config: &ExtractorConfig) -> Result<FeatureRecord> {
    config.validate()?;
    let seq = prepare(sequence)?;

    Ok(FeatureRecord {
        perplexity: perplexity(&seq, config.kmer_size)?,
        g_quadruplex: detect_g_quadruplex(&seq),
        z_dna: detect_z_dna(&seq),
        cruciform: detect_cruciform(&seq, &config.cruciform),
        tata_box: detect_tata_box(&seq),
        direct_repeats: detect_direct_repeats(&seq),
        length: seq.len(),
    })
}

/// Runs every detector, triplex included, and returns all hits sorted by position.
///
/// # Errors
/// * `MotifError::InvalidParameter` for invalid cruciform parameters
/// * `MotifError::InvalidSequence` for an empty sequence or one outside the alphabet
pub fn scan_motifs(sequence: &str, params: &CruciformParams) -> Result<Vec<MotifHit>> {
    params.validate()?;
    let seq = prepare(sequence)?;

    let mut hits = Vec::new();
    for kind in MotifKind::ALL {
        let spans = match kind {
            MotifKind::GQuadruplex => find_g_quadruplexes(&seq),
            MotifKind::ZDna => find_z_dna(&seq),
            MotifKind::Cruciform => find_cruciforms(&seq, params),
            MotifKind::TataBox => find_tata_boxes(&seq),
            MotifKind::DirectRepeat => find_direct_repeats(&seq),
            MotifKind::Triplex => find_triplexes(&seq),
        };
        hits.extend(spans.into_iter().map(|span| MotifHit { kind, span }));
    }
    hits.sort_by_key(|hit| (hit.span, hit.kind));
    Ok(hits)
}

/// Per-position count of the hits covering each base of a sequence of `length` symbols.
pub fn motif_density(length: usize, hits: &[MotifHit]) -> Vec<u32> {
    let mut density = vec![0u32; length];
    for hit in hits {
        let end = hit.span.end.min(length);
        for slot in density.iter_mut().take(end).skip(hit.span.start) {
            *slot += 1;
        }
    }
    density
}
