use crate::error::{MotifError, Result};
use crate::features::{extract_features_with, ExtractorConfig};
use crate::types::{LabeledFeatures, SequenceRecord};
use rayon::prelude::*;

/// A sequence whose extraction failed, with its position in the input batch
#[derive(Debug)]
pub struct ExtractionFailure {
    pub index: usize,
    pub label: String,
    pub error: MotifError,
}

/// Result of a batch run: successful records and per-sequence failures, both in input order
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<LabeledFeatures>,
    pub failures: Vec<ExtractionFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Checks parameters that apply to the whole batch before any sequence is touched.
fn check_batch_config(records: &[SequenceRecord], config: &ExtractorConfig) -> Result<()> {
    config.validate()?;

    // empty inputs are reported per sequence, so they do not constrain k
    let shortest = records
        .iter()
        .map(|record| record.sequence.len())
        .filter(|&len| len > 0)
        .min();

    if let Some(shortest) = shortest {
        if config.kmer_size > shortest {
            return Err(MotifError::invalid_parameter(
                "kmer_size",
                config.kmer_size,
                format!("exceeds the shortest sequence in the batch ({})", shortest),
            ));
        }
    }
    Ok(())
}

/// Extracts a feature record for every sequence of a batch.
///
/// Sequences are processed in parallel; the output keeps input order. A sequence
/// that fails (bad symbol, empty) is recorded in [`BatchOutcome::failures`] and does
/// not stop the others.
///
/// # Arguments
/// * `records` - Labeled input sequences
/// * `config` - Extraction parameters shared by the whole batch
///
/// # Errors
/// * `MotifError::InvalidParameter` if `config` is invalid or its k-mer size exceeds
///   the shortest non-empty sequence; nothing is extracted in that case
pub fn extract_batch(records: &[SequenceRecord], config: &ExtractorConfig) -> Result<BatchOutcome> {
    check_batch_config(records, config)?;
    log::debug!("extracting features from {} sequences", records.len());

    let results: Vec<(usize, Result<LabeledFeatures>)> = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| {
            let result = extract_features_with(&record.sequence, config).map(|features| {
                LabeledFeatures {
                    label: record.label.clone(),
                    features,
                }
            });
            (index, result)
        })
        .collect();

    let mut outcome = BatchOutcome::default();
    for (index, result) in results {
        match result {
            Ok(labeled) => outcome.records.push(labeled),
            Err(error) => {
                let label = records[index].label.clone();
                log::debug!("skipping sequence {} ({}): {}", index, label, error);
                outcome.failures.push(ExtractionFailure {
                    index,
                    label,
                    error,
                });
            }
        }
    }

    log::debug!(
        "extracted {} records, {} failures",
        outcome.records.len(),
        outcome.failures.len()
    );
    Ok(outcome)
}
