use crate::error::{MotifError, Result};
use crate::scoring::Scorer;
use crate::types::{FeatureTable, LabeledFeatures, FEATURE_COLUMNS};
use ndarray::Array2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Stacks feature vectors into an `n x 7` matrix, one row per record, columns ordered as
/// [`FEATURE_COLUMNS`].
pub fn feature_matrix(records: &[LabeledFeatures]) -> Array2<f64> {
    let mut matrix = Array2::zeros((records.len(), FEATURE_COLUMNS.len()));
    for (mut row, record) in matrix.rows_mut().into_iter().zip(records) {
        row.assign(&record.features.to_array());
    }
    matrix
}

fn count_column(
    name: &str,
    records: &[LabeledFeatures],
    field: fn(&LabeledFeatures) -> usize,
) -> Column {
    Column::new(
        name.into(),
        records
            .iter()
            .map(|r| field(r) as u64)
            .collect::<Vec<u64>>(),
    )
}

/// Builds the feature table of a batch.
///
/// # Returns
/// * `Result<FeatureTable>` - A DataFrame with:
///   - "label": sequence identifiers
///   - one column per entry of [`FEATURE_COLUMNS`], rows in input order
///
/// # Errors
/// * Returns `MotifError::DataError` if DataFrame creation fails
pub fn features_to_dataframe(records: &[LabeledFeatures]) -> Result<FeatureTable> {
    let labels: Vec<String> = records.iter().map(|r| r.label.clone()).collect();
    let perplexities: Vec<f64> = records.iter().map(|r| r.features.perplexity).collect();

    let df = DataFrame::new(vec![
        Column::new("label".into(), labels),
        Column::new(FEATURE_COLUMNS[0].into(), perplexities),
        count_column(FEATURE_COLUMNS[1], records, |r| r.features.g_quadruplex),
        count_column(FEATURE_COLUMNS[2], records, |r| r.features.z_dna),
        count_column(FEATURE_COLUMNS[3], records, |r| r.features.cruciform),
        count_column(FEATURE_COLUMNS[4], records, |r| r.features.tata_box),
        count_column(FEATURE_COLUMNS[5], records, |r| r.features.direct_repeats),
        count_column(FEATURE_COLUMNS[6], records, |r| r.features.length),
    ])
    .map_err(|e| MotifError::DataError(e.to_string()))?;

    Ok(df)
}

/// Appends a score column (named after the scorer) to a feature table.
///
/// # Errors
/// * Returns `MotifError::DataError` if the table height does not match `records`
pub fn append_scores(
    df: &mut FeatureTable,
    records: &[LabeledFeatures],
    scorer: &dyn Scorer,
) -> Result<()> {
    if df.height() != records.len() {
        return Err(MotifError::DataError(format!(
            "table has {} rows but {} records were scored",
            df.height(),
            records.len()
        )));
    }

    let matrix = feature_matrix(records);
    let scores: Vec<f64> = matrix.rows().into_iter().map(|row| scorer.score(row)).collect();
    df.with_column(Column::new(scorer.name().into(), scores))
        .map_err(|e| MotifError::DataError(e.to_string()))?;
    Ok(())
}

/// Spread of perplexity across a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerplexityStats {
    pub mean: f64,
    /// Sample standard deviation; NaN for a single record
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Batch-level totals of the feature table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub sequences: usize,
    pub total_length: usize,
    pub perplexity: Option<PerplexityStats>,
    pub g_quadruplex: usize,
    pub z_dna: usize,
    pub cruciform: usize,
    pub tata_box: usize,
    pub direct_repeats: usize,
}

pub fn summarize(records: &[LabeledFeatures]) -> BatchSummary {
    let perplexities: Vec<f64> = records.iter().map(|r| r.features.perplexity).collect();
    let perplexity = (!perplexities.is_empty()).then(|| PerplexityStats {
        mean: Statistics::mean(perplexities.iter()),
        std_dev: Statistics::std_dev(perplexities.iter()),
        min: Statistics::min(perplexities.iter()),
        max: Statistics::max(perplexities.iter()),
    });

    let total = |field: fn(&LabeledFeatures) -> usize| records.iter().map(field).sum::<usize>();

    BatchSummary {
        sequences: records.len(),
        total_length: total(|r| r.features.length),
        perplexity,
        g_quadruplex: total(|r| r.features.g_quadruplex),
        z_dna: total(|r| r.features.z_dna),
        cruciform: total(|r| r.features.cruciform),
        tata_box: total(|r| r.features.tata_box),
        direct_repeats: total(|r| r.features.direct_repeats),
    }
}
