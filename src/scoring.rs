use crate::error::{MotifError, Result};
use crate::types::FEATURE_COLUMNS;
use ndarray::{Array1, ArrayView1};

/// Downstream model that turns a feature vector into a single prediction.
///
/// Feature vectors are ordered as [`FEATURE_COLUMNS`]. The extractor never calls a
/// scorer itself; scores are attached to a finished table with
/// [`crate::table::append_scores`].
pub trait Scorer: Send + Sync {
    /// Column name used for the scores
    fn name(&self) -> &str;

    fn score(&self, features: ArrayView1<f64>) -> f64;
}

/// Weighted sum of the features plus a bias, optionally squashed through a logistic link
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScorer {
    name: String,
    weights: Array1<f64>,
    bias: f64,
    logistic: bool,
}

impl LinearScorer {
    /// # Errors
    /// * `MotifError::InvalidParameter` unless there is exactly one weight per feature column
    pub fn new(name: impl Into<String>, weights: Vec<f64>, bias: f64) -> Result<Self> {
        if weights.len() != FEATURE_COLUMNS.len() {
            return Err(MotifError::invalid_parameter(
                "weights",
                weights.len(),
                format!("expected {} weights", FEATURE_COLUMNS.len()),
            ));
        }
        Ok(LinearScorer {
            name: name.into(),
            weights: Array1::from(weights),
            bias,
            logistic: false,
        })
    }

    /// Maps scores into (0, 1) with the logistic function
    pub fn with_logistic(mut self) -> Self {
        self.logistic = true;
        self
    }
}

impl Scorer for LinearScorer {
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, features: ArrayView1<f64>) -> f64 {
        let z = self.weights.dot(&features) + self.bias;
        if self.logistic {
            1.0 / (1.0 + (-z).exp())
        } else {
            z
        }
    }
}
