use ndarray::Array1;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feature table with a "label" column followed by [`FEATURE_COLUMNS`]
pub type FeatureTable = DataFrame;

/// Column names of the fixed feature schema, in vector order
pub const FEATURE_COLUMNS: [&str; 7] = [
    "perplexity",
    "g_quadruplex",
    "z_dna",
    "cruciform",
    "tata_box",
    "direct_repeats",
    "length",
];

/// Half-open, zero-based interval `[start, end)` where a detector fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MotifMatch {
    pub start: usize,
    pub end: usize,
}

impl MotifMatch {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty motif match {start}..{end}");
        MotifMatch { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Structural motif families recognised by the detectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotifKind {
    GQuadruplex,
    ZDna,
    Cruciform,
    TataBox,
    DirectRepeat,
    Triplex,
}

impl MotifKind {
    pub const ALL: [MotifKind; 6] = [
        MotifKind::GQuadruplex,
        MotifKind::ZDna,
        MotifKind::Cruciform,
        MotifKind::TataBox,
        MotifKind::DirectRepeat,
        MotifKind::Triplex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MotifKind::GQuadruplex => "g_quadruplex",
            MotifKind::ZDna => "z_dna",
            MotifKind::Cruciform => "cruciform",
            MotifKind::TataBox => "tata_box",
            MotifKind::DirectRepeat => "direct_repeat",
            MotifKind::Triplex => "triplex",
        }
    }
}

impl fmt::Display for MotifKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input sequence with its caller-supplied (or positional) label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub label: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(label: impl Into<String>, sequence: impl Into<String>) -> Self {
        SequenceRecord {
            label: label.into(),
            sequence: sequence.into(),
        }
    }

    /// Labels the record `Seq_<n>`, where `n` is its 1-based position in the input
    pub fn positional(position: usize, sequence: impl Into<String>) -> Self {
        SequenceRecord::new(format!("Seq_{}", position), sequence)
    }
}

/// Fixed-schema feature vector computed from a single sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub perplexity: f64,
    pub g_quadruplex: usize,
    pub z_dna: usize,
    pub cruciform: usize,
    pub tata_box: usize,
    pub direct_repeats: usize,
    pub length: usize,
}

impl FeatureRecord {
    /// Numeric view of the record, ordered as [`FEATURE_COLUMNS`]
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from(vec![
            self.perplexity,
            self.g_quadruplex as f64,
            self.z_dna as f64,
            self.cruciform as f64,
            self.tata_box as f64,
            self.direct_repeats as f64,
            self.length as f64,
        ])
    }
}

/// A feature record tagged with the label of the sequence it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledFeatures {
    pub label: String,
    #[serde(flatten)]
    pub features: FeatureRecord,
}
