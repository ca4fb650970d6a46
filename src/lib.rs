//! Non-B DNA structural motif detection and sequence feature extraction in Rust
//!
//! Each sequence is reduced to a fixed feature record: k-mer perplexity plus counts of
//! G-quadruplex, Z-DNA, cruciform (inverted repeat), TATA-box and direct tandem repeat
//! motifs. Extraction is a pure function of the sequence, so batches run in parallel.
//!
//! ```
//! use nonb_motif_rs::features::extract_features;
//!
//! let record = extract_features("GGGTTTGGGTTTGGGTTTGGG").unwrap();
//! assert_eq!(record.g_quadruplex, 1);
//! assert_eq!(record.length, 21);
//! ```

pub mod alphabet;
pub mod batch;
pub mod cruciform;
pub mod error;
pub mod fasta;
pub mod features;
pub mod motifs;
pub mod perplexity;
pub mod repeats;
pub mod scoring;
pub mod table;
pub mod types;
