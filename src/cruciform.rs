use crate::alphabet::complement;
use crate::error::{MotifError, Result};
use crate::types::MotifMatch;
use serde::{Deserialize, Serialize};

/// Arm and spacer geometry for the inverted-repeat scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CruciformParams {
    /// Shortest arm length tried
    pub min_len: usize,
    /// Longest arm length tried (inclusive)
    pub max_len: usize,
    /// Exact number of symbols between the two arms
    pub spacer: usize,
}

impl Default for CruciformParams {
    fn default() -> Self {
        CruciformParams {
            min_len: 4,
            max_len: 6,
            spacer: 10,
        }
    }
}

impl CruciformParams {
    pub fn new(min_len: usize, max_len: usize, spacer: usize) -> Result<Self> {
        let params = CruciformParams {
            min_len,
            max_len,
            spacer,
        };
        params.validate()?;
        Ok(params)
    }

    /// # Errors
    /// * `MotifError::InvalidParameter` if `min_len` is zero or exceeds `max_len`, or if
    ///   the widest pair `2 * max_len + spacer` does not fit in a `usize`
    pub fn validate(&self) -> Result<()> {
        if self.min_len == 0 {
            return Err(MotifError::invalid_parameter(
                "cruciform.min_len",
                self.min_len,
                "arm length must be positive",
            ));
        }
        if self.min_len > self.max_len {
            return Err(MotifError::invalid_parameter(
                "cruciform.min_len",
                self.min_len,
                format!("must not exceed max_len ({})", self.max_len),
            ));
        }
        if pair_span(self.max_len, self.spacer).is_none() {
            return Err(MotifError::invalid_parameter(
                "cruciform.spacer",
                self.spacer,
                format!("arms of {} plus spacer overflow", self.max_len),
            ));
        }
        Ok(())
    }
}

/// Width of an inverted-repeat pair, `None` on overflow
fn pair_span(arm: usize, spacer: usize) -> Option<usize> {
    arm.checked_mul(2).and_then(|w| w.checked_add(spacer))
}

/// True when `right` is the reverse complement of `left`.
fn is_inverted_pair(left: &[u8], right: &[u8]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .rev()
            .zip(right)
            .all(|(&l, &r)| complement(l) == r)
}

/// Finds every inverted-repeat pair `left . spacer . revcomp(left)`.
///
/// For each arm length `L` in `min_len..=max_len` and each start `i` with
/// `i + 2L + spacer <= len`, the arm `seq[i..i+L]` is compared with
/// `seq[i+L+spacer..i+2L+spacer]`. Hits for different `L` and `i` may overlap; each is
/// reported as `[i, i + 2L + spacer)`, ordered by arm length then start.
pub fn find_cruciforms(sequence: &str, params: &CruciformParams) -> Vec<MotifMatch> {
    let seq = sequence.as_bytes();
    let mut matches = Vec::new();

    for arm in params.min_len.max(1)..=params.max_len {
        // spans only grow with the arm length
        let span = match pair_span(arm, params.spacer) {
            Some(span) if span <= seq.len() => span,
            _ => break,
        };
        for i in 0..=(seq.len() - span) {
            let left = &seq[i..i + arm];
            let right = &seq[i + arm + params.spacer..i + span];
            if is_inverted_pair(left, right) {
                matches.push(MotifMatch::new(i, i + span));
            }
        }
    }

    matches
}

/// Counts inverted-repeat pairs that could extrude a cruciform.
pub fn detect_cruciform(sequence: &str, params: &CruciformParams) -> usize {
    find_cruciforms(sequence, params).len()
}
