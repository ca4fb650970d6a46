use crate::types::MotifMatch;

/// Shortest repeat unit considered
pub const MIN_UNIT: usize = 3;
/// Longest repeat unit considered
pub const MAX_UNIT: usize = 6;

/// Number of back-to-back copies of `seq[start..start+unit]` beginning at `start`.
fn tandem_copies(seq: &[u8], start: usize, unit: usize) -> usize {
    let motif = &seq[start..start + unit];
    seq[start..]
        .chunks_exact(unit)
        .take_while(|chunk| *chunk == motif)
        .count()
}

/// Finds tandem direct repeats: a 3 to 6 symbol unit followed by at least one exact copy.
///
/// The scan runs left to right. At each position the longest unit that repeats
/// immediately is taken and the run is extended over every further copy, so a
/// maximal tandem run is reported once. Scanning resumes after the run, which keeps
/// matches non-overlapping.
pub fn find_direct_repeats(sequence: &str) -> Vec<MotifMatch> {
    let seq = sequence.as_bytes();
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos + 2 * MIN_UNIT <= seq.len() {
        let hit = (MIN_UNIT..=MAX_UNIT)
            .rev()
            .filter(|&unit| pos + 2 * unit <= seq.len())
            .map(|unit| (unit, tandem_copies(seq, pos, unit)))
            .find(|&(_, copies)| copies >= 2);

        match hit {
            Some((unit, copies)) => {
                let end = pos + unit * copies;
                matches.push(MotifMatch::new(pos, end));
                pos = end;
            }
            None => pos += 1,
        }
    }

    matches
}

/// Counts maximal tandem direct-repeat runs.
pub fn detect_direct_repeats(sequence: &str) -> usize {
    find_direct_repeats(sequence).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_run_counts_once() {
        assert_eq!(detect_direct_repeats("CAGCAGCAGCAG"), 1);
        assert_eq!(
            find_direct_repeats("TTCAGCAGCAGTT"),
            vec![MotifMatch::new(2, 11)]
        );
    }

    #[test]
    fn prefers_longest_unit() {
        // six-symbol unit is tried before the shorter ones
        assert_eq!(
            find_direct_repeats("ACGTACACGTAC"),
            vec![MotifMatch::new(0, 12)]
        );
    }

    #[test]
    fn homopolymer_run() {
        // unit AAAAAA copies once more, the trailing AAA is too short for a pair
        assert_eq!(
            find_direct_repeats("AAAAAAAAAAAAAAA"),
            vec![MotifMatch::new(0, 12)]
        );
    }

    #[test]
    fn no_repeat() {
        assert_eq!(detect_direct_repeats("ACGTTGCA"), 0);
        assert_eq!(detect_direct_repeats("ACGAC"), 0);
        assert_eq!(detect_direct_repeats(""), 0);
    }
}
