use crate::error::{MotifError, Result};
use crate::types::SequenceRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn header_label(header: &str, position: usize) -> String {
    header
        .split_whitespace()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Seq_{}", position))
}

/// Splits FASTA or plain-text lines into labeled sequences.
///
/// Lines are trimmed and blank lines skipped. A `>` header opens a new record labeled
/// with the first word of the header, or `Seq_<n>` (1-based) when the header is blank.
/// Sequence lines are concatenated as-is; text without any header becomes a single
/// record. A header without sequence lines yields an empty record.
pub fn parse_lines<I, S>(lines: I) -> Vec<SequenceRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut current_label: Option<String> = None;
    let mut current_sequence = String::new();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(label) = current_label.take() {
                records.push(SequenceRecord::new(label, std::mem::take(&mut current_sequence)));
            } else if !current_sequence.is_empty() {
                // headerless lines before the first header
                records.push(SequenceRecord::positional(
                    records.len() + 1,
                    std::mem::take(&mut current_sequence),
                ));
            }
            current_label = Some(header_label(header, records.len() + 1));
        } else {
            current_sequence.push_str(line);
        }
    }

    match current_label {
        Some(label) => records.push(SequenceRecord::new(label, current_sequence)),
        None if !current_sequence.is_empty() => records.push(SequenceRecord::positional(
            records.len() + 1,
            current_sequence,
        )),
        None => {}
    }

    records
}

/// Parses FASTA or plain-text content held in memory. See [`parse_lines`].
pub fn parse_sequences(text: &str) -> Vec<SequenceRecord> {
    parse_lines(text.lines())
}

/// Reads sequences from a FASTA (`.fasta`, `.fa`, `.fna`) or plain-text file.
///
/// # Arguments
/// * `filename` - Path to the file to read
///
/// # Returns
/// * `Result<Vec<SequenceRecord>>` - Sequences in file order; case is preserved,
///   normalization happens at extraction time
///
/// # Errors
/// * Returns `MotifError::InvalidFileFormat` if no sequences are found
/// * Returns `MotifError::Io` for file reading issues
pub fn read_sequences(filename: impl AsRef<Path>) -> Result<Vec<SequenceRecord>> {
    let file = File::open(filename.as_ref())?;
    let reader = BufReader::new(file);
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;

    let records = parse_lines(lines);
    if records.is_empty() {
        return Err(MotifError::InvalidFileFormat("No sequences found".into()));
    }

    log::info!(
        "read {} sequences from {}",
        records.len(),
        filename.as_ref().display()
    );
    Ok(records)
}
