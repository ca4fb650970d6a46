mod cli;

use clap::Parser;
use cli::{init_verbose, Args};
use nonb_motif_rs::batch::extract_batch;
use nonb_motif_rs::error::MotifError;
use nonb_motif_rs::fasta::read_sequences;
use nonb_motif_rs::features::{scan_motifs, ExtractorConfig, MotifHit};
use nonb_motif_rs::scoring::LinearScorer;
use nonb_motif_rs::table::{append_scores, features_to_dataframe, summarize};
use nonb_motif_rs::types::SequenceRecord;
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ProfilerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Motif(#[from] MotifError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Defaults, then the optional JSON config file, then explicit flags.
fn load_config(args: &Args) -> Result<ExtractorConfig, ProfilerError> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => ExtractorConfig::default(),
    };

    if let Some(k) = args.kmer_size {
        config.kmer_size = k;
    }
    if let Some(min_len) = args.cruciform_min {
        config.cruciform.min_len = min_len;
    }
    if let Some(max_len) = args.cruciform_max {
        config.cruciform.max_len = max_len;
    }
    if let Some(spacer) = args.spacer {
        config.cruciform.spacer = spacer;
    }

    config.validate()?;
    Ok(config)
}

fn write_json_lines<T: Serialize>(path: &Path, items: &[T]) -> Result<(), ProfilerError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_table(df: &mut DataFrame, path: &Path) -> Result<(), ProfilerError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "csv" => {
            let mut file = File::create(path)?;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        "parquet" => {
            let file = File::create(path)?;
            ParquetWriter::new(file).finish(df)?;
        }
        "json" | "jsonl" => {
            let file = File::create(path)?;
            JsonWriter::new(file)
                .with_json_format(JsonFormat::JsonLines)
                .finish(df)?;
        }
        other => return Err(ProfilerError::UnsupportedFormat(other.to_string())),
    }
    Ok(())
}

#[derive(Serialize)]
struct LabeledHit<'a> {
    label: &'a str,
    #[serde(flatten)]
    hit: MotifHit,
}

fn write_motif_hits(
    path: &Path,
    sequences: &[SequenceRecord],
    config: &ExtractorConfig,
) -> Result<(), ProfilerError> {
    let mut hits = Vec::new();
    for record in sequences {
        match scan_motifs(&record.sequence, &config.cruciform) {
            Ok(found) => hits.extend(found.into_iter().map(|hit| LabeledHit {
                label: &record.label,
                hit,
            })),
            Err(e) => log::debug!("no motif scan for {}: {}", record.label, e),
        }
    }
    log::info!("writing {} motif hits to {}", hits.len(), path.display());
    write_json_lines(path, &hits)
}

fn runner(args: Args) -> Result<(), ProfilerError> {
    let start_time = std::time::Instant::now();

    // Create output directory if it doesn't exist
    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = load_config(&args)?;
    log::debug!("extraction parameters: {:?}", config);

    let sequences = read_sequences(&args.input)?;
    let outcome = extract_batch(&sequences, &config)?;
    for failure in &outcome.failures {
        log::warn!(
            "sequence {} ({}) was not analysed: {}",
            failure.index + 1,
            failure.label,
            failure.error
        );
    }
    log::info!(
        "{} of {} sequences analysed",
        outcome.records.len(),
        sequences.len()
    );

    let mut df = features_to_dataframe(&outcome.records)?;
    if let Some(weights) = &args.weights {
        let mut scorer = LinearScorer::new("prediction", weights.clone(), args.bias)?;
        if args.logistic {
            scorer = scorer.with_logistic();
        }
        append_scores(&mut df, &outcome.records, &scorer)?;
    }
    write_table(&mut df, &args.output)?;

    if let Some(motif_path) = &args.motifs {
        write_motif_hits(motif_path, &sequences, &config)?;
    }

    if args.summary {
        let summary = summarize(&outcome.records);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    log::info!(
        "Total execution time: {:.4} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_verbose(&args);
    log::info!("Running {}-{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = runner(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
