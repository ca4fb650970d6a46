use clap::{ArgAction, Parser};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "motif-profiler",
    about = "Profiles DNA sequences for non-B structural motifs and k-mer perplexity",
    long_about = "Reads sequences from a FASTA or plain-text file and computes, for every sequence, \
                  the k-mer perplexity and the number of G-quadruplex, Z-DNA, cruciform, TATA-box \
                  and direct tandem repeat motifs. Sequences that cannot be analysed are reported \
                  and skipped; the rest are written as a feature table.",
    version,
    after_help = "Example usage:\n    \
                  motif-profiler promoters.fasta features.csv --kmer-size 4\n    \
                  motif-profiler reads.txt features.parquet --motifs hits.jsonl -v",
    color = clap::ColorChoice::Always
)]
pub struct Args {
    /// Path to input sequences (FASTA or plain text, one sequence when headerless)
    #[arg(value_name = "SEQUENCE_FILE")]
    pub input: PathBuf,

    /// Path for the feature table (.csv, .parquet or .jsonl)
    /// Will create output directory if it doesn't exist
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// JSON file with extraction parameters; command line flags take precedence
    #[arg(long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// k-mer width of the perplexity model
    #[arg(short = 'k', long)]
    pub kmer_size: Option<usize>,

    /// Shortest cruciform arm
    #[arg(long)]
    pub cruciform_min: Option<usize>,

    /// Longest cruciform arm
    #[arg(long)]
    pub cruciform_max: Option<usize>,

    /// Number of symbols between cruciform arms
    #[arg(long)]
    pub spacer: Option<usize>,

    /// Comma separated weights of a linear scorer, one per feature column
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub weights: Option<Vec<f64>>,

    /// Bias of the linear scorer
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub bias: f64,

    /// Pass linear scores through a logistic link
    #[arg(long)]
    pub logistic: bool,

    /// Also write every motif hit (with positions) as JSON lines to this file
    #[arg(long, value_name = "MOTIF_FILE")]
    pub motifs: Option<PathBuf>,

    /// Print a batch summary as JSON to stdout
    #[arg(long)]
    pub summary: bool,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    pub verbosity: u8,
}

pub fn init_verbose(args: &Args) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}
