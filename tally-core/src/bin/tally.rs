//! `tally` CLI: corpus statistics from the command line.
//!
//! ```bash
//! # Summary, top words, top bigrams and length histogram
//! tally report data.csv
//!
//! # Only sentences of 5 to 12 tokens, as JSON
//! tally report data.csv --min 5 --max 12 --json
//!
//! # Analyze another column and save the filtered subset
//! tally report data.csv --text-field text --min 3 --export-csv filtered.csv
//!
//! # Turn a raw text file into a sentence,length dataset
//! tally build raw.txt data.csv --clean --min-length 3
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tally_core::corpus::{write_csv, write_json, Corpus};
use tally_core::{DatasetBuilder, Session};
use tally_types::{ExplorerConfig, LengthRange};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sentence corpus statistics", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a CSV corpus, filter it by length and print its statistics.
    Report {
        /// Input CSV file with a header row.
        input: PathBuf,

        /// JSON configuration file; flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Column holding the text to analyze.
        #[arg(long)]
        text_field: Option<String>,

        /// Minimum record length (inclusive).
        #[arg(long)]
        min: Option<u32>,

        /// Maximum record length (inclusive).
        #[arg(long)]
        max: Option<u32>,

        /// Number of words in the frequency table.
        #[arg(long)]
        top_words: Option<usize>,

        /// Number of bigrams in the bigram table.
        #[arg(long)]
        top_bigrams: Option<usize>,

        /// Number of length histogram buckets.
        #[arg(long)]
        bins: Option<usize>,

        /// Include full word weights for a word cloud.
        #[arg(long, conflicts_with = "no_word_cloud")]
        word_cloud: bool,

        /// Leave out the word cloud.
        #[arg(long)]
        no_word_cloud: bool,

        /// Print the report as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Write the filtered records to this CSV file.
        #[arg(long)]
        export_csv: Option<PathBuf>,

        /// Write the filtered records to this JSON file.
        #[arg(long)]
        export_json: Option<PathBuf>,
    },

    /// Build a sentence,length CSV from a raw text file (one sentence per line).
    Build {
        /// Raw UTF-8 text file.
        input: PathBuf,

        /// Output CSV file.
        output: PathBuf,

        /// Lowercase and strip punctuation before storing.
        #[arg(long, default_value_t = false)]
        clean: bool,

        /// Drop sentences with fewer tokens than this.
        #[arg(long, default_value_t = 0)]
        min_length: u32,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Commands::Report {
            input,
            config,
            text_field,
            min,
            max,
            top_words,
            top_bigrams,
            bins,
            word_cloud,
            no_word_cloud,
            json,
            export_csv,
            export_json,
        } => {
            let mut cfg = match config {
                Some(path) => ExplorerConfig::from_json_file(&path)?,
                None => ExplorerConfig::default(),
            };
            if let Some(field) = text_field {
                cfg.text_field = field;
            }
            if let Some(k) = top_words {
                cfg.top_words = k;
            }
            if let Some(k) = top_bigrams {
                cfg.top_bigrams = k;
            }
            if let Some(b) = bins {
                cfg.length_bins = b;
            }
            if word_cloud {
                cfg.enable_word_cloud = true;
            }
            if no_word_cloud {
                cfg.enable_word_cloud = false;
            }

            let mut session = Session::new(cfg)?;
            let corpus = session.load_path(&input)?;
            let range = LengthRange::new(min.unwrap_or(0), max.unwrap_or(u32::MAX))?;
            let report = session
                .report(range)
                .ok_or("no corpus loaded")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_preview(&corpus, &session);
                print!("{report}");
            }

            if export_csv.is_some() || export_json.is_some() {
                let filtered = corpus.filter(range);
                if let Some(path) = export_csv {
                    write_csv(&filtered, BufWriter::new(File::create(&path)?))?;
                    log::info!("exported {} records to {}", filtered.len(), path.display());
                }
                if let Some(path) = export_json {
                    write_json(&filtered, BufWriter::new(File::create(&path)?))?;
                    log::info!("exported {} records to {}", filtered.len(), path.display());
                }
            }
        }
        Commands::Build {
            input,
            output,
            clean,
            min_length,
        } => {
            let corpus = DatasetBuilder::new()
                .clean(clean)
                .min_length(min_length)
                .build_path(&input)?;
            write_csv(&corpus, BufWriter::new(File::create(&output)?))?;
            println!(
                "Wrote {} sentences to {}",
                group_digits(corpus.len()),
                display_name(&output)
            );
        }
    }
    Ok(())
}

fn print_preview(corpus: &Corpus, session: &Session) {
    let preview = session.preview();
    if preview.is_empty() {
        return;
    }

    println!("== Preview ({} of {}) ==", preview.len(), group_digits(corpus.len()));
    println!("{}", corpus.schema().columns().join(" | "));
    for record in preview {
        println!("{}", record.fields().join(" | "));
    }
    println!();
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Thousands-grouped count, e.g. `1,234,567`.
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        r => r,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..lead]);
    for (i, b) in digits[lead..].bytes().enumerate() {
        if i % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(b));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(123456), "123,456");
        assert_eq!(group_digits(1234567), "1,234,567");
    }

    #[test]
    fn display_name_prefers_file_name() {
        assert_eq!(display_name(Path::new("out/dir/data.csv")), "data.csv");
    }
}
