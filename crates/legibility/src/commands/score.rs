//! Score command: all eight readability formulas for one input.

use std::sync::Arc;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use legibility_core::interpret::{self, Band};
use legibility_core::{
    Config, ExportFormat, ReadabilityCalculator, ReadabilityMetrics, ReferenceWordList,
    export_metrics,
};

use super::read_prose;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to score, or `-` for standard input. Markdown files are reduced
    /// to their prose first.
    pub file: Utf8PathBuf,

    /// Output format (defaults to the configured export format).
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Reference word list replacing the built-in Dale-Chall list.
    #[arg(long, value_name = "FILE")]
    pub word_list: Option<Utf8PathBuf>,

    /// Show only Gunning Fog, Flesch Reading Ease and Flesch-Kincaid.
    #[arg(long)]
    pub basic: bool,

    /// Leave derived averages out of JSON output.
    #[arg(long)]
    pub no_statistics: bool,

    /// Add the export time to JSON output.
    #[arg(long)]
    pub timestamp: bool,
}

/// Score the readability of a file.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(format = ?args.format, basic = args.basic, "executing score command");

    let text = read_prose(&args.file, max_input_bytes)?;
    let word_list = match args.word_list {
        Some(ref path) => Arc::new(
            ReferenceWordList::from_file(path)
                .with_context(|| format!("failed to load word list {path}"))?,
        ),
        None => config
            .reference_word_list()
            .context("failed to load configured word list")?,
    };

    let metrics = ReadabilityCalculator::new(word_list).calculate(&text);
    if metrics.is_empty() {
        tracing::warn!(file = %args.file, "no words found; all scores are zero");
    }

    let mut options = config.settings.export_options();
    if global_json {
        options.format = ExportFormat::Json;
    } else if let Some(format) = args.format {
        options.format = format;
    }
    if args.basic {
        options.include_advanced = false;
    }
    if args.no_statistics {
        options.include_statistics = false;
    }
    if args.timestamp {
        options.include_timestamp = true;
    }

    if options.format == ExportFormat::Text {
        print_colored(&metrics, options.include_advanced);
    } else {
        println!("{}", export_metrics(&text, &metrics, &options)?);
    }
    Ok(())
}

/// Terminal rendering of the text format, colored by band.
fn print_colored(metrics: &ReadabilityMetrics, include_advanced: bool) {
    println!(
        "{}",
        "Readability results".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    for i in interpret::interpret_all(metrics, include_advanced) {
        print_row(i.metric.label(), &format!("{:>6.1}", i.value), i.band, &i.label);
    }
    if include_advanced {
        let (label, band) = interpret::difficult_words(metrics.difficult_words);
        print_row(
            "Difficult Words",
            &format!("{:>6}", metrics.difficult_words),
            band,
            &label,
        );
    }
    println!();
    println!(
        "Words: {}  Sentences: {}  Syllables: {}  Characters: {}",
        metrics.word_count,
        metrics.sentence_count,
        metrics.syllable_count,
        metrics.character_count,
    );
}

fn print_row(name: &str, value: &str, band: Band, label: &str) {
    println!(
        "{name:<28} {}  {}",
        paint(value, band),
        label.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

fn paint(value: &str, band: Band) -> String {
    match band {
        Band::Good => value.if_supports_color(Stream::Stdout, |v| v.green()).to_string(),
        Band::Fair => value.if_supports_color(Stream::Stdout, |v| v.cyan()).to_string(),
        Band::Caution => value.if_supports_color(Stream::Stdout, |v| v.yellow()).to_string(),
        Band::Poor => value.if_supports_color(Stream::Stdout, |v| v.red()).to_string(),
    }
}
