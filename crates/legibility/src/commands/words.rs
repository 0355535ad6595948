//! Words command: the most frequent words of a text.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use legibility_core::{Settings, WordFrequency, word_frequency};

use super::read_prose;

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// File to read, or `-` for standard input.
    pub file: Utf8PathBuf,

    /// Minimum number of occurrences (defaults to the configured value).
    #[arg(long)]
    pub min_freq: Option<usize>,

    /// Maximum number of words to list (defaults to the configured value).
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Keep common short words such as "the" and "and".
    #[arg(long)]
    pub keep_stop_words: bool,
}

/// List the most frequent words in a file.
#[instrument(name = "cmd_words", skip_all, fields(file = %args.file))]
pub fn cmd_words(
    args: WordsArgs,
    global_json: bool,
    settings: &Settings,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_freq = ?args.min_freq, max_words = ?args.max_words, "executing words command");

    let text = read_prose(&args.file, max_input_bytes)?;

    let mut options = settings.frequency_options();
    if let Some(min) = args.min_freq {
        options.min_frequency = min;
    }
    if let Some(max) = args.max_words {
        options.max_words = max;
    }
    if args.keep_stop_words {
        options.exclude_stop_words = false;
    }

    let words = word_frequency(&text, &options);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&words)?);
    } else if words.is_empty() {
        println!(
            "{}",
            format!(
                "No words appear at least {} times.",
                options.min_frequency
            )
            .if_supports_color(Stream::Stdout, |t| t.yellow())
        );
    } else {
        print_table(&words);
    }
    Ok(())
}

fn print_table(words: &[WordFrequency]) {
    let width = words.iter().map(|w| w.word.len()).max().unwrap_or(0);
    for w in words {
        // One block per 4 display points, so bars span 3 to 15 blocks
        let bar = "#".repeat(w.size / 4);
        let word = format!("{:<width$}", w.word);
        println!(
            "{}  {:>5}  {}",
            word.if_supports_color(Stream::Stdout, |t| t.bold()),
            w.count,
            bar.if_supports_color(Stream::Stdout, |t| t.cyan()),
        );
    }
}
