//! Word frequency summary, the input for a word cloud.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::word_lists::STOP_WORDS;

/// Smallest display size assigned to a word.
pub const MIN_DISPLAY_SIZE: usize = 12;

/// Largest display size assigned to a word.
pub const MAX_DISPLAY_SIZE: usize = 60;

/// Options for [`word_frequency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FrequencyOptions {
    /// Drop words seen fewer times than this.
    pub min_frequency: usize,
    /// Keep at most this many words.
    pub max_words: usize,
    /// Drop common short words such as "the" and "and".
    pub exclude_stop_words: bool,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            min_frequency: 3,
            max_words: 50,
            exclude_stop_words: true,
        }
    }
}

/// One word and how often it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordFrequency {
    /// The lowercased word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
    /// Display size, `count * 8` clamped to 12..=60.
    pub size: usize,
}

/// Summarize the most frequent words of a text.
///
/// Words of two characters or fewer are ignored. Results are sorted by
/// count, highest first; words with equal counts stay in the order they
/// first appeared.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn word_frequency(text: &str, options: &FrequencyOptions) -> Vec<WordFrequency> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in text::extract_words(text) {
        if word.len() <= 2 {
            continue;
        }
        if let Some(count) = counts.get_mut(&word) {
            *count += 1;
        } else {
            counts.insert(word.clone(), 1);
            order.push(word);
        }
    }

    let distinct = order.len();
    let mut frequencies: Vec<WordFrequency> = order
        .into_iter()
        .filter(|word| !(options.exclude_stop_words && STOP_WORDS.contains(word.as_str())))
        .filter_map(|word| {
            let count = counts[&word];
            (count >= options.min_frequency).then(|| WordFrequency {
                size: display_size(count),
                word,
                count,
            })
        })
        .collect();

    // sort_by is stable, so ties keep first-occurrence order
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies.truncate(options.max_words);

    tracing::debug!(distinct, kept = frequencies.len(), "summarized word frequency");
    frequencies
}

fn display_size(count: usize) -> usize {
    count
        .saturating_mul(8)
        .clamp(MIN_DISPLAY_SIZE, MAX_DISPLAY_SIZE)
}
