//! Tokenization: whitespace normalization, word extraction and sentence counting.
//!
//! Word extraction keeps ASCII letters, digits, underscores and apostrophes;
//! everything else separates words. Each extracted [`Token`] carries both its
//! lowercased form (used for scoring and list lookups) and the original-case
//! characters it came from (used only by the proper-noun heuristic).
//!
//! Sentence counting is a deliberately crude boundary heuristic: a run of
//! `.`, `!` or `?` ends a sentence when it is followed by whitespace and an
//! uppercase ASCII letter, or by the end of the text. Abbreviations and
//! decimals miscount. That is accepted.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of terminal punctuation.
static TERMINATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// A single word extracted from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased word, as scored and looked up in word lists.
    pub word: String,
    /// The same word with its original casing.
    pub original: String,
}

/// Output of [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    /// Whitespace-normalized input text.
    pub normalized: String,
    /// Words in original order.
    pub tokens: Vec<Token>,
    /// Number of sentences detected (never below 1).
    pub sentence_count: usize,
}

impl Tokenized {
    /// Iterate over the lowercased words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.word.as_str())
    }
}

/// Split text into words and count its sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Tokenized {
    let normalized = normalize_whitespace(text);
    let tokens = extract_tokens(&normalized);
    let sentence_count = count_sentences(&normalized);
    tracing::debug!(
        words = tokens.len(),
        sentences = sentence_count,
        "tokenized text"
    );

    Tokenized {
        normalized,
        tokens,
        sentence_count,
    }
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract lowercased words from text.
pub fn extract_words(text: &str) -> Vec<String> {
    extract_tokens(text).into_iter().map(|t| t.word).collect()
}

/// Extract words from text, keeping each word's original casing alongside.
///
/// Lowercasing happens per character before classification, so a character
/// whose lowercase form expands to several characters is split the same way
/// the lowercased text would be.
pub fn extract_tokens(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut original = String::new();

    for ch in text.chars() {
        let mut kept_original = false;
        for lower in ch.to_lowercase() {
            if is_word_char(lower) {
                if !kept_original {
                    original.push(ch);
                    kept_original = true;
                }
                word.push(lower);
            } else {
                flush_token(&mut tokens, &mut word, &mut original);
                kept_original = false;
            }
        }
    }
    flush_token(&mut tokens, &mut word, &mut original);

    tokens
}

/// Count sentences in (normalized, original-case) text. Always at least 1.
pub fn count_sentences(text: &str) -> usize {
    let boundaries = TERMINATOR_RUN
        .find_iter(text)
        .filter(|m| ends_sentence(&text[m.end()..]))
        .count();
    boundaries.max(1)
}

/// Whether the text following a punctuation run closes a sentence.
fn ends_sentence(rest: &str) -> bool {
    if rest.is_empty() {
        return true;
    }
    let after_space = rest.trim_start();
    after_space.len() < rest.len()
        && after_space
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\''
}

fn flush_token(tokens: &mut Vec<Token>, word: &mut String, original: &mut String) {
    if !word.is_empty() {
        tokens.push(Token {
            word: std::mem::take(word),
            original: std::mem::take(original),
        });
    }
    original.clear();
}
